//! Domain models mirrored from the backend services.
//!
//! - `order` - order service rows
//! - `payment` - payment service rows
//! - `campaign` - campaign, draft payload, winners

mod campaign;
mod order;
mod payment;

pub use campaign::{Campaign, CampaignDraft, CampaignPolicy, IphoneWinner};
pub use order::Order;
pub use payment::Payment;

use serde::Deserialize;

/// Envelope the backend services wrap single resources in.
#[derive(Debug, Deserialize)]
pub struct BaseResponse<T> {
    #[serde(alias = "Data")]
    pub data: T,
}

/// Error body the backend services return alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default)]
    pub code: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_response_accepts_both_casings() {
        let lower: BaseResponse<i32> = serde_json::from_str(r#"{"data": 1}"#).unwrap();
        let upper: BaseResponse<i32> = serde_json::from_str(r#"{"Data": 1}"#).unwrap();
        assert_eq!(lower.data, upper.data);
    }

    #[test]
    fn error_response_code_defaults_to_zero() {
        let err: ErrorResponse = serde_json::from_str(r#"{"error": "boom"}"#).unwrap();
        assert_eq!(err.error, "boom");
        assert_eq!(err.code, 0);
    }
}
