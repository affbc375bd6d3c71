use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// One order row from the order service admin search.
///
/// `status` stays a free string: the portal only renders it, and an enum
/// would turn every new backend status into a dropped row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub total_amount: f64,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_row() {
        let order: Order = serde_json::from_value(serde_json::json!({
            "id": "d1g3nq2hr4b2c",
            "customer_id": "cust-17",
            "customer_name": "Ada",
            "total_amount": 129.5,
            "status": "COMPLETED",
            "created_at": "2026-01-05T10:30:00Z",
            "updated_at": "2026-01-05T10:31:00Z"
        }))
        .unwrap();
        assert_eq!(order.customer_name, "Ada");
        assert_eq!(order.status, "COMPLETED");
    }
}
