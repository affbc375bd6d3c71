use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// One payment row from the payment service admin search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub order_id: String,
    pub customer_id: String,
    pub total_amount: f64,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
