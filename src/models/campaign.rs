use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Reward policy attached to a campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignPolicy {
    pub total_reward: i64,
    pub min_order_amount: i64,
    pub max_tracked_orders: i64,
}

/// A marketing campaign as stored by the campaign service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub policy: CampaignPolicy,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Payload for creating or updating the iPhone campaign.
///
/// Create and update take the same fields; on update the campaign id travels
/// in the URL, not the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_time_window"))]
pub struct CampaignDraft {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    pub start_time: Timestamp,
    pub end_time: Timestamp,

    #[validate(range(min = 1, message = "Total reward must be at least 1"))]
    pub total_reward: i64,

    #[validate(range(min = 0, message = "Minimum order amount cannot be negative"))]
    pub min_order_amount: i64,

    #[validate(range(min = 1, message = "Max tracked orders must be at least 1"))]
    pub max_tracked_orders: i64,
}

fn validate_time_window(draft: &CampaignDraft) -> Result<(), ValidationError> {
    if draft.end_time <= draft.start_time {
        return Err(ValidationError::new("time_window")
            .with_message("End time must be after start time".into()));
    }
    Ok(())
}

/// One winner of the iPhone campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IphoneWinner {
    pub customer_id: String,
    pub customer_name: String,
    pub first_order_time: Timestamp,
    pub max_total_order_amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn draft() -> CampaignDraft {
        CampaignDraft {
            name: "iPhone giveaway".into(),
            description: "First orders win".into(),
            start_time: "2026-08-01T00:00:00Z".parse().unwrap(),
            end_time: "2026-09-01T00:00:00Z".parse().unwrap(),
            total_reward: 10,
            min_order_amount: 100,
            max_tracked_orders: 1000,
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut d = draft();
        d.name.clear();
        assert!(d.validate().is_err());
    }

    #[test]
    fn inverted_time_window_is_rejected() {
        let mut d = draft();
        d.end_time = d.start_time;
        assert!(d.validate().is_err());
    }

    #[test]
    fn zero_reward_is_rejected() {
        let mut d = draft();
        d.total_reward = 0;
        assert!(d.validate().is_err());
    }

    #[test]
    fn campaign_deserializes_with_type_field() {
        let campaign: Campaign = serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "iPhone giveaway",
            "type": "iphone",
            "description": "First orders win",
            "policy": {"total_reward": 10, "min_order_amount": 100, "max_tracked_orders": 1000},
            "start_time": "2026-08-01T00:00:00Z",
            "end_time": "2026-09-01T00:00:00Z",
            "created_at": "2026-07-30T00:00:00Z",
            "updated_at": "2026-07-30T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(campaign.kind, "iphone");
        assert_eq!(campaign.policy.total_reward, 10);
    }
}
