//! Create-or-update flow for the iPhone campaign page.

use validator::Validate;

use crate::error::AppResult;
use crate::external::CampaignsClient;
use crate::models::{Campaign, CampaignDraft, IphoneWinner};

/// Which form the campaigns page should present.
#[derive(Debug, Clone, PartialEq)]
pub enum CampaignForm {
    /// No campaign exists yet; offer the create form.
    Create,
    /// A campaign exists; offer the update form pre-filled with it.
    Update(Campaign),
}

/// Service for managing the iPhone campaign.
#[derive(Debug, Clone)]
pub struct CampaignService {
    client: CampaignsClient,
}

impl CampaignService {
    pub fn new(client: CampaignsClient) -> Self {
        Self { client }
    }

    /// Decide which form to present.
    ///
    /// Only a definite 404 means "no campaign yet". A failed request
    /// propagates; offering the create form because the campaign service
    /// was unreachable would invite a duplicate create.
    pub async fn load_form(&self) -> AppResult<CampaignForm> {
        match self.client.current().await? {
            Some(campaign) => Ok(CampaignForm::Update(campaign)),
            None => Ok(CampaignForm::Create),
        }
    }

    /// Validate and create the campaign, then refetch the stored record.
    ///
    /// The refetch replaces the original portal's whole-page reload: only
    /// this resource is invalidated. If the refetch misses, the created
    /// record from the POST response is returned as-is.
    pub async fn create(&self, draft: &CampaignDraft) -> AppResult<Campaign> {
        draft.validate()?;
        let created = self.client.create(draft).await?;
        match self.client.current().await {
            Ok(Some(stored)) => Ok(stored),
            Ok(None) | Err(_) => Ok(created),
        }
    }

    /// Validate and update an existing campaign.
    pub async fn update(&self, id: i64, draft: &CampaignDraft) -> AppResult<Campaign> {
        draft.validate()?;
        self.client.update(id, draft).await
    }

    /// Fetch the campaign winners.
    pub async fn winners(&self) -> AppResult<Vec<IphoneWinner>> {
        self.client.winners().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

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

    #[tokio::test]
    async fn create_rejects_invalid_draft_before_any_request() {
        // Unroutable base URL: a request would fail with Transport, so a
        // Validation error proves the draft was rejected client-side.
        let service = CampaignService::new(CampaignsClient::new("http://localhost:1"));
        let mut bad = draft();
        bad.name.clear();

        let err = service.create(&bad).await.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn update_rejects_invalid_draft_before_any_request() {
        let service = CampaignService::new(CampaignsClient::new("http://localhost:1"));
        let mut bad = draft();
        bad.total_reward = 0;

        let err = service.update(1, &bad).await.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }
}
