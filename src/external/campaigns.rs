use reqwest::StatusCode;

use crate::error::{AppError, AppResult};
use crate::models::{BaseResponse, Campaign, CampaignDraft, IphoneWinner};

use super::client::HTTP_CLIENT;
use super::paged::failure_detail;

const SERVICE: &str = "campaigns";
const IPHONE_PATH: &str = "/campaigns/iphones";
const WINNERS_PATH: &str = "/campaigns/iphones/winners";

/// Client for the campaign service admin API.
#[derive(Debug, Clone)]
pub struct CampaignsClient {
    base_url: String,
}

impl CampaignsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Create the iPhone campaign.
    pub async fn create(&self, draft: &CampaignDraft) -> AppResult<Campaign> {
        let url = format!("{}{IPHONE_PATH}", self.base_url);
        let response = HTTP_CLIENT
            .post(&url)
            .json(draft)
            .send()
            .await
            .map_err(|err| Self::request_failed("create", err))?;
        Self::decode(response).await
    }

    /// Fetch the current iPhone campaign, if one exists.
    ///
    /// Returns `Ok(None)` only for a definite HTTP 404. A transport failure
    /// or 5xx is an error, never silently read as "no campaign".
    pub async fn current(&self) -> AppResult<Option<Campaign>> {
        let url = format!("{}{IPHONE_PATH}", self.base_url);
        let response = HTTP_CLIENT
            .get(&url)
            .send()
            .await
            .map_err(|err| Self::request_failed("current", err))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::decode(response).await.map(Some)
    }

    /// Update an existing campaign. The id travels in the URL.
    pub async fn update(&self, id: i64, draft: &CampaignDraft) -> AppResult<Campaign> {
        let url = format!("{}{IPHONE_PATH}/{id}", self.base_url);
        let response = HTTP_CLIENT
            .put(&url)
            .json(draft)
            .send()
            .await
            .map_err(|err| Self::request_failed("update", err))?;
        Self::decode(response).await
    }

    /// Fetch the campaign winners.
    pub async fn winners(&self) -> AppResult<Vec<IphoneWinner>> {
        let url = format!("{}{WINNERS_PATH}", self.base_url);
        let response = HTTP_CLIENT
            .get(&url)
            .send()
            .await
            .map_err(|err| Self::request_failed("winners", err))?;
        Self::decode(response).await
    }

    fn request_failed(operation: &str, err: reqwest::Error) -> AppError {
        let failure = AppError::transport(
            SERVICE,
            format!("{operation} request failed: {err}"),
            Some(err.into()),
        );
        tracing::error!(service = SERVICE, operation, error = %failure, "campaign request failed");
        failure
    }

    /// Unwrap a `{data: ...}` envelope, mapping non-2xx statuses to
    /// transport failures.
    async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> AppResult<T> {
        let status = response.status();
        if !status.is_success() {
            let failure = AppError::transport(SERVICE, failure_detail(status, response).await, None);
            tracing::error!(service = SERVICE, error = %failure, "campaign request failed");
            return Err(failure);
        }

        let envelope: BaseResponse<T> = response.json().await.map_err(|err| {
            AppError::transport(
                SERVICE,
                format!("invalid response body: {err}"),
                Some(err.into()),
            )
        })?;
        Ok(envelope.data)
    }
}
