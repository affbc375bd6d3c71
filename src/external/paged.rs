//! Generic paginated fetch shared by every list resource.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::models::ErrorResponse;
use crate::pagination::{PageQuery, PagedResult, normalize};

use super::client::HTTP_CLIENT;

/// Issue one GET for a page of `path` under `base_url` and normalize the
/// reply.
///
/// Failure modes:
/// - transport error or non-2xx status: `AppError::Transport`, logged, no
///   retry;
/// - 2xx with a body that is not JSON: treated as an unusable payload and
///   normalized to an empty page rather than an error.
pub async fn fetch_paged<T: DeserializeOwned>(
    service: &str,
    base_url: &str,
    path: &str,
    query: &PageQuery,
) -> AppResult<PagedResult<T>> {
    let url = format!("{base_url}{path}");

    let response = HTTP_CLIENT
        .get(&url)
        .query(&query.to_params())
        .send()
        .await
        .map_err(|err| {
            let failure =
                AppError::transport(service, format!("request failed: {err}"), Some(err.into()));
            tracing::error!(service, url = %url, error = %failure, "list fetch failed");
            failure
        })?;

    let status = response.status();
    if !status.is_success() {
        let failure = AppError::transport(service, failure_detail(status, response).await, None);
        tracing::error!(service, url = %url, error = %failure, "list fetch failed");
        return Err(failure);
    }

    let body: Value = match response.json().await {
        Ok(body) => body,
        Err(err) => {
            tracing::warn!(service, url = %url, error = %err, "response body is not JSON, treating as empty page");
            return Ok(PagedResult::empty());
        }
    };

    Ok(normalize(body))
}

/// Fold the backend's `{error, code}` body into the failure message when the
/// body parses; otherwise report the bare status.
pub(super) async fn failure_detail(
    status: reqwest::StatusCode,
    response: reqwest::Response,
) -> String {
    match response.json::<ErrorResponse>().await {
        Ok(body) => format!("HTTP {status}: {}", body.error),
        Err(_) => format!("HTTP {status}"),
    }
}
