use async_trait::async_trait;

use crate::error::AppResult;
use crate::listing::PagedSource;
use crate::models::Payment;
use crate::pagination::{PageQuery, PagedResult};

use super::paged::fetch_paged;

const SERVICE: &str = "payments";
const SEARCH_PATH: &str = "/payments/search";

/// Client for the payment service admin API.
#[derive(Debug, Clone)]
pub struct PaymentsClient {
    base_url: String,
}

impl PaymentsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub async fn search(&self, query: &PageQuery) -> AppResult<PagedResult<Payment>> {
        fetch_paged(SERVICE, &self.base_url, SEARCH_PATH, query).await
    }
}

#[async_trait]
impl PagedSource for PaymentsClient {
    type Item = Payment;

    async fn fetch_page(&self, query: &PageQuery) -> AppResult<PagedResult<Payment>> {
        self.search(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires a running payment service"]
    async fn search_returns_first_page() {
        let client = PaymentsClient::new("http://localhost:8081/api/admin/v1");
        let result = client.search(&PageQuery::default()).await;
        assert!(result.is_ok());
    }
}
