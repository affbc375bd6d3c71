use async_trait::async_trait;

use crate::error::AppResult;
use crate::listing::PagedSource;
use crate::models::Order;
use crate::pagination::{PageQuery, PagedResult};

use super::paged::fetch_paged;

const SERVICE: &str = "orders";
const SEARCH_PATH: &str = "/orders/search";

/// Client for the order service admin API.
#[derive(Debug, Clone)]
pub struct OrdersClient {
    base_url: String,
}

impl OrdersClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub async fn search(&self, query: &PageQuery) -> AppResult<PagedResult<Order>> {
        fetch_paged(SERVICE, &self.base_url, SEARCH_PATH, query).await
    }
}

#[async_trait]
impl PagedSource for OrdersClient {
    type Item = Order;

    async fn fetch_page(&self, query: &PageQuery) -> AppResult<PagedResult<Order>> {
        self.search(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires a running order service"]
    async fn search_returns_first_page() {
        let client = OrdersClient::new("http://localhost:8080/api/admin/v1");
        let result = client.search(&PageQuery::default()).await;
        assert!(result.is_ok());
    }
}
