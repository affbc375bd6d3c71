use async_trait::async_trait;

use crate::error::AppResult;
use crate::pagination::{PageQuery, PagedResult};

/// Anything that can serve one page of a resource collection.
///
/// The backend clients implement this; tests implement it with canned pages.
#[async_trait]
pub trait PagedSource: Send + Sync {
    type Item: Send;

    async fn fetch_page(&self, query: &PageQuery) -> AppResult<PagedResult<Self::Item>>;
}
