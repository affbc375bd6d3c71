//! Query state and stale-response guarding for one paginated list view.

use crate::error::AppResult;
use crate::pagination::{PageQuery, PagedResult, SortKey};

use super::source::PagedSource;

/// Handle for one issued fetch.
///
/// Tickets carry a monotonically increasing id and a snapshot of the query
/// as of issue time, so a fetch still in flight is not affected by later
/// query changes.
#[derive(Debug, Clone)]
pub struct RequestTicket {
    id: u64,
    query: PageQuery,
}

impl RequestTicket {
    pub fn query(&self) -> &PageQuery {
        &self.query
    }
}

/// Holds the query state for one list view and the most recent result.
///
/// Changing the sort key or page size resets the page to 1 (the old page
/// boundaries are meaningless under the new ordering) and triggers exactly
/// one refetch. Changing the page triggers a refetch without range checks;
/// an out-of-range page comes back as an empty result, not an error.
///
/// Overlapping fetches are resolved by issue order, not completion order:
/// `complete` drops any response whose ticket is not the latest issued, so
/// the view always reflects the most recently requested state.
pub struct ListController<S: PagedSource> {
    source: S,
    query: PageQuery,
    issued: u64,
    current: PagedResult<S::Item>,
    last_error: Option<String>,
}

impl<S: PagedSource> ListController<S> {
    pub fn new(source: S) -> Self {
        Self::with_query(source, PageQuery::default())
    }

    pub fn with_query(source: S, query: PageQuery) -> Self {
        Self {
            source,
            query: query.normalize(),
            issued: 0,
            current: PagedResult::empty(),
            last_error: None,
        }
    }

    pub fn query(&self) -> &PageQuery {
        &self.query
    }

    pub fn current(&self) -> &PagedResult<S::Item> {
        &self.current
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Replace the sort key, reset to the first page, refetch.
    pub async fn set_sort(&mut self, sort: SortKey) {
        self.query.sort = sort;
        self.query.page = 1;
        self.refresh().await;
    }

    /// Replace the page size, reset to the first page, refetch.
    pub async fn set_page_size(&mut self, size: u32) {
        self.query = PageQuery::new(1, size, self.query.sort.clone());
        self.refresh().await;
    }

    /// Jump to a page (clamped to >= 1) and refetch.
    pub async fn set_page(&mut self, page: u32) {
        self.query.page = page.max(1);
        self.refresh().await;
    }

    /// Replace the whole query (the mount path) and fetch once.
    pub async fn mount(&mut self, query: PageQuery) {
        self.query = query.normalize();
        self.refresh().await;
    }

    /// Issue and await one fetch for the current query.
    pub async fn refresh(&mut self) {
        let ticket = self.issue();
        let outcome = self.source.fetch_page(ticket.query()).await;
        self.complete(ticket, outcome);
    }

    /// Reserve the next request id, snapshotting the current query.
    pub fn issue(&mut self) -> RequestTicket {
        self.issued += 1;
        RequestTicket {
            id: self.issued,
            query: self.query.clone(),
        }
    }

    /// Apply the outcome of an issued fetch.
    ///
    /// Returns false (and leaves the view untouched) when a newer request
    /// was issued after this ticket. A failure records a user-visible
    /// message and keeps the previous rows.
    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        outcome: AppResult<PagedResult<S::Item>>,
    ) -> bool {
        if ticket.id != self.issued {
            tracing::debug!(
                ticket = ticket.id,
                latest = self.issued,
                "dropping stale list response"
            );
            return false;
        }

        match outcome {
            Ok(result) => {
                self.current = result;
                self.last_error = None;
            }
            Err(err) => {
                self.last_error = Some(err.user_message());
            }
        }
        true
    }
}
