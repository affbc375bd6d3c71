//! Canonical shapes for one page of results.

use serde::{Deserialize, Serialize};

/// Pagination metadata describing one page of a collection.
///
/// `total_pages` is always derived from `total` and `page_size`; it is never
/// taken from a wire payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Total number of items across all pages
    pub total: u64,

    /// Number of items per page
    pub page_size: u32,

    /// Current page number (1-based)
    pub page_number: u32,

    /// Total number of pages, `ceil(total / page_size)`
    pub total_pages: u32,
}

impl PageMetadata {
    /// Build metadata from the counts a backend reports.
    ///
    /// `total_pages` is 0 iff `total` is 0. A positive total with a zero
    /// page size collapses to a single page rather than dividing by zero.
    pub fn from_counts(total: u64, page_size: u32, page_number: u32) -> Self {
        let total_pages = if total == 0 {
            0
        } else if page_size == 0 {
            1
        } else {
            total.div_ceil(page_size as u64) as u32
        };
        Self {
            total,
            page_size,
            page_number,
            total_pages,
        }
    }

    pub fn empty() -> Self {
        Self {
            total: 0,
            page_size: 0,
            page_number: 0,
            total_pages: 0,
        }
    }
}

/// One page of results plus its metadata.
///
/// A view owns at most one of these at a time; each successful fetch replaces
/// it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub metadata: PageMetadata,
}

impl<T> PagedResult<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            metadata: PageMetadata::empty(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for PagedResult<T> {
    fn default() -> Self {
        Self::empty()
    }
}
