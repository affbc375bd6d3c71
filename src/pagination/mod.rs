//! Pagination core shared by every list view.
//!
//! - `query` - page/size/sort state sent to the backends
//! - `meta` - canonical page metadata and the `PagedResult` wrapper
//! - `normalize` - dual-casing payload normalization
//! - `window` - pure page-window math for pagination controls

mod meta;
mod normalize;
mod query;
mod window;

pub use meta::{PageMetadata, PagedResult};
pub use normalize::normalize;
pub use query::{DEFAULT_PAGE_SIZE, PageQuery, SortDirection, SortKey};
pub use window::{MAX_VISIBLE_PAGES, item_range, visible_pages};
