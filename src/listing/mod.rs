//! List-view plumbing: the paged-source seam and the query controller.

mod controller;
mod source;

pub use controller::{ListController, RequestTicket};
pub use source::PagedSource;
