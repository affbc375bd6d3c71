//! Pure page-window math for pagination controls.

/// Number of page buttons a pagination control shows by default.
pub const MAX_VISIBLE_PAGES: u32 = 5;

/// Compute the window of page numbers a pagination control should show.
///
/// The window slides with the current page, stays centered where possible,
/// and is clamped at both ends so it always holds
/// `min(max_visible, total_pages)` entries. Empty when there are no pages.
pub fn visible_pages(current: u32, total_pages: u32, max_visible: u32) -> Vec<u32> {
    if total_pages == 0 || max_visible == 0 {
        return Vec::new();
    }

    let mut start = current.saturating_sub(max_visible / 2).max(1);
    let end = start.saturating_add(max_visible - 1).min(total_pages);
    if end.saturating_sub(start) + 1 < max_visible {
        start = end.saturating_sub(max_visible - 1).max(1);
    }

    (start..=end).collect()
}

/// One-based item range a page covers, for "Showing X to Y of Z" displays.
pub fn item_range(page_number: u32, page_size: u32, total: u64) -> (u64, u64) {
    let page = page_number.max(1) as u64;
    let size = page_size as u64;
    let start = (page - 1) * size + 1;
    let end = (page * size).min(total);
    (start, end)
}
