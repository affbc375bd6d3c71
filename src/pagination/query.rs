//! Query state for paginated list requests.

use std::fmt;

/// Default page size used by every list view.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Sort direction encoded in a sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// A sort key as it travels on the wire: a field name with an optional
/// leading `-` for descending order (`-created_at`, `total_amount`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    field: String,
    direction: SortDirection,
}

impl SortKey {
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Descending,
        }
    }

    /// Parse the wire form. A leading `-` means descending.
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix('-') {
            Some(field) => Self::descending(field),
            None => Self::ascending(raw),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            SortDirection::Ascending => write!(f, "{}", self.field),
            SortDirection::Descending => write!(f, "-{}", self.field),
        }
    }
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::descending("created_at")
    }
}

/// Query parameters for one page of a list view.
///
/// `page` and `size` are always at least 1; `normalize` clamps anything a
/// caller slips through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    /// Page number (1-based)
    pub page: u32,

    /// Number of items per page
    pub size: u32,

    /// Sort key sent as the `sort` query parameter
    pub sort: SortKey,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 1,
            size: DEFAULT_PAGE_SIZE,
            sort: SortKey::default(),
        }
    }
}

impl PageQuery {
    pub fn new(page: u32, size: u32, sort: SortKey) -> Self {
        Self { page, size, sort }.normalize()
    }

    /// Clamps page and size into their valid range.
    pub fn normalize(mut self) -> Self {
        if self.page == 0 {
            self.page = 1;
        }
        if self.size == 0 {
            self.size = DEFAULT_PAGE_SIZE;
        }
        self
    }

    /// Render the query as `page`/`size`/`sort` request parameters.
    pub fn to_params(&self) -> [(&'static str, String); 3] {
        [
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
            ("sort", self.sort.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_key_parses_descending_prefix() {
        let key = SortKey::parse("-created_at");
        assert_eq!(key.field(), "created_at");
        assert_eq!(key.direction(), SortDirection::Descending);
        assert_eq!(key.to_string(), "-created_at");
    }

    #[test]
    fn sort_key_parses_ascending() {
        let key = SortKey::parse("total_amount");
        assert_eq!(key.field(), "total_amount");
        assert_eq!(key.direction(), SortDirection::Ascending);
        assert_eq!(key.to_string(), "total_amount");
    }

    #[test]
    fn defaults_match_list_views() {
        let query = PageQuery::default();
        assert_eq!(query.page, 1);
        assert_eq!(query.size, 20);
        assert_eq!(query.sort.to_string(), "-created_at");
    }

    #[test]
    fn normalize_clamps_zero_page_and_size() {
        let query = PageQuery::new(0, 0, SortKey::default());
        assert_eq!(query.page, 1);
        assert_eq!(query.size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn params_render_wire_form() {
        let query = PageQuery::new(3, 50, SortKey::descending("total_amount"));
        let params = query.to_params();
        assert_eq!(params[0], ("page", "3".to_string()));
        assert_eq!(params[1], ("size", "50".to_string()));
        assert_eq!(params[2], ("sort", "-total_amount".to_string()));
    }
}
