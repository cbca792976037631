use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;

/// Paging and filter parameters for a book listing.
///
/// Values are passed to the server verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingQuery {
    pub page: u32,
    pub limit: u32,
    #[serde(default)]
    pub q: Option<String>,
}

impl ListingQuery {
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit, q: None }
    }

    pub fn with_filter(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    /// Query string pairs in wire order. An empty filter is left out.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("_page", self.page.to_string()),
            ("_limit", self.limit.to_string()),
        ];
        if let Some(q) = self.q.as_deref().filter(|q| !q.is_empty()) {
            params.push(("q", q.to_string()));
        }
        params
    }
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_LIMIT)
    }
}
