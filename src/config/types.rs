use serde::{Deserialize, Serialize};

use crate::api::query::{DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::api::ListingQuery;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub listing: ListingDefaults,
}

/// Connection settings for the book API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API (e.g., "http://localhost:5000").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Paging used when the user does not pass any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingDefaults {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for ListingDefaults {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

impl ListingDefaults {
    /// Build a query, filling in any missing paging from these defaults.
    pub fn query(&self, page: Option<u32>, limit: Option<u32>, q: Option<String>) -> ListingQuery {
        ListingQuery {
            page: page.unwrap_or(self.page),
            limit: limit.unwrap_or(self.limit),
            q,
        }
    }
}
