//! Settings configuration types

use serde::{Deserialize, Serialize};

/// General scan settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// How long an armed scan waits for a decode before giving up
    #[serde(default = "default_scan_timeout_ms")]
    pub scan_timeout_ms: u64,
}

fn default_scan_timeout_ms() -> u64 {
    crate::scanner::DEFAULT_SCAN_TIMEOUT.as_millis() as u64
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scan_timeout_ms: default_scan_timeout_ms(),
        }
    }
}

/// Remote product database settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseSettings {
    /// Base URL; products are fetched from `{base_url}/api/v0/product/{barcode}.json`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Sent with every request, as the database asks clients to identify themselves
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://world.openfoodfacts.org".to_string()
}

fn default_user_agent() -> String {
    format!("foodscan/{} (rust)", env!("CARGO_PKG_VERSION"))
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Stored dietary profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default)]
    pub diets: Vec<String>,
}
