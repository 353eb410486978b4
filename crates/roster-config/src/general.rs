//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default page size for list queries.
const fn default_page_size() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Path to the libSQL database file.
    #[serde(default)]
    pub db_path: String,

    /// Default page size for list queries.
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            db_path: String::new(),
            default_page_size: default_page_size(),
        }
    }
}
