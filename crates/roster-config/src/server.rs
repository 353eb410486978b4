//! Canonical server configuration.

use serde::{Deserialize, Serialize};

/// Default canonical zone when nothing is configured.
fn default_timezone() -> String {
    "UTC".to_string()
}

/// Server-wide settings. `timezone` is the canonical zone in which all
/// timestamps are stored at rest.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// IANA zone identifier, e.g. `"UTC"` or `"Europe/Berlin"`.
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
        }
    }
}
