//! The static tenant timezone table.
//!
//! Country code → IANA zone mapping, loaded once at process start and
//! treated as read-only for the process lifetime. Lookup is case-insensitive;
//! an absent mapping is never an error — callers fall back to the canonical
//! server zone.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Immutable country→zone table plus the canonical server zone.
///
/// Built by [`crate::RosterConfig::timezone_table`] and passed by reference
/// to the timezone resolver; never a hidden global.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimezoneTable {
    /// Canonical server zone identifier.
    pub server_zone: String,

    /// Country code (uppercase) → IANA zone identifier.
    pub mappings: HashMap<String, String>,
}

impl TimezoneTable {
    /// Build a table, normalizing country codes to uppercase.
    #[must_use]
    pub fn new(server_zone: impl Into<String>, mappings: HashMap<String, String>) -> Self {
        Self {
            server_zone: server_zone.into(),
            mappings: mappings
                .into_iter()
                .map(|(code, zone)| (code.to_uppercase(), zone))
                .collect(),
        }
    }

    /// Zone identifier for a country code, if mapped. Case-insensitive.
    #[must_use]
    pub fn zone_for(&self, country_code: &str) -> Option<&str> {
        self.mappings
            .get(&country_code.to_uppercase())
            .map(String::as_str)
    }
}
