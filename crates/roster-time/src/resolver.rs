//! Tenant timezone resolution.

use std::collections::HashMap;

use chrono_tz::Tz;
use roster_config::TimezoneTable;
use tracing::warn;

/// Maps a tenant country code to an IANA zone.
///
/// Built once at startup from the immutable [`TimezoneTable`]. Resolution
/// never fails: an unknown code, or a mapping whose zone string does not
/// parse, falls back to the canonical server zone; an unparsable server zone
/// falls back to UTC.
#[derive(Debug, Clone)]
pub struct TimezoneResolver {
    server_zone: Tz,
    mappings: HashMap<String, Tz>,
}

impl TimezoneResolver {
    /// Build a resolver from the configured table.
    ///
    /// Unparsable zone identifiers are dropped with a warning rather than
    /// failing startup.
    #[must_use]
    pub fn from_table(table: &TimezoneTable) -> Self {
        let server_zone = table.server_zone.parse::<Tz>().unwrap_or_else(|_| {
            warn!(zone = %table.server_zone, "unrecognized server zone, falling back to UTC");
            Tz::UTC
        });

        let mappings = table
            .mappings
            .iter()
            .filter_map(|(code, zone)| match zone.parse::<Tz>() {
                Ok(tz) => Some((code.to_uppercase(), tz)),
                Err(_) => {
                    warn!(country = %code, zone = %zone, "unrecognized zone in timezone table, dropping mapping");
                    None
                }
            })
            .collect();

        Self {
            server_zone,
            mappings,
        }
    }

    /// The canonical server zone.
    #[must_use]
    pub const fn server_zone(&self) -> Tz {
        self.server_zone
    }

    /// Resolve a country code to a zone. Case-insensitive; absence of a
    /// mapping is the defined fallback (server zone), not an error.
    #[must_use]
    pub fn resolve(&self, country_code: &str) -> Tz {
        self.mappings
            .get(&country_code.to_uppercase())
            .copied()
            .unwrap_or(self.server_zone)
    }
}
