//! # roster-config
//!
//! Layered configuration loading for Roster using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ROSTER_*` prefix, `__` as separator)
//! 2. Project-level `.roster/config.toml`
//! 3. User-level `~/.config/roster/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ROSTER_SERVER__TIMEZONE` -> `server.timezone`,
//! `ROSTER_TIMEZONES__NG` -> `timezones.NG`, etc. The `__` (double
//! underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use roster_config::RosterConfig;
//!
//! let config = RosterConfig::load_with_dotenv().expect("config");
//! let table = config.timezone_table();
//! assert!(!table.server_zone.is_empty());
//! ```

mod error;
mod general;
mod server;
mod timezones;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use server::ServerConfig;
pub use timezones::TimezoneTable;

use std::collections::HashMap;
use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub server: ServerConfig,

    /// Country code → IANA zone identifier for tenant-facing conversions.
    #[serde(default)]
    pub timezones: HashMap<String, String>,

    #[serde(default)]
    pub general: GeneralConfig,
}

impl RosterConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` — use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction or validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers
    /// on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".roster/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("ROSTER_").split("__"));

        figment
    }

    /// Snapshot the country→zone table plus canonical server zone as an
    /// immutable value, loaded once at startup and passed by reference to
    /// the timezone resolver.
    #[must_use]
    pub fn timezone_table(&self) -> TimezoneTable {
        TimezoneTable::new(self.server.timezone.clone(), self.timezones.clone())
    }

    /// Check invariants figment cannot express.
    ///
    /// The canonical server zone must be present: an empty string would
    /// silently degrade every stored timestamp to the UTC fallback.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty `server.timezone`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.timezone.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "server.timezone".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("roster").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or current dir
    /// looking for a `.env` file. Silently does nothing if none is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // Walk up at most 3 levels (crate -> crates/ -> workspace root)
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}
