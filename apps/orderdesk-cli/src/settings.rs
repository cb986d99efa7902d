//! # Order Settings
//!
//! Loads the assembly limits that seed the shared configuration.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     ORDERDESK_MAX_ITEMS_PER_ORDER=20                                   │
//! │     ORDERDESK_DEFAULT_CURRENCY=USD                                     │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, or                                                │
//! │     ~/.config/orderdesk/orderdesk.toml (Linux)                         │
//! │     ~/Library/Application Support/com.orderdesk.orderdesk/... (macOS)  │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     50 items per order, BRL                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # orderdesk.toml
//! [orders]
//! max_items_per_order = 50
//! default_currency = "BRL"
//! ```

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use orderdesk_core::validation::{validate_currency_code, validate_max_items};
use orderdesk_core::{ConfigValues, ValidationError, DEFAULT_CURRENCY, DEFAULT_MAX_ITEMS_PER_ORDER};

/// Environment variable overriding the item cap.
pub const ENV_MAX_ITEMS: &str = "ORDERDESK_MAX_ITEMS_PER_ORDER";

/// Environment variable overriding the default currency.
pub const ENV_CURRENCY: &str = "ORDERDESK_DEFAULT_CURRENCY";

const SETTINGS_FILE: &str = "orderdesk.toml";

// =============================================================================
// Settings Error
// =============================================================================

/// Failures while loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file is not valid TOML for [`OrderSettings`].
    #[error("Failed to parse settings file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value was read but breaks a rule.
    #[error("Invalid settings: {0}")]
    Invalid(#[from] ValidationError),
}

pub type SettingsResult<T> = Result<T, SettingsError>;

// =============================================================================
// Order Settings
// =============================================================================

/// The `[orders]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblySettings {
    /// Maximum `add_item` calls per order. Must be positive.
    #[serde(default = "default_max_items")]
    pub max_items_per_order: i64,

    /// ISO 4217 code shown next to totals.
    #[serde(default = "default_currency")]
    pub default_currency: String,
}

fn default_max_items() -> i64 {
    DEFAULT_MAX_ITEMS_PER_ORDER as i64
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Default for AssemblySettings {
    fn default() -> Self {
        AssemblySettings {
            max_items_per_order: default_max_items(),
            default_currency: default_currency(),
        }
    }
}

/// Complete settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSettings {
    #[serde(default)]
    pub orders: AssemblySettings,
}

impl OrderSettings {
    /// Loads settings from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Settings file
    /// 3. Environment variables
    ///
    /// An explicit `path` must exist. The platform default path is optional.
    pub fn load(path: Option<&Path>) -> SettingsResult<Self> {
        let mut settings = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Settings file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        settings.apply_env_overrides();
        settings.validate()?;

        Ok(settings)
    }

    /// Reads and parses one settings file.
    pub fn from_file(path: &Path) -> SettingsResult<Self> {
        info!(?path, "Loading settings from file");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Checks every value against the same rules the core applies.
    pub fn validate(&self) -> SettingsResult<()> {
        validate_max_items(self.orders.max_items_per_order)?;
        validate_currency_code(&self.orders.default_currency)?;
        Ok(())
    }

    /// Values to push into the shared configuration.
    pub fn to_config_values(&self) -> ConfigValues {
        ConfigValues {
            max_items_per_order: usize::try_from(self.orders.max_items_per_order)
                .unwrap_or(DEFAULT_MAX_ITEMS_PER_ORDER),
            default_currency: self.orders.default_currency.trim().to_uppercase(),
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from `lookup`, keyed by environment variable name.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(raw) = lookup(ENV_MAX_ITEMS) {
            match raw.trim().parse::<i64>() {
                Ok(max) => {
                    debug!(max, "Overriding max_items_per_order from environment");
                    self.orders.max_items_per_order = max;
                }
                Err(_) => warn!(value = %raw, "Ignoring non-numeric {}", ENV_MAX_ITEMS),
            }
        }

        if let Some(currency) = lookup(ENV_CURRENCY) {
            debug!(currency = %currency, "Overriding default_currency from environment");
            self.orders.default_currency = currency;
        }
    }

    /// Returns the default settings file path.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "orderdesk", "orderdesk")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
    }
}
