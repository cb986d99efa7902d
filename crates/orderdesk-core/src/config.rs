//! # Shared Configuration
//!
//! Process-wide assembly limits consulted by every order builder.
//!
//! ## Thread Safety
//! The values are wrapped in `Arc<Mutex<T>>` because:
//! 1. Every clone of a [`SharedConfig`] must see the same values
//! 2. A builder on one thread may read the item cap while another thread
//!    changes it
//! 3. Accessors are tiny, so a plain `Mutex` beats an `RwLock` here
//!
//! ## Access Patterns
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Shared Configuration Access                          │
//! │                                                                         │
//! │  Injected handle (preferred)          Process-wide instance             │
//! │  ───────────────────────────          ─────────────────────             │
//! │  let cfg = SharedConfig::new();       SharedConfig::global()            │
//! │  OrderBuilder::new(&cfg)              OrderBuilder::default()           │
//! │        │                                     │                          │
//! │        └──── cfg.clone() shares state ───────┘ OnceLock: created once,  │
//! │                                                  never dropped          │
//! │                                                                         │
//! │  Writes are visible to the very next read through any clone.           │
//! │  Builders never cache: add_item reads the cap on every call.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};
use tracing::{debug, info, warn};

use crate::{DEFAULT_CURRENCY, DEFAULT_MAX_ITEMS_PER_ORDER};

static GLOBAL: OnceLock<SharedConfig> = OnceLock::new();

// =============================================================================
// Config Values
// =============================================================================

/// Plain copy of the configuration, used for seeding and reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigValues {
    /// Maximum number of `add_item` calls one order accepts.
    pub max_items_per_order: usize,

    /// ISO 4217 code used when rendering totals.
    pub default_currency: String,
}

impl Default for ConfigValues {
    fn default() -> Self {
        ConfigValues {
            max_items_per_order: DEFAULT_MAX_ITEMS_PER_ORDER,
            default_currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

// =============================================================================
// Shared Config
// =============================================================================

/// Handle to a mutable configuration store. Cloning shares the store.
#[derive(Debug, Clone)]
pub struct SharedConfig {
    values: Arc<Mutex<ConfigValues>>,
}

impl SharedConfig {
    /// Creates a fresh store with default values (50 items, BRL).
    pub fn new() -> Self {
        SharedConfig {
            values: Arc::new(Mutex::new(ConfigValues::default())),
        }
    }

    /// Creates a store seeded from `values`.
    ///
    /// Invalid entries are ignored the same way the setters ignore them, so
    /// the defaults stay in place for those fields.
    pub fn from_values(values: ConfigValues) -> Self {
        let config = Self::new();
        config.apply(&values);
        config
    }

    /// Returns the process-wide instance, creating it on first use.
    ///
    /// Concurrent first calls race safely: exactly one instance is created and
    /// every caller receives that same instance.
    pub fn global() -> &'static SharedConfig {
        GLOBAL.get_or_init(|| {
            info!(
                max_items_per_order = DEFAULT_MAX_ITEMS_PER_ORDER,
                default_currency = DEFAULT_CURRENCY,
                "Shared configuration created"
            );
            SharedConfig::new()
        })
    }

    /// Values are plain data and each write is a single assignment, so a
    /// poisoned lock still guards consistent state.
    fn lock(&self) -> MutexGuard<'_, ConfigValues> {
        self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current item cap per order.
    pub fn max_items_per_order(&self) -> usize {
        self.lock().max_items_per_order
    }

    /// Sets the item cap. Non-positive values are ignored without error.
    pub fn set_max_items_per_order(&self, max: i64) {
        let Some(max) = usize::try_from(max).ok().filter(|m| *m > 0) else {
            warn!(max, "Ignoring non-positive max_items_per_order");
            return;
        };

        self.lock().max_items_per_order = max;
        debug!(max, "max_items_per_order updated");
    }

    /// Current default currency code.
    pub fn default_currency(&self) -> String {
        self.lock().default_currency.clone()
    }

    /// Sets the default currency. Blank codes are ignored without error.
    pub fn set_default_currency(&self, code: &str) {
        let code = code.trim();
        if code.is_empty() {
            warn!("Ignoring blank default_currency");
            return;
        }

        self.lock().default_currency = code.to_string();
        debug!(currency = code, "default_currency updated");
    }

    /// Copies out the current values.
    pub fn snapshot(&self) -> ConfigValues {
        self.lock().clone()
    }

    /// Pushes every field of `values` through its setter.
    pub fn apply(&self, values: &ConfigValues) {
        let max = i64::try_from(values.max_items_per_order).unwrap_or(i64::MAX);
        self.set_max_items_per_order(max);
        self.set_default_currency(&values.default_currency);
    }

    /// True if both handles point at the same store.
    pub fn shares_state_with(&self, other: &SharedConfig) -> bool {
        Arc::ptr_eq(&self.values, &other.values)
    }
}

impl Default for SharedConfig {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SharedConfig::new();
        assert_eq!(config.max_items_per_order(), 50);
        assert_eq!(config.default_currency(), "BRL");
    }

    #[test]
    fn test_setters() {
        let config = SharedConfig::new();
        config.set_max_items_per_order(100);
        config.set_default_currency("USD");
        assert_eq!(config.max_items_per_order(), 100);
        assert_eq!(config.default_currency(), "USD");
    }

    #[test]
    fn test_invalid_writes_are_ignored() {
        let config = SharedConfig::new();
        config.set_max_items_per_order(7);

        config.set_max_items_per_order(0);
        config.set_max_items_per_order(-3);
        assert_eq!(config.max_items_per_order(), 7);

        config.set_default_currency("");
        config.set_default_currency("   ");
        assert_eq!(config.default_currency(), "BRL");
    }

    #[test]
    fn test_clones_share_state() {
        let first = SharedConfig::new();
        let second = first.clone();

        second.set_default_currency("USD");
        second.set_max_items_per_order(3);

        assert_eq!(first.default_currency(), "USD");
        assert_eq!(first.max_items_per_order(), 3);
        assert!(first.shares_state_with(&second));
        assert!(!first.shares_state_with(&SharedConfig::new()));
    }

    #[test]
    fn test_from_values_and_snapshot() {
        let values = ConfigValues {
            max_items_per_order: 5,
            default_currency: "EUR".to_string(),
        };
        let config = SharedConfig::from_values(values.clone());
        assert_eq!(config.snapshot(), values);

        let partly_invalid = ConfigValues {
            max_items_per_order: 0,
            default_currency: " ".to_string(),
        };
        assert_eq!(
            SharedConfig::from_values(partly_invalid).snapshot(),
            ConfigValues::default()
        );
    }

    #[test]
    fn test_global_is_one_instance() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| SharedConfig::global() as *const SharedConfig as usize))
            .collect();

        let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addresses.windows(2).all(|w| w[0] == w[1]));

        let a = SharedConfig::global();
        let b = SharedConfig::global();
        assert!(std::ptr::eq(a, b));
        assert!(a.shares_state_with(b));
    }

    #[test]
    fn test_global_writes_visible_through_other_reference() {
        let writer = SharedConfig::global();
        let reader = SharedConfig::global().clone();
        let before = reader.default_currency();

        writer.set_default_currency("USD");
        assert_eq!(reader.default_currency(), "USD");

        writer.set_default_currency(&before);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_reads_and_writes() {
        let config = SharedConfig::new();

        let mut tasks = Vec::new();
        for i in 1..=32_i64 {
            let config = config.clone();
            tasks.push(tokio::spawn(async move {
                config.set_max_items_per_order(i);
                let seen = config.max_items_per_order();
                assert!((1..=32).contains(&seen));
                config.set_default_currency(if i % 2 == 0 { "USD" } else { "EUR" });
            }));
        }

        for task in tasks {
            task.await.unwrap();
        }

        assert!((1..=32).contains(&config.max_items_per_order()));
        assert!(["USD", "EUR"].contains(&config.default_currency().as_str()));
    }
}
