//! Runtime configuration.
//!
//! Loads configuration from environment variables with sensible defaults.

use serde::{Deserialize, Serialize};
use std::env;

pub const MAILBOX_CAPACITY_VAR: &str = "ORDER_SERVICE_MAILBOX_CAPACITY";
pub const NOTIFICATION_QUEUE_VAR: &str = "ORDER_SERVICE_NOTIFICATION_QUEUE";
pub const LOG_FILTER_VAR: &str = "ORDER_SERVICE_LOG";

/// Sizing for the actor system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Request channel capacity of each store actor
    pub mailbox_capacity: usize,
    /// Pending notifications held before new ones are dropped
    pub notification_queue_capacity: usize,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: 32,
            notification_queue_capacity: 256,
            log_filter: "info".to_string(),
        }
    }
}

impl SystemConfig {
    /// Load configuration from environment variables.
    ///
    /// Missing, unparsable or zero capacities fall back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let capacity = |key: &str, default: usize| {
            lookup(key)
                .and_then(|s| s.trim().parse().ok())
                .filter(|n: &usize| *n > 0)
                .unwrap_or(default)
        };

        Self {
            mailbox_capacity: capacity(MAILBOX_CAPACITY_VAR, defaults.mailbox_capacity),
            notification_queue_capacity: capacity(
                NOTIFICATION_QUEUE_VAR,
                defaults.notification_queue_capacity,
            ),
            log_filter: lookup(LOG_FILTER_VAR)
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.log_filter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_map(vars: &[(&str, &str)]) -> SystemConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SystemConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(from_map(&[]), SystemConfig::default());
    }

    #[test]
    fn test_reads_overrides() {
        let config = from_map(&[
            (MAILBOX_CAPACITY_VAR, "8"),
            (NOTIFICATION_QUEUE_VAR, " 16 "),
            (LOG_FILTER_VAR, "order_service=debug"),
        ]);
        assert_eq!(config.mailbox_capacity, 8);
        assert_eq!(config.notification_queue_capacity, 16);
        assert_eq!(config.log_filter, "order_service=debug");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = from_map(&[
            (MAILBOX_CAPACITY_VAR, "0"),
            (NOTIFICATION_QUEUE_VAR, "lots"),
            (LOG_FILTER_VAR, "  "),
        ]);
        assert_eq!(config, SystemConfig::default());
    }
}
