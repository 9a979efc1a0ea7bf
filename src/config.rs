//! Runtime configuration options.
//!
//! The wrapped geospatial engine keys much of its behavior off a flat
//! name/value option table. Rather than a process-wide global, the table is
//! an owned [`ConfigOptions`] value handed to whatever needs it, so distinct
//! instances stay isolated and tests need no serialization.
//!
//! ```
//! use georef::config::ConfigOptions;
//!
//! let mut config = ConfigOptions::new();
//! config.set("CACHEMAX", "1024");
//! assert_eq!(config.get("CACHEMAX"), Some("1024"));
//!
//! // Unset the option again
//! config.clear("CACHEMAX");
//! assert_eq!(config.get("CACHEMAX"), None);
//! ```

use std::collections::HashMap;

/// An owned name/value option store.
///
/// Values persist for the lifetime of the instance; clearing a name unsets
/// it. Lookups of names never set return `None`.
#[derive(Debug, Default, Clone)]
pub struct ConfigOptions {
    options: HashMap<String, String>,
}

impl ConfigOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns `value` to `name`, overwriting any previous value.
    pub fn set(&mut self, name: &str, value: &str) {
        self.options.insert(name.to_string(), value.to_string());
    }

    /// Looks up the value of `name`, or `None` if it was never set or has
    /// been cleared.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.options.get(name).map(String::as_str)
    }

    /// Looks up the value of `name`, falling back to `default` when unset.
    pub fn get_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.get(name).unwrap_or(default)
    }

    /// Unsets `name`. Clearing a name that was never set is a no-op.
    pub fn clear(&mut self, name: &str) {
        self.options.remove(name);
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_option() {
        let mut config = ConfigOptions::new();
        config.set("CACHEMAX", "128");
        assert_eq!(config.get("CACHEMAX"), Some("128"));
        assert_eq!(config.get("NON_EXISTANT_OPTION"), None);
        assert_eq!(config.get_or("NON_EXISTANT_OPTION", "DEFAULT_VALUE"), "DEFAULT_VALUE");
    }

    #[test]
    fn test_overwrite_option() {
        let mut config = ConfigOptions::new();
        config.set("TEST_OPTION", "256");
        config.set("TEST_OPTION", "512");
        assert_eq!(config.get("TEST_OPTION"), Some("512"));
        assert_eq!(config.len(), 1);
    }

    #[test]
    fn test_clear_option() {
        let mut config = ConfigOptions::new();
        config.set("TEST_OPTION", "256");
        assert_eq!(config.get_or("TEST_OPTION", "DEFAULT"), "256");
        config.clear("TEST_OPTION");
        assert_eq!(config.get_or("TEST_OPTION", "DEFAULT"), "DEFAULT");
        assert!(config.is_empty());

        // Clearing again is harmless.
        config.clear("TEST_OPTION");
    }

    #[test]
    fn test_instances_are_isolated() {
        let mut a = ConfigOptions::new();
        let b = ConfigOptions::new();
        a.set("SHARED_NAME", "a-value");
        assert_eq!(a.get("SHARED_NAME"), Some("a-value"));
        assert_eq!(b.get("SHARED_NAME"), None);
    }
}
