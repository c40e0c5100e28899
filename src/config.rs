//! Process configuration.
//!
//! Read once from the environment at startup; immutable afterwards.

use std::time::Duration;

use crate::i18n::Locale;

/// Default content-store base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:1337";

/// Default debounce window in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Runtime configuration for the lookup core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Content-store base URL (`API_BASE_URL`).
    pub base_url: String,
    /// Debounce window in milliseconds (`BARARAN_DEBOUNCE_MS`).
    pub debounce_ms: u64,
    /// Interface locale (`BARARAN_LOCALE`).
    pub locale: Locale,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            locale: Locale::default(),
        }
    }
}

impl Config {
    /// Loads configuration from the environment, falling back to defaults
    /// for unset or unparseable values.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("API_BASE_URL")
                .ok()
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(defaults.base_url),
            debounce_ms: std::env::var("BARARAN_DEBOUNCE_MS")
                .ok()
                .and_then(|value| value.trim().parse().ok())
                .unwrap_or(defaults.debounce_ms),
            locale: std::env::var("BARARAN_LOCALE")
                .ok()
                .and_then(|value| value.trim().parse().ok())
                .unwrap_or(defaults.locale),
        }
    }

    /// The debounce window as a [`Duration`].
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.base_url, "http://localhost:1337");
        assert_eq!(config.debounce_ms, 300);
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.debounce(), Duration::from_millis(300));
    }
}
