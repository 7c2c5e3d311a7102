use crate::constants::{DEFAULT_CURRENCY, DEFAULT_LOG_LEVEL};
use crate::split::RemainderPolicy;
use dotenv::dotenv;
use log::warn;
use once_cell::sync::Lazy;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    /// ISO currency code the presentation layer formats amounts with
    pub currency: String,
    pub equal_split_remainder: RemainderPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            equal_split_remainder: RemainderPolicy::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let equal_split_remainder = match lookup("EQUAL_SPLIT_REMAINDER") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("Unknown EQUAL_SPLIT_REMAINDER value '{}', using default", raw);
                defaults.equal_split_remainder
            }),
            None => defaults.equal_split_remainder,
        };

        Self {
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            currency: lookup("CURRENCY")
                .map(|c| c.trim().to_uppercase())
                .filter(|c| !c.is_empty())
                .unwrap_or(defaults.currency),
            equal_split_remainder,
        }
    }
}

// Global static accessible everywhere
pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);

/// Installs `env_logger` with the configured level. Safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::Builder::new()
        .parse_filters(&CONFIG.log_level)
        .try_init();
}
