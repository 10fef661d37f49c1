use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::str::FromStr;
use std::time::Duration;
use tracing::Level;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3060";

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config::from_env()
});

#[derive(Debug, Clone)]
pub struct Config {
    pub backend_url: String,
    /// `None` means requests may wait forever.
    pub request_timeout: Option<Duration>,
    pub log_level: Level,
    /// Values that failed to parse and were replaced by their defaults.
    /// Collected here because no subscriber exists yet while loading.
    pub warnings: Vec<String>,
}

impl Config {
    pub fn from_env() -> Config {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut warnings = Vec::new();
        let timeout_secs: u64 =
            parse_or_default(&lookup, "GIFTLINK_REQUEST_TIMEOUT_SECS", 0, &mut warnings);
        let log_level = parse_or_default(&lookup, "GIFTLINK_LOG_LEVEL", Level::INFO, &mut warnings);
        Config {
            backend_url: lookup("GIFTLINK_BACKEND_URL")
                .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string()),
            request_timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
            log_level,
            warnings,
        }
    }
}

fn parse_or_default<T, F>(lookup: &F, key: &str, default: T, warnings: &mut Vec<String>) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warnings.push(format!("Invalid {key} value {raw:?}: {e}, using default"));
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.request_timeout, None);
        assert_eq!(config.log_level, Level::INFO);
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn test_reads_values() {
        let config = config_from(&[
            ("GIFTLINK_BACKEND_URL", "http://gifts.local:8080"),
            ("GIFTLINK_REQUEST_TIMEOUT_SECS", " 15 "),
            ("GIFTLINK_LOG_LEVEL", "debug"),
        ]);
        assert_eq!(config.backend_url, "http://gifts.local:8080");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.log_level, Level::DEBUG);
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn test_invalid_values_fall_back_and_are_reported() {
        let config = config_from(&[
            ("GIFTLINK_REQUEST_TIMEOUT_SECS", "abc"),
            ("GIFTLINK_LOG_LEVEL", "loud"),
        ]);
        assert_eq!(config.request_timeout, None);
        assert_eq!(config.log_level, Level::INFO);
        assert_eq!(config.warnings.len(), 2);
        assert!(config.warnings[0].starts_with("Invalid GIFTLINK_REQUEST_TIMEOUT_SECS value \"abc\""));
        assert!(config.warnings[1].starts_with("Invalid GIFTLINK_LOG_LEVEL value \"loud\""));
    }

    #[test]
    fn test_zero_timeout_means_none() {
        let config = config_from(&[("GIFTLINK_REQUEST_TIMEOUT_SECS", "0")]);
        assert_eq!(config.request_timeout, None);
        assert!(config.warnings.is_empty());
    }
}
