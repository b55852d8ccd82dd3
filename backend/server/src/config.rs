use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub debug: bool,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self {
            host: try_load("RUST_HOST", "127.0.0.1")?,
            port: try_load("RUST_PORT", "5000")?,
            database_path: try_load("DATABASE_PATH", "feedback.db")?,
            debug: parse_flag("DEBUG_MODE", &load_raw("DEBUG_MODE", "true"))?,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            database_path: PathBuf::from("feedback.db"),
            debug: true,
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn load_raw(key: &str, default: &str) -> String {
    var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}

fn try_load<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = load_raw(key, default);

    value.parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");

        ConfigError::InvalidValue {
            key,
            reason: e.to_string(),
            value,
        }
    })
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
            reason: "expected a boolean flag".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_flag, Config};

    #[test]
    fn test_flags() {
        assert!(parse_flag("DEBUG_MODE", "true").unwrap());
        assert!(parse_flag("DEBUG_MODE", " Yes ").unwrap());
        assert!(parse_flag("DEBUG_MODE", "1").unwrap());
        assert!(!parse_flag("DEBUG_MODE", "off").unwrap());
        assert!(!parse_flag("DEBUG_MODE", "FALSE").unwrap());
    }

    #[test]
    fn test_bad_flag() {
        let err = parse_flag("DEBUG_MODE", "maybe").unwrap_err();
        assert!(err.to_string().contains("DEBUG_MODE"));
    }

    #[test]
    fn test_default_address() {
        assert_eq!(Config::default().address(), "127.0.0.1:5000");
    }
}
