use std::{env, fmt::Display, str::FromStr};

use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
#[error("Invalid {key} value: {reason}")]
pub struct ConfigError {
    pub key: &'static str,
    pub reason: String,
}

pub struct Config {
    pub port: u16,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self {
            port: try_load("RUST_PORT", "8008")?,
        })
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e: T::Err| ConfigError {
            key,
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::try_load;

    #[test]
    fn test_default_used_when_unset() {
        let port: u16 = try_load("FEEDBACK_TEST_UNSET_PORT", "8008").unwrap();
        assert_eq!(port, 8008);
    }

    #[test]
    fn test_bad_default_reported() {
        let error = try_load::<u16>("FEEDBACK_TEST_UNSET_PORT", "not-a-port").unwrap_err();
        assert_eq!(error.key, "FEEDBACK_TEST_UNSET_PORT");
    }
}
