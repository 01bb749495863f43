use std::{env, fmt::Display, str::FromStr};

use reqwest::Url;
use thiserror::Error;
use tracing::{info, warn};

pub const API_URL_KEY: &str = "FEEDBACK_API_URL";
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8008";

pub const COLUMNS_KEY: &str = "COLUMNS";
pub const DEFAULT_COLUMNS: &str = "80";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {key} value: {reason}")]
    Invalid { key: &'static str, reason: String },

    #[error("Invalid base URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

pub struct Config {
    pub api_url: String,
    /// Terminal width answers are wrapped to.
    pub columns: usize,
}

impl Config {
    /// `override_url` wins over the environment, which wins over [`DEFAULT_API_URL`].
    pub fn load(override_url: Option<String>) -> Result<Self, ConfigError> {
        let api_url = match override_url {
            Some(url) => url,
            None => try_load(API_URL_KEY, DEFAULT_API_URL)?,
        };

        check_url(&api_url)?;

        Ok(Self {
            api_url,
            columns: try_load(COLUMNS_KEY, DEFAULT_COLUMNS)?,
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
        .map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        })
}

fn check_url(url: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        url: url.to_string(),
        reason,
    };

    let parsed = Url::parse(url).map_err(|e| invalid(e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(invalid(format!("unsupported scheme {scheme}"))),
    }
}
