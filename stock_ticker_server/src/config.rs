//! Process configuration, read once at startup.

use std::net::{AddrParseError, SocketAddr};
use std::num::ParseIntError;

use stock_ticker_lib::alphavantage_api::DEFAULT_BASE_URL;
use thiserror::Error;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),
    #[error("Invalid NDAYS value: {0}")]
    InvalidDays(#[source] ParseIntError),
    #[error("Invalid LISTEN_ADDR value: {0}")]
    InvalidListenAddr(#[source] AddrParseError),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub symbol: String,
    pub days: i64,
    pub api_key: String,
    pub listen_addr: SocketAddr,
    pub provider_base_url: String,
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let symbol = get("SYMBOL").ok_or(ConfigError::Missing("SYMBOL"))?;
        let days = get("NDAYS")
            .ok_or(ConfigError::Missing("NDAYS"))?
            .trim()
            .parse::<i64>()
            .map_err(ConfigError::InvalidDays)?;
        let api_key = get("APIKEY").ok_or(ConfigError::Missing("APIKEY"))?;
        let listen_addr = get("LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(ConfigError::InvalidListenAddr)?;
        let provider_base_url =
            get("ALPHAVANTAGE_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            symbol,
            days,
            api_key,
            listen_addr,
            provider_base_url,
        })
    }
}
