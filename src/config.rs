use dotenvy::dotenv;
use log::LevelFilter;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_API_URL: &str = "http://localhost:5000/property/getAllProperties";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_MAX_WORKERS: usize = 8;
const DEFAULT_CURRENCY_SYMBOL: &str = "₹";
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} has an invalid value '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listings_api_url: String,
    /// Read listings from this JSON file instead of the API.
    pub properties_file: Option<PathBuf>,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub currency_symbol: String,
    /// Directory holding `htmx.js`.
    pub static_dir: PathBuf,
    pub log_level: LevelFilter,
}

impl Config {
    /// Reads the process environment, after loading `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_raw = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_raw.parse().map_err(|_| ConfigError::Invalid {
            key: "BIND_ADDR",
            value: bind_raw.clone(),
        })?;

        let max_workers = match get("MAX_WORKERS") {
            Some(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::Invalid {
                    key: "MAX_WORKERS",
                    value: raw,
                })?,
            None => DEFAULT_MAX_WORKERS,
        };

        let log_level: LevelFilter = match get("LOG_LEVEL") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                key: "LOG_LEVEL",
                value: raw.clone(),
            })?,
            None => LevelFilter::Info,
        };

        Ok(Config {
            listings_api_url: get("LISTINGS_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            properties_file: get("PROPERTIES_FILE").map(PathBuf::from),
            bind_addr,
            max_workers,
            currency_symbol: get("CURRENCY_SYMBOL")
                .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string()),
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            log_level,
        })
    }
}
