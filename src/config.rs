use std::env;
use std::net::SocketAddr;

use axum::http::HeaderValue;
use dotenv::dotenv;
use thiserror::Error;
use tracing::info;

const BIND_ADDR: &str = "BIND_ADDR";
const PUBLIC_ORIGIN: &str = "PUBLIC_ORIGIN";
const ADMIN_TOKEN: &str = "ADMIN_TOKEN";
const CORS_ORIGINS: &str = "CORS_ORIGINS";

const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Errors raised while reading configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("failed to parse {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address the HTTP server listens on
    pub bind_addr: SocketAddr,
    /// Origin used when building public registration links
    pub public_origin: Option<String>,
    /// Shared admin token; when unset, event creation is open
    pub admin_token: Option<String>,
    /// Origins allowed by CORS
    pub cors_origins: Vec<String>,
}

impl Config {
    /// Loads configuration from the environment, reading a `.env` file first if present.
    pub fn try_from_env() -> Result<Config, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bind_addr = match get(BIND_ADDR) {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                var: BIND_ADDR,
                value,
            })?,
            None => default_bind_addr(),
        };

        let public_origin = get(PUBLIC_ORIGIN).map(|o| o.trim_end_matches('/').to_string());

        let cors_origins = match get(CORS_ORIGINS) {
            Some(value) => parse_cors_origins(&value)?,
            None => vec![DEFAULT_CORS_ORIGIN.to_string()],
        };
        info!("Allowed CORS origins: {:?}", cors_origins);

        Ok(Config {
            bind_addr,
            public_origin,
            admin_token: get(ADMIN_TOKEN),
            cors_origins,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: default_bind_addr(),
            public_origin: None,
            admin_token: None,
            cors_origins: vec![DEFAULT_CORS_ORIGIN.to_string()],
        }
    }
}

/// Splits a comma-separated origin list. Credentials are allowed on CORS requests, so the
/// wildcard `*` is rejected along with anything that is not a valid header value.
fn parse_cors_origins(value: &str) -> Result<Vec<String>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|origin| {
            if origin == "*" || origin.parse::<HeaderValue>().is_err() {
                return Err(ConfigError::Invalid {
                    var: CORS_ORIGINS,
                    value: origin.to_string(),
                });
            }
            Ok(origin.to_string())
        })
        .collect()
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}
