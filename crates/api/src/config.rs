//! Environment-driven API configuration.

use std::net::SocketAddr;

use thiserror::Error;

pub const ADDR_ENV: &str = "STOCKROOM_ADDR";
pub const SEED_ENV: &str = "STOCKROOM_SEED";

const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}={value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Listen address.
    pub addr: SocketAddr,
    /// Start with the seed records instead of an empty store.
    pub seed: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            seed: true,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable source; unset variables take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr_raw = lookup(ADDR_ENV).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_raw.trim().parse().map_err(|e: std::net::AddrParseError| {
            ConfigError::Invalid {
                var: ADDR_ENV,
                value: addr_raw.clone(),
                reason: e.to_string(),
            }
        })?;

        let seed = match lookup(SEED_ENV) {
            None => true,
            Some(raw) => parse_bool(&raw).ok_or_else(|| ConfigError::Invalid {
                var: SEED_ENV,
                value: raw.clone(),
                reason: "expected true/false or 1/0".to_string(),
            })?,
        };

        Ok(Self { addr, seed })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
