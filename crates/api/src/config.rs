//! Service configuration from environment variables.
//!
//! | variable                | default                 |
//! |-------------------------|-------------------------|
//! | `INVOPT_BIND_ADDR`      | `0.0.0.0:8080`          |
//! | `HISTDATA_BASE_URL`     | `http://localhost:9000` |
//! | `HISTDATA_TIMEOUT_SECS` | `10`                    |

use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

use invopt_infra::histdata::HttpHistoricalDataConfig;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_HISTDATA_BASE_URL: &str = "http://localhost:9000";
pub const DEFAULT_HISTDATA_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidBindAddr { var: &'static str, value: String },

    #[error("{var} must be a positive number of seconds, got {value}")]
    InvalidTimeout { var: &'static str, value: String },

    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    pub histdata: HttpHistoricalDataConfig,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a map instead of the process env).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        const BIND: &str = "INVOPT_BIND_ADDR";
        const BASE_URL: &str = "HISTDATA_BASE_URL";
        const TIMEOUT: &str = "HISTDATA_TIMEOUT_SECS";

        let raw_bind = lookup(BIND).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_bind.trim().parse().map_err(|_| ConfigError::InvalidBindAddr {
            var: BIND,
            value: raw_bind.clone(),
        })?;

        let base_url = lookup(BASE_URL)
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|| DEFAULT_HISTDATA_BASE_URL.to_string());
        if base_url.is_empty() {
            return Err(ConfigError::Empty { var: BASE_URL });
        }

        let timeout_secs = match lookup(TIMEOUT) {
            None => DEFAULT_HISTDATA_TIMEOUT_SECS,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err(ConfigError::InvalidTimeout { var: TIMEOUT, value: raw }),
            },
        };

        Ok(Self {
            bind_addr,
            histdata: HttpHistoricalDataConfig {
                base_url,
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn from_map(pairs: &[(&str, &str)]) -> Result<ServiceConfig, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServiceConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults() {
        let cfg = from_map(&[]).unwrap();
        assert_eq!(cfg.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(cfg.histdata.base_url, DEFAULT_HISTDATA_BASE_URL);
        assert_eq!(cfg.histdata.timeout, Duration::from_secs(10));
    }

    #[test]
    fn overrides() {
        let cfg = from_map(&[
            ("INVOPT_BIND_ADDR", "127.0.0.1:3000"),
            ("HISTDATA_BASE_URL", " https://histdata.example.com "),
            ("HISTDATA_TIMEOUT_SECS", "3"),
        ])
        .unwrap();
        assert_eq!(cfg.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(cfg.histdata.base_url, "https://histdata.example.com");
        assert_eq!(cfg.histdata.timeout, Duration::from_secs(3));
    }

    #[test]
    fn invalid_values() {
        assert!(matches!(
            from_map(&[("INVOPT_BIND_ADDR", "nowhere")]),
            Err(ConfigError::InvalidBindAddr { .. })
        ));
        assert!(matches!(
            from_map(&[("HISTDATA_TIMEOUT_SECS", "0")]),
            Err(ConfigError::InvalidTimeout { .. })
        ));
        assert!(matches!(
            from_map(&[("HISTDATA_TIMEOUT_SECS", "soon")]),
            Err(ConfigError::InvalidTimeout { .. })
        ));
        assert_eq!(
            from_map(&[("HISTDATA_BASE_URL", "  ")]).unwrap_err(),
            ConfigError::Empty { var: "HISTDATA_BASE_URL" }
        );
    }
}
