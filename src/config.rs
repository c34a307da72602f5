//! Runtime configuration read from the environment.
//!
//! | Variable                      | Default     |
//! |-------------------------------|-------------|
//! | `CITECHAIN_HOST`              | `127.0.0.1` |
//! | `CITECHAIN_PORT`              | `3000`      |
//! | `CITECHAIN_SESSION_TTL_HOURS` | `24`        |

use chrono::Duration;
use std::env;
use std::net::{IpAddr, SocketAddr};

use crate::error::ConfigError;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 24;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub session_ttl_hours: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: DEFAULT_PORT,
            session_ttl_hours: DEFAULT_SESSION_TTL_HOURS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host_raw = lookup("CITECHAIN_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = host_raw
            .trim()
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::invalid("CITECHAIN_HOST", &host_raw))?;

        let port = match lookup("CITECHAIN_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::invalid("CITECHAIN_PORT", &raw))?,
            None => DEFAULT_PORT,
        };

        let session_ttl_hours = match lookup("CITECHAIN_SESSION_TTL_HOURS") {
            // Must be positive and representable as a chrono duration
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(hours) if hours > 0 && Duration::try_hours(hours).is_some() => hours,
                _ => return Err(ConfigError::invalid("CITECHAIN_SESSION_TTL_HOURS", &raw)),
            },
            None => DEFAULT_SESSION_TTL_HOURS,
        };

        Ok(Self {
            host,
            port,
            session_ttl_hours,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Session lifetime. Out-of-range hours (only possible when the struct
    /// is built by hand) fall back to the default.
    pub fn session_ttl(&self) -> Duration {
        Duration::try_hours(self.session_ttl_hours)
            .unwrap_or_else(|| Duration::hours(DEFAULT_SESSION_TTL_HOURS))
    }
}
