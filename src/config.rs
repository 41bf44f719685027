//! Relay configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::error::RelayError;

/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 3000;

/// Default per-listener frame buffer.
pub const DEFAULT_BROADCAST_CAPACITY: usize = 1024;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Top-level relay configuration.
///
/// Loaded once at startup via [`RelayConfig::from_env`].
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// Path of the static OpenAPI manifest served at `/openapi.json`.
    pub manifest_path: PathBuf,

    /// Per-listener capacity of the broadcast channel.
    pub broadcast_capacity: usize,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            manifest_path: PathBuf::from("openapi.json"),
            broadcast_capacity: DEFAULT_BROADCAST_CAPACITY,
            log_format: LogFormat::Text,
        }
    }
}

impl RelayConfig {
    /// Loads configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::InvalidConfig`] if `PORT` or `HOST` is set but
    /// cannot be parsed.
    pub fn from_env() -> Result<Self, RelayError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::InvalidConfig`] if `PORT` or `HOST` is present
    /// but invalid. A blank `PORT` counts as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, RelayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT").filter(|p| !p.trim().is_empty()) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| RelayError::InvalidConfig {
                key: "PORT",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        let host = match lookup("HOST") {
            Some(raw) => raw.trim().parse::<IpAddr>().map_err(|_| RelayError::InvalidConfig {
                key: "HOST",
                value: raw,
            })?,
            None => defaults.listen_addr.ip(),
        };

        let manifest_path = lookup("MANIFEST_PATH")
            .filter(|p| !p.is_empty())
            .map_or(defaults.manifest_path, PathBuf::from);

        let broadcast_capacity = lookup("BROADCAST_CAPACITY")
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|&c| c > 0)
            .unwrap_or(DEFAULT_BROADCAST_CAPACITY);

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            Some("json") | Some("JSON") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            listen_addr: SocketAddr::new(host, port),
            manifest_path,
            broadcast_capacity,
            log_format,
        })
    }
}
