//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, before any connection is opened.
//!
//! ## Variables
//!
//! - `REDIS_URL` - Redis connection string (optional; without it the
//!   service runs on the in-process store and loses data on restart)
//! - `BASE_URL` - public base for short URLs (default: `http://localhost:3000`)
//! - `LISTEN` - bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - log level (default: `info`)
//! - `LOG_FORMAT` - log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub redis_url: Option<String>,
    /// Public base for constructing short URLs, e.g. `https://s.example.com`.
    pub base_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let redis_url = env::var("REDIS_URL").ok().filter(|v| !v.is_empty());

        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            redis_url,
            base_url,
            listen_addr,
            log_level,
            log_format,
        })
    }
}
