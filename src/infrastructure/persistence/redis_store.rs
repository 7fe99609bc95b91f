//! Redis connection lifecycle.

use anyhow::Context;
use redis::{Client, aio::ConnectionManager};
use tracing::info;

/// Shared Redis connection handle.
///
/// Constructed once at startup and injected into the repositories; there is
/// no ambient global connection. `ConnectionManager` multiplexes and
/// reconnects internally, so clones are cheap per-operation handles.
#[derive(Clone)]
pub struct RedisStore {
    manager: ConnectionManager,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// A failure here is fatal to startup; the service never runs against a
    /// store it could not reach at least once.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the connection cannot be
    /// established, or the PING health probe fails.
    pub async fn connect(redis_url: &str) -> anyhow::Result<Self> {
        info!("Connecting to Redis at {}", redis_url);

        let client = Client::open(redis_url).context("Failed to create Redis client")?;

        let mut manager = ConnectionManager::new(client)
            .await
            .context("Failed to connect to Redis")?;

        redis::cmd("PING")
            .query_async::<()>(&mut manager)
            .await
            .context("Redis PING failed")?;

        info!("Connected to Redis");

        Ok(Self { manager })
    }

    /// Returns a per-operation connection handle.
    pub fn connection(&self) -> ConnectionManager {
        self.manager.clone()
    }
}
