//! HTTP server initialization and runtime setup.
//!
//! Wires the storage adapter, repositories, and services together and runs
//! the Axum server.

use crate::application::services::{LinkService, VisitService};
use crate::config::Config;
use crate::domain::repositories::{LinkRepository, VisitRepository};
use crate::infrastructure::persistence::{
    MemoryStore, RedisLinkRepository, RedisStore, RedisVisitRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Connects to Redis when `REDIS_URL` is configured; an unreachable store
/// at startup is fatal. Without `REDIS_URL` the service runs on the
/// in-process store (data does not survive restarts).
///
/// # Errors
///
/// Returns an error if the store connection, address parsing, bind, or
/// server runtime fails.
pub async fn run(config: Config) -> Result<()> {
    let (link_repository, visit_repository): (Arc<dyn LinkRepository>, Arc<dyn VisitRepository>) =
        match &config.redis_url {
            Some(redis_url) => {
                let store = RedisStore::connect(redis_url).await?;
                (
                    Arc::new(RedisLinkRepository::new(store.clone())),
                    Arc::new(RedisVisitRepository::new(store)),
                )
            }
            None => {
                tracing::warn!("REDIS_URL not set, using in-process store (non-persistent)");
                let store = Arc::new(MemoryStore::new());
                (store.clone(), store)
            }
        };

    let link_service = Arc::new(LinkService::new(
        link_repository.clone(),
        config.base_url.clone(),
    ));
    let visit_service = Arc::new(VisitService::new(link_repository, visit_repository));

    let state = AppState::new(link_service, visit_service);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
