//! # linktrack
//!
//! A URL shortener with per-link visit analytics, built with Axum and Redis.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and repository traits
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-process storage adapters
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Short link registration with collision-resistant URL-safe identifiers
//! - Redirect handling that records every visit (timestamp, user agent,
//!   mobile/desktop classification) with lossless concurrent counting
//! - Date-range-filtered visit statistics per link
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional; without it the service runs on a non-persistent in-process store
//! export REDIS_URL="redis://localhost:6379"
//! export BASE_URL="https://s.example.com"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, LinkStats, VisitService};
    pub use crate::domain::entities::{DeviceType, Link, Visit};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
