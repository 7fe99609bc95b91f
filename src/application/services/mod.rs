//! Application services orchestrating domain logic.

mod link_service;
mod visit_service;

pub use link_service::LinkService;
pub use visit_service::{LinkStats, VisitService};
