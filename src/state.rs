//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{LinkService, VisitService};

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub visit_service: Arc<VisitService>,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService>, visit_service: Arc<VisitService>) -> Self {
        Self {
            link_service,
            visit_service,
        }
    }
}
