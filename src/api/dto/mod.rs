//! Request and response types for the REST API.

pub mod links;
pub mod stats;
pub mod visits;
