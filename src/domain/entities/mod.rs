//! Core business entities.

mod link;
mod visit;

pub use link::Link;
pub use visit::{DeviceType, Visit};
