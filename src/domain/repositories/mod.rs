//! Repository traits abstracting the storage layer.

mod link_repository;
mod visit_repository;

pub use link_repository::LinkRepository;
pub use visit_repository::VisitRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use visit_repository::MockVisitRepository;
