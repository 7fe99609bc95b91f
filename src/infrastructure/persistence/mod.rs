//! Storage adapters: Redis-backed repositories and the in-process fallback.

mod memory_store;
mod redis_link_repository;
mod redis_store;
mod redis_visit_repository;

pub use memory_store::MemoryStore;
pub use redis_link_repository::RedisLinkRepository;
pub use redis_store::RedisStore;
pub use redis_visit_repository::RedisVisitRepository;
