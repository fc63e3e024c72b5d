//! In-memory adapter implementations for tests and embedding hosts.

mod repository;

pub use repository::InMemoryTaskRepository;
