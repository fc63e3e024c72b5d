//! Adapter implementations of the workflow ports.

pub mod logging;
pub mod memory;

pub use logging::LogSubscriber;
pub use memory::InMemoryTaskRepository;
