//! Port contracts for the task workflow core.
//!
//! Ports define infrastructure-agnostic interfaces used by workflow
//! services.

pub mod events;
pub mod repository;

pub use events::{StatusChangeSubscriber, SubscriberError};
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};

#[cfg(test)]
pub use events::MockStatusChangeSubscriber;
