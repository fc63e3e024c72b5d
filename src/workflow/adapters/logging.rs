//! Audit logging subscriber for committed status changes.

use crate::workflow::domain::StatusChangeEvent;
use crate::workflow::ports::{StatusChangeSubscriber, SubscriberError};

/// Subscriber that emits a structured audit record per status change.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSubscriber;

impl LogSubscriber {
    /// Creates the logging subscriber.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl StatusChangeSubscriber for LogSubscriber {
    fn on_status_change(&self, event: &StatusChangeEvent) -> Result<(), SubscriberError> {
        tracing::debug!(
            task_id = %event.task().id(),
            status = event.status().as_str(),
            operator = event.operator().map(|id| id.to_string()),
            "task status changed"
        );
        Ok(())
    }
}
