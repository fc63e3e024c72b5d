//! Subscriber port for status-change notification.

use crate::workflow::domain::StatusChangeEvent;
use std::sync::Arc;
use thiserror::Error;

/// Failure raised by a status-change subscriber.
#[derive(Debug, Clone, Error)]
#[error("subscriber failure: {0}")]
pub struct SubscriberError(Arc<dyn std::error::Error + Send + Sync>);

impl SubscriberError {
    /// Wraps a subscriber-specific error.
    pub fn new(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Arc::new(err))
    }
}

/// Observer contract for committed status changes.
///
/// A failing subscriber is its own concern: the notifier records the
/// failure and carries on with the rest of the batch and with every other
/// subscriber.
#[cfg_attr(test, mockall::automock)]
pub trait StatusChangeSubscriber: Send + Sync {
    /// Handles one committed status change.
    ///
    /// # Errors
    ///
    /// Returns [`SubscriberError`] when the subscriber cannot process the
    /// event; the enclosing flush is unaffected.
    fn on_status_change(&self, event: &StatusChangeEvent) -> Result<(), SubscriberError>;
}
