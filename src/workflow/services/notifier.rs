//! Flush-cycle observation and status-change event dispatch.

use crate::workflow::domain::{ScheduledUpdate, StatusChangeEvent};
use crate::workflow::ports::StatusChangeSubscriber;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Dispatches one [`StatusChangeEvent`] per task whose status changed in a
/// flush batch.
///
/// Subscribers are injected at construction; there is no process-wide
/// dispatcher state. A reentrancy guard keeps nested flushes triggered from
/// inside a subscriber from re-entering the same observation cycle, and the
/// guard is released even when a subscriber fails or panics.
pub struct StatusChangeNotifier {
    subscribers: Vec<Arc<dyn StatusChangeSubscriber>>,
    observing: AtomicBool,
}

impl StatusChangeNotifier {
    /// Creates a notifier dispatching to the given subscribers.
    #[must_use]
    pub const fn new(subscribers: Vec<Arc<dyn StatusChangeSubscriber>>) -> Self {
        Self {
            subscribers,
            observing: AtomicBool::new(false),
        }
    }

    /// Observes one flush batch.
    ///
    /// Entries whose status field did not change are skipped. Each remaining
    /// entry raises exactly one event carrying the task and its current
    /// resource as the acting actor. Subscriber failures are recorded and do
    /// not affect the rest of the batch. Calls made while an observation
    /// cycle is already running on this notifier return immediately; the
    /// outer cycle owns the batch.
    pub fn notify_flush(&self, updates: &[ScheduledUpdate]) {
        if self.observing.swap(true, Ordering::AcqRel) {
            return;
        }
        let _release = GuardRelease {
            flag: &self.observing,
        };

        for update in updates {
            if !update.status_changed() {
                continue;
            }
            let task = update.task();
            let event = StatusChangeEvent::new(task.clone(), task.resource());
            for subscriber in &self.subscribers {
                if let Err(err) = subscriber.on_status_change(&event) {
                    tracing::warn!(
                        task_id = %task.id(),
                        status = event.status().as_str(),
                        error = %err,
                        "status-change subscriber failed"
                    );
                }
            }
        }
    }
}

impl fmt::Debug for StatusChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatusChangeNotifier")
            .field("subscribers", &self.subscribers.len())
            .field("observing", &self.observing)
            .finish()
    }
}

/// Releases the reentrancy guard on scope exit, unwinding included.
struct GuardRelease<'a> {
    flag: &'a AtomicBool,
}

impl Drop for GuardRelease<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
