//! Application services for workflow orchestration and notification.

mod notifier;
mod workflow;

pub use notifier::StatusChangeNotifier;
pub use workflow::{
    CreateTaskRequest, TaskWorkflowError, TaskWorkflowResult, TaskWorkflowService,
    TransitionOutcome,
};
