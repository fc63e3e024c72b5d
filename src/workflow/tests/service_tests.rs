//! Service orchestration tests for the task workflow.

use crate::workflow::{
    adapters::memory::InMemoryTaskRepository,
    domain::{
        AccessDecision, Role, RoleHierarchy, SkillTag, StatusChangeEvent, TaskId, TaskStatus,
        TransitionAuthorizer, User, Username,
    },
    ports::{StatusChangeSubscriber, SubscriberError, TaskRepository},
    services::{
        CreateTaskRequest, StatusChangeNotifier, TaskWorkflowError, TaskWorkflowService,
        TransitionOutcome,
    },
};
use chrono::{Duration, Utc};
use eyre::{bail, ensure};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use std::sync::{Arc, Mutex};

type TestService = TaskWorkflowService<InMemoryTaskRepository, DefaultClock>;

/// Test double collecting every dispatched event.
#[derive(Default)]
struct RecordingSubscriber {
    events: Mutex<Vec<StatusChangeEvent>>,
}

impl RecordingSubscriber {
    fn statuses(&self) -> Vec<TaskStatus> {
        self.events
            .lock()
            .expect("subscriber lock poisoned")
            .iter()
            .map(StatusChangeEvent::status)
            .collect()
    }
}

impl StatusChangeSubscriber for RecordingSubscriber {
    fn on_status_change(&self, event: &StatusChangeEvent) -> Result<(), SubscriberError> {
        self.events
            .lock()
            .expect("subscriber lock poisoned")
            .push(event.clone());
        Ok(())
    }
}

struct Harness {
    service: TestService,
    repository: Arc<InMemoryTaskRepository>,
    recording: Arc<RecordingSubscriber>,
    admin: User,
    alice: User,
    carol: User,
}

#[fixture]
fn harness() -> Harness {
    let repository = Arc::new(InMemoryTaskRepository::new());
    let recording = Arc::new(RecordingSubscriber::default());
    let subscribers: Vec<Arc<dyn StatusChangeSubscriber>> = vec![recording.clone()];
    let notifier = Arc::new(StatusChangeNotifier::new(subscribers));
    let authorizer = TransitionAuthorizer::new(RoleHierarchy::new());
    let service = TaskWorkflowService::new(
        repository.clone(),
        Arc::new(DefaultClock),
        authorizer,
        notifier,
    );

    Harness {
        service,
        repository,
        recording,
        admin: User::new(Username::new("diana").expect("valid username"), [Role::Admin]),
        alice: User::new(
            Username::new("alice").expect("valid username"),
            [Role::Resource],
        ),
        carol: User::new(
            Username::new("carol").expect("valid username"),
            [Role::Client],
        ),
    }
}

fn create_request(creator: &User) -> CreateTaskRequest {
    CreateTaskRequest::new(
        "Translate product brochure",
        Utc::now() + Duration::days(7),
        SkillTag::new("translation").expect("valid skill tag"),
        creator.id(),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_persists_and_is_retrievable(harness: Harness) -> eyre::Result<()> {
    let created = harness
        .service
        .create_task(create_request(&harness.carol))
        .await?;

    let fetched = harness.service.find_by_id(created.id()).await?;

    ensure!(fetched == Some(created));
    ensure!(harness.recording.statuses().is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn admin_assignment_and_resource_progress_raise_events(
    harness: Harness,
) -> eyre::Result<()> {
    let task = harness
        .service
        .create_task(create_request(&harness.carol))
        .await?;

    let assigned = harness
        .service
        .assign_task(&harness.admin, task.id(), harness.alice.id())
        .await?;
    let TransitionOutcome::Applied(assigned_task) = assigned else {
        bail!("expected applied assignment, got {assigned:?}");
    };
    ensure!(assigned_task.status() == TaskStatus::Assigned);
    ensure!(assigned_task.resource() == Some(harness.alice.id()));

    let started = harness
        .service
        .request_transition(&harness.alice, task.id(), TaskStatus::Started)
        .await?;
    let TransitionOutcome::Applied(started_task) = started else {
        bail!("expected applied transition, got {started:?}");
    };
    ensure!(started_task.status() == TaskStatus::Started);

    ensure!(harness.recording.statuses() == [TaskStatus::Assigned, TaskStatus::Started]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn refused_transition_commits_nothing_and_raises_no_event(
    harness: Harness,
) -> eyre::Result<()> {
    let task = harness
        .service
        .create_task(create_request(&harness.carol))
        .await?;
    harness
        .service
        .assign_task(&harness.admin, task.id(), harness.alice.id())
        .await?;

    let outcome = harness
        .service
        .request_transition(&harness.carol, task.id(), TaskStatus::Started)
        .await?;

    ensure!(outcome == TransitionOutcome::Refused(AccessDecision::Denied));
    let stored = harness.service.find_by_id(task.id()).await?;
    ensure!(stored.is_some_and(|current| current.status() == TaskStatus::Assigned));
    ensure!(harness.recording.statuses() == [TaskStatus::Assigned]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn hand_back_returns_the_task_to_the_pool(harness: Harness) -> eyre::Result<()> {
    let task = harness
        .service
        .create_task(create_request(&harness.carol))
        .await?;
    harness
        .service
        .assign_task(&harness.admin, task.id(), harness.alice.id())
        .await?;

    let outcome = harness
        .service
        .request_transition(&harness.alice, task.id(), TaskStatus::New)
        .await?;

    let TransitionOutcome::Applied(handed_back) = outcome else {
        bail!("expected applied hand-back, got {outcome:?}");
    };
    ensure!(handed_back.status() == TaskStatus::New);
    ensure!(handed_back.resource().is_none());
    let assigned_to_alice = harness
        .repository
        .find_by_resource(harness.alice.id())
        .await?;
    ensure!(assigned_to_alice.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_task_is_reported_as_not_found(harness: Harness) -> eyre::Result<()> {
    let missing = TaskId::new();

    let result = harness
        .service
        .request_transition(&harness.admin, missing, TaskStatus::Assigned)
        .await;

    if !matches!(result, Err(TaskWorkflowError::TaskNotFound(id)) if id == missing) {
        bail!("expected TaskNotFound, got {result:?}");
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn flush_batches_are_drained_per_operation(harness: Harness) -> eyre::Result<()> {
    let task = harness
        .service
        .create_task(create_request(&harness.carol))
        .await?;
    harness
        .service
        .assign_task(&harness.admin, task.id(), harness.alice.id())
        .await?;

    let leftover = harness.repository.take_scheduled_updates().await?;

    ensure!(leftover.is_empty());
    Ok(())
}
