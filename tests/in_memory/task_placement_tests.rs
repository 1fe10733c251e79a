//! Integration tests for task placement and default checklist seeding.

use std::sync::Arc;

use mockable::DefaultClock;
use plumbline::checklist::adapters::memory::InMemoryChecklistRepository;
use plumbline::checklist::domain::{ChecklistStatus, DEFAULT_CHECKLIST_LABELS};
use plumbline::checklist::services::ChecklistEditingService;
use plumbline::task::adapters::memory::InMemoryTaskRepository;
use plumbline::task::domain::{PinPosition, UserId};
use plumbline::task::services::{PlaceTaskRequest, TaskPlannerService};
use rstest::{fixture, rstest};

type Planner =
    TaskPlannerService<InMemoryTaskRepository, InMemoryChecklistRepository, DefaultClock>;

struct Harness {
    planner: Planner,
    editing: ChecklistEditingService<InMemoryChecklistRepository>,
}

#[fixture]
fn harness() -> Harness {
    let checklists = Arc::new(InMemoryChecklistRepository::new());
    Harness {
        planner: TaskPlannerService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::clone(&checklists),
            Arc::new(DefaultClock),
        ),
        editing: ChecklistEditingService::new(checklists),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn placing_a_task_seeds_a_loadable_default_checklist(harness: Harness) {
    let task = harness
        .planner
        .place_task(PlaceTaskRequest::new(
            UserId::new(),
            PinPosition::new(220.0, 145.0),
        ))
        .await
        .expect("placement should succeed");

    let session = harness
        .editing
        .open_session(task.id())
        .await
        .expect("session open should succeed");

    let labels: Vec<_> = session.items().map(|item| item.label().to_owned()).collect();
    assert_eq!(labels, DEFAULT_CHECKLIST_LABELS.to_vec());
    assert!(session.updated_items().is_empty());
    assert_eq!(session.task_status(), ChecklistStatus::NotStarted);
    assert_eq!(session.done_count(), 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn each_user_sees_only_their_own_pins(harness: Harness) {
    let foreman = UserId::new();
    let electrician = UserId::new();

    harness
        .planner
        .place_task(PlaceTaskRequest::new(foreman, PinPosition::new(10.0, 10.0)))
        .await
        .expect("placement should succeed");
    harness
        .planner
        .place_task(
            PlaceTaskRequest::new(electrician, PinPosition::new(20.0, 20.0))
                .with_title("Panel upgrade"),
        )
        .await
        .expect("placement should succeed");

    let foreman_tasks = harness
        .planner
        .tasks_for_user(foreman)
        .await
        .expect("lookup should succeed");
    let electrician_tasks = harness
        .planner
        .tasks_for_user(electrician)
        .await
        .expect("lookup should succeed");

    assert_eq!(foreman_tasks.len(), 1);
    assert_eq!(electrician_tasks.len(), 1);
    assert!(
        electrician_tasks
            .iter()
            .any(|task| task.title() == "Panel upgrade")
    );
}
