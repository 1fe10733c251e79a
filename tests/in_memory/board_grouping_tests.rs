//! Integration tests for the status cache feeding list and board views.

use std::sync::Arc;

use eyre::{OptionExt, ensure};
use mockable::DefaultClock;
use plumbline::checklist::adapters::memory::InMemoryChecklistRepository;
use plumbline::checklist::domain::{ChecklistItem, ChecklistStatus};
use plumbline::checklist::ports::ChecklistRepository;
use plumbline::checklist::services::{ChecklistEditingService, TaskStatusCache};
use plumbline::task::adapters::memory::InMemoryTaskRepository;
use plumbline::task::domain::{PinPosition, Task, UserId};
use plumbline::task::services::{PlaceTaskRequest, TaskPlannerService};
use rstest::{fixture, rstest};

type Planner =
    TaskPlannerService<InMemoryTaskRepository, InMemoryChecklistRepository, DefaultClock>;

struct Harness {
    planner: Planner,
    editing: ChecklistEditingService<InMemoryChecklistRepository>,
    checklists: Arc<InMemoryChecklistRepository>,
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
        editing: ChecklistEditingService::new(Arc::clone(&checklists)),
        checklists,
    }
}

async fn place_with_uniform_status(
    harness: &Harness,
    user_id: UserId,
    status: ChecklistStatus,
) -> eyre::Result<Task> {
    let task = harness
        .planner
        .place_task(PlaceTaskRequest::new(user_id, PinPosition::new(15.0, 25.0)))
        .await?;

    if status != ChecklistStatus::NotStarted {
        let mut session = harness.editing.open_session(task.id()).await?;
        let ids: Vec<_> = session.items().map(ChecklistItem::id).collect();
        for id in ids {
            session.update_status(id, status);
        }
        harness.editing.save_session(&mut session).await?;
    }
    Ok(task)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cache_populated_from_the_store_groups_the_board(harness: Harness) -> eyre::Result<()> {
    let user_id = UserId::new();
    let untouched =
        place_with_uniform_status(&harness, user_id, ChecklistStatus::NotStarted).await?;
    let finished = place_with_uniform_status(&harness, user_id, ChecklistStatus::Done).await?;
    let awaiting =
        place_with_uniform_status(&harness, user_id, ChecklistStatus::FinalCheckAwaiting).await?;

    let tasks = harness.planner.tasks_for_user(user_id).await?;
    let mut cache = TaskStatusCache::new();
    for task in &tasks {
        let items = harness.checklists.find_by_task(task.id()).await?;
        cache.set_checklist(task.id(), items);
    }

    ensure!(cache.status_of(untouched.id()) == ChecklistStatus::NotStarted);
    ensure!(cache.status_of(finished.id()) == ChecklistStatus::Done);
    ensure!(cache.status_of(awaiting.id()) == ChecklistStatus::FinalCheckAwaiting);

    let columns = cache.board_columns(&tasks);
    ensure!(columns.len() == ChecklistStatus::ALL.len());
    let lookup = |wanted: ChecklistStatus| -> eyre::Result<Vec<&Task>> {
        columns
            .iter()
            .find(|(status, _)| *status == wanted)
            .map(|(_, column)| column.clone())
            .ok_or_eyre("missing board column")
    };
    ensure!(lookup(ChecklistStatus::NotStarted)?.len() == 1);
    ensure!(lookup(ChecklistStatus::Done)?.len() == 1);
    ensure!(lookup(ChecklistStatus::FinalCheckAwaiting)?.len() == 1);
    ensure!(lookup(ChecklistStatus::InProgress)?.is_empty());
    ensure!(lookup(ChecklistStatus::Blocked)?.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn saving_a_session_moves_a_task_between_columns(harness: Harness) -> eyre::Result<()> {
    let user_id = UserId::new();
    let task = place_with_uniform_status(&harness, user_id, ChecklistStatus::NotStarted).await?;

    let mut cache = TaskStatusCache::new();
    cache.set_checklist(task.id(), harness.checklists.find_by_task(task.id()).await?);
    ensure!(cache.status_of(task.id()) == ChecklistStatus::NotStarted);

    let mut session = harness.editing.open_session(task.id()).await?;
    let first = session
        .items()
        .next()
        .map(ChecklistItem::id)
        .ok_or_eyre("seeded checklist is empty")?;
    session.update_status(first, ChecklistStatus::Blocked);
    harness.editing.save_session(&mut session).await?;

    // Refresh the cache entry from the store after saving.
    cache.set_checklist(task.id(), harness.checklists.find_by_task(task.id()).await?);
    ensure!(cache.status_of(task.id()) == ChecklistStatus::Blocked);
    Ok(())
}
