//! Integration tests for the full checklist edit-save-reload cycle.

use std::sync::Arc;

use eyre::{OptionExt, ensure};
use mockable::DefaultClock;
use plumbline::checklist::adapters::memory::InMemoryChecklistRepository;
use plumbline::checklist::domain::{ChecklistItem, ChecklistItemId, ChecklistStatus};
use plumbline::checklist::services::ChecklistEditingService;
use plumbline::task::adapters::memory::InMemoryTaskRepository;
use plumbline::task::domain::{PinPosition, Task, UserId};
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

async fn placed_task(harness: &Harness) -> eyre::Result<Task> {
    Ok(harness
        .planner
        .place_task(PlaceTaskRequest::new(
            UserId::new(),
            PinPosition::new(64.0, 128.0),
        ))
        .await?)
}

fn item_id_by_label(
    session: &plumbline::checklist::domain::ChecklistEditSession,
    label: &str,
) -> eyre::Result<ChecklistItemId> {
    session
        .items()
        .find(|item| item.label() == label)
        .map(ChecklistItem::id)
        .ok_or_eyre("item not found by label")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn edits_survive_a_save_and_reload(harness: Harness) -> eyre::Result<()> {
    let task = placed_task(&harness).await?;

    let mut session = harness.editing.open_session(task.id()).await?;
    let survey = item_id_by_label(&session, "Site Survey")?;
    let delivery = item_id_by_label(&session, "Materials Delivered")?;

    session.update_status(survey, ChecklistStatus::Done);
    session.begin_label_edit(delivery);
    session.commit_label(delivery, "Rebar Delivered");
    let added = session.add_item(task.id());
    session.commit_label(added.id(), "Snag List");
    harness.editing.save_session(&mut session).await?;

    let reloaded = harness.editing.open_session(task.id()).await?;
    ensure!(reloaded.len() == 6);
    ensure!(reloaded.updated_items().is_empty());

    let survey_item = reloaded
        .items()
        .find(|item| item.id() == survey)
        .ok_or_eyre("survey item missing after reload")?;
    ensure!(survey_item.status() == ChecklistStatus::Done);
    ensure!(reloaded.items().any(|item| item.label() == "Rebar Delivered"));
    ensure!(reloaded.items().any(|item| item.label() == "Snag List"));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deletions_are_applied_at_save_time(harness: Harness) -> eyre::Result<()> {
    let task = placed_task(&harness).await?;

    let mut session = harness.editing.open_session(task.id()).await?;
    let survey = item_id_by_label(&session, "Site Survey")?;
    session.delete_item(survey);

    // Nothing is physically deleted until the session is saved.
    let parallel_view = harness.editing.open_session(task.id()).await?;
    ensure!(parallel_view.len() == 5);

    harness.editing.save_session(&mut session).await?;

    let reloaded = harness.editing.open_session(task.id()).await?;
    ensure!(reloaded.len() == 4);
    ensure!(!reloaded.items().any(|item| item.id() == survey));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn abandoning_a_session_persists_nothing(harness: Harness) -> eyre::Result<()> {
    let task = placed_task(&harness).await?;

    let mut discarded = harness.editing.open_session(task.id()).await?;
    let survey = item_id_by_label(&discarded, "Site Survey")?;
    discarded.update_status(survey, ChecklistStatus::Blocked);
    discarded.delete_item(item_id_by_label(&discarded, "Final Check")?);
    drop(discarded);

    let reloaded = harness.editing.open_session(task.id()).await?;
    ensure!(reloaded.len() == 5);
    ensure!(reloaded.task_status() == ChecklistStatus::NotStarted);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn derived_task_status_tracks_the_saved_checklist(harness: Harness) -> eyre::Result<()> {
    let task = placed_task(&harness).await?;
    ensure!(harness.planner.task_status(task.id()).await? == ChecklistStatus::NotStarted);

    let mut session = harness.editing.open_session(task.id()).await?;
    let survey = item_id_by_label(&session, "Site Survey")?;
    session.update_status(survey, ChecklistStatus::InProgress);
    harness.editing.save_session(&mut session).await?;
    ensure!(harness.planner.task_status(task.id()).await? == ChecklistStatus::InProgress);

    let mut finishing = harness.editing.open_session(task.id()).await?;
    let all_ids: Vec<_> = finishing.items().map(ChecklistItem::id).collect();
    for id in all_ids {
        finishing.update_status(id, ChecklistStatus::Done);
    }
    harness.editing.save_session(&mut finishing).await?;
    ensure!(harness.planner.task_status(task.id()).await? == ChecklistStatus::Done);

    // One blocked item dominates the finished checklist.
    let mut blocking = harness.editing.open_session(task.id()).await?;
    let last = item_id_by_label(&blocking, "Final Check")?;
    blocking.update_status(last, ChecklistStatus::Blocked);
    harness.editing.save_session(&mut blocking).await?;
    ensure!(harness.planner.task_status(task.id()).await? == ChecklistStatus::Blocked);
    Ok(())
}
