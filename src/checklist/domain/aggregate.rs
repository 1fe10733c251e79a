//! Aggregation of checklist-item statuses into one task status.

use super::ChecklistStatus;

/// Folds the statuses of one task's checklist items into a single
/// task-level status.
///
/// Precedence, evaluated in one forward scan:
///
/// 1. The first `Blocked` or `InProgress` item met ends the scan and
///    becomes the task status, so `[InProgress, Blocked]` yields
///    `InProgress` while `[Blocked, InProgress]` yields `Blocked`.
/// 2. Otherwise a uniformly `NotStarted` checklist (including an empty
///    one) is `NotStarted`.
/// 3. Otherwise a uniformly `Done` checklist is `Done`.
/// 4. Otherwise a uniformly `FinalCheckAwaiting` checklist is
///    `FinalCheckAwaiting`.
/// 5. Any other mix falls back to `InProgress`.
///
/// A single blocked or in-progress item dominating the whole task is a
/// deliberate business rule, as is the empty-checklist default of
/// `NotStarted`.
#[must_use]
pub fn aggregate_statuses<I>(statuses: I) -> ChecklistStatus
where
    I: IntoIterator<Item = ChecklistStatus>,
{
    let mut all_not_started = true;
    let mut all_done = true;
    let mut all_final_check_awaiting = true;

    for status in statuses {
        match status {
            ChecklistStatus::Blocked => return ChecklistStatus::Blocked,
            ChecklistStatus::InProgress => return ChecklistStatus::InProgress,
            _ => {}
        }

        if status != ChecklistStatus::NotStarted {
            all_not_started = false;
        }
        if status != ChecklistStatus::Done {
            all_done = false;
        }
        if status != ChecklistStatus::FinalCheckAwaiting {
            all_final_check_awaiting = false;
        }
    }

    if all_not_started {
        return ChecklistStatus::NotStarted;
    }
    if all_done {
        return ChecklistStatus::Done;
    }
    if all_final_check_awaiting {
        return ChecklistStatus::FinalCheckAwaiting;
    }

    ChecklistStatus::InProgress
}
