//! Checklist item status and its display metadata.

use super::ParseChecklistStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a single checklist item.
///
/// Tasks take their status from their checklist items through
/// [`aggregate_statuses`](super::aggregate_statuses); `Blocked` and
/// `InProgress` dominate every other status there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChecklistStatus {
    /// Work on the item has not begun.
    #[serde(rename = "Not Started")]
    NotStarted,
    /// The item is actively being worked.
    #[serde(rename = "In Progress")]
    InProgress,
    /// The item cannot proceed.
    #[serde(rename = "Blocked")]
    Blocked,
    /// The item is finished apart from a final inspection.
    #[serde(rename = "Final Check Awaiting")]
    FinalCheckAwaiting,
    /// The item is complete.
    #[serde(rename = "Done")]
    Done,
}

impl ChecklistStatus {
    /// Every status, in the order board columns and status pickers list
    /// them.
    pub const ALL: [Self; 5] = [
        Self::NotStarted,
        Self::InProgress,
        Self::Blocked,
        Self::FinalCheckAwaiting,
        Self::Done,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Blocked => "Blocked",
            Self::FinalCheckAwaiting => "Final Check Awaiting",
            Self::Done => "Done",
        }
    }

    /// Returns the display descriptor for this status.
    ///
    /// The mapping is total: every status has a descriptor.
    #[must_use]
    pub const fn descriptor(self) -> StatusDescriptor {
        match self {
            Self::NotStarted => StatusDescriptor {
                label: "Not Started",
                color: "text-gray-600",
                dot_color: "text-gray-500",
                bg_color: "bg-gray-100",
            },
            Self::InProgress => StatusDescriptor {
                label: "In Progress",
                color: "text-yellow-600",
                dot_color: "text-yellow-500",
                bg_color: "bg-yellow-100",
            },
            Self::Blocked => StatusDescriptor {
                label: "Blocked",
                color: "text-red-600",
                dot_color: "text-red-500",
                bg_color: "bg-red-100",
            },
            Self::FinalCheckAwaiting => StatusDescriptor {
                label: "Final Check Awaiting",
                color: "text-orange-500",
                dot_color: "text-orange-400",
                bg_color: "bg-orange-100",
            },
            Self::Done => StatusDescriptor {
                label: "Done",
                color: "text-green-600",
                dot_color: "text-green-500",
                bg_color: "bg-green-100",
            },
        }
    }
}

impl TryFrom<&str> for ChecklistStatus {
    type Error = ParseChecklistStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "Not Started" => Ok(Self::NotStarted),
            "In Progress" => Ok(Self::InProgress),
            "Blocked" => Ok(Self::Blocked),
            "Final Check Awaiting" => Ok(Self::FinalCheckAwaiting),
            "Done" => Ok(Self::Done),
            _ => Err(ParseChecklistStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for ChecklistStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display metadata for one status.
///
/// Colour values are the utility classes the rendering surface applies;
/// the domain only guarantees the mapping covers every status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusDescriptor {
    /// Human-readable status label.
    pub label: &'static str,
    /// Text colour class.
    pub color: &'static str,
    /// Indicator dot colour class.
    pub dot_color: &'static str,
    /// Background colour class for board columns and badges.
    pub bg_color: &'static str,
}
