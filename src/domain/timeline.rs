// src/domain/timeline.rs

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhaseStatus {
    Completed,
    InProgress,
    Upcoming,
}

impl PhaseStatus {
    pub fn label(self) -> &'static str {
        match self {
            PhaseStatus::Completed => "Completed",
            PhaseStatus::InProgress => "In Progress",
            PhaseStatus::Upcoming => "Upcoming",
        }
    }
}

/// One stage of the project plan shown on the progress tab.
#[derive(Debug, Clone, Serialize)]
pub struct TimelinePhase {
    pub title: String,
    /// Human-readable range, e.g. "April 5 - April 15, 2025".
    pub dates: String,
    pub description: String,
    pub status: PhaseStatus,
    /// Painting phases get the paint bucket icon; the rest a checkbox.
    pub is_painting: bool,
}
