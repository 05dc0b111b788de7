// src/domain/progress.rs

use crate::domain::schedule::{ScheduleEntry, UnitStatus};
use serde::Serialize;

/// Status counts over a set of schedule entries.
/// Recomputed from scratch on every render; nothing is cached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProgressStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub scheduled: usize,
    pub pending: usize,
    pub rescheduled: usize,
    pub completion_percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockProgress {
    pub block: String,
    #[serde(flatten)]
    pub stats: ProgressStats,
}

/// Colour band for a progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressBand {
    High,
    Good,
    Fair,
    Low,
}

impl ProgressBand {
    pub fn for_percentage(percentage: u32) -> Self {
        match percentage {
            p if p > 75 => ProgressBand::High,
            p if p > 50 => ProgressBand::Good,
            p if p > 25 => ProgressBand::Fair,
            _ => ProgressBand::Low,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ProgressBand::High => "bar-high",
            ProgressBand::Good => "bar-good",
            ProgressBand::Fair => "bar-fair",
            ProgressBand::Low => "bar-low",
        }
    }
}

/// round(100 * part / whole), halves rounding up. An empty whole is 0%.
pub fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    let rounded = (200 * part + whole) / (2 * whole);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

pub fn progress_stats<'a, I>(entries: I) -> ProgressStats
where
    I: IntoIterator<Item = &'a ScheduleEntry>,
{
    let mut stats = ProgressStats::default();

    for entry in entries {
        stats.total += 1;
        match entry.status {
            UnitStatus::Completed => stats.completed += 1,
            UnitStatus::InProgress => stats.in_progress += 1,
            UnitStatus::Scheduled => stats.scheduled += 1,
            UnitStatus::Pending => stats.pending += 1,
        }
        if entry.reschedule_requested {
            stats.rescheduled += 1;
        }
    }

    stats.completion_percentage = percentage(stats.completed, stats.total);
    stats
}

/// Per-block stats in the order `blocks` lists them. A block with no units
/// still gets a (zeroed) row.
pub fn block_progress(schedule: &[ScheduleEntry], blocks: &[String]) -> Vec<BlockProgress> {
    blocks
        .iter()
        .map(|block| BlockProgress {
            block: block.clone(),
            stats: progress_stats(schedule.iter().filter(|e| &e.block == block)),
        })
        .collect()
}
