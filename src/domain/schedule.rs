// src/domain/schedule.rs

use chrono::{Days, NaiveDate};
use rand::Rng;
use serde::Serialize;
use std::fmt;

pub const RESCHEDULE_NOTE: &str = "Resident requested reschedule";
pub const APPROVAL_NOTE: &str = "Schedule approved by resident";

/// Identifies a unit as `{block}-{floor}{unit:02}`, e.g. `A1-101`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct UnitId(String);

impl UnitId {
    pub fn new(block: &str, floor: u32, unit: u32) -> Self {
        UnitId(format!("{block}-{floor}{unit:02}"))
    }

    /// Accepts anything of the form `<block>-<rest>` with both halves non-empty.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        match raw.split_once('-') {
            Some((block, rest)) if !block.is_empty() && !rest.is_empty() => {
                Some(UnitId(raw.to_string()))
            }
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn block(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnitStatus {
    Pending,
    Scheduled,
    InProgress,
    Completed,
}

impl UnitStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            UnitStatus::Pending => "pending",
            UnitStatus::Scheduled => "scheduled",
            UnitStatus::InProgress => "in-progress",
            UnitStatus::Completed => "completed",
        }
    }

    /// Status with its first letter capitalised, as shown in badges.
    pub fn label(self) -> &'static str {
        match self {
            UnitStatus::Pending => "Pending",
            UnitStatus::Scheduled => "Scheduled",
            UnitStatus::InProgress => "In-progress",
            UnitStatus::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeSlot {
    Morning,
    Afternoon,
}

impl TimeSlot {
    pub fn label(self) -> &'static str {
        match self {
            TimeSlot::Morning => "Morning (9AM-12PM)",
            TimeSlot::Afternoon => "Afternoon (2PM-5PM)",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleEntry {
    pub id: u32,
    pub unit_id: UnitId,
    pub block: String,
    pub floor: u32,
    pub unit: u32,
    pub status: UnitStatus,
    pub scheduled_date: NaiveDate,
    pub time_slot: TimeSlot,
    pub reschedule_requested: bool,
    pub resident_name: String,
    pub resident_contact: String,
    pub notes: String,
}

impl ScheduleEntry {
    /// The resident can still approve or ask to move this slot.
    pub fn awaiting_response(&self) -> bool {
        !self.reschedule_requested && self.status != UnitStatus::Completed
    }
}

/// Shape of the building and the calendar the generator fills.
#[derive(Debug, Clone)]
pub struct ScheduleLayout {
    pub blocks: Vec<String>,
    pub floors: Vec<u32>,
    pub units_per_floor: u32,
    pub start_date: NaiveDate,
    /// Number of consecutive ids painted on the same day.
    pub batch_size: u32,
}

impl Default for ScheduleLayout {
    fn default() -> Self {
        Self {
            blocks: ["A1", "A2", "B1", "B2"].map(String::from).to_vec(),
            floors: (1..=5).collect(),
            units_per_floor: 4,
            start_date: NaiveDate::from_ymd_opt(2025, 4, 5).unwrap_or_default(),
            batch_size: 8,
        }
    }
}

// Draw thresholds: a draw strictly above the value selects the outcome.
const COMPLETED_ABOVE: f64 = 0.7;
const IN_PROGRESS_ABOVE: f64 = 0.5;
const SCHEDULED_ABOVE: f64 = 0.3;
const MORNING_ABOVE: f64 = 0.5;
const RESCHEDULE_ABOVE: f64 = 0.8;

/// Independent draws against fixed thresholds; a hit on an earlier draw
/// skips the later ones.
fn draw_status<R: Rng + ?Sized>(rng: &mut R) -> UnitStatus {
    if rng.gen::<f64>() > COMPLETED_ABOVE {
        UnitStatus::Completed
    } else if rng.gen::<f64>() > IN_PROGRESS_ABOVE {
        UnitStatus::InProgress
    } else if rng.gen::<f64>() > SCHEDULED_ABOVE {
        UnitStatus::Scheduled
    } else {
        UnitStatus::Pending
    }
}

/// One entry per block × floor × unit, in that nesting order, with ids from 1.
pub fn generate_schedule<R: Rng + ?Sized>(
    layout: &ScheduleLayout,
    rng: &mut R,
) -> Vec<ScheduleEntry> {
    let capacity = layout.blocks.len() * layout.floors.len() * layout.units_per_floor as usize;
    let mut schedule = Vec::with_capacity(capacity);
    let batch = layout.batch_size.max(1);

    let mut id: u32 = 1;
    for block in &layout.blocks {
        for &floor in &layout.floors {
            for unit in 1..=layout.units_per_floor {
                let offset = Days::new(u64::from(id / batch));
                let scheduled_date = layout
                    .start_date
                    .checked_add_days(offset)
                    .unwrap_or(layout.start_date);

                let status = draw_status(rng);

                let time_slot = if rng.gen::<f64>() > MORNING_ABOVE {
                    TimeSlot::Morning
                } else {
                    TimeSlot::Afternoon
                };

                schedule.push(ScheduleEntry {
                    id,
                    unit_id: UnitId::new(block, floor, unit),
                    block: block.clone(),
                    floor,
                    unit,
                    status,
                    scheduled_date,
                    time_slot,
                    reschedule_requested: rng.gen::<f64>() > RESCHEDULE_ABOVE,
                    resident_name: format!("Resident {id}"),
                    resident_contact: format!("+91 98765 {}", 10000 + id),
                    notes: String::new(),
                });
                id += 1;
            }
        }
    }

    schedule
}

pub fn find_entry<'a>(
    schedule: &'a [ScheduleEntry],
    unit_id: &UnitId,
) -> Option<&'a ScheduleEntry> {
    schedule.iter().find(|entry| &entry.unit_id == unit_id)
}

/// Entries of one block sorted by unit id.
pub fn block_schedule<'a>(schedule: &'a [ScheduleEntry], block: &str) -> Vec<&'a ScheduleEntry> {
    let mut entries: Vec<_> = schedule.iter().filter(|e| e.block == block).collect();
    entries.sort_by(|a, b| a.unit_id.cmp(&b.unit_id));
    entries
}

fn update_entry<F>(schedule: &mut [ScheduleEntry], unit_id: &UnitId, apply: F) -> bool
where
    F: FnOnce(&mut ScheduleEntry),
{
    match schedule.iter_mut().find(|entry| &entry.unit_id == unit_id) {
        Some(entry) => {
            apply(entry);
            true
        }
        None => false,
    }
}

/// Flags the unit for rescheduling. No conflict check, no undo.
pub fn request_reschedule(schedule: &mut [ScheduleEntry], unit_id: &UnitId) -> bool {
    update_entry(schedule, unit_id, |entry| {
        entry.reschedule_requested = true;
        entry.notes = RESCHEDULE_NOTE.to_string();
    })
}

/// Sets the unit to `Scheduled` regardless of its current status.
pub fn approve_schedule(schedule: &mut [ScheduleEntry], unit_id: &UnitId) -> bool {
    update_entry(schedule, unit_id, |entry| {
        entry.status = UnitStatus::Scheduled;
        entry.notes = APPROVAL_NOTE.to_string();
    })
}
