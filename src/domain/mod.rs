pub mod action_item;
pub mod announcement;
pub mod document;
pub mod progress;
pub mod schedule;
pub mod timeline;

pub use action_item::{ActionItem, ActionStatus};
pub use announcement::{Announcement, Priority};
pub use document::Document;
pub use progress::{BlockProgress, ProgressBand, ProgressStats};
pub use schedule::{ScheduleEntry, ScheduleLayout, UnitId, UnitStatus};
pub use timeline::{PhaseStatus, TimelinePhase};
