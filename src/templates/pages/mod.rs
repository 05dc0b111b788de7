pub mod action_items;
pub mod announcements;
pub mod dashboard;
pub mod documents;
pub mod password;
pub mod progress;
pub mod schedule;

pub use action_items::action_items_page;
pub use announcements::announcements_page;
pub use dashboard::{dashboard_page, DashboardVm};
pub use documents::documents_page;
pub use password::password_page;
pub use progress::{progress_page, ProgressVm};
pub use schedule::{schedule_page, ScheduleVm};
