// src/domain/announcement.rs

use chrono::NaiveDate;
use serde::Serialize;

/// How urgently residents should read an announcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    #[allow(dead_code)]
    Low,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Announcement {
    pub id: u32,
    pub title: String,
    pub content: String,
    pub date: NaiveDate,
    pub priority: Priority,
}

/// The first `n` announcements, in seed order.
pub fn recent(announcements: &[Announcement], n: usize) -> &[Announcement] {
    &announcements[..announcements.len().min(n)]
}
