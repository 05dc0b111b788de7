// src/portal/seed.rs
//
// Fixed demo content shown to every resident.

use crate::domain::{
    ActionItem, ActionStatus, Announcement, Document, PhaseStatus, Priority, TimelinePhase,
};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn announcements() -> Vec<Announcement> {
    let rows = [
        (
            "Project Web Portal Launch",
            "We are excited to introduce our new web portal designed to streamline the scheduling of balcony painting and other painting-related tasks for your convenience.",
            date(2025, 3, 15),
            Priority::High,
        ),
        (
            "Repainting Project Kickoff",
            "Our community repainting project begins on April 5, 2025. All balconies in blocks A1, A2, B1, and B2 will be repainted according to the schedule.",
            date(2025, 3, 15),
            Priority::High,
        ),
        (
            "Color Selection Deadline",
            "Please submit your color preferences from the approved palette by March 25, 2025. Default colors will be assigned if no selection is made.",
            date(2025, 3, 16),
            Priority::Medium,
        ),
        (
            "Block A1 Schedule Update",
            "Block A1 painting will begin on April 5th and continue through April 15th. Please check your individual unit schedule and approve or request reschedule.",
            date(2025, 3, 16),
            Priority::Medium,
        ),
        (
            "Rescheduling Notice",
            "We strongly recommend not rescheduling your painting appointment unless absolutely unavoidable to maintain our project timeline.",
            date(2025, 3, 17),
            Priority::Medium,
        ),
    ];

    rows.into_iter()
        .zip(1..)
        .map(|((title, content, date, priority), id)| Announcement {
            id,
            title: title.to_string(),
            content: content.to_string(),
            date,
            priority,
        })
        .collect()
}

pub fn action_items() -> Vec<ActionItem> {
    let rows = [
        (
            "Submit Color Preference",
            "Select your preferred color from the approved palette",
            "2025-03-25",
        ),
        (
            "Clear Balcony Items",
            "Remove all items from your balcony before your scheduled painting date",
            "Before your scheduled date",
        ),
        (
            "Confirm Painting Schedule",
            "Confirm if your assigned painting slot works for you",
            "48 hours after receiving schedule",
        ),
    ];

    rows.into_iter()
        .zip(1..)
        .map(|((title, description, deadline), id)| ActionItem {
            id,
            title: title.to_string(),
            description: description.to_string(),
            deadline: deadline.to_string(),
            status: ActionStatus::Pending,
        })
        .collect()
}

pub fn documents() -> Vec<Document> {
    let rows = [
        (
            "Project Overview",
            "Complete overview of the VRR NEST repainting project",
            "General",
            "VRR_NEST_Repainting_Project_Overview.pdf",
            date(2025, 3, 10),
        ),
        (
            "Approved Color Palette",
            "List of approved colors for balcony repainting",
            "Selection",
            "Approved_Color_Palette.pdf",
            date(2025, 3, 12),
        ),
        (
            "Painting Specifications",
            "Technical specifications and quality standards",
            "Technical",
            "Painting_Technical_Specifications.pdf",
            date(2025, 3, 14),
        ),
        (
            "Block A1 Schedule",
            "Detailed painting schedule for Block A1",
            "Schedule",
            "Block_A1_Schedule.pdf",
            date(2025, 3, 16),
        ),
        (
            "Vendor Information",
            "Information about the painting contractor",
            "Vendor",
            "Painting_Vendor_Information.pdf",
            date(2025, 3, 15),
        ),
    ];

    rows.into_iter()
        .zip(1..)
        .map(
            |((title, description, category, file_name, upload_date), id)| Document {
                id,
                title: title.to_string(),
                description: description.to_string(),
                category: category.to_string(),
                file_name: file_name.to_string(),
                upload_date,
            },
        )
        .collect()
}

pub fn timeline() -> Vec<TimelinePhase> {
    let rows = [
        (
            "Project Preparation",
            "March 15 - April 4, 2025",
            "Resident notifications, color selection, and scheduling",
            PhaseStatus::Completed,
            false,
        ),
        (
            "Block A1 Painting",
            "April 5 - April 15, 2025",
            "Balcony repainting for all units in block A1",
            PhaseStatus::InProgress,
            true,
        ),
        (
            "Block A2 Painting",
            "April 16 - April 26, 2025",
            "Balcony repainting for all units in block A2",
            PhaseStatus::Upcoming,
            true,
        ),
        (
            "Block B1 Painting",
            "April 27 - May 7, 2025",
            "Balcony repainting for all units in block B1",
            PhaseStatus::Upcoming,
            true,
        ),
        (
            "Block B2 Painting",
            "May 8 - May 18, 2025",
            "Balcony repainting for all units in block B2",
            PhaseStatus::Upcoming,
            true,
        ),
        (
            "Quality Inspection & Touch-ups",
            "May 19 - May 25, 2025",
            "Final inspection and touch-up work across all blocks",
            PhaseStatus::Upcoming,
            false,
        ),
    ];

    rows.into_iter()
        .map(|(title, dates, description, status, is_painting)| TimelinePhase {
            title: title.to_string(),
            dates: dates.to_string(),
            description: description.to_string(),
            status,
            is_painting,
        })
        .collect()
}
