// src/domain/action_item.rs

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStatus {
    Pending,
    Completed,
}

impl ActionStatus {
    pub fn label(self) -> &'static str {
        match self {
            ActionStatus::Pending => "Pending",
            ActionStatus::Completed => "Completed",
        }
    }
}

/// A task residents must complete for the project.
/// `deadline` is free text ("Before your scheduled date"), not a date.
#[derive(Debug, Clone, Serialize)]
pub struct ActionItem {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub deadline: String,
    pub status: ActionStatus,
}

impl ActionItem {
    pub fn is_completed(&self) -> bool {
        self.status == ActionStatus::Completed
    }
}

/// Marks the item with `id` as completed, whatever its current status.
/// Returns `false` when no item matched; nothing changes in that case.
pub fn complete_action_item(items: &mut [ActionItem], id: u32) -> bool {
    match items.iter_mut().find(|item| item.id == id) {
        Some(item) => {
            item.status = ActionStatus::Completed;
            true
        }
        None => false,
    }
}

pub fn pending_action_items(items: &[ActionItem]) -> impl Iterator<Item = &ActionItem> {
    items.iter().filter(|item| !item.is_completed())
}
