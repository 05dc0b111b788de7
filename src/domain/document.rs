// src/domain/document.rs

use chrono::NaiveDate;
use serde::Serialize;

/// A project document listed in the repository tab. Read-only.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub file_name: String,
    pub upload_date: NaiveDate,
}
