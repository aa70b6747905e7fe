// src/export/model.rs

use crate::models::{Category, LogRecord};
use serde::Serialize;

/// Flat row used by the CSV and JSON exports: a log record plus its category.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RecordExport {
    pub category: Category,
    pub date: String,
    pub project: String,
    pub start_time: String,
    pub end_time: String,
    pub duration_minutes: f64,
}

impl RecordExport {
    pub fn from_record(category: Category, r: &LogRecord) -> Self {
        Self {
            category,
            date: r.date_str(),
            project: r.project.clone(),
            start_time: r.start_str(),
            end_time: r.end_str(),
            duration_minutes: r.duration_minutes,
        }
    }
}
