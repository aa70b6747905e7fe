//! One completed, persisted timer entry.

use crate::utils::{date, time};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Column names of the fixed header row, in file order.
pub const LOG_HEADER: [&str; 5] = [
    "Date",
    "Project",
    "Start Time",
    "End Time",
    "Duration (mins)",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    #[serde(rename = "Date", with = "date::ymd")]
    pub date: NaiveDate, // ⇔ "YYYY-MM-DD"
    #[serde(rename = "Project")]
    pub project: String,
    #[serde(rename = "Start Time", with = "time::hms")]
    pub start_time: NaiveTime, // ⇔ "HH:MM:SS"
    #[serde(rename = "End Time", with = "time::hms")]
    pub end_time: NaiveTime,
    #[serde(rename = "Duration (mins)")]
    pub duration_minutes: f64,
}

impl LogRecord {
    pub fn new(
        date: NaiveDate,
        project: impl Into<String>,
        start_time: NaiveTime,
        end_time: NaiveTime,
        duration_minutes: f64,
    ) -> Self {
        Self {
            date,
            project: project.into(),
            start_time,
            end_time,
            duration_minutes,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        self.start_time.format("%H:%M:%S").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end_time.format("%H:%M:%S").to_string()
    }

    /// Duration as shown in tables: whole minutes, fraction dropped.
    pub fn whole_minutes(&self) -> i64 {
        self.duration_minutes.trunc() as i64
    }
}
