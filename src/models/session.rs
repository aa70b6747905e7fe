use super::{category::Category, record::LogRecord};
use crate::utils::time::{minutes_between, truncate_to_seconds};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a running timer: at most one session per key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionKey {
    pub project: String,
    pub category: Category,
}

impl SessionKey {
    pub fn new(project: impl Into<String>, category: Category) -> Self {
        Self {
            project: project.into(),
            category,
        }
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' ({})", self.project, self.category)
    }
}

/// An in-progress, unlogged timer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub project: String,
    pub category: Category,
    pub started_at: DateTime<Local>,
}

impl Session {
    pub fn new(project: impl Into<String>, category: Category, started_at: DateTime<Local>) -> Self {
        Self {
            project: project.into(),
            category,
            started_at,
        }
    }

    pub fn matches(&self, project: &str, category: Category) -> bool {
        self.category == category && self.project == project
    }

    /// Minutes elapsed up to `now`, never negative.
    pub fn elapsed_minutes(&self, now: DateTime<Local>) -> f64 {
        minutes_between(self.started_at, now)
    }

    /// Build the log row for this session ending at `end`.
    /// The row is dated by the day the session ended.
    pub fn finish(&self, end: DateTime<Local>) -> LogRecord {
        LogRecord {
            date: end.date_naive(),
            project: self.project.clone(),
            start_time: truncate_to_seconds(self.started_at.time()),
            end_time: truncate_to_seconds(end.time()),
            duration_minutes: minutes_between(self.started_at, end),
        }
    }
}
