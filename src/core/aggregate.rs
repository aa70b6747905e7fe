//! Totals over log records. Pure functions, no I/O.
//!
//! Project totals are reported in the order projects first appear in the
//! input, so repeated runs over the same log print the same summary.

use crate::models::LogRecord;
use crate::utils::date::window_start;
use crate::utils::formatting::minutes_to_hours;
use crate::utils::time::round2;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectTotal {
    pub project: String,
    pub minutes: f64,
}

impl ProjectTotal {
    pub fn new(project: impl Into<String>, minutes: f64) -> Self {
        Self {
            project: project.into(),
            minutes,
        }
    }
}

/// Records dated on or after `today - window_days`.
/// There is no upper bound: rows dated in the future are kept.
pub fn recent_records(records: &[LogRecord], window_days: u32, today: NaiveDate) -> Vec<LogRecord> {
    let since = window_start(today, window_days);
    records.iter().filter(|r| r.date >= since).cloned().collect()
}

pub fn totals_by_project<'a, I>(records: I) -> Vec<ProjectTotal>
where
    I: IntoIterator<Item = &'a LogRecord>,
{
    let mut totals: Vec<ProjectTotal> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for r in records {
        match index.get(r.project.as_str()) {
            Some(&i) => totals[i].minutes += r.duration_minutes,
            None => {
                index.insert(r.project.as_str(), totals.len());
                totals.push(ProjectTotal::new(r.project.clone(), r.duration_minutes));
            }
        }
    }

    for t in &mut totals {
        t.minutes = round2(t.minutes);
    }
    totals
}

/// Per-day project totals, iterated in ascending date order.
pub fn totals_by_date_and_project<'a, I>(records: I) -> BTreeMap<NaiveDate, Vec<ProjectTotal>>
where
    I: IntoIterator<Item = &'a LogRecord>,
{
    let mut by_date: BTreeMap<NaiveDate, Vec<&'a LogRecord>> = BTreeMap::new();
    for r in records {
        by_date.entry(r.date).or_default().push(r);
    }

    by_date
        .into_iter()
        .map(|(date, rows)| (date, totals_by_project(rows)))
        .collect()
}

pub fn total_minutes_for_date<'a, I>(records: I, date: NaiveDate) -> f64
where
    I: IntoIterator<Item = &'a LogRecord>,
{
    let sum: f64 = records
        .into_iter()
        .filter(|r| r.date == date)
        .map(|r| r.duration_minutes)
        .sum();
    round2(sum)
}

/// Hours logged on `date`, rounded to 2 decimals ("today" summary).
pub fn hours_for_date<'a, I>(records: I, date: NaiveDate) -> f64
where
    I: IntoIterator<Item = &'a LogRecord>,
{
    minutes_to_hours(total_minutes_for_date(records, date))
}

/// Distinct project names, first-seen order.
pub fn known_projects<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a LogRecord>,
{
    let mut seen = Vec::<String>::new();
    for r in records {
        if !seen.iter().any(|p| p == &r.project) {
            seen.push(r.project.clone());
        }
    }
    seen
}
