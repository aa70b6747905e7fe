//! Plain-text views of the tracker state: the recent-sessions table, the
//! project summary and the running timers. Every function returns a String
//! so the one-shot commands and the shell print exactly the same thing.

use crate::core::aggregate::ProjectTotal;
use crate::models::{LogRecord, Session};
use crate::utils::colors::{colorize_category, grey};
use crate::utils::formatting::{hours_and_minutes, mins2readable};
use crate::utils::table::Table;
use ansi_term::Style;
use chrono::{DateTime, Local, NaiveDate};
use std::collections::BTreeMap;
use std::fmt::Write;

fn window_label(window_days: u32) -> String {
    if window_days == 1 {
        "Last Day".to_string()
    } else {
        format!("Last {window_days} Days")
    }
}

pub fn records_table(records: &[LogRecord]) -> String {
    if records.is_empty() {
        return "No sessions logged in this period.\n".to_string();
    }

    let mut table = Table::new(["Date", "Project", "Start", "End", "Duration"]);
    for r in records {
        table.add_row(vec![
            r.date_str(),
            r.project.clone(),
            r.start_str(),
            r.end_str(),
            format!("{} mins", r.whole_minutes()),
        ]);
    }
    table.render()
}

/// "Project Totals (Last 7 Days):" followed by one line per project.
pub fn project_summary(totals: &[ProjectTotal], window_days: u32) -> String {
    let mut out = format!(
        "{}\n",
        Style::new()
            .bold()
            .paint(format!("Project Totals ({}):", window_label(window_days)))
    );

    if totals.is_empty() {
        let _ = writeln!(out, "{}", grey("(nothing logged)"));
    }
    for t in totals {
        let _ = writeln!(out, "{}: {}", t.project, hours_and_minutes(t.minutes));
    }
    out
}

/// Per-day blocks in ascending date order.
pub fn daily_summary(days: &BTreeMap<NaiveDate, Vec<ProjectTotal>>, window_days: u32) -> String {
    let mut out = format!(
        "{}\n",
        Style::new()
            .bold()
            .paint(format!("Daily Totals ({}):", window_label(window_days)))
    );

    if days.is_empty() {
        let _ = writeln!(out, "{}", grey("(nothing logged)"));
    }
    for (date, totals) in days {
        let day_minutes: f64 = totals.iter().map(|t| t.minutes).sum();
        let _ = writeln!(out, "{} [{}]", date.format("%Y-%m-%d"), mins2readable(day_minutes));
        for t in totals {
            let _ = writeln!(out, "  {}: {}", t.project, hours_and_minutes(t.minutes));
        }
    }
    out
}

pub fn today_line(hours: f64) -> String {
    format!("Today: {hours} hours\n")
}

pub fn status(sessions: &[Session], now: DateTime<Local>) -> String {
    if sessions.is_empty() {
        return "No active tracking.\n".to_string();
    }

    let mut out = String::new();
    for s in sessions {
        let _ = writeln!(
            out,
            "{} {} since {} ({} mins)",
            colorize_category(s.category),
            s.project,
            s.started_at.format("%H:%M:%S"),
            s.elapsed_minutes(now)
        );
    }
    out
}

pub fn project_list(projects: &[String]) -> String {
    if projects.is_empty() {
        return "No projects logged yet.\n".to_string();
    }
    let mut out = String::new();
    for p in projects {
        let _ = writeln!(out, "{p}");
    }
    out
}
