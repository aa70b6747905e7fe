//! Formatting utilities used for CLI and export outputs.

use super::time::round2;

/// Minutes → hours, rounded to 2 decimals.
pub fn minutes_to_hours(mins: f64) -> f64 {
    round2(mins / 60.0)
}

/// "1.25 hours (75 mins)" as printed in the project summary.
pub fn hours_and_minutes(mins: f64) -> String {
    format!("{} hours ({} mins)", minutes_to_hours(mins), mins.trunc() as i64)
}

/// Minutes as "02:05", fraction dropped.
pub fn mins2readable(mins: f64) -> String {
    let total = mins.max(0.0).trunc() as i64;
    format!("{:02}:{:02}", total / 60, total % 60)
}
