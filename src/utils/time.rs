//! Time utilities: parsing HH:MM:SS, duration computations, two-decimal rounding.

use chrono::{DateTime, Local, NaiveTime, Timelike};

pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Drop sub-second precision so the value survives a trip through the log file.
pub fn truncate_to_seconds(t: NaiveTime) -> NaiveTime {
    t.with_nanosecond(0).unwrap_or(t)
}

/// Round to 2 decimals, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Elapsed minutes between two instants, rounded to 2 decimals.
/// A clock going backwards yields 0, never a negative duration.
pub fn minutes_between(start: DateTime<Local>, end: DateTime<Local>) -> f64 {
    let millis = (end - start).num_milliseconds().max(0);
    round2(millis as f64 / 60_000.0)
}

/// serde adapter for `NaiveTime` as `HH:MM:SS`.
pub mod hms {
    use super::TIME_FORMAT;
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&t.format(TIME_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveTime::parse_from_str(raw.trim(), TIME_FORMAT)
            .map_err(|e| de::Error::custom(format!("invalid time '{raw}': {e}")))
    }
}
