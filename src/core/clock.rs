use chrono::{DateTime, Local};

/// Source of wall-clock time for the tracker, so tests can control "now".
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
