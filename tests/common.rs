#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeDelta, TimeZone};
use rworklog::core::clock::Clock;
use rworklog::models::LogRecord;
use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tempfile::TempDir;

/// Binary under test, isolated from the user's real config through HOME.
pub fn rwl(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rworklog");
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

/// Temp HOME plus a data directory inside it.
pub fn setup_test_dir() -> (TempDir, PathBuf) {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let data = tmp.path().join("data");
    (tmp, data)
}

/// Clock the test moves by hand. Clones share the same instant.
#[derive(Clone)]
pub struct ManualClock(Rc<Cell<DateTime<Local>>>);

impl ManualClock {
    pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> Self {
        let start = Local
            .with_ymd_and_hms(y, m, d, h, min, s)
            .single()
            .expect("unambiguous local time");
        Self(Rc::new(Cell::new(start)))
    }

    pub fn advance_seconds(&self, secs: i64) {
        self.0.set(self.0.get() + TimeDelta::seconds(secs));
    }

    pub fn advance_minutes(&self, mins: i64) {
        self.advance_seconds(mins * 60);
    }

    pub fn rewind_minutes(&self, mins: i64) {
        self.advance_seconds(-mins * 60);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Local> {
        self.0.get()
    }
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

pub fn time(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M:%S").expect("valid time")
}

pub fn record(d: &str, project: &str, minutes: f64) -> LogRecord {
    LogRecord::new(date(d), project, time("09:00:00"), time("10:00:00"), minutes)
}
