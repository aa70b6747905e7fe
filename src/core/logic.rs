//! High-level tracking logic shared by the one-shot commands and the shell.
//!
//! `TimeLogger` pairs the in-memory tracker with the two category logs: a stop
//! is always followed by an append, and a failed append puts the session back
//! so no tracked time is lost.

use crate::config::Config;
use crate::core::aggregate::{self, ProjectTotal};
use crate::core::clock::{Clock, SystemClock};
use crate::core::tracker::{SessionTracker, TrackingMode};
use crate::errors::{AppError, AppResult};
use crate::models::{Category, LogRecord, Session};
use crate::store::{LogStore, SessionFile};
use chrono::{DateTime, Local, NaiveDate};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{info, warn};

/// A session that was stopped because another one started.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchedOut {
    pub category: Category,
    pub record: LogRecord,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Started {
    pub session: Session,
    pub switched: Vec<SwitchedOut>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Toggled {
    Started(Started),
    Stopped(LogRecord),
}

/// Trim the project name; blank names never reach the tracker.
pub fn validate_project(project: &str) -> AppResult<String> {
    let name = project.trim();
    if name.is_empty() {
        return Err(AppError::Validation(
            "Please enter a project name.".to_string(),
        ));
    }
    Ok(name.to_string())
}

pub struct TimeLogger {
    tracker: SessionTracker,
    clock: Box<dyn Clock>,
    billable: LogStore,
    non_billable: LogStore,
    session_file: Option<SessionFile>,
    window_days: u32,
}

impl TimeLogger {
    pub fn new(
        tracker: SessionTracker,
        billable: LogStore,
        non_billable: LogStore,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            tracker,
            clock,
            billable,
            non_billable,
            session_file: None,
            window_days: 7,
        }
    }

    /// Logs with their default file names inside `dir`, nothing persisted
    /// besides the logs.
    pub fn in_dir(dir: &Path, mode: TrackingMode, clock: Box<dyn Clock>) -> Self {
        Self::new(
            SessionTracker::new(mode),
            LogStore::new(dir.join(Category::Billable.default_log_file())),
            LogStore::new(dir.join(Category::NonBillable.default_log_file())),
            clock,
        )
    }

    /// Keep active sessions in `file` after every change.
    pub fn with_session_file(mut self, file: SessionFile) -> Self {
        self.session_file = Some(file);
        self
    }

    pub fn with_window_days(mut self, days: u32) -> Self {
        self.window_days = days;
        self
    }

    /// Build the logger described by the configuration, restoring any
    /// sessions left running by a previous invocation.
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let file = SessionFile::new(cfg.session_path());
        let tracker = SessionTracker::with_sessions(cfg.tracking_mode, file.load()?);

        Ok(Self::from_config(cfg, tracker).with_session_file(file))
    }

    /// Logs only: the session file is neither read nor written. For the
    /// commands that just report on what was logged.
    pub fn open_logs(cfg: &Config) -> Self {
        Self::from_config(cfg, SessionTracker::new(cfg.tracking_mode))
    }

    fn from_config(cfg: &Config, tracker: SessionTracker) -> Self {
        Self::new(
            tracker,
            LogStore::new(cfg.log_path(Category::Billable)),
            LogStore::new(cfg.log_path(Category::NonBillable)),
            Box::new(SystemClock),
        )
        .with_window_days(cfg.window_days)
    }

    pub fn store(&self, category: Category) -> &LogStore {
        match category {
            Category::Billable => &self.billable,
            Category::NonBillable => &self.non_billable,
        }
    }

    pub fn window_days(&self) -> u32 {
        self.window_days
    }

    pub fn now(&self) -> DateTime<Local> {
        self.clock.now()
    }

    /// Create both log files (header only) if they do not exist yet.
    pub fn initialize(&self) -> AppResult<()> {
        for category in Category::ALL {
            self.store(category).initialize()?;
        }
        Ok(())
    }

    pub fn active_sessions(&self) -> &[Session] {
        self.tracker.active()
    }

    pub fn is_active(&self, project: &str, category: Category) -> bool {
        self.tracker.is_active(project.trim(), category)
    }

    // ------------------------------------------------
    // Mutations
    // ------------------------------------------------

    pub fn start(&mut self, project: &str, category: Category) -> AppResult<Started> {
        let project = validate_project(project)?;
        let now = self.clock.now();

        let displaced = self.tracker.start(&project, category, now)?;

        // The saved session list must never name a session that is already
        // in a log, so it is written before any append.
        if let Err(e) = self.persist() {
            self.undo_start(&project, category, &displaced);
            return Err(e);
        }

        let mut switched = Vec::with_capacity(displaced.len());
        for (i, old) in displaced.iter().enumerate() {
            let record = old.finish(now);

            if let Err(e) = self.store(old.category).append(&record) {
                warn!(project = %old.project, error = %e, "could not log switched-out session");
                self.undo_start(&project, category, &displaced[i..]);
                self.persist_after_rollback();
                return Err(e);
            }

            info!(
                from = %old.project,
                to = %project,
                minutes = record.duration_minutes,
                "switched session"
            );
            switched.push(SwitchedOut {
                category: old.category,
                record,
            });
        }

        info!(%project, %category, "tracking started");

        Ok(Started {
            session: Session::new(project, category, now),
            switched,
        })
    }

    pub fn stop(&mut self, project: &str, category: Category) -> AppResult<LogRecord> {
        let project = validate_project(project)?;
        let now = self.clock.now();

        let session = self.tracker.stop(&project, category)?;
        let record = session.finish(now);

        if let Err(e) = self.persist() {
            warn!(%project, error = %e, "session file not saved, nothing logged");
            self.tracker.resume(session);
            return Err(e);
        }

        if let Err(e) = self.store(category).append(&record) {
            warn!(%project, error = %e, "append failed, session kept running");
            self.tracker.resume(session);
            self.persist_after_rollback();
            return Err(e);
        }

        info!(%project, %category, minutes = record.duration_minutes, "tracking stopped");

        Ok(record)
    }

    /// Stop when running, start otherwise. This is what the single
    /// start/stop control calls.
    pub fn toggle(&mut self, project: &str, category: Category) -> AppResult<Toggled> {
        let project = validate_project(project)?;

        if self.tracker.is_active(&project, category) {
            self.stop(&project, category).map(Toggled::Stopped)
        } else {
            self.start(&project, category).map(Toggled::Started)
        }
    }

    fn persist(&self) -> AppResult<()> {
        match &self.session_file {
            Some(file) => file.save(self.tracker.active()),
            None => Ok(()),
        }
    }

    /// Drop the session `start` just added and put back the displaced
    /// sessions that were not logged.
    fn undo_start(&mut self, project: &str, category: Category, unlogged: &[Session]) {
        self.tracker.cancel(project, category);
        for s in unlogged {
            self.tracker.resume(s.clone());
        }
    }

    /// Save the restored state after a failed append. The append error is
    /// what the caller reports, so a second failure is only logged.
    fn persist_after_rollback(&self) {
        if let Err(e) = self.persist() {
            warn!(error = %e, "session file not restored after rollback");
        }
    }

    // ------------------------------------------------
    // Queries
    // ------------------------------------------------

    pub fn records(&self, category: Category) -> AppResult<Vec<LogRecord>> {
        self.store(category).read_all()
    }

    pub fn recent_records(
        &self,
        category: Category,
        window_days: u32,
        today: NaiveDate,
    ) -> AppResult<Vec<LogRecord>> {
        let all = self.records(category)?;
        Ok(aggregate::recent_records(&all, window_days, today))
    }

    pub fn project_totals(
        &self,
        category: Category,
        window_days: u32,
        today: NaiveDate,
    ) -> AppResult<Vec<ProjectTotal>> {
        let recent = self.recent_records(category, window_days, today)?;
        Ok(aggregate::totals_by_project(&recent))
    }

    pub fn daily_totals(
        &self,
        category: Category,
        window_days: u32,
        today: NaiveDate,
    ) -> AppResult<BTreeMap<NaiveDate, Vec<ProjectTotal>>> {
        let recent = self.recent_records(category, window_days, today)?;
        Ok(aggregate::totals_by_date_and_project(&recent))
    }

    pub fn hours_for_date(&self, category: Category, date: NaiveDate) -> AppResult<f64> {
        let all = self.records(category)?;
        Ok(aggregate::hours_for_date(&all, date))
    }

    /// Every project name ever logged, billable log first.
    pub fn known_projects(&self) -> AppResult<Vec<String>> {
        let mut all = Vec::new();
        for category in Category::ALL {
            all.extend(self.records(category)?);
        }
        Ok(aggregate::known_projects(&all))
    }
}
