//! In-flight timers.
//!
//! The tracker only knows which sessions are running and since when. Turning a
//! stopped session into a log row and persisting it is the caller's job
//! (see `core::logic::TimeLogger`).

use crate::errors::{AppError, AppResult};
use crate::models::{Category, Session, SessionKey};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackingMode {
    /// Any number of distinct (project, category) timers may run together.
    Independent,
    /// One timer at a time: starting a session stops whatever else is running.
    #[default]
    Exclusive,
}

#[derive(Debug, Default)]
pub struct SessionTracker {
    mode: TrackingMode,
    sessions: Vec<Session>, // start order
}

impl SessionTracker {
    pub fn new(mode: TrackingMode) -> Self {
        Self {
            mode,
            sessions: Vec::new(),
        }
    }

    /// Rebuild a tracker from saved sessions. Duplicate keys keep the first entry.
    pub fn with_sessions(mode: TrackingMode, sessions: Vec<Session>) -> Self {
        let mut tracker = Self::new(mode);
        for s in sessions {
            tracker.resume(s);
        }
        tracker
    }

    pub fn active(&self) -> &[Session] {
        &self.sessions
    }

    pub fn get(&self, project: &str, category: Category) -> Option<&Session> {
        self.sessions.iter().find(|s| s.matches(project, category))
    }

    pub fn is_active(&self, project: &str, category: Category) -> bool {
        self.get(project, category).is_some()
    }

    /// Start a timer for `(project, category)` at `now`.
    ///
    /// Fails if that key is already running; nothing changes in that case.
    /// In exclusive mode every other running session is removed first and
    /// handed back, still unlogged, so the caller can finish it at `now`.
    pub fn start(
        &mut self,
        project: &str,
        category: Category,
        now: DateTime<Local>,
    ) -> AppResult<Vec<Session>> {
        if self.is_active(project, category) {
            return Err(AppError::Validation(format!(
                "Already tracking {}!",
                SessionKey::new(project, category)
            )));
        }

        let displaced = match self.mode {
            TrackingMode::Independent => Vec::new(),
            TrackingMode::Exclusive => std::mem::take(&mut self.sessions),
        };

        self.sessions.push(Session::new(project, category, now));
        debug!(project, %category, displaced = displaced.len(), "session started");

        Ok(displaced)
    }

    /// Remove and return the running session for `(project, category)`.
    pub fn stop(&mut self, project: &str, category: Category) -> AppResult<Session> {
        let idx = self
            .sessions
            .iter()
            .position(|s| s.matches(project, category))
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "No active tracking for {}.",
                    SessionKey::new(project, category)
                ))
            })?;

        let session = self.sessions.remove(idx);
        debug!(project, %category, "session stopped");
        Ok(session)
    }

    /// Put a session back, e.g. after its log row could not be written.
    /// Keeps start order; a key that is already running is left alone.
    pub fn resume(&mut self, session: Session) {
        if self.is_active(&session.project, session.category) {
            return;
        }
        let idx = self
            .sessions
            .iter()
            .position(|s| s.started_at > session.started_at)
            .unwrap_or(self.sessions.len());
        self.sessions.insert(idx, session);
    }

    /// Drop a running session without logging it.
    pub fn cancel(&mut self, project: &str, category: Category) -> Option<Session> {
        let idx = self
            .sessions
            .iter()
            .position(|s| s.matches(project, category))?;
        Some(self.sessions.remove(idx))
    }
}
