//! Active sessions saved between CLI invocations.
//!
//! `rworklog start` and `rworklog stop` run in different processes, so the
//! running timers are kept in a small JSON file next to the logs.

use crate::errors::{AppError, AppResult};
use crate::models::Session;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFileContent {
    #[serde(default)]
    sessions: Vec<Session>,
}

#[derive(Debug, Clone)]
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Sessions in start order. No file means nothing is running.
    pub fn load(&self) -> AppResult<Vec<Session>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let parsed: SessionFileContent =
            serde_json::from_str(&content).map_err(|e| AppError::SessionFile {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;
        debug!(count = parsed.sessions.len(), "active sessions loaded");
        Ok(parsed.sessions)
    }

    /// Replace the file content. Written to a sibling temp file and renamed,
    /// so a crash never leaves a truncated file behind.
    pub fn save(&self, sessions: &[Session]) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&SessionFileContent {
            sessions: sessions.to_vec(),
        })?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        debug!(count = sessions.len(), "active sessions saved");
        Ok(())
    }
}
