//! Session feed loading and the read-mostly store.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use sched_model::Session;

use crate::error::FetchError;

/// Reads a session feed: a JSON array of session records.
pub fn load_sessions(path: &Path) -> Result<Vec<Session>, FetchError> {
    let raw = fs::read_to_string(path).map_err(|source| FetchError::io(path, source))?;
    let sessions: Vec<Session> =
        serde_json::from_str(&raw).map_err(|error| FetchError::Payload {
            message: format!("{}: {error}", path.display()),
        })?;
    info!(count = sessions.len(), path = %path.display(), "loaded session feed");
    Ok(sessions)
}

/// Holder of the current session list.
///
/// The list is replaced wholesale on a successful refresh; a failed refresh
/// keeps the prior list and records the error for the view layer. There is
/// no background refresh; callers refresh lazily on mount.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Vec<Session>,
    last_error: Option<String>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    /// The error of the most recent failed refresh, cleared by a successful
    /// one.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Applies a load result. Returns true if the list was replaced.
    pub fn refresh(&mut self, result: Result<Vec<Session>, FetchError>) -> bool {
        match result {
            Ok(sessions) => {
                self.sessions = sessions;
                self.last_error = None;
                true
            }
            Err(error) => {
                warn!(%error, kept = self.sessions.len(), "refresh failed, keeping prior list");
                self.last_error = Some(error.to_string());
                false
            }
        }
    }
}
