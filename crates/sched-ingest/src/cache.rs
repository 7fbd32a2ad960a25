//! Timestamped feed cache with a fixed time-to-live.
//!
//! The cache is a single JSON file holding the payload and its fetch time.
//! Consulting it is a pure freshness check; there is no invalidation beyond
//! the TTL and no locking (a single local writer is assumed). A stale or
//! unreadable entry simply falls through to a live fetch, which rewrites it.

use std::fs;
use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::FetchError;

/// How long a cached payload is reused before a refetch.
pub const CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// A cached payload and the instant it was fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    pub fetched_at: DateTime<Utc>,
    pub payload: T,
}

impl<T> CacheEntry<T> {
    pub fn new(fetched_at: DateTime<Utc>, payload: T) -> Self {
        Self {
            fetched_at,
            payload,
        }
    }

    /// Whether the entry is still young enough to reuse.
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        let age = now.signed_duration_since(self.fetched_at);
        age >= chrono::Duration::zero()
            && age.to_std().map(|age| age < ttl).unwrap_or(false)
    }
}

/// Reads a cache entry, quietly answering `None` when the file is missing
/// or unreadable. Cache damage is never an error, just a miss.
pub fn read_cache<T: DeserializeOwned>(path: &Path) -> Option<CacheEntry<T>> {
    let raw = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&raw) {
        Ok(entry) => Some(entry),
        Err(error) => {
            debug!(path = %path.display(), %error, "discarding unreadable cache entry");
            None
        }
    }
}

/// Writes a cache entry, creating the parent directory if needed.
pub fn write_cache<T: Serialize>(path: &Path, entry: &CacheEntry<T>) -> Result<(), FetchError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| FetchError::io(parent, source))?;
    }
    let raw = serde_json::to_string(entry).map_err(|error| FetchError::Payload {
        message: error.to_string(),
    })?;
    fs::write(path, raw).map_err(|source| FetchError::io(path, source))
}
