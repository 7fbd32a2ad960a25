use std::path::PathBuf;

/// A session store load that failed.
///
/// The store keeps its prior list on any of these; the view surfaces the
/// error instead of crashing.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered {status}")]
    Status { url: String, status: u16 },

    #[error("unexpected payload shape: {message}")]
    Payload { message: String },

    #[error("failed to parse roster {path}: {message}")]
    Roster { path: PathBuf, message: String },
}

impl FetchError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
