use thiserror::Error;

/// A failure while talking to the forms or sheets API.
#[derive(Debug, Error)]
pub enum FormsError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered {status}")]
    Status { url: String, status: u16 },

    #[error("spreadsheet write failed: {message}")]
    Sheet { message: String },
}
