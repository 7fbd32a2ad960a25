//! Batch-run configuration.
//!
//! All external identifiers come from the environment; a missing one is
//! fatal for the batch run and surfaces as a [`ConfigurationError`] naming
//! the variable.

use thiserror::Error;

pub const ACCESS_TOKEN_VAR: &str = "GOOGLE_ACCESS_TOKEN";
pub const SPREADSHEET_ID_VAR: &str = "SCHEDULING_MASTER_DATA_SPREADSHEET_ID";
pub const SHEET_NAME_VAR: &str = "FORM_OPTIONS_SHEET_NAME";

const DEFAULT_FORMS_BASE_URL: &str = "https://forms.googleapis.com";
const DEFAULT_SHEETS_BASE_URL: &str = "https://sheets.googleapis.com";

/// A required external credential or identifier is missing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required configuration: {variable} is not set")]
pub struct ConfigurationError {
    pub variable: String,
}

/// Credentials and identifiers for one extraction run.
///
/// The bearer token is expected ready-made; exchanging a service-account key
/// for one is an operational step outside the batch run.
#[derive(Debug, Clone)]
pub struct EtlConfig {
    pub access_token: String,
    pub spreadsheet_id: String,
    pub sheet_name: String,
    pub forms_base_url: String,
    pub sheets_base_url: String,
}

impl EtlConfig {
    /// Reads the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through an arbitrary lookup (the seam used
    /// by tests).
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigurationError> {
        let required = |variable: &str| {
            lookup(variable)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigurationError {
                    variable: variable.to_string(),
                })
        };
        Ok(Self {
            access_token: required(ACCESS_TOKEN_VAR)?,
            spreadsheet_id: required(SPREADSHEET_ID_VAR)?,
            sheet_name: required(SHEET_NAME_VAR)?,
            forms_base_url: DEFAULT_FORMS_BASE_URL.to_string(),
            sheets_base_url: DEFAULT_SHEETS_BASE_URL.to_string(),
        })
    }
}
