//! Spreadsheet writer.
//!
//! The sheet write is clear-then-write: the target range is wiped first and
//! the full row set lands in a single batch update together with the
//! last-updated stamp. A failure before the update leaves the prior data
//! untouched; a failure during it is reported as a sheet error. There is
//! no partial merge path.

use std::time::Duration;

use serde_json::{Value, json};
use tracing::info;

use sched_model::FormEntry;

use crate::config::EtlConfig;
use crate::error::FormsError;

/// Rows A2:C1000 of the options sheet; row 1 holds the header.
const DATA_RANGE: &str = "A2:C1000";
/// Cell carrying the last-updated stamp.
const STAMP_RANGE: &str = "E1";

/// Body of the batch-clear call.
pub fn clear_request_body(sheet_name: &str) -> Value {
    json!({ "ranges": [format!("{sheet_name}!{DATA_RANGE}")] })
}

/// Body of the batch-update call: the entry rows plus the stamp cell.
pub fn update_request_body(sheet_name: &str, entries: &[FormEntry], stamp: &str) -> Value {
    let rows: Vec<Value> = entries
        .iter()
        .map(|entry| json!([entry.form_code, entry.subject, entry.stream]))
        .collect();
    json!({
        "valueInputOption": "USER_ENTERED",
        "data": [
            {
                "majorDimension": "ROWS",
                "range": format!("{sheet_name}!{DATA_RANGE}"),
                "values": rows,
            },
            {
                "majorDimension": "ROWS",
                "range": format!("{sheet_name}!{STAMP_RANGE}"),
                "values": [[format!("Last Updated At: {stamp}")]],
            }
        ]
    })
}

#[derive(Debug, Clone)]
pub struct SheetsClient {
    http: reqwest::blocking::Client,
    base_url: String,
    token: String,
    spreadsheet_id: String,
    sheet_name: String,
}

impl SheetsClient {
    pub fn new(config: &EtlConfig) -> Self {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();
        Self {
            http,
            base_url: config.sheets_base_url.trim_end_matches('/').to_string(),
            token: config.access_token.clone(),
            spreadsheet_id: config.spreadsheet_id.clone(),
            sheet_name: config.sheet_name.clone(),
        }
    }

    /// Wipes the data range, then writes all rows and the stamp.
    pub fn replace_entries(&self, entries: &[FormEntry], stamp: &str) -> Result<(), FormsError> {
        self.post(
            "values:batchClear",
            &clear_request_body(&self.sheet_name),
        )?;
        self.post(
            "values:batchUpdate",
            &update_request_body(&self.sheet_name, entries, stamp),
        )?;
        info!(rows = entries.len(), sheet = %self.sheet_name, "sheet replaced");
        Ok(())
    }

    fn post(&self, action: &str, body: &Value) -> Result<(), FormsError> {
        let url = format!(
            "{}/v4/spreadsheets/{}/{action}",
            self.base_url, self.spreadsheet_id
        );
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .map_err(|source| FormsError::Http {
                url: url.clone(),
                source,
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(FormsError::Sheet {
                message: format!("{url} answered {status}"),
            });
        }
        Ok(())
    }
}
