//! Client for the remote schedule endpoint.
//!
//! `GET {base}/schedule` answers a doubly-nested envelope:
//! `{ "data": { "data": [ <weekly slot>, ... ] } }`. A non-2xx status or a
//! body that does not decode to that shape is a [`FetchError`]. Requests are
//! blocking and there is no cancellation; a racing refetch simply lets the
//! last completed load win.

use std::time::Duration;

use serde::Deserialize;
use tracing::info;

use sched_model::WeeklyClassSlot;

use crate::error::FetchError;

#[derive(Debug, Deserialize)]
struct ScheduleEnvelope {
    data: ScheduleData,
}

#[derive(Debug, Deserialize)]
struct ScheduleData {
    data: Vec<WeeklyClassSlot>,
}

/// Decodes the `/schedule` response body.
pub fn parse_schedule_envelope(body: &str) -> Result<Vec<WeeklyClassSlot>, FetchError> {
    let envelope: ScheduleEnvelope =
        serde_json::from_str(body).map_err(|error| FetchError::Payload {
            message: error.to_string(),
        })?;
    Ok(envelope.data.data)
}

#[derive(Debug, Clone)]
pub struct ScheduleClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl ScheduleClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(20))
            .build()
            .unwrap_or_default();
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    /// Fetches the weekly slot list.
    pub fn fetch_slots(&self) -> Result<Vec<WeeklyClassSlot>, FetchError> {
        let url = format!("{}/schedule", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .map_err(|source| FetchError::Http {
                url: url.clone(),
                source,
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }
        let body = response.text().map_err(|source| FetchError::Http {
            url: url.clone(),
            source,
        })?;
        let slots = parse_schedule_envelope(&body)?;
        info!(count = slots.len(), url, "fetched weekly slots");
        Ok(slots)
    }
}
