//! Forms API client.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::config::EtlConfig;
use crate::error::FormsError;

/// A form document, trimmed to the parts the extraction reads.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDocument {
    #[serde(default)]
    pub info: Option<FormInfo>,
    #[serde(default)]
    pub items: Vec<FormItem>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormInfo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub question_item: Option<QuestionItem>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionItem {
    #[serde(default)]
    pub question: Option<Question>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(default)]
    pub question_id: Option<String>,
    #[serde(default)]
    pub choice_question: Option<ChoiceQuestion>,
    #[serde(default)]
    pub text_question: Option<TextQuestion>,
    #[serde(default)]
    pub scale_question: Option<ScaleQuestion>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceQuestion {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub options: Vec<ChoiceOption>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceOption {
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextQuestion {
    #[serde(default)]
    pub paragraph: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScaleQuestion {}

#[derive(Debug, Clone)]
pub struct FormsClient {
    http: reqwest::blocking::Client,
    base_url: String,
    token: String,
}

impl FormsClient {
    pub fn new(config: &EtlConfig) -> Self {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();
        Self {
            http,
            base_url: config.forms_base_url.trim_end_matches('/').to_string(),
            token: config.access_token.clone(),
        }
    }

    /// Fetches one form definition.
    pub fn get_form(&self, form_id: &str) -> Result<FormDocument, FormsError> {
        let url = format!("{}/v1/forms/{form_id}", self.base_url);
        debug!(url, "fetching form definition");
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .map_err(|source| FormsError::Http {
                url: url.clone(),
                source,
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(FormsError::Status {
                url,
                status: status.as_u16(),
            });
        }
        response.json().map_err(|source| FormsError::Http { url, source })
    }
}
