use serde::{Deserialize, Serialize};

/// Question kind of a form item, as exposed by the forms API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormFieldKind {
    Text,
    Paragraph,
    Dropdown,
    Radio,
    Checkbox,
    Scale,
    ChoiceGrid,
}

/// Field metadata extracted from one form item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub kind: FormFieldKind,
    #[serde(default)]
    pub options: Vec<String>,
    /// Decimal entry id used for URL pre-filling (decoded from the API's
    /// hexadecimal question id).
    pub entry_id: String,
    pub subject: String,
    pub stream: String,
}

/// One spreadsheet row: a selectable form option tagged with its subject
/// and stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormEntry {
    pub form_code: String,
    pub subject: String,
    pub stream: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormError {
    pub form_id: String,
    pub message: String,
}

/// Structured result of a batch extraction run.
///
/// The batch entry point always returns one of these; failures are carried
/// in `errors` rather than propagated past the boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractFormsOutcome {
    pub success: bool,
    pub rows_written: usize,
    pub fields: Vec<FormField>,
    pub errors: Vec<FormError>,
}
