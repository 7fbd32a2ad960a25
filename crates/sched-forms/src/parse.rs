//! Form-item parsing.
//!
//! The JC forms hold one preferred-slot question per cohort; the secondary
//! forms hold one choice question per subject, titled with the subject name.
//! Entry ids arrive as hexadecimal question ids and are decoded to the
//! decimal form used in pre-fill URLs.

use tracing::warn;

use sched_model::{FormEntry, FormField, FormFieldKind};

use crate::client::{FormDocument, FormItem, Question};
use crate::registry::{JC_SLOT_ITEMS, SECONDARY_SUBJECTS};

/// Which extraction rules to apply to a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionMode {
    /// A JC subject form: keep the preferred-slot items only.
    Jc { subject: String },
    /// A secondary stream form: keep subject-titled choice questions.
    Secondary { stream: String },
}

/// Parses a form document into spreadsheet entries and field metadata.
pub fn parse_form_items(
    form: &FormDocument,
    mode: &ExtractionMode,
) -> (Vec<FormEntry>, Vec<FormField>) {
    let mut entries = Vec::new();
    let mut fields = Vec::new();

    for item in &form.items {
        let Some(field) = parse_item(item, mode) else {
            continue;
        };
        for option in &field.options {
            if matches!(mode, ExtractionMode::Secondary { .. }) && option.contains("Unable") {
                continue;
            }
            entries.push(FormEntry {
                form_code: option.clone(),
                subject: field.subject.clone(),
                stream: field.stream.clone(),
            });
        }
        fields.push(field);
    }

    (entries, fields)
}

fn parse_item(item: &FormItem, mode: &ExtractionMode) -> Option<FormField> {
    let title = item.title.as_deref()?.trim();
    let question = item.question_item.as_ref()?.question.as_ref()?;
    let question_id = question.question_id.as_deref()?;

    let (subject, stream) = match mode {
        ExtractionMode::Jc { subject } => {
            if !JC_SLOT_ITEMS.contains(&title) {
                return None;
            }
            (subject.clone(), "JC".to_string())
        }
        ExtractionMode::Secondary { stream } => {
            if question.choice_question.is_none() || !SECONDARY_SUBJECTS.contains(&title) {
                return None;
            }
            (title.to_string(), stream.clone())
        }
    };

    let entry_id = match decode_entry_id(question_id) {
        Some(id) => id,
        None => {
            warn!(question_id, title, "skipping item with undecodable question id");
            return None;
        }
    };

    let (kind, options) = classify(question);
    Some(FormField {
        name: title.to_string(),
        kind,
        options,
        entry_id,
        subject,
        stream,
    })
}

/// Converts the API's hexadecimal question id to the decimal entry id used
/// in pre-fill URLs.
fn decode_entry_id(question_id: &str) -> Option<String> {
    i64::from_str_radix(question_id.trim(), 16)
        .ok()
        .map(|id| id.to_string())
}

fn classify(question: &Question) -> (FormFieldKind, Vec<String>) {
    if let Some(choice) = &question.choice_question {
        let options: Vec<String> = choice
            .options
            .iter()
            .filter_map(|option| option.value.clone())
            .collect();
        let kind = match choice.kind.as_deref() {
            Some("DROP_DOWN") => FormFieldKind::Dropdown,
            Some("CHECKBOX") => FormFieldKind::Checkbox,
            _ => FormFieldKind::Radio,
        };
        return (kind, options);
    }
    if let Some(text) = &question.text_question {
        let kind = if text.paragraph {
            FormFieldKind::Paragraph
        } else {
            FormFieldKind::Text
        };
        return (kind, Vec::new());
    }
    if question.scale_question.is_some() {
        return (FormFieldKind::Scale, Vec::new());
    }
    (FormFieldKind::Text, Vec::new())
}
