//! The batch extraction run.
//!
//! Forms are fetched one at a time; a form that fails becomes an entry in
//! the outcome's error list and the run continues. The spreadsheet is only
//! touched once every reachable form has been read.

use chrono::Local;
use tracing::{error, info, info_span};

use sched_model::{ExtractFormsOutcome, FormEntry, FormError, FormField};

use crate::client::FormsClient;
use crate::config::EtlConfig;
use crate::parse::{ExtractionMode, parse_form_items};
use crate::registry::{JC_FORM_IDS, SECONDARY_FORM_IDS};
use crate::sheet::SheetsClient;

/// Runs the full extraction and returns a structured outcome.
///
/// Never panics and never propagates an error past this boundary: every
/// failure lands in the outcome's error list, and `success` is false if any
/// occurred.
pub fn run_extraction(config: &EtlConfig) -> ExtractFormsOutcome {
    let span = info_span!("extract_forms", spreadsheet = %config.spreadsheet_id);
    let _guard = span.enter();

    let forms = FormsClient::new(config);
    let mut entries: Vec<FormEntry> = Vec::new();
    let mut fields: Vec<FormField> = Vec::new();
    let mut errors: Vec<FormError> = Vec::new();

    for (subject, form_id) in JC_FORM_IDS {
        let mode = ExtractionMode::Jc {
            subject: subject.to_string(),
        };
        collect_form(&forms, form_id, &mode, &mut entries, &mut fields, &mut errors);
    }
    for (stream, form_id) in SECONDARY_FORM_IDS {
        let mode = ExtractionMode::Secondary {
            stream: stream.to_string(),
        };
        collect_form(&forms, form_id, &mode, &mut entries, &mut fields, &mut errors);
    }

    let stamp = Local::now().format("%d/%m/%Y, %H:%M:%S").to_string();
    let rows_written = match SheetsClient::new(config).replace_entries(&entries, &stamp) {
        Ok(()) => entries.len(),
        Err(sheet_error) => {
            error!(%sheet_error, "sheet write failed");
            errors.push(FormError {
                form_id: String::new(),
                message: sheet_error.to_string(),
            });
            0
        }
    };

    let success = errors.is_empty();
    info!(rows_written, fields = fields.len(), success, "extraction finished");
    ExtractFormsOutcome {
        success,
        rows_written,
        fields,
        errors,
    }
}

fn collect_form(
    forms: &FormsClient,
    form_id: &str,
    mode: &ExtractionMode,
    entries: &mut Vec<FormEntry>,
    fields: &mut Vec<FormField>,
    errors: &mut Vec<FormError>,
) {
    info!(form_id, ?mode, "fetching form");
    match forms.get_form(form_id) {
        Ok(document) => {
            let (form_entries, form_fields) = parse_form_items(&document, mode);
            entries.extend(form_entries);
            fields.extend(form_fields);
        }
        Err(fetch_error) => {
            errors.push(FormError {
                form_id: form_id.to_string(),
                message: fetch_error.to_string(),
            });
        }
    }
}
