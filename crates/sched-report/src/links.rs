//! Registration deep-links.
//!
//! The signup form is external and fixed; a deep-link pre-selects the class
//! by writing the session's form option text into the subject's entry field.
//! The source field tells the form where the signup came from.

use sched_core::project::EventDetail;

const FORM_BASE_URL: &str = "https://docs.google.com/forms/d/e/1FAIpQLSdqyeoGBF4DyUXQA3cUOaZee3DB5NFhTtqPRyN5wdkQcIgL0Q/viewform";

/// Entry field marking the signup source.
const SOURCE_ENTRY_ID: &str = "2005620554";
const SOURCE_VALUE: &str = "SCHEDULE";

/// Builds the pre-filled registration link for one subject entry field.
///
/// The prefill value is percent-encoded; the entry ids are not encoded
/// because they are fixed numeric strings.
pub fn registration_link(entry_id: &str, value: &str) -> String {
    format!(
        "{FORM_BASE_URL}?entry.{SOURCE_ENTRY_ID}={SOURCE_VALUE}&entry.{entry_id}={}",
        urlencoding::encode(value)
    )
}

/// The registration link for a projected event, if it carries prefill data.
///
/// Weekly slots arrive with a ready link; dated sessions carry the value and
/// entry id separately.
pub fn event_registration_link(detail: &EventDetail) -> Option<String> {
    if let Some(link) = &detail.prefill_link {
        return Some(link.clone());
    }
    match (&detail.prefill_field, &detail.prefill) {
        (Some(field), Some(value)) => Some(registration_link(field, value)),
        _ => None,
    }
}
