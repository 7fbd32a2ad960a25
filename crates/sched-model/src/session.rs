use serde::{Deserialize, Serialize};

use crate::facet::Facet;

/// A single dated class session as published in the schedule feed.
///
/// `date` is day-month text with the year omitted (e.g. `"24 May"`); the
/// projection layer supplies the epoch year. Times are 12-hour wall clock
/// strings (e.g. `"10:00 AM"`). Records are immutable once loaded; a store
/// is replaced wholesale on refetch, never patched in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub subject: String,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub stream: String,
    pub tutor: String,
    pub centre: String,
    #[serde(default)]
    pub classroom: Option<String>,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    /// Form option text used to pre-fill the registration form.
    #[serde(default)]
    pub prefill: Option<String>,
    /// Entry-field id the prefill value is bound to.
    #[serde(default)]
    pub prefill_field: Option<String>,
}

impl Session {
    /// The composite topic form shown in the topic filter: `[Subject] Topic`.
    pub fn topic_option(&self) -> Option<String> {
        self.topic
            .as_ref()
            .map(|topic| format!("[{}] {}", self.subject, topic))
    }
}

/// A weekly-recurring class slot, identified by weekday and time range
/// rather than an absolute date.
///
/// `day` is 0 (Sunday) through 6 (Saturday); times are 24-hour `HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyClassSlot {
    pub title: String,
    pub day: u8,
    pub start_time: String,
    pub end_time: String,
    pub subject: String,
    pub tutor: String,
    pub centre: String,
    pub stream: String,
    pub level: String,
    #[serde(default)]
    pub prefill_link: String,
}

/// Seam between the filter machinery and the two record shapes.
///
/// A facet the record does not carry answers `None`; the filter treats such
/// a record as excluded once that facet is restricted.
pub trait FacetRecord {
    fn facet_value(&self, facet: Facet) -> Option<String>;
}

impl FacetRecord for Session {
    fn facet_value(&self, facet: Facet) -> Option<String> {
        match facet {
            Facet::Stream => non_empty(&self.stream),
            Facet::Level => non_empty(&self.level),
            Facet::Subject => Some(self.subject.clone()),
            Facet::Topic => self.topic_option(),
            Facet::Centre => Some(self.centre.clone()),
            Facet::Tutor => Some(self.tutor.clone()),
        }
    }
}

impl FacetRecord for WeeklyClassSlot {
    fn facet_value(&self, facet: Facet) -> Option<String> {
        match facet {
            Facet::Stream => non_empty(&self.stream),
            Facet::Level => non_empty(&self.level),
            Facet::Subject => Some(self.subject.clone()),
            Facet::Topic => None,
            Facet::Centre => Some(self.centre.clone()),
            Facet::Tutor => Some(self.tutor.clone()),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_option_uses_composite_form() {
        let session = tests_support::sample_session();
        assert_eq!(
            session.topic_option().as_deref(),
            Some("[Chemistry] Organic Chemistry")
        );
    }

    #[test]
    fn session_deserializes_from_feed_shape() {
        let json = r#"{
            "subject": "Physics",
            "topic": "Waves",
            "level": "JC1",
            "stream": "JC",
            "tutor": "Ms Lim",
            "centre": "Tampines",
            "classroom": "Room 1",
            "date": "31 May",
            "startTime": "2:00 PM",
            "endTime": "5:00 PM",
            "prefill": "31 May Physics 2:00 PM",
            "prefillField": "299425437"
        }"#;
        let session: Session = serde_json::from_str(json).expect("deserialize session");
        assert_eq!(session.start_time, "2:00 PM");
        assert_eq!(session.prefill_field.as_deref(), Some("299425437"));
    }

    #[test]
    fn slot_without_topic_answers_none() {
        let slot = WeeklyClassSlot {
            title: "Sec 3 Chemistry".to_string(),
            day: 2,
            start_time: "17:00".to_string(),
            end_time: "19:00".to_string(),
            subject: "Chemistry".to_string(),
            tutor: "Mr Ong".to_string(),
            centre: "Jurong".to_string(),
            stream: "Secondary".to_string(),
            level: "Sec 3".to_string(),
            prefill_link: String::new(),
        };
        assert_eq!(slot.facet_value(Facet::Topic), None);
        assert_eq!(slot.facet_value(Facet::Centre).as_deref(), Some("Jurong"));
    }
}
