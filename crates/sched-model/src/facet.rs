use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::session::FacetRecord;

/// A filterable dimension of a class session.
///
/// Stream is single-valued and is the ancestor of every other facet:
/// selecting a stream scopes the candidate options of the dependent facets,
/// and changing it resets their selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facet {
    Stream,
    Level,
    Subject,
    Topic,
    Centre,
    Tutor,
}

impl Facet {
    /// All facets, in display order (stream first, then its dependents).
    pub const ALL: [Facet; 6] = [
        Facet::Stream,
        Facet::Level,
        Facet::Subject,
        Facet::Topic,
        Facet::Centre,
        Facet::Tutor,
    ];

    /// The facets whose selections depend on the stream choice.
    pub const DEPENDENTS: [Facet; 5] = [
        Facet::Level,
        Facet::Subject,
        Facet::Topic,
        Facet::Centre,
        Facet::Tutor,
    ];

    /// Returns true for facets that accept more than one selected value.
    pub fn is_multi_valued(&self) -> bool {
        !matches!(self, Facet::Stream)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Facet::Stream => "stream",
            Facet::Level => "level",
            Facet::Subject => "subject",
            Facet::Topic => "topic",
            Facet::Centre => "centre",
            Facet::Tutor => "tutor",
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Facet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stream" => Ok(Facet::Stream),
            "level" => Ok(Facet::Level),
            "subject" => Ok(Facet::Subject),
            "topic" => Ok(Facet::Topic),
            "centre" | "center" => Ok(Facet::Centre),
            "tutor" => Ok(Facet::Tutor),
            _ => Err(format!("Unknown facet: {}", s)),
        }
    }
}

/// Currently-selected facet values.
///
/// An empty multi-valued selection means "no restriction" (match-all), never
/// match-none. Topic selections use the composite display form
/// `[Subject] Topic`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub stream: Option<String>,
    pub level: Vec<String>,
    pub subject: Vec<String>,
    pub topic: Vec<String>,
    pub centre: Vec<String>,
    pub tutor: Vec<String>,
}

impl FilterState {
    /// Returns the selected values for a facet (the stream selection is
    /// exposed as a zero-or-one element slice).
    pub fn selected(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Stream => self.stream.as_slice(),
            Facet::Level => &self.level,
            Facet::Subject => &self.subject,
            Facet::Topic => &self.topic,
            Facet::Centre => &self.centre,
            Facet::Tutor => &self.tutor,
        }
    }

    /// Returns true if `value` is currently selected for `facet`.
    pub fn is_selected(&self, facet: Facet, value: &str) -> bool {
        self.selected(facet).iter().any(|v| v == value)
    }

    /// Returns true if any facet has a selection at all.
    pub fn has_any_selection(&self) -> bool {
        Facet::ALL.iter().any(|facet| !self.selected(*facet).is_empty())
    }

    /// Whether a record value passes the selection for one facet.
    ///
    /// An empty selection passes everything. A record that has no value for
    /// a facet is excluded once that facet is restricted.
    pub fn value_matches(&self, facet: Facet, value: Option<&str>) -> bool {
        let selection = self.selected(facet);
        if selection.is_empty() {
            return true;
        }
        match value {
            Some(value) => selection.iter().any(|v| v == value),
            None => false,
        }
    }

    /// Whether a record passes every facet selection.
    pub fn matches<R: FacetRecord>(&self, record: &R) -> bool {
        Facet::ALL
            .iter()
            .all(|facet| self.value_matches(*facet, record.facet_value(*facet).as_deref()))
    }

    /// Whether a record passes every facet selection except `skip`.
    ///
    /// This is the upstream-filtered view used when computing the option
    /// list for `skip` itself.
    pub fn matches_excluding<R: FacetRecord>(&self, record: &R, skip: Facet) -> bool {
        Facet::ALL.iter().filter(|facet| **facet != skip).all(|facet| {
            self.value_matches(*facet, record.facet_value(*facet).as_deref())
        })
    }
}

/// One selectable value of a facet, annotated with how many sessions would
/// remain if it were added to the current selection.
///
/// Derived and ephemeral: recomputed wholesale on every filter change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOption {
    pub value: String,
    pub count: usize,
    pub selected: bool,
}
