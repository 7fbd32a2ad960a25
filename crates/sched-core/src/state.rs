//! Filter state transitions.
//!
//! All changes flow through [`set_filter`]; views never mutate
//! [`FilterState`] fields directly. The stream facet cascades strictly (a
//! stream change resets every dependent selection). The remaining facets are
//! bidirectional: changing one reshapes the others' *option lists* but
//! never clears their selections, except that topic selections are pruned
//! when their `[Subject]` prefix is deselected.

use tracing::debug;

use sched_model::{Facet, FacetRecord, FilterState};

use crate::facets::resolve_options;

/// A single filter assignment, one variant per facet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterUpdate {
    Stream(Option<String>),
    Level(Vec<String>),
    Subject(Vec<String>),
    Topic(Vec<String>),
    Centre(Vec<String>),
    Tutor(Vec<String>),
}

impl FilterUpdate {
    pub fn facet(&self) -> Facet {
        match self {
            FilterUpdate::Stream(_) => Facet::Stream,
            FilterUpdate::Level(_) => Facet::Level,
            FilterUpdate::Subject(_) => Facet::Subject,
            FilterUpdate::Topic(_) => Facet::Topic,
            FilterUpdate::Centre(_) => Facet::Centre,
            FilterUpdate::Tutor(_) => Facet::Tutor,
        }
    }
}

/// Applies one filter assignment, enforcing the transition rules.
pub fn set_filter(state: &mut FilterState, update: FilterUpdate) {
    match update {
        FilterUpdate::Stream(stream) => {
            if state.stream != stream {
                state.level.clear();
                state.subject.clear();
                state.topic.clear();
                state.centre.clear();
                state.tutor.clear();
            }
            state.stream = stream;
        }
        FilterUpdate::Level(values) => state.level = values,
        FilterUpdate::Subject(values) => {
            state.subject = values;
            prune_topics(state);
        }
        FilterUpdate::Topic(values) => state.topic = values,
        FilterUpdate::Centre(values) => state.centre = values,
        FilterUpdate::Tutor(values) => state.tutor = values,
    }
}

/// Toggles one option on or off, guarded by its current count.
///
/// Selecting a value that is not currently offered, or whose count is zero,
/// is a no-op. Returns true if the state changed.
pub fn toggle_option<R: FacetRecord>(
    records: &[R],
    state: &mut FilterState,
    facet: Facet,
    value: &str,
) -> bool {
    if state.is_selected(facet, value) {
        let remaining: Vec<String> = state
            .selected(facet)
            .iter()
            .filter(|v| v.as_str() != value)
            .cloned()
            .collect();
        let update = if facet == Facet::Stream {
            FilterUpdate::Stream(None)
        } else {
            multi_update(facet, remaining)
        };
        set_filter(state, update);
        return true;
    }

    let options = resolve_options(records, state, facet);
    let offered = options
        .iter()
        .find(|option| option.value == value)
        .is_some_and(|option| option.count > 0);
    if !offered {
        debug!(facet = %facet, value, "ignoring disabled filter option");
        return false;
    }

    let update = if facet == Facet::Stream {
        FilterUpdate::Stream(Some(value.to_string()))
    } else {
        let mut values = state.selected(facet).to_vec();
        values.push(value.to_string());
        multi_update(facet, values)
    };
    set_filter(state, update);
    true
}

fn multi_update(facet: Facet, values: Vec<String>) -> FilterUpdate {
    match facet {
        Facet::Level => FilterUpdate::Level(values),
        Facet::Subject => FilterUpdate::Subject(values),
        Facet::Topic => FilterUpdate::Topic(values),
        Facet::Centre => FilterUpdate::Centre(values),
        Facet::Tutor => FilterUpdate::Tutor(values),
        Facet::Stream => unreachable!("stream is single-valued"),
    }
}

/// Drops topic selections whose `[Subject]` prefix is no longer selected.
///
/// Only applies while subjects are restricted; with no subject selection
/// every topic stays.
fn prune_topics(state: &mut FilterState) {
    if state.subject.is_empty() {
        return;
    }
    let subjects = state.subject.clone();
    state.topic.retain(|topic| {
        subjects
            .iter()
            .any(|subject| topic.starts_with(&format!("[{subject}]")))
    });
}
