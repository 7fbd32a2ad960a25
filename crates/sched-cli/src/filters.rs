//! Filter flag application.
//!
//! CLI filter flags are applied through the same transition rules the
//! interactive views use: the stream first, then each dependent value as a
//! count-guarded toggle. A value the current cascade does not offer is
//! rejected rather than silently matched against nothing.

use sched_core::state::{FilterUpdate, set_filter, toggle_option};
use sched_model::{Facet, FacetRecord, FilterState};

/// Filter selections as they arrive from the command line.
#[derive(Debug, Clone, Default)]
pub struct FilterFlags {
    pub stream: Option<String>,
    pub level: Vec<String>,
    pub subject: Vec<String>,
    pub topic: Vec<String>,
    pub centre: Vec<String>,
    pub tutor: Vec<String>,
}

/// A filter value the cascade refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedValue {
    pub facet: Facet,
    pub value: String,
}

/// Builds a filter state from CLI flags, in declaration order.
///
/// Returns the state plus the values that were rejected (unknown, or with a
/// zero count under the selections made so far).
pub fn build_filter_state<R: FacetRecord>(
    records: &[R],
    flags: &FilterFlags,
) -> (FilterState, Vec<RejectedValue>) {
    let mut state = FilterState::default();
    let mut rejected = Vec::new();

    if let Some(stream) = &flags.stream {
        set_filter(&mut state, FilterUpdate::Stream(Some(stream.clone())));
    }

    let groups = [
        (Facet::Level, &flags.level),
        (Facet::Subject, &flags.subject),
        (Facet::Topic, &flags.topic),
        (Facet::Centre, &flags.centre),
        (Facet::Tutor, &flags.tutor),
    ];
    for (facet, values) in groups {
        for value in values {
            if !toggle_option(records, &mut state, facet, value) {
                rejected.push(RejectedValue {
                    facet,
                    value: value.clone(),
                });
            }
        }
    }

    (state, rejected)
}
