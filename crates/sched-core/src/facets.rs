//! Cascading facet option resolution.
//!
//! A pure function of (records, filter state): no errors are possible and
//! nothing is cached. Option lists are recomputed wholesale on every state
//! change rather than incrementally patched.

use sched_model::{Facet, FacetOption, FacetRecord, FilterState};

/// Records passing every facet selection, in store order.
pub fn apply_filters<'r, R: FacetRecord>(records: &'r [R], state: &FilterState) -> Vec<&'r R> {
    records.iter().filter(|record| state.matches(*record)).collect()
}

/// The calendar view's input: empty until at least one facet is selected.
///
/// An unfiltered store renders nothing on the calendar, forcing a deliberate
/// selection first; the list view has no such gate.
pub fn calendar_filtered<'r, R: FacetRecord>(
    records: &'r [R],
    state: &FilterState,
) -> Vec<&'r R> {
    if !state.has_any_selection() {
        return Vec::new();
    }
    apply_filters(records, state)
}

/// Resolves the ordered option list for one facet.
///
/// Candidate values come from the stream-scoped subset (a dependent facet
/// offers no options until a stream is chosen); each candidate's count is
/// taken against the subset matching every facet *other than* the one being
/// resolved, so a selected value never hides its alternatives.
///
/// Ordering: options with a nonzero count keep first-seen record order;
/// zero-count options follow, alphabetical among themselves.
pub fn resolve_options<R: FacetRecord>(
    records: &[R],
    state: &FilterState,
    facet: Facet,
) -> Vec<FacetOption> {
    if facet != Facet::Stream && state.stream.is_none() {
        return Vec::new();
    }

    let candidates = candidate_values(records, state, facet);
    let upstream: Vec<&R> = records
        .iter()
        .filter(|record| state.matches_excluding(*record, facet))
        .collect();

    let mut options: Vec<FacetOption> = candidates
        .into_iter()
        .map(|value| {
            let count = upstream
                .iter()
                .filter(|record| record.facet_value(facet).as_deref() == Some(value.as_str()))
                .count();
            let selected = state.is_selected(facet, &value);
            FacetOption {
                value,
                count,
                selected,
            }
        })
        .collect();

    let mut zeroes: Vec<FacetOption> = Vec::new();
    options.retain(|option| {
        if option.count == 0 {
            zeroes.push(option.clone());
            false
        } else {
            true
        }
    });
    zeroes.sort_by(|a, b| a.value.cmp(&b.value));
    options.extend(zeroes);
    options
}

/// Resolves every facet's option list at once, in display order.
pub fn resolve_all<R: FacetRecord>(
    records: &[R],
    state: &FilterState,
) -> Vec<(Facet, Vec<FacetOption>)> {
    Facet::ALL
        .iter()
        .map(|facet| (*facet, resolve_options(records, state, *facet)))
        .collect()
}

/// Distinct values a facet can offer, in first-seen record order.
///
/// The stream facet draws from the whole store; every other facet draws from
/// the stream-scoped subset only.
fn candidate_values<R: FacetRecord>(
    records: &[R],
    state: &FilterState,
    facet: Facet,
) -> Vec<String> {
    let mut values = Vec::new();
    for record in records {
        if facet != Facet::Stream
            && !state.value_matches(Facet::Stream, record.facet_value(Facet::Stream).as_deref())
        {
            continue;
        }
        if let Some(value) = record.facet_value(facet)
            && !values.contains(&value)
        {
            values.push(value);
        }
    }
    values
}
