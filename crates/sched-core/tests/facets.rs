//! Tests for the cascading option resolver and filter transitions.

use sched_core::facets::{apply_filters, calendar_filtered, resolve_options};
use sched_core::state::{FilterUpdate, set_filter, toggle_option};
use sched_model::{Facet, FacetRecord, FilterState, Session};

/// Fixture of 26 synthetic sessions spanning two streams, three subjects,
/// five centres, and three tutors. The two trailing sessions sit at centres
/// only one tutor teaches at, so restricting the tutor facet produces
/// zero-count centre options.
fn fixture() -> Vec<Session> {
    let subjects = ["Math", "Chemistry", "Physics"];
    let centres = ["Bukit Timah", "Tampines", "Jurong"];
    let tutors = ["Mr Tan", "Ms Lim", "Mr Ong"];
    let mut sessions = Vec::new();
    for index in 0..24usize {
        let subject = subjects[index % 3];
        let (stream, level) = if index % 2 == 0 {
            ("JC", if index % 4 == 0 { "JC1" } else { "JC2" })
        } else {
            ("Secondary", if index % 4 == 1 { "Sec 3" } else { "Sec 4" })
        };
        sessions.push(Session {
            subject: subject.to_string(),
            topic: Some(format!("Topic {}", index % 5)),
            level: level.to_string(),
            stream: stream.to_string(),
            tutor: tutors[(index / 2) % 3].to_string(),
            centre: centres[(index / 3) % 3].to_string(),
            classroom: None,
            date: format!("{} May", (index % 28) + 1),
            start_time: "10:00 AM".to_string(),
            end_time: "1:00 PM".to_string(),
            prefill: None,
            prefill_field: None,
        });
    }
    for centre in ["Woodlands", "Ang Mo Kio"] {
        sessions.push(Session {
            subject: "Math".to_string(),
            topic: Some("Topic 0".to_string()),
            level: "JC1".to_string(),
            stream: "JC".to_string(),
            tutor: "Mr Ong".to_string(),
            centre: centre.to_string(),
            classroom: None,
            date: "30 May".to_string(),
            start_time: "10:00 AM".to_string(),
            end_time: "1:00 PM".to_string(),
            prefill: None,
            prefill_field: None,
        });
    }
    sessions
}

fn jc_state() -> FilterState {
    FilterState {
        stream: Some("JC".to_string()),
        ..FilterState::default()
    }
}

#[test]
fn filtered_list_is_a_subset_and_idempotent() {
    let sessions = fixture();
    let mut state = jc_state();
    state.subject = vec!["Math".to_string()];
    state.centre = vec!["Tampines".to_string()];

    let first = apply_filters(&sessions, &state);
    let second = apply_filters(&sessions, &state);

    assert!(first.len() <= sessions.len());
    assert!(first.iter().all(|s| sessions.iter().any(|o| &o == s)));
    assert_eq!(first, second, "same state must yield the same list");
}

#[test]
fn option_counts_match_a_brute_force_recount() {
    let sessions = fixture();
    let mut state = jc_state();
    state.subject = vec!["Math".to_string(), "Chemistry".to_string()];
    state.tutor = vec!["Mr Tan".to_string()];

    for facet in Facet::ALL {
        for option in resolve_options(&sessions, &state, facet) {
            let expected = sessions
                .iter()
                .filter(|s| state.matches_excluding(*s, facet))
                .filter(|s| s.facet_value(facet).as_deref() == Some(option.value.as_str()))
                .count();
            assert_eq!(
                option.count, expected,
                "count mismatch for {facet} option {:?}",
                option.value
            );
        }
    }
}

#[test]
fn dependent_facets_offer_nothing_until_a_stream_is_chosen() {
    let sessions = fixture();
    let state = FilterState::default();

    for facet in Facet::DEPENDENTS {
        assert!(
            resolve_options(&sessions, &state, facet).is_empty(),
            "{facet} should be empty without a stream"
        );
    }
    assert!(!resolve_options(&sessions, &state, Facet::Stream).is_empty());
}

#[test]
fn stream_change_resets_every_dependent_selection() {
    let mut state = FilterState {
        stream: Some("JC".to_string()),
        level: vec!["JC1".to_string()],
        subject: vec!["Math".to_string()],
        topic: vec!["[Math] Topic 0".to_string()],
        centre: vec!["Jurong".to_string()],
        tutor: vec!["Mr Tan".to_string()],
    };

    set_filter(&mut state, FilterUpdate::Stream(Some("Secondary".to_string())));

    assert_eq!(state.stream.as_deref(), Some("Secondary"));
    assert!(state.level.is_empty());
    assert!(state.subject.is_empty());
    assert!(state.topic.is_empty());
    assert!(state.centre.is_empty());
    assert!(state.tutor.is_empty());
}

#[test]
fn reasserting_the_same_stream_keeps_dependents() {
    let mut state = jc_state();
    state.level = vec!["JC1".to_string()];

    set_filter(&mut state, FilterUpdate::Stream(Some("JC".to_string())));

    assert_eq!(state.level, vec!["JC1".to_string()]);
}

#[test]
fn sibling_facets_never_force_clear_each_other() {
    let mut state = jc_state();
    state.centre = vec!["Tampines".to_string()];
    state.tutor = vec!["Ms Lim".to_string()];

    set_filter(&mut state, FilterUpdate::Level(vec!["JC2".to_string()]));

    assert_eq!(state.centre, vec!["Tampines".to_string()]);
    assert_eq!(state.tutor, vec!["Ms Lim".to_string()]);
}

#[test]
fn deselecting_a_subject_prunes_its_topics() {
    let mut state = jc_state();
    state.subject = vec!["Math".to_string(), "Physics".to_string()];
    state.topic = vec![
        "[Math] Topic 0".to_string(),
        "[Physics] Topic 2".to_string(),
    ];

    set_filter(&mut state, FilterUpdate::Subject(vec!["Physics".to_string()]));

    assert_eq!(state.topic, vec!["[Physics] Topic 2".to_string()]);

    // Clearing the subject restriction keeps all topics.
    state.topic.push("[Math] Topic 0".to_string());
    set_filter(&mut state, FilterUpdate::Subject(vec![]));
    assert_eq!(state.topic.len(), 2);
}

#[test]
fn toggling_a_zero_count_option_is_a_no_op() {
    let sessions = fixture();
    let mut state = jc_state();
    // Sec 3 only exists in the Secondary stream, so its count under JC is 0.
    let options = resolve_options(&sessions, &state, Facet::Level);
    assert!(options.iter().all(|o| o.value != "Sec 3"));

    let before = state.clone();
    let changed = toggle_option(&sessions, &mut state, Facet::Level, "Sec 3");
    assert!(!changed);
    assert_eq!(state, before);
}

#[test]
fn toggle_adds_then_removes_a_selection() {
    let sessions = fixture();
    let mut state = jc_state();

    assert!(toggle_option(&sessions, &mut state, Facet::Subject, "Math"));
    assert_eq!(state.subject, vec!["Math".to_string()]);

    assert!(toggle_option(&sessions, &mut state, Facet::Subject, "Math"));
    assert!(state.subject.is_empty());
}

#[test]
fn zero_count_options_sort_after_live_ones_alphabetically() {
    let sessions = fixture();
    let mut state = jc_state();
    // Restricting to one tutor leaves some centres with no matching session.
    state.tutor = vec!["Mr Tan".to_string()];

    let options = resolve_options(&sessions, &state, Facet::Centre);
    let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();

    // Live options keep first-seen record order; the two centres Mr Tan
    // never teaches at trail behind, alphabetically.
    assert_eq!(
        values,
        vec!["Bukit Timah", "Tampines", "Jurong", "Ang Mo Kio", "Woodlands"]
    );
    assert!(options[..3].iter().all(|o| o.count > 0));
    assert!(options[3..].iter().all(|o| o.count == 0));
}

#[test]
fn selected_options_are_flagged() {
    let sessions = fixture();
    let mut state = jc_state();
    state.subject = vec!["Chemistry".to_string()];

    let options = resolve_options(&sessions, &state, Facet::Subject);
    let chemistry = options
        .iter()
        .find(|o| o.value == "Chemistry")
        .expect("chemistry offered");
    assert!(chemistry.selected);
    assert!(options.iter().filter(|o| o.value != "Chemistry").all(|o| !o.selected));
}

#[test]
fn calendar_stays_empty_until_something_is_selected() {
    let sessions = fixture();
    let state = FilterState::default();
    assert!(calendar_filtered(&sessions, &state).is_empty());

    let selected = jc_state();
    assert!(!calendar_filtered(&sessions, &selected).is_empty());
}
