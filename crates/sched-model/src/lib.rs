pub mod etl;
pub mod facet;
pub mod session;

pub use etl::{ExtractFormsOutcome, FormEntry, FormError, FormField, FormFieldKind};
pub use facet::{Facet, FacetOption, FilterState};
pub use session::{FacetRecord, Session, WeeklyClassSlot};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_matches_everything() {
        let session = session::tests_support::sample_session();
        let state = FilterState::default();
        assert!(state.matches(&session));
    }

    #[test]
    fn outcome_serializes() {
        let outcome = ExtractFormsOutcome {
            success: true,
            rows_written: 12,
            fields: vec![],
            errors: vec![],
        };
        let json = serde_json::to_string(&outcome).expect("serialize outcome");
        let round: ExtractFormsOutcome =
            serde_json::from_str(&json).expect("deserialize outcome");
        assert_eq!(round.rows_written, 12);
        assert!(round.success);
    }
}
