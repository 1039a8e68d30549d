//! Fixed punctuation suggestions shown when no word is being composed.

use crate::candidate::{source, Candidate, CandidateKind, MAX_SCORE};
use crate::dedup::remove_duplicates;
use crate::settings::Settings;
use crate::suggestion_set::{SuggestionFlags, SuggestionSet};

/// Build the punctuation strip from the configured list, in configured order.
pub fn punctuation_suggestions(settings: &Settings) -> SuggestionSet {
    let mut candidates: Vec<Candidate> = settings
        .punctuation
        .suggestions
        .iter()
        .map(|p| {
            Candidate::new(
                p.as_str(),
                MAX_SCORE,
                CandidateKind::Hardcoded,
                source::HARDCODED,
            )
        })
        .collect();
    remove_duplicates(&mut candidates);
    SuggestionSet::new(
        candidates,
        SuggestionFlags {
            is_punctuation: true,
            ..SuggestionFlags::default()
        },
    )
}
