//! Freezing engine output into a `SuggestionSet`.

use tracing::{debug, debug_span};

use crate::candidate::Candidate;
use crate::compose::compose_with_previous;
use crate::dedup::remove_duplicates;
use crate::settings::settings;
use crate::suggestion_set::{SuggestionFlags, SuggestionSet};

/// Deduplicate, cap at `suggestions.max_results` and freeze.
pub fn finalize(candidates: Vec<Candidate>, flags: SuggestionFlags) -> SuggestionSet {
    finalize_with_limit(candidates, flags, settings().suggestions.max_results)
}

/// Merge `typed_word` into `previous`, cap at `suggestions.max_results` and freeze.
pub fn compose_and_finalize(
    typed_word: &str,
    previous: &SuggestionSet,
    flags: SuggestionFlags,
) -> SuggestionSet {
    compose_with_limit(
        typed_word,
        previous,
        flags,
        settings().suggestions.max_results,
    )
}

pub(crate) fn finalize_with_limit(
    mut candidates: Vec<Candidate>,
    flags: SuggestionFlags,
    max_results: usize,
) -> SuggestionSet {
    let _span = debug_span!("finalize", len = candidates.len(), max_results).entered();
    remove_duplicates(&mut candidates);
    candidates.truncate(max_results);
    let set = SuggestionSet::new(candidates, flags);
    debug!(size = set.len(), will_auto_correct = set.will_auto_correct());
    set
}

pub(crate) fn compose_with_limit(
    typed_word: &str,
    previous: &SuggestionSet,
    flags: SuggestionFlags,
    max_results: usize,
) -> SuggestionSet {
    let _span = debug_span!("compose_and_finalize", typed_word, max_results).entered();
    let mut candidates = compose_with_previous(typed_word, previous);
    candidates.truncate(max_results);
    debug!(size = candidates.len());
    SuggestionSet::new(candidates, flags)
}
