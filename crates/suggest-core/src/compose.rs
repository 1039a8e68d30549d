//! Merge a newly typed word into the previous suggestion set.

use tracing::{debug, debug_span};

use crate::candidate::Candidate;
use crate::suggestion_set::SuggestionSet;

/// Replace the stale typed-word head of `previous` with `typed_word` and carry
/// the rest of `previous` forward.
///
/// Rank 0 of `previous` is dropped. Later entries are kept in order unless
/// their text was already emitted (exact, case-sensitive); no score
/// comparison happens here.
pub fn compose_with_previous(typed_word: &str, previous: &SuggestionSet) -> Vec<Candidate> {
    let _span =
        debug_span!("compose_with_previous", typed_word, previous = previous.len()).entered();

    let mut result = Vec::with_capacity(previous.len().max(1));
    result.push(Candidate::typed(typed_word));

    for prev in previous.iter().skip(1) {
        if !result.iter().any(|seen| seen.is_duplicate_of(prev)) {
            result.push(prev.clone());
        }
    }
    debug!(
        kept = result.len() - 1,
        dropped = previous.len().saturating_sub(result.len())
    );
    result
}
