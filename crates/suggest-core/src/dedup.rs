//! Score-aware removal of text-duplicate candidates.

use std::collections::HashMap;

use tracing::{debug, debug_span};

use crate::candidate::Candidate;

/// Remove candidates whose text already appears elsewhere in the list,
/// keeping the highest-scoring one of each text group. On equal scores the
/// earlier-ranked candidate survives. Survivors keep their relative order.
pub fn remove_duplicates(candidates: &mut Vec<Candidate>) {
    if candidates.len() <= 1 {
        return;
    }
    let _span = debug_span!("remove_duplicates", len = candidates.len()).entered();

    // Pass 1: index of the survivor for each text.
    let mut best: HashMap<&str, usize> = HashMap::with_capacity(candidates.len());
    for (i, c) in candidates.iter().enumerate() {
        best.entry(c.dedup_key())
            .and_modify(|b| {
                if c.score() > candidates[*b].score() {
                    *b = i;
                }
            })
            .or_insert(i);
    }
    let mut keep = vec![false; candidates.len()];
    for &i in best.values() {
        keep[i] = true;
    }

    // Pass 2: emit survivors in original order.
    let before = candidates.len();
    let mut idx = 0;
    candidates.retain(|_| {
        let k = keep[idx];
        idx += 1;
        k
    });
    debug!(removed = before - candidates.len());
}
