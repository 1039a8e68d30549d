//! Immutable, ranked collection of candidates for one input-cycle update.

use std::fmt;
use std::slice;

use serde::{Deserialize, Serialize};

use crate::candidate::Candidate;
use crate::error::SuggestionError;

/// Classification flags fixed when a `SuggestionSet` is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionFlags {
    /// The literal typed word is acceptable as-is.
    pub typed_word_valid: bool,
    /// A replacement candidate exists.
    pub has_auto_correction_candidate: bool,
    pub is_punctuation: bool,
    pub is_obsolete: bool,
    pub is_prediction: bool,
}

/// Ranked suggestions; index 0 is the typed word or the best suggestion.
///
/// Never mutated after construction. `will_auto_correct` is derived from the
/// flags once, here.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionSet {
    candidates: Vec<Candidate>,
    flags: SuggestionFlags,
    will_auto_correct: bool,
}

impl SuggestionSet {
    /// "No suggestions".
    pub const EMPTY: SuggestionSet = SuggestionSet {
        candidates: Vec::new(),
        flags: SuggestionFlags {
            typed_word_valid: false,
            has_auto_correction_candidate: false,
            is_punctuation: false,
            is_obsolete: false,
            is_prediction: false,
        },
        will_auto_correct: false,
    };

    pub fn new(candidates: Vec<Candidate>, flags: SuggestionFlags) -> Self {
        Self {
            candidates,
            flags,
            will_auto_correct: !flags.typed_word_valid && flags.has_auto_correction_candidate,
        }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Candidate at rank `index`.
    pub fn get(&self, index: usize) -> Result<&Candidate, SuggestionError> {
        self.candidates
            .get(index)
            .ok_or(SuggestionError::IndexOutOfRange {
                index,
                len: self.candidates.len(),
            })
    }

    /// Text of the candidate at rank `index`.
    pub fn word(&self, index: usize) -> Result<&str, SuggestionError> {
        self.get(index).map(Candidate::text)
    }

    /// Text at rank 0, if any.
    pub fn typed_word(&self) -> Option<&str> {
        self.candidates.first().map(Candidate::text)
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn iter(&self) -> slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }

    pub fn flags(&self) -> SuggestionFlags {
        self.flags
    }

    pub fn typed_word_valid(&self) -> bool {
        self.flags.typed_word_valid
    }

    pub fn has_auto_correction_candidate(&self) -> bool {
        self.flags.has_auto_correction_candidate
    }

    pub fn will_auto_correct(&self) -> bool {
        self.will_auto_correct
    }

    pub fn is_punctuation(&self) -> bool {
        self.flags.is_punctuation
    }

    pub fn is_obsolete(&self) -> bool {
        self.flags.is_obsolete
    }

    pub fn is_prediction(&self) -> bool {
        self.flags.is_prediction
    }

    /// Auto-correction is only meaningful with a distinct alternative to fall
    /// back to and an unacceptable literal input.
    pub fn has_auto_correction_word(&self) -> bool {
        self.flags.has_auto_correction_candidate
            && self.candidates.len() > 1
            && !self.flags.typed_word_valid
    }
}

impl Default for SuggestionSet {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl<'a> IntoIterator for &'a SuggestionSet {
    type Item = &'a Candidate;
    type IntoIter = slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}

impl fmt::Display for SuggestionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SuggestionSet: typed_word_valid={} has_auto_correction_candidate={} is_punctuation={} words=[",
            self.flags.typed_word_valid,
            self.flags.has_auto_correction_candidate,
            self.flags.is_punctuation,
        )?;
        for (i, c) in self.candidates.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str("]")
    }
}

/// Wire form used by tools that read a previous set back in.
#[derive(Deserialize)]
struct SuggestionSetRecord {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    flags: SuggestionFlags,
}

impl<'de> Deserialize<'de> for SuggestionSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let r = SuggestionSetRecord::deserialize(deserializer)?;
        Ok(SuggestionSet::new(r.candidates, r.flags))
    }
}
