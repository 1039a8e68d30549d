//! Ranked, deduplicated suggestion sets for text input.
//!
//! A generation engine hands over scored candidates; this crate deduplicates
//! them, merges a newly typed word into the previous set and freezes the
//! result into an immutable `SuggestionSet` for display.

pub mod candidate;
pub mod completion;
pub mod compose;
pub mod dedup;
pub mod error;
pub mod pipeline;
pub mod punctuation;
pub mod settings;
pub mod suggestion_set;


pub use candidate::{source, Candidate, CandidateKind, MAX_SCORE};
pub use completion::{from_application_completions, CompletionInfo};
pub use compose::compose_with_previous;
pub use dedup::remove_duplicates;
pub use error::SuggestionError;
pub use pipeline::{compose_and_finalize, finalize};
pub use punctuation::punctuation_suggestions;
pub use suggestion_set::{SuggestionFlags, SuggestionSet};
