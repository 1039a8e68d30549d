//! A single scored suggestion with provenance metadata.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::SuggestionError;

/// Score for candidates that must never lose a score comparison
/// (the typed word, application completions, hardcoded entries).
pub const MAX_SCORE: i32 = i32::MAX;

/// Well-known source identifiers.
pub mod source {
    pub const USER_TYPED: &str = "user-typed";
    pub const APPLICATION_DEFINED: &str = "application-defined";
    pub const HARDCODED: &str = "hardcoded";
}

/// Provenance tag. Does not take part in ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateKind {
    /// What the user typed.
    Typed,
    /// Simple correction.
    Correction,
    /// Suggestion with appended characters.
    Completion,
    Whitelisted,
    Blacklisted,
    /// Fixed entry, e.g. punctuation.
    Hardcoded,
    /// Supplied by the host application.
    AppDefined,
    Shortcut,
}

impl CandidateKind {
    /// Stable numeric tag for host boundaries.
    ///   0 = Typed .. 7 = Shortcut
    pub fn as_raw(self) -> u8 {
        match self {
            Self::Typed => 0,
            Self::Correction => 1,
            Self::Completion => 2,
            Self::Whitelisted => 3,
            Self::Blacklisted => 4,
            Self::Hardcoded => 5,
            Self::AppDefined => 6,
            Self::Shortcut => 7,
        }
    }

    pub fn from_raw(raw: u8) -> Option<Self> {
        Some(match raw {
            0 => Self::Typed,
            1 => Self::Correction,
            2 => Self::Completion,
            3 => Self::Whitelisted,
            4 => Self::Blacklisted,
            5 => Self::Hardcoded,
            6 => Self::AppDefined,
            7 => Self::Shortcut,
            _ => return None,
        })
    }
}

/// One suggestion: text, score, kind and the source that produced it.
///
/// Everything except the debug annotation is fixed at construction.
/// `code_point_count` is cached from `text` once.
#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    text: String,
    score: i32,
    kind: CandidateKind,
    source: String,
    #[serde(skip)]
    code_point_count: usize,
    #[serde(skip_serializing_if = "String::is_empty")]
    debug_annotation: String,
}

impl Candidate {
    pub fn new(
        text: impl Into<String>,
        score: i32,
        kind: CandidateKind,
        source: impl Into<String>,
    ) -> Self {
        let text = text.into();
        let code_point_count = text.chars().count();
        Self {
            text,
            score,
            kind,
            source: source.into(),
            code_point_count,
            debug_annotation: String::new(),
        }
    }

    /// The literal word the user typed.
    pub fn typed(text: impl Into<String>) -> Self {
        Self::new(text, MAX_SCORE, CandidateKind::Typed, source::USER_TYPED)
    }

    /// A completion offered by the host application.
    pub fn app_defined(text: impl Into<String>) -> Self {
        Self::new(
            text,
            MAX_SCORE,
            CandidateKind::AppDefined,
            source::APPLICATION_DEFINED,
        )
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn kind(&self) -> CandidateKind {
        self.kind
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn has_max_score(&self) -> bool {
        self.score == MAX_SCORE
    }

    pub fn code_point_count(&self) -> usize {
        self.code_point_count
    }

    /// Code point at `index`, counted in code points (not bytes).
    pub fn code_point_at(&self, index: usize) -> Result<char, SuggestionError> {
        self.text
            .chars()
            .nth(index)
            .ok_or(SuggestionError::IndexOutOfRange {
                index,
                len: self.code_point_count,
            })
    }

    pub fn debug_annotation(&self) -> &str {
        &self.debug_annotation
    }

    /// Replace the diagnostic annotation. `None` is rejected and leaves the
    /// current annotation in place.
    pub fn set_debug_annotation<S: Into<String>>(
        &mut self,
        annotation: Option<S>,
    ) -> Result<(), SuggestionError> {
        let annotation = annotation.ok_or(SuggestionError::MissingDebugAnnotation)?;
        self.debug_annotation = annotation.into();
        Ok(())
    }

    /// Key that decides duplicates: the exact text, nothing else.
    pub fn dedup_key(&self) -> &str {
        &self.text
    }

    pub fn is_duplicate_of(&self, other: &Candidate) -> bool {
        self.dedup_key() == other.dedup_key()
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.debug_annotation.is_empty() {
            f.write_str(&self.text)
        } else {
            write!(f, "{} ({})", self.text, self.debug_annotation)
        }
    }
}

/// Wire form; the code-point count is always derived, never trusted from input.
#[derive(Deserialize)]
struct CandidateRecord {
    text: String,
    score: i32,
    kind: CandidateKind,
    source: String,
    #[serde(default)]
    debug_annotation: String,
}

impl<'de> Deserialize<'de> for Candidate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let r = CandidateRecord::deserialize(deserializer)?;
        let mut c = Candidate::new(r.text, r.score, r.kind, r.source);
        c.debug_annotation = r.debug_annotation;
        Ok(c)
    }
}
