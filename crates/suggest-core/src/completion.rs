//! Conversion of host-supplied application completions into candidates.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::candidate::Candidate;

/// A completion record as handed over by the host platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionInfo {
    pub id: i64,
    pub position: i32,
    pub text: Option<String>,
    pub label: Option<String>,
}

impl CompletionInfo {
    pub fn new(id: i64, position: i32, text: impl Into<String>) -> Self {
        Self {
            id,
            position,
            text: Some(text.into()),
            label: None,
        }
    }
}

/// Convert the host feed into `AppDefined` candidates at `MAX_SCORE`.
///
/// Absent records and records without text (or with empty text) are skipped.
pub fn from_application_completions(completions: &[Option<CompletionInfo>]) -> Vec<Candidate> {
    let result: Vec<Candidate> = completions
        .iter()
        .flatten()
        .filter_map(|info| info.text.as_deref())
        .filter(|text| !text.is_empty())
        .map(Candidate::app_defined)
        .collect();
    debug!(
        received = completions.len(),
        converted = result.len(),
        "application completions"
    );
    result
}
