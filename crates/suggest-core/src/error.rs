//! Errors raised by candidate and suggestion-set accessors.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SuggestionError {
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("debug annotation is missing")]
    MissingDebugAnnotation,
}
