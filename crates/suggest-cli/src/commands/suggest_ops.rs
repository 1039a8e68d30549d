use std::io::Write;

use suggest_engine::settings::settings;
use suggest_engine::{
    compose_with_previous, from_application_completions, punctuation_suggestions,
    remove_duplicates, Candidate, CompletionInfo, SuggestionSet,
};

use super::{read_json, write_candidates, write_json, Format};
use crate::CliError;

/// Deduplicate a JSON array of candidates.
pub fn dedup_cmd(file: &str, format: Format, out: &mut dyn Write) -> Result<(), CliError> {
    let mut candidates: Vec<Candidate> = read_json(file)?;
    remove_duplicates(&mut candidates);
    write_candidates(out, &candidates, format)
}

/// Merge `typed` into a previous suggestion set read from JSON.
pub fn compose_cmd(
    typed: &str,
    file: &str,
    format: Format,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let previous: SuggestionSet = read_json(file)?;
    let composed = compose_with_previous(typed, &previous);
    write_candidates(out, &composed, format)
}

/// Convert a JSON array of nullable host completion records.
pub fn completions_cmd(file: &str, format: Format, out: &mut dyn Write) -> Result<(), CliError> {
    let feed: Vec<Option<CompletionInfo>> = read_json(file)?;
    let candidates = from_application_completions(&feed);
    write_candidates(out, &candidates, format)
}

/// Print the configured punctuation suggestion set.
pub fn punctuation_cmd(format: Format, out: &mut dyn Write) -> Result<(), CliError> {
    let set = punctuation_suggestions(settings());
    match format {
        Format::Json => write_json(out, &set),
        Format::Text => {
            writeln!(out, "{set}")?;
            Ok(())
        }
    }
}
