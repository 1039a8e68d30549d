pub mod settings_ops;
pub mod suggest_ops;

use std::fs;
use std::io::Write;

use serde::de::DeserializeOwned;
use serde::Serialize;

use suggest_engine::Candidate;

use crate::CliError;

/// Output format shared by every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &str) -> Result<T, CliError> {
    let content = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_string(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| CliError::Json {
        path: path.to_string(),
        source,
    })
}

pub(crate) fn write_json<T: Serialize + ?Sized>(
    out: &mut dyn Write,
    value: &T,
) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// One line per candidate: rank, rendered text, score, kind and source.
pub(crate) fn write_candidates(
    out: &mut dyn Write,
    candidates: &[Candidate],
    format: Format,
) -> Result<(), CliError> {
    match format {
        Format::Json => write_json(out, candidates),
        Format::Text => {
            for (i, c) in candidates.iter().enumerate() {
                writeln!(
                    out,
                    "#{:>2}: {}\tscore={}\tkind={:?}\tsource={}",
                    i,
                    c,
                    c.score(),
                    c.kind(),
                    c.source()
                )?;
            }
            writeln!(out, "---")?;
            writeln!(out, "{} candidates", candidates.len())?;
            Ok(())
        }
    }
}
