use std::fs;
use std::io::Write;

use suggest_engine::settings::{default_toml, parse_settings_toml};

use crate::CliError;

pub fn settings_export(out: &mut dyn Write) -> Result<(), CliError> {
    write!(out, "{}", default_toml())?;
    Ok(())
}

pub fn settings_validate(file: &str, out: &mut dyn Write) -> Result<(), CliError> {
    let content = fs::read_to_string(file).map_err(|source| CliError::Read {
        path: file.to_string(),
        source,
    })?;
    let s = parse_settings_toml(&content)?;
    writeln!(
        out,
        "OK: suggestions.max_results={}, punctuation.suggestions={}",
        s.suggestions.max_results,
        s.punctuation.suggestions.len()
    )?;
    Ok(())
}
