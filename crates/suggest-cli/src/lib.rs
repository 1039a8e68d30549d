pub mod commands;

/// Errors surfaced by `suggesttool` subcommands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("error reading {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    #[error("error writing output: {0}")]
    Write(#[from] std::io::Error),
    #[error("error encoding output: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Settings(#[from] suggest_engine::settings::SettingsError),
}
