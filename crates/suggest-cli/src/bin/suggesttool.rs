use std::io::{self, Write};
use std::process;

use clap::{Parser, Subcommand};

use suggest_cli::commands::{settings_ops, suggest_ops, Format};
use suggest_cli::CliError;

#[derive(Parser)]
#[command(name = "suggesttool", about = "Suggestion set diagnostics")]
struct Cli {
    /// Output as JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// Custom settings TOML (defaults to the embedded settings)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Directory for JSON trace logs (requires the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Remove duplicate candidates from a JSON candidate list
    Dedup {
        /// JSON array of candidates
        file: String,
    },
    /// Replace the typed word of a previous suggestion set
    Compose {
        /// Newly typed word
        typed: String,
        /// JSON suggestion set (`{"candidates": [...], "flags": {...}}`)
        file: String,
    },
    /// Convert application-defined completions into candidates
    Completions {
        /// JSON array of completion records (null entries allowed)
        file: String,
    },
    /// Show the punctuation suggestion strip
    Punctuation,
    /// Print the default settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate {
        /// Settings TOML file
        file: String,
    },
}

fn run(cli: Cli, out: &mut dyn Write) -> Result<(), CliError> {
    let _trace = cli
        .trace_dir
        .as_deref()
        .map(|dir| suggest_engine::trace_init::init_tracing(std::path::Path::new(dir)));
    if let Some(path) = &cli.settings {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.clone(),
            source,
        })?;
        suggest_engine::settings::init_custom(content)?;
    }
    let format = if cli.json { Format::Json } else { Format::Text };

    match cli.command {
        Command::Dedup { file } => suggest_ops::dedup_cmd(&file, format, out),
        Command::Compose { typed, file } => suggest_ops::compose_cmd(&typed, &file, format, out),
        Command::Completions { file } => suggest_ops::completions_cmd(&file, format, out),
        Command::Punctuation => suggest_ops::punctuation_cmd(format, out),
        Command::SettingsExport => settings_ops::settings_export(out),
        Command::SettingsValidate { file } => settings_ops::settings_validate(&file, out),
    }
}

fn main() {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run(cli, &mut out) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
