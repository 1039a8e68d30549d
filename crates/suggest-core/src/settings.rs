//! Tunables for suggestion sets: the result cap and the punctuation strip.
//!
//! The embedded `default_settings.toml` applies unless a host installs its own
//! TOML through `init_custom` before anything reads `settings()`. Once read,
//! the process-wide value is fixed.

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static ACTIVE: OnceLock<Settings> = OnceLock::new();

/// Install custom settings for this process.
///
/// Fails with `AlreadyInitialized` if custom settings were installed before
/// or `settings()` has already fixed the defaults.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    let parsed = parse_settings_toml(&toml_content)?;
    ACTIVE
        .set(parsed)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Active settings; falls back to the embedded defaults.
pub fn settings() -> &'static Settings {
    ACTIVE.get_or_init(|| {
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("embedded settings must be valid")
    })
}

/// The embedded default TOML, e.g. for exporting a starting point.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub suggestions: SuggestionSettings,
    pub punctuation: PunctuationSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionSettings {
    pub max_results: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PunctuationSettings {
    pub suggestions: Vec<String>,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.suggestions.max_results == 0 {
        return Err(SettingsError::InvalidValue {
            field: "suggestions.max_results".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    if s.punctuation.suggestions.is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "punctuation.suggestions".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    if let Some(pos) = s.punctuation.suggestions.iter().position(|p| p.is_empty()) {
        return Err(SettingsError::InvalidValue {
            field: format!("punctuation.suggestions[{pos}]"),
            reason: "must not be an empty string".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.suggestions.max_results, 18);
        assert_eq!(s.punctuation.suggestions.len(), 13);
        assert_eq!(s.punctuation.suggestions[0], "!");
        assert!(s.punctuation.suggestions.contains(&"\"".to_string()));
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[suggestions]
max_results = 5

[punctuation]
suggestions = [".", ","]
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.suggestions.max_results, 5);
        assert_eq!(s.punctuation.suggestions, vec![".", ","]);
    }

    #[test]
    fn error_zero_max_results() {
        let toml = r#"
[suggestions]
max_results = 0

[punctuation]
suggestions = ["."]
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("suggestions.max_results"));
    }

    #[test]
    fn error_empty_punctuation_list() {
        let toml = r#"
[suggestions]
max_results = 5

[punctuation]
suggestions = []
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("punctuation.suggestions"));
    }

    #[test]
    fn error_empty_punctuation_entry() {
        let toml = r#"
[suggestions]
max_results = 5

[punctuation]
suggestions = [".", ""]
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("punctuation.suggestions[1]"));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn init_custom_rejected_once_settings_are_read() {
        let active = settings();
        assert!(active.suggestions.max_results > 0);

        // Invalid TOML is reported before the initialization state matters.
        let err = init_custom("[suggestions]\nmax_results = 0\n".to_string()).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));

        let err = init_custom(DEFAULT_SETTINGS_TOML.to_string()).unwrap_err();
        assert!(matches!(err, SettingsError::AlreadyInitialized));
        assert!(std::ptr::eq(settings(), active));
    }

    #[test]
    fn error_missing_section() {
        let toml = r#"
[suggestions]
max_results = 5
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
