use std::io::Write;

use tempfile::NamedTempFile;

use suggest_cli::commands::{settings_ops, suggest_ops, Format};
use suggest_cli::CliError;
use suggest_engine::Candidate;

fn temp_file(content: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f
}

fn path(f: &NamedTempFile) -> String {
    f.path().to_str().unwrap().to_string()
}

#[test]
fn dedup_json_output() {
    let f = temp_file(
        r#"[
            {"text":"cat","score":100,"kind":"typed","source":"user-typed"},
            {"text":"car","score":90,"kind":"correction","source":"main"},
            {"text":"car","score":95,"kind":"correction","source":"main"}
        ]"#,
    );
    let mut out = Vec::new();
    suggest_ops::dedup_cmd(&path(&f), Format::Json, &mut out).unwrap();
    let result: Vec<Candidate> = serde_json::from_slice(&out).unwrap();
    let summary: Vec<(&str, i32)> = result.iter().map(|c| (c.text(), c.score())).collect();
    assert_eq!(summary, vec![("cat", 100), ("car", 95)]);
}

#[test]
fn dedup_text_output() {
    let f = temp_file(
        r#"[
            {"text":"a","score":1,"kind":"correction","source":"main","debug_annotation":"x"},
            {"text":"a","score":0,"kind":"correction","source":"main"}
        ]"#,
    );
    let mut out = Vec::new();
    suggest_ops::dedup_cmd(&path(&f), Format::Text, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("# 0: a (x)\tscore=1\tkind=Correction\tsource=main"));
    assert!(text.ends_with("1 candidates\n"));
}

#[test]
fn compose_replaces_head() {
    let f = temp_file(
        r#"{
            "candidates": [
                {"text":"hel","score":2147483647,"kind":"typed","source":"user-typed"},
                {"text":"help","score":90,"kind":"correction","source":"main"},
                {"text":"hello","score":80,"kind":"completion","source":"main"}
            ],
            "flags": {"has_auto_correction_candidate": true}
        }"#,
    );
    let mut out = Vec::new();
    suggest_ops::compose_cmd("hello", &path(&f), Format::Json, &mut out).unwrap();
    let result: Vec<Candidate> = serde_json::from_slice(&out).unwrap();
    let texts: Vec<&str> = result.iter().map(Candidate::text).collect();
    assert_eq!(texts, vec!["hello", "help"]);
    assert_eq!(result[0].source(), "user-typed");
}

#[test]
fn completions_skip_nulls() {
    let f = temp_file(r#"[{"id":1,"text":"Bob"}, null, {"id":2,"text":""}, {"id":3}]"#);
    let mut out = Vec::new();
    suggest_ops::completions_cmd(&path(&f), Format::Json, &mut out).unwrap();
    let result: Vec<Candidate> = serde_json::from_slice(&out).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].text(), "Bob");
    assert_eq!(result[0].source(), "application-defined");
}

#[test]
fn punctuation_text_output() {
    let mut out = Vec::new();
    suggest_ops::punctuation_cmd(Format::Text, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("SuggestionSet: typed_word_valid=false"));
    assert!(text.contains("is_punctuation=true"));
}

#[test]
fn missing_file_reports_path() {
    let mut out = Vec::new();
    let err = suggest_ops::dedup_cmd("/nonexistent/candidates.json", Format::Text, &mut out)
        .unwrap_err();
    assert!(matches!(err, CliError::Read { .. }));
    assert!(err.to_string().contains("/nonexistent/candidates.json"));
}

#[test]
fn invalid_json_rejected() {
    let f = temp_file(r#"[{"text":"a","score":"high"}]"#);
    let mut out = Vec::new();
    let err = suggest_ops::dedup_cmd(&path(&f), Format::Json, &mut out).unwrap_err();
    assert!(matches!(err, CliError::Json { .. }));
}

#[test]
fn settings_export_then_validate() {
    let mut exported = Vec::new();
    settings_ops::settings_export(&mut exported).unwrap();
    let f = temp_file(std::str::from_utf8(&exported).unwrap());
    let mut out = Vec::new();
    settings_ops::settings_validate(&path(&f), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        text,
        "OK: suggestions.max_results=18, punctuation.suggestions=13\n"
    );
}

#[test]
fn settings_validate_reports_field() {
    let f = temp_file("[suggestions]\nmax_results = 0\n\n[punctuation]\nsuggestions = [\".\"]\n");
    let mut out = Vec::new();
    let err = settings_ops::settings_validate(&path(&f), &mut out).unwrap_err();
    assert!(err.to_string().contains("suggestions.max_results"));
}
