// clipsort-core/tests/config_integration_tests.rs
use anyhow::Result;
use clipsort_core::{
    headless_classify_string, merge_rules, user_config_candidate_paths, ClassifierConfig,
    ClipsortError, ContentClassifier, HeuristicClassifier, PLAINTEXT,
};
use std::io::Write;
use tempfile::NamedTempFile;
use test_log::test;

fn write_yaml(contents: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}

#[test]
fn test_load_from_file_applies_defaults() -> Result<()> {
    let file = write_yaml(
        r#"
scoring_rules:
  - name: todo_marker
    pattern: 'TODO:'
language_rules:
  - language: rust
    patterns:
      - '\bfn\s+\w+\s*\('
      - '\blet\s+mut\b'
"#,
    )?;

    let config = ClassifierConfig::load_from_file(file.path())?;
    assert_eq!(config.scoring_rules.len(), 1);
    let rule = &config.scoring_rules[0];
    assert_eq!(rule.name, "todo_marker");
    assert_eq!(rule.weight, 1.0);
    assert!(rule.multiline);
    assert!(!rule.dot_matches_new_line);
    assert_eq!(rule.enabled, None);

    assert_eq!(config.language_rules[0].language, "rust");
    assert_eq!(config.language_rules[0].patterns.len(), 2);
    Ok(())
}

#[test]
fn test_load_from_file_rejects_invalid_rules() -> Result<()> {
    let file = write_yaml(
        r#"
scoring_rules:
  - name: broken
    pattern: '(unclosed'
    weight: 2.0
  - name: broken
    pattern: 'ok'
    weight: 0.0
"#,
    )?;

    let err = ClassifierConfig::load_from_file(file.path()).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("Rule validation failed"));
    assert!(message.contains("invalid regex pattern"));
    assert!(message.contains("Duplicate rule name found: 'broken'"));
    assert!(message.contains("expected a positive number"));
    Ok(())
}

#[test]
fn test_load_from_file_reports_parse_errors() -> Result<()> {
    let file = write_yaml("scoring_rules: [this is: not valid")?;
    let err = ClassifierConfig::load_from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
    Ok(())
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = ClassifierConfig::load_from_file("/definitely/not/here/rules.yaml").unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
    match err.downcast_ref::<ClipsortError>() {
        Some(ClipsortError::IoError(io)) => assert_eq!(io.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected an I/O error, got {:?}", other),
    }
}

#[test]
fn test_merge_replaces_in_place_and_appends() -> Result<()> {
    let defaults = ClassifierConfig::load_default_rules()?;
    let default_len = defaults.scoring_rules.len();
    let python_index = defaults
        .language_rules
        .iter()
        .position(|l| l.language == "python")
        .unwrap();

    let file = write_yaml(
        r#"
scoring_rules:
  - name: shebang
    pattern: '^#!'
    weight: 9.0
  - name: rust_fn
    pattern: '\bfn\s+\w+'
    weight: 3.0
language_rules:
  - language: python
    patterns:
      - '\bdef\b'
  - language: rust
    patterns:
      - '\bfn\s+\w+'
"#,
    )?;
    let user = ClassifierConfig::load_from_file(file.path())?;
    let merged = merge_rules(defaults.clone(), Some(user));

    assert_eq!(merged.scoring_rules.len(), default_len + 1);
    let shebang_index = defaults
        .scoring_rules
        .iter()
        .position(|r| r.name == "shebang")
        .unwrap();
    assert_eq!(merged.scoring_rules[shebang_index].weight, 9.0);
    assert_eq!(merged.scoring_rules.last().unwrap().name, "rust_fn");

    assert_eq!(merged.language_rules[python_index].patterns, vec!["\\bdef\\b".to_string()]);
    assert_eq!(merged.language_rules.last().unwrap().language, "rust");
    Ok(())
}

#[test]
fn test_merge_without_user_config_is_identity() -> Result<()> {
    let defaults = ClassifierConfig::load_default_rules()?;
    assert_eq!(merge_rules(defaults.clone(), None), defaults);
    Ok(())
}

#[test]
fn test_user_language_is_detected_after_merge() -> Result<()> {
    let file = write_yaml(
        r#"
scoring_rules:
  - name: rust_fn
    pattern: '\bfn\s+\w+\s*\('
    weight: 6.0
  - name: rust_let
    pattern: '\blet\s+(mut\s+)?\w+'
    weight: 4.0
language_rules:
  - language: rust
    patterns:
      - '\bfn\s+\w+\s*\('
      - '\blet\s+(mut\s+)?\w+'
      - '\w+!\('
"#,
    )?;
    let merged = merge_rules(
        ClassifierConfig::load_default_rules()?,
        Some(ClassifierConfig::load_from_file(file.path())?),
    );

    let text = "fn main() {\n    let mut total = 0;\n    let step = 2;\n    println!(\"{}\", total + step);\n}";
    let result = headless_classify_string(merged, text)?;
    assert!(result.is_code);
    assert_eq!(result.detected_language, "rust");
    Ok(())
}

#[test]
fn test_disabled_language_is_never_reported() -> Result<()> {
    let mut config = ClassifierConfig::load_default_rules()?;
    config.set_active_rules(&[], &["sql".to_string()]);
    assert!(config.language_rules.iter().all(|l| l.language != "sql"));

    let classifier = HeuristicClassifier::new(config)?;
    let ranking = classifier.rank_languages("SELECT id, name FROM users WHERE active = 1;");
    assert_ne!(ranking.language, "sql");
    assert!(ranking.scores.iter().all(|s| s.language != "sql"));
    Ok(())
}

#[test]
fn test_empty_config_classifies_as_plaintext() -> Result<()> {
    let result = headless_classify_string(
        ClassifierConfig::default(),
        "function add(a, b) {\n  return a + b;\n}",
    )?;
    assert_eq!(result.detected_language, PLAINTEXT);
    Ok(())
}

#[test]
fn test_candidate_paths_end_with_rules_yaml() {
    for path in user_config_candidate_paths() {
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("rules.yaml"));
        assert!(path.components().any(|c| {
            let part = c.as_os_str().to_string_lossy();
            part == ".clipsort" || part == "clipsort"
        }));
    }
}
