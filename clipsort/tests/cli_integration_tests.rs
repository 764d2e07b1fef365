// clipsort/tests/cli_integration_tests.rs
//! Command-line integration tests for the `clipsort` binary.
//!
//! Each test runs the real executable with its own empty home directory so a
//! rule file on the developer's machine cannot change the outcome.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn clipsort(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("clipsort").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_of(assert: &assert_cmd::assert::Assert) -> String {
    let stripped = strip_ansi_escapes::strip(&assert.get_output().stdout);
    String::from_utf8_lossy(&stripped).into_owned()
}

#[test]
fn test_classify_code_from_stdin() -> Result<()> {
    let home = TempDir::new()?;
    clipsort(&home)
        .args(["classify"])
        .write_stdin("function add(a, b) {\n  return a + b;\n}")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("code (javascript, confidence "));
    Ok(())
}

#[test]
fn test_classify_prose_from_stdin() -> Result<()> {
    let home = TempDir::new()?;
    clipsort(&home)
        .args(["classify"])
        .write_stdin("hello, how are you today? I hope you're doing well!")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("text (confidence "));
    Ok(())
}

#[test]
fn test_classify_json_output() -> Result<()> {
    let home = TempDir::new()?;
    let assert = clipsort(&home)
        .args(["classify", "--json"])
        .write_stdin("SELECT id, name FROM users WHERE active = 1;")
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_str(&stdout_of(&assert))?;
    assert_eq!(value["isCode"], true);
    assert_eq!(value["detectedLanguage"], "sql");
    let confidence = value["confidence"].as_f64().unwrap();
    assert!((25.0..=100.0).contains(&confidence));
    Ok(())
}

#[test]
fn test_classify_from_file() -> Result<()> {
    let home = TempDir::new()?;
    let mut file = NamedTempFile::new()?;
    write!(file, "def add(a, b):\n    return a + b")?;

    clipsort(&home)
        .args(["classify", "-i"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("code (python, confidence "));
    Ok(())
}

#[test]
fn test_classify_missing_file_fails() -> Result<()> {
    let home = TempDir::new()?;
    clipsort(&home)
        .args(["classify", "-i", "/no/such/snippet.py"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input file"));
    Ok(())
}

#[test]
fn test_classify_explain() -> Result<()> {
    let home = TempDir::new()?;
    let assert = clipsort(&home)
        .args(["classify", "--explain"])
        .write_stdin("{\n  \"name\": \"test\",\n  \"value\": 42\n}")
        .assert()
        .success();

    let out = stdout_of(&assert);
    assert!(out.starts_with("code (json, confidence "));
    assert!(out.contains("json_key"));
    assert!(out.contains("average line length"));
    assert!(out.contains("Language scores:"));
    Ok(())
}

#[test]
fn test_strip_ansi_before_classifying() -> Result<()> {
    let home = TempDir::new()?;
    clipsort(&home)
        .args(["classify", "--strip-ansi", "--json"])
        .write_stdin("\x1b[35mdef\x1b[0m add(a, b):\n    \x1b[35mreturn\x1b[0m a + b")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"detectedLanguage\": \"python\""));
    Ok(())
}

#[test]
fn test_empty_input_warns() -> Result<()> {
    let home = TempDir::new()?;
    clipsort(&home)
        .args(["classify"])
        .write_stdin("   \n")
        .assert()
        .success()
        .stdout("text (confidence 0.0)\n")
        .stderr(predicate::str::contains("Input is empty"));
    Ok(())
}

#[test]
fn test_quiet_suppresses_warnings() -> Result<()> {
    let home = TempDir::new()?;
    clipsort(&home)
        .args(["--quiet", "classify"])
        .write_stdin("")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
    Ok(())
}

#[test]
fn test_disable_language() -> Result<()> {
    let home = TempDir::new()?;
    clipsort(&home)
        .args(["classify", "-x", "python"])
        .write_stdin("def add(a, b):\n    return a + b")
        .assert()
        .success()
        .stdout(predicate::str::contains("python").not());
    Ok(())
}

#[test]
fn test_custom_config_adds_language() -> Result<()> {
    let home = TempDir::new()?;
    let mut config = NamedTempFile::new()?;
    writeln!(
        config,
        r#"
scoring_rules:
  - name: rust_fn
    description: Rust function items
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
"#
    )?;

    clipsort(&home)
        .args(["classify", "--config"])
        .arg(config.path())
        .write_stdin("fn main() {\n    let mut total = 0;\n    let step = 2;\n    println!(\"{}\", total + step);\n}")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("code (rust, confidence "));

    clipsort(&home)
        .args(["rules", "--config"])
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("rust_fn"))
        .stdout(predicate::str::contains("Rust function items"));
    Ok(())
}

#[test]
fn test_invalid_config_fails() -> Result<()> {
    let home = TempDir::new()?;
    let mut config = NamedTempFile::new()?;
    writeln!(config, "scoring_rules:\n  - name: broken\n    pattern: '(oops'\n")?;

    clipsort(&home)
        .args(["classify", "--config"])
        .arg(config.path())
        .write_stdin("SELECT 1 FROM dual;")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Rule validation failed"));
    Ok(())
}

#[test]
fn test_user_rule_file_in_home_is_picked_up() -> Result<()> {
    let home = TempDir::new()?;
    let dir = home.path().join(".clipsort");
    std::fs::create_dir_all(&dir)?;
    std::fs::write(
        dir.join("rules.yaml"),
        "language_rules:\n  - language: python\n    enabled: false\n    patterns:\n      - 'def'\n",
    )?;

    clipsort(&home)
        .args(["classify"])
        .write_stdin("def add(a, b):\n    return a + b")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("code ("))
        .stdout(predicate::str::contains("python").not());
    Ok(())
}

#[test]
fn test_rules_lists_defaults_in_rank_order() -> Result<()> {
    let home = TempDir::new()?;
    let assert = clipsort(&home).args(["rules"]).assert().success();
    let out = stdout_of(&assert);

    assert!(out.contains("Scoring rules:"));
    assert!(out.contains("shebang"));
    let typescript = out.find("typescript").unwrap();
    let javascript = out.rfind("javascript").unwrap();
    assert!(typescript < javascript);
    Ok(())
}
