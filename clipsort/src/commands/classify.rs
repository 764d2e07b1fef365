// clipsort/src/commands/classify.rs
//! The `classify` command.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use serde::Serialize;
use std::io::{self, Write};

use clipsort_core::{
    ClassificationResult, ContentClassifier, HeuristicClassifier, LanguageRanking, StructuralScore,
};

use crate::cli::ClassifyCommand;
use crate::commands::load_active_config;
use crate::ui::output_format::{self, info_msg, warn_msg};
use crate::ui::tables;
use crate::utils::input::{read_input, strip_ansi, InputSource};

/// How the verdict is rendered.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassifyOptions {
    pub json: bool,
    pub explain: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RuleHitReport<'a> {
    rule: &'a str,
    matches: usize,
    weight: f64,
    contribution: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignalsReport {
    has_indentation: bool,
    has_braces: bool,
    has_operators: bool,
    average_line_length: f64,
    line_length_in_range: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExplainReport<'a> {
    result: &'a ClassificationResult,
    total_score: f64,
    normalized_score: f64,
    structural_confidence: f64,
    signals: SignalsReport,
    hits: Vec<RuleHitReport<'a>>,
    languages: Vec<(&'a str, usize)>,
}

impl<'a> ExplainReport<'a> {
    fn new(result: &'a ClassificationResult, score: &'a StructuralScore, ranking: &'a LanguageRanking) -> Self {
        let signals = &score.signals;
        Self {
            result,
            total_score: score.total_score,
            normalized_score: score.normalized_score,
            structural_confidence: score.confidence,
            signals: SignalsReport {
                has_indentation: signals.has_indentation,
                has_braces: signals.has_braces,
                has_operators: signals.has_operators,
                average_line_length: signals.average_line_length,
                line_length_in_range: signals.line_length_in_range,
            },
            hits: score
                .hits
                .iter()
                .map(|h| RuleHitReport {
                    rule: &h.rule_name,
                    matches: h.match_count,
                    weight: h.weight,
                    contribution: h.contribution,
                })
                .collect(),
            languages: ranking
                .scores
                .iter()
                .map(|s| (s.language.as_str(), s.score))
                .collect(),
        }
    }
}

/// Classifies `input` and writes the verdict to `writer`.
pub fn run_classify<W: Write>(
    classifier: &dyn ContentClassifier,
    input: &str,
    opts: ClassifyOptions,
    writer: &mut W,
    supports_color: bool,
) -> Result<ClassificationResult> {
    let result = classifier.classify(input);
    debug!(
        "Classified {} bytes: is_code={}, confidence={:.2}, language={}",
        input.len(),
        result.is_code,
        result.confidence,
        result.detected_language
    );

    match (opts.json, opts.explain) {
        (true, false) => {
            serde_json::to_writer_pretty(&mut *writer, &result).context("Failed to serialize result")?;
            writeln!(writer)?;
        }
        (true, true) => {
            let score = classifier.score_structure(input);
            let ranking = classifier.rank_languages(input);
            let report = ExplainReport::new(&result, &score, &ranking);
            serde_json::to_writer_pretty(&mut *writer, &report).context("Failed to serialize explanation")?;
            writeln!(writer)?;
        }
        (false, explain) => {
            output_format::print_result(writer, &result, supports_color)?;
            if explain {
                let score = classifier.score_structure(input);
                let ranking = classifier.rank_languages(input);
                writeln!(writer, "\nRule hits:\n{}", tables::rule_hits_table(&score))?;
                writeln!(writer, "\nSignals:\n{}", tables::signals_table(&score))?;
                writeln!(writer, "\nLanguage scores:\n{}", tables::language_scores_table(&ranking))?;
            }
        }
    }
    Ok(result)
}

/// Entry point for `clipsort classify`.
pub fn handle_classify(cmd: ClassifyCommand, quiet: bool) -> Result<()> {
    info!("Starting clipsort classify.");
    let config = load_active_config(cmd.config.as_deref(), &cmd.enable, &cmd.disable)?;
    let classifier = HeuristicClassifier::new(config).context("Failed to build classifier")?;

    let source = InputSource::select(cmd.input_file.as_deref(), cmd.clipboard);
    if source == InputSource::Clipboard && !quiet {
        info_msg("Reading input from the clipboard.");
    }
    let mut input = read_input(source)?;
    if cmd.strip_ansi {
        input = strip_ansi(&input);
    }
    if input.trim().is_empty() && !quiet {
        warn_msg("Input is empty; nothing to classify.");
    }

    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();
    run_classify(
        &classifier,
        &input,
        ClassifyOptions { json: cmd.json, explain: cmd.explain },
        &mut writer,
        supports_color,
    )?;
    writer.flush()?;

    info!("clipsort classify completed.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clipsort_core::default_classifier;

    fn render(input: &str, opts: ClassifyOptions) -> String {
        let mut buffer = Vec::new();
        run_classify(default_classifier(), input, opts, &mut buffer, false).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_plain_verdict() {
        let out = render("def add(a, b):\n    return a + b", ClassifyOptions::default());
        assert!(out.starts_with("code (python, confidence "));
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn test_json_verdict() {
        let out = render("hello, how are you today? I hope you're doing well!", ClassifyOptions {
            json: true,
            explain: false,
        });
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["isCode"], false);
        assert_eq!(value["detectedLanguage"], "plaintext");
    }

    #[test]
    fn test_json_explanation() {
        let out = render("SELECT id, name FROM users WHERE active = 1;", ClassifyOptions {
            json: true,
            explain: true,
        });
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["result"]["detectedLanguage"], "sql");
        assert!(value["hits"]
            .as_array()
            .unwrap()
            .iter()
            .any(|h| h["rule"] == "sql_statement"));
        assert!(value["totalScore"].as_f64().unwrap() > 0.0);
    }

    #[test]
    fn test_explain_tables_follow_verdict() {
        let out = render("{\n  \"name\": \"test\",\n  \"value\": 42\n}", ClassifyOptions {
            json: false,
            explain: true,
        });
        assert!(out.starts_with("code (json, confidence "));
        assert!(out.contains("Rule hits:"));
        assert!(out.contains("json_key"));
        assert!(out.contains("Language scores:"));
    }
}
