// clipsort/src/ui/tables.rs
//! Table rendering for `classify --explain` and `rules`.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Table};

use clipsort_core::{ClassifierConfig, LanguageRanking, StructuralScore};

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(header);
    table
}

fn right(value: impl ToString) -> Cell {
    Cell::new(value.to_string()).set_alignment(CellAlignment::Right)
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

/// One row per structural rule that matched.
pub fn rule_hits_table(score: &StructuralScore) -> Table {
    let mut table = new_table(vec!["Rule", "Matches", "Weight", "Contribution"]);
    for hit in &score.hits {
        table.add_row(vec![
            Cell::new(&hit.rule_name),
            right(hit.match_count),
            right(format!("{:.1}", hit.weight)),
            right(format!("{:.2}", hit.contribution)),
        ]);
    }
    table
}

/// The scores and auxiliary signals behind the confidence value.
pub fn signals_table(score: &StructuralScore) -> Table {
    let signals = &score.signals;
    let mut table = new_table(vec!["Signal", "Value"]);
    table
        .add_row(vec![Cell::new("total score"), right(format!("{:.2}", score.total_score))])
        .add_row(vec![Cell::new("normalized score"), right(format!("{:.2}", score.normalized_score))])
        .add_row(vec![Cell::new("indentation"), right(yes_no(signals.has_indentation))])
        .add_row(vec![Cell::new("braces"), right(yes_no(signals.has_braces))])
        .add_row(vec![Cell::new("operators"), right(yes_no(signals.has_operators))])
        .add_row(vec![
            Cell::new("average line length"),
            right(format!("{:.1}", signals.average_line_length)),
        ])
        .add_row(vec![Cell::new("line length in range"), right(yes_no(signals.line_length_in_range))])
        .add_row(vec![Cell::new("confidence"), right(format!("{:.1}", score.confidence))]);
    table
}

/// Every language's raw score, in rank order.
pub fn language_scores_table(ranking: &LanguageRanking) -> Table {
    let mut table = new_table(vec!["Language", "Score"]);
    for entry in &ranking.scores {
        table.add_row(vec![Cell::new(&entry.language), right(entry.score)]);
    }
    table
}

/// Active scoring rules with their weights.
pub fn scoring_rules_table(config: &ClassifierConfig) -> Table {
    let mut table = new_table(vec!["Rule", "Weight", "Description"]);
    for rule in config.scoring_rules.iter().filter(|r| r.enabled != Some(false)) {
        table.add_row(vec![
            Cell::new(&rule.name),
            right(format!("{:.1}", rule.weight)),
            Cell::new(rule.description.as_deref().unwrap_or("")),
        ]);
    }
    table
}

/// Active language rules in rank order.
pub fn language_rules_table(config: &ClassifierConfig) -> Table {
    let mut table = new_table(vec!["Rank", "Language", "Patterns"]);
    for (rank, lang) in config
        .language_rules
        .iter()
        .filter(|l| l.enabled != Some(false))
        .enumerate()
    {
        table.add_row(vec![right(rank + 1), Cell::new(&lang.language), right(lang.patterns.len())]);
    }
    table
}
