//! Output formatting helpers for CLI commands

use crate::build::{Build, BuildEntry};
use crate::recommend::Recommendations;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};

/// Format a rate for display. Provider rates may be fractions or percents.
pub fn format_rate(rate: f64) -> String {
    let percent = if rate <= 1.0 { rate * 100.0 } else { rate };
    format!("{:.1}%", percent)
}

fn join_names(entries: &[BuildEntry]) -> String {
    entries
        .iter()
        .map(|e| e.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn skill_line(build: &Build) -> String {
    build
        .skill_order
        .iter()
        .map(|s| s.name.as_str())
        .collect::<Vec<_>>()
        .join(" > ")
}

/// Format recommendations as a table
pub fn format_recommendations_table(result: &Recommendations) -> String {
    if result.is_empty() {
        return "No recommendations with build data were found.".yellow().to_string();
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "#",
        "Champion",
        "Difficulty",
        "Why",
        "Core Items",
        "Skills",
        "Win Rate",
    ]);

    for (i, ((champion, explanation), build)) in result
        .champions
        .iter()
        .zip(&result.explanations)
        .zip(&result.builds)
        .enumerate()
    {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(champion.name.bold().to_string()),
            Cell::new(champion.difficulty_label()),
            Cell::new(explanation),
            Cell::new(join_names(&build.items)),
            Cell::new(skill_line(build)),
            Cell::new(format_rate(build.win_rate).green().to_string()),
        ]);
    }

    table.to_string()
}

/// Format a single build as a table
pub fn format_build_table(champion: &str, role: &str, build: &Build) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new(format!("{} ({})", champion, role)),
        Cell::new(""),
    ]);

    table.add_row(vec![Cell::new("Items"), Cell::new(join_names(&build.items))]);
    table.add_row(vec![Cell::new("Runes"), Cell::new(join_names(&build.runes))]);
    table.add_row(vec![
        Cell::new("Summoners"),
        Cell::new(join_names(&build.summoners)),
    ]);
    table.add_row(vec![Cell::new("Skill Order"), Cell::new(skill_line(build))]);
    table.add_row(vec![
        Cell::new("Win / Pick / Ban"),
        Cell::new(format!(
            "{} / {} / {}",
            format_rate(build.win_rate),
            format_rate(build.pick_rate),
            format_rate(build.ban_rate)
        )),
    ]);

    table.to_string()
}

/// Format any serializable result as pretty JSON
pub fn format_json<T: serde::Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}
