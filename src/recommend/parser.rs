//! LLM response parsing.
//!
//! Extracts champion picks from free-form completion text. Each non-blank
//! line is tried against three patterns, strictest first:
//!
//! 1. `Champion <n>: <name> - <explanation>`
//! 2. `<name> - <explanation>`
//! 3. `<name>: <explanation>` (the colon is optional)
//!
//! A pattern whose captured name is not in the catalog falls through to the
//! next pattern on the same line. The third pattern matches almost any line
//! that starts with a word, so lines such as `Note: Ahri is strong` resolve
//! `Note` against the catalog and then give up.

use crate::catalog::Champion;
use regex::Regex;
use std::sync::LazyLock;

/// Maximum picks taken from one response.
pub const MAX_CANDIDATES: usize = 3;

static LINE_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"Champion \d+:\s*([^-]+)-(.+)").expect("numbered pattern is valid"),
        Regex::new(r"([A-Za-z0-9_]+(?:\s+[A-Za-z0-9_]+)*)\s*-\s*(.+)")
            .expect("dash pattern is valid"),
        Regex::new(r"([A-Za-z0-9_]+(?:\s+[A-Za-z0-9_]+)*):?\s*(.+)")
            .expect("colon pattern is valid"),
    ]
});

/// A champion pick with the model's reasoning.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub champion: Champion,
    pub explanation: String,
}

/// Extract up to [`MAX_CANDIDATES`] distinct champions from `text`, in
/// order of first valid appearance.
pub fn parse_recommendations(text: &str, catalog: &[Champion]) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = Vec::new();

    for line in text.lines().filter(|line| !line.trim().is_empty()) {
        for pattern in LINE_PATTERNS.iter() {
            let Some(caps) = pattern.captures(line) else {
                continue;
            };
            let (Some(name), Some(explanation)) = (caps.get(1), caps.get(2)) else {
                continue;
            };

            let Some(champion) = find_champion(catalog, name.as_str().trim()) else {
                continue;
            };
            if candidates.iter().any(|c| c.champion.id == champion.id) {
                continue;
            }

            candidates.push(Candidate {
                champion: champion.clone(),
                explanation: explanation.as_str().trim().to_string(),
            });
            break;
        }

        if candidates.len() >= MAX_CANDIDATES {
            break;
        }
    }

    candidates
}

fn find_champion<'a>(catalog: &'a [Champion], name: &str) -> Option<&'a Champion> {
    let needle = name.to_lowercase();
    catalog.iter().find(|c| c.name.to_lowercase() == needle)
}
