//! Skill priority derivation.

use crate::ids::{self, ULTIMATE_SKILL_CODE};

/// Number of leveled skill picks considered (levels 1-18).
pub const MAX_SKILL_LEVELS: usize = 18;

/// Rank basic skills by how often they were leveled.
///
/// Only the first 18 picks are counted and the ultimate is ignored. Skills
/// are sorted by descending count; ties keep first-encountered order. Codes
/// other than 1/2/3 are dropped after ranking.
pub fn skill_priority(detail: &[u32]) -> Vec<&'static str> {
    let mut counts: Vec<(u32, usize)> = Vec::new();

    for &code in detail.iter().take(MAX_SKILL_LEVELS) {
        if code == ULTIMATE_SKILL_CODE {
            continue;
        }
        match counts.iter_mut().find(|(c, _)| *c == code) {
            Some((_, n)) => *n += 1,
            None => counts.push((code, 1)),
        }
    }

    // Stable sort preserves first-encountered order between equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .filter_map(|(code, _)| match code {
            1..=3 => ids::skill_letter(code),
            _ => None,
        })
        .collect()
}
