//! Prompt template.

use super::Draft;
use crate::catalog::Champion;

/// Render the recommendation prompt for one round.
///
/// `exclude` lists champions already accepted in earlier rounds.
pub fn build_prompt(draft: &Draft, exclude: &[Champion]) -> String {
    let allies = join_or_none(
        draft
            .allies
            .iter()
            .map(|(champion, role)| format!("{} ({})", champion.name, role)),
    );
    let enemies = join_or_none(draft.enemies.iter().map(|c| c.name.clone()));

    let exclusion = if exclude.is_empty() {
        String::new()
    } else {
        let names: Vec<&str> = exclude.iter().map(|c| c.name.as_str()).collect();
        format!(" (excluding {})", names.join(", "))
    };

    format!(
        "As a League of Legends expert, recommend 3 champions for the {role} role{exclusion} \
         based on the following team composition:\n\
         \n\
         Allies: {allies}\n\
         Enemies: {enemies}\n\
         \n\
         Consider team synergy, counter-picks, and the current meta. \
         Provide a brief explanation for each recommendation.\n\
         \n\
         Format your response as:\n\
         Champion 1: [Name] - [Explanation]\n\
         Champion 2: [Name] - [Explanation]\n\
         Champion 3: [Name] - [Explanation]",
        role = draft.target_role,
    )
}

fn join_or_none(parts: impl Iterator<Item = String>) -> String {
    let parts: Vec<String> = parts.collect();
    if parts.is_empty() {
        "None".to_string()
    } else {
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Role;

    fn ahri() -> Champion {
        Champion::new("Ahri", "103", "Ahri", &["Mage"])
    }

    fn zed() -> Champion {
        Champion::new("Zed", "238", "Zed", &["Assassin"])
    }

    #[test]
    fn test_prompt_empty_draft() {
        let draft = Draft {
            allies: vec![],
            enemies: vec![],
            target_role: Role::Support,
        };
        let prompt = build_prompt(&draft, &[]);
        assert!(prompt.contains("for the Support role based on"));
        assert!(prompt.contains("Allies: None\nEnemies: None"));
        assert!(prompt.ends_with("Champion 3: [Name] - [Explanation]"));
        assert!(!prompt.contains("excluding"));
    }

    #[test]
    fn test_prompt_with_team_and_exclusions() {
        let draft = Draft {
            allies: vec![(ahri(), Role::Mid)],
            enemies: vec![zed()],
            target_role: Role::Adc,
        };
        let prompt = build_prompt(&draft, &[ahri(), zed()]);
        assert!(prompt.contains("for the ADC role (excluding Ahri, Zed) based on"));
        assert!(prompt.contains("Allies: Ahri (Mid)"));
        assert!(prompt.contains("Enemies: Zed"));
    }
}
