//! Static id registry.
//!
//! Maps the opaque numeric identifiers used by the stats provider (items,
//! runes, summoner spells, champions, skills) to display names and icon URLs.
//! Lookups never fail: unknown ids resolve to a `"<Kind> <id>"` placeholder
//! and an empty icon URL so that partial builds still render.
//!
//! # Example
//!
//! ```
//! use draftpick::ids::{self, IdKind};
//!
//! assert_eq!(ids::name_of(IdKind::SummonerSpell, 4), "Flash");
//! assert_eq!(ids::name_of(IdKind::Item, 999_999), "Item 999999");
//! assert_eq!(ids::icon_url_of(IdKind::Rune, 1), "");
//! ```

mod champions;
mod items;
mod runes;
mod spells;

pub use spells::{FLASH, IGNITE, SMITE};

use champions::{CHAMPION_IDS, SLUG_OVERRIDES};
use items::{ITEMS, ITEM_ICON_BASE};
use runes::{
    PERK_IMAGE_BASE, RUNES, SHARD_IMAGE_BASE, SHARD_IMAGE_SUFFIX, STAT_SHARDS, STAT_SHARD_SLOTS,
};
use spells::{SPELL_ICON_BASE, SUMMONER_SPELLS};

/// Skill code the stats provider uses for the ultimate ability.
pub const ULTIMATE_SKILL_CODE: u32 = 4;

/// Kind of identifier being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Item,
    Rune,
    SummonerSpell,
    /// A skill code (1..=4) belonging to the given champion.
    ChampionSkill { champion_id: u32 },
}

impl IdKind {
    /// Label used in placeholder names for unknown ids.
    fn label(self) -> &'static str {
        match self {
            IdKind::Item => "Item",
            IdKind::Rune => "Rune",
            IdKind::SummonerSpell => "Spell",
            IdKind::ChampionSkill { .. } => "Skill",
        }
    }
}

/// Resolve the display name for an id, or `"<Kind> <id>"` if unknown.
pub fn name_of(kind: IdKind, id: u32) -> String {
    let known = match kind {
        IdKind::Item => ITEMS.iter().find(|(i, _)| *i == id).map(|(_, n)| *n),
        IdKind::Rune => RUNES
            .iter()
            .chain(STAT_SHARDS.iter())
            .find(|(i, _, _)| *i == id)
            .map(|(_, n, _)| *n),
        IdKind::SummonerSpell => SUMMONER_SPELLS
            .iter()
            .find(|(i, _, _)| *i == id)
            .map(|(_, n, _)| *n),
        IdKind::ChampionSkill { .. } => skill_letter(id),
    };

    match known {
        Some(name) => name.to_string(),
        None => format!("{} {}", kind.label(), id),
    }
}

/// Resolve the icon URL for an id, or `""` if no icon is known.
pub fn icon_url_of(kind: IdKind, id: u32) -> String {
    match kind {
        // Item icons are addressed by id, so any id gets a URL.
        IdKind::Item => format!("{}/{}.png", ITEM_ICON_BASE, id),
        IdKind::Rune => {
            if let Some((_, _, path)) = STAT_SHARDS.iter().find(|(i, _, _)| *i == id) {
                return format!("{}/{}/{}", SHARD_IMAGE_BASE, path, SHARD_IMAGE_SUFFIX);
            }
            RUNES
                .iter()
                .find(|(i, _, _)| *i == id)
                .map(|(_, _, path)| format!("{}/{}", PERK_IMAGE_BASE, path))
                .unwrap_or_default()
        }
        IdKind::SummonerSpell => SUMMONER_SPELLS
            .iter()
            .find(|(i, _, _)| *i == id)
            .map(|(_, _, asset)| format!("{}/{}.png", SPELL_ICON_BASE, asset))
            .unwrap_or_default(),
        IdKind::ChampionSkill { champion_id } => {
            match (champion_slug(champion_id), skill_letter(id)) {
                (Some(slug), Some(letter)) => {
                    format!("{}/{}{}.png", SPELL_ICON_BASE, slug, letter)
                }
                _ => String::new(),
            }
        }
    }
}

/// Map a skill code to its key letter. Code 4 is the ultimate.
pub fn skill_letter(code: u32) -> Option<&'static str> {
    match code {
        1 => Some("Q"),
        2 => Some("W"),
        3 => Some("E"),
        ULTIMATE_SKILL_CODE => Some("R"),
        _ => None,
    }
}

/// Translate a stat shard slot index into its global rune id.
///
/// Slots outside the table pass through unchanged.
pub fn stat_shard_id(slot: u32) -> u32 {
    STAT_SHARD_SLOTS
        .iter()
        .find(|(s, _)| *s == slot)
        .map(|(_, id)| *id)
        .unwrap_or(slot)
}

/// Resolve a champion display name to its numeric id.
///
/// Tries an exact match on the name with non-letters stripped, then a
/// case-insensitive match with the same normalization on both sides, then
/// the slug override table (e.g. "Wukong", "Nunu & Willump").
pub fn champion_id_of(name: &str) -> Option<u32> {
    let stripped = strip_non_letters(name);
    if let Some((_, id)) = CHAMPION_IDS.iter().find(|(key, _)| *key == stripped) {
        return Some(*id);
    }

    let lowered = stripped.to_lowercase();
    if let Some((_, id)) = CHAMPION_IDS
        .iter()
        .find(|(key, _)| strip_non_letters(key).to_lowercase() == lowered)
    {
        return Some(*id);
    }

    let slug = slug_for_name(name);
    CHAMPION_IDS
        .iter()
        .find(|(key, _)| slug_for_name(key) == slug)
        .map(|(_, id)| *id)
}

/// Data Dragon key for a numeric champion id.
pub fn champion_key_of(champion_id: u32) -> Option<&'static str> {
    CHAMPION_IDS
        .iter()
        .find(|(_, id)| *id == champion_id)
        .map(|(key, _)| *key)
}

/// Asset slug for a numeric champion id.
pub fn champion_slug(champion_id: u32) -> Option<String> {
    champion_key_of(champion_id).map(slug_for_name)
}

/// Asset slug for a champion name: override table first, otherwise the
/// name lowercased with everything but ASCII letters removed.
pub fn slug_for_name(name: &str) -> String {
    let trimmed = name.trim();
    SLUG_OVERRIDES
        .iter()
        .find(|(display, _)| display.eq_ignore_ascii_case(trimmed))
        .map(|(_, slug)| slug.to_string())
        .unwrap_or_else(|| strip_non_letters(trimmed).to_lowercase())
}

fn strip_non_letters(s: &str) -> String {
    s.chars().filter(char::is_ascii_alphabetic).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names() {
        assert_eq!(name_of(IdKind::Item, 3157), "Zhonya's Hourglass");
        assert_eq!(name_of(IdKind::Rune, 8112), "Electrocute");
        assert_eq!(name_of(IdKind::Rune, 5008), "+15-140 Health (based on level)");
        assert_eq!(name_of(IdKind::SummonerSpell, 11), "Smite");
    }

    #[test]
    fn test_unknown_ids_use_placeholders() {
        assert_eq!(name_of(IdKind::Item, 42), "Item 42");
        assert_eq!(name_of(IdKind::Rune, 42), "Rune 42");
        assert_eq!(name_of(IdKind::SummonerSpell, 42), "Spell 42");
        assert_eq!(
            name_of(IdKind::ChampionSkill { champion_id: 103 }, 9),
            "Skill 9"
        );
        assert_eq!(icon_url_of(IdKind::Rune, 42), "");
        assert_eq!(icon_url_of(IdKind::SummonerSpell, 42), "");
    }

    #[test]
    fn test_item_icon_for_any_id() {
        assert_eq!(
            icon_url_of(IdKind::Item, 3031),
            "https://ddragon.leagueoflegends.com/cdn/14.3.1/img/item/3031.png"
        );
    }

    #[test]
    fn test_rune_icons() {
        assert_eq!(
            icon_url_of(IdKind::Rune, 8000),
            "https://ddragon.leagueoflegends.com/cdn/img/perk-images/Styles/7201_Precision.png"
        );
        assert!(icon_url_of(IdKind::Rune, 5011).starts_with(SHARD_IMAGE_BASE));
        assert!(icon_url_of(IdKind::Rune, 5011).contains("Adaptive_Force"));
    }

    #[test]
    fn test_summoner_icon() {
        assert_eq!(
            icon_url_of(IdKind::SummonerSpell, 14),
            "https://ddragon.leagueoflegends.com/cdn/14.3.1/img/spell/SummonerDot.png"
        );
    }

    #[test]
    fn test_stat_shard_slots() {
        assert_eq!(stat_shard_id(0), 5011);
        assert_eq!(stat_shard_id(4), 5007);
        assert_eq!(stat_shard_id(5), 5005);
        assert_eq!(stat_shard_id(17), 17);
    }

    #[test]
    fn test_stat_shard_names_match_icons() {
        for (id, stat, image) in [
            (5002, "Armor", "Rune_shard_Armor"),
            (5005, "Attack Speed", "Rune_shard_Attack_Speed"),
            (5011, "Adaptive Force", "Rune_shard_Adaptive_Force"),
        ] {
            assert!(name_of(IdKind::Rune, id).contains(stat));
            assert!(icon_url_of(IdKind::Rune, id).contains(image));
        }
    }

    #[test]
    fn test_champion_id_exact_and_normalized() {
        assert_eq!(champion_id_of("Ahri"), Some(103));
        assert_eq!(champion_id_of("Lee Sin"), Some(64));
        assert_eq!(champion_id_of("Kai'Sa"), Some(145));
        assert_eq!(champion_id_of("kaisa"), Some(145));
        assert_eq!(champion_id_of("Dr. Mundo"), Some(36));
        assert_eq!(champion_id_of("LeBlanc"), Some(7));
    }

    #[test]
    fn test_champion_id_overrides() {
        assert_eq!(champion_id_of("Wukong"), Some(62));
        assert_eq!(champion_id_of("Nunu & Willump"), Some(20));
        assert_eq!(champion_id_of("Renata Glasc"), Some(888));
    }

    #[test]
    fn test_champion_id_unknown() {
        assert_eq!(champion_id_of("Garen Prime"), None);
        assert_eq!(champion_id_of(""), None);
    }

    #[test]
    fn test_skill_icons() {
        assert_eq!(
            icon_url_of(IdKind::ChampionSkill { champion_id: 62 }, 1),
            "https://ddragon.leagueoflegends.com/cdn/14.3.1/img/spell/monkeykingQ.png"
        );
        assert_eq!(
            icon_url_of(IdKind::ChampionSkill { champion_id: 136 }, 3),
            "https://ddragon.leagueoflegends.com/cdn/14.3.1/img/spell/aurelionsolE.png"
        );
        assert_eq!(icon_url_of(IdKind::ChampionSkill { champion_id: 1 }, 9), "");
        assert_eq!(icon_url_of(IdKind::ChampionSkill { champion_id: 0 }, 1), "");
    }

    #[test]
    fn test_slugs() {
        assert_eq!(slug_for_name("Nunu & Willump"), "nunu");
        assert_eq!(slug_for_name("Twisted Fate"), "twistedfate");
        assert_eq!(slug_for_name("Ahri"), "ahri");
        assert_eq!(champion_slug(21).as_deref(), Some("missfortune"));
    }
}
