//! Champion builds.
//!
//! A [`Build`] is the display-ready form of a stats provider record: every
//! numeric id translated through the id registry. Builds are either real
//! (derived from provider data) or the [sentinel](Build::sentinel) that
//! stands in when no build could be resolved. The sentinel is recognised
//! solely by [`SENTINEL_MARKER`] in the name of its first item.

mod error;
mod normalizer;
mod skills;

pub use error::LookupError;
pub use normalizer::BuildNormalizer;
pub use skills::{skill_priority, MAX_SKILL_LEVELS};

use crate::catalog::Role;
use crate::ids::{self, IdKind, FLASH, IGNITE, SMITE};
use serde::{Deserialize, Serialize};

/// First item name of the sentinel build.
pub const SENTINEL_MARKER: &str = "Error loading items";

/// First rune name of the sentinel build.
pub const SENTINEL_RUNE_MARKER: &str = "Error loading runes";

/// An item, rune or summoner spell in a build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildEntry {
    pub id: String,
    pub name: String,
    pub icon_url: String,
}

impl BuildEntry {
    /// Resolve an id through the registry.
    pub fn resolve(kind: IdKind, id: u32) -> Self {
        Self {
            id: id.to_string(),
            name: ids::name_of(kind, id),
            icon_url: ids::icon_url_of(kind, id),
        }
    }

    fn placeholder(name: &str) -> Self {
        Self {
            id: "0".to_string(),
            name: name.to_string(),
            icon_url: String::new(),
        }
    }
}

/// A skill in priority order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillEntry {
    pub id: u32,
    /// Skill letter: "Q", "W" or "E"
    pub name: String,
    pub icon_url: String,
}

impl SkillEntry {
    fn letter(letter: &str, icon_url: String) -> Self {
        Self {
            id: 0,
            name: letter.to_string(),
            icon_url,
        }
    }
}

/// Display-ready build for one champion in one role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    pub items: Vec<BuildEntry>,
    /// Primary tree, then secondary tree, then stat shards
    pub runes: Vec<BuildEntry>,
    pub summoners: Vec<BuildEntry>,
    pub skill_order: Vec<SkillEntry>,
    pub win_rate: f64,
    pub pick_rate: f64,
    pub ban_rate: f64,
}

impl Build {
    /// Placeholder build returned when no real build can be resolved.
    ///
    /// Jungle gets Smite + Flash, every other role Flash + Ignite.
    pub fn sentinel(role: Role) -> Self {
        let spells = match role {
            Role::Jungle => [SMITE, FLASH],
            _ => [FLASH, IGNITE],
        };

        Self {
            items: vec![BuildEntry::placeholder(SENTINEL_MARKER)],
            runes: vec![BuildEntry::placeholder(SENTINEL_RUNE_MARKER)],
            summoners: spells
                .iter()
                .map(|&id| BuildEntry::resolve(IdKind::SummonerSpell, id))
                .collect(),
            skill_order: ["Q", "W", "E"]
                .iter()
                .map(|l| SkillEntry::letter(l, String::new()))
                .collect(),
            win_rate: 0.0,
            pick_rate: 0.0,
            ban_rate: 0.0,
        }
    }

    /// Whether this is the sentinel build.
    pub fn is_sentinel(&self) -> bool {
        self.items
            .first()
            .is_some_and(|item| item.name == SENTINEL_MARKER)
    }
}
