//! Wire types for the DeepLoL champion build endpoint.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// `/champion/build` response body.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BuildResponse {
    #[serde(default)]
    pub build_by_lane: HashMap<String, LaneBuild>,
}

/// Build variants recorded for one lane.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LaneBuild {
    #[serde(default)]
    pub build_lst: Vec<BuildVariant>,
    #[serde(default)]
    pub champion_tier: Option<f64>,
    #[serde(default)]
    pub win_rate: f64,
    #[serde(default)]
    pub pick_rate: f64,
    #[serde(default)]
    pub ban_rate: Option<f64>,
}

/// One recorded build.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct BuildVariant {
    #[serde(default)]
    pub rune: RuneBuild,
    #[serde(default)]
    pub item: ItemBuild,
    #[serde(default)]
    pub spell: SpellBuild,
    #[serde(default)]
    pub skill: SkillBuild,
    #[serde(default)]
    pub win_rate: f64,
    #[serde(default)]
    pub pick_rate: f64,
    #[serde(default)]
    pub games: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RuneBuild {
    #[serde(default)]
    pub main_build: Vec<u32>,
    #[serde(default)]
    pub sub_build: Vec<u32>,
    /// Stat shard slot indices, not rune ids.
    #[serde(default)]
    pub stat_build: Vec<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ItemBuild {
    #[serde(default)]
    pub build: Vec<u32>,
    #[serde(default)]
    pub detail: Vec<u32>,
    #[serde(default)]
    pub detail_price: Vec<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SpellBuild {
    #[serde(default)]
    pub build: Vec<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SkillBuild {
    #[serde(default)]
    pub build: Vec<u32>,
    /// Skill code picked at each level, level 1 first.
    #[serde(default)]
    pub detail: Vec<u32>,
}
