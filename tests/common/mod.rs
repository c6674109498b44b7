//! Shared test utilities for draftpick integration tests.
//!
//! Provides scripted completion providers, an in-memory stats provider,
//! a small champion roster, and a router wired from those fakes.

#![allow(dead_code)]

use async_trait::async_trait;
use draftpick::api::{create_router, AppState};
use draftpick::build::{BuildNormalizer, LookupError};
use draftpick::catalog::{Champion, ChampionCatalog};
use draftpick::config::DraftpickConfig;
use draftpick::llm::{CompletionOptions, CompletionProvider, Providers, ProviderError};
use draftpick::recommend::Recommender;
use draftpick::stats::{
    BuildVariant, ItemBuild, LaneBuild, RuneBuild, SkillBuild, SpellBuild, StatsProvider,
};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

// =============================================================================
// Well-Known Test Constants
// =============================================================================

/// UUID v4 string length: "xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx"
pub const UUID_V4_STRING_LEN: usize = 36;

/// Champions with a Middle build in [`known_stats`]: Ahri, Zed, Lux, Orianna.
pub const MID_BUILD_IDS: [u32; 4] = [103, 238, 99, 61];

// =============================================================================
// Roster
// =============================================================================

pub fn roster() -> Vec<Champion> {
    vec![
        Champion::new("Ahri", "103", "Ahri", &["Mage", "Assassin"]),
        Champion::new("Zed", "238", "Zed", &["Assassin"]),
        Champion::new("Lux", "99", "Lux", &["Mage", "Support"]),
        Champion::new("Orianna", "61", "Orianna", &["Mage"]),
        Champion::new("Garen", "86", "Garen", &["Fighter", "Tank"]),
        Champion::new("Jinx", "222", "Jinx", &["Marksman"]),
        Champion::new("MonkeyKing", "62", "Wukong", &["Fighter", "Tank"]),
    ]
}

pub fn catalog() -> Arc<ChampionCatalog> {
    Arc::new(ChampionCatalog::from_champions(roster()))
}

// =============================================================================
// Providers
// =============================================================================

/// Completion provider that replays canned replies in order and records prompts.
pub struct ScriptedProvider {
    name: &'static str,
    replies: Mutex<VecDeque<Result<Option<String>, ProviderError>>>,
    prompts: Mutex<Vec<String>>,
    options: Mutex<Vec<CompletionOptions>>,
}

impl ScriptedProvider {
    pub fn new(name: &'static str, replies: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            name,
            replies: Mutex::new(
                replies
                    .iter()
                    .map(|r| Ok(Some(r.to_string())))
                    .collect(),
            ),
            prompts: Mutex::new(Vec::new()),
            options: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            name,
            replies: Mutex::new(VecDeque::from(vec![Err(ProviderError::Upstream {
                status: 500,
                message: "upstream down".to_string(),
            })])),
            prompts: Mutex::new(Vec::new()),
            options: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn options(&self) -> Vec<CompletionOptions> {
        self.options.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    fn name(&self) -> &str {
        self.name
    }

    async fn complete(
        &self,
        prompt: &str,
        options: CompletionOptions,
    ) -> Result<Option<String>, ProviderError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.options.lock().unwrap().push(options);
        self.replies.lock().unwrap().pop_front().unwrap_or(Ok(None))
    }
}

/// Stats provider backed by a fixed map of (champion id, lane) builds.
pub struct KnownStats {
    lanes: HashMap<(u32, String), LaneBuild>,
}

#[async_trait]
impl StatsProvider for KnownStats {
    async fn fetch_build(
        &self,
        champion_id: u32,
        lane: &str,
    ) -> Result<Option<LaneBuild>, LookupError> {
        Ok(self.lanes.get(&(champion_id, lane.to_string())).cloned())
    }
}

pub fn lane_build(win_rate: f64) -> LaneBuild {
    LaneBuild {
        build_lst: vec![BuildVariant {
            rune: RuneBuild {
                main_build: vec![8100, 8112, 8139, 8138, 8135],
                sub_build: vec![8200, 8226, 8210],
                stat_build: vec![0, 0, 1],
            },
            item: ItemBuild {
                build: vec![3157, 3020, 3089],
                ..ItemBuild::default()
            },
            spell: SpellBuild { build: vec![4, 14] },
            skill: SkillBuild {
                build: vec![],
                detail: vec![1, 3, 2, 1, 1, 4, 1, 3, 1, 3, 4, 3, 3, 2, 2, 4, 2, 2],
            },
            win_rate,
            pick_rate: 0.08,
            games: 1200,
        }],
        win_rate,
        pick_rate: 0.08,
        ban_rate: Some(0.03),
        ..LaneBuild::default()
    }
}

/// Middle builds for Ahri, Zed, Lux and Orianna. Garen has nothing.
pub fn known_stats() -> Arc<KnownStats> {
    let lanes = MID_BUILD_IDS
        .iter()
        .map(|id| ((*id, "Middle".to_string()), lane_build(0.52)))
        .collect();
    Arc::new(KnownStats { lanes })
}

// =============================================================================
// App
// =============================================================================

/// Router backed by the fake roster, stats and the given providers.
pub fn test_app(
    openai: Arc<dyn CompletionProvider>,
    gemini: Arc<dyn CompletionProvider>,
) -> axum::Router {
    let config = Arc::new(DraftpickConfig::default());
    let normalizer = Arc::new(BuildNormalizer::new(known_stats()));
    let recommender = Arc::new(Recommender::new(catalog(), normalizer, &config));
    let providers = Providers { openai, gemini };
    let state = Arc::new(AppState::from_parts(config, recommender, providers));
    create_router(state)
}

pub fn ahri_zed_lux() -> &'static str {
    "Champion 1: Ahri - burst and roam\nChampion 2: Zed - snowballs lanes\nChampion 3: Lux - safe poke"
}
