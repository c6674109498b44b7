//! Build normalizer: stats provider record to display-ready build.

use super::{skill_priority, Build, BuildEntry, LookupError, SkillEntry};
use crate::catalog::Role;
use crate::ids::{self, IdKind};
use crate::stats::{BuildVariant, StatsProvider};
use std::sync::Arc;

/// Resolves champion builds through a [`StatsProvider`].
pub struct BuildNormalizer {
    stats: Arc<dyn StatsProvider>,
}

impl BuildNormalizer {
    pub fn new(stats: Arc<dyn StatsProvider>) -> Self {
        Self { stats }
    }

    /// Resolve a build, falling back to [`Build::sentinel`] on any failure.
    pub async fn resolve(&self, champion_name: &str, role: Role) -> Build {
        match self.try_resolve(champion_name, role).await {
            Ok(build) => build,
            Err(e) => {
                tracing::warn!(
                    champion = %champion_name,
                    role = %role,
                    error_kind = e.kind(),
                    error = %e,
                    "Build lookup failed, using sentinel build"
                );
                Build::sentinel(role)
            }
        }
    }

    /// Resolve a build from provider data.
    ///
    /// # Errors
    ///
    /// - `LookupError::ChampionNotFound` if the name has no registry id
    /// - `LookupError::NoBuildData` if the lane is missing or has no variants
    /// - `LookupError::ProviderUnavailable` if the provider call failed
    pub async fn try_resolve(&self, champion_name: &str, role: Role) -> Result<Build, LookupError> {
        let champion_id = ids::champion_id_of(champion_name)
            .ok_or_else(|| LookupError::ChampionNotFound(champion_name.to_string()))?;
        let lane = role.lane();

        let no_data = || LookupError::NoBuildData {
            champion: champion_name.to_string(),
            lane: lane.to_string(),
        };

        let lane_build = self
            .stats
            .fetch_build(champion_id, lane)
            .await?
            .ok_or_else(no_data)?;

        let best = best_variant(&lane_build.build_lst).ok_or_else(no_data)?;

        tracing::debug!(
            champion = %champion_name,
            champion_id,
            lane,
            variants = lane_build.build_lst.len(),
            win_rate = best.win_rate,
            "Selected build variant"
        );

        Ok(assemble(
            champion_id,
            best,
            lane_build.ban_rate.unwrap_or(0.0),
        ))
    }
}

/// Variant with the strictly highest win rate; the first one wins ties.
pub(crate) fn best_variant(variants: &[BuildVariant]) -> Option<&BuildVariant> {
    let mut iter = variants.iter();
    let first = iter.next()?;
    Some(iter.fold(first, |best, candidate| {
        if candidate.win_rate > best.win_rate {
            candidate
        } else {
            best
        }
    }))
}

fn assemble(champion_id: u32, variant: &BuildVariant, ban_rate: f64) -> Build {
    let entries = |kind: IdKind, ids: &[u32]| -> Vec<BuildEntry> {
        ids.iter().map(|&id| BuildEntry::resolve(kind, id)).collect()
    };

    let mut runes = entries(IdKind::Rune, &variant.rune.main_build);
    runes.extend(entries(IdKind::Rune, &variant.rune.sub_build));
    runes.extend(
        variant
            .rune
            .stat_build
            .iter()
            .map(|&slot| BuildEntry::resolve(IdKind::Rune, ids::stat_shard_id(slot))),
    );

    let skill_kind = IdKind::ChampionSkill { champion_id };
    let skill_order = skill_priority(&variant.skill.detail)
        .into_iter()
        .map(|letter| {
            let code = match letter {
                "Q" => 1,
                "W" => 2,
                _ => 3,
            };
            SkillEntry::letter(letter, ids::icon_url_of(skill_kind, code))
        })
        .collect();

    Build {
        items: entries(IdKind::Item, &variant.item.build),
        runes,
        summoners: entries(IdKind::SummonerSpell, &variant.spell.build),
        skill_order,
        win_rate: variant.win_rate,
        pick_rate: variant.pick_rate,
        ban_rate,
    }
}
