//! The prompt, parse and validate loop.

use super::parser::{parse_recommendations, Candidate};
use super::prompt::build_prompt;
use super::{Draft, Recommendations};
use crate::build::BuildNormalizer;
use crate::catalog::Champion;
use crate::llm::{CompletionOptions, CompletionProvider};
use crate::logging::content_preview;
use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Loop limits and sampling settings for one orchestration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendOptions {
    /// Hard cap on prompt rounds
    pub max_rounds: u32,
    /// Validated picks to collect before stopping
    pub target_picks: usize,
    pub completion: CompletionOptions,
    /// Log prompt and response previews
    pub content_logging: bool,
}

impl Default for RecommendOptions {
    fn default() -> Self {
        Self {
            max_rounds: 5,
            target_picks: 3,
            completion: CompletionOptions::default(),
            content_logging: false,
        }
    }
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Complete,
    EmptyResponse,
    ProviderFailed,
    NoProgress,
    RoundLimit,
}

impl StopReason {
    pub fn as_str(self) -> &'static str {
        match self {
            StopReason::Complete => "complete",
            StopReason::EmptyResponse => "empty_response",
            StopReason::ProviderFailed => "provider_failed",
            StopReason::NoProgress => "no_progress",
            StopReason::RoundLimit => "round_limit",
        }
    }
}

/// Drives rounds of prompt, completion, parse and build validation until
/// enough picks carry real builds.
pub struct Orchestrator {
    provider: Arc<dyn CompletionProvider>,
    normalizer: Arc<BuildNormalizer>,
    options: RecommendOptions,
}

impl Orchestrator {
    pub fn new(
        provider: Arc<dyn CompletionProvider>,
        normalizer: Arc<BuildNormalizer>,
        options: RecommendOptions,
    ) -> Self {
        Self {
            provider,
            normalizer,
            options,
        }
    }

    /// Run the loop. Never fails: partial (even empty) results are valid.
    pub async fn run(&self, draft: &Draft, catalog: &[Champion]) -> Recommendations {
        self.run_with_reason(draft, catalog).await.0
    }

    pub async fn run_with_reason(
        &self,
        draft: &Draft,
        catalog: &[Champion],
    ) -> (Recommendations, StopReason) {
        let mut accepted = Recommendations::default();
        let role = draft.target_role;
        let mut reason = StopReason::RoundLimit;

        for round in 1..=self.options.max_rounds {
            let prompt = build_prompt(draft, &accepted.champions);
            if let Some(preview) = content_preview(&prompt, self.options.content_logging) {
                debug!(round, prompt = %preview, "Prompt");
            }

            let text = match self.provider.complete(&prompt, self.options.completion).await {
                Ok(Some(text)) if !text.trim().is_empty() => text,
                Ok(_) => {
                    info!(
                        round,
                        provider = self.provider.name(),
                        "Empty completion, stopping"
                    );
                    reason = StopReason::EmptyResponse;
                    break;
                }
                Err(e) => {
                    warn!(
                        round,
                        provider = self.provider.name(),
                        error = %e,
                        "Completion failed, stopping"
                    );
                    reason = StopReason::ProviderFailed;
                    break;
                }
            };
            if let Some(preview) = content_preview(&text, self.options.content_logging) {
                debug!(round, response = %preview, "Completion");
            }

            let fresh: Vec<Candidate> = parse_recommendations(&text, catalog)
                .into_iter()
                .filter(|c| !accepted.contains(&c.champion))
                .collect();

            // Lookups are independent; results come back in candidate order.
            let builds = join_all(
                fresh
                    .iter()
                    .map(|c| self.normalizer.resolve(&c.champion.name, role)),
            )
            .await;

            let mut gained = 0;
            for (candidate, build) in fresh.into_iter().zip(builds) {
                if accepted.len() >= self.options.target_picks {
                    break;
                }
                if build.is_sentinel() {
                    debug!(round, champion = %candidate.champion.name, "No build data, skipping");
                    continue;
                }
                accepted.push(candidate.champion, candidate.explanation, build);
                gained += 1;
            }

            info!(round, gained, total = accepted.len(), "Round finished");

            if accepted.len() >= self.options.target_picks {
                reason = StopReason::Complete;
                break;
            }
            if gained == 0 {
                reason = StopReason::NoProgress;
                break;
            }
        }

        (accepted, reason)
    }
}
