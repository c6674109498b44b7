use thiserror::Error;

/// Errors that cross the recommendation boundary.
///
/// Per-candidate and per-round failures (unknown champions, missing build
/// data, LLM errors) are absorbed by the orchestrator and never surface here.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RecommendError {
    /// The caller sent an unusable request (e.g. unknown target role)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The champion roster could not be loaded
    #[error("Champion catalog unavailable: {0}")]
    CatalogUnavailable(String),
}
