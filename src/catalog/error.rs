//! Error types for catalog operations.

use thiserror::Error;

/// Errors that can occur while loading the champion roster.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Network connectivity error while fetching the roster.
    #[error("Network error: {0}")]
    Network(String),

    /// Roster endpoint returned something we could not decode.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Catalog has no roster and no source to load one from.
    #[error("Champion catalog not initialized")]
    NotReady,
}
