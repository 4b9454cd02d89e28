//! Error types for the sync layer

use rootwrap_core::WrapError;
use thiserror::Error;

/// Sync layer error types
#[derive(Debug, Error)]
pub enum SyncError {
    /// Wrap/unwrap of a payload failed.
    #[error("Wrap error: {0}")]
    Wrap(#[from] WrapError),
    /// The transport failed to dispatch the request. Network errors are the
    /// transport's concern and are surfaced untransformed, never retried.
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, SyncError>;
