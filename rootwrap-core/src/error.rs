//! Error types for root-key wrapping

use thiserror::Error;

/// Wrap layer error types
#[derive(Debug, Error)]
pub enum WrapError {
    /// A model type was defined without a non-empty wrap key.
    #[error("A non-empty wrap key must be specified")]
    MissingWrapKey,
    /// Payload does not carry an attribute object under the expected key.
    #[error("Payload is not wrapped under key '{0}'")]
    NotWrapped(String),
    /// A caller-supplied top-level param would overwrite the wrapped resource.
    #[error("Extra param '{0}' collides with the wrap key")]
    ParamCollision(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, WrapError>;
