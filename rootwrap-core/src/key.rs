//! The wrap key naming a resource's JSON root

use crate::error::{Result, WrapError};
use std::fmt;

/// Top-level JSON field name a model type nests its attributes under.
///
/// Fixed per model type at definition time. Construction validates the name
/// so a missing or empty key surfaces as a configuration error before any
/// wrap/unwrap logic runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WrapKey(String);

impl WrapKey {
    /// Create a wrap key, rejecting the empty string.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(WrapError::MissingWrapKey);
        }
        Ok(WrapKey(name))
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for WrapKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WrapKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_key() {
        let key = WrapKey::new("post").unwrap();
        assert_eq!(key.as_str(), "post");
        assert_eq!(key.to_string(), "post");
    }

    #[test]
    fn test_empty_key_rejected() {
        let err = WrapKey::new("").unwrap_err();
        assert!(matches!(err, WrapError::MissingWrapKey));
    }
}
