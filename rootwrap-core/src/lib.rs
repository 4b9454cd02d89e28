//! rootwrap Core - Primitives for root-key JSON wrapping
//!
//! This crate provides the wrap/unwrap layer for talking to backends that
//! nest a resource's attributes under a single top-level JSON key (the
//! default Rails `include_root_in_json` convention), with no I/O
//! dependencies. It includes:
//!
//! - The validated wrap key
//! - Payload wrap/unwrap operations
//! - The `Wrappable` capability trait
//! - A model attribute store with the unwrap lifecycle hooks
//! - Error types

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod key;
pub mod model;
pub mod payload;

// Re-export commonly used types
pub use error::{Result, WrapError};
pub use key::WrapKey;
pub use model::{Change, JsonOptions, Model, SetOptions, Wrappable};
pub use payload::{is_wrapped, unwrapped_attributes, wrapped_attributes, Attributes};
