//! rootwrap Sync - Synchronization layer for wrapped models
//!
//! This crate provides the network-facing layer over `rootwrap-core`:
//!
//! - Request/response types for synchronization calls
//! - The `Transport` seam the host's HTTP layer plugs into
//! - An interceptor chain applied to every outbound request
//! - CSRF token injection from page metadata
//! - The `Syncer` engine with fetch/save/destroy calls

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod csrf;
pub mod engine;
pub mod error;
pub mod interceptor;
pub mod request;

// Re-export commonly used types
pub use rootwrap_core::{
    Attributes, JsonOptions, Model, SetOptions, WrapError, WrapKey, Wrappable,
};

pub use csrf::{CsrfInterceptor, MetadataSource, CSRF_HEADER, CSRF_META_NAME};
pub use engine::{Syncer, Transport};
pub use error::{Result, SyncError};
pub use interceptor::{Interceptor, InterceptorChain};
pub use request::{Method, SyncOptions, SyncRequest, SyncResponse};
