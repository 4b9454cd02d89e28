//! rootwrap Test Utilities
//!
//! This crate provides shared testing utilities for the rootwrap workspace:
//! attribute builders, a recording mock transport and a rotatable metadata
//! source.

use rootwrap_core::{Attributes, WrapKey};
use rootwrap_sync::{MetadataSource, Result, SyncError, SyncRequest, SyncResponse, Transport};
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, RwLock};

/// Builder for creating attribute sets with common patterns
pub struct AttributeBuilder {
    attrs: Attributes,
}

impl AttributeBuilder {
    /// Create a new attribute builder
    pub fn new() -> Self {
        Self {
            attrs: Attributes::new(),
        }
    }

    /// Add an attribute with a string value
    pub fn string(mut self, key: &str, value: &str) -> Self {
        self.attrs
            .insert(key.to_string(), Value::String(value.to_string()));
        self
    }

    /// Add an attribute with an integer value
    pub fn int(mut self, key: &str, value: i64) -> Self {
        self.attrs.insert(key.to_string(), Value::Number(value.into()));
        self
    }

    /// Add an attribute with a boolean value
    pub fn bool(mut self, key: &str, value: bool) -> Self {
        self.attrs.insert(key.to_string(), Value::Bool(value));
        self
    }

    /// Add an attribute with a null value
    pub fn null(mut self, key: &str) -> Self {
        self.attrs.insert(key.to_string(), Value::Null);
        self
    }

    /// Add an attribute with an arbitrary JSON value
    pub fn value(mut self, key: &str, value: Value) -> Self {
        self.attrs.insert(key.to_string(), value);
        self
    }

    /// Build the attribute set
    pub fn build(self) -> Attributes {
        self.attrs
    }

    /// Build the attribute set nested under `key`, as a backend would send it
    pub fn wrap(self, key: &WrapKey) -> Attributes {
        rootwrap_core::wrapped_attributes(&self.attrs, key)
    }
}

impl Default for AttributeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Transport double that records every dispatched request and replays
/// queued responses. With no queued response it answers 200 with no body.
#[derive(Default)]
pub struct MockTransport {
    /// Requests seen, in dispatch order.
    pub requests: Vec<SyncRequest>,
    responses: VecDeque<Result<SyncResponse>>,
}

impl MockTransport {
    /// Create a transport with nothing queued
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for a future dispatch
    pub fn queue_response(&mut self, response: SyncResponse) {
        self.responses.push_back(Ok(response));
    }

    /// Queue a transport failure for a future dispatch
    pub fn queue_failure(&mut self, message: &str) {
        self.responses
            .push_back(Err(SyncError::Transport(message.to_string())));
    }

    /// The last dispatched request
    pub fn last_request(&self) -> &SyncRequest {
        self.requests.last().expect("no request dispatched")
    }
}

impl Transport for MockTransport {
    fn dispatch(&mut self, request: SyncRequest) -> Result<SyncResponse> {
        self.requests.push(request);
        self.responses.pop_front().unwrap_or(Ok(SyncResponse {
            status: 200,
            body: None,
        }))
    }
}

/// Metadata double whose entries can be rotated while interceptors hold a
/// handle, for exercising fresh-per-call token reads.
#[derive(Clone, Default)]
pub struct SharedMetadata {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl SharedMetadata {
    /// Create an empty metadata document
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or rotate) a meta tag's content
    pub fn set(&self, name: &str, content: &str) {
        self.entries
            .write()
            .expect("metadata lock poisoned")
            .insert(name.to_string(), content.to_string());
    }

    /// Remove a meta tag
    pub fn remove(&self, name: &str) {
        self.entries
            .write()
            .expect("metadata lock poisoned")
            .remove(name);
    }
}

impl MetadataSource for SharedMetadata {
    fn content(&self, name: &str) -> Option<String> {
        self.entries
            .read()
            .expect("metadata lock poisoned")
            .get(name)
            .cloned()
    }
}
