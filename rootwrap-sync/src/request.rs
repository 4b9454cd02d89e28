//! Request and response types for synchronization calls

use rootwrap_core::Attributes;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// CRUD method of a synchronization call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    /// Persist a new resource (POST).
    Create,
    /// Fetch a resource (GET).
    Read,
    /// Persist changes to an existing resource (PUT).
    Update,
    /// Remove a resource (DELETE).
    Delete,
}

impl Method {
    /// HTTP verb for this method.
    pub fn http_verb(&self) -> &'static str {
        match self {
            Method::Create => "POST",
            Method::Read => "GET",
            Method::Update => "PUT",
            Method::Delete => "DELETE",
        }
    }

    /// Whether this method carries a serialized model body.
    pub fn is_write(&self) -> bool {
        matches!(self, Method::Create | Method::Update)
    }
}

/// An outbound request assembled for one synchronization call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncRequest {
    /// CRUD method.
    pub method: Method,
    /// Target URL.
    pub url: String,
    /// Request headers.
    pub headers: BTreeMap<String, String>,
    /// Wrapped JSON body, present on write methods.
    pub body: Option<Attributes>,
}

impl SyncRequest {
    /// Build a request with empty headers.
    pub fn new(method: Method, url: impl Into<String>, body: Option<Attributes>) -> Self {
        SyncRequest {
            method,
            url: url.into(),
            headers: BTreeMap::new(),
            body,
        }
    }

    /// Set a header, overwriting any previous value.
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(name.into(), value.into());
    }

    /// Look up a header value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

/// A response surfaced by the transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncResponse {
    /// HTTP status code.
    pub status: u16,
    /// Wrapped JSON body, absent on bodyless responses (e.g. 204).
    pub body: Option<Attributes>,
}

impl SyncResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Caller-facing options for one synchronization call.
///
/// `params` flows into the model's outbound serialization on write methods;
/// the read path carries no extension point.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncOptions {
    /// Extra top-level fields for the outbound payload, sibling to the
    /// wrap key.
    pub params: Option<Attributes>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_verbs() {
        assert_eq!(Method::Create.http_verb(), "POST");
        assert_eq!(Method::Read.http_verb(), "GET");
        assert_eq!(Method::Update.http_verb(), "PUT");
        assert_eq!(Method::Delete.http_verb(), "DELETE");
    }

    #[test]
    fn test_write_methods() {
        assert!(Method::Create.is_write());
        assert!(Method::Update.is_write());
        assert!(!Method::Read.is_write());
        assert!(!Method::Delete.is_write());
    }

    #[test]
    fn test_header_overwrite() {
        let mut request = SyncRequest::new(Method::Read, "/posts/1", None);
        request.set_header("X-Test", "a");
        request.set_header("X-Test", "b");
        assert_eq!(request.header("X-Test"), Some("b"));
    }

    #[test]
    fn test_success_range() {
        assert!(SyncResponse { status: 200, body: None }.is_success());
        assert!(SyncResponse { status: 204, body: None }.is_success());
        assert!(!SyncResponse { status: 422, body: None }.is_success());
    }
}
