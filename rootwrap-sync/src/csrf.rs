//! CSRF token header injection

use crate::error::Result;
use crate::interceptor::Interceptor;
use crate::request::SyncRequest;

/// Header carrying the CSRF token, as Rails expects it.
pub const CSRF_HEADER: &str = "X-CSRF-Token";

/// Name of the meta tag the hosting document stores the token in.
pub const CSRF_META_NAME: &str = "csrf-token";

/// Source of page metadata values: meta tag name to content attribute.
///
/// The production implementation reads the hosting document; tests use an
/// in-memory double.
pub trait MetadataSource {
    /// Content of the named meta tag, if present.
    fn content(&self, name: &str) -> Option<String>;
}

/// Interceptor that sets the `X-CSRF-Token` header on every request.
///
/// The token is read from the metadata source on every call, never cached,
/// so a rotated token is always picked up. The header is attached
/// unconditionally, safe and unsafe methods alike. A missing meta tag is not
/// an error here: the header is sent empty and the backend rejects the
/// request on its own terms.
pub struct CsrfInterceptor<S: MetadataSource> {
    source: S,
}

impl<S: MetadataSource> CsrfInterceptor<S> {
    /// Build an interceptor over the given metadata source.
    pub fn new(source: S) -> Self {
        CsrfInterceptor { source }
    }
}

impl<S: MetadataSource> Interceptor for CsrfInterceptor<S> {
    fn before_send(&self, request: &mut SyncRequest) -> Result<()> {
        let token = self.source.content(CSRF_META_NAME).unwrap_or_default();
        tracing::trace!(present = !token.is_empty(), "Attaching CSRF token header");
        request.set_header(CSRF_HEADER, token);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Method;

    struct FixedToken(Option<&'static str>);

    impl MetadataSource for FixedToken {
        fn content(&self, name: &str) -> Option<String> {
            assert_eq!(name, CSRF_META_NAME);
            self.0.map(str::to_owned)
        }
    }

    #[test]
    fn test_header_set_from_metadata() {
        let interceptor = CsrfInterceptor::new(FixedToken(Some("tok-1")));
        let mut request = SyncRequest::new(Method::Create, "/posts", None);
        interceptor.before_send(&mut request).unwrap();
        assert_eq!(request.header(CSRF_HEADER), Some("tok-1"));
    }

    #[test]
    fn test_missing_metadata_sends_empty_value() {
        let interceptor = CsrfInterceptor::new(FixedToken(None));
        let mut request = SyncRequest::new(Method::Read, "/posts", None);
        interceptor.before_send(&mut request).unwrap();
        assert_eq!(request.header(CSRF_HEADER), Some(""));
    }
}
