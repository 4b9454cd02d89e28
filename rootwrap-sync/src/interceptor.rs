//! Outbound request interceptors

use crate::error::Result;
use crate::request::SyncRequest;

/// A hook run against every outbound request before dispatch.
///
/// Interceptors replace wrapping the global sync function: the engine applies
/// a chain of them explicitly, so several independent concerns can augment a
/// request without load-order fragility.
pub trait Interceptor {
    /// Mutate the request before the transport dispatches it.
    fn before_send(&self, request: &mut SyncRequest) -> Result<()>;
}

/// An ordered chain of interceptors.
#[derive(Default)]
pub struct InterceptorChain {
    interceptors: Vec<Box<dyn Interceptor>>,
}

impl InterceptorChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        InterceptorChain {
            interceptors: Vec::new(),
        }
    }

    /// Append an interceptor. Interceptors run in registration order.
    pub fn push(&mut self, interceptor: Box<dyn Interceptor>) {
        self.interceptors.push(interceptor);
    }

    /// Number of registered interceptors.
    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    /// Whether the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }

    /// Run every interceptor against the request, in order.
    pub fn apply(&self, request: &mut SyncRequest) -> Result<()> {
        for interceptor in &self.interceptors {
            interceptor.before_send(request)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Method;

    struct AppendHeader(&'static str);

    impl Interceptor for AppendHeader {
        fn before_send(&self, request: &mut SyncRequest) -> Result<()> {
            let existing = request.header("X-Trace").unwrap_or("").to_owned();
            request.set_header("X-Trace", existing + self.0);
            Ok(())
        }
    }

    #[test]
    fn test_chain_runs_in_registration_order() {
        let mut chain = InterceptorChain::new();
        chain.push(Box::new(AppendHeader("a")));
        chain.push(Box::new(AppendHeader("b")));

        let mut request = SyncRequest::new(Method::Read, "/posts", None);
        chain.apply(&mut request).unwrap();
        assert_eq!(request.header("X-Trace"), Some("ab"));
    }
}
