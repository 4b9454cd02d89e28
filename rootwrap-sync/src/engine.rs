//! The synchronization engine

use crate::error::Result;
use crate::interceptor::{Interceptor, InterceptorChain};
use crate::request::{Method, SyncOptions, SyncRequest, SyncResponse};
use rootwrap_core::{JsonOptions, Model, SetOptions};

/// The seam the host's HTTP layer plugs into.
///
/// Implementations own all network concerns: asynchrony, timeouts,
/// cancellation and retries happen (or don't) behind this trait. Failures
/// surface as [`crate::SyncError::Transport`].
pub trait Transport {
    /// Dispatch one request and block until its response is available.
    fn dispatch(&mut self, request: SyncRequest) -> Result<SyncResponse>;
}

/// Synchronization engine: owns a transport and the interceptor chain
/// applied to every outbound request.
pub struct Syncer<T: Transport> {
    transport: T,
    interceptors: InterceptorChain,
}

impl<T: Transport> Syncer<T> {
    /// Create an engine with an empty interceptor chain.
    pub fn new(transport: T) -> Self {
        Syncer {
            transport,
            interceptors: InterceptorChain::new(),
        }
    }

    /// Append an interceptor, builder style.
    pub fn with_interceptor(mut self, interceptor: Box<dyn Interceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    /// Append an interceptor.
    pub fn push_interceptor(&mut self, interceptor: Box<dyn Interceptor>) {
        self.interceptors.push(interceptor);
    }

    /// The underlying transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Run one synchronization call for `model` against `url`.
    ///
    /// Write methods serialize the model through its outbound wrap hook,
    /// merging `options.params` at the top level. The interceptor chain runs
    /// against the assembled request, the transport dispatches it, and a
    /// response body (Rails echoes the saved resource on writes too) is
    /// unwrapped through the model's parse hook and applied to its
    /// attributes. Bodyless responses skip that step.
    pub fn sync(
        &mut self,
        method: Method,
        model: &mut Model,
        url: &str,
        options: &SyncOptions,
    ) -> Result<SyncResponse> {
        let body = if method.is_write() {
            let json_options = JsonOptions {
                params: options.params.clone(),
            };
            Some(model.to_json(&json_options)?)
        } else {
            None
        };

        let mut request = SyncRequest::new(method, url, body);
        self.interceptors.apply(&mut request)?;

        tracing::debug!(
            verb = request.method.http_verb(),
            url = %request.url,
            "Dispatching sync request"
        );
        let response = self.transport.dispatch(request)?;

        if let Some(body) = &response.body {
            let attrs = model.parse(body)?;
            model.set(attrs, &SetOptions::default());
        }
        Ok(response)
    }

    /// Read the model's current state from the server.
    pub fn fetch(&mut self, model: &mut Model, url: &str) -> Result<SyncResponse> {
        self.sync(Method::Read, model, url, &SyncOptions::default())
    }

    /// Persist the model: create when it has no usable id, update otherwise.
    pub fn save(
        &mut self,
        model: &mut Model,
        url: &str,
        options: &SyncOptions,
    ) -> Result<SyncResponse> {
        let method = if model.is_new() {
            Method::Create
        } else {
            Method::Update
        };
        self.sync(method, model, url, options)
    }

    /// Delete the model's server-side resource.
    pub fn destroy(&mut self, model: &mut Model, url: &str) -> Result<SyncResponse> {
        self.sync(Method::Delete, model, url, &SyncOptions::default())
    }
}
