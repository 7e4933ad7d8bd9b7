//! Request dispatch: the once-per-request pipeline from raw input to
//! response.
//!
//! One request is fully normalized, parsed, matched, and dispatched before
//! the next is considered; the whole pipeline is a pure, bounded,
//! synchronous computation over in-memory data. Exactly one handler
//! instantiation attempt happens per request, and there are no retries —
//! matching is deterministic, so retrying could not change the outcome.

use crate::errors::HttpResult;
use crate::request::{ParsedRequest, RawRequest, RequestContext};
use crate::response::Response;
use crate::routing::Router;

/// Dispatches raw requests against a finished router.
#[derive(Debug)]
pub struct Dispatcher {
    router: Router,
}

impl Dispatcher {
    /// Wrap a fully registered router. The router is read-only from here on.
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Handle one request.
    ///
    /// A matched route invokes its bound handler method with the request
    /// context; handler-internal failures propagate to the caller untouched.
    /// No match is not an error: it falls back to the Not-Found pathway.
    pub fn dispatch(&self, raw: &RawRequest) -> HttpResult<Response> {
        let parsed = ParsedRequest::from_raw(raw);

        match self.router.resolve(parsed.path_segments()) {
            Some(matched) => {
                tracing::debug!(
                    handler = matched.handler(),
                    method = matched.method(),
                    pattern = matched.entry().pattern.raw(),
                    "Route matched"
                );
                let bound = matched.entry().bound.clone();
                let context = RequestContext::new(raw.method, parsed, matched.into_params());
                bound(&context)
            }
            None => {
                tracing::debug!(target_segments = ?parsed.path_segments(), "No route matched");
                Ok(Response::not_found())
            }
        }
    }
}
