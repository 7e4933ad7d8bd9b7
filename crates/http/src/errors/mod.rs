//! Error types for the gantry HTTP layer.
//!
//! `RouterError` covers the registration phase; `HttpError` covers request
//! handling and server lifecycle. A request that matches no route is not an
//! error anywhere in this crate — the matcher returns `None` and the
//! dispatcher falls back to the Not-Found pathway.

mod http_error;
mod router_error;

pub use http_error::{HttpError, HttpResult};
pub use router_error::RouterError;
