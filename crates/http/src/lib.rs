//! # gantry-http
//!
//! The request dispatch engine for the gantry web framework:
//! - URI normalization and parameter extraction
//! - Insertion-ordered route table with `{name}` capture patterns
//! - First-match-wins route matching
//! - Handler registration with explicit method tables
//! - Dispatch with a Not-Found fallback pathway
//! - A thin axum/tokio server adapter at the edge

pub mod app;
pub mod dispatch;
pub mod errors;
pub mod handler;
pub mod request;
pub mod response;
pub mod routing;
pub mod server;
pub mod uri;

pub use app::{App, AppBuilder};
pub use dispatch::Dispatcher;
pub use errors::{HttpError, HttpResult, RouterError};
pub use handler::{BoundMethod, Handler, HandlerMethod, HandlerRegistry, MethodTable};
pub use request::{ParsedRequest, RawRequest, RequestContext, RequestMethod, ROOT_SEGMENT};
pub use response::{ApiResponse, Response, ResponseBody};
pub use routing::{RouteMatch, RoutePattern, Router};
pub use server::serve;

// Re-export the core types applications register with.
pub use gantry_core::{AppConfig, Environment, HandlerSpec, Module, RouteDefinition};
