//! Module system: route definitions and the module registry.

mod definition;
mod registry;

pub use definition::{HandlerSpec, RouteDefinition, DEFAULT_METHOD};
pub use registry::{Module, ModuleRegistry};
