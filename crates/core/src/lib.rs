//! # gantry-core
//!
//! Core foundation for the gantry web framework:
//! - Framework error taxonomy
//! - Environment-driven application configuration
//! - Module system for route registration

pub mod config;
pub mod errors;
pub mod modules;

pub use config::{AppConfig, Environment, ServerConfig};
pub use errors::{CoreError, CoreResult};
pub use modules::{HandlerSpec, Module, ModuleRegistry, RouteDefinition, DEFAULT_METHOD};
