//! Module registry: ordered collection of route-contributing modules.
//!
//! Modules are registered explicitly during bootstrap, never discovered.
//! Registration order defines the insertion order of their routes in the
//! route table, which the matcher's first-match-wins semantics depend on.

use crate::errors::{CoreError, CoreResult};
use crate::modules::RouteDefinition;

/// A route-contributing application module.
pub trait Module: Send + Sync {
    /// Unique module name, used for diagnostics and duplicate detection
    fn name(&self) -> &str;

    /// Routes this module contributes, in the order they should be registered
    fn routes(&self) -> Vec<RouteDefinition>;
}

/// Ordered registry of application modules.
#[derive(Default)]
pub struct ModuleRegistry {
    modules: Vec<Box<dyn Module>>,
}

impl ModuleRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            modules: Vec::new(),
        }
    }

    /// Register a module. Module names must be unique.
    pub fn register<M: Module + 'static>(&mut self, module: M) -> CoreResult<()> {
        if self.has_module(module.name()) {
            return Err(CoreError::DuplicateModule {
                name: module.name().to_string(),
            });
        }
        tracing::info!(module = module.name(), "Registering module");
        self.modules.push(Box::new(module));
        Ok(())
    }

    /// Number of registered modules
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Check whether a module with the given name is registered
    pub fn has_module(&self, name: &str) -> bool {
        self.modules.iter().any(|m| m.name() == name)
    }

    /// Collect every module's routes in registration order.
    pub fn collect_routes(&self) -> Vec<RouteDefinition> {
        self.modules
            .iter()
            .flat_map(|module| module.routes())
            .collect()
    }
}
