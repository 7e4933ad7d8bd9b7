//! The router: owns the route table and performs validated registration.
//!
//! Registration happens during the single-writer startup phase; after the
//! application is built the router is only ever read. The router is a plain
//! value threaded through the application context — there is no ambient
//! global route table.

use super::matcher;
use super::pattern::RoutePattern;
use super::table::{RouteEntry, RouteTable};
use crate::errors::RouterError;
use crate::handler::HandlerRegistry;
use crate::routing::RouteMatch;
use gantry_core::RouteDefinition;

#[derive(Debug, Default)]
pub struct Router {
    table: RouteTable,
}

impl Router {
    pub fn new() -> Self {
        Self {
            table: RouteTable::new(),
        }
    }

    /// Register a route, validating its handler spec against the registry.
    ///
    /// The spec must resolve to exactly one registered handler and one of
    /// its methods; anything else fails here, not at dispatch time.
    /// Registering a pattern that already exists overwrites the prior entry
    /// and emits a non-fatal warning.
    pub fn add_route(
        &mut self,
        definition: &RouteDefinition,
        handlers: &HandlerRegistry,
    ) -> Result<(), RouterError> {
        let pattern = definition.pattern.as_str();
        if pattern.is_empty() {
            return Err(RouterError::invalid_spec(pattern, "pattern cannot be empty"));
        }

        let handler = definition.spec.handler_name();
        let method = definition.spec.method_name();
        if handler.is_empty() {
            return Err(RouterError::invalid_spec(pattern, "handler name cannot be empty"));
        }
        if method.is_empty() {
            return Err(RouterError::invalid_spec(pattern, "method name cannot be empty"));
        }

        let bound = handlers.resolve(pattern, handler, method)?;

        let displaced = self.table.insert(RouteEntry {
            pattern: RoutePattern::parse(pattern),
            handler: handler.to_string(),
            method: method.to_string(),
            bound,
        });
        if let Some(previous) = displaced {
            tracing::warn!(
                pattern,
                previous_handler = %previous.handler,
                previous_method = %previous.method,
                new_handler = handler,
                "Route has been overwritten"
            );
        }

        Ok(())
    }

    /// Match a request's path segments against the table.
    pub fn resolve<'a>(&'a self, segments: &[String]) -> Option<RouteMatch<'a>> {
        matcher::resolve(&self.table, segments)
    }

    /// Number of registered routes
    pub fn route_count(&self) -> usize {
        self.table.len()
    }

    /// Look up a registered route by its exact pattern string
    pub fn route(&self, pattern: &str) -> Option<&RouteEntry> {
        self.table.get(pattern)
    }
}
