//! Handler registration and method binding.
//!
//! Every handler declares an explicit method table of plain function
//! pointers; the registry erases the concrete type behind per-method
//! closures at registration time, so route registration can validate
//! handler and method names eagerly and dispatch never resolves anything
//! by string lookup at request time.

use crate::errors::{HttpResult, RouterError};
use crate::request::RequestContext;
use crate::response::Response;
use std::collections::HashMap;
use std::sync::Arc;

/// A handler method: borrows a freshly constructed handler instance and the
/// request context, produces a response.
pub type HandlerMethod<T> = fn(&T, &RequestContext) -> HttpResult<Response>;

/// A method resolved against a concrete handler type, with the instantiation
/// folded in. Invoking it constructs the handler (exactly once per request)
/// and calls the method.
pub type BoundMethod = Arc<dyn Fn(&RequestContext) -> HttpResult<Response> + Send + Sync>;

/// A controller or API class: constructed once per dispatched request,
/// exposing its invokable methods as an explicit table.
pub trait Handler: Default + Send + Sync + 'static {
    /// Name routes are registered against
    const NAME: &'static str;

    /// The handler's method table
    fn methods() -> MethodTable<Self>;
}

/// Ordered mapping from method-name strings to handler functions.
pub struct MethodTable<T> {
    entries: Vec<(&'static str, HandlerMethod<T>)>,
}

impl<T> MethodTable<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a named method
    pub fn with(mut self, name: &'static str, method: HandlerMethod<T>) -> Self {
        self.entries.push((name, method));
        self
    }

    /// Look up a method by name
    pub fn get(&self, name: &str) -> Option<HandlerMethod<T>> {
        self.entries
            .iter()
            .find(|(entry_name, _)| *entry_name == name)
            .map(|(_, method)| *method)
    }

    /// Registered method names
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(name, _)| *name).collect()
    }
}

impl<T> Default for MethodTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry of every handler the application exposes.
///
/// Populated during the startup registration phase (single writer) and
/// read-only afterwards.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, HashMap<&'static str, BoundMethod>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler type, binding each of its methods.
    pub fn register<H: Handler>(&mut self) -> Result<(), RouterError> {
        if self.handlers.contains_key(H::NAME) {
            return Err(RouterError::DuplicateHandler {
                handler: H::NAME.to_string(),
            });
        }

        let table = H::methods();
        let mut bound: HashMap<&'static str, BoundMethod> = HashMap::new();
        for name in table.names() {
            let method = table
                .get(name)
                .unwrap_or_else(|| unreachable!("method listed in its own table"));
            bound.insert(
                name,
                Arc::new(move |ctx: &RequestContext| {
                    let instance = H::default();
                    method(&instance, ctx)
                }),
            );
        }

        tracing::debug!(handler = H::NAME, methods = ?table.names(), "Registered handler");
        self.handlers.insert(H::NAME.to_string(), bound);
        Ok(())
    }

    /// Check whether a handler name is registered
    pub fn contains(&self, handler: &str) -> bool {
        self.handlers.contains_key(handler)
    }

    /// Resolve a handler/method pair to its bound invoker.
    ///
    /// Called during route registration; failures here are registration
    /// errors, never dispatch-time surprises.
    pub fn resolve(
        &self,
        pattern: &str,
        handler: &str,
        method: &str,
    ) -> Result<BoundMethod, RouterError> {
        let methods = self
            .handlers
            .get(handler)
            .ok_or_else(|| RouterError::UnknownHandler {
                pattern: pattern.to_string(),
                handler: handler.to_string(),
            })?;
        methods
            .get(method)
            .cloned()
            .ok_or_else(|| RouterError::UnknownMethod {
                pattern: pattern.to_string(),
                handler: handler.to_string(),
                method: method.to_string(),
            })
    }

    /// Number of registered handlers
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{ParsedRequest, RawRequest, RequestMethod};

    #[derive(Default)]
    struct Probe;

    impl Probe {
        fn main(&self, _ctx: &RequestContext) -> HttpResult<Response> {
            Ok(Response::ok().text("probe main"))
        }

        fn echo(&self, ctx: &RequestContext) -> HttpResult<Response> {
            let value = ctx.param("value").unwrap_or("none");
            Ok(Response::ok().text(value))
        }
    }

    impl Handler for Probe {
        const NAME: &'static str = "Probe";

        fn methods() -> MethodTable<Self> {
            MethodTable::new()
                .with("main", Probe::main)
                .with("echo", Probe::echo)
        }
    }

    fn empty_context() -> RequestContext {
        RequestContext::new(
            RequestMethod::GET,
            ParsedRequest::from_raw(&RawRequest::get("/")),
            HashMap::new(),
        )
    }

    #[test]
    fn test_register_and_resolve() {
        let mut registry = HandlerRegistry::new();
        registry.register::<Probe>().unwrap();
        assert!(registry.contains("Probe"));

        let bound = registry.resolve("/", "Probe", "main").unwrap();
        let response = bound(&empty_context()).unwrap();
        assert_eq!(response.status(), 200);
    }

    #[test]
    fn test_duplicate_handler_rejected() {
        let mut registry = HandlerRegistry::new();
        registry.register::<Probe>().unwrap();
        assert!(matches!(
            registry.register::<Probe>(),
            Err(RouterError::DuplicateHandler { .. })
        ));
    }

    #[test]
    fn test_unknown_handler_and_method() {
        let mut registry = HandlerRegistry::new();
        registry.register::<Probe>().unwrap();

        assert!(matches!(
            registry.resolve("/x", "Ghost", "main"),
            Err(RouterError::UnknownHandler { .. })
        ));
        assert!(matches!(
            registry.resolve("/x", "Probe", "missing"),
            Err(RouterError::UnknownMethod { .. })
        ));
    }

    #[test]
    fn test_method_table_lookup() {
        let table = Probe::methods();
        assert_eq!(table.names(), vec!["main", "echo"]);
        assert!(table.get("echo").is_some());
        assert!(table.get("absent").is_none());
    }
}
