//! Route definition value types shared between modules and the router.
//!
//! Modules describe their routes as plain data; the HTTP crate's router
//! validates and compiles these during the registration phase.

/// Method name used when a route spec names only a handler.
pub const DEFAULT_METHOD: &str = "main";

/// Handler binding for a route: either a bare handler name (the method
/// defaults to [`DEFAULT_METHOD`]) or an explicit handler/method pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerSpec {
    Handler(String),
    HandlerMethod(String, String),
}

impl HandlerSpec {
    /// Bind a handler with the default method
    pub fn handler(name: impl Into<String>) -> Self {
        HandlerSpec::Handler(name.into())
    }

    /// Bind a specific handler method
    pub fn method(handler: impl Into<String>, method: impl Into<String>) -> Self {
        HandlerSpec::HandlerMethod(handler.into(), method.into())
    }

    /// The handler name this spec resolves to
    pub fn handler_name(&self) -> &str {
        match self {
            HandlerSpec::Handler(name) => name,
            HandlerSpec::HandlerMethod(name, _) => name,
        }
    }

    /// The method name this spec resolves to, after defaulting
    pub fn method_name(&self) -> &str {
        match self {
            HandlerSpec::Handler(_) => DEFAULT_METHOD,
            HandlerSpec::HandlerMethod(_, method) => method,
        }
    }
}

impl From<&str> for HandlerSpec {
    fn from(name: &str) -> Self {
        HandlerSpec::handler(name)
    }
}

impl From<(&str, &str)> for HandlerSpec {
    fn from((handler, method): (&str, &str)) -> Self {
        HandlerSpec::method(handler, method)
    }
}

/// A route contributed by a module: pattern plus handler binding.
///
/// Patterns are `/`-delimited; a segment fully wrapped in `{` and `}` is a
/// named capture. No regex, optional segments, or catch-alls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDefinition {
    pub pattern: String,
    pub spec: HandlerSpec,
}

impl RouteDefinition {
    /// Create a new route definition
    pub fn new(pattern: impl Into<String>, spec: impl Into<HandlerSpec>) -> Self {
        Self {
            pattern: pattern.into(),
            spec: spec.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_handler_defaults_method() {
        let spec = HandlerSpec::handler("Home");
        assert_eq!(spec.handler_name(), "Home");
        assert_eq!(spec.method_name(), DEFAULT_METHOD);
    }

    #[test]
    fn test_explicit_method() {
        let spec = HandlerSpec::method("Home", "favicon");
        assert_eq!(spec.handler_name(), "Home");
        assert_eq!(spec.method_name(), "favicon");
    }

    #[test]
    fn test_route_definition_from_tuple() {
        let route = RouteDefinition::new("/favicon.ico", ("Home", "favicon"));
        assert_eq!(route.pattern, "/favicon.ico");
        assert_eq!(route.spec, HandlerSpec::method("Home", "favicon"));
    }
}
