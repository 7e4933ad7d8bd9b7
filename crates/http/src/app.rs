//! Application bootstrap and context.
//!
//! `AppBuilder` is the single-writer registration phase: handlers first,
//! then modules. `build()` compiles every module route against the handler
//! registry, after which the resulting `App` — configuration plus dispatcher
//! — is immutable and can be shared freely.

use crate::dispatch::Dispatcher;
use crate::errors::HttpResult;
use crate::handler::{Handler, HandlerRegistry};
use crate::request::RawRequest;
use crate::response::Response;
use crate::routing::Router;
use gantry_core::{AppConfig, Module, ModuleRegistry};

/// Builder for the application context.
#[derive(Default)]
pub struct AppBuilder {
    config: AppConfig,
    handlers: HandlerRegistry,
    modules: ModuleRegistry,
}

impl AppBuilder {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            handlers: HandlerRegistry::new(),
            modules: ModuleRegistry::new(),
        }
    }

    /// Register a handler type
    pub fn handler<H: Handler>(mut self) -> HttpResult<Self> {
        self.handlers.register::<H>()?;
        Ok(self)
    }

    /// Register a module. Module registration order defines route insertion
    /// order, which first-match-wins depends on.
    pub fn module<M: Module + 'static>(mut self, module: M) -> HttpResult<Self> {
        self.modules
            .register(module)
            .map_err(|e| crate::errors::HttpError::startup(e.to_string()))?;
        Ok(self)
    }

    /// Compile the route table and produce the immutable application.
    pub fn build(self) -> HttpResult<App> {
        let mut router = Router::new();
        for definition in self.modules.collect_routes() {
            router.add_route(&definition, &self.handlers)?;
        }

        tracing::info!(
            app = %self.config.name,
            modules = self.modules.module_count(),
            routes = router.route_count(),
            "Application built"
        );

        Ok(App {
            config: self.config,
            dispatcher: Dispatcher::new(router),
        })
    }
}

/// The built application: configuration plus the dispatch pipeline.
///
/// There is no global router; this explicit context is passed by reference
/// to whatever hosts the process.
#[derive(Debug)]
pub struct App {
    config: AppConfig,
    dispatcher: Dispatcher,
}

impl App {
    /// Start building an application with the given configuration
    pub fn builder(config: AppConfig) -> AppBuilder {
        AppBuilder::new(config)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// The dispatch entry point: handle one ambient request.
    pub fn handle(&self, raw: &RawRequest) -> HttpResult<Response> {
        self.dispatcher.dispatch(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{HttpError, RouterError};
    use crate::handler::MethodTable;
    use crate::request::RequestContext;
    use gantry_core::RouteDefinition;

    #[derive(Default)]
    struct Pages;

    impl Pages {
        fn main(&self, _ctx: &RequestContext) -> HttpResult<Response> {
            Ok(Response::ok().html("<h1>home</h1>"))
        }
    }

    impl Handler for Pages {
        const NAME: &'static str = "Pages";

        fn methods() -> MethodTable<Self> {
            MethodTable::new().with("main", Pages::main)
        }
    }

    struct PagesModule;

    impl Module for PagesModule {
        fn name(&self) -> &str {
            "pages"
        }

        fn routes(&self) -> Vec<RouteDefinition> {
            vec![RouteDefinition::new("/", "Pages")]
        }
    }

    struct BadModule;

    impl Module for BadModule {
        fn name(&self) -> &str {
            "bad"
        }

        fn routes(&self) -> Vec<RouteDefinition> {
            vec![RouteDefinition::new("/oops", "Nonexistent")]
        }
    }

    #[test]
    fn test_build_and_handle() {
        let app = App::builder(AppConfig::default())
            .handler::<Pages>()
            .unwrap()
            .module(PagesModule)
            .unwrap()
            .build()
            .unwrap();

        let response = app.handle(&RawRequest::get("/")).unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(response.body_text(), Some("<h1>home</h1>"));
    }

    #[test]
    fn test_build_fails_fast_on_bad_route_spec() {
        let result = App::builder(AppConfig::default())
            .handler::<Pages>()
            .unwrap()
            .module(BadModule)
            .unwrap()
            .build();

        assert!(matches!(
            result,
            Err(HttpError::Router(RouterError::UnknownHandler { .. }))
        ));
    }
}
