//! Route-contributing modules for the sample application.

use gantry_core::{Module, RouteDefinition};

/// Registers the landing pages.
pub struct PagesModule;

impl Module for PagesModule {
    fn name(&self) -> &str {
        "pages"
    }

    fn routes(&self) -> Vec<RouteDefinition> {
        vec![
            RouteDefinition::new("/", "Home"),
            RouteDefinition::new("/favicon.ico", ("Home", "favicon")),
        ]
    }
}

/// Registers the versioned sample API.
pub struct ApisModule;

impl Module for ApisModule {
    fn name(&self) -> &str {
        "apis"
    }

    fn routes(&self) -> Vec<RouteDefinition> {
        vec![RouteDefinition::new("/apis/{version}/sample", "SampleApi")]
    }
}
