//! Sample application binary: bootstrap, registration, serve.

mod controllers;
mod modules;

use controllers::{Home, SampleApi};
use gantry_core::AppConfig;
use gantry_http::{App, HttpResult};
use modules::{ApisModule, PagesModule};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> HttpResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()
        .map_err(|e| gantry_http::HttpError::startup(e.to_string()))?;

    let app = App::builder(config)
        .handler::<Home>()?
        .handler::<SampleApi>()?
        .module(PagesModule)?
        .module(ApisModule)?
        .build()?;

    gantry_http::serve(app).await
}
