//! Sample handlers: a page controller and a versioned API.

use gantry_http::{
    ApiResponse, Handler, HttpResult, MethodTable, RequestContext, RequestMethod, Response,
};
use serde_json::json;

/// Landing pages.
#[derive(Default)]
pub struct Home;

impl Home {
    fn main(&self, _ctx: &RequestContext) -> HttpResult<Response> {
        Ok(Response::ok().html(
            "<!DOCTYPE html>\n<html>\n<head><title>gantry</title></head>\n\
             <body><h1>It works</h1></body>\n</html>",
        ))
    }

    fn favicon(&self, _ctx: &RequestContext) -> HttpResult<Response> {
        Ok(Response::no_content())
    }
}

impl Handler for Home {
    const NAME: &'static str = "Home";

    fn methods() -> MethodTable<Self> {
        MethodTable::new()
            .with("main", Home::main)
            .with("favicon", Home::favicon)
    }
}

/// Versioned sample API. Captured values arrive as strings; validating the
/// version is this handler's own business, not the matcher's.
#[derive(Default)]
pub struct SampleApi;

impl SampleApi {
    fn main(&self, ctx: &RequestContext) -> HttpResult<Response> {
        if ctx.method() != RequestMethod::GET {
            return ApiResponse::<serde_json::Value>::new(405, "Method not allowed")
                .into_response();
        }

        if ctx.param("version") != Some("v1") {
            return ApiResponse::<serde_json::Value>::new(400, "Invalid version").into_response();
        }

        ApiResponse::new(200, "Hello from Sample Api")
            .with_data(json!({
                "version": "v1",
                "query": ctx.request().get_params(),
            }))
            .into_response()
    }
}

impl Handler for SampleApi {
    const NAME: &'static str = "SampleApi";

    fn methods() -> MethodTable<Self> {
        MethodTable::new().with("main", SampleApi::main)
    }
}
