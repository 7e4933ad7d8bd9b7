//! Per-request view handed to handler methods.

use super::{ParsedRequest, RequestMethod};
use crate::errors::{HttpError, HttpResult};
use std::collections::HashMap;

/// Everything a handler method may inspect for one request: the parsed
/// request plus the parameters bound by the matched route's captures.
///
/// Captured values are always strings; typed coercion is the handler's own
/// responsibility, not the matcher's.
#[derive(Debug)]
pub struct RequestContext {
    method: RequestMethod,
    request: ParsedRequest,
    path_params: HashMap<String, String>,
}

impl RequestContext {
    pub fn new(
        method: RequestMethod,
        request: ParsedRequest,
        path_params: HashMap<String, String>,
    ) -> Self {
        Self {
            method,
            request,
            path_params,
        }
    }

    pub fn method(&self) -> RequestMethod {
        self.method
    }

    /// The parsed request (path segments, GET and POST parameters)
    pub fn request(&self) -> &ParsedRequest {
        &self.request
    }

    /// Parameters bound by the matched route's captures
    pub fn path_params(&self) -> &HashMap<String, String> {
        &self.path_params
    }

    /// Get a bound capture value by name
    pub fn param(&self, name: &str) -> Option<&str> {
        self.path_params.get(name).map(String::as_str)
    }

    /// Get a bound capture value parsed to a specific type
    pub fn param_parsed<T>(&self, name: &str) -> HttpResult<T>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        let value = self
            .param(name)
            .ok_or_else(|| HttpError::bad_request(format!("Missing path parameter: {}", name)))?;
        value.parse::<T>().map_err(|e| {
            HttpError::bad_request(format!("Invalid path parameter {}: {}", name, e))
        })
    }
}
