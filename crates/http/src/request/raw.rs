//! The ambient request as handed over by the hosting environment.

use super::RequestMethod;

/// Raw, unparsed request input: method, request target, body bytes, and any
/// form fields the host already decoded (the equivalent of PHP's `$_POST`).
///
/// The target is optional because some hosting environments cannot supply
/// one; normalization treats absence as the root path.
#[derive(Debug, Clone)]
pub struct RawRequest {
    pub method: RequestMethod,
    pub target: Option<String>,
    pub body: Vec<u8>,
    pub form_fields: Vec<(String, String)>,
}

impl RawRequest {
    /// Create a new raw request for the given method
    pub fn new(method: RequestMethod) -> Self {
        Self {
            method,
            target: None,
            body: Vec::new(),
            form_fields: Vec::new(),
        }
    }

    /// Shorthand for a GET request to a target
    pub fn get(target: impl Into<String>) -> Self {
        Self::new(RequestMethod::GET).with_target(target)
    }

    /// Shorthand for a POST request to a target
    pub fn post(target: impl Into<String>) -> Self {
        Self::new(RequestMethod::POST).with_target(target)
    }

    /// Set the request target
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Set the request body bytes
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Add a decoded form field
    pub fn with_form_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.form_fields.push((key.into(), value.into()));
        self
    }
}
