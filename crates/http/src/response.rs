//! Response building.
//!
//! A small fluent response type, independent of any particular server
//! runtime; the axum adapter converts it at the edge. Also carries the
//! `ApiResponse` envelope API handlers wrap their JSON payloads in.

use crate::errors::HttpResult;
use serde::Serialize;

/// An HTTP response: status code, headers, body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: u16,
    headers: Vec<(String, String)>,
    body: ResponseBody,
}

/// Response body variants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseBody {
    Empty,
    Text(String),
    Bytes(Vec<u8>),
}

impl Response {
    /// Create a response with the given status and an empty body
    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: ResponseBody::Empty,
        }
    }

    /// 200 OK with an empty body
    pub fn ok() -> Self {
        Self::with_status(200)
    }

    /// 204 No Content
    pub fn no_content() -> Self {
        Self::with_status(204)
    }

    /// 500 Internal Server Error
    pub fn internal_server_error() -> Self {
        Self::with_status(500)
    }

    /// The Not-Found pathway: a client-visible 404 page.
    pub fn not_found() -> Self {
        Self::with_status(404).html(
            "<!DOCTYPE html>\n<html>\n<head><title>Not Found</title></head>\n\
             <body><h1>Not Found</h1><h4>The page you requested does not exist.</h4></body>\n\
             </html>",
        )
    }

    /// Set the status code
    pub fn status_code(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Add a header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set a plain-text body
    pub fn text(mut self, body: impl Into<String>) -> Self {
        self.body = ResponseBody::Text(body.into());
        self.content_type_if_absent("text/plain; charset=utf-8")
    }

    /// Set an HTML body
    pub fn html(mut self, body: impl Into<String>) -> Self {
        self.body = ResponseBody::Text(body.into());
        self.content_type_if_absent("text/html; charset=utf-8")
    }

    /// Serialize a value as the JSON body
    pub fn json<T: Serialize>(mut self, value: &T) -> HttpResult<Self> {
        let serialized = serde_json::to_string(value)?;
        self.body = ResponseBody::Text(serialized);
        Ok(self.content_type_if_absent("application/json; charset=utf-8"))
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn body(&self) -> &ResponseBody {
        &self.body
    }

    /// The body as a string slice, when it has one
    pub fn body_text(&self) -> Option<&str> {
        match &self.body {
            ResponseBody::Text(text) => Some(text),
            _ => None,
        }
    }

    fn content_type_if_absent(mut self, value: &str) -> Self {
        let present = self
            .headers
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case("content-type"));
        if !present {
            self.headers
                .push(("content-type".to_string(), value.to_string()));
        }
        self
    }
}

/// JSON envelope for API handler responses: an HTTP-style code, an operation
/// message, and optional payload data.
#[derive(Debug, Clone, Serialize, serde::Deserialize)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create an envelope with no payload
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Attach payload data
    pub fn with_data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    /// Render the envelope as a JSON response carrying its own code as the
    /// HTTP status.
    pub fn into_response(self) -> HttpResult<Response> {
        let status = self.code;
        Response::with_status(status).json(&self)
    }
}
