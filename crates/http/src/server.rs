//! Server adapter: bridges the hosting runtime to the synchronous dispatch
//! core.
//!
//! A single axum fallback route translates every incoming hyper request into
//! a [`RawRequest`] and feeds it to [`App::handle`]. The core itself never
//! suspends; concurrency, if any, is the runtime's affair.

use crate::app::App;
use crate::errors::HttpError;
use crate::request::{RawRequest, RequestMethod};
use crate::response::{Response, ResponseBody};
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use std::sync::Arc;

/// Serve the application until ctrl-c.
pub async fn serve(app: App) -> Result<(), HttpError> {
    let addr = app.config().bind_addr();
    let shared = Arc::new(app);

    let service = axum::Router::new()
        .fallback(handle_request)
        .with_state(shared);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| HttpError::startup(format!("Failed to bind {}: {}", addr, e)))?;
    tracing::info!(%addr, "Server listening");

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| HttpError::startup(format!("Server error: {}", e)))
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("Failed to install ctrl-c handler");
    } else {
        tracing::info!("Shutdown signal received");
    }
}

async fn handle_request(State(app): State<Arc<App>>, request: Request) -> axum::response::Response {
    let raw = match into_raw_request(request).await {
        Ok(raw) => raw,
        Err(status) => return status_response(status),
    };

    match app.handle(&raw) {
        Ok(response) => into_axum_response(response),
        Err(error) => {
            // The process-level error pathway: dispatch failures are logged,
            // never silently swallowed, and surface as a 500.
            tracing::error!(%error, "Dispatch failed");
            status_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Translate a hyper request into the ambient-request form the core reads.
async fn into_raw_request(request: Request) -> Result<RawRequest, StatusCode> {
    let (parts, body) = request.into_parts();

    let method = parts
        .method
        .as_str()
        .parse::<RequestMethod>()
        .map_err(|_| StatusCode::METHOD_NOT_ALLOWED)?;

    let target = parts
        .uri
        .path_and_query()
        .map(|path_and_query| path_and_query.as_str().to_string());

    let body = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|_| StatusCode::PAYLOAD_TOO_LARGE)?;

    // Form fields are decoded here only for form-encoded bodies. JSON
    // bodies are the extractor's concern.
    let mut raw = RawRequest::new(method).with_body(body.to_vec());
    if let Some(target) = target {
        raw = raw.with_target(target);
    }
    if is_form_encoded(&parts.headers) {
        if let Ok(fields) = serde_urlencoded::from_bytes::<Vec<(String, String)>>(&body) {
            for (key, value) in fields {
                raw = raw.with_form_field(key, value);
            }
        }
    }
    Ok(raw)
}

const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

fn is_form_encoded(headers: &axum::http::HeaderMap) -> bool {
    headers
        .get(axum::http::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("application/x-www-form-urlencoded"))
        .unwrap_or(false)
}

fn into_axum_response(response: Response) -> axum::response::Response {
    let status =
        StatusCode::from_u16(response.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut builder = axum::http::Response::builder().status(status);
    for (name, value) in response.headers() {
        builder = builder.header(name.as_str(), value.as_str());
    }

    let body = match response.body() {
        ResponseBody::Empty => Body::empty(),
        ResponseBody::Text(text) => Body::from(text.clone()),
        ResponseBody::Bytes(bytes) => Body::from(bytes.clone()),
    };

    match builder.body(body) {
        Ok(built) => built,
        Err(error) => {
            tracing::error!(%error, "Failed to build response");
            status_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

fn status_response(status: StatusCode) -> axum::response::Response {
    let mut response = axum::response::Response::new(Body::empty());
    *response.status_mut() = status;
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_encoded_detection() {
        let mut headers = axum::http::HeaderMap::new();
        assert!(!is_form_encoded(&headers));

        headers.insert(
            axum::http::header::CONTENT_TYPE,
            "application/x-www-form-urlencoded; charset=utf-8".parse().unwrap(),
        );
        assert!(is_form_encoded(&headers));

        headers.insert(
            axum::http::header::CONTENT_TYPE,
            "application/json".parse().unwrap(),
        );
        assert!(!is_form_encoded(&headers));
    }

    #[test]
    fn test_into_axum_response_preserves_status_and_body() {
        let response = into_axum_response(Response::with_status(404).html("gone"));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_into_raw_request_extracts_form_fields() {
        let request = Request::builder()
            .method("POST")
            .uri("/submit")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from("k=formval&x=1"))
            .unwrap();

        let raw = into_raw_request(request).await.unwrap();
        assert_eq!(raw.method, RequestMethod::POST);
        assert_eq!(raw.target.as_deref(), Some("/submit"));
        assert!(raw
            .form_fields
            .iter()
            .any(|(k, v)| k == "k" && v == "formval"));
    }
}
