//! Parameter extraction: turns a raw request into the parsed, immutable form
//! the matcher and handlers work with.
//!
//! Extraction never fails. A body that is not valid JSON, or that decodes to
//! something other than an object, simply contributes nothing to the POST
//! parameters; a missing target parses as the root path.

use super::RawRequest;
use crate::uri;
use serde_json::Value;
use std::collections::HashMap;

/// The literal root segment that anchors every path-segment sequence.
///
/// Both request paths and route patterns start with this segment, so the
/// empty path and single-segment paths are matched by the same pairwise walk.
pub const ROOT_SEGMENT: &str = "/";

/// A fully parsed request. Constructed once at the start of dispatch and
/// immutable for the rest of the request's lifetime.
#[derive(Debug, Clone)]
pub struct ParsedRequest {
    path_segments: Vec<String>,
    get_params: HashMap<String, String>,
    post_params: HashMap<String, Value>,
}

impl ParsedRequest {
    /// Parse a raw request.
    pub fn from_raw(raw: &RawRequest) -> Self {
        let normalized = uri::normalize(raw.target.as_deref());

        let mut post_params: HashMap<String, Value> = HashMap::new();
        // Host-decoded form fields first, JSON body second: on a key
        // collision the JSON-sourced value wins.
        for (key, value) in &raw.form_fields {
            post_params.insert(key.clone(), Value::String(value.clone()));
        }
        if let Ok(Value::Object(map)) = serde_json::from_slice::<Value>(&raw.body) {
            for (key, value) in map {
                post_params.insert(key, value);
            }
        }

        let get_params = match normalized.split_once('?') {
            Some((_, query)) => parse_query(query),
            None => HashMap::new(),
        };

        Self {
            path_segments: split_segments(&normalized),
            get_params,
            post_params,
        }
    }

    /// Path segments, always anchored at [`ROOT_SEGMENT`].
    pub fn path_segments(&self) -> &[String] {
        &self.path_segments
    }

    /// Query-string parameters
    pub fn get_params(&self) -> &HashMap<String, String> {
        &self.get_params
    }

    /// Merged body parameters (form fields and JSON object fields)
    pub fn post_params(&self) -> &HashMap<String, Value> {
        &self.post_params
    }

    /// Get a query parameter by name
    pub fn get_param(&self, name: &str) -> Option<&str> {
        self.get_params.get(name).map(String::as_str)
    }

    /// Get a body parameter by name
    pub fn post_param(&self, name: &str) -> Option<&Value> {
        self.post_params.get(name)
    }

    /// Get a body parameter as a string slice, if it is a JSON string
    pub fn post_param_str(&self, name: &str) -> Option<&str> {
        self.post_params.get(name).and_then(Value::as_str)
    }

    /// Check that every named query parameter is present
    pub fn has_get_params(&self, names: &[&str]) -> bool {
        names.iter().all(|name| self.get_params.contains_key(*name))
    }

    /// Check that every named body parameter is present
    pub fn has_post_params(&self, names: &[&str]) -> bool {
        names.iter().all(|name| self.post_params.contains_key(*name))
    }
}

/// Split a normalized URI into its anchored path-segment sequence.
///
/// Each split component is stripped of any `?...` tail. An empty first
/// component means the original path was exactly the root, represented by the
/// root segment alone.
fn split_segments(normalized: &str) -> Vec<String> {
    let components: Vec<&str> = normalized
        .split('/')
        .map(|part| part.split('?').next().unwrap_or(""))
        .collect();

    if components[0].is_empty() {
        return vec![ROOT_SEGMENT.to_string()];
    }

    let mut segments = Vec::with_capacity(components.len() + 1);
    segments.push(ROOT_SEGMENT.to_string());
    segments.extend(components.into_iter().map(str::to_string));
    segments
}

fn parse_query(query: &str) -> HashMap<String, String> {
    match serde_urlencoded::from_str::<Vec<(String, String)>>(query) {
        Ok(pairs) => pairs.into_iter().collect(),
        Err(_) => HashMap::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::RequestMethod;
    use serde_json::json;

    #[test]
    fn test_root_path_yields_single_root_segment() {
        let parsed = ParsedRequest::from_raw(&RawRequest::get("/"));
        assert_eq!(parsed.path_segments(), ["/"]);
    }

    #[test]
    fn test_absent_target_equals_root() {
        let absent = ParsedRequest::from_raw(&RawRequest::new(RequestMethod::GET));
        let root = ParsedRequest::from_raw(&RawRequest::get("/"));
        assert_eq!(absent.path_segments(), root.path_segments());
    }

    #[test]
    fn test_segments_are_root_anchored() {
        let parsed = ParsedRequest::from_raw(&RawRequest::get("/apis/v1/sample"));
        assert_eq!(parsed.path_segments(), ["/", "apis", "v1", "sample"]);
    }

    #[test]
    fn test_query_stripped_from_segments() {
        let parsed = ParsedRequest::from_raw(&RawRequest::get("/search?q=abc&page=2"));
        assert_eq!(parsed.path_segments(), ["/", "search"]);
        assert_eq!(parsed.get_param("q"), Some("abc"));
        assert_eq!(parsed.get_param("page"), Some("2"));
    }

    #[test]
    fn test_root_with_query() {
        let parsed = ParsedRequest::from_raw(&RawRequest::get("/?q=abc"));
        assert_eq!(parsed.path_segments(), ["/"]);
        assert_eq!(parsed.get_param("q"), Some("abc"));
    }

    #[test]
    fn test_json_body_parsed_into_post_params() {
        let raw = RawRequest::post("/submit").with_body(r#"{"k":"v","n":3}"#);
        let parsed = ParsedRequest::from_raw(&raw);
        assert_eq!(parsed.post_param_str("k"), Some("v"));
        assert_eq!(parsed.post_param("n"), Some(&json!(3)));
    }

    #[test]
    fn test_invalid_json_body_fails_soft() {
        let raw = RawRequest::post("/submit").with_body("not json at all");
        let parsed = ParsedRequest::from_raw(&raw);
        assert!(parsed.post_params().is_empty());
    }

    #[test]
    fn test_non_object_json_body_fails_soft() {
        let raw = RawRequest::post("/submit").with_body(r#"["a","b"]"#);
        let parsed = ParsedRequest::from_raw(&raw);
        assert!(parsed.post_params().is_empty());
    }

    #[test]
    fn test_json_wins_over_form_field_on_collision() {
        let raw = RawRequest::post("/submit")
            .with_form_field("k", "formval")
            .with_form_field("only_form", "kept")
            .with_body(r#"{"k":"jsonval"}"#);
        let parsed = ParsedRequest::from_raw(&raw);
        assert_eq!(parsed.post_param_str("k"), Some("jsonval"));
        assert_eq!(parsed.post_param_str("only_form"), Some("kept"));
    }

    #[test]
    fn test_has_param_helpers() {
        let raw = RawRequest::post("/submit?a=1&b=2").with_body(r#"{"c":true}"#);
        let parsed = ParsedRequest::from_raw(&raw);
        assert!(parsed.has_get_params(&["a", "b"]));
        assert!(!parsed.has_get_params(&["a", "missing"]));
        assert!(parsed.has_post_params(&["c"]));
    }
}
