//! Route matching: compares a request's path segments against every
//! registered pattern, in insertion order, and the first full match wins.
//!
//! There is deliberately no specificity ranking between literal and capture
//! segments: a capture route registered before an equally long literal route
//! shadows it. Insertion order is the sole tie-break.

use super::pattern::PatternSegment;
use super::table::{RouteEntry, RouteTable};
use std::collections::HashMap;

/// A successful match: the winning route entry plus the parameters its
/// captures bound. Derived transiently during matching; never persisted.
#[derive(Debug)]
pub struct RouteMatch<'a> {
    entry: &'a RouteEntry,
    params: HashMap<String, String>,
}

impl<'a> RouteMatch<'a> {
    pub fn entry(&self) -> &'a RouteEntry {
        self.entry
    }

    pub fn handler(&self) -> &str {
        &self.entry.handler
    }

    pub fn method(&self) -> &str {
        &self.entry.method
    }

    /// Parameters bound by the pattern's captures
    pub fn params(&self) -> &HashMap<String, String> {
        &self.params
    }

    pub fn into_params(self) -> HashMap<String, String> {
        self.params
    }
}

/// Scan the table for the first route whose pattern fully matches the given
/// path segments. `None` is the NoMatch terminal state, not an error.
pub fn resolve<'a>(table: &'a RouteTable, segments: &[String]) -> Option<RouteMatch<'a>> {
    for entry in table.iter() {
        // Cheap short-circuit: no partial-length or wildcard-tail matches.
        if entry.pattern.segment_count() != segments.len() {
            continue;
        }

        if let Some(params) = match_segments(entry, segments) {
            return Some(RouteMatch { entry, params });
        }
    }
    None
}

fn match_segments(entry: &RouteEntry, segments: &[String]) -> Option<HashMap<String, String>> {
    let mut params = HashMap::new();
    for (pattern_segment, request_segment) in entry.pattern.segments().iter().zip(segments) {
        match pattern_segment {
            PatternSegment::Literal(literal) => {
                if literal != request_segment {
                    return None;
                }
            }
            PatternSegment::Capture(name) => {
                // Captures always match, regardless of value.
                params.insert(name.clone(), request_segment.clone());
            }
        }
    }
    Some(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::HttpResult;
    use crate::handler::BoundMethod;
    use crate::request::RequestContext;
    use crate::response::Response;
    use crate::routing::pattern::RoutePattern;
    use std::sync::Arc;

    fn table_with(routes: &[(&str, &str)]) -> RouteTable {
        let mut table = RouteTable::new();
        for (pattern, handler) in routes {
            let bound: BoundMethod =
                Arc::new(|_: &RequestContext| -> HttpResult<Response> { Ok(Response::ok()) });
            table.insert(RouteEntry {
                pattern: RoutePattern::parse(pattern),
                handler: handler.to_string(),
                method: "main".to_string(),
                bound,
            });
        }
        table
    }

    fn segments(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_root_route_matches_root_request() {
        let table = table_with(&[("/", "Home")]);
        let matched = resolve(&table, &segments(&["/"])).unwrap();
        assert_eq!(matched.handler(), "Home");
        assert!(matched.params().is_empty());
    }

    #[test]
    fn test_literal_route() {
        let table = table_with(&[("/", "Home"), ("/favicon.ico", "Favicon")]);
        let matched = resolve(&table, &segments(&["/", "favicon.ico"])).unwrap();
        assert_eq!(matched.handler(), "Favicon");
        assert!(matched.params().is_empty());
    }

    #[test]
    fn test_capture_binds_request_segment() {
        let table = table_with(&[("/apis/{version}/sample", "SampleApi")]);
        let matched = resolve(&table, &segments(&["/", "apis", "v1", "sample"])).unwrap();
        assert_eq!(matched.handler(), "SampleApi");
        assert_eq!(matched.params().len(), 1);
        assert_eq!(matched.params()["version"], "v1");
    }

    #[test]
    fn test_segment_count_mismatch_is_no_match() {
        let table = table_with(&[("/apis/{version}/sample", "SampleApi")]);
        assert!(resolve(&table, &segments(&["/", "apis", "v2", "sample", "extra"])).is_none());
        assert!(resolve(&table, &segments(&["/", "apis", "v2"])).is_none());
    }

    #[test]
    fn test_literal_mismatch_is_case_sensitive() {
        let table = table_with(&[("/users/list", "Users")]);
        assert!(resolve(&table, &segments(&["/", "users", "List"])).is_none());
        assert!(resolve(&table, &segments(&["/", "users", "list"])).is_some());
    }

    #[test]
    fn test_first_match_wins_in_insertion_order() {
        // Both routes match "/a/literal"; the one registered first is
        // selected even though the other matches too.
        let table = table_with(&[("/a/literal", "Literal"), ("/a/{x}", "Capture")]);
        let matched = resolve(&table, &segments(&["/", "a", "literal"])).unwrap();
        assert_eq!(matched.handler(), "Literal");
    }

    #[test]
    fn test_capture_route_shadows_later_literal_route() {
        // No specificity ranking: a capture route registered first always
        // shadows a more specific literal route of equal length.
        let table = table_with(&[("/a/{x}", "Capture"), ("/a/literal", "Literal")]);
        let matched = resolve(&table, &segments(&["/", "a", "literal"])).unwrap();
        assert_eq!(matched.handler(), "Capture");
        assert_eq!(matched.params()["x"], "literal");
    }

    #[test]
    fn test_bound_params_contain_exactly_the_capture_names() {
        let table = table_with(&[("/u/{id}/posts/{slug}", "Posts")]);
        let matched = resolve(&table, &segments(&["/", "u", "9", "posts", "hi"])).unwrap();
        let mut names: Vec<&str> = matched.params().keys().map(String::as_str).collect();
        names.sort_unstable();
        assert_eq!(names, ["id", "slug"]);
        assert_eq!(matched.params()["id"], "9");
        assert_eq!(matched.params()["slug"], "hi");
    }

    #[test]
    fn test_empty_table_never_matches() {
        let table = RouteTable::new();
        assert!(resolve(&table, &segments(&["/"])).is_none());
    }
}
