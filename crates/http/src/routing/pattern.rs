//! Route pattern segmentation.
//!
//! Patterns are `/`-delimited templates. A segment fully wrapped in `{` and
//! `}` is a named capture; everything else is a literal matched by exact,
//! case-sensitive string equality. There is no regex, no optional segment,
//! no catch-all, and no trailing-slash tolerance beyond request
//! normalization.

use crate::request::ROOT_SEGMENT;

/// One segment of a parsed route pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSegment {
    /// Literal text, matched by exact equality
    Literal(String),
    /// Named capture; matches any segment value and binds it under the name
    Capture(String),
}

/// A route pattern split into its anchored segment sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<PatternSegment>,
}

impl RoutePattern {
    /// Parse a pattern string.
    ///
    /// The first split segment is forced to the literal root segment: route
    /// patterns are always anchored at root, mirroring the request path's
    /// own normalization. The root pattern `"/"` is special-cased to the
    /// single-element sequence so it does not inherit the artifact of
    /// splitting an empty string.
    pub fn parse(pattern: &str) -> Self {
        let segments = if pattern == ROOT_SEGMENT {
            vec![PatternSegment::Literal(ROOT_SEGMENT.to_string())]
        } else {
            pattern
                .split('/')
                .enumerate()
                .map(|(i, part)| {
                    if i == 0 {
                        PatternSegment::Literal(ROOT_SEGMENT.to_string())
                    } else {
                        parse_segment(part)
                    }
                })
                .collect()
        };

        Self {
            raw: pattern.to_string(),
            segments,
        }
    }

    /// The original pattern string
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The anchored segment sequence
    pub fn segments(&self) -> &[PatternSegment] {
        &self.segments
    }

    /// Number of segments, including the root anchor
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Names of this pattern's captures, in order
    pub fn capture_names(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                PatternSegment::Capture(name) => Some(name.as_str()),
                PatternSegment::Literal(_) => None,
            })
            .collect()
    }
}

fn parse_segment(part: &str) -> PatternSegment {
    if part.len() >= 2 && part.starts_with('{') && part.ends_with('}') {
        PatternSegment::Capture(part[1..part.len() - 1].to_string())
    } else {
        PatternSegment::Literal(part.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_pattern_is_single_segment() {
        let pattern = RoutePattern::parse("/");
        assert_eq!(
            pattern.segments(),
            [PatternSegment::Literal("/".to_string())]
        );
    }

    #[test]
    fn test_first_segment_forced_to_root() {
        let pattern = RoutePattern::parse("/favicon.ico");
        assert_eq!(pattern.segment_count(), 2);
        assert_eq!(
            pattern.segments()[0],
            PatternSegment::Literal("/".to_string())
        );
        assert_eq!(
            pattern.segments()[1],
            PatternSegment::Literal("favicon.ico".to_string())
        );
    }

    #[test]
    fn test_captures_parsed_between_braces() {
        let pattern = RoutePattern::parse("/apis/{version}/sample");
        assert_eq!(pattern.segment_count(), 4);
        assert_eq!(
            pattern.segments()[2],
            PatternSegment::Capture("version".to_string())
        );
        assert_eq!(pattern.capture_names(), vec!["version"]);
    }

    #[test]
    fn test_partial_braces_are_literal() {
        let pattern = RoutePattern::parse("/a/{x/y}");
        assert_eq!(
            pattern.segments()[2],
            PatternSegment::Literal("{x".to_string())
        );
        assert_eq!(
            pattern.segments()[3],
            PatternSegment::Literal("y}".to_string())
        );
    }
}
