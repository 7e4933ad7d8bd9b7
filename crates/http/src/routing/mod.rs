//! Routing: pattern segmentation, the insertion-ordered route table, the
//! first-match-wins matcher, and the router that ties them together.

pub mod matcher;
mod pattern;
mod router;
mod table;

pub use matcher::RouteMatch;
pub use pattern::{PatternSegment, RoutePattern};
pub use router::Router;
pub use table::{RouteEntry, RouteTable};
