//! Insertion-ordered route table.

use super::pattern::RoutePattern;
use crate::handler::BoundMethod;
use std::collections::HashMap;

/// One registered route: compiled pattern, the handler/method names it was
/// registered under, and the method binding resolved at registration time.
pub struct RouteEntry {
    pub pattern: RoutePattern,
    pub handler: String,
    pub method: String,
    pub bound: BoundMethod,
}

impl std::fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteEntry")
            .field("pattern", &self.pattern.raw())
            .field("handler", &self.handler)
            .field("method", &self.method)
            .finish()
    }
}

/// Routes in insertion order, with overwrite-on-equal-pattern semantics.
///
/// The matcher scans entries in insertion order and the first full match
/// wins, so ordering here is load-bearing. Re-registering an identical
/// pattern string replaces the entry in place (the route keeps its original
/// position) and hands the displaced entry back to the caller, which is
/// expected to surface the overwrite warning.
#[derive(Debug, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    index: HashMap<String, usize>,
}

impl RouteTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert a route, returning the entry it displaced if the pattern was
    /// already registered.
    pub fn insert(&mut self, entry: RouteEntry) -> Option<RouteEntry> {
        match self.index.get(entry.pattern.raw()) {
            Some(&position) => Some(std::mem::replace(&mut self.entries[position], entry)),
            None => {
                self.index
                    .insert(entry.pattern.raw().to_string(), self.entries.len());
                self.entries.push(entry);
                None
            }
        }
    }

    /// Look up a route by its exact pattern string
    pub fn get(&self, pattern: &str) -> Option<&RouteEntry> {
        self.index.get(pattern).map(|&position| &self.entries[position])
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter()
    }

    /// Number of registered routes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
