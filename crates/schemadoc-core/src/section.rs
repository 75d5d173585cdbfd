//! Section identity tracking
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

use std::collections::HashSet;
use tracing::debug;

/// Allocates document-wide unique section identifiers and tracks the stack
/// of currently open sections
///
/// Identifiers are never reused once allocated. Sections close in strict
/// LIFO order.
#[derive(Debug, Default)]
pub struct SectionTracker {
    allocated: HashSet<String>,
    open: Vec<String>,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a unique identifier derived from `base_id`
    ///
    /// Trailing `-` characters are stripped; collisions are resolved by
    /// appending `-1`, `-2`, ... until the identifier is unused.
    pub fn allocate(&mut self, base_id: &str) -> String {
        let base = base_id.trim_end_matches('-');
        let mut id = base.to_string();
        let mut counter = 1usize;
        while self.allocated.contains(&id) {
            id = format!("{}-{}", base, counter);
            counter += 1;
        }
        if id != base {
            debug!(base, id = %id, "Section identifier collision resolved");
        }
        self.allocated.insert(id.clone());
        id
    }

    /// Allocate an identifier and push it as the innermost open section
    pub fn open(&mut self, base_id: &str) -> String {
        let id = self.allocate(base_id);
        self.open.push(id.clone());
        id
    }

    /// Close the innermost open section
    pub fn close(&mut self) -> Option<String> {
        self.open.pop()
    }

    /// Current nesting depth
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Identifier of the innermost open section
    pub fn current(&self) -> Option<&str> {
        self.open.last().map(String::as_str)
    }

    pub fn is_allocated(&self, id: &str) -> bool {
        self.allocated.contains(id)
    }

    /// Close every still-open section, innermost first
    pub fn unwind(&mut self) -> Vec<String> {
        let mut closed = Vec::with_capacity(self.open.len());
        while let Some(id) = self.open.pop() {
            closed.push(id);
        }
        closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_unique() {
        let mut tracker = SectionTracker::new();
        assert_eq!(tracker.allocate("sec-a-b"), "sec-a-b");
        assert_eq!(tracker.allocate("sec-a-b"), "sec-a-b-1");
        assert_eq!(tracker.allocate("sec-a-b"), "sec-a-b-2");
        assert!(tracker.is_allocated("sec-a-b-1"));
    }

    #[test]
    fn test_trailing_dash_stripped() {
        let mut tracker = SectionTracker::new();
        assert_eq!(tracker.allocate("sec-"), "sec");
        assert_eq!(tracker.allocate("sec--"), "sec-1");
    }

    #[test]
    fn test_open_close_lifo() {
        let mut tracker = SectionTracker::new();
        tracker.open("sec-a");
        tracker.open("sec-a-b");
        assert_eq!(tracker.depth(), 2);
        assert_eq!(tracker.current(), Some("sec-a-b"));
        assert_eq!(tracker.close().as_deref(), Some("sec-a-b"));
        assert_eq!(tracker.close().as_deref(), Some("sec-a"));
        assert_eq!(tracker.close(), None);
    }

    #[test]
    fn test_unwind() {
        let mut tracker = SectionTracker::new();
        tracker.open("sec-a");
        tracker.open("sec-b");
        tracker.open("sec-c");
        assert_eq!(tracker.unwind(), vec!["sec-c", "sec-b", "sec-a"]);
        assert_eq!(tracker.depth(), 0);
    }
}
