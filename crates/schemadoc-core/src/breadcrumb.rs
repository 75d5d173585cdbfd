//! Breadcrumbs: the canonical identity of a position in the output tree
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

use serde::Serialize;
use std::fmt;

/// A `/`-delimited path such as `/components/[]/licenses`
///
/// Array item positions use the literal segment `[]` regardless of the
/// property name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Breadcrumb(String);

impl Breadcrumb {
    /// Segment used for array item positions
    pub const ARRAY_ITEM: &'static str = "[]";

    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// Build a breadcrumb, collapsing repeated separators
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let mut collapsed = String::with_capacity(path.len());
        for ch in path.chars() {
            if ch == '/' && collapsed.ends_with('/') {
                continue;
            }
            collapsed.push(ch);
        }
        Self(collapsed)
    }

    /// Append one segment
    pub fn child(&self, segment: &str) -> Self {
        Self::new(format!("{}/{}", self.0, segment))
    }

    /// The breadcrumb of this array's items
    pub fn array_item(&self) -> Self {
        self.child(Self::ARRAY_ITEM)
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    pub fn is_array_item(&self) -> bool {
        self.0.ends_with(Self::ARRAY_ITEM)
    }

    pub fn ends_with(&self, suffix: &str) -> bool {
        self.0.ends_with(suffix)
    }

    /// True when this breadcrumb equals `prefix` or lies below it
    pub fn is_under(&self, prefix: &str) -> bool {
        match self.0.strip_prefix(prefix) {
            Some(rest) => rest.is_empty() || rest.starts_with('/') || prefix.ends_with('/'),
            None => false,
        }
    }

    /// Base section identifier: `sec` followed by the lower-cased path with
    /// every non-alphanumeric run replaced by `-`
    pub fn section_id(&self) -> String {
        let mut id = String::from("sec");
        if !self.0.starts_with(|c: char| !c.is_ascii_alphanumeric()) {
            id.push('-');
        }
        let mut in_run = false;
        for ch in self.0.chars() {
            if ch.is_ascii_alphanumeric() {
                id.push(ch.to_ascii_lowercase());
                in_run = false;
            } else if !in_run {
                id.push('-');
                in_run = true;
            }
        }
        id
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Breadcrumb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Breadcrumb {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
