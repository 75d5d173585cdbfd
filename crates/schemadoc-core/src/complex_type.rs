//! Combinator classification (`oneOf`, `anyOf`, `allOf`)
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

use crate::schema::SchemaNode;
use serde::Serialize;

/// One of the three fixed combinator kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ComplexType {
    AnyOf,
    OneOf,
    AllOf,
}

impl ComplexType {
    /// Dispatch priority when a node declares more than one combinator
    pub const PRIORITY: [ComplexType; 3] = [ComplexType::OneOf, ComplexType::AnyOf, ComplexType::AllOf];

    /// Schema keyword
    pub fn property(&self) -> &'static str {
        match self {
            ComplexType::AnyOf => "anyOf",
            ComplexType::OneOf => "oneOf",
            ComplexType::AllOf => "allOf",
        }
    }

    /// Prose label
    pub fn label(&self) -> &'static str {
        match self {
            ComplexType::AnyOf => "any of",
            ComplexType::OneOf => "one of",
            ComplexType::AllOf => "all of",
        }
    }

    /// First combinator the node declares, in dispatch priority
    pub fn classify(node: &SchemaNode) -> Option<Self> {
        Self::PRIORITY
            .into_iter()
            .find(|kind| kind.options(node).is_some())
    }

    /// The option list for this combinator on `node`
    pub fn options<'a>(&self, node: &'a SchemaNode) -> Option<&'a [SchemaNode]> {
        match self {
            ComplexType::AnyOf => node.any_of.as_deref(),
            ComplexType::OneOf => node.one_of.as_deref(),
            ComplexType::AllOf => node.all_of.as_deref(),
        }
    }
}
