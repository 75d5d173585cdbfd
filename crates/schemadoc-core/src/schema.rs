//! Typed model of the JSON Schema subset used for document generation
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

use crate::complex_type::ComplexType;
use crate::document::Requirement;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Primitive type declared by a schema node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    Object,
    Array,
    String,
    Number,
    Integer,
    Boolean,
    Null,
}

impl SchemaType {
    /// The keyword as written in a schema
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaType::Object => "object",
            SchemaType::Array => "array",
            SchemaType::String => "string",
            SchemaType::Number => "number",
            SchemaType::Integer => "integer",
            SchemaType::Boolean => "boolean",
            SchemaType::Null => "null",
        }
    }

    /// Objects and arrays hold nested structure; everything else is a scalar
    pub fn is_container(&self) -> bool {
        matches!(self, SchemaType::Object | SchemaType::Array)
    }

    /// Display label used in type paragraphs and table cells
    pub fn display_type(&self) -> String {
        sentence_case(self.as_str())
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single node of the schema tree
///
/// Unknown keywords are ignored. `properties` keeps document order, which is
/// the order rows appear in properties tables.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaNode {
    #[serde(rename = "type")]
    pub schema_type: Option<SchemaType>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub examples: Option<Vec<Value>>,
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<Value>>,
    /// Extension: description for each enumerated value
    #[serde(rename = "meta:enum")]
    pub enum_descriptions: Option<IndexMap<String, String>>,
    pub format: Option<String>,
    pub pattern: Option<String>,
    pub minimum: Option<Value>,
    pub maximum: Option<Value>,
    pub default: Option<Value>,
    #[serde(rename = "const")]
    pub const_value: Option<Value>,
    pub unique_items: Option<bool>,
    pub deprecated: Option<bool>,
    pub required: Option<Vec<String>>,
    pub properties: Option<IndexMap<String, SchemaNode>>,
    pub items: Option<Box<SchemaNode>>,
    pub one_of: Option<Vec<SchemaNode>>,
    pub any_of: Option<Vec<SchemaNode>>,
    pub all_of: Option<Vec<SchemaNode>>,
    #[serde(rename = "$ref")]
    pub reference: Option<String>,
    /// Extension: display override for `type`
    #[serde(rename = "meta:typeLabel")]
    pub type_label: Option<String>,
    /// Extension: this occurrence must not be documented in full
    #[serde(rename = "meta:imposter", default)]
    pub imposter: bool,
    #[serde(default)]
    pub definitions: IndexMap<String, SchemaNode>,
}

impl SchemaNode {
    /// Convert an in-memory JSON value into a schema tree
    pub fn from_value(value: &Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(value)
    }

    /// A typed node that is neither a container nor a combinator
    pub fn is_plain_scalar(&self) -> bool {
        matches!(self.schema_type, Some(t) if !t.is_container())
            && self.properties.is_none()
            && !self.has_combinator()
    }

    /// A node whose declared type is a scalar
    pub fn is_scalar(&self) -> bool {
        matches!(self.schema_type, Some(t) if !t.is_container())
    }

    pub fn is_array(&self) -> bool {
        self.schema_type == Some(SchemaType::Array)
    }

    pub fn has_combinator(&self) -> bool {
        ComplexType::classify(self).is_some()
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated.unwrap_or(false)
    }

    /// Requirement of a direct property of this node
    pub fn requirement_of(&self, property: &str) -> Requirement {
        match &self.required {
            Some(required) if required.iter().any(|name| name == property) => Requirement::Required,
            _ => Requirement::Optional,
        }
    }

    /// Look up `#/definitions/<name>` by the last segment of the reference
    pub fn definition(&self, reference: &str) -> Option<&SchemaNode> {
        let name = reference.rsplit('/').next()?;
        self.definitions.get(name)
    }
}

/// Upper-case the first character, leaving the rest untouched
pub fn sentence_case(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
