//! Reading schemas and excerpt files
//!
//! ```rust
//! use schemadoc_core::loader::parse_schema;
//! use serde_json::json;
//!
//! let schema = parse_schema(&json!({ "type": "object", "title": "BOM" }))?;
//! assert_eq!(schema.title.as_deref(), Some("BOM"));
//! # Ok::<(), schemadoc_core::LoaderError>(())
//! ```
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

pub mod error;
pub mod excerpts;
pub mod parser;

pub use error::{LoaderError, LoaderResult};
pub use excerpts::Excerpts;
pub use parser::{Format, SchemaParser};

use crate::schema::SchemaNode;
use serde_json::Value;
use std::path::Path;

/// Load a `.json`, `.yaml` or `.yml` schema file
pub fn load_schema(path: impl AsRef<Path>) -> LoaderResult<SchemaNode> {
    let path = path.as_ref();
    let parser = SchemaParser::new();
    let value = parser.parse_file(path)?;
    parser.to_schema(&value, path)
}

/// Convert an in-memory JSON document into a schema tree
pub fn parse_schema(value: &Value) -> LoaderResult<SchemaNode> {
    SchemaParser::new().to_schema(value, Path::new("<memory>"))
}
