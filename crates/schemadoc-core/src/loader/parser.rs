//! Schema file parsing for YAML and JSON formats
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

use crate::loader::error::{LoaderError, LoaderResult};
use crate::schema::SchemaNode;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Supported file formats for schema parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// YAML format (.yaml, .yml)
    Yaml,
    /// JSON format (.json)
    Json,
}

impl Format {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> LoaderResult<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            _ => Err(LoaderError::unsupported_format(path)),
        }
    }

    /// Get the primary file extension for this format
    pub fn primary_extension(&self) -> &'static str {
        match self {
            Format::Yaml => "yaml",
            Format::Json => "json",
        }
    }
}

/// Reads schema documents into JSON values
#[derive(Debug, Default)]
pub struct SchemaParser;

impl SchemaParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a schema file, detecting format from extension
    pub fn parse_file(&self, path: &Path) -> LoaderResult<Value> {
        let format = Format::from_path(path)?;
        let content =
            std::fs::read_to_string(path).map_err(|e| LoaderError::io_error(path, e))?;
        debug!(path = %path.display(), ?format, bytes = content.len(), "Read schema file");

        self.parse_content(&content, format, path)
    }

    /// Parse schema content with explicit format
    pub fn parse_content(&self, content: &str, format: Format, path: &Path) -> LoaderResult<Value> {
        match format {
            Format::Yaml => self.parse_yaml(content, path),
            Format::Json => self.parse_json(content, path),
        }
    }

    /// Parse YAML content
    pub fn parse_yaml(&self, content: &str, path: &Path) -> LoaderResult<Value> {
        let yaml_value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| LoaderError::yaml_parse_error(path, e))?;

        // Convert to JSON Value for consistent handling
        serde_json::to_value(yaml_value).map_err(|e| LoaderError::json_parse_error(path, e))
    }

    /// Parse JSON content
    pub fn parse_json(&self, content: &str, path: &Path) -> LoaderResult<Value> {
        serde_json::from_str(content).map_err(|e| LoaderError::json_parse_error(path, e))
    }

    /// Turn a parsed document into a schema tree
    pub fn to_schema(&self, value: &Value, path: &Path) -> LoaderResult<SchemaNode> {
        if !value.is_object() {
            return Err(LoaderError::invalid_root(
                path,
                "Schema must be a JSON object at the root level",
            ));
        }
        SchemaNode::from_value(value).map_err(|e| LoaderError::invalid_root(path, e.to_string()))
    }
}
