//! Schemadoc Core - normative specification documents from JSON Schema
//!
//! This crate walks a JSON Schema tree and produces an ordered stream of
//! document-building operations (sections, labelled paragraphs, property
//! tables, enumerations, cross-references) that a renderer turns into markup.
//!
//! ## Components
//!
//! - **Text Normalizer**: rewrites informal normative keywords and spelling
//!   variants into a fixed dialect while protecting technical substrings
//! - **Reference Table**: static lookup from schema references to the single
//!   location where a shared definition is documented in full
//! - **Section Tracker**: globally unique section identifiers and nesting
//! - **Complex Types**: `oneOf` / `anyOf` / `allOf` classification
//! - **Generator**: the recursive traversal that drives all of the above
//!
//! ## Quick Start
//!
//! ```rust
//! use schemadoc_core::{generate, parse_schema, render::{EcmarkupRenderer, Excerpts, Renderer}};
//! use serde_json::json;
//!
//! let schema = parse_schema(&json!({
//!     "type": "object",
//!     "title": "Root",
//!     "properties": {
//!         "name": { "type": "string", "title": "Name" }
//!     },
//!     "required": ["name"]
//! })).unwrap();
//!
//! let document = generate(&schema).unwrap();
//! let html = EcmarkupRenderer::new().render(&document, &Excerpts::default());
//! assert!(html.contains("<h1>Name</h1>"));
//! ```
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

pub mod breadcrumb;
pub mod complex_type;
pub mod document;
pub mod error;
pub mod format;
pub mod generator;
pub mod loader;
pub mod normalizer;
pub mod reference;
pub mod render;
pub mod schema;
pub mod section;

// Re-export commonly used types for convenience
pub use breadcrumb::Breadcrumb;
pub use complex_type::ComplexType;
pub use document::{Diagnostic, DiagnosticKind, DocOp, Document, PropertyRow, Requirement};
pub use error::{Error, MergeConflict, Result};
pub use generator::{generate, Generator, GeneratorOptions};
pub use loader::{load_schema, parse_schema, LoaderError, LoaderResult};
pub use normalizer::translate;
pub use reference::{ReferenceEntry, ReferenceTable};
pub use schema::{SchemaNode, SchemaType};
pub use section::SectionTracker;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
