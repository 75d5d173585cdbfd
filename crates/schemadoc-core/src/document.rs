//! Document model: the ordered stream of building operations
//!
//! The generator never writes markup. It appends [`DocOp`]s through a
//! [`DocumentBuilder`], which owns section identity, caption numbering and
//! text normalization, and hands a finished [`Document`] to a renderer.
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

use crate::breadcrumb::Breadcrumb;
use crate::normalizer::translate;
use crate::schema::SchemaType;
use crate::section::SectionTracker;
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

/// Whether a property must be present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Requirement {
    Required,
    Optional,
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Requirement::Required => f.write_str("Required"),
            Requirement::Optional => f.write_str("Optional"),
        }
    }
}

/// One row of a properties table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyRow {
    pub name: String,
    pub type_label: String,
    pub requirement: Requirement,
    pub description: String,
}

/// One row of an enumeration table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumerationRow {
    pub value: String,
    pub description: String,
}

/// A single document-building operation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DocOp {
    OpenSection {
        id: String,
        title: Option<String>,
        deprecated: bool,
    },
    CloseSection,
    /// A paragraph, optionally introduced by a bold label
    Paragraph { label: Option<String>, text: String },
    PropertiesTable {
        number: usize,
        caption: String,
        rows: Vec<PropertyRow>,
    },
    EnumerationTable {
        number: usize,
        caption: String,
        rows: Vec<EnumerationRow>,
    },
    List { ordered: bool, items: Vec<String> },
    /// Example blocks, emitted verbatim
    Examples { examples: Vec<String> },
    /// Cross-reference to where a node is documented in full
    Origin { text: String },
    Note { text: String },
}

/// Something the generator substituted a default for
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub breadcrumb: Breadcrumb,
    pub kind: DiagnosticKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    MissingTitle { substituted: String },
    MissingDefinition { reference: String },
    MissingOptionTitle { substituted: String },
    MissingOptionType { assumed: SchemaType },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::MissingTitle { substituted } => write!(
                f,
                "No title exists for {}, using '{}'",
                self.breadcrumb, substituted
            ),
            DiagnosticKind::MissingDefinition { reference } => write!(
                f,
                "Definition '{}' referenced at {} does not exist",
                reference, self.breadcrumb
            ),
            DiagnosticKind::MissingOptionTitle { substituted } => write!(
                f,
                "Missing option title in {}, using '{}'",
                self.breadcrumb, substituted
            ),
            DiagnosticKind::MissingOptionType { assumed } => write!(
                f,
                "Missing option type in {}, assuming {}",
                self.breadcrumb, assumed
            ),
        }
    }
}

/// The generator's output
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    pub ops: Vec<DocOp>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Document {
    /// `(id, title)` of every section in document order
    pub fn sections(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.ops.iter().filter_map(|op| match op {
            DocOp::OpenSection { id, title, .. } => Some((id.as_str(), title.as_deref())),
            _ => None,
        })
    }

    /// Text of every paragraph carrying `label`
    pub fn paragraphs<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.ops.iter().filter_map(move |op| match op {
            DocOp::Paragraph {
                label: Some(l),
                text,
            } if l == label => Some(text.as_str()),
            _ => None,
        })
    }

    /// Every properties table as `(caption, rows)`
    pub fn properties_tables(&self) -> impl Iterator<Item = (&str, &[PropertyRow])> {
        self.ops.iter().filter_map(|op| match op {
            DocOp::PropertiesTable { caption, rows, .. } => Some((caption.as_str(), rows.as_slice())),
            _ => None,
        })
    }

    /// True when every section is closed exactly once and never below zero
    pub fn is_balanced(&self) -> bool {
        let mut depth = 0usize;
        for op in &self.ops {
            match op {
                DocOp::OpenSection { .. } => depth += 1,
                DocOp::CloseSection => match depth.checked_sub(1) {
                    Some(d) => depth = d,
                    None => return false,
                },
                _ => {}
            }
        }
        depth == 0
    }
}

/// Appends operations, normalizing free text on the way in
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    ops: Vec<DocOp>,
    diagnostics: Vec<Diagnostic>,
    sections: SectionTracker,
    tables: usize,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a section identified by `breadcrumb` and return its unique id
    pub fn open_section(&mut self, breadcrumb: &Breadcrumb, title: Option<&str>, deprecated: bool) -> String {
        let id = self.sections.open(&breadcrumb.section_id());
        debug!(id = %id, depth = self.sections.depth(), "Opened section");
        self.ops.push(DocOp::OpenSection {
            id: id.clone(),
            title: title.map(str::to_string),
            deprecated,
        });
        id
    }

    pub fn close_section(&mut self) {
        if self.sections.close().is_some() {
            self.ops.push(DocOp::CloseSection);
        }
    }

    pub fn depth(&self) -> usize {
        self.sections.depth()
    }

    /// Labelled paragraph whose text is a literal value
    pub fn paragraph(&mut self, label: &str, text: impl Into<String>) {
        self.ops.push(DocOp::Paragraph {
            label: Some(label.to_string()),
            text: text.into(),
        });
    }

    /// Free-text paragraph, normalized
    pub fn prose(&mut self, label: Option<&str>, text: &str) {
        if text.is_empty() {
            return;
        }
        self.ops.push(DocOp::Paragraph {
            label: label.map(str::to_string),
            text: translate(text),
        });
    }

    pub fn properties_table(&mut self, caption: String, mut rows: Vec<PropertyRow>) {
        for row in &mut rows {
            row.description = translate(&row.description);
        }
        self.tables += 1;
        self.ops.push(DocOp::PropertiesTable {
            number: self.tables,
            caption,
            rows,
        });
    }

    pub fn enumeration_table(&mut self, mut rows: Vec<EnumerationRow>) {
        for row in &mut rows {
            row.description = translate(&row.description);
        }
        self.tables += 1;
        self.ops.push(DocOp::EnumerationTable {
            number: self.tables,
            caption: "Enumeration of possible values".to_string(),
            rows,
        });
    }

    /// Unordered list of literal values
    pub fn values(&mut self, items: Vec<String>) {
        self.ops.push(DocOp::List {
            ordered: false,
            items,
        });
    }

    /// Numbered list of free-text items
    pub fn numbered(&mut self, items: &[String]) {
        self.ops.push(DocOp::List {
            ordered: true,
            items: items.iter().map(|item| translate(item)).collect(),
        });
    }

    pub fn examples(&mut self, examples: Vec<String>) {
        if !examples.is_empty() {
            self.ops.push(DocOp::Examples { examples });
        }
    }

    pub fn origin(&mut self, text: &str) {
        self.ops.push(DocOp::Origin {
            text: translate(text),
        });
    }

    pub fn note(&mut self, text: &str) {
        self.ops.push(DocOp::Note {
            text: translate(text),
        });
    }

    pub fn diagnostic(&mut self, breadcrumb: Breadcrumb, kind: DiagnosticKind) {
        let diagnostic = Diagnostic { breadcrumb, kind };
        warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }

    /// Close anything still open and hand over the document
    pub fn finish(mut self) -> Document {
        for id in self.sections.unwind() {
            debug!(id = %id, "Closing section left open");
            self.ops.push(DocOp::CloseSection);
        }
        Document {
            ops: self.ops,
            diagnostics: self.diagnostics,
        }
    }
}
