//! Markdown output
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

use super::{Excerpts, Renderer};
use crate::document::{DocOp, Document};

/// Renders GitHub-flavored markdown; heading depth follows section nesting
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Heading for a section opened at `depth` (1-based)
    fn heading(title: &str, depth: usize, deprecated: bool) -> String {
        let mut result = format!("{} {}", "#".repeat(depth.min(6)), title);
        if deprecated {
            result.push_str(" **[Deprecated]**");
        }
        result.push_str("\n\n");
        result
    }

    fn table(number: usize, caption: &str, headers: &[&str], rows: Vec<Vec<String>>) -> String {
        let mut result = format!("*Table {}: {}*\n\n", number, caption);
        result.push_str(&format!("| {} |\n", headers.join(" | ")));
        result.push_str(&format!("|{}\n", "---|".repeat(headers.len())));
        for row in rows {
            let cells: Vec<_> = row.iter().map(|cell| cell_text(cell)).collect();
            result.push_str(&format!("| {} |\n", cells.join(" | ")));
        }
        result.push('\n');
        result
    }
}

impl Renderer for MarkdownRenderer {
    fn excerpt_extension(&self) -> &'static str {
        "md"
    }

    fn render(&self, document: &Document, excerpts: &Excerpts) -> String {
        let mut doc = String::new();
        for excerpt in &excerpts.pre {
            doc.push_str(excerpt);
            doc.push_str("\n\n");
        }

        let mut depth = 0usize;
        for op in &document.ops {
            match op {
                DocOp::OpenSection {
                    id,
                    title,
                    deprecated,
                } => {
                    depth += 1;
                    doc.push_str(&format!("<a id=\"{}\"></a>\n\n", id));
                    if let Some(title) = title {
                        doc.push_str(&Self::heading(title, depth, *deprecated));
                    }
                }
                DocOp::CloseSection => depth = depth.saturating_sub(1),
                DocOp::Paragraph {
                    label: Some(label),
                    text,
                } => doc.push_str(&format!("**{}:** {}\n\n", label, text)),
                DocOp::Paragraph { label: None, text } => doc.push_str(&format!("{}\n\n", text)),
                DocOp::PropertiesTable {
                    number,
                    caption,
                    rows,
                } => {
                    let rows = rows
                        .iter()
                        .map(|row| {
                            vec![
                                format!("`{}`", row.name),
                                row.type_label.clone(),
                                row.requirement.to_string(),
                                row.description.clone(),
                            ]
                        })
                        .collect();
                    doc.push_str(&Self::table(
                        *number,
                        caption,
                        &["Property", "Type", "Requirement", "Description"],
                        rows,
                    ));
                }
                DocOp::EnumerationTable {
                    number,
                    caption,
                    rows,
                } => {
                    let rows = rows
                        .iter()
                        .map(|row| vec![format!("`{}`", row.value), row.description.clone()])
                        .collect();
                    doc.push_str(&Self::table(*number, caption, &["Value", "Description"], rows));
                }
                DocOp::List { ordered, items } => {
                    for (i, item) in items.iter().enumerate() {
                        if *ordered {
                            doc.push_str(&format!("{}. {}\n", i + 1, item));
                        } else {
                            doc.push_str(&format!("- {}\n", item));
                        }
                    }
                    doc.push('\n');
                }
                DocOp::Examples { examples } => {
                    for example in examples {
                        doc.push_str(&format!("```\n{}\n```\n\n", example));
                    }
                }
                DocOp::Origin { text } => doc.push_str(&format!("**Reference:** {}\n\n", text)),
                DocOp::Note { text } => doc.push_str(&format!("> *{}*\n\n", text)),
            }
        }

        for excerpt in &excerpts.post {
            doc.push_str(excerpt);
            doc.push_str("\n\n");
        }
        doc
    }
}

/// Table cells cannot hold pipes or line breaks
fn cell_text(cell: &str) -> String {
    cell.replace('|', "\\|").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{EnumerationRow, PropertyRow, Requirement};

    fn render(ops: Vec<DocOp>) -> String {
        let document = Document {
            ops,
            diagnostics: vec![],
        };
        MarkdownRenderer::new().render(&document, &Excerpts::default())
    }

    #[test]
    fn test_heading_depth_follows_nesting() {
        let md = render(vec![
            DocOp::OpenSection {
                id: "sec".to_string(),
                title: Some("Root".to_string()),
                deprecated: false,
            },
            DocOp::OpenSection {
                id: "sec-name".to_string(),
                title: Some("Name".to_string()),
                deprecated: true,
            },
            DocOp::CloseSection,
            DocOp::OpenSection {
                id: "sec-size".to_string(),
                title: Some("Size".to_string()),
                deprecated: false,
            },
            DocOp::CloseSection,
            DocOp::CloseSection,
        ]);
        assert!(md.contains("# Root\n"));
        assert!(md.contains("## Name **[Deprecated]**\n"));
        assert!(md.contains("## Size\n"));
        assert!(md.contains("<a id=\"sec-name\"></a>"));
    }

    #[test]
    fn test_tables() {
        let md = render(vec![
            DocOp::PropertiesTable {
                number: 1,
                caption: "Properties for the root object".to_string(),
                rows: vec![PropertyRow {
                    name: "name".to_string(),
                    type_label: "String".to_string(),
                    requirement: Requirement::Optional,
                    description: "a | b".to_string(),
                }],
            },
            DocOp::EnumerationTable {
                number: 2,
                caption: "Enumeration of possible values".to_string(),
                rows: vec![EnumerationRow {
                    value: "sha-256".to_string(),
                    description: "SHA-256".to_string(),
                }],
            },
        ]);
        assert!(md.contains("*Table 1: Properties for the root object*"));
        assert!(md.contains("| Property | Type | Requirement | Description |\n|---|---|---|---|\n"));
        assert!(md.contains("| `name` | String | Optional | a \\| b |"));
        assert!(md.contains("| `sha-256` | SHA-256 |"));
    }

    #[test]
    fn test_lists_notes_and_examples() {
        let md = render(vec![
            DocOp::Note {
                text: "Shall be one of:".to_string(),
            },
            DocOp::List {
                ordered: true,
                items: vec!["License".to_string(), "Expression".to_string()],
            },
            DocOp::Examples {
                examples: vec!["1.0.0".to_string()],
            },
        ]);
        assert_eq!(
            md,
            "> *Shall be one of:*\n\n1. License\n2. Expression\n\n```\n1.0.0\n```\n\n"
        );
    }
}
