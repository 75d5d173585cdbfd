//! Ecmarkup output (`emu-clause`, `emu-table`, `emu-note`, ...)
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

use super::{Excerpts, Renderer};
use crate::document::{DocOp, Document, EnumerationRow, PropertyRow};
use regex::Regex;
use std::sync::OnceLock;

static LINK_REGEX: OnceLock<Regex> = OnceLock::new();

fn link_regex() -> &'static Regex {
    LINK_REGEX.get_or_init(|| {
        Regex::new(r"\[([^\]]+)\]\(([^)\s]+)\)").expect("link pattern is valid")
    })
}

/// Renders the ecmarkup dialect consumed by the ecmarkup build tool
#[derive(Debug, Clone, Copy, Default)]
pub struct EcmarkupRenderer;

impl EcmarkupRenderer {
    pub fn new() -> Self {
        Self
    }

    fn op(&self, out: &mut String, op: &DocOp) {
        match op {
            DocOp::OpenSection {
                id,
                title,
                deprecated,
            } => {
                let legacy = if *deprecated { " legacy" } else { "" };
                out.push_str(&format!("<emu-clause id=\"{}\"{}>\n", escape(id), legacy));
                if let Some(title) = title {
                    out.push_str(&format!("<h1>{}</h1>\n", escape(title)));
                }
            }
            DocOp::CloseSection => out.push_str("</emu-clause>\n"),
            DocOp::Paragraph {
                label: Some(label),
                text,
            } => out.push_str(&format!(
                "<p><strong>{}:</strong> {}</p>\n",
                escape(label),
                inline(text)
            )),
            DocOp::Paragraph { label: None, text } => {
                out.push_str(&format!("<p>{}</p>\n", inline(text)))
            }
            DocOp::PropertiesTable {
                number,
                caption,
                rows,
            } => {
                open_table(out, *number, caption, &["Property", "Type", "Requirement", "Description"]);
                for PropertyRow {
                    name,
                    type_label,
                    requirement,
                    description,
                } in rows
                {
                    out.push_str(&format!(
                        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                        escape(name),
                        escape(type_label),
                        requirement,
                        inline(description)
                    ));
                }
                out.push_str("</table>\n</emu-table>\n");
            }
            DocOp::EnumerationTable {
                number,
                caption,
                rows,
            } => {
                open_table(out, *number, caption, &["Value", "Description"]);
                for EnumerationRow { value, description } in rows {
                    out.push_str(&format!(
                        "<tr><td>{}</td><td>{}</td></tr>\n",
                        escape(value),
                        inline(description)
                    ));
                }
                out.push_str("</table>\n</emu-table>\n");
            }
            DocOp::List { ordered, items } => {
                let tag = if *ordered { "ol" } else { "ul" };
                out.push_str(&format!("<{}>\n", tag));
                for item in items {
                    out.push_str(&format!("<li>{}</li>\n", inline(item)));
                }
                out.push_str(&format!("</{}>\n", tag));
            }
            DocOp::Examples { examples } => {
                for example in examples {
                    out.push_str(&format!(
                        "<emu-example>\n<pre><code>{}</code></pre>\n</emu-example>\n",
                        escape(example)
                    ));
                }
            }
            DocOp::Origin { text } => out.push_str(&format!(
                "<p><strong>Reference:</strong> {}</p>\n",
                inline(text)
            )),
            DocOp::Note { text } => {
                out.push_str(&format!("<emu-note><em>{}</em></emu-note>\n", inline(text)))
            }
        }
    }
}

fn open_table(out: &mut String, number: usize, caption: &str, headers: &[&str]) {
    out.push_str("<emu-table>\n");
    out.push_str(&format!(
        "<emu-caption id=\"caption-{}\">{}</emu-caption>\n",
        number,
        escape(caption)
    ));
    out.push_str("<table>\n");
    let cells: String = headers.iter().map(|h| format!("<th>{}</th>", h)).collect();
    out.push_str(&format!("<tr>{}</tr>\n", cells));
}

impl Renderer for EcmarkupRenderer {
    fn excerpt_extension(&self) -> &'static str {
        "html"
    }

    fn render(&self, document: &Document, excerpts: &Excerpts) -> String {
        let mut out = String::new();
        for excerpt in &excerpts.pre {
            out.push_str(excerpt);
        }
        for op in &document.ops {
            self.op(&mut out, op);
        }
        for excerpt in &excerpts.post {
            out.push_str(excerpt);
        }
        out
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Escape, then turn `[text](url)` links into anchors
fn inline(text: &str) -> String {
    link_regex()
        .replace_all(&escape(text), r#"<a href="$2">$1</a>"#)
        .into_owned()
}
