//! Renderers: turn a [`Document`] into literal markup
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

mod ecmarkup;
mod markdown;

pub use crate::loader::excerpts::Excerpts;
pub use ecmarkup::EcmarkupRenderer;
pub use markdown::MarkdownRenderer;

use crate::document::Document;

/// A markup dialect
pub trait Renderer {
    /// Extension of the excerpt files this dialect includes
    fn excerpt_extension(&self) -> &'static str;

    /// Render `document` between the `pre` and `post` excerpts
    fn render(&self, document: &Document, excerpts: &Excerpts) -> String;
}
