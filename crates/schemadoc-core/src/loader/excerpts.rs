//! Boilerplate fragments placed around the generated body
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

use crate::loader::error::{LoaderError, LoaderResult};
use std::path::Path;
use tracing::debug;

/// File name prefix of fragments placed before the body
pub const PRE_PREFIX: &str = "0x";
/// File name prefix of fragments placed after the body
pub const POST_PREFIX: &str = "1x";

/// Fragments emitted verbatim, in file-name order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Excerpts {
    pub pre: Vec<String>,
    pub post: Vec<String>,
}

impl Excerpts {
    /// Read every `0x*` and `1x*` file in `dir` with the given extension
    pub fn load(dir: &Path, extension: &str) -> LoaderResult<Self> {
        let entries = std::fs::read_dir(dir).map_err(|e| LoaderError::io_error(dir, e))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| LoaderError::io_error(dir, e))?;
            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|ext| ext.to_str()) != Some(extension) {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
                names.push(name.to_string());
            }
        }
        names.sort();

        let mut excerpts = Self::default();
        for name in names {
            let target = if name.starts_with(PRE_PREFIX) {
                &mut excerpts.pre
            } else if name.starts_with(POST_PREFIX) {
                &mut excerpts.post
            } else {
                continue;
            };
            let path = dir.join(&name);
            let content =
                std::fs::read_to_string(&path).map_err(|e| LoaderError::io_error(&path, e))?;
            debug!(file = %name, "Loaded excerpt");
            target.push(content);
        }
        Ok(excerpts)
    }

    pub fn is_empty(&self) -> bool {
        self.pre.is_empty() && self.post.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_orders_and_filters() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("0x02-scope.html"), "<p>scope</p>").unwrap();
        fs::write(dir.path().join("0x01-intro.html"), "<p>intro</p>").unwrap();
        fs::write(dir.path().join("1x01-annex.html"), "<p>annex</p>").unwrap();
        fs::write(dir.path().join("0x03-notes.md"), "notes").unwrap();
        fs::write(dir.path().join("readme.html"), "ignored").unwrap();

        let excerpts = Excerpts::load(dir.path(), "html").unwrap();
        assert_eq!(excerpts.pre, vec!["<p>intro</p>", "<p>scope</p>"]);
        assert_eq!(excerpts.post, vec!["<p>annex</p>"]);

        let markdown = Excerpts::load(dir.path(), "md").unwrap();
        assert_eq!(markdown.pre, vec!["notes"]);
        assert!(markdown.post.is_empty());
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempdir().unwrap();
        let err = Excerpts::load(&dir.path().join("absent"), "html").unwrap_err();
        assert!(matches!(err, LoaderError::IoError { .. }));
        assert!(Excerpts::default().is_empty());
    }
}
