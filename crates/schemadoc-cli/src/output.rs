//! Output writing utilities
//!
//! Generated documents go to the document writer (stdout by default);
//! status messages go to the message writer (stderr by default) so that
//! piping a document never mixes in progress text.

use crate::error::Result;
use colored::Colorize;
use schemadoc_core::Diagnostic;
use std::io::{self, Write};
use tracing::debug;

/// Output writer that separates documents from status messages
pub struct OutputWriter {
    use_color: bool,
    quiet: bool,
    document: Box<dyn Write>,
    messages: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer on stdout and stderr
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self::with_writers(use_color, quiet, Box::new(io::stdout()), Box::new(io::stderr()))
    }

    /// Create an output writer with custom writers
    pub fn with_writers(
        use_color: bool,
        quiet: bool,
        document: Box<dyn Write>,
        messages: Box<dyn Write>,
    ) -> Self {
        Self {
            use_color,
            quiet,
            document,
            messages,
        }
    }

    /// Write document content
    pub fn write(&mut self, content: &str) -> Result<()> {
        self.document.write_all(content.as_bytes())?;
        if !content.is_empty() && !content.ends_with('\n') {
            self.document.write_all(b"\n")?;
        }
        self.document.flush()?;
        Ok(())
    }

    fn message(&mut self, line: &str) -> Result<()> {
        writeln!(self.messages, "{}", line)?;
        self.messages.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        debug!("Output info: {}", message);

        if self.quiet {
            return Ok(());
        }

        if self.use_color {
            self.message(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.message(&format!("INFO: {}", message))
        }
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if self.use_color {
            self.message(&message.green().to_string())
        } else {
            self.message(message)
        }
    }

    /// Write a warning message; shown even when quiet
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if self.use_color {
            self.message(&format!("{} {}", "⚠".yellow(), message.yellow()))
        } else {
            self.message(&format!("WARNING: {}", message))
        }
    }

    /// Report every substituted default
    pub fn diagnostics(&mut self, diagnostics: &[Diagnostic]) -> Result<()> {
        for diagnostic in diagnostics {
            self.warning(&diagnostic.to_string())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// A cloneable in-memory writer
    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Buffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn writer(quiet: bool) -> (OutputWriter, Buffer, Buffer) {
        let document = Buffer::default();
        let messages = Buffer::default();
        let output = OutputWriter::with_writers(
            false,
            quiet,
            Box::new(document.clone()),
            Box::new(messages.clone()),
        );
        (output, document, messages)
    }

    #[test]
    fn test_documents_and_messages_are_separate() {
        let (mut output, document, messages) = writer(false);
        output.info("Loading schema").unwrap();
        output.write("<emu-clause id=\"sec\">").unwrap();

        assert_eq!(document.contents(), "<emu-clause id=\"sec\">\n");
        assert_eq!(messages.contents(), "INFO: Loading schema\n");
    }

    #[test]
    fn test_quiet_keeps_warnings() {
        let (mut output, _, messages) = writer(true);
        output.info("hidden").unwrap();
        output.success("hidden").unwrap();
        output.warning("No title exists for /x, using 'x'").unwrap();

        assert_eq!(
            messages.contents(),
            "WARNING: No title exists for /x, using 'x'\n"
        );
    }
}
