//! Normalize command handler

use crate::cli::NormalizeArgs;
use crate::error::Result;
use crate::output::OutputWriter;
use std::io::{self, Read};
use tracing::debug;

/// Handle the normalize command
pub fn handle_normalize(args: NormalizeArgs, output: &mut OutputWriter) -> Result<()> {
    let text = match args.text {
        Some(text) => text,
        None => {
            debug!("Reading text from stdin");
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    output.write(&schemadoc_core::translate(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

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

    #[test]
    fn test_normalize_argument() {
        let document = Buffer::default();
        let mut output =
            OutputWriter::with_writers(false, true, Box::new(document.clone()), Box::new(io::sink()));
        handle_normalize(
            NormalizeArgs {
                text: Some("The licence MUST NOT be modified.".to_string()),
            },
            &mut output,
        )
        .unwrap();

        let written = String::from_utf8(document.0.lock().unwrap().clone()).unwrap();
        assert_eq!(written, "The licence shall not be modified.\n");
    }
}
