//! Generate command handler

use crate::cli::{DocFormat, GenerateArgs};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use schemadoc_core::render::Excerpts;
use schemadoc_core::{load_schema, Document, Generator, ReferenceTable};
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Handle the generate command
///
/// Nothing is written unless generation succeeds as a whole.
#[instrument(skip(config, output), fields(file = %args.schema.display()))]
pub fn handle_generate(args: GenerateArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("generate_command", &args.schema.display().to_string());

    if !args.schema.exists() {
        return Err(Error::FileNotFound {
            path: args.schema.clone(),
        });
    }

    let schema = {
        let _load_timer = Timer::new("schema_loading");
        output.info(&format!("Loading schema: {}", args.schema.display()))?;
        load_schema(&args.schema)?
    };

    let mut options = config.generator.clone();
    if args.list_untyped_options {
        options.list_untyped_options = true;
    }
    let references = if args.no_references {
        ReferenceTable::empty()
    } else {
        ReferenceTable::cyclonedx()
    };

    let document = {
        let _generation_timer = Timer::new("generation");
        Generator::new(&schema)
            .with_options(options)
            .with_references(references)
            .run()?
    };
    info!(
        sections = document.sections().count(),
        diagnostics = document.diagnostics.len(),
        "Generation completed"
    );

    output.diagnostics(&document.diagnostics)?;
    if args.deny_warnings && !document.diagnostics.is_empty() {
        return Err(Error::Diagnostics {
            count: document.diagnostics.len(),
        });
    }

    let format = args.format.unwrap_or(config.output.format);
    let excerpts_dir = args.excerpts.or_else(|| config.output.excerpts_dir.clone());
    let rendered = render(&document, format, excerpts_dir.as_deref())?;

    match args.output.or_else(|| config.output.path.clone()) {
        Some(path) => {
            fs::write(&path, rendered)?;
            output.success(&format!(
                "✓ Wrote {} sections to {}",
                document.sections().count(),
                path.display()
            ))?;
        }
        None => output.write(&rendered)?,
    }

    Ok(())
}

/// Render `document` in `format`, wrapped in the excerpts found in `excerpts_dir`
pub fn render(document: &Document, format: DocFormat, excerpts_dir: Option<&Path>) -> Result<String> {
    let Some(renderer) = format.renderer() else {
        return Ok(serde_json::to_string_pretty(document)?);
    };

    let excerpts = match excerpts_dir {
        Some(dir) => {
            let excerpts = Excerpts::load(dir, renderer.excerpt_extension())?;
            debug!(
                pre = excerpts.pre.len(),
                post = excerpts.post.len(),
                "Loaded excerpts"
            );
            excerpts
        }
        None => Excerpts::default(),
    };
    Ok(renderer.render(document, &excerpts))
}
