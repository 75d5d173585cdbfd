//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API.

use clap::{Parser, Subcommand, ValueEnum};
use schemadoc_core::render::{EcmarkupRenderer, MarkdownRenderer, Renderer};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Schemadoc - normative specification documents from JSON Schema
///
/// Walks a JSON Schema and writes one section per property with constraint
/// paragraphs, property tables and cross-references to shared definitions.
#[derive(Parser, Debug)]
#[command(
    name = "schemadoc",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "SCHEMADOC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a specification document from a schema
    Generate(GenerateArgs),

    /// Rewrite free text into the specification dialect
    Normalize(NormalizeArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the generate command
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Path to the schema file (JSON or YAML)
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,

    /// Output file path (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Document format
    #[arg(short, long, value_enum)]
    pub format: Option<DocFormat>,

    /// Directory holding 0x* and 1x* excerpt files
    #[arg(long, value_name = "DIR")]
    pub excerpts: Option<PathBuf>,

    /// List combinator options without `type` or `required` in the option summary
    #[arg(long)]
    pub list_untyped_options: bool,

    /// Document every shared definition in place instead of cross-referencing
    #[arg(long)]
    pub no_references: bool,

    /// Fail when any default had to be substituted
    #[arg(long)]
    pub deny_warnings: bool,
}

/// Arguments for the normalize command
#[derive(Parser, Debug)]
pub struct NormalizeArgs {
    /// Text to normalize (stdin if not specified)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Document formats
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocFormat {
    /// Ecmarkup HTML
    #[default]
    Ecmarkup,
    /// GitHub-flavored markdown
    Markdown,
    /// The raw operation stream as JSON
    Json,
}

impl DocFormat {
    /// Renderer for markup formats; `None` for the raw stream
    pub fn renderer(self) -> Option<Box<dyn Renderer>> {
        match self {
            DocFormat::Ecmarkup => Some(Box::new(EcmarkupRenderer::new())),
            DocFormat::Markdown => Some(Box::new(MarkdownRenderer::new())),
            DocFormat::Json => None,
        }
    }
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stderr().is_terminal()
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_level() {
        let cli = Cli {
            verbose: 2,
            quiet: false,
            config: None,
            no_color: false,
            command: Commands::Normalize(NormalizeArgs { text: None }),
        };
        assert_eq!(cli.verbosity_level(), 2);

        let quiet_cli = Cli { quiet: true, ..cli };
        assert_eq!(quiet_cli.verbosity_level(), 0);
    }

    #[test]
    fn test_generate_arguments() {
        let cli = Cli::parse_from([
            "schemadoc",
            "generate",
            "bom.schema.json",
            "-f",
            "markdown",
            "-o",
            "out.md",
            "--list-untyped-options",
        ]);
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.schema, PathBuf::from("bom.schema.json"));
                assert_eq!(args.format, Some(DocFormat::Markdown));
                assert_eq!(args.output, Some(PathBuf::from("out.md")));
                assert!(args.list_untyped_options);
                assert!(!args.deny_warnings);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_renderer_per_format() {
        assert_eq!(
            DocFormat::Ecmarkup.renderer().map(|r| r.excerpt_extension()),
            Some("html")
        );
        assert_eq!(
            DocFormat::Markdown.renderer().map(|r| r.excerpt_extension()),
            Some("md")
        );
        assert!(DocFormat::Json.renderer().is_none());
    }
}
