//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.

mod completions;
mod generate;
mod normalize;

pub use completions::handle_completions;
pub use generate::handle_generate;
pub use normalize::handle_normalize;
