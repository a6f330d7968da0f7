// sinoscrub/src/cli.rs
//! This file defines the command-line interface (CLI) for the sinoscrub
//! application and its arguments.

use clap::{Parser, ValueEnum};
use sinoscrub_core::Category;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "sinoscrub",
    version = env!("CARGO_PKG_VERSION"),
    about = "Scrub mistranslated and culturally sensitive terms from text",
    long_about = "Sinoscrub rewrites text against keyword dictionaries in a single pass. It replaces harsh machine-translation artifacts, culturally taboo phrasing and politically charged wording with neutral alternatives, and can explain every replacement it makes.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// The text to scrub, or a path to a file containing it.
    #[arg(value_name = "TEXT_OR_FILE", help = "Text to scrub, or a path to a file to read it from.")]
    pub text_or_file: String,

    /// Path to a custom dictionary (JSON), loaded after the built-in ones.
    #[arg(long = "custom-dict", short = 'd', value_name = "FILE", help = "Path to a custom dictionary file (JSON), loaded last.")]
    pub custom_dict: Option<PathBuf>,

    /// Restrict which built-in categories are loaded (repeatable).
    #[arg(long, short = 'c', value_enum, value_name = "CATEGORY", help = "Load only these built-in categories (repeatable; default: all).")]
    pub category: Vec<CategoryArg>,

    /// Show a colored diff of the original against the scrubbed text.
    #[arg(long, help = "Show a diff of the original against the scrubbed text.")]
    pub diff: bool,

    /// Show a per-change breakdown with reasons and categories.
    #[arg(long, help = "Show a per-change breakdown with reasons and categories.")]
    pub debug: bool,

    /// Write the scrubbed text to this file as well.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write the scrubbed text to a file.")]
    pub output: Option<PathBuf>,

    /// Print the result as machine-readable JSON.
    #[arg(long, conflicts_with_all = ["diff", "debug"], help = "Print the scrubbed text and change list as JSON.")]
    pub json: bool,

    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for this run)
    #[arg(long, short = 'v', help = "Enable debug logging.")]
    pub verbose: bool,
}

/// CLI-facing names for the built-in dictionary categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    /// Harsh machine-translation artifacts.
    Translation,
    /// Culturally taboo phrasing.
    Cultural,
    /// Politically charged wording.
    Political,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Translation => Category::Translation,
            CategoryArg::Cultural => Category::Cultural,
            CategoryArg::Political => Category::Political,
        }
    }
}
