// sinoscrub/src/commands/scrub.rs
//! Scrub command implementation: input resolution, engine assembly and
//! output dispatch.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info, warn};

use sinoscrub_core::{Category, Change, Dictionary, ScrubError, Scrubber};

use crate::cli::Cli;
use crate::ui::{diff_viewer, summary};

/// The main operation runner for the sinoscrub CLI.
pub fn run(args: Cli) -> Result<()> {
    info!("Starting scrub operation.");

    let text = resolve_input(&args.text_or_file)?;
    let scrubber = build_scrubber(&args)?;
    debug!("Engine ready with {} keywords.", scrubber.dictionary().len());

    // Tracking is only paid for when some consumer of the change list asked
    // for it; the scrubbed text is identical either way.
    let track_changes = args.diff || args.debug || args.json;

    let (scrubbed, changes) = if track_changes {
        let (scrubbed, changes) = scrubber.scrub_with_changes(&text);
        (scrubbed, Some(changes))
    } else {
        (scrubber.scrub(&text), None)
    };

    debug!(
        "Scrubbed input. Original length: {}, scrubbed length: {}, changes: {}.",
        text.len(),
        scrubbed.len(),
        changes.as_ref().map_or(0, Vec::len)
    );

    handle_primary_output(&args, &text, &scrubbed, changes.as_deref())?;

    if let Some(path) = &args.output {
        fs::write(path, &scrubbed)
            .with_context(|| format!("Failed to write output file: {}", path.display()))?;
        info!("Saved scrubbed output to {}", path.display());
    }

    info!("Scrub operation completed.");
    Ok(())
}

/// Treats the argument as a file path when one exists on disk, and as
/// literal text otherwise.
fn resolve_input(text_or_file: &str) -> Result<String> {
    let path = Path::new(text_or_file);
    if path.is_file() {
        debug!("Reading input from file: {}", path.display());
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display()))
    } else {
        Ok(text_or_file.to_string())
    }
}

/// Assembles the dictionary (built-in categories in order, custom source
/// last) and builds the engine. A missing custom dictionary is downgraded to
/// a warning; any other load failure is fatal.
fn build_scrubber(args: &Cli) -> Result<Scrubber> {
    let categories: Vec<Category> = if args.category.is_empty() {
        Category::ALL.to_vec()
    } else {
        args.category.iter().map(|&c| c.into()).collect()
    };

    let mut dictionary = Dictionary::with_builtin_categories(&categories)
        .context("Failed to load built-in dictionaries")?;

    if let Some(path) = &args.custom_dict {
        match dictionary.load_file(path) {
            Ok(()) => {}
            Err(ScrubError::SourceNotFound { source_id, .. }) => {
                warn!("Custom dictionary not found: {}; continuing without it.", source_id);
            }
            Err(e) => {
                return Err(e).context("Failed to load custom dictionary");
            }
        }
    }

    Scrubber::new(dictionary).context("Failed to build the scrubbing engine")
}

fn handle_primary_output(
    args: &Cli,
    original: &str,
    scrubbed: &str,
    changes: Option<&[Change]>,
) -> Result<()> {
    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();

    if args.json {
        let payload = serde_json::json!({ "scrubbed": scrubbed, "changes": changes });
        writeln!(writer, "{}", serde_json::to_string_pretty(&payload)?)?;
        return Ok(());
    }

    if args.diff || args.debug {
        diff_viewer::print_diff(original, scrubbed, &mut writer, supports_color)?;
        if args.debug {
            if let Some(changes) = changes {
                let mut stderr = io::stderr();
                let stderr_supports_color = stderr.is_terminal();
                summary::print_changes(changes, &mut stderr, stderr_supports_color)?;
            }
        }
    } else {
        writeln!(writer, "{}", scrubbed)?;
    }

    Ok(())
}
