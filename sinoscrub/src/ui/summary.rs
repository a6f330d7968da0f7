// sinoscrub/src/ui/summary.rs
//! Change summary rendering: what was replaced, where, and why.

use std::io::Write;

use anyhow::Result;
use comfy_table::{Cell, ContentArrangement, Table, presets::UTF8_FULL};
use owo_colors::OwoColorize;

use sinoscrub_core::Change;

/// Prints the per-change table followed by the recorded reasons.
///
/// Spans are char offsets into the original text.
pub fn print_changes(changes: &[Change], writer: &mut dyn Write, use_color: bool) -> Result<()> {
    if changes.is_empty() {
        writeln!(writer, "No changes.")?;
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Keyword", "Replacement", "Category", "Span"]);

    for (i, change) in changes.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&change.keyword),
            Cell::new(&change.replacement),
            Cell::new(change.category.as_deref().unwrap_or("-")),
            Cell::new(format!("{}..{}", change.start, change.end)),
        ]);
    }
    writeln!(writer, "{table}")?;

    for (i, change) in changes.iter().enumerate() {
        let Some(reason) = &change.reason else { continue };
        if use_color {
            writeln!(
                writer,
                "  {}. '{}' -> '{}': {}",
                i + 1,
                change.keyword.red(),
                change.replacement.green(),
                reason
            )?;
        } else {
            writeln!(
                writer,
                "  {}. '{}' -> '{}': {}",
                i + 1,
                change.keyword,
                change.replacement,
                reason
            )?;
        }
    }
    Ok(())
}
