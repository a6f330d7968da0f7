// sinoscrub/src/ui/diff_viewer.rs
//! Diff viewer for sinoscrub.
//!
//! Renders a line diff of the original against the scrubbed text,
//! highlighting exactly what was removed (red) and what was added (green).

use std::io::Write;

use anyhow::Result;
use diffy::{Line as DiffLine, create_patch};
use owo_colors::OwoColorize;

pub fn print_diff(
    original: &str,
    scrubbed: &str,
    writer: &mut dyn Write,
    use_color: bool,
) -> Result<()> {
    let patch = create_patch(original, scrubbed);

    if use_color {
        writeln!(writer, "{}", "--- Scrub Diff ---".yellow().bold())?;
    } else {
        writeln!(writer, "--- Scrub Diff ---")?;
    }

    let mut printed = 0usize;
    for hunk in patch.hunks() {
        for line in hunk.lines() {
            match line {
                DiffLine::Delete(s) => print_marked(writer, '-', s, use_color)?,
                DiffLine::Insert(s) => print_marked(writer, '+', s, use_color)?,
                DiffLine::Context(s) => {
                    writeln!(writer, "  {}", s.trim_end_matches('\n'))?;
                }
            }
            printed += 1;
        }
    }

    if printed == 0 {
        writeln!(writer, "No changes detected.")?;
    }
    Ok(())
}

fn print_marked(writer: &mut dyn Write, marker: char, line: &str, use_color: bool) -> Result<()> {
    let line = line.trim_end_matches('\n');
    if use_color {
        match marker {
            '-' => writeln!(writer, "{} {}", "-".red(), line.red())?,
            _ => writeln!(writer, "{} {}", "+".green(), line.green())?,
        }
    } else {
        writeln!(writer, "{} {}", marker, line)?;
    }
    Ok(())
}
