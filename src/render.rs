//! Aligned, word-wrapped rendering of the rule listing.
//!
//! Layout contract: a bold header line, a blank line, then one entry per
//! rule. Each entry reserves a fixed left column for the name (cyan,
//! left-justified) followed by a single space, and greedily packs
//! description words into the remaining terminal columns. Continuation
//! lines are indented with blank padding of the same width, no color.

use crate::config::RenderConfig;
use crate::makefile::RuleEntry;
use owo_colors::OwoColorize;

/// Render the full listing for `terminal_width` columns.
///
/// The returned string has no trailing newline; the caller decides how to
/// terminate output.
pub fn render_listing(
    entries: &[RuleEntry],
    terminal_width: usize,
    config: &RenderConfig,
) -> String {
    let header = if config.color {
        format!("{}", config.header.bold())
    } else {
        config.header.clone()
    };

    let mut lines = vec![header, String::new()];
    for entry in entries {
        lines.push(render_entry(entry, terminal_width, config));
    }
    lines.join("\n")
}

/// Render one entry, wrapping the description to the available width.
///
/// Before a word is added, the line breaks if the word (plus its separator
/// space) would push the description past `terminal_width` minus the left
/// column. A single word wider than the available span is placed whole and
/// overflows; words are never broken mid-word.
fn render_entry(entry: &RuleEntry, terminal_width: usize, config: &RenderConfig) -> String {
    let left = config.left_column_width;
    let padded = format!("{:<width$}", entry.name, width = left);
    let mut out = if config.color {
        format!("{} ", padded.cyan())
    } else {
        format!("{} ", padded)
    };

    let available = terminal_width.saturating_sub(left).max(1);
    let mut used = 0usize;
    for word in entry.description.split_whitespace() {
        if used == 0 {
            out.push_str(word);
            used = word.len();
        } else if used + word.len() + 1 > available {
            out.push('\n');
            out.push_str(&" ".repeat(left + 1));
            out.push_str(word);
            used = word.len();
        } else {
            out.push(' ');
            out.push_str(word);
            used += word.len() + 1;
        }
    }
    out
}
