//! Rule extraction from Makefile-style rule files.
//!
//! A documentation comment is a line starting with `## `. Consecutive doc
//! lines form one description; the target declaration that follows them
//! (`name: prerequisites`) claims the description. Targets with no preceding
//! doc block are collected separately so `mkhelp check` can report them.

use serde::Serialize;

/// Documentation comment marker: two hashes plus a mandatory space.
/// A line like `##x` is not a doc comment and is ignored.
const DOC_MARKER: &str = "## ";

/// One documented rule: target name and its assembled description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleEntry {
    pub name: String,
    pub description: String,
}

/// Result of one scan pass. Both lists are sorted case-insensitively;
/// duplicate names keep scan order (stable sort).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    pub documented: Vec<RuleEntry>,
    pub undocumented: Vec<String>,
}

/// Scanner state. `Collecting` owns the description assembled so far.
enum ScanState {
    Idle,
    Collecting(String),
}

/// Scan rule-file text in a single pass.
///
/// Doc lines accumulate into a buffer; a target line emits the pair and
/// resets to idle. Any other line leaves the accumulator untouched, so a
/// blank or unrelated line between a doc block and its target does not
/// discard the description.
pub fn scan(text: &str) -> ScanOutcome {
    let mut documented: Vec<RuleEntry> = Vec::new();
    let mut undocumented: Vec<String> = Vec::new();
    let mut state = ScanState::Idle;

    for line in text.lines() {
        if let Some(rest) = line.strip_prefix(DOC_MARKER) {
            match &mut state {
                ScanState::Idle => state = ScanState::Collecting(rest.to_string()),
                ScanState::Collecting(buffer) => {
                    if !buffer.is_empty() && !rest.is_empty() {
                        buffer.push(' ');
                    }
                    buffer.push_str(rest);
                }
            }
            continue;
        }

        if let Some(name) = target_name(line) {
            match std::mem::replace(&mut state, ScanState::Idle) {
                ScanState::Collecting(description) => documented.push(RuleEntry {
                    name: name.to_string(),
                    description,
                }),
                ScanState::Idle => undocumented.push(name.to_string()),
            }
        }
    }

    documented.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    undocumented.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
    ScanOutcome {
        documented,
        undocumented,
    }
}

/// Extract the target identifier from a `name: prerequisites` line.
///
/// The identifier starts at column 0 with an alphanumeric or underscore and
/// may continue with `- _ . /`. Assignments (`NAME := x`, `NAME:=x`), recipe
/// lines, and special targets like `.PHONY` do not match.
fn target_name(line: &str) -> Option<&str> {
    let (name, rest) = line.split_once(':')?;
    if rest.starts_with('=') {
        return None;
    }
    let mut chars = name.chars();
    let first = chars.next()?;
    if !(first.is_ascii_alphanumeric() || first == '_') {
        return None;
    }
    if !chars.all(is_target_char) {
        return None;
    }
    Some(name)
}

fn is_target_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '/')
}
