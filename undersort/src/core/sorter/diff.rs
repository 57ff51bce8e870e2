// src/core/sorter/diff.rs
use console::style;
use similar::TextDiff;
use std::path::Path;

const CONTEXT_LINES: usize = 3;

/// Unified diff between the original and sorted text of `path`.
#[must_use]
pub fn unified_diff(path: &Path, original: &str, sorted: &str) -> String {
    let name = path.display().to_string();
    TextDiff::from_lines(original, sorted)
        .unified_diff()
        .context_radius(CONTEXT_LINES)
        .header(&name, &name)
        .to_string()
}

/// Colors one line of a unified diff for terminal output.
#[must_use]
pub fn colorize_line(line: &str) -> String {
    if line.starts_with("+++") || line.starts_with("---") {
        style(line).bold().to_string()
    } else if line.starts_with('+') {
        style(line).green().to_string()
    } else if line.starts_with('-') {
        style(line).red().to_string()
    } else if line.starts_with("@@") {
        style(line).cyan().to_string()
    } else {
        line.to_owned()
    }
}
