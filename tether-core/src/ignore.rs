//! Exclusion-list computation for `.gitignore`.
//!
//! Pure string functions; reading and writing the file (and untracking a
//! leaked artifact from the index) is the sync layer's job. Presence is a
//! substring containment check against the raw file text — a pattern already
//! appearing anywhere, even as part of another line, counts as present, so
//! re-application never duplicates an entry.

/// Marker comment written above the patterns this tool appends.
pub const MARKER: &str = "# Added by tether";

/// Required ignore patterns, self artifact first, then OS cruft, caches,
/// logs and virtual-env directories.
pub fn required_patterns(artifact: &str) -> Vec<String> {
    let mut patterns = vec![artifact.to_string()];
    patterns.extend(
        [
            ".DS_Store",
            "Thumbs.db",
            "__pycache__/",
            "*.log",
            ".venv",
            "venv/",
        ]
        .into_iter()
        .map(String::from),
    );
    patterns
}

/// Patterns from `required` not yet present anywhere in `existing`.
pub fn missing_patterns<'a>(existing: &str, required: &'a [String]) -> Vec<&'a str> {
    required
        .iter()
        .map(String::as_str)
        .filter(|p| !existing.contains(p))
        .collect()
}

/// Append `missing` under the marker comment, preserving existing content
/// and guaranteeing a newline boundary before the appended block.
pub fn append_block(existing: &str, missing: &[&str]) -> String {
    let mut out = String::from(existing);
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out.push('\n');
    out.push_str(MARKER);
    out.push('\n');
    out.push_str(&missing.join("\n"));
    out.push('\n');
    out
}
