//! Common utility functions shared across the codebase.

use std::path::Path;

/// Build an index of line start byte offsets for O(log n) line lookups.
///
/// The returned vector contains byte offsets where each line starts.
/// Line 1 starts at offset 0, line 2 starts after the first '\n', etc.
pub fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0]; // Line 1 starts at offset 0
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Find line number for a byte offset using binary search.
///
/// Returns 1-based line number.
pub fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1, // Exact match at line start
        Err(line) => line,    // Falls within this line
    }
}

/// Guess the locale code from a catalog file name.
///
/// Translation files conventionally end in `_<lang>` or `_<lang>_<REGION>`
/// before the extension (e.g. `app_de.ts`, `chat_en_US.ts`). Returns `None`
/// when no such suffix is present.
pub fn locale_from_path(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    let parts: Vec<&str> = stem.split('_').collect();
    if parts.len() < 2 {
        return None;
    }

    let last = parts[parts.len() - 1];
    let is_lang = |s: &str| {
        (2..=3).contains(&s.len()) && s.chars().all(|c| c.is_ascii_lowercase())
    };
    let is_region = |s: &str| {
        (2..=3).contains(&s.len()) && s.chars().all(|c| c.is_ascii_uppercase())
    };

    if is_region(last) && parts.len() >= 3 && is_lang(parts[parts.len() - 2]) {
        return Some(format!("{}_{}", parts[parts.len() - 2], last));
    }
    if is_lang(last) {
        return Some(last.to_string());
    }
    None
}

/// Render a relative path with forward slashes, regardless of platform.
pub fn rel_slash(path: &Path) -> String {
    let parts: Vec<String> = path
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    parts.join("/")
}
