//! Relationship-target uri helpers.

/// Replaces (or appends) the fragment of a uri.
pub fn replace_fragment(uri: &str, fragment: &str) -> String {
    // split() yields at least one item even for an empty string.
    let base = uri.split('#').next().unwrap_or_default();
    format!("{base}#{fragment}")
}

/// Converts a relationship target into a zip entry name.
///
/// A leading `/` marks the target as absolute within the package;
/// otherwise it is joined to `base` (the part that owns the
/// relationship, `"word"` for the document body) and normalized.
/// Relationship targets are routinely `..`-relative — media often sits
/// beside `word/` rather than inside it — and zip archives store entry
/// names with the dot-segments already resolved.
pub fn uri_to_zip_entry_name(base: &str, uri: &str) -> String {
    match uri.strip_prefix('/') {
        Some(absolute) => absolute.to_string(),
        None => normalize(&format!("{base}/{uri}")),
    }
}

/// Posix-style dot-segment resolution: `word/../media/x.png` becomes
/// `media/x.png`. Empty and `.` segments drop; a `..` that would climb
/// past the start is kept, as posix normpath does.
fn normalize(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if matches!(segments.last(), Some(&"..")) || segments.is_empty() {
                    segments.push("..");
                } else {
                    segments.pop();
                }
            }
            other => segments.push(other),
        }
    }
    if segments.is_empty() {
        ".".to_string()
    } else {
        segments.join("/")
    }
}

#[cfg(test)]
#[path = "uris_tests.rs"]
mod tests;
