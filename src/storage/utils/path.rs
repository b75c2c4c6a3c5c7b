// Path helper utilities shared across storage operations
use std::path::Path;

/// Extract a normalized basename from a remote or local path.
pub fn basename(path: &str) -> String {
    Path::new(path.trim_start_matches('/'))
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.trim_matches('/').to_string())
}

/// Join `bucket` and `path` for display, the way the gateway addresses objects.
pub fn display_object_path(bucket: &str, path: &str) -> String {
    format!("{bucket}/{path}")
}
