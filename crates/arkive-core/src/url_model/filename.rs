//! Archive file naming from a page link and its content type.

use url::Url;

use super::sanitize::{sanitize_base_name, truncate_parts};

/// Extension used when the content type is missing or unknown.
const DEFAULT_EXTENSION: &str = ".html";

/// Maximum number of dash-separated path parts kept in a file name.
const MAX_PATH_PARTS: usize = 4;

const EXTENSIONS: &[(&str, &str)] = &[
    ("text/html", ".html"),
    ("application/xhtml+xml", ".xhtml"),
    ("text/plain", ".txt"),
    ("text/css", ".css"),
    ("text/csv", ".csv"),
    ("text/javascript", ".js"),
    ("application/javascript", ".js"),
    ("application/json", ".json"),
    ("application/xml", ".xml"),
    ("text/xml", ".xml"),
    ("application/pdf", ".pdf"),
    ("application/zip", ".zip"),
    ("application/gzip", ".gz"),
    ("application/epub+zip", ".epub"),
    ("image/png", ".png"),
    ("image/jpeg", ".jpg"),
    ("image/gif", ".gif"),
    ("image/webp", ".webp"),
    ("image/svg+xml", ".svg"),
    ("image/x-icon", ".ico"),
    ("audio/mpeg", ".mp3"),
    ("audio/ogg", ".ogg"),
    ("video/mp4", ".mp4"),
    ("video/webm", ".webm"),
];

/// Maps a `Content-Type` value (parameters allowed) to a file extension.
pub fn extension_for(content_type: &str) -> &'static str {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim();
    EXTENSIONS
        .iter()
        .find(|(ct, _)| ct.eq_ignore_ascii_case(essence))
        .map(|(_, ext)| *ext)
        .unwrap_or(DEFAULT_EXTENSION)
}

/// Builds a file name for an archived copy of `link`.
///
/// Shape: `<timestamp>[-<host>[-<path>]]<ext>` where the timestamp is local
/// time with millisecond precision, dots in the host become dashes and the
/// path keeps at most four sanitized parts.
///
/// # Examples
///
/// - `file_name("https://example.org/some-path?k=v", "text/html")` → `"2024-01-02-150405.000-example-org-some-path.html"`
/// - `file_name("", "")` → `"2024-01-02-150405.000.html"`
pub fn file_name(link: &str, content_type: &str) -> String {
    let now = chrono::Local::now().format("%Y-%m-%d-%H%M%S%.3f").to_string();
    let ext = extension_for(content_type);

    let parsed = match Url::parse(link) {
        Ok(u) => u,
        Err(_) => return format!("{now}{ext}"),
    };
    let host = match parsed.host_str() {
        Some(h) if !h.is_empty() => h,
        _ => return format!("{now}{ext}"),
    };

    let domain = host.replace('.', "-");
    let path = parsed.path();
    if path.is_empty() || path == "/" {
        return format!("{now}-{domain}{ext}");
    }

    let base = truncate_parts(&sanitize_base_name(path), MAX_PATH_PARTS);
    if base.is_empty() {
        return format!("{now}-{domain}{ext}");
    }
    format!("{now}-{domain}-{base}{ext}")
}
