//! Base-name sanitization for archive file names.

/// Turns a URL path into a dash-separated base name safe for any filesystem.
///
/// - Percent-escapes are decoded first
/// - Separators (`/`, `.`, space, `&`, `_`, `=`, `+`, `:`) become `-`
/// - Anything that is not alphanumeric is dropped
/// - Consecutive dashes collapse; leading/trailing dashes are trimmed
pub fn sanitize_base_name(path: &str) -> String {
    let decoded = percent_decode(path);

    let mut out = String::with_capacity(decoded.len());
    let mut prev_dash = true;

    for c in decoded.chars() {
        if c.is_alphanumeric() {
            out.push(c);
            prev_dash = false;
        } else if matches!(c, '-' | '/' | '.' | ' ' | '&' | '_' | '=' | '+' | ':') {
            if !prev_dash {
                out.push('-');
            }
            prev_dash = true;
        }
    }

    out.trim_matches('-').to_string()
}

/// Keeps at most `max` dash-separated parts of `name`.
pub fn truncate_parts(name: &str, max: usize) -> String {
    name.split('-').take(max).collect::<Vec<_>>().join("-")
}

/// Lenient percent-decode: invalid escapes are kept verbatim, invalid UTF-8 is replaced.
pub(super) fn percent_decode(input: &str) -> String {
    let mut out = Vec::with_capacity(input.len());
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(h), Some(l)) = (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                out.push(h << 4 | l);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
