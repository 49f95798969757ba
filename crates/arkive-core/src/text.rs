//! Random identifiers and charset detection.

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use rand::Rng;
use regex::bytes::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

/// Character set for [`rand_string`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alphabet {
    /// `0-9A-Za-z`
    #[default]
    Alphanumeric,
    /// `A-Z`
    Upper,
    /// `a-z`
    Lower,
}

impl Alphabet {
    fn chars(self) -> &'static [u8] {
        match self {
            Alphabet::Alphanumeric => {
                b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz"
            }
            Alphabet::Upper => b"ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            Alphabet::Lower => b"abcdefghijklmnopqrstuvwxyz",
        }
    }
}

impl FromStr for Alphabet {
    type Err = std::convert::Infallible;

    /// `capital`/`upper` and `lower` select a case; anything else is alphanumeric.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "capital" | "upper" => Alphabet::Upper,
            "lower" => Alphabet::Lower,
            _ => Alphabet::Alphanumeric,
        })
    }
}

/// Random string of `length` characters from `alphabet`.
///
/// Uses the thread-local CSPRNG, so results are fine for temp names and nonces.
pub fn rand_string(length: usize, alphabet: Alphabet) -> String {
    let chars = alphabet.chars();
    let mut rng = rand::rng();
    (0..length)
        .map(|_| chars[rng.random_range(0..chars.len())] as char)
        .collect()
}

/// Bytes inspected when sniffing a document's charset.
const SNIFF_LEN: usize = 1024;

static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i-u)<meta[^>]+charset\s*=\s*["']?\s*([a-z0-9_.:\-]+)"#)
        .unwrap_or_else(|e| panic!("Failed to compile META_CHARSET_RE: {e}"))
});

/// Guesses the encoding of `bytes`.
///
/// Order: byte-order mark, `<meta charset>` or `http-equiv` declaration in
/// the first 1024 bytes, UTF-8 validity of that prefix, then `windows-1252`.
pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some((enc, _)) = Encoding::for_bom(bytes) {
        return enc;
    }

    let head = &bytes[..bytes.len().min(SNIFF_LEN)];
    if let Some(declared) = META_CHARSET_RE
        .captures(head)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_bytes()))
    {
        // A UTF-16 label in an ASCII-compatible document can only mean UTF-8.
        return declared.output_encoding();
    }

    match std::str::from_utf8(head) {
        Ok(_) => UTF_8,
        // A multi-byte sequence cut at the sniff boundary is still UTF-8.
        Err(e) if e.error_len().is_none() && bytes.len() > SNIFF_LEN => UTF_8,
        Err(_) => WINDOWS_1252,
    }
}

/// Decodes `bytes` to UTF-8 using [`detect_encoding`], returning the text and
/// the encoding that was used. Malformed sequences become U+FFFD.
pub fn utf8_encoding(bytes: &[u8]) -> (String, &'static Encoding) {
    let enc = detect_encoding(bytes);
    let (text, used, had_errors) = enc.decode(bytes);
    if had_errors {
        tracing::debug!(encoding = used.name(), "replaced malformed sequences while decoding");
    }
    (text.into_owned(), used)
}
