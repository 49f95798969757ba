//! URL candidate matching in free text.

use regex::Regex;
use std::sync::LazyLock;

// Scheme, host with at least one dot, optional port, then anything up to
// whitespace, a character that cannot appear unescaped in prose URLs, or
// full-width CJK sentence punctuation.
const URL_PATTERN: &str =
    r#"(?i)https?://[\p{L}\p{N}\-._~%@:]+\.[\p{L}\p{N}\-]+(?::\d{1,5})?(?:[/?#][^\s<>"`，。；：！？、]*)?"#;

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(URL_PATTERN).unwrap_or_else(|e| {
        panic!("Failed to compile regex pattern '{URL_PATTERN}' in URL_RE: {e}")
    })
});

/// Characters that end a sentence rather than a URL.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', '\'', '"'];

/// Full-width bracket pairs. An unmatched closer ends the URL wherever it sits.
const FULL_WIDTH_BRACKETS: &[(char, char)] = &[('（', '）'), ('【', '】'), ('「', '」'), ('『', '』')];

/// Iterates URL-like substrings of `text` left to right, without overlap.
pub(crate) fn candidates(text: &str) -> impl Iterator<Item = &str> {
    URL_RE
        .find_iter(text)
        .map(|m| trim_trailing(cut_unmatched_full_width(m.as_str())))
}

/// Reports whether `text` contains at least one URL-like substring.
pub fn is_url(text: &str) -> bool {
    URL_RE.is_match(text)
}

/// Drops sentence punctuation and unbalanced closing brackets from the end of a match.
fn trim_trailing(mut s: &str) -> &str {
    loop {
        let Some(last) = s.chars().last() else {
            return s;
        };
        let drop = if TRAILING_PUNCTUATION.contains(&last) {
            true
        } else {
            match last {
                ')' => unbalanced(s, '(', ')'),
                ']' => unbalanced(s, '[', ']'),
                '}' => unbalanced(s, '{', '}'),
                _ => false,
            }
        };
        if !drop {
            return s;
        }
        s = &s[..s.len() - last.len_utf8()];
    }
}

fn unbalanced(s: &str, open: char, close: char) -> bool {
    s.matches(close).count() > s.matches(open).count()
}

/// Truncates `s` at the first full-width closing bracket without an opener before it.
fn cut_unmatched_full_width(s: &str) -> &str {
    let mut depth = [0usize; FULL_WIDTH_BRACKETS.len()];
    for (i, c) in s.char_indices() {
        for (slot, &(open, close)) in FULL_WIDTH_BRACKETS.iter().enumerate() {
            if c == open {
                depth[slot] += 1;
            } else if c == close {
                if depth[slot] == 0 {
                    return &s[..i];
                }
                depth[slot] -= 1;
            }
        }
    }
    s
}
