//! Environment and stdin helpers.

use std::io::{self, BufRead, IsTerminal};

/// Removes each named variable from the process environment.
pub fn unsetenv<I, K>(keys: I)
where
    I: IntoIterator<Item = K>,
    K: AsRef<std::ffi::OsStr>,
{
    for key in keys {
        std::env::remove_var(key);
    }
}

/// True when input is piped in while output still goes to a terminal.
pub fn has_stdin() -> bool {
    !io::stdin().is_terminal() && io::stdout().is_terminal()
}

/// Reads space-separated tokens from piped stdin; empty when nothing is piped.
pub fn read_stdin() -> Vec<String> {
    if !has_stdin() {
        return Vec::new();
    }
    read_tokens(io::stdin().lock())
}

/// Splits every line of `reader` on spaces, dropping empty tokens.
/// Reading stops at the first I/O error.
pub fn read_tokens<R: BufRead>(reader: R) -> Vec<String> {
    let mut tokens = Vec::new();
    for line in reader.lines() {
        match line {
            Ok(line) => tokens.extend(
                line.split(' ')
                    .filter(|t| !t.is_empty())
                    .map(str::to_string),
            ),
            Err(e) => {
                tracing::debug!(error = %e, "stopped reading stdin");
                break;
            }
        }
    }
    tokens
}
