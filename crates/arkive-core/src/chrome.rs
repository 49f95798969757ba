//! Locating a Chrome/Chromium executable.

use std::path::PathBuf;

/// Returned when nothing better is found, so the eventual spawn error names a real browser.
const FALLBACK: &str = "google-chrome";

#[cfg(target_os = "macos")]
fn candidates() -> Vec<PathBuf> {
    [
        "chrome",
        "chromium",
        "/Applications/Chromium.app/Contents/MacOS/Chromium",
        "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
    ]
    .iter()
    .map(PathBuf::from)
    .collect()
}

#[cfg(windows)]
fn candidates() -> Vec<PathBuf> {
    let mut c: Vec<PathBuf> = [
        "chrome",
        "chromium",
        // in case PATHEXT is misconfigured
        "chrome.exe",
        r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe",
        r"C:\Program Files\Google\Chrome\Application\chrome.exe",
    ]
    .iter()
    .map(PathBuf::from)
    .collect();
    if let Some(profile) = std::env::var_os("USERPROFILE") {
        c.push(PathBuf::from(profile).join(r"AppData\Local\Google\Chrome\Application\chrome.exe"));
    }
    c
}

#[cfg(not(any(target_os = "macos", windows)))]
fn candidates() -> Vec<PathBuf> {
    [
        "headless_shell",
        "headless-shell",
        "chrome",
        "chromium",
        "chromium-browser",
        "google-chrome",
        "google-chrome-stable",
        "google-chrome-beta",
        "google-chrome-unstable",
        "/usr/bin/google-chrome",
    ]
    .iter()
    .map(PathBuf::from)
    .collect()
}

/// Finds a Chrome or Chromium binary, trying platform-specific names on
/// `PATH` and well-known install locations in order.
pub fn find_chrome_exec_path() -> PathBuf {
    for candidate in candidates() {
        if let Ok(found) = which::which(&candidate) {
            tracing::debug!(path = %found.display(), "found chrome");
            return found;
        }
    }
    PathBuf::from(FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_are_not_empty() {
        assert!(!candidates().is_empty());
    }

    #[test]
    fn result_is_found_or_fallback() {
        let p = find_chrome_exec_path();
        assert!(p == PathBuf::from(FALLBACK) || p.is_absolute());
    }
}
