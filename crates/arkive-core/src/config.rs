use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::net::{DEFAULT_CACHE_PREFIX, DEFAULT_TINYURL_ENDPOINT};
use crate::retry::RetryPolicy;
use crate::url_model::{Denylist, Normalizer, TrackerRule};

/// Where the Tor SOCKS proxy is expected. `TOR_HOST`/`TOR_SOCKS_PORT` still win.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorConfig {
    pub host: String,
    pub socks_port: u16,
}

impl Default for TorConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            socks_port: 9050,
        }
    }
}

/// HTTP settings for redirect resolution, liveness probes and shortening.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    pub connect_timeout_secs: u64,
    pub timeout_secs: u64,
    pub tinyurl_endpoint: String,
    /// Prefix that turns a dead link into its web-cache address.
    pub cache_prefix: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 30,
            tinyurl_endpoint: DEFAULT_TINYURL_ENDPOINT.to_string(),
            cache_prefix: DEFAULT_CACHE_PREFIX.to_string(),
        }
    }
}

/// Retry parameters for removing recently used files and directories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveConfig {
    /// Attempts before the final one whose error is returned.
    pub max_attempts: u32,
    pub delay_ms: u64,
}

impl Default for RemoveConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay_ms: 500,
        }
    }
}

impl From<&RemoveConfig> for RetryPolicy {
    fn from(cfg: &RemoveConfig) -> Self {
        RetryPolicy {
            max_attempts: cfg.max_attempts,
            delay: Duration::from_millis(cfg.delay_ms),
        }
    }
}

/// Tracker keys stripped in addition to the built-in denylist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Keys starting with any of these are stripped (case-sensitive).
    #[serde(default)]
    pub prefixes: Vec<String>,
    /// Keys equal to any of these, ignoring ASCII case, are stripped.
    #[serde(default)]
    pub exact: Vec<String>,
}

/// Global configuration loaded from `~/.config/arkive/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelperConfig {
    #[serde(default)]
    pub tor: TorConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub remove: RemoveConfig,
    #[serde(default)]
    pub trackers: TrackerConfig,
}

impl HelperConfig {
    /// Built-in denylist plus the configured extra tracker keys.
    pub fn denylist(&self) -> Denylist {
        let mut denylist = Denylist::default();
        denylist.extend(
            self.trackers
                .prefixes
                .iter()
                .map(|p| TrackerRule::prefix(p.as_str()))
                .chain(self.trackers.exact.iter().map(|k| TrackerRule::exact(k.as_str()))),
        );
        denylist
    }

    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(self.denylist())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("arkive")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<HelperConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = HelperConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg: HelperConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = HelperConfig::default();
        assert_eq!(cfg.tor.host, "127.0.0.1");
        assert_eq!(cfg.tor.socks_port, 9050);
        assert_eq!(cfg.http.timeout_secs, 30);
        assert_eq!(cfg.remove.max_attempts, 3);
        assert_eq!(cfg.remove.delay_ms, 500);
        assert!(cfg.trackers.exact.is_empty());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = HelperConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: HelperConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn empty_file_uses_defaults() {
        let cfg: HelperConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, HelperConfig::default());
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            [tor]
            host = "10.0.0.2"
            socks_port = 9150

            [remove]
            max_attempts = 5
            delay_ms = 100

            [trackers]
            exact = ["gclid"]
            prefixes = ["mc_"]
        "#;
        let cfg: HelperConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.tor.host, "10.0.0.2");
        assert_eq!(cfg.tor.socks_port, 9150);
        assert_eq!(cfg.http, HttpConfig::default());

        let policy = RetryPolicy::from(&cfg.remove);
        assert_eq!(policy.max_attempts, 5);
        assert_eq!(policy.delay, Duration::from_millis(100));

        let normalizer = cfg.normalizer();
        assert_eq!(
            normalizer.normalize("https://example.com/?gclid=1&mc_eid=2&utm_source=3&id=4"),
            "https://example.com/?id=4"
        );
    }
}
