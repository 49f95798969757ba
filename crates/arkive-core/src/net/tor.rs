//! Tor SOCKS proxy reachability.

use std::io;
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::config::TorConfig;
use crate::error::{HelperError, Result};

pub const TOR_HOST_ENV: &str = "TOR_HOST";
pub const TOR_SOCKS_PORT_ENV: &str = "TOR_SOCKS_PORT";

const DIAL_TIMEOUT: Duration = Duration::from_secs(1);

/// Checks that a Tor proxy is listening and returns its `host:port`.
///
/// `TOR_HOST` and `TOR_SOCKS_PORT` override the defaults `127.0.0.1` and `9050`.
pub fn via_tor() -> Result<String> {
    via_tor_with(&TorConfig::default())
}

/// Like [`via_tor`], with `cfg` as the fallback when the environment is unset or empty.
pub fn via_tor_with(cfg: &TorConfig) -> Result<String> {
    let host = non_empty_env(TOR_HOST_ENV).unwrap_or_else(|| cfg.host.clone());
    let port = non_empty_env(TOR_SOCKS_PORT_ENV).unwrap_or_else(|| cfg.socks_port.to_string());
    probe_tor(&host, &port)
}

/// Dials `host:port` with a one second timeout.
pub fn probe_tor(host: &str, port: &str) -> Result<String> {
    let addr = join_host_port(host, port);
    match dial(&addr) {
        Ok(()) => {
            tracing::debug!(%addr, "tor proxy reachable");
            Ok(addr)
        }
        Err(source) => Err(HelperError::TorUnreachable { addr, source }),
    }
}

/// Joins host and port, bracketing IPv6 literals.
pub fn join_host_port(host: &str, port: &str) -> String {
    if host.contains(':') {
        format!("[{host}]:{port}")
    } else {
        format!("{host}:{port}")
    }
}

fn dial(addr: &str) -> io::Result<()> {
    let mut last_err = None;
    for sock in addr.to_socket_addrs()? {
        match TcpStream::connect_timeout(&sock, DIAL_TIMEOUT) {
            Ok(_) => return Ok(()),
            Err(e) => last_err = Some(e),
        }
    }
    Err(last_err.unwrap_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "address resolved to nothing")
    }))
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
