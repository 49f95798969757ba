//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a fixed table of routes on `127.0.0.1:0`, answers HEAD without a
//! body, and records every request target so tests can inspect query strings.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
pub struct Route {
    pub path: &'static str,
    pub status: &'static str,
    pub headers: Vec<(&'static str, String)>,
    pub body: String,
    /// If false, HEAD returns 405 (simulates servers that block HEAD).
    pub head_allowed: bool,
}

impl Route {
    pub fn ok(path: &'static str, body: &str) -> Self {
        Self {
            path,
            status: "200 OK",
            headers: Vec::new(),
            body: body.to_string(),
            head_allowed: true,
        }
    }

    pub fn status(path: &'static str, status: &'static str) -> Self {
        Self {
            status,
            ..Self::ok(path, "")
        }
    }

    pub fn redirect(path: &'static str, location: &str) -> Self {
        Self {
            headers: vec![("Location", location.to_string())],
            ..Self::status(path, "303 See Other")
        }
    }

    pub fn no_head(mut self) -> Self {
        self.head_allowed = false;
        self
    }
}

pub struct MockServer {
    pub base: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockServer {
    /// Starts serving `routes` in a background thread until the process exits.
    /// Unknown paths answer 404.
    pub fn start(routes: Vec<Route>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();
        let routes = Arc::new(routes);
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let routes = Arc::clone(&routes);
                let seen = Arc::clone(&seen);
                thread::spawn(move || handle(stream, &routes, &seen));
            }
        });
        Self {
            base: format!("http://127.0.0.1:{}", port),
            requests,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Request targets (path plus query) received so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn handle(mut stream: TcpStream, routes: &[Route], seen: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let mut parts = request.lines().next().unwrap_or("").split_whitespace();
    let method = parts.next().unwrap_or("");
    let target = parts.next().unwrap_or("/");
    seen.lock().unwrap().push(target.to_string());

    let path = target.split('?').next().unwrap_or("/");
    let route = routes.iter().find(|r| r.path == path);
    let is_head = method.eq_ignore_ascii_case("HEAD");

    let (status, headers, body) = match route {
        Some(r) if is_head && !r.head_allowed => ("405 Method Not Allowed", &[][..], ""),
        Some(r) => (r.status, &r.headers[..], r.body.as_str()),
        None => ("404 Not Found", &[][..], "not found"),
    };

    let mut response = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n",
        status,
        body.len()
    );
    for (name, value) in headers {
        response.push_str(&format!("{}: {}\r\n", name, value));
    }
    response.push_str("\r\n");
    let _ = stream.write_all(response.as_bytes());
    if !is_head {
        let _ = stream.write_all(body.as_bytes());
    }
}
