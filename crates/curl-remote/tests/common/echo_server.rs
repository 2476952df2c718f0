//! Minimal HTTP/1.1 server that echoes each raw request back as the response body.
//!
//! The status line is configurable so tests can check that error statuses
//! still return the body.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

/// Host name the tests pin to the loopback server with a resolve entry.
/// Loopback literals are rejected by URL validation, so tests go through a name.
pub const HOST: &str = "echo.test";

/// A running echo server bound to 127.0.0.1.
pub struct EchoServer {
    pub port: u16,
}

impl EchoServer {
    /// `http://echo.test:<port><path>`.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}:{}{}", HOST, self.port, path)
    }

    /// Resolve entry mapping [`HOST`] to this server.
    pub fn resolve_entry(&self) -> String {
        format!("{}:{}:127.0.0.1", HOST, self.port)
    }
}

/// Starts a server answering `200 OK`. Runs until the process exits.
pub fn start() -> EchoServer {
    start_with_status("200 OK")
}

/// Like `start` but answers every request with `status` (e.g. "404 Not Found").
pub fn start_with_status(status: &'static str) -> EchoServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            thread::spawn(move || handle(stream, status));
        }
    });
    EchoServer { port }
}

/// A port on 127.0.0.1 with nothing listening.
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    listener.local_addr().unwrap().port()
}

fn handle(mut stream: std::net::TcpStream, status: &str) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    let request = match read_request(&mut stream) {
        Some(r) => r,
        None => return,
    };
    let head = format!(
        "HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        request.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&request);
}

/// Reads headers up to the blank line, then `Content-Length` bytes of body.
fn read_request(stream: &mut std::net::TcpStream) -> Option<Vec<u8>> {
    let mut data = Vec::new();
    let mut buf = [0u8; 8192];
    loop {
        if let Some(end) = find_header_end(&data) {
            let wanted = end + content_length(&data[..end]);
            if data.len() >= wanted {
                return Some(data);
            }
        }
        match stream.read(&mut buf) {
            Ok(0) => return if data.is_empty() { None } else { Some(data) },
            Ok(n) => data.extend_from_slice(&buf[..n]),
            Err(_) => return None,
        }
    }
}

fn find_header_end(data: &[u8]) -> Option<usize> {
    data.windows(4).position(|w| w == b"\r\n\r\n").map(|p| p + 4)
}

fn content_length(head: &[u8]) -> usize {
    let text = String::from_utf8_lossy(head);
    for line in text.lines() {
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-length") {
                return value.trim().parse().unwrap_or(0);
            }
        }
    }
    0
}
