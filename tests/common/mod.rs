//! One-shot HTTP server on localhost shared by the client and CLI tests.
#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

/// Serve a single response, then return the URL it was served on.
pub fn serve_once(status: &'static str, body: &'static str) -> (String, thread::JoinHandle<()>) {
    serve_slow(status, body, Duration::ZERO)
}

/// Like [`serve_once`], but hold the body back for `delay` after the headers.
pub fn serve_slow(
    status: &'static str,
    body: &'static str,
    delay: Duration,
) -> (String, thread::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream);
        // drain request headers
        let mut line = String::new();
        loop {
            line.clear();
            if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                break;
            }
        }
        let mut stream = reader.into_inner();
        // the client may hang up early, so write errors are ignored
        let _ = write!(
            stream,
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        let _ = stream.flush();
        thread::sleep(delay);
        let _ = stream.write_all(body.as_bytes());
        let _ = stream.flush();
    });
    (format!("http://{addr}/countries.geojson"), handle)
}

/// URL on a port nothing listens on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/x.geojson")
}
