//! Shared utilities for integration testing.
//!
//! Hosts a programmable mock Atlas backend on an ephemeral port. The mock
//! speaks just enough HTTP/1.1 for reqwest: one request per connection,
//! `Connection: close` on every response.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// A parsed inbound request as seen by the mock Atlas backend.
#[derive(Debug, Clone)]
pub struct MockRequest {
    pub method: String,
    pub path: String,
    pub body: String,
    pub authorization: Option<String>,
}

/// Start a programmable mock Atlas backend.
///
/// The handler maps a parsed request to `(status, json_body)`.
#[allow(dead_code)]
pub async fn start_mock_atlas<F>(handler: F) -> SocketAddr
where
    F: Fn(MockRequest) -> (u16, String) + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handler = Arc::new(handler);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let handler = handler.clone();
                    tokio::spawn(async move {
                        if let Some(request) = read_request(&mut socket).await {
                            let (status, body) = handler(request);
                            write_response(&mut socket, status, &[], &body).await;
                        }
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Start a mock Atlas backend that insists on a digest handshake.
///
/// Unauthenticated requests get a 401 challenge; authenticated ones are
/// passed to the handler, which also receives the Authorization header
/// value for inspection.
#[allow(dead_code)]
pub async fn start_digest_challenge_atlas<F>(handler: F) -> SocketAddr
where
    F: Fn(MockRequest) -> (u16, String) + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handler = Arc::new(handler);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let handler = handler.clone();
                    tokio::spawn(async move {
                        if let Some(request) = read_request(&mut socket).await {
                            if request.authorization.is_none() {
                                let challenge = concat!(
                                    "WWW-Authenticate: Digest realm=\"MMS Public API\", ",
                                    "domain=\"\", nonce=\"cXVpY2ticm93bmZveA==\", ",
                                    "algorithm=MD5, qop=\"auth\", stale=false"
                                );
                                write_response(&mut socket, 401, &[challenge], "{}").await;
                            } else {
                                let (status, body) = handler(request);
                                write_response(&mut socket, status, &[], &body).await;
                            }
                        }
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Read and parse one HTTP/1.1 request off the socket.
async fn read_request(socket: &mut TcpStream) -> Option<MockRequest> {
    let mut buf = Vec::new();
    let mut tmp = [0u8; 1024];

    let header_end = loop {
        if let Some(pos) = find_subslice(&buf, b"\r\n\r\n") {
            break pos;
        }
        let n = socket.read(&mut tmp).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&tmp[..n]);
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.lines();
    let request_line = lines.next()?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next()?.to_string();
    let path = parts.next()?.to_string();

    let mut content_length = 0usize;
    let mut authorization = None;
    for line in lines {
        if let Some((name, value)) = line.split_once(':') {
            match name.to_ascii_lowercase().as_str() {
                "content-length" => content_length = value.trim().parse().unwrap_or(0),
                "authorization" => authorization = Some(value.trim().to_string()),
                _ => {}
            }
        }
    }

    let mut body = buf[header_end + 4..].to_vec();
    while body.len() < content_length {
        let n = socket.read(&mut tmp).await.ok()?;
        if n == 0 {
            break;
        }
        body.extend_from_slice(&tmp[..n]);
    }

    Some(MockRequest {
        method,
        path,
        body: String::from_utf8_lossy(&body).to_string(),
        authorization,
    })
}

async fn write_response(socket: &mut TcpStream, status: u16, extra_headers: &[&str], body: &str) {
    let mut response = format!("HTTP/1.1 {}\r\n", status_text(status));
    for header in extra_headers {
        response.push_str(header);
        response.push_str("\r\n");
    }
    response.push_str(&format!(
        "Content-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    ));
    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
}

fn status_text(status: u16) -> &'static str {
    match status {
        200 => "200 OK",
        201 => "201 Created",
        400 => "400 Bad Request",
        401 => "401 Unauthorized",
        404 => "404 Not Found",
        409 => "409 Conflict",
        500 => "500 Internal Server Error",
        _ => "200 OK",
    }
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
