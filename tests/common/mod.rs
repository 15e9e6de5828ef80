//! Shared test helpers: a one-shot stub HTTP backend.

use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Minimal HTTP/1.1 responder bound to an ephemeral localhost port.
/// Serves exactly one request with a scripted status and body, and keeps
/// the raw request around for assertions.
pub struct StubBackend {
    addr: SocketAddr,
    request_rx: oneshot::Receiver<String>,
}

impl StubBackend {
    pub async fn serve_once(status: &'static str, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub backend");
        let addr = listener.local_addr().expect("Failed to get stub address");
        let (tx, request_rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.expect("Failed to accept");
            let request = read_request(&mut stream).await;

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream
                .write_all(response.as_bytes())
                .await
                .expect("Failed to write response");
            stream.shutdown().await.ok();

            // Receiver may have been dropped when the test doesn't inspect it
            let _ = tx.send(request);
        });

        Self { addr, request_rx }
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// The raw request line, headers and body the backend received
    pub async fn received(self) -> String {
        self.request_rx
            .await
            .expect("Stub backend saw no request")
    }
}

/// Read until the full head plus `Content-Length` bytes of body are in
async fn read_request(stream: &mut tokio::net::TcpStream) -> String {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = stream.read(&mut chunk).await.expect("Failed to read request");
        if n == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..n]);

        if let Some(head_end) = find(&buffer, b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buffer[..head_end]).to_lowercase();
            let content_length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buffer.len() >= head_end + 4 + content_length {
                break;
            }
        }
    }

    String::from_utf8_lossy(&buffer).to_string()
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
