//! A one-shot HTTP stub for exercising the REST client without the network.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// What the stub received.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    /// e.g. `POST /v1beta/models/m:generateContent HTTP/1.1`
    pub request_line: String,
    /// Header pairs with lowercased names
    pub headers: Vec<(String, String)>,
    /// JSON body, or `Null` if it did not parse
    pub body: serde_json::Value,
}

impl CapturedRequest {
    /// Header value by lowercase name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Serve exactly one request, answering with `status` and `body`.
///
/// Returns the base URL to hand to the client and a receiver for the
/// captured request.
pub async fn serve_once(
    status: u16,
    body: &'static str,
) -> anyhow::Result<(String, oneshot::Receiver<CapturedRequest>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };

        let mut raw = Vec::new();
        let mut chunk = [0u8; 4096];
        let (head_end, content_length) = loop {
            let n = match socket.read(&mut chunk).await {
                Ok(0) | Err(_) => return,
                Ok(n) => n,
            };
            raw.extend_from_slice(&chunk[..n]);
            if let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&raw[..pos]).to_string();
                let length = head
                    .lines()
                    .filter_map(|line| line.split_once(':'))
                    .find(|(key, _)| key.trim().eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                break (pos, length);
            }
        };

        let body_start = head_end + 4;
        while raw.len() < body_start + content_length {
            match socket.read(&mut chunk).await {
                Ok(0) | Err(_) => break,
                Ok(n) => raw.extend_from_slice(&chunk[..n]),
            }
        }

        let head = String::from_utf8_lossy(&raw[..head_end]).to_string();
        let mut lines = head.lines();
        let request_line = lines.next().unwrap_or_default().to_string();
        let headers = lines
            .filter_map(|line| line.split_once(':'))
            .map(|(key, value)| (key.trim().to_ascii_lowercase(), value.trim().to_string()))
            .collect();
        let end = raw.len().min(body_start + content_length);
        let captured_body =
            serde_json::from_slice(&raw[body_start..end]).unwrap_or(serde_json::Value::Null);

        let reply = format!(
            "HTTP/1.1 {} Stub\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        let _ = socket.write_all(reply.as_bytes()).await;
        let _ = socket.shutdown().await;

        let _ = tx.send(CapturedRequest {
            request_line,
            headers,
            body: captured_body,
        });
    });

    Ok((format!("http://{}/v1beta", addr), rx))
}
