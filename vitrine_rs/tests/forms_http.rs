//! Form submission against a local HTTP stub.

use serde_json::{Map, Value, json};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use vitrine::forms::{FormClient, submit_form};

fn data() -> Map<String, Value> {
    match json!({ "name": "Ana Souza", "email": "ana@example.com", "message": "I need a landing page" }) {
        Value::Object(map) => map,
        _ => unreachable!(),
    }
}

/// Serve one request with `status` and `body`; the request body is sent back
/// through the returned channel.
async fn stub(status: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/submit", listener.local_addr().unwrap());
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        let request_body = loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break String::new();
            }
            buf.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&buf).to_string();
            if let Some(split) = text.find("\r\n\r\n") {
                let length = text[..split]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if buf.len() >= split + 4 + length {
                    break text[split + 4..].to_string();
                }
            }
        };

        let response = format!(
            "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        let _ = tx.send(request_body);
    });

    (url, rx)
}

#[tokio::test]
async fn successful_submission_returns_backend_data() {
    let (url, request) = stub("200 OK", r#"{"ok":true,"id":"abc"}"#).await;
    let client = FormClient::new("Acme", "landing-page", "https://acme.test/#contato");

    let result = client.submit(&data(), Some(&url)).await;
    assert!(result.success, "{:?}", result);
    assert_eq!(result.data, Some(json!({ "ok": true, "id": "abc" })));
    assert_eq!(result.error, None);

    let sent: Value = serde_json::from_str(&request.await.unwrap()).unwrap();
    assert_eq!(sent["name"], "Ana Souza");
    assert_eq!(sent["_replyto"], "ana@example.com");
    assert_eq!(sent["_subject"], "New contact from the Acme website");
    assert_eq!(sent["source"], "landing-page");
}

#[tokio::test]
async fn server_error_is_reported_with_status() {
    let (url, _request) = stub("500 Internal Server Error", "{}").await;

    let result = submit_form(&data(), Some(&url), "Acme", "https://acme.test").await;
    assert!(!result.success);
    assert_eq!(result.error.as_deref(), Some("HTTP error! status: 500"));
    assert_eq!(result.data, None);
}

#[tokio::test]
async fn non_json_success_still_counts() {
    let (url, _request) = stub("200 OK", "thanks").await;

    let result = submit_form(&data(), Some(&url), "Acme", "https://acme.test").await;
    assert!(result.success);
    assert_eq!(result.data, Some(Value::Null));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_failure_not_a_panic() {
    // Bind then drop to get a port nothing listens on.
    let addr = TcpListener::bind("127.0.0.1:0").await.unwrap().local_addr().unwrap();

    let result = submit_form(&data(), Some(&format!("http://{}/", addr)), "Acme", "").await;
    assert!(!result.success);
    assert!(!result.error.unwrap_or_default().is_empty());
}
