//! Client behavior over real HTTP: lazy token exchange, the process-wide
//! token cache, and the 401 re-acquire-and-retry-once path, exercised
//! against a minimal scripted HTTP server.

#![allow(clippy::unwrap_used)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use secrecy::SecretString;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use fba_sync_cli::config::SpApiConfig;
use fba_sync_cli::fetch::PageSource;
use fba_sync_cli::spapi::pages::InventoryPages;
use fba_sync_cli::spapi::{SpApiClient, SpApiError};

/// How the scripted API treats requests.
#[derive(Clone, Copy)]
enum ApiBehavior {
    /// Accept any bearer token.
    AcceptAll,
    /// Reject the first issued token with 401, accept later ones.
    RejectFirstToken,
    /// Reject every bearer token with 401.
    RejectAll,
    /// Fail the token exchange itself with 400 invalid_grant.
    FailAuth,
}

struct ScriptedApi {
    behavior: ApiBehavior,
    auth_calls: AtomicUsize,
    api_calls: AtomicUsize,
}

impl ScriptedApi {
    fn new(behavior: ApiBehavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            auth_calls: AtomicUsize::new(0),
            api_calls: AtomicUsize::new(0),
        })
    }

    fn respond(&self, request: &str) -> String {
        if request.starts_with("POST") {
            let exchange = self.auth_calls.fetch_add(1, Ordering::SeqCst) + 1;
            return if matches!(self.behavior, ApiBehavior::FailAuth) {
                http_response(
                    400,
                    "Bad Request",
                    r#"{"error":"invalid_grant","error_description":"The request has an invalid grant parameter"}"#,
                )
            } else {
                http_response(
                    200,
                    "OK",
                    &format!(r#"{{"access_token":"tok-{exchange}","token_type":"bearer","expires_in":3600}}"#),
                )
            };
        }

        self.api_calls.fetch_add(1, Ordering::SeqCst);
        let token = bearer_token(request);

        let rejected = match self.behavior {
            ApiBehavior::AcceptAll | ApiBehavior::FailAuth => false,
            ApiBehavior::RejectFirstToken => token.as_deref() == Some("tok-1"),
            ApiBehavior::RejectAll => true,
        };

        if rejected {
            http_response(401, "Unauthorized", r#"{"errors":[{"code":"Unauthorized"}]}"#)
        } else {
            http_response(
                200,
                "OK",
                r#"{"pagination":{},"payload":{"inventorySummaries":[{"asin":"A1"}]}}"#,
            )
        }
    }
}

fn bearer_token(request: &str) -> Option<String> {
    request.lines().find_map(|line| {
        let (name, value) = line.split_once(':')?;
        name.eq_ignore_ascii_case("x-amz-access-token")
            .then(|| value.trim().to_string())
    })
}

fn http_response(status: u16, reason: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
}

fn header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n").map(|p| p + 4)
}

fn content_length(head: &str) -> usize {
    head.lines()
        .find_map(|line| {
            line.to_ascii_lowercase()
                .strip_prefix("content-length:")
                .and_then(|v| v.trim().parse().ok())
        })
        .unwrap_or(0)
}

/// Serve scripted responses on an ephemeral port until the test ends.
async fn start_server(api: Arc<ScriptedApi>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            let api = api.clone();
            tokio::spawn(async move {
                let mut buf = Vec::new();
                let mut chunk = [0_u8; 1024];
                loop {
                    if let Some(end) = header_end(&buf) {
                        let head = String::from_utf8_lossy(&buf[..end]).to_string();
                        if buf.len() >= end + content_length(&head) {
                            break;
                        }
                    }
                    let Ok(n) = socket.read(&mut chunk).await else {
                        return;
                    };
                    if n == 0 {
                        break;
                    }
                    buf.extend_from_slice(&chunk[..n]);
                }

                let request = String::from_utf8_lossy(&buf).to_string();
                let response = api.respond(&request);
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    addr
}

fn config_for(addr: SocketAddr) -> SpApiConfig {
    SpApiConfig {
        endpoint: format!("http://{addr}"),
        auth_endpoint: format!("http://{addr}/auth/o2/token"),
        refresh_token: SecretString::from("refresh"),
        client_id: "client".to_string(),
        client_secret: SecretString::from("secret"),
        marketplace_id: "A1PA6795UKMFR9".to_string(),
        granularity_id: String::new(),
        last_updated_after: "2015-09-18T22:51:57.926Z".to_string(),
    }
}

#[tokio::test]
async fn token_is_exchanged_once_and_cached_across_requests() {
    let api = ScriptedApi::new(ApiBehavior::AcceptAll);
    let addr = start_server(api.clone()).await;

    let client = SpApiClient::new(config_for(addr)).unwrap();
    let pages = InventoryPages::new(client);

    let first = pages.fetch_page(None).await.unwrap();
    let second = pages.fetch_page(None).await.unwrap();

    assert_eq!(first.records.len(), 1);
    assert_eq!(second.records[0].asin.as_deref(), Some("A1"));
    assert_eq!(api.auth_calls.load(Ordering::SeqCst), 1);
    assert_eq!(api.api_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn rejected_token_is_reacquired_and_the_request_retried_once() {
    let api = ScriptedApi::new(ApiBehavior::RejectFirstToken);
    let addr = start_server(api.clone()).await;

    let client = SpApiClient::new(config_for(addr)).unwrap();
    let pages = InventoryPages::new(client);

    let page = pages.fetch_page(None).await.unwrap();

    assert_eq!(page.records.len(), 1);
    assert_eq!(api.auth_calls.load(Ordering::SeqCst), 2);
    assert_eq!(api.api_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn second_rejection_surfaces_as_unauthorized() {
    let api = ScriptedApi::new(ApiBehavior::RejectAll);
    let addr = start_server(api.clone()).await;

    let client = SpApiClient::new(config_for(addr)).unwrap();
    let pages = InventoryPages::new(client);

    let result = pages.fetch_page(None).await;

    assert!(matches!(result, Err(SpApiError::Unauthorized)));
    assert_eq!(api.api_calls.load(Ordering::SeqCst), 2);
    assert_eq!(api.auth_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn failed_exchange_is_an_authentication_error() {
    let api = ScriptedApi::new(ApiBehavior::FailAuth);
    let addr = start_server(api.clone()).await;

    let client = SpApiClient::new(config_for(addr)).unwrap();
    let pages = InventoryPages::new(client);

    let result = pages.fetch_page(None).await;

    match result {
        Err(SpApiError::AuthenticationFailed(message)) => {
            assert!(message.contains("invalid grant"));
        }
        other => panic!("expected AuthenticationFailed, got {other:?}"),
    }
    assert_eq!(api.api_calls.load(Ordering::SeqCst), 0);
}
