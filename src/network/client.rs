//! HTTP client wrapper - downloads and decodes the country list

use std::time::{Duration, Instant};

use futures_util::StreamExt;
use tokio::sync::mpsc;

use crate::messages::NetworkResponse;
use crate::models::Country;

/// Download the country list, reporting progress as chunks arrive
pub async fn fetch_countries(
    client: &reqwest::Client,
    url: &str,
    request_id: u64,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
) {
    let start = Instant::now();
    let elapsed = move || start.elapsed().as_millis() as u64;

    let resp = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            let _ = response_tx.send(NetworkResponse::Error {
                id: request_id,
                message: describe_error(&e),
                time_ms: elapsed(),
            });
            return;
        }
    };

    let status = resp.status();
    if !status.is_success() {
        let _ = response_tx.send(NetworkResponse::Error {
            id: request_id,
            message: format!("Unexpected status {}", status),
            time_ms: elapsed(),
        });
        return;
    }

    let mut stream = resp.bytes_stream();
    let mut body: Vec<u8> = Vec::new();

    while let Some(chunk) = stream.next().await {
        match chunk {
            Ok(bytes) => {
                body.extend_from_slice(&bytes);
                let _ = response_tx.send(NetworkResponse::Progress {
                    id: request_id,
                    bytes_received: body.len(),
                });
            }
            Err(e) => {
                let _ = response_tx.send(NetworkResponse::Error {
                    id: request_id,
                    message: format!("Stream error: {}", e),
                    time_ms: elapsed(),
                });
                return;
            }
        }
    }

    let result = match decode_countries(&body) {
        Ok(countries) => NetworkResponse::Countries {
            id: request_id,
            countries,
            time_ms: elapsed(),
        },
        Err(message) => NetworkResponse::Error {
            id: request_id,
            message,
            time_ms: elapsed(),
        },
    };
    let _ = response_tx.send(result);
}

/// Decode the endpoint's JSON array into countries
pub fn decode_countries(body: &[u8]) -> Result<Vec<Country>, String> {
    serde_json::from_slice(body).map_err(|e| format!("Invalid country list: {}", e))
}

fn describe_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "Request timed out".to_string()
    } else if e.is_connect() {
        format!("Connection failed: {}", e)
    } else {
        format!("Request failed: {}", e)
    }
}

/// Create an HTTP client. No timeout unless one is configured.
pub fn create_client(timeout: Option<Duration>) -> reqwest::Client {
    let mut builder = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().unwrap_or_else(|_| reqwest::Client::new())
}
