use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::ServiceError;
use crate::translator::{raw_status_line, translate_status, translate_transport};

/// Error bodies are only mined for a short message; the rest is never read.
const MAX_ERROR_BODY_BYTES: usize = 16 * 1024;

/// Shared HTTP client; connect and per-request timeouts apply to every backend call.
pub fn build_http_client(connect_timeout: Duration, request_timeout: Duration) -> anyhow::Result<Client> {
    let client = Client::builder()
        .connect_timeout(connect_timeout)
        .timeout(request_timeout)
        .build()?;
    Ok(client)
}

/// One backend endpoint: a name for logs/metrics, an immutable base URL and the
/// shared connection pool. A single attempt per call, no retries.
#[derive(Clone, Debug)]
pub struct BackendClient {
    name: &'static str,
    base_url: String,
    http: Client,
}

impl BackendClient {
    pub fn new(name: &'static str, base_url: impl Into<String>, http: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { name, base_url, http }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `url` and decode the JSON body; failures go through the error translator.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ServiceError> {
        debug!(backend = self.name, %url, "will call the backend API");
        let result = self.send_get(url).await;
        let outcome = match &result {
            Ok(_) => "ok",
            Err(e) => e.kind(),
        };
        common::observability::record_backend_call(self.name, outcome);
        result
    }

    async fn send_get<T: DeserializeOwned>(&self, url: &str) -> Result<T, ServiceError> {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| translate_transport(&e))?;

        let status = resp.status();
        if !status.is_success() {
            let raw = raw_status_line(status, "GET", url);
            let body = read_error_body(resp, MAX_ERROR_BODY_BYTES).await;
            return Err(translate_status(status, &body, &raw));
        }

        resp.json::<T>().await.map_err(|e| translate_transport(&e))
    }
}

/// Read at most `limit` bytes of a failed response. A broken stream yields
/// whatever arrived before it broke.
async fn read_error_body(mut resp: reqwest::Response, limit: usize) -> String {
    let mut buf: Vec<u8> = Vec::new();
    while buf.len() < limit {
        match resp.chunk().await {
            Ok(Some(chunk)) => {
                let take = chunk.len().min(limit - buf.len());
                buf.extend_from_slice(&chunk[..take]);
            }
            Ok(None) | Err(_) => break,
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}
