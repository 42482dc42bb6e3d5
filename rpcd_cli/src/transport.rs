//! `reqwest` transport for the shared API client.

use reqwest::header::CONTENT_TYPE;
use rpcd::{Method, RawReply, Transport, REQUEST_TIMEOUT};

pub struct ReqwestTransport {
    client: reqwest::Client,
    secure: bool,
}

impl ReqwestTransport {
    /// `base` only decides whether the unreachable hint mentions HTTPS.
    pub fn new(base: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Cannot configure HTTP client ({}), requests are unbounded", e);
                reqwest::Client::new()
            });
        Self {
            client,
            secure: base.starts_with("https://"),
        }
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, method: Method, url: &str, body: Option<String>) -> RawReply {
        let request = match method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url).header(CONTENT_TYPE, "application/json"),
        };
        let request = match body {
            Some(body) => request.body(body),
            None => request,
        };

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("{} {} failed: {}", method, url, e);
                return RawReply::unreachable();
            }
        };

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default();
        match response.text().await {
            Ok(body) => RawReply::new(status.as_u16(), status_text, body),
            Err(e) => {
                tracing::debug!("{} {}: cannot read body: {}", method, url, e);
                RawReply::new(status.as_u16(), status_text, String::new())
            }
        }
    }

    fn secure_origin(&self) -> bool {
        self.secure
    }
}
