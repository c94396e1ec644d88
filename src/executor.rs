use std::time::Duration;

use reqwest::StatusCode;

use crate::error::ProbeError;

/// Status and body text of a response that made it back over the wire.
#[derive(Debug, Clone)]
pub struct HttpReply {
    pub url: String,
    pub status: StatusCode,
    pub body: String,
}

impl HttpReply {
    /// 4xx/5xx; redirects are followed by the client, other statuses pass.
    pub fn is_error_status(&self) -> bool {
        self.status.is_client_error() || self.status.is_server_error()
    }

    pub fn status_error(&self) -> ProbeError {
        ProbeError::HttpStatus {
            url: self.url.clone(),
            status: self.status.as_u16(),
            reason: self.status.canonical_reason().unwrap_or(""),
        }
    }
}

/// Sends a single GET with a fixed timeout.
///
/// Certificate verification is switched off so self-signed and broken TLS
/// setups can still be poked at. This is a debugging aid and must not be used
/// with anything sensitive.
pub struct RequestExecutor {
    client: reqwest::Client,
}

impl RequestExecutor {
    pub fn new(timeout: Duration) -> Result<Self, ProbeError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(true)
            .build()
            .map_err(|e| ProbeError::Internal(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// One GET, no retries. Transport failures (DNS, refused, timeout, broken
    /// body) become `ProbeError::Network`; any status is handed back as-is.
    pub async fn get(&self, url: &str) -> Result<HttpReply, ProbeError> {
        let network = |err| ProbeError::Network {
            url: url.to_string(),
            detail: describe_transport_error(err),
        };

        let response = self.client.get(url).send().await.map_err(network)?;
        let status = response.status();
        let body = response.text().await.map_err(network)?;

        tracing::debug!(status = status.as_u16(), bytes = body.len(), "response received");

        Ok(HttpReply {
            url: url.to_string(),
            status,
            body,
        })
    }
}

/// "request timed out: error sending request: operation timed out" and the
/// like: a short label, then the reqwest error and its causes, URL stripped.
fn describe_transport_error(err: reqwest::Error) -> String {
    let label = if err.is_timeout() {
        "request timed out"
    } else if err.is_connect() {
        "could not connect"
    } else if err.is_body() || err.is_decode() {
        "failed to read response body"
    } else {
        "request failed"
    };

    let err = err.without_url();
    let mut causes = vec![err.to_string()];
    let mut source = std::error::Error::source(&err);
    while let Some(cause) = source {
        let text = cause.to_string();
        if !causes.contains(&text) {
            causes.push(text);
        }
        source = std::error::Error::source(cause);
    }

    format!("{label}: {}", causes.join(": "))
}
