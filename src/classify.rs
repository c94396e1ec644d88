//! Turns an [`HttpReply`] into a verdict for each tool.

use reqwest::StatusCode;
use serde_json::Value;

use crate::error::ProbeError;
use crate::executor::HttpReply;

/// How much of a non-JSON body is echoed back to the user.
pub const SNIPPET_CHARS: usize = 500;

/// Why the validator considers a key good.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyVerdict {
    /// 404 "city not found": the key was accepted and the bogus city missed.
    ValidResourceAbsent,
    /// Plain 200.
    Valid,
}

impl KeyVerdict {
    pub fn message(self) -> &'static str {
        match self {
            KeyVerdict::ValidResourceAbsent => {
                "API Key is valid. (Test city not found as expected)."
            }
            KeyVerdict::Valid => {
                "API Key is valid. (Unexpected 200 OK for test city, but key seems active)."
            }
        }
    }
}

/// Generic tester: error statuses fail, anything else must be JSON and is
/// returned pretty-printed with two-space indentation.
pub fn classify_json_reply(reply: &HttpReply) -> Result<String, ProbeError> {
    if reply.is_error_status() {
        return Err(reply.status_error());
    }
    let value: Value = serde_json::from_str(&reply.body).map_err(|_| non_json(reply))?;
    serde_json::to_string_pretty(&value)
        .map_err(|e| ProbeError::Internal(format!("failed to format JSON: {e}")))
}

/// Key validator. The body is read before the status is judged so the
/// service's own "invalid api key" / "city not found" messages win over the
/// bare status code.
pub fn classify_key_reply(reply: &HttpReply) -> Result<KeyVerdict, ProbeError> {
    let value: Value = match serde_json::from_str(&reply.body) {
        Ok(value) => value,
        Err(_) if reply.is_error_status() => return Err(reply.status_error()),
        Err(_) => return Err(non_json(reply)),
    };

    let message = value
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let lowered = message.to_lowercase();

    if lowered.contains("invalid api key") {
        return Err(ProbeError::InvalidKey);
    }
    if lowered.contains("city not found") && reply.status == StatusCode::NOT_FOUND {
        return Ok(KeyVerdict::ValidResourceAbsent);
    }
    if reply.status == StatusCode::OK {
        return Ok(KeyVerdict::Valid);
    }
    if reply.is_error_status() {
        return Err(reply.status_error());
    }

    Err(ProbeError::UnexpectedResponse {
        status: reply.status.as_u16(),
        message: if message.is_empty() {
            "Unknown error".to_string()
        } else {
            message.to_string()
        },
    })
}

fn non_json(reply: &HttpReply) -> ProbeError {
    ProbeError::NonJson {
        url: reply.url.clone(),
        snippet: reply.body.chars().take(SNIPPET_CHARS).collect(),
    }
}
