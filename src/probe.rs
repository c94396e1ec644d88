//! The two end-to-end operations behind the tools' trigger buttons.

use std::time::Duration;

use crate::classify::{classify_json_reply, classify_key_reply};
use crate::config::ValidatorConfig;
use crate::error::ProbeError;
use crate::executor::RequestExecutor;
use crate::outcome::Outcome;
use crate::url_builder::build_request_url;

/// What the user asked the tester to fetch. Empty strings mean "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiRequest {
    pub base_url: String,
    pub api_key: String,
    pub key_param: String,
}

impl ApiRequest {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        key_param: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim().to_string(),
            api_key: api_key.into().trim().to_string(),
            key_param: key_param.into().trim().to_string(),
        }
    }

    pub fn final_url(&self) -> Result<String, ProbeError> {
        build_request_url(
            &self.base_url,
            Some(self.api_key.as_str()),
            Some(self.key_param.as_str()),
        )
    }
}

/// Generic tester: GET the URL (with the key injected) and pretty-print the
/// JSON that comes back.
pub async fn run_api_request(request: &ApiRequest, timeout: Duration) -> Outcome {
    let outcome = Outcome::from(fetch_json(request, timeout).await);
    log_outcome("api request", &outcome);
    outcome
}

async fn fetch_json(request: &ApiRequest, timeout: Duration) -> Result<String, ProbeError> {
    if request.base_url.is_empty() {
        return Err(ProbeError::EmptyInput { field: "API URL" });
    }
    let url = request.final_url()?;

    tracing::info!(
        base_url = %request.base_url,
        key_param = %request.key_param,
        with_key = !request.api_key.is_empty(),
        "sending API request"
    );

    let executor = RequestExecutor::new(timeout)?;
    let reply = executor.get(&url).await?;
    classify_json_reply(&reply)
}

/// Key validator: probe the configured endpoint with `api_key`.
pub async fn run_key_validation(api_key: &str, config: &ValidatorConfig) -> Outcome {
    let outcome = Outcome::from(validate_key(api_key.trim(), config).await);
    log_outcome("key validation", &outcome);
    outcome
}

async fn validate_key(api_key: &str, config: &ValidatorConfig) -> Result<String, ProbeError> {
    if api_key.is_empty() {
        return Err(ProbeError::EmptyInput { field: "API Key" });
    }
    let url = build_request_url(&config.probe_url, Some(api_key), Some(&config.key_param))?;

    tracing::info!(probe_url = %config.probe_url, "validating API key");

    let executor = RequestExecutor::new(config.timeout)?;
    let reply = executor.get(&url).await?;
    classify_key_reply(&reply).map(|verdict| verdict.message().to_string())
}

fn log_outcome(operation: &str, outcome: &Outcome) {
    match outcome.failure_kind() {
        None => tracing::info!("{operation} succeeded"),
        Some(kind) => tracing::warn!(?kind, "{operation} failed"),
    }
}
