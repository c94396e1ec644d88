use thiserror::Error;

/// Coarse category of a failed probe, in the order the classifier checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    EmptyInput,
    UrlConstruction,
    Network,
    NonJson,
    InvalidKey,
    UnexpectedResponse,
    Internal,
}

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("{field} cannot be empty.")]
    EmptyInput { field: &'static str },

    #[error(
        "Error constructing URL with API key: {source}. \
         Please check Base URL ({base_url}) and Key Parameter Name ({param_name})."
    )]
    UrlConstruction {
        base_url: String,
        param_name: String,
        #[source]
        source: url::ParseError,
    },

    /// `detail` names the transport cause (timeout, refused, DNS) without the URL.
    #[error("Network or HTTP error: {detail}\nAttempted URL: {url}")]
    Network { url: String, detail: String },

    #[error("Network or HTTP error: HTTP status {status} {reason}\nAttempted URL: {url}")]
    HttpStatus {
        url: String,
        status: u16,
        reason: &'static str,
    },

    #[error(
        "API returned unreadable data (not valid JSON format).\nAttempted URL: {url}\n\n\
         Response Content Snippet:\n{snippet}..."
    )]
    NonJson { url: String, snippet: String },

    #[error("Invalid API Key: the service explicitly says the key is invalid.")]
    InvalidKey,

    #[error("API Key validation failed with unexpected response (HTTP {status}): {message}")]
    UnexpectedResponse { status: u16, message: String },

    #[error("An unexpected internal error occurred: {0}")]
    Internal(String),
}

impl ProbeError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ProbeError::EmptyInput { .. } => FailureKind::EmptyInput,
            ProbeError::UrlConstruction { .. } => FailureKind::UrlConstruction,
            ProbeError::Network { .. } | ProbeError::HttpStatus { .. } => FailureKind::Network,
            ProbeError::NonJson { .. } => FailureKind::NonJson,
            ProbeError::InvalidKey => FailureKind::InvalidKey,
            ProbeError::UnexpectedResponse { .. } => FailureKind::UnexpectedResponse,
            ProbeError::Internal(_) => FailureKind::Internal,
        }
    }

    /// Troubleshooting text shown under the failure detail in the tester.
    pub fn hint(&self) -> Option<&'static str> {
        match self.kind() {
            FailureKind::Network => Some(
                "- Ensure the URL is correct and accessible.\n\
                 - Check your internet connection.\n\
                 - Verify the API key is correct for the API's endpoint and method \
                 (e.g., query parameter name).\n\
                 - The API might require authentication via headers \
                 (not supported by this simple tool).",
            ),
            FailureKind::NonJson => Some(
                "- This API might not return JSON, or it returned an error page. \
                 Try opening the URL in a browser.",
            ),
            FailureKind::UrlConstruction => Some(
                "- The Base URL must be absolute, including the scheme (https://...).",
            ),
            _ => None,
        }
    }
}
