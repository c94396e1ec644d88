use crate::error::{FailureKind, ProbeError};

/// Result of one probe, ready to be written into the output area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success {
        body: String,
    },
    Failure {
        kind: FailureKind,
        detail: String,
        hint: Option<&'static str>,
    },
}

impl Outcome {
    pub fn success(body: impl Into<String>) -> Self {
        Outcome::Success { body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Outcome::Success { .. } => None,
            Outcome::Failure { kind, .. } => Some(*kind),
        }
    }
}

impl From<ProbeError> for Outcome {
    fn from(err: ProbeError) -> Self {
        Outcome::Failure {
            kind: err.kind(),
            hint: err.hint(),
            detail: err.to_string(),
        }
    }
}

impl From<Result<String, ProbeError>> for Outcome {
    fn from(result: Result<String, ProbeError>) -> Self {
        match result {
            Ok(body) => Outcome::success(body),
            Err(err) => Outcome::from(err),
        }
    }
}
