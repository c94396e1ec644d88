//! Output area and control state shared by both windows.
//!
//! A request moves the presenter from [`Phase::Idle`] to [`Phase::Requesting`]
//! and back; there are no other states.

use crate::outcome::Outcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Requesting,
}

/// Wording and behaviour that differ between the two tools.
#[derive(Debug, Clone, Copy)]
pub struct PresenterStyle {
    pub pending: &'static str,
    pub success_prefix: &'static str,
    pub success_suffix: &'static str,
    pub failure_prefix: &'static str,
    pub failure_suffix: &'static str,
    /// Append the error's troubleshooting hint to failures.
    pub show_hints: bool,
    /// Lock the clear button while a request is running.
    pub lock_clear: bool,
    /// Raise a modal alert with this text when a request fails.
    pub failure_alert: Option<&'static str>,
}

pub const TESTER_STYLE: PresenterStyle = PresenterStyle {
    pending: "Making API request... Please wait.\n",
    success_prefix: "API Response (JSON):\n\n",
    success_suffix: "",
    failure_prefix: "API Request Failed:\n\n",
    failure_suffix: "",
    show_hints: true,
    lock_clear: true,
    failure_alert: Some("Failed to retrieve API response. See output area for details."),
};

pub const VALIDATOR_STYLE: PresenterStyle = PresenterStyle {
    pending: "Validating API Key...\n",
    success_prefix: "Validation Successful: ",
    success_suffix: "\n\nAPI Key is considered valid for use.",
    failure_prefix: "Validation Failed: ",
    failure_suffix: "\n\nAPI Key is NOT valid or a connection/certificate error occurred. \
                     It will not be used.",
    show_hints: false,
    lock_clear: false,
    failure_alert: None,
};

#[derive(Debug)]
pub struct Presenter {
    style: PresenterStyle,
    phase: Phase,
    output: String,
    alert: Option<&'static str>,
}

impl Presenter {
    pub fn new(style: PresenterStyle) -> Self {
        Self {
            style,
            phase: Phase::Idle,
            output: String::new(),
            alert: None,
        }
    }

    /// Switch to `Requesting`: wipe the output, show the pending notice and
    /// lock the controls. Returns `false` if a request is already running.
    pub fn begin(&mut self) -> bool {
        if self.phase == Phase::Requesting {
            return false;
        }
        self.phase = Phase::Requesting;
        self.alert = None;
        self.output.clear();
        self.output.push_str(self.style.pending);
        true
    }

    pub fn finish(&mut self, outcome: &Outcome) {
        self.phase = Phase::Idle;
        self.output.clear();
        match outcome {
            Outcome::Success { body } => {
                self.output.push_str(self.style.success_prefix);
                self.output.push_str(body);
                self.output.push_str(self.style.success_suffix);
            }
            Outcome::Failure { detail, hint, .. } => {
                self.output.push_str(self.style.failure_prefix);
                self.output.push_str(detail);
                if let Some(hint) = hint.filter(|_| self.style.show_hints) {
                    self.output.push_str("\n\nTroubleshooting:\n");
                    self.output.push_str(hint);
                }
                self.output.push_str(self.style.failure_suffix);
                self.alert = self.style.failure_alert;
            }
        }
    }

    /// Reset output and any pending alert; the phase goes back to `Idle`.
    pub fn clear(&mut self) {
        self.phase = Phase::Idle;
        self.output.clear();
        self.alert = None;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn trigger_enabled(&self) -> bool {
        self.phase == Phase::Idle
    }

    pub fn clear_enabled(&self) -> bool {
        !(self.style.lock_clear && self.phase == Phase::Requesting)
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn alert(&self) -> Option<&'static str> {
        self.alert
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}
