use serde::Serialize;
use strum::{AsRefStr, Display};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    /// Hidden anti-spam field. Kept for completeness, never forwarded.
    pub honeypot: String,
}

impl ContactSubmission {
    pub fn payload(&self) -> ContactPayload<'_> {
        ContactPayload {
            name: &self.name,
            email: &self.email,
            phone: &self.phone,
            message: &self.message,
        }
    }
}

/// JSON body sent to the contact endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactPayload<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub message: &'a str,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Display, AsRefStr)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Sent,
    #[strum(to_string = "Failed")]
    Failed(String),
}

impl SubmissionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, SubmissionState::Idle)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    pub fn is_sent(&self) -> bool {
        matches!(self, SubmissionState::Sent)
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Sent,
    Failed(String),
}

impl SubmissionOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, SubmissionOutcome::Sent)
    }
}

impl From<SubmissionOutcome> for SubmissionState {
    fn from(outcome: SubmissionOutcome) -> Self {
        match outcome {
            SubmissionOutcome::Sent => SubmissionState::Sent,
            SubmissionOutcome::Failed(reason) => SubmissionState::Failed(reason),
        }
    }
}
