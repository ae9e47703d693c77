//! Contact submission workflow.
//!
//! A visitor's form is checked by [`ContactForm`], turned into a
//! [`ContactSubmission`] and handed to a [`Workflow`], which posts the
//! JSON payload through a [`Transport`] and settles on [`SubmissionState::Sent`]
//! or [`SubmissionState::Failed`].

mod form;
mod transport;
mod types;
mod workflow;

pub use form::{ContactForm, FieldError};
pub use transport::{HttpTransport, Transport, TransportError};
pub use types::{ContactPayload, ContactSubmission, SubmissionOutcome, SubmissionState};
pub use workflow::Workflow;

/// Shown to the visitor whenever a submission fails, whatever the cause.
pub const FAILURE_MESSAGE: &str =
    "Something went wrong. Please try again or use an alternate contact method.";
