use std::sync::{Arc, PoisonError, RwLock};

use crate::{
    ContactSubmission, FAILURE_MESSAGE, SubmissionOutcome, SubmissionState, Transport,
};

/// One contact form's submission lifecycle.
///
/// Clones share the same state slot. Overlapping calls to [`Workflow::submit`]
/// are not serialized: each posts independently and the last one to finish
/// decides the state.
#[derive(Debug, Clone)]
pub struct Workflow<T> {
    transport: T,
    state: Arc<RwLock<SubmissionState>>,
}

impl<T: Transport> Workflow<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            state: Arc::default(),
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Posts the submission once and settles on `Sent` or `Failed`.
    ///
    /// Never errors: transport failures are logged and reported to the
    /// visitor as [`FAILURE_MESSAGE`].
    #[tracing::instrument(skip_all)]
    pub async fn submit(&self, fields: ContactSubmission) -> SubmissionOutcome {
        self.set(SubmissionState::Submitting);

        let outcome = match self.transport.post_json(&fields.payload()).await {
            Ok(()) => {
                tracing::info!("contact message delivered");
                SubmissionOutcome::Sent
            }
            Err(err) => {
                tracing::warn!(error = %err, "contact message not delivered");
                SubmissionOutcome::Failed(FAILURE_MESSAGE.to_owned())
            }
        };

        self.set(outcome.clone().into());

        outcome
    }

    fn set(&self, state: SubmissionState) {
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = state;
    }
}
