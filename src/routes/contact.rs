use axum::{
    extract::{Form, State, rejection::FormRejection},
    http::StatusCode,
    response::IntoResponse,
};
use campos_contact::{ContactForm, FieldError, SubmissionState, Workflow};

use crate::{
    routes::AppState,
    template::{Layout, Template},
};

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub layout: Layout,
    pub form: ContactForm,
    pub errors: Vec<FieldError>,
    pub state: SubmissionState,
}

impl ContactTemplate {
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(ContactTemplate {
        layout: template.layout(),
        form: ContactForm::default(),
        errors: Vec::new(),
        state: SubmissionState::Idle,
    })
}

/// Shown above the form when the posted body can't be read as form fields.
pub const UNREADABLE_FORM_MESSAGE: &str =
    "We couldn't read that submission. Please check the form and try again.";

pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    form: Result<Form<ContactForm>, FormRejection>,
) -> impl IntoResponse {
    let input = match form {
        Ok(Form(input)) => input,
        Err(rejection) => {
            tracing::debug!(err = %rejection, "unreadable contact form body");

            return template.render_with_status(
                StatusCode::UNPROCESSABLE_ENTITY,
                ContactTemplate {
                    layout: template.layout(),
                    form: ContactForm::default(),
                    errors: vec![FieldError {
                        field: "form".to_owned(),
                        message: UNREADABLE_FORM_MESSAGE.to_owned(),
                    }],
                    state: SubmissionState::Idle,
                },
            );
        }
    };

    let submission = match input.clone().into_submission() {
        Ok(submission) => submission,
        Err(errors) => {
            return template.render_with_status(
                StatusCode::UNPROCESSABLE_ENTITY,
                ContactTemplate {
                    layout: template.layout(),
                    form: input,
                    errors,
                    state: SubmissionState::Idle,
                },
            );
        }
    };

    let workflow = Workflow::new(app_state.transport.clone());
    let outcome = workflow.submit(submission).await;

    // A sent message clears the form, a failed one keeps what was typed
    let form = if outcome.is_sent() {
        ContactForm::default()
    } else {
        input
    };

    template.render(ContactTemplate {
        layout: template.layout(),
        form,
        errors: Vec::new(),
        state: outcome.into(),
    })
}
