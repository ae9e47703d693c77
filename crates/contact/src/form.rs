use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::ContactSubmission;

const FIELD_ORDER: [&str; 4] = ["name", "email", "phone", "message"];

/// Raw contact form as posted by the browser.
///
/// Field constraints mirror the form controls: `name` and `email` are
/// required, `email` must look like an address. Values are kept verbatim.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct ContactForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Please enter your name."))]
    pub name: String,
    #[serde(default)]
    #[validate(
        length(min = 1, message = "Please enter your email address."),
        email(message = "Please enter a valid email address.")
    )]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, rename = "company")]
    pub honeypot: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl ContactForm {
    /// Checks the required fields, returning one error per failing field.
    pub fn check(&self) -> Result<(), Vec<FieldError>> {
        self.validate().map_err(field_errors)
    }

    pub fn into_submission(self) -> Result<ContactSubmission, Vec<FieldError>> {
        self.check()?;

        Ok(ContactSubmission {
            name: self.name,
            email: self.email,
            phone: self.phone,
            message: self.message,
            honeypot: self.honeypot,
        })
    }
}

fn field_errors(errors: ValidationErrors) -> Vec<FieldError> {
    let mut fields = errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errors)| {
            let message = errors
                .iter()
                .find_map(|e| e.message.as_ref().map(|m| m.to_string()))?;

            Some(FieldError {
                field: field.to_string(),
                message,
            })
        })
        .collect::<Vec<_>>();

    fields.sort_by_key(|e| {
        FIELD_ORDER
            .iter()
            .position(|f| *f == e.field)
            .unwrap_or(FIELD_ORDER.len())
    });

    fields
}
