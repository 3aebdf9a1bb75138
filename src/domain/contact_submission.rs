use super::ContactEmail;
use crate::routes::ContactPayload;

/// A validated contact form submission. Lives for one request only; never
/// persisted.
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub name: String,
    pub email: ContactEmail,
    pub message: String,
}

impl TryFrom<ContactPayload> for ContactSubmission {
    type Error = String;

    fn try_from(payload: ContactPayload) -> Result<Self, Self::Error> {
        let ContactPayload {
            name,
            email,
            message,
        } = payload;

        // All three fields are checked together; the error is deliberately
        // not field-specific.
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err("All fields are required".into());
        }

        let email =
            ContactEmail::parse(email).map_err(|_| "Invalid email format".to_string())?;

        Ok(Self {
            name,
            email,
            message,
        })
    }
}
