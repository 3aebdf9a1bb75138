mod contact_email;
mod contact_submission;
mod envelope;

pub use contact_email::ContactEmail;
pub use contact_submission::ContactSubmission;
pub use envelope::Envelope;
