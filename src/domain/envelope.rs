use super::ContactEmail;

/// The composed outbound email handed to the mail gateway. Reply-to points at
/// the submitter so the site owner can answer directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub from: String,
    pub to: String,
    pub reply_to: ContactEmail,
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}
