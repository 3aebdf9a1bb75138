use super::super::helpers::prepare_html_template;
use crate::configuration::SmtpSettings;
use crate::domain::{ContactSubmission, Envelope};

pub fn build_envelope(
    submission: &ContactSubmission,
    smtp: &SmtpSettings,
) -> anyhow::Result<Envelope> {
    Ok(Envelope {
        from: smtp.sender().to_owned(),
        to: smtp.recipient().to_owned(),
        reply_to: submission.email.clone(),
        subject: format!("New Contact Form Message from {}", submission.name),
        html_body: get_notification_html(submission)?,
        text_body: get_notification_text(submission),
    })
}

pub fn get_notification_text(submission: &ContactSubmission) -> String {
    format!(
        "
        New Contact Form Submission

        Name: {name}
        Email: {email}

        Message:
        {message}
    ",
        name = submission.name,
        email = submission.email.as_ref(),
        message = submission.message,
    )
}

pub fn get_notification_html(submission: &ContactSubmission) -> anyhow::Result<String> {
    // Escaped here rather than in the template so the <br> markup added for
    // newlines survives; the template renders it with `safe`.
    let message = tera::escape_html(&submission.message).replace('\n', "<br>");

    prepare_html_template(
        &[
            ("name", submission.name.as_str()),
            ("email", submission.email.as_ref()),
            ("message", message.as_str()),
        ],
        "contact_notification.html",
    )
}
