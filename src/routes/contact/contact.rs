use std::sync::Arc;

use actix_web::{HttpResponse, web};

use crate::configuration::SmtpSettings;
use crate::domain::ContactSubmission;
use crate::mail_gateway::MailGateway;

use super::{
    errors::ContactError,
    helpers::build_envelope,
    types::{ContactPayload, SendConfirmation},
};

#[tracing::instrument(
    name = "Relaying a contact form submission.",
    skip(payload, gateway, smtp),
    fields(
        submitter_email = %payload.email,
        submitter_name = %payload.name
    )
)]
pub async fn send_message(
    payload: web::Json<ContactPayload>,
    gateway: web::Data<Arc<dyn MailGateway>>,
    smtp: web::Data<SmtpSettings>,
) -> Result<HttpResponse, ContactError> {
    let submission: ContactSubmission = payload
        .into_inner()
        .try_into()
        .map_err(ContactError::ValidationError)?;

    let envelope = build_envelope(&submission, &smtp)?;
    let message_id = gateway.send(envelope).await?;

    Ok(HttpResponse::Ok().json(SendConfirmation {
        message: "Email sent successfully".into(),
        message_id,
    }))
}
