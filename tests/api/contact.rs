use std::sync::Arc;

use contact_relay::mail_gateway::{MailGateway, SmtpGateway};
use secrecy::SecretString;
use serde_json::json;

use crate::helpers::{StubGateway, spawn_app, spawn_app_with_config, test_configuration};

#[tokio::test]
async fn valid_submission_returns_200_with_the_gateway_message_id() {
    let stub = Arc::new(StubGateway::succeeding("ok-1"));
    let app = spawn_app(stub.clone()).await;

    let response = app
        .post_contact(&json!({
            "name": "A",
            "email": "a@b.com",
            "message": "Hi\nthere"
        }))
        .await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse body.");
    assert_eq!("Email sent successfully", body["message"]);
    assert_eq!("ok-1", body["messageId"]);
}

#[tokio::test]
async fn dispatched_email_replies_to_the_submitter_and_names_them() {
    let stub = Arc::new(StubGateway::succeeding("ok-1"));
    let app = spawn_app(stub.clone()).await;

    app.post_contact(&json!({
        "name": "Ursula",
        "email": "ursula@sea.com",
        "message": "Hi\nthere"
    }))
    .await;

    let envelope = stub.last_envelope().expect("No email was dispatched.");
    assert_eq!("ursula@sea.com", envelope.reply_to.as_ref());
    assert!(envelope.subject.contains("Ursula"));
    assert_eq!("noreply@test.invalid", envelope.from);
    assert_eq!("owner@test.invalid", envelope.to);
}

#[tokio::test]
async fn message_newlines_survive_in_text_and_become_line_breaks_in_html() {
    let stub = Arc::new(StubGateway::succeeding("ok-1"));
    let app = spawn_app(stub.clone()).await;

    app.post_contact(&json!({
        "name": "A",
        "email": "a@b.com",
        "message": "Hi\nthere"
    }))
    .await;

    let envelope = stub.last_envelope().expect("No email was dispatched.");
    assert!(envelope.text_body.contains("Hi\nthere"));
    assert!(envelope.html_body.contains("Hi<br>there"));
}

#[tokio::test]
async fn user_markup_is_escaped_in_the_html_body() {
    let stub = Arc::new(StubGateway::succeeding("ok-1"));
    let app = spawn_app(stub.clone()).await;

    app.post_contact(&json!({
        "name": "<script>alert(1)</script>",
        "email": "a@b.com",
        "message": "<img src=x onerror=alert(1)>"
    }))
    .await;

    let envelope = stub.last_envelope().expect("No email was dispatched.");
    assert!(!envelope.html_body.contains("<script>"));
    assert!(!envelope.html_body.contains("<img"));
}

#[tokio::test]
async fn missing_or_empty_fields_are_rejected_with_400() {
    let stub = Arc::new(StubGateway::succeeding("ok-1"));
    let app = spawn_app(stub.clone()).await;

    let cases = vec![
        (json!({"email": "a@b.com", "message": "hi"}), "missing name"),
        (json!({"name": "A", "message": "hi"}), "missing email"),
        (json!({"name": "A", "email": "a@b.com"}), "missing message"),
        (
            json!({"name": "", "email": "a@b.com", "message": "hi"}),
            "empty name",
        ),
        (
            json!({"name": "A", "email": "", "message": "hi"}),
            "empty email",
        ),
        (
            json!({"name": "A", "email": "a@b.com", "message": ""}),
            "empty message",
        ),
        (json!({}), "empty payload"),
    ];

    for (body, case) in cases {
        let response = app.post_contact(&body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not return 400 when the payload was {case}.",
        );
        let body: serde_json::Value = response.json().await.expect("Failed to parse body.");
        assert_eq!("All fields are required", body["error"]);
    }

    assert_eq!(0, stub.dispatch_count());
}

#[tokio::test]
async fn unparseable_bodies_are_rejected_with_a_structured_json_error() {
    let stub = Arc::new(StubGateway::succeeding("ok-1"));
    let app = spawn_app(stub.clone()).await;

    let response = reqwest::Client::new()
        .post(format!("{}/contact", app.address))
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(400, response.status().as_u16());
    let body: serde_json::Value = response
        .json()
        .await
        .expect("The error response was not a JSON object.");
    assert!(body["error"].is_string());
    assert_eq!(0, stub.dispatch_count());
}

#[tokio::test]
async fn malformed_email_addresses_are_rejected_with_400() {
    let stub = Arc::new(StubGateway::succeeding("ok-1"));
    let app = spawn_app(stub.clone()).await;

    for email in ["noatsign.com", "a@b", "a b@c.com"] {
        let response = app
            .post_contact(&json!({
                "name": "A",
                "email": email,
                "message": "hi"
            }))
            .await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not return 400 for email {email}.",
        );
        let body: serde_json::Value = response.json().await.expect("Failed to parse body.");
        assert_eq!("Invalid email format", body["error"]);
    }

    assert_eq!(0, stub.dispatch_count());
}

#[tokio::test]
async fn missing_smtp_configuration_yields_500_on_every_request() {
    let mut config = test_configuration();
    config.smtp.password = SecretString::from(String::new());
    let gateway: Arc<dyn MailGateway> = Arc::new(SmtpGateway::new(config.smtp.clone()));
    let app = spawn_app_with_config(config, gateway).await;

    for _ in 0..2 {
        let response = app
            .post_contact(&json!({
                "name": "A",
                "email": "a@b.com",
                "message": "hi"
            }))
            .await;

        assert_eq!(500, response.status().as_u16());
        let body: serde_json::Value = response.json().await.expect("Failed to parse body.");
        assert_eq!("SMTP configuration is missing", body["error"]);
    }
}

#[tokio::test]
async fn gateway_failures_surface_as_500_with_the_gateway_error_text() {
    let stub = Arc::new(StubGateway::failing("boom"));
    let app = spawn_app(stub.clone()).await;

    let response = app
        .post_contact(&json!({
            "name": "A",
            "email": "a@b.com",
            "message": "hi"
        }))
        .await;

    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse body.");
    assert_eq!("boom", body["error"]);
}
