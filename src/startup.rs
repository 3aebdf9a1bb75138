use std::net::TcpListener;
use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::mail_gateway::{MailGateway, SmtpGateway};
use crate::routes::{ContactError, health_check, send_message};

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(config: Settings) -> Result<Self, anyhow::Error> {
        // The same check runs again on every dispatch; this one only gives
        // operators an early signal.
        if !config.smtp.is_complete() {
            tracing::warn!(
                "SMTP configuration is incomplete; contact submissions will be rejected."
            );
        }

        let gateway: Arc<dyn MailGateway> = Arc::new(SmtpGateway::new(config.smtp.clone()));

        let address = format!("{}:{}", config.app.host, config.app.port);
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, gateway, config)?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    gateway: Arc<dyn MailGateway>,
    config: Settings,
) -> Result<Server, anyhow::Error> {
    let gateway = web::Data::new(gateway);
    let smtp = web::Data::new(config.smtp);

    let server = HttpServer::new(move || {
        // Unparseable bodies must still answer with the structured error
        // object, not the extractor's plain-text default.
        let json_config = web::JsonConfig::default()
            .error_handler(|err, _req| ContactError::ValidationError(err.to_string()).into());

        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .route("/contact", web::post().to(send_message))
            .app_data(json_config)
            .app_data(gateway.clone())
            .app_data(smtp.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
