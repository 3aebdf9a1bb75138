pub mod configuration;
pub mod domain;
pub mod mail_gateway;
pub mod routes;
pub mod startup;
pub mod telemetry;
