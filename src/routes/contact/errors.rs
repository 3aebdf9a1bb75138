use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use super::super::helpers::error_chain_fmt;
use super::types::ErrorBody;
use crate::mail_gateway::GatewayError;

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error("{0}")]
    ValidationError(String),
    #[error("SMTP configuration is missing")]
    ConfigurationError,
    #[error(transparent)]
    DispatchError(anyhow::Error),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl From<GatewayError> for ContactError {
    fn from(e: GatewayError) -> Self {
        match e {
            GatewayError::Configuration => ContactError::ConfigurationError,
            GatewayError::Dispatch(e) => ContactError::DispatchError(e),
        }
    }
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ContactError::ConfigurationError
            | ContactError::DispatchError(_)
            | ContactError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        let mut error = self.to_string();
        if error.is_empty() {
            error = "Internal server error".into();
        }

        HttpResponse::build(self.status_code()).json(ErrorBody { error })
    }
}
