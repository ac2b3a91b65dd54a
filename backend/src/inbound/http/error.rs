//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to return it with `?`. The mapping renders a minimal plain-text
//! body; internal failure detail is logged server-side and redacted from
//! the response.

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};
use tracing::error;

use crate::domain::{DomainError, ErrorCode};

/// Response-side wrapper carrying a [`DomainError`] out of a handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageError(DomainError);

impl PageError {
    /// The wrapped domain error.
    pub fn domain_error(&self) -> &DomainError {
        &self.0
    }

    fn body(&self) -> String {
        match self.0.code() {
            // Client-caused failures may echo their message.
            ErrorCode::InvalidRequest | ErrorCode::NotFound => self.0.message().to_owned(),
            ErrorCode::ServiceUnavailable => "Service unavailable".to_owned(),
            ErrorCode::InternalError => "Internal server error".to_owned(),
        }
    }
}

impl From<DomainError> for PageError {
    fn from(value: DomainError) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for PageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for PageError {}

impl ResponseError for PageError {
    fn status_code(&self) -> StatusCode {
        match self.0.code() {
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if matches!(
            self.0.code(),
            ErrorCode::ServiceUnavailable | ErrorCode::InternalError
        ) {
            error!(error = %self.0, "request failed");
        }
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(self.body())
    }
}

/// Convenience alias for HTTP handlers.
pub type PageResult<T> = Result<T, PageError>;
