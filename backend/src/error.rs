//! Error type shared by every backend service.
//!
//! Variants follow the failure classes the UI distinguishes: store failures,
//! file-storage failures, unreadable spreadsheets, and validation problems caught
//! before any write. Every error ends the triggering request; nothing is retried.

use actix_web::error::BlockingError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::warn;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("database error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("file storage error: {0}")]
    Upload(#[from] std::io::Error),

    #[error("spreadsheet error: {0}")]
    Spreadsheet(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<calamine::Error> for ServiceError {
    fn from(e: calamine::Error) -> Self {
        ServiceError::Spreadsheet(e.to_string())
    }
}

impl From<csv::Error> for ServiceError {
    fn from(e: csv::Error) -> Self {
        ServiceError::Spreadsheet(e.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for ServiceError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        ServiceError::Spreadsheet(e.to_string())
    }
}

impl From<actix_multipart::MultipartError> for ServiceError {
    fn from(e: actix_multipart::MultipartError) -> Self {
        ServiceError::Validation(format!("malformed upload: {}", e))
    }
}

impl From<BlockingError> for ServiceError {
    fn from(e: BlockingError) -> Self {
        ServiceError::Internal(e.to_string())
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Store(_) => StatusCode::SERVICE_UNAVAILABLE,
            ServiceError::Upload(_) => StatusCode::BAD_GATEWAY,
            ServiceError::Spreadsheet(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        warn!("request failed: {}", self);
        HttpResponse::build(self.status_code()).body(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_error_class() {
        assert_eq!(
            ServiceError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::NotFound("certification abc".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServiceError::Spreadsheet("bad zip".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ServiceError::Store(rusqlite::Error::InvalidQuery).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn not_found_message_names_the_subject() {
        assert_eq!(
            ServiceError::NotFound("certification abc".into()).to_string(),
            "certification abc not found"
        );
    }
}
