//! Error handling middleware - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use blog_core::{DomainError, RepoError};
use blog_shared::ErrorResponse;
use std::fmt;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
    Validation(Vec<&'static str>),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
            AppError::Validation(fields) => write!(f, "Validation errors: {:?}", fields),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Internal(detail) => {
                // Details stay in the logs; clients get a generic body.
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
            AppError::Validation(fields) => ErrorResponse::validation_failed(fields),
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::NotFound { entity_type, id } => {
                AppError::NotFound(format!("{} with id {} not found", entity_type, id))
            }
            DomainError::Validation { fields } => {
                AppError::Validation(fields.iter().map(|f| f.as_str()).collect())
            }
            DomainError::IdsExhausted => AppError::Internal(err.to_string()),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Domain(err) => err.into(),
            RepoError::Unavailable(msg) => {
                tracing::error!("Storage unavailable: {}", msg);
                AppError::Internal("Storage error".to_string())
            }
            RepoError::Corrupt(msg) => {
                tracing::error!("Stored posts are corrupt: {}", msg);
                AppError::Internal("Storage error".to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use blog_core::domain::PostField;

    use super::*;

    #[test]
    fn test_storage_errors_hide_details() {
        let err: AppError = RepoError::Unavailable("write /srv/blog/storage.json: EACCES".into()).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.to_string().contains("/srv/blog"));
    }

    #[test]
    fn test_validation_maps_to_unprocessable() {
        let err: AppError = RepoError::Domain(DomainError::Validation {
            fields: vec![PostField::Title],
        })
        .into();
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(matches!(err, AppError::Validation(ref f) if f == &["title"]));
    }

    #[test]
    fn test_exhausted_ids_map_to_500() {
        let err: AppError = RepoError::Domain(DomainError::IdsExhausted).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err: AppError = DomainError::post_not_found(7).into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }
}
