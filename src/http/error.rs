//! Mapping of service errors onto HTTP responses.

use super::ApiResponse;
use crate::server_state::{ports::ServerStateRepositoryError, services::ServerStateServiceError};
use crate::vocab::{ports::VocabRepositoryError, services::VocabSearchServiceError};
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Errors returned by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request was malformed.
    #[error("{0}")]
    BadRequest(String),
    /// The requested resource does not exist.
    #[error("{0}")]
    NotFound(String),
    /// The request conflicts with stored data.
    #[error("{0}")]
    Conflict(String),
    /// An unexpected failure.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServerStateServiceError> for ApiError {
    fn from(err: ServerStateServiceError) -> Self {
        match err {
            ServerStateServiceError::Domain(domain) => Self::BadRequest(domain.to_string()),
            ServerStateServiceError::Repository(
                missing @ ServerStateRepositoryError::NotFound(_),
            ) => Self::NotFound(missing.to_string()),
            ServerStateServiceError::Repository(
                duplicate @ ServerStateRepositoryError::DuplicateId(_),
            ) => Self::Conflict(duplicate.to_string()),
            ServerStateServiceError::Repository(other) => Self::Internal(other.to_string()),
        }
    }
}

impl From<VocabSearchServiceError> for ApiError {
    fn from(err: VocabSearchServiceError) -> Self {
        match err {
            VocabSearchServiceError::Domain(domain) => Self::BadRequest(domain.to_string()),
            VocabSearchServiceError::Repository(
                duplicate @ VocabRepositoryError::DuplicateWord(_),
            ) => Self::Conflict(duplicate.to_string()),
            VocabSearchServiceError::Repository(other) => Self::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        (status, Json(ApiResponse::err(self.to_string()))).into_response()
    }
}
