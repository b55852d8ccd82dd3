use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tokio::task::JoinError;
use tracing::{error, warn};

use crate::{collaborators::CollaboratorError, database::StoreError, models::StatusResponse};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(#[from] JsonRejection),

    #[error("Missing required fields (name, email, message).")]
    MissingFields,

    #[error("Feedback was rejected by the store.")]
    FeedbackRejected(#[source] StoreError),

    #[error("Internal server error while submitting feedback.")]
    SubmitFailed(#[source] StoreError),

    #[error("Internal server error while fetching feedback.")]
    FetchFailed(#[source] StoreError),

    #[error("Internal server error while generating recommendations.")]
    RecommendFailed(#[source] CollaboratorError),

    #[error("Internal server error while generating a reply.")]
    ChatFailed(#[source] CollaboratorError),

    #[error("Internal server error.")]
    Blocking(#[from] JoinError),
}

impl AppError {
    /// Constraint violations are the caller's fault, everything else is ours.
    pub fn submit(err: StoreError) -> Self {
        match err {
            StoreError::Constraint(_) => AppError::FeedbackRejected(err),
            StoreError::Unavailable(_) => AppError::SubmitFailed(err),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MalformedPayload(rejection) => rejection.status(),
            AppError::MissingFields => StatusCode::BAD_REQUEST,
            AppError::FeedbackRejected(_) => StatusCode::CONFLICT,
            AppError::SubmitFailed(_)
            | AppError::FetchFailed(_)
            | AppError::RecommendFailed(_)
            | AppError::ChatFailed(_)
            | AppError::Blocking(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn log(&self) {
        match self {
            AppError::MalformedPayload(rejection) => warn!("Rejected payload: {rejection}"),
            AppError::MissingFields => warn!("Contact submission missing required fields"),
            AppError::FeedbackRejected(e) => warn!("Feedback constraint violation: {e}"),
            AppError::SubmitFailed(e) | AppError::FetchFailed(e) => error!("Database error: {e}"),
            AppError::RecommendFailed(e) => error!("Recommender error: {e}"),
            AppError::ChatFailed(e) => error!("Chatbot error: {e}"),
            AppError::Blocking(e) => error!("Blocking task failed: {e}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();

        (self.status(), Json(StatusResponse::error(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use rusqlite::ffi;

    use super::AppError;
    use crate::{collaborators::CollaboratorError, database::StoreError};

    fn sqlite_error(code: i32) -> rusqlite::Error {
        rusqlite::Error::SqliteFailure(ffi::Error::new(code), None)
    }

    #[test]
    fn test_validation_is_client_error() {
        assert_eq!(AppError::MissingFields.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::MissingFields.to_string(),
            "Missing required fields (name, email, message)."
        );
    }

    #[test]
    fn test_submit_classification() {
        let constraint = AppError::submit(StoreError::from(sqlite_error(ffi::SQLITE_CONSTRAINT)));
        assert_eq!(constraint.status(), StatusCode::CONFLICT);

        let busy = AppError::submit(StoreError::from(sqlite_error(ffi::SQLITE_BUSY)));
        assert_eq!(busy.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            busy.to_string(),
            "Internal server error while submitting feedback."
        );
    }

    #[test]
    fn test_collaborator_faults_are_server_errors() {
        let err = AppError::ChatFailed(CollaboratorError::Unavailable("offline".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
