use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;
use wfc_model::ModelError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid submission: {0}")]
    Submission(#[from] ModelError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    /// Every failure aborts the request without producing a file.
    fn into_response(self) -> Response {
        error!(error = %self, "configuration request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
