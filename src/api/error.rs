use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::gemini::UpstreamError;

pub const MISSING_FIELDS_MESSAGE: &str = "Missing text or numQuestions";
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to generate quiz from Gemini API";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid quiz request: {0}")]
    Validation(String),
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
    #[error("prompt rendering failed: {0}")]
    Prompt(#[from] minijinja::Error),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) | ApiError::Prompt(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the caller. Server-side failures never carry detail.
    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => MISSING_FIELDS_MESSAGE,
            ApiError::Upstream(_) | ApiError::Prompt(_) => UPSTREAM_FAILURE_MESSAGE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.public_message().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
