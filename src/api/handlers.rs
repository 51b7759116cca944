use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::{
    api::{
        error::{ApiError, MISSING_FIELDS_MESSAGE},
        AppState,
    },
    quiz::{build_quiz_prompt, QuizRequestBody, QuizResponse},
};

#[tracing::instrument(name = "generate_quiz", skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn generate_quiz(
    State(state): State<AppState>,
    payload: Result<Json<QuizRequestBody>, JsonRejection>,
) -> Result<Json<QuizResponse>, ApiError> {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            warn!(reason = %rejection.body_text(), "unreadable quiz request body");
            return Err(ApiError::Validation(rejection.body_text()));
        }
    };

    let request = body
        .validate()
        .ok_or_else(|| ApiError::Validation(MISSING_FIELDS_MESSAGE.to_string()))?;

    info!(
        num_questions = request.question_count,
        text_chars = request.source_text.chars().count(),
        "generating quiz"
    );

    let prompt = build_quiz_prompt(&request.source_text, request.question_count).map_err(|e| {
        error!(error = %e, "failed to render quiz prompt");
        ApiError::from(e)
    })?;

    let raw = state.gemini.generate_text(&prompt).await.map_err(|e| {
        error!(error = %e, "gemini api error");
        ApiError::from(e)
    })?;

    if raw.as_deref().map_or(true, str::is_empty) {
        warn!("gemini returned no candidate text");
    }

    Ok(Json(QuizResponse::from_model_output(raw)))
}
