use serde::{Deserialize, Serialize};

pub mod normalize;
pub mod prompt;

pub use normalize::normalize_quiz_text;
pub use prompt::build_quiz_prompt;

/// Returned in place of a quiz when the model produced no text.
pub const EMPTY_QUIZ_PLACEHOLDER: &str = "Failed to generate quiz";

/// Body of `POST /generate-quiz` as it arrives on the wire.
///
/// Both fields are optional here so that a missing field surfaces as a
/// validation error instead of a deserialization rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizRequestBody {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub num_questions: Option<u32>,
}

/// A validated quiz request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRequest {
    pub source_text: String,
    pub question_count: u32,
}

impl QuizRequestBody {
    pub fn validate(self) -> Option<QuizRequest> {
        let source_text = self.text.filter(|t| !t.trim().is_empty())?;
        let question_count = self.num_questions.filter(|n| *n > 0)?;
        Some(QuizRequest {
            source_text,
            question_count,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub quiz: String,
}

impl QuizResponse {
    /// Normalizes model output, substituting the placeholder when there is none.
    pub fn from_model_output(raw: Option<String>) -> Self {
        let quiz = match raw.filter(|t| !t.is_empty()) {
            Some(text) => normalize_quiz_text(&text),
            None => EMPTY_QUIZ_PLACEHOLDER.to_string(),
        };
        Self { quiz }
    }
}
