use minijinja::Environment;
use once_cell::sync::Lazy;
use serde::Serialize;

use super::normalize::CELL_SEPARATOR;

// The `.txt` suffix keeps minijinja from HTML-escaping the passage.
const QUIZ_TEMPLATE_NAME: &str = "quiz_prompt.txt";

/// Column layout requested from the model, in order.
pub const QUIZ_COLUMNS: &[&str] = &[
    "title",
    "image",
    "thumbnail",
    "video",
    "audio",
    "explanation",
    "explanation_image",
    "explanation_video",
    "explanation_audio",
    "options_1_answer",
    "options_1_is_correct",
    "options_1_image",
    "options_1_audio",
    "options_1_video",
    "options_2_answer",
    "options_2_is_correct",
    "options_2_image",
    "options_2_video",
    "options_2_audio",
    "options_3_answer",
    "options_3_is_correct",
    "options_3_image",
    "options_3_video",
    "options_3_audio",
    "options_4_answer",
    "options_4_is_correct",
];

static TEMPLATES: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.add_template(
        QUIZ_TEMPLATE_NAME,
        include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/templates/quiz_prompt.jinja"
        )),
    )
    .expect("invalid quiz prompt template");
    env
});

#[derive(Serialize)]
struct QuizPromptContext<'a> {
    num_questions: u32,
    columns: String,
    text: &'a str,
}

pub fn quiz_column_header() -> String {
    QUIZ_COLUMNS.join(&CELL_SEPARATOR.to_string())
}

/// Renders the instruction sent to the model for `num_questions` questions
/// drawn from `text`.
pub fn build_quiz_prompt(text: &str, num_questions: u32) -> Result<String, minijinja::Error> {
    let ctx = QuizPromptContext {
        num_questions,
        columns: quiz_column_header(),
        text,
    };
    TEMPLATES.get_template(QUIZ_TEMPLATE_NAME)?.render(&ctx)
}
