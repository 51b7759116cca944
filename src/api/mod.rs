use std::path::Path;

use axum::{routing::post, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::{config::AppConfig, gemini::GeminiClient};

pub mod error;
pub mod handlers;

#[derive(Clone)]
pub struct AppState {
    pub gemini: GeminiClient,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            gemini: GeminiClient::new(&config.base_url, &config.model, &config.api_key),
        }
    }
}

/// Quiz API plus the single-page front-end served from `static_dir`.
///
/// Every GET path, `/generate-quiz` included, falls back to
/// `static_dir/index.html` so client-side routes resolve.
pub fn router(state: AppState, static_dir: &Path) -> Router {
    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route(
            "/generate-quiz",
            post(handlers::generate_quiz).get_service(spa.clone()),
        )
        .fallback_service(spa)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods(Any),
        )
        .with_state(state)
}
