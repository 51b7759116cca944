use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod config;
mod gemini;
mod quiz;

use api::AppState;
use config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // -----------------------------
    // Logging
    // -----------------------------
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("🚀 Starting quiz relay...");

    // -----------------------------
    // Config / shared state
    // -----------------------------
    let config = AppConfig::from_env()?;
    let state = AppState::from_config(&config);

    info!(
        model = %config.model,
        static_dir = %config.static_dir.display(),
        "gemini client ready"
    );

    // -----------------------------
    // Router
    // -----------------------------
    let app = api::router(state, &config.static_dir);

    let addr = config.listen_addr();

    println!("🌐 HTTP listening on http://{addr}");
    println!("🛠 Quiz API at http://{addr}/generate-quiz");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
