use anyhow::Result;
use sitefaq::{app_state::AppState, config::Config, server::build_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing; LOG_FORMAT=json switches to structured output
    let json_logs = std::env::var("LOG_FORMAT").is_ok_and(|format| format == "json");
    if json_logs {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(EnvFilter::from_default_env())
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .init();
    }

    let config = Config::from_env()?;
    if config.api_key().is_none() {
        info!("No completion API key configured, answers will use the offline fallback");
    }

    let state = AppState::new(&config)?;
    let app = build_router(state, config.site_root());

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("Server running on http://localhost:{}", config.port());
    info!("Website: http://localhost:{}/index.html", config.port());
    info!("AI Assistant: http://localhost:{}/faq.html", config.port());

    axum::serve(listener, app).await?;
    Ok(())
}
