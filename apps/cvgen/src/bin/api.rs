use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cv_gen::config::Config;
use cv_gen::render::{CommandPdfRenderer, TemplateRegistry};
use cv_gen::routes::build_router;
use cv_gen::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("cv_gen={},tower_http={}", config.rust_log, config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting cv-gen API v{}", env!("CARGO_PKG_VERSION"));

    let registry = TemplateRegistry::new(&config.templates_dir);
    let templates = registry
        .available()
        .with_context(|| format!("Cannot list templates in {}", config.templates_dir.display()))?;
    info!("Templates: {} (default: {})", templates.join(", "), config.default_template);

    let pdf = Arc::new(CommandPdfRenderer::from_command_line(&config.pdf_command));
    info!("PDF backend: {}", config.pdf_command);

    let cors = CorsLayer::new()
        .allow_origin(
            config
                .cors_origin
                .parse::<HeaderValue>()
                .context("CORS_ORIGIN must be a valid header value")?,
        )
        .allow_methods(Any)
        .allow_headers(Any);

    let state = AppState {
        config: config.clone(),
        registry,
        pdf,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
