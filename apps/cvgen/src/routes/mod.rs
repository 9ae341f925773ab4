pub mod cv;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};
use tracing::info;

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let dist = state.config.frontend_dist.clone();

    let router = Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/templates", get(cv::handle_list_templates))
        .route("/api/pdf", post(cv::handle_pdf))
        .route("/api/html", post(cv::handle_html));

    // Production: serve the built single-page front end, falling back to index.html.
    let router = if dist.is_dir() {
        info!("Serving front end from {}", dist.display());
        router
            .nest_service("/assets", ServeDir::new(dist.join("assets")))
            .fallback_service(ServeFile::new(dist.join("index.html")))
    } else {
        router
    };

    router.with_state(state)
}
