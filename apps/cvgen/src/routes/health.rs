use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Reports the service version and whether the template registry is readable.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let (status, templates) = match state.registry.available() {
        Ok(names) => ("ok", names.len()),
        Err(e) => {
            tracing::warn!("Template registry unavailable: {e}");
            ("degraded", 0)
        }
    };

    Json(json!({
        "status": status,
        "version": env!("CARGO_PKG_VERSION"),
        "service": "cv-gen",
        "templates": templates
    }))
}
