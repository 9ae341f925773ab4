//! Axum route handlers for the CV API.

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::parser::CvParser;
use crate::render::{render_template, RenderedHtml};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub markdown: String,
    /// Falls back to the configured default template.
    #[serde(default)]
    pub template: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TemplatesResponse {
    pub templates: Vec<String>,
    pub default: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/templates
pub async fn handle_list_templates(
    State(state): State<AppState>,
) -> Result<Json<TemplatesResponse>, AppError> {
    let templates = state.registry.available()?;
    Ok(Json(TemplatesResponse {
        templates,
        default: state.config.default_template.clone(),
    }))
}

/// POST /api/pdf
///
/// Validates the template, parses the Markdown and returns the PDF as an attachment.
pub async fn handle_pdf(
    State(state): State<AppState>,
    Json(request): Json<RenderRequest>,
) -> Result<impl IntoResponse, AppError> {
    let rendered = render_request(&state, &request)?;
    let pdf = state.pdf.render(&rendered.html, &rendered.base_path).await?;
    info!("Generated {} byte PDF with '{}'", pdf.len(), rendered.template);

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (header::CONTENT_DISPOSITION, "attachment; filename=cv.pdf"),
        ],
        pdf,
    ))
}

/// POST /api/html
///
/// Same input as `/api/pdf`; returns the rendered HTML for previewing.
pub async fn handle_html(
    State(state): State<AppState>,
    Json(request): Json<RenderRequest>,
) -> Result<Html<String>, AppError> {
    let rendered = render_request(&state, &request)?;
    Ok(Html(rendered.html))
}

fn render_request(state: &AppState, request: &RenderRequest) -> Result<RenderedHtml, AppError> {
    let template = request
        .template
        .as_deref()
        .unwrap_or(&state.config.default_template);

    // Unknown templates are rejected before parsing or rendering.
    state.registry.resolve(template)?;

    let cv = CvParser::new().parse(&request.markdown)?;
    Ok(render_template(&state.registry, &cv, template)?)
}
