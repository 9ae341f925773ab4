use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// ────────────────────────────────────────────────────────────────────────────
// Core errors
// ────────────────────────────────────────────────────────────────────────────

/// Front-matter could not be read as a key/value mapping. Only raised in strict mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Malformed front-matter: {reason}")]
pub struct MalformedMetadataError {
    pub reason: String,
}

/// Markdown-to-HTML conversion failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Markdown conversion failed: {0}")]
pub struct ConversionError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    MalformedMetadata(#[from] MalformedMetadataError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// The requested template is not installed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Template '{}' not found. Available: {}", .requested, .available.join(", "))]
pub struct UnknownTemplateError {
    pub requested: String,
    pub available: Vec<String>,
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    UnknownTemplate(#[from] UnknownTemplateError),

    #[error("Failed to read template assets: {0}")]
    TemplateIo(#[from] std::io::Error),

    #[error("Template rendering failed: {0}")]
    Template(#[from] tera::Error),

    #[error("PDF rendering failed: {0}")]
    Pdf(String),
}

// ────────────────────────────────────────────────────────────────────────────
// HTTP errors
// ────────────────────────────────────────────────────────────────────────────

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    UnknownTemplate(#[from] UnknownTemplateError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Render error: {0}")]
    Render(RenderError),
}

impl From<RenderError> for AppError {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::UnknownTemplate(e) => AppError::UnknownTemplate(e),
            other => AppError::Render(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::UnknownTemplate(e) => {
                (StatusCode::BAD_REQUEST, "UNKNOWN_TEMPLATE", e.to_string())
            }
            AppError::Parse(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "PARSE_ERROR",
                e.to_string(),
            ),
            AppError::Render(e) => {
                tracing::error!("Render error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "RENDER_ERROR",
                    "The CV could not be rendered".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
