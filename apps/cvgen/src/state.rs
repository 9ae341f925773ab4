use std::sync::Arc;

use crate::config::Config;
use crate::render::{PdfRenderer, TemplateRegistry};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub registry: TemplateRegistry,
    /// Pluggable PDF backend. Default: `CommandPdfRenderer` running `CV_GEN_PDF_COMMAND`.
    pub pdf: Arc<dyn PdfRenderer>,
}
