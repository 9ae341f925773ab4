//! PDF backends. The layout engine is external: `PdfRenderer` hands final HTML and a
//! base path to it and gets PDF bytes back.
//!
//! `AppState` holds an `Arc<dyn PdfRenderer>` so the backend can be swapped (tests use
//! an in-memory stub).

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::errors::RenderError;

#[async_trait]
pub trait PdfRenderer: Send + Sync {
    /// Renders `html` to PDF. Relative URLs resolve against `base_path`.
    async fn render(&self, html: &str, base_path: &Path) -> Result<Vec<u8>, RenderError>;
}

/// Shells out to a WeasyPrint-compatible program:
/// `<program> [args..] <input.html> <output.pdf> --base-url <base_path>`.
#[derive(Debug, Clone)]
pub struct CommandPdfRenderer {
    program: PathBuf,
    args: Vec<String>,
}

impl CommandPdfRenderer {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Builds a renderer from a whitespace-separated command line such as
    /// `python -m weasyprint`. Falls back to `weasyprint` when the line is blank.
    pub fn from_command_line(command: &str) -> Self {
        let mut parts = command.split_whitespace();
        let program = parts.next().unwrap_or("weasyprint");
        Self {
            program: PathBuf::from(program),
            args: parts.map(String::from).collect(),
        }
    }
}

#[async_trait]
impl PdfRenderer for CommandPdfRenderer {
    async fn render(&self, html: &str, base_path: &Path) -> Result<Vec<u8>, RenderError> {
        let workdir = tempfile::tempdir()
            .map_err(|e| RenderError::Pdf(format!("Failed to create work directory: {e}")))?;
        let input = workdir.path().join("cv.html");
        let output = workdir.path().join("cv.pdf");

        tokio::fs::write(&input, html)
            .await
            .map_err(|e| RenderError::Pdf(format!("Failed to write HTML input: {e}")))?;

        debug!("Running {} for {}", self.program.display(), input.display());
        let result = Command::new(&self.program)
            .args(&self.args)
            .arg(&input)
            .arg(&output)
            .arg("--base-url")
            .arg(base_path)
            .output()
            .await
            .map_err(|e| {
                RenderError::Pdf(format!(
                    "Failed to execute '{}': {e}",
                    self.program.display()
                ))
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(RenderError::Pdf(format!(
                "'{}' exited with {}: {}",
                self.program.display(),
                result.status,
                stderr.trim()
            )));
        }

        tokio::fs::read(&output)
            .await
            .map_err(|e| RenderError::Pdf(format!("Failed to read PDF output: {e}")))
    }
}
