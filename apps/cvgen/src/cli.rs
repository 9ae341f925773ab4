//! Command-line front end: Markdown file in, PDF (or HTML) file out.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use crate::config::Config;
use crate::parser::{parse_cv_file, ParseOptions};
use crate::render::{render_template, PdfRenderer, TemplateRegistry};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// Generate a professional PDF CV from a Markdown file.
#[derive(Parser, Debug)]
#[command(name = "cv-gen", version, long_about = None)]
pub struct Cli {
    /// Markdown CV with optional YAML front-matter.
    #[arg(required_unless_present = "list_templates")]
    pub input: Option<PathBuf>,

    /// Template name (defaults to CV_GEN_DEFAULT_TEMPLATE or "modern").
    #[arg(short, long)]
    pub template: Option<String>,

    /// Output file path (defaults to the input name with .pdf / .html).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// List available templates.
    #[arg(long)]
    pub list_templates: bool,

    /// Generate the PDF and open it in the system viewer.
    #[arg(long)]
    pub preview: bool,

    /// Export HTML instead of PDF.
    #[arg(long)]
    pub html: bool,

    /// Fail on malformed front-matter instead of ignoring it.
    #[arg(long)]
    pub strict: bool,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Logs go to stderr so stdout only carries command output. `RUST_LOG` (including one
/// loaded from `.env`) wins over the verbosity flag.
pub fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(verbosity_filter(cli.verbose))),
        )
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn verbosity_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "cv_gen=warn",
        1 => "cv_gen=info",
        2 => "cv_gen=debug",
        _ => "cv_gen=trace",
    }
}

// ---------------------------------------------------------------------------
// Command execution
// ---------------------------------------------------------------------------

pub async fn run(
    cli: &Cli,
    config: &Config,
    pdf: &dyn PdfRenderer,
    out: &mut dyn Write,
) -> Result<()> {
    let registry = TemplateRegistry::new(&config.templates_dir);

    if cli.list_templates {
        let templates = registry.available().with_context(|| {
            format!("Cannot list templates in {}", config.templates_dir.display())
        })?;
        write!(out, "{}", format_template_list(&templates, &config.default_template))?;
        return Ok(());
    }

    let input = cli
        .input
        .as_deref()
        .context("Missing argument 'INPUT'. Use --list-templates or provide a Markdown file.")?;
    let template = cli.template.as_deref().unwrap_or(&config.default_template);

    // Validate the template before reading or rendering anything.
    registry.resolve(template)?;

    let cv = parse_cv_file(
        input,
        ParseOptions {
            strict_metadata: cli.strict,
        },
    )?;
    let rendered = render_template(&registry, &cv, template)?;

    if cli.html {
        let path = cli
            .output
            .clone()
            .unwrap_or_else(|| default_output(input, "html"));
        std::fs::write(&path, &rendered.html)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        writeln!(out, "HTML exported: {}", path.display())?;
        return Ok(());
    }

    let bytes = pdf.render(&rendered.html, &rendered.base_path).await?;
    let path = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output(input, "pdf"));
    std::fs::write(&path, &bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {} bytes to {}", bytes.len(), path.display());
    writeln!(out, "PDF generated: {}", path.display())?;

    if cli.preview {
        if let Err(e) = open::that(&path) {
            warn!("Could not open {}: {e}", path.display());
        }
    }

    Ok(())
}

/// Human-readable template listing, marking the default.
pub fn format_template_list(templates: &[String], default: &str) -> String {
    let mut listing = String::from("Available templates:\n");
    for name in templates {
        let marker = if name == default { " (default)" } else { "" };
        listing.push_str(&format!("  - {name}{marker}\n"));
    }
    listing
}

/// `<input file name>` with its extension replaced, relative to the working directory.
fn default_output(input: &Path, extension: &str) -> PathBuf {
    let name = input
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("cv"));
    name.with_extension(extension)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::errors::RenderError;

    #[derive(Default)]
    struct StubPdfRenderer {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl PdfRenderer for StubPdfRenderer {
        async fn render(&self, html: &str, _base_path: &Path) -> Result<Vec<u8>, RenderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("%PDF-stub {}", html.len()).into_bytes())
        }
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    async fn run_cli(cli: &Cli, pdf: &StubPdfRenderer) -> (Result<()>, String) {
        let mut out = Vec::new();
        let result = run(cli, &Config::default(), pdf, &mut out).await;
        (result, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_list_templates() {
        let cli = parse(&["cv-gen", "--list-templates"]);
        let (result, output) = run_cli(&cli, &StubPdfRenderer::default()).await;
        result.unwrap();
        assert!(output.starts_with("Available templates:"));
        assert!(output.contains("  - modern (default)"));
        assert!(output.contains("  - minimal\n"));
    }

    #[test]
    fn test_missing_input() {
        assert!(Cli::try_parse_from(["cv-gen"]).is_err());
    }

    #[tokio::test]
    async fn test_generate_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let md_file = dir.path().join("test.md");
        std::fs::write(
            &md_file,
            "---\nname: Test\ntitle: Dev\nemail: test@test.com\n---\n\n## Perfil\nExperienced.\n\n## Habilidades\n- Python\n",
        )
        .unwrap();
        let out_file = dir.path().join("test.pdf");

        let cli = parse(&[
            "cv-gen",
            md_file.to_str().unwrap(),
            "-o",
            out_file.to_str().unwrap(),
        ]);
        let pdf = StubPdfRenderer::default();
        let (result, output) = run_cli(&cli, &pdf).await;
        result.unwrap();

        assert!(output.starts_with("PDF generated:"));
        let bytes = std::fs::read(&out_file).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert_eq!(pdf.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_generate_html() {
        let dir = tempfile::tempdir().unwrap();
        let md_file = dir.path().join("test.md");
        std::fs::write(
            &md_file,
            "---\nname: Test\ntitle: Dev\n---\n\n## Perfil\nHello world.\n",
        )
        .unwrap();
        let out_file = dir.path().join("test.html");

        let cli = parse(&[
            "cv-gen",
            md_file.to_str().unwrap(),
            "--html",
            "-o",
            out_file.to_str().unwrap(),
        ]);
        let pdf = StubPdfRenderer::default();
        let (result, output) = run_cli(&cli, &pdf).await;
        result.unwrap();

        assert!(output.starts_with("HTML exported:"));
        let content = std::fs::read_to_string(&out_file).unwrap();
        assert!(content.contains("Test"));
        assert!(content.contains("Hello world"));
        assert_eq!(pdf.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unknown_template_fails_before_rendering() {
        let dir = tempfile::tempdir().unwrap();
        let md_file = dir.path().join("test.md");
        std::fs::write(&md_file, "## Skills\n- Rust\n").unwrap();
        let out_file = dir.path().join("test.pdf");

        let cli = parse(&[
            "cv-gen",
            md_file.to_str().unwrap(),
            "-t",
            "nonexistent",
            "-o",
            out_file.to_str().unwrap(),
        ]);
        let pdf = StubPdfRenderer::default();
        let (result, _) = run_cli(&cli, &pdf).await;

        let err = result.unwrap_err();
        assert!(err.to_string().contains("nonexistent"));
        assert!(!out_file.exists());
        assert_eq!(pdf.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_input_file_is_error() {
        let cli = parse(&["cv-gen", "/definitely/not/here.md", "--html"]);
        let (result, _) = run_cli(&cli, &StubPdfRenderer::default()).await;
        assert!(result.unwrap_err().to_string().contains("Failed to read CV file"));
    }

    #[test]
    fn test_default_output_uses_input_name() {
        assert_eq!(
            default_output(Path::new("/home/me/cv/mine.md"), "pdf"),
            PathBuf::from("mine.pdf")
        );
        assert_eq!(
            default_output(Path::new("resume"), "html"),
            PathBuf::from("resume.html")
        );
    }

    #[test]
    fn test_verbosity_filter_levels() {
        assert_eq!(verbosity_filter(0), "cv_gen=warn");
        assert_eq!(verbosity_filter(2), "cv_gen=debug");
        assert_eq!(verbosity_filter(7), "cv_gen=trace");
    }

    #[test]
    fn test_format_template_list() {
        let listing = format_template_list(&["minimal".to_string(), "modern".to_string()], "modern");
        assert_eq!(
            listing,
            "Available templates:\n  - minimal\n  - modern (default)\n"
        );
    }
}
