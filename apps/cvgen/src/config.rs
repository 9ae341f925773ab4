use std::path::PathBuf;

use anyhow::{Context, Result};

/// Templates bundled with the crate, used when `CV_GEN_TEMPLATES_DIR` is unset.
pub const BUNDLED_TEMPLATES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/templates");
pub const DEFAULT_TEMPLATE: &str = "modern";

/// Application configuration loaded from environment variables.
/// Every variable has a default; only malformed values are errors.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub cors_origin: String,
    pub templates_dir: PathBuf,
    pub default_template: String,
    pub pdf_command: String,
    pub frontend_dist: PathBuf,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8000,
            cors_origin: "http://localhost:5173".to_string(),
            templates_dir: PathBuf::from(BUNDLED_TEMPLATES_DIR),
            default_template: DEFAULT_TEMPLATE.to_string(),
            pdf_command: "weasyprint".to_string(),
            frontend_dist: PathBuf::from("frontend/dist"),
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    /// Server configuration. A malformed `PORT` is an error.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(env_lookup)
    }

    /// CLI configuration. `PORT` is not read, so a server-only setting can never
    /// fail a command-line run.
    pub fn cli_from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::shared_from_lookup(&env_lookup)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::shared_from_lookup(&lookup);
        if let Some(raw) = lookup("PORT") {
            config.port = raw
                .parse::<u16>()
                .context("PORT must be a valid port number")?;
        }
        Ok(config)
    }

    /// Every variable except `PORT`, which keeps its default.
    fn shared_from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Config::default();

        Config {
            port: defaults.port,
            cors_origin: lookup("CORS_ORIGIN").unwrap_or(defaults.cors_origin),
            templates_dir: lookup("CV_GEN_TEMPLATES_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.templates_dir),
            default_template: lookup("CV_GEN_DEFAULT_TEMPLATE")
                .unwrap_or(defaults.default_template),
            pdf_command: lookup("CV_GEN_PDF_COMMAND").unwrap_or(defaults.pdf_command),
            frontend_dist: lookup("FRONTEND_DIST")
                .map(PathBuf::from)
                .unwrap_or(defaults.frontend_dist),
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
        }
    }
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
