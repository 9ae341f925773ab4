use anyhow::Result;
use clap::Parser;

use cv_gen::cli::{self, Cli};
use cv_gen::config::Config;
use cv_gen::render::CommandPdfRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Loads .env first so its RUST_LOG reaches the subscriber.
    let config = Config::cli_from_env();
    cli::init_tracing(&cli);

    let pdf = CommandPdfRenderer::from_command_line(&config.pdf_command);

    let mut stdout = std::io::stdout();
    cli::run(&cli, &config, &pdf, &mut stdout).await
}
