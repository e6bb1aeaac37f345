//! comicframe - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Rotating comic card on a small two-tone display
#[derive(Parser, Debug)]
#[command(name = "comicframe")]
#[command(version)]
#[command(about = "Fixed-size two-tone display app that rotates a remote comic card")]
pub struct Args {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Source page URL to rotate through
    #[arg(long)]
    pub source_url: Option<String>,

    /// Seconds between content refreshes
    #[arg(long)]
    pub refresh_secs: Option<u64>,

    /// Exit after the first successful fetch has been rendered
    #[arg(long)]
    pub once: bool,
}

fn main() -> Result<(), comicframe::model::AppError> {
    let args = Args::parse();

    // Resolve configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let file = comicframe::config::load_config_with_precedence(args.config.clone())?;
        let merged = comicframe::config::merge_config(file);
        let with_env = comicframe::config::apply_env_overrides(merged);
        comicframe::config::apply_cli_overrides(
            with_env,
            args.source_url.clone(),
            args.refresh_secs,
            args.once,
        )
    };

    comicframe::logging::init(&config.log_file)?;
    info!(config = ?config, "Configuration loaded and resolved");

    let fetcher =
        comicframe::fetch::SourceFetcher::new(config.source_url.clone(), config.image_box)?;
    let screen =
        comicframe::display::SimScreen::new(config.screen_width, config.screen_height)?;

    let app = comicframe::app::CardApp::new(screen, fetcher, config);
    app.run()?;

    Ok(())
}
