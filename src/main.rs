//! Bot dashboard - terminal dashboard for a bot management service
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use botdash_app::config::{self, Settings};
use botdash_app::Engine;
use botdash_client::HttpResourceClient;
use botdash_core::prelude::*;
use clap::Parser;

/// Bot dashboard - manage bots and linked accounts from the terminal
#[derive(Parser, Debug)]
#[command(name = "botdash")]
#[command(about = "Terminal dashboard for a bot management service", long_about = None)]
struct Args {
    /// Base URL of the bot management service (overrides config and BOTDASH_BASE_URL)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Path to the config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a commented default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    botdash_core::logging::init()?;

    let config_path = args.config.clone().or_else(config::default_config_path);

    if args.init_config {
        let path = config_path
            .ok_or_else(|| Error::config("could not determine a config directory"))?;
        config::init_config_file(&path)?;
        println!("Config file: {}", path.display());
        return Ok(());
    }

    let settings = resolve_settings(&args, config_path);
    info!("Using service at {}", settings.service.base_url);

    let client = HttpResourceClient::new(&settings.service.base_url)?;
    let engine = Engine::new(settings, client);

    botdash_tui::run(engine).await
}

/// File, then environment, then command line
fn resolve_settings(args: &Args, config_path: Option<PathBuf>) -> Settings {
    let mut settings = match config_path {
        Some(path) => config::load_settings(&path),
        None => {
            warn!("No config directory available; using defaults");
            Settings::default()
        }
    };

    config::apply_env_overrides(&mut settings);

    if let Some(url) = args.base_url.as_deref().map(str::trim) {
        if !url.is_empty() {
            settings.service.base_url = url.to_string();
        }
    }
    settings
}
