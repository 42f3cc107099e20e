use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use portfolio::app::App;
use portfolio::config::Config;
use portfolio::theme::{self, FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, ThemeContext};

#[derive(Parser, Debug)]
#[command(name = "portfolio", about = "Terminal portfolio of Harsha Vardhan")]
struct Args {
    /// Theme id for this run only (not persisted until you pick one)
    #[arg(long)]
    theme: Option<String>,

    /// Directory holding config.json (defaults to the platform config dir)
    #[arg(long)]
    config_dir: Option<PathBuf>,

    /// Append logs to this file instead of discarding them
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(long)]
    debug: bool,
}

fn init_tracing(args: &Args) -> Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    let default_level = if args.debug { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args)?;

    let config_path = args
        .config_dir
        .as_ref()
        .map(|dir| dir.join("config.json"))
        .or_else(Config::default_path);

    let (config, store): (Config, Box<dyn PreferenceStore>) = match config_path {
        Some(path) => (
            Config::load_from(&path),
            Box::new(FilePreferenceStore::new(path)),
        ),
        // No config directory on this platform: run with defaults, keep
        // the selection for this session only.
        None => (Config::default(), Box::new(MemoryPreferenceStore::default())),
    };

    let mut theme_ctx = ThemeContext::init(store);
    if let Some(id) = &args.theme {
        match theme::find_by_id(id) {
            Some(theme) => theme_ctx.set_current_transient(theme),
            None => tracing::warn!(id, "unknown --theme id, keeping current theme"),
        }
    }

    let terminal = ratatui::init();
    let result = App::new(config, theme_ctx).run(terminal);
    ratatui::restore();
    result
}
