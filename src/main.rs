#![allow(non_snake_case)]

mod app;
mod clipboard;
mod components;
mod content;
pub mod context;
mod pages;
mod theme;
mod viewport;

use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use fortress_core::FortressConfig;

/// Settings resolved from the command line before the window opens.
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    pub config: FortressConfig,
    /// Seed for every simulated random sequence
    pub seed: Option<u64>,
    /// When the process started, for the load timing log
    pub started: Instant,
}

static LAUNCH: OnceLock<LaunchOptions> = OnceLock::new();

/// Launch options (defaults if main never set them).
pub fn launch_options() -> LaunchOptions {
    LAUNCH.get().cloned().unwrap_or_else(|| LaunchOptions {
        config: FortressConfig::default(),
        seed: None,
        started: Instant::now(),
    })
}

/// HP Fortress - home server dashboard
#[derive(Parser, Debug)]
#[command(name = "fortress-desktop")]
#[command(about = "HP Fortress - home server showcase dashboard")]
struct Args {
    /// JSON config file (defaults to <config dir>/fortress/config.json if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed the simulated metrics and server flicker
    #[arg(short, long)]
    seed: Option<u64>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("fortress").join("config.json"))
        .filter(|path| path.exists())
}

fn resolve_config(explicit: Option<PathBuf>) -> anyhow::Result<FortressConfig> {
    let Some(path) = explicit.or_else(default_config_path) else {
        return Ok(FortressConfig::default());
    };
    FortressConfig::load(&path)
        .with_context(|| format!("failed to load config from {}", path.display()))
}

fn main() {
    let started = Instant::now();
    fortress_core::logging::init(fortress_core::logging::DEFAULT_DIRECTIVE);

    let args = Args::parse();

    let config = resolve_config(args.config).unwrap_or_else(|e| {
        tracing::warn!("{:#}; using defaults", e);
        FortressConfig::default()
    });

    tracing::debug!(
        "Effective config: {}",
        serde_json::to_string(&config).unwrap_or_default()
    );

    let _ = LAUNCH.set(LaunchOptions {
        config,
        seed: args.seed,
        started,
    });

    tracing::info!(seed = ?args.seed, "Starting HP Fortress dashboard");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("HP Fortress")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
