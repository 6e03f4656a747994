#![allow(non_snake_case)]

mod app;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use consentgate_core::{ConsentGate, ThemeMode, ThemeStore, DEFAULT_THRESHOLD};
use dioxus::desktop::{Config, WindowBuilder};

use crate::context::ShellSettings;

/// Global shell settings, set from command line
static SETTINGS: OnceLock<ShellSettings> = OnceLock::new();

/// Process-wide theme preference, opened once at startup
static THEME_STORE: OnceLock<ThemeStore> = OnceLock::new();

/// Default data directory (platform data dir + "consentgate")
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("consentgate")
}

/// Get the shell settings (set from command line or defaults)
pub fn get_settings() -> ShellSettings {
    SETTINGS.get().cloned().unwrap_or_else(|| ShellSettings {
        data_dir: default_data_dir(),
        disclosure_path: None,
        threshold: DEFAULT_THRESHOLD,
    })
}

/// Get the theme store, opening it in the data directory on first use
pub fn get_theme_store() -> &'static ThemeStore {
    THEME_STORE.get_or_init(|| ThemeStore::in_dir(get_settings().data_dir))
}

/// Consent Gate - scroll-gated disclosure approval
#[derive(Parser, Debug)]
#[command(name = "consentgate-desktop")]
#[command(about = "Consent Gate - read-to-the-end disclosure approval")]
struct Args {
    /// Data directory for stored preferences
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Disclosure document (JSON) to show instead of the bundled notice
    #[arg(long)]
    disclosure: Option<PathBuf>,

    /// Distance from the bottom that counts as having read to the end
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: f64,

    /// Force a theme for this launch (also saved as the preference)
    #[arg(long)]
    theme: Option<ThemeMode>,

    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "info",
        1 => "consentgate=debug,consentgate_core=debug,consentgate_ui=debug,info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    // Reject a bad threshold before any window opens
    ConsentGate::new(args.threshold).context("invalid --threshold")?;

    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
    let settings = ShellSettings {
        data_dir: data_dir.clone(),
        disclosure_path: args.disclosure,
        threshold: args.threshold,
    };
    let _ = SETTINGS.set(settings);

    let store = get_theme_store();
    if let Some(mode) = args.theme {
        store
            .set(mode)
            .with_context(|| format!("failed to save theme to {:?}", store.path()))?;
    }

    tracing::info!(
        "Starting with data dir: {:?}, theme: {}",
        data_dir,
        store.mode()
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Consent Gate")
            .with_inner_size(dioxus::desktop::LogicalSize::new(720.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
