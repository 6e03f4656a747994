//! Shell context for Consent Gate.
//!
//! Startup settings and the theme flag, provided to components via
//! use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let mut mode = use_theme_mode();
//! let settings = use_settings();
//! ```

use std::path::PathBuf;

use consentgate_core::{Disclosure, ThemeMode};
use dioxus::prelude::*;

/// Settings resolved from the command line in `main`.
#[derive(Clone, Debug, PartialEq)]
pub struct ShellSettings {
    /// Where `preferences.json` lives
    pub data_dir: PathBuf,
    /// Custom disclosure document, if any
    pub disclosure_path: Option<PathBuf>,
    /// End-of-text tolerance passed to the consent modal
    pub threshold: f64,
}

/// Get the shell settings.
pub fn get_settings() -> ShellSettings {
    crate::get_settings()
}

/// Hook to access the shell settings from context.
pub fn use_settings() -> ShellSettings {
    use_context::<ShellSettings>()
}

/// Hook to access the theme flag.
///
/// The signal mirrors the process-wide `ThemeStore`; write to it only via
/// [`toggle_theme`] so the two never diverge.
pub fn use_theme_mode() -> Signal<ThemeMode> {
    use_context::<Signal<ThemeMode>>()
}

/// Flip the theme through the store's setter and mirror it into the signal.
pub fn toggle_theme(mut mode: Signal<ThemeMode>) {
    let store = crate::get_theme_store();
    match store.toggle() {
        Ok(next) => mode.set(next),
        Err(e) => {
            // The store already switched in memory
            tracing::warn!("Failed to persist theme preference: {}", e);
            mode.set(store.mode());
        }
    }
}

/// Load the disclosure to show, falling back to the bundled notice.
///
/// A broken custom document must not block the flow, so errors are logged
/// and the built-in text is used instead.
pub async fn load_disclosure(path: Option<PathBuf>) -> Disclosure {
    let Some(path) = path else {
        return Disclosure::builtin();
    };

    let path_str = path.display().to_string();
    match tokio::task::spawn_blocking(move || Disclosure::load(&path)).await {
        Ok(Ok(disclosure)) => {
            tracing::info!("Loaded disclosure from {}", path_str);
            disclosure
        }
        Ok(Err(e)) => {
            tracing::warn!("Failed to load disclosure {}: {}, using built-in", path_str, e);
            Disclosure::builtin()
        }
        Err(e) => {
            tracing::error!("Disclosure loader task failed: {}", e);
            Disclosure::builtin()
        }
    }
}
