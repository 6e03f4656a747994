//! Light/dark mode flag and its stored preference.
//!
//! The shell opens one [`ThemeStore`] at startup and mutates it only through
//! [`ThemeStore::set`] (or [`ThemeStore::toggle`], which goes through `set`).

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::GateResult;

/// File name of the preferences document inside the data directory
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Binary colour mode
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// Value written to the `data-theme` attribute
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("unknown theme '{}', expected light or dark", other)),
        }
    }
}

/// On-disk preferences document
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: ThemeMode,
}

/// Process-wide theme preference backed by a JSON file
#[derive(Debug)]
pub struct ThemeStore {
    path: PathBuf,
    mode: RwLock<ThemeMode>,
}

impl ThemeStore {
    /// Read the stored preference, falling back to [`ThemeMode::Light`].
    ///
    /// A missing file is normal on first launch. A malformed one is logged
    /// and replaced on the next `set`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mode = match read_preferences(&path) {
            Ok(Some(prefs)) => prefs.theme,
            Ok(None) => ThemeMode::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), "Ignoring unreadable preferences: {}", e);
                ThemeMode::default()
            }
        };
        tracing::debug!(%mode, "Theme preference loaded");
        Self {
            path,
            mode: RwLock::new(mode),
        }
    }

    /// Open `preferences.json` inside a data directory.
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        Self::open(data_dir.as_ref().join(PREFERENCES_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mode(&self) -> ThemeMode {
        *self.mode.read()
    }

    /// The single setter: update the flag and persist it.
    ///
    /// The in-memory mode changes even if writing fails, so the UI stays
    /// responsive on a read-only data directory.
    pub fn set(&self, mode: ThemeMode) -> GateResult<()> {
        *self.mode.write() = mode;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&Preferences { theme: mode })?;
        std::fs::write(&self.path, json)?;
        tracing::info!(%mode, "Theme preference saved");
        Ok(())
    }

    /// Flip the mode, persist it, and return the new value.
    pub fn toggle(&self) -> GateResult<ThemeMode> {
        let next = self.mode().toggled();
        self.set(next)?;
        Ok(next)
    }
}

fn read_preferences(path: &Path) -> GateResult<Option<Preferences>> {
    match std::fs::read_to_string(path) {
        Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_toggle() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert!(ThemeMode::Dark.is_dark());
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!(" Light ".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert!("sepia".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn test_missing_file_defaults_to_light() {
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::in_dir(dir.path());
        assert_eq!(store.mode(), ThemeMode::Light);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_set_persists() {
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::in_dir(dir.path().join("nested"));
        store.set(ThemeMode::Dark).unwrap();

        let reopened = ThemeStore::in_dir(dir.path().join("nested"));
        assert_eq!(reopened.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_toggle_flips_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::in_dir(dir.path());
        assert_eq!(store.toggle().unwrap(), ThemeMode::Dark);
        assert_eq!(store.toggle().unwrap(), ThemeMode::Light);

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"light\""));
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(PREFERENCES_FILE), "{ broken").unwrap();
        let store = ThemeStore::in_dir(dir.path());
        assert_eq!(store.mode(), ThemeMode::Light);

        // Next write replaces the broken document
        store.set(ThemeMode::Dark).unwrap();
        assert_eq!(ThemeStore::in_dir(dir.path()).mode(), ThemeMode::Dark);
    }
}
