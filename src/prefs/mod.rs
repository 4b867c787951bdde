//! Persisted UI preferences.
//!
//! The theme choice survives across sessions in a small TOML file. The
//! store location is injected into whatever needs it (the GUI takes it as a
//! constructor argument), so tests and alternate frontends can point it
//! anywhere.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// The active color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

/// Persisted preferences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prefs {
    #[serde(default)]
    pub theme: ThemeMode,
}

/// File-backed preference store.
#[derive(Debug, Clone)]
pub struct PrefsStore {
    path: PathBuf,
}

impl PrefsStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The standard store location (~/.prettyrc/prefs.toml).
    pub fn default_location() -> Self {
        let dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".prettyrc");
        Self::at(dir.join("prefs.toml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load preferences, falling back to defaults when the file is missing
    /// or unreadable. A corrupt file is logged, never fatal.
    pub fn load(&self) -> Prefs {
        if !self.path.exists() {
            return Prefs::default();
        }
        match std::fs::read_to_string(&self.path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(prefs) => prefs,
                Err(e) => {
                    tracing::warn!(
                        "Failed to parse prefs ({}): {}. Falling back to defaults.",
                        self.path.display(),
                        e
                    );
                    Prefs::default()
                }
            },
            Err(e) => {
                tracing::warn!(
                    "Failed to read prefs ({}): {}. Falling back to defaults.",
                    self.path.display(),
                    e
                );
                Prefs::default()
            }
        }
    }

    pub fn save(&self, prefs: &Prefs) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create prefs directory: {}", parent.display())
            })?;
        }

        let content =
            toml::to_string_pretty(prefs).with_context(|| "Failed to serialize prefs")?;

        // Temp file + rename so a crash mid-write cannot corrupt the store.
        let temp_path = self.path.with_extension("toml.tmp");
        std::fs::write(&temp_path, content)
            .with_context(|| format!("Failed to write prefs: {}", temp_path.display()))?;
        std::fs::rename(&temp_path, &self.path)
            .with_context(|| format!("Failed to rename prefs file: {}", self.path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = PrefsStore::at(dir.path().join("prefs.toml"));
        assert_eq!(store.load(), Prefs::default());
        assert!(store.load().theme.is_dark());
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = PrefsStore::at(dir.path().join("prefs.toml"));

        let prefs = Prefs {
            theme: ThemeMode::Light,
        };
        store.save(&prefs).unwrap();
        assert_eq!(store.load(), prefs);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        std::fs::write(&path, "not = [valid").unwrap();

        let store = PrefsStore::at(&path);
        assert_eq!(store.load(), Prefs::default());
    }

    #[test]
    fn test_toggled_flips_both_ways() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    }
}
