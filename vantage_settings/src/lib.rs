// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage Settings: the small record of user preferences the app persists.
//!
//! Settings are stored as TOML. Every field has a default, so a partial file
//! is fine, and [`Settings::load`] never fails: a missing or unreadable file
//! logs a warning and yields [`Settings::default`].
//!
//! ```rust
//! use std::path::Path;
//! use vantage_settings::Settings;
//!
//! let settings: Settings = toml::from_str(r#"editor_path = "/usr/bin/vim""#).unwrap();
//! assert_eq!(settings.script_folder, Path::new("scripts"));
//! assert_eq!(settings.editor_path.as_deref(), Some(Path::new("/usr/bin/vim")));
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// File name used by [`Settings::default_path`].
pub const SETTINGS_FILE_NAME: &str = "vantage.toml";

/// Errors from [`Settings::save`].
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The settings could not be serialized.
    #[error("cannot serialize settings")]
    Serialize(#[from] toml::ser::Error),
    /// The settings file could not be written.
    #[error("cannot write settings to {}", path.display())]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

/// User preferences.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Folder holding the user's scripts.
    pub script_folder: PathBuf,
    /// External editor used to open scripts, if configured.
    pub editor_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            script_folder: PathBuf::from("scripts"),
            editor_path: None,
        }
    }
}

impl Settings {
    /// `vantage.toml` in the working directory.
    #[must_use]
    pub fn default_path() -> PathBuf {
        PathBuf::from(SETTINGS_FILE_NAME)
    }

    /// Loads settings from `path`, falling back to defaults.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file, using defaults");
                return Self::default();
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "cannot read settings, using defaults");
                return Self::default();
            }
        };
        match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "invalid settings, using defaults");
                Self::default()
            }
        }
    }

    /// Writes settings to `path`.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    use super::{SETTINGS_FILE_NAME, Settings};

    /// A temporary directory removed, with its contents, on drop.
    struct ScratchDir(PathBuf);

    impl ScratchDir {
        fn new(name: &str) -> Self {
            let dir = std::env::temp_dir()
                .join(format!("vantage-settings-{}-{name}", std::process::id()));
            fs::create_dir_all(&dir).unwrap();
            Self(dir)
        }

        fn join(&self, name: &str) -> PathBuf {
            self.0.join(name)
        }
    }

    impl Drop for ScratchDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.script_folder, Path::new("scripts"));
        assert_eq!(settings.editor_path, None);
        assert_eq!(Settings::default_path(), Path::new(SETTINGS_FILE_NAME));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = ScratchDir::new("missing");
        assert_eq!(Settings::load(&dir.join("absent.toml")), Settings::default());
    }

    #[test]
    fn corrupt_file_yields_defaults() {
        let dir = ScratchDir::new("corrupt");
        let path = dir.join(SETTINGS_FILE_NAME);
        fs::write(&path, "script_folder = [not toml").unwrap();
        assert_eq!(Settings::load(&path), Settings::default());
    }

    #[test]
    fn scratch_files_are_cleaned_up() {
        let dir = ScratchDir::new("cleanup");
        let root = dir.0.clone();
        Settings::default().save(&dir.join(SETTINGS_FILE_NAME)).unwrap();
        drop(dir);
        assert!(!root.exists());
    }

    #[test]
    fn saved_settings_load_back() {
        let dir = ScratchDir::new("save");
        let path = dir.join(SETTINGS_FILE_NAME);
        let settings = Settings {
            script_folder: PathBuf::from("/home/me/graphs"),
            editor_path: Some(PathBuf::from("/usr/bin/nano")),
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path), settings);
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = ScratchDir::new("nodir");
        let path = dir.join("no").join("such").join(SETTINGS_FILE_NAME);
        assert!(Settings::default().save(&path).is_err());
    }
}
