//! On-disk persistence
//!
//! Settings and the last finished run live as small JSON files in one
//! directory. Every public call is total: a failed read logs and falls
//! back, a failed write logs and drops the payload, and the engine keeps
//! running either way.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::settings::{Settings, SettingsPatch};
use crate::stats::RunSummary;

/// Settings file name inside the store directory.
const SETTINGS_FILE: &str = "settings.json";
/// Last-run summary file name inside the store directory.
const LAST_RUN_FILE: &str = "last_run.json";

/// Why a read or write failed. Surfaces only in logs.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage io: {0}")]
    Io(#[from] io::Error),
    #[error("storage encoding: {0}")]
    Json(#[from] serde_json::Error),
}

/// JSON file store rooted at one directory.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Load persisted settings. The file is read as a patch over defaults,
    /// so missing fields, bad values, or no file at all still yield a
    /// usable configuration.
    pub fn load_settings(&self) -> Settings {
        match self.read_json::<SettingsPatch>(SETTINGS_FILE) {
            Ok(patch) => Settings::default().merged(&patch),
            Err(StoreError::Io(e)) if e.kind() == io::ErrorKind::NotFound => Settings::default(),
            Err(e) => {
                log::warn!("failed to load settings: {e}");
                Settings::default()
            }
        }
    }

    pub fn save_settings(&self, settings: &Settings) {
        if let Err(e) = self.write_json(SETTINGS_FILE, settings) {
            log::warn!("failed to save settings: {e}");
        }
    }

    /// Load the most recent finished run, if one was ever recorded.
    pub fn load_last_run(&self) -> Option<RunSummary> {
        match self.read_json::<RunSummary>(LAST_RUN_FILE) {
            Ok(summary) => Some(summary),
            Err(StoreError::Io(e)) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                log::warn!("failed to load last run: {e}");
                None
            }
        }
    }

    pub fn save_last_run(&self, summary: &RunSummary) {
        if let Err(e) = self.write_json(LAST_RUN_FILE, summary) {
            log::warn!("failed to save last run: {e}");
        }
    }

    fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    fn read_json<T: DeserializeOwned>(&self, file: &str) -> Result<T, StoreError> {
        let text = fs::read_to_string(self.path(file))?;
        Ok(serde_json::from_str(&text)?)
    }

    fn write_json<T: Serialize>(&self, file: &str, value: &T) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path(file), serde_json::to_string_pretty(value)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());
        let settings = Settings {
            ui_opacity: 0.6,
            speed_level: 5,
            difficulty_progression: false,
        };

        store.save_settings(&settings);
        assert_eq!(store.load_settings(), settings);
    }

    #[test]
    fn test_missing_files_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("never-created"));

        assert_eq!(store.load_settings(), Settings::default());
        assert_eq!(store.load_last_run(), None);
    }

    #[test]
    fn test_partial_settings_file_merges_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), r#"{ "speed_level": 5 }"#).unwrap();

        let store = Store::new(dir.path());
        let settings = store.load_settings();
        assert_eq!(settings.speed_level, 5);
        assert_eq!(settings.ui_opacity, 1.0);
        assert!(settings.difficulty_progression);
    }

    #[test]
    fn test_corrupt_settings_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), "not json {").unwrap();

        let store = Store::new(dir.path());
        assert_eq!(store.load_settings(), Settings::default());
    }

    #[test]
    fn test_out_of_range_settings_clamped_on_load() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(SETTINGS_FILE),
            r#"{ "ui_opacity": 9.0, "speed_level": 0 }"#,
        )
        .unwrap();

        let store = Store::new(dir.path());
        let settings = store.load_settings();
        assert_eq!(settings.ui_opacity, 1.0);
        assert_eq!(settings.speed_level, 1);
    }

    #[test]
    fn test_last_run_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());
        let summary = RunSummary {
            destroyed: 12,
            misses: 3,
            clicks: 20,
            time_secs: 95.5,
        };

        store.save_last_run(&summary);
        assert_eq!(store.load_last_run(), Some(summary));
    }
}
