//! File I/O for native CLI

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

use wordtally_core::{prepare_export, Settings};

const SETTINGS_FILE: &str = "settings.json";

/// Read a text file into a string
pub fn load_file(path: &str) -> Result<String> {
    let path = Path::new(path);
    let canonical = path
        .canonicalize()
        .with_context(|| format!("Failed to resolve path: {}", path.display()))?;

    fs::read_to_string(&canonical)
        .with_context(|| format!("Failed to read file: {}", canonical.display()))
}

/// Get the ~/.wordtally directory path, creating it if needed
pub fn wordtally_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not find home directory")?;
    let dir = home.join(".wordtally");

    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    Ok(dir)
}

/// Write `text` to `<dir>/text_<date>.txt`
pub fn export_text(dir: &Path, text: &str, date: NaiveDate) -> Result<PathBuf> {
    let export = prepare_export(text, date)?;
    let export_path = dir.join(&export.filename);

    fs::write(&export_path, export.contents)
        .with_context(|| format!("Failed to write {}", export_path.display()))?;

    log::info!("exported text to {}", export_path.display());
    Ok(export_path)
}

/// Load settings from `dir`, falling back to defaults if absent or unreadable
pub fn load_settings(dir: &Path) -> Settings {
    let path = dir.join(SETTINGS_FILE);
    if !path.exists() {
        return Settings::default();
    }

    let parsed = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))
        .and_then(|json| Settings::from_json(&json).context("Failed to parse settings"));

    match parsed {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("using default settings: {:#}", e);
            Settings::default()
        }
    }
}

/// Persist settings to `<dir>/settings.json`
pub fn save_settings(dir: &Path, settings: &Settings) -> Result<()> {
    let path = dir.join(SETTINGS_FILE);
    let json = settings.to_json().context("Failed to serialize settings")?;

    fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordtally_core::Theme;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    #[test]
    fn test_export_writes_dated_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_text(dir.path(), "Hello\n", day()).unwrap();

        assert_eq!(path.file_name().unwrap(), "text_2024-03-05.txt");
        assert_eq!(fs::read_to_string(path).unwrap(), "Hello\n");
    }

    #[test]
    fn test_export_rejects_blank_text() {
        let dir = tempfile::tempdir().unwrap();
        let err = export_text(dir.path(), "  \n", day()).unwrap_err();

        assert!(err.to_string().contains("enter some text"));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_settings_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_settings(dir.path()), Settings::default());

        save_settings(dir.path(), &Settings { theme: Theme::Dark }).unwrap();
        assert_eq!(load_settings(dir.path()).theme, Theme::Dark);
    }

    #[test]
    fn test_corrupt_settings_fall_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), "{ nope").unwrap();

        assert_eq!(load_settings(dir.path()), Settings::default());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_file("/definitely/not/here.txt").unwrap_err();
        assert!(err.to_string().contains("Failed to resolve path"));
    }
}
