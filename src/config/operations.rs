use crate::config::types::Settings;

use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub fn load_cfg(path: &Path) -> Settings {
    if let Ok(file) = File::open(path) {
        match serde_json::from_reader::<_, Settings>(BufReader::new(file)) {
            Ok(settings) => return settings,
            Err(e) => {
                eprintln!(
                    "[savehook] Warning: Ignoring invalid settings file {}: {}",
                    path.display(),
                    e
                );
            }
        }
    }

    // Return default settings if file doesn't exist or has error
    Settings::default()
}

pub fn save_cfg(path: &Path, settings: &Settings) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, settings)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_cfg(&dir.path().join("settings.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "sync_folder": "saves", "notifications": false }"#).unwrap();

        let settings = load_cfg(&path);
        assert_eq!(settings.sync_folder, "saves");
        assert!(!settings.notifications);
        assert!(settings.sync_check);
        assert_eq!(settings.probe_hosts.len(), 3);
    }

    #[test]
    fn test_invalid_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();
        assert_eq!(load_cfg(&path), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/settings.json");
        let settings = Settings {
            notify_delay_ms: 10,
            ..Settings::default()
        };
        save_cfg(&path, &settings).unwrap();
        assert_eq!(load_cfg(&path), settings);
    }
}
