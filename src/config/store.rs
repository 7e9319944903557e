use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::types::{ConfigError, Settings};

/// Environment override for the settings directory, mainly for tests and
/// sandboxed setups.
pub const CONFIG_DIR_ENV: &str = "LESSONKIT_CONFIG_DIR";

const CONFIG_FILE_NAME: &str = "config.json";

/// A persistent store for user settings.
pub struct SettingsStore {
    path: PathBuf,
    data: Settings,
    dirty: bool,
}

/// Resolve the settings file path: `$LESSONKIT_CONFIG_DIR/config.json`
/// when the override is set, the platform config directory otherwise.
pub fn default_settings_path() -> Result<PathBuf, ConfigError> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir).join(CONFIG_FILE_NAME));
    }

    dirs::config_dir()
        .map(|dir| dir.join("lessonkit").join(CONFIG_FILE_NAME))
        .ok_or(ConfigError::NoConfigDir)
}

/// Load settings leniently: a missing or unreadable file yields defaults.
pub fn load_settings() -> Settings {
    match default_settings_path() {
        Ok(path) => SettingsStore::load(path).settings().clone(),
        Err(e) => {
            warn!("No configuration directory available: {}", e);
            Settings::default()
        }
    }
}

impl SettingsStore {
    /// Load the store from disk or start from defaults.
    pub fn load(path: PathBuf) -> Self {
        let data = match Self::read_settings_file(&path) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(ConfigError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No settings file found, using defaults");
                Settings::default()
            }
            Err(e) => {
                warn!("Failed to load settings: {}, using defaults", e);
                Settings::default()
            }
        };

        Self {
            path,
            data,
            dirty: false,
        }
    }

    /// Load the store from the default location.
    pub fn load_default() -> Result<Self, ConfigError> {
        Ok(Self::load(default_settings_path()?))
    }

    fn read_settings_file(path: &Path) -> Result<Settings, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| ConfigError::Corrupted(e.to_string()))
    }

    pub fn settings(&self) -> &Settings {
        &self.data
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Set the archive folder, which must exist.
    pub fn set_video_folder(&mut self, folder: PathBuf) -> Result<(), ConfigError> {
        if !folder.is_dir() {
            return Err(ConfigError::FolderNotFound(folder));
        }
        self.data.video_folder = Some(folder);
        self.dirty = true;
        Ok(())
    }

    pub fn set_multipart(&mut self, enabled: bool) {
        self.data.multipart = enabled;
        self.dirty = true;
    }

    /// Drop all settings back to defaults.
    pub fn reset(&mut self) {
        self.data = Settings::default();
        self.dirty = true;
    }

    /// Save to disk if modified.
    pub fn save(&mut self) -> Result<(), ConfigError> {
        if !self.dirty {
            debug!("Settings not modified, skipping save");
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self.path.with_extension("json.tmp");

        {
            let file = File::create(&temp_path)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, &self.data)
                .map_err(|e| ConfigError::Corrupted(e.to_string()))?;
            writer.flush()?;
        }

        fs::rename(&temp_path, &self.path)?;

        self.dirty = false;
        info!("Settings saved to {:?}", self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::load(dir.path().join("config.json"));

        assert_eq!(store.settings(), &Settings::default());
    }

    #[test]
    fn test_load_corrupt_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        let store = SettingsStore::load(path);

        assert_eq!(store.settings(), &Settings::default());
    }

    #[test]
    fn test_set_and_save_round_trip() {
        let dir = tempdir().unwrap();
        let archive = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut store = SettingsStore::load(path.clone());
        store.set_video_folder(archive.path().to_path_buf()).unwrap();
        store.set_multipart(true);
        store.save().unwrap();

        let reloaded = SettingsStore::load(path);
        assert_eq!(
            reloaded.settings().video_folder,
            Some(archive.path().to_path_buf())
        );
        assert!(reloaded.settings().multipart);
    }

    #[test]
    fn test_set_video_folder_requires_existing_directory() {
        let dir = tempdir().unwrap();
        let mut store = SettingsStore::load(dir.path().join("config.json"));

        let result = store.set_video_folder(PathBuf::from("/nonexistent/folder"));

        assert!(matches!(result, Err(ConfigError::FolderNotFound(_))));
        assert!(store.settings().video_folder.is_none());
    }

    #[test]
    fn test_reset_clears_settings() {
        let dir = tempdir().unwrap();
        let archive = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut store = SettingsStore::load(path.clone());
        store.set_video_folder(archive.path().to_path_buf()).unwrap();
        store.save().unwrap();

        store.reset();
        store.save().unwrap();

        let reloaded = SettingsStore::load(path);
        assert_eq!(reloaded.settings(), &Settings::default());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut store = SettingsStore::load(path.clone());
        store.set_multipart(true);
        store.save().unwrap();

        assert!(path.exists());
    }
}
