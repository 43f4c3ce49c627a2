use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{debug, error, info, instrument, warn};

use crate::document::SettingsDocument;
use crate::errors::{ConfigError, Result};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Reads and writes the settings document at a fixed path.
///
/// The file is assumed to have a single writer. Saves overwrite it in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<user config dir>/lunar-client/config.json`.
    pub fn at_default_location() -> Result<Self> {
        Ok(Self::new(Self::default_location()?))
    }

    pub fn default_location() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "lunarclient", "lunar-client").ok_or_else(|| {
            error!(
                "Failed to determine project directories - this usually indicates an unsupported OS or missing home directory"
            );
            ConfigError::ProjectDirectoriesUnavailable
        })?;
        Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the document. A missing or unreadable file yields an empty one.
    #[instrument(skip(self), fields(path = %self.path.display()), level = "debug")]
    pub fn load(&self) -> SettingsDocument {
        if !self.path.exists() {
            info!("No config file at {}, using defaults", self.path.display());
            return SettingsDocument::new();
        }

        match std::fs::read(&self.path) {
            Ok(content) => {
                debug!(
                    "Read {} bytes from {}",
                    content.len(),
                    self.path.display()
                );
                SettingsDocument::from_json_slice(&content)
            }
            Err(e) => {
                warn!(
                    "Failed to read config file {}: {}. Using defaults",
                    self.path.display(),
                    e
                );
                SettingsDocument::new()
            }
        }
    }

    /// Writes the document, creating the parent directory when missing.
    #[instrument(skip(self, document), fields(path = %self.path.display()), level = "debug")]
    pub fn save(&self, document: &SettingsDocument) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.exists() {
                info!(
                    "Config directory doesn't exist, creating: {}",
                    parent.display()
                );
                std::fs::create_dir_all(parent).map_err(|source| {
                    error!(
                        "Failed to create config directory {}: {}",
                        parent.display(),
                        source
                    );
                    ConfigError::DirectoryCreationFailed {
                        path: parent.to_path_buf(),
                        source,
                    }
                })?;
            }
        }

        let json = document.to_json_pretty()?;

        std::fs::write(&self.path, json).map_err(|source| {
            error!(
                "Failed to write config file {}: {}",
                self.path.display(),
                source
            );
            ConfigError::FileWriteFailed {
                path: self.path.clone(),
                source,
            }
        })?;

        info!("Saved settings to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::general::GeneralPage;
    use crate::page::ConfigurationPage;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = tempdir().unwrap();
        let store = ConfigStore::new(temp_dir.path().join("config.json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_invalid_json_is_empty() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "invalid json content {{{").unwrap();

        let store = ConfigStore::new(path);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("lunar-client").join("config.json");
        let store = ConfigStore::new(&path);

        let mut document = SettingsDocument::new();
        document.set_version_index(3);
        store.save(&document).unwrap();

        assert!(path.exists(), "config.json was not created at {:?}", path);
        assert_eq!(store.load().version_index(), Some(3));
    }

    #[test]
    fn test_save_overwrites_previous_content() {
        let temp_dir = tempdir().unwrap();
        let store = ConfigStore::new(temp_dir.path().join("config.json"));

        let mut page = GeneralPage::new();
        page.set_jvm_args("-Dfirst");
        let mut document = SettingsDocument::new();
        document.save_pages(&[&page]);
        store.save(&document).unwrap();

        store.save(&SettingsDocument::new()).unwrap();

        let loaded = store.load();
        assert!(loaded.is_empty());
        assert!(loaded.page(page.title()).is_none());
    }

    #[test]
    fn test_save_into_file_parent_fails() {
        let temp_dir = tempdir().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        let store = ConfigStore::new(blocker.join("config.json"));
        let result = store.save(&SettingsDocument::new());
        assert!(matches!(result, Err(ConfigError::FileWriteFailed { .. })));
    }

    #[test]
    fn test_default_location_ends_with_config_json() {
        if let Ok(path) = ConfigStore::default_location() {
            assert!(path.ends_with(CONFIG_FILE_NAME));
        }
    }
}
