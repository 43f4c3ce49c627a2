use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::errors::{LaunchError, Result};

/// Where Lunar Client and Minecraft keep their files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LunarLayout {
    /// `~/.lunarclient`
    pub lunar_dir: PathBuf,
    /// `~/.minecraft`
    pub game_dir: PathBuf,
}

impl LunarLayout {
    pub fn new(lunar_dir: impl Into<PathBuf>, game_dir: impl Into<PathBuf>) -> Self {
        Self {
            lunar_dir: lunar_dir.into(),
            game_dir: game_dir.into(),
        }
    }

    pub fn from_home() -> Result<Self> {
        let base = BaseDirs::new().ok_or(LaunchError::HomeDirectoryUnavailable)?;
        let home = base.home_dir();
        Ok(Self::new(home.join(".lunarclient"), home.join(".minecraft")))
    }

    pub fn jre_dir(&self) -> PathBuf {
        self.lunar_dir.join("jre")
    }

    pub fn version_dir(&self, version: &str) -> PathBuf {
        self.lunar_dir.join("offline").join(version)
    }

    pub fn natives_dir(&self, version: &str) -> PathBuf {
        self.version_dir(version).join("natives")
    }

    pub fn textures_dir(&self) -> PathBuf {
        self.lunar_dir.join("textures")
    }

    /// Every jar of an installed version, sorted for a stable classpath.
    pub fn classpath(&self, version: &str) -> Result<Vec<PathBuf>> {
        let dir = self.version_dir(version);
        if !dir.is_dir() {
            return Err(LaunchError::VersionNotInstalled {
                version: version.to_string(),
                path: dir,
            });
        }

        let entries = std::fs::read_dir(&dir).map_err(|source| LaunchError::InstallReadFailed {
            path: dir.clone(),
            source,
        })?;

        let mut jars: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| is_jar(path))
            .collect();
        jars.sort();

        if jars.is_empty() {
            return Err(LaunchError::VersionNotInstalled {
                version: version.to_string(),
                path: dir,
            });
        }
        Ok(jars)
    }
}

fn is_jar(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("jar"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_classpath_lists_sorted_jars() {
        let temp_dir = tempdir().unwrap();
        let layout = LunarLayout::new(temp_dir.path().join("lunar"), temp_dir.path().join("mc"));
        let dir = layout.version_dir("1.8");
        fs::create_dir_all(dir.join("natives")).unwrap();
        fs::write(dir.join("vpatcher.jar"), "").unwrap();
        fs::write(dir.join("lunar-prod.jar"), "").unwrap();
        fs::write(dir.join("readme.txt"), "").unwrap();

        let classpath = layout.classpath("1.8").unwrap();
        assert_eq!(
            classpath,
            vec![dir.join("lunar-prod.jar"), dir.join("vpatcher.jar")]
        );
    }

    #[test]
    fn test_classpath_missing_version() {
        let temp_dir = tempdir().unwrap();
        let layout = LunarLayout::new(temp_dir.path(), temp_dir.path());

        let result = layout.classpath("1.17");
        if let Err(LaunchError::VersionNotInstalled { version, .. }) = result {
            assert_eq!(version, "1.17");
        } else {
            panic!("Expected VersionNotInstalled error");
        }
    }
}
