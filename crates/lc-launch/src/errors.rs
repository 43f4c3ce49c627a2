use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Custom Java runtime not found: '{path}'")]
    CustomJreMissing { path: PathBuf },

    #[error("No Java runtime found - checked the Lunar Client runtimes, JAVA_HOME and PATH")]
    JavaNotFound,

    #[error("Home directory is unavailable")]
    HomeDirectoryUnavailable,

    #[error("Version {version} is not installed at '{path}' - start it once from the official launcher")]
    VersionNotInstalled { version: String, path: PathBuf },

    #[error("Failed to read install directory '{path}': {source}")]
    InstallReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to start '{program}': {source}")]
    SpawnFailed {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, LaunchError>;
