use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::{LaunchError, Result};
use crate::layout::LunarLayout;
use crate::options::LaunchOptions;

fn java_binary() -> &'static str {
    if cfg!(windows) { "java.exe" } else { "java" }
}

/// Picks the `java` executable for a launch.
pub fn resolve_java(options: &LaunchOptions, layout: &LunarLayout) -> Result<PathBuf> {
    if !options.find_lunar_jre {
        let path = PathBuf::from(&options.custom_jre);
        if options.custom_jre.is_empty() || !path.is_file() {
            return Err(LaunchError::CustomJreMissing { path });
        }
        return Ok(path);
    }

    if let Some(java) = find_lunar_jre(&layout.jre_dir()) {
        debug!("Using Lunar Client runtime at {}", java.display());
        return Ok(java);
    }

    find_system_java().ok_or(LaunchError::JavaNotFound)
}

/// Finds `bin/java` in the runtimes Lunar Client downloads. Runtimes are
/// unpacked either directly under `jre/<name>` or one level deeper.
pub fn find_lunar_jre(jre_dir: &Path) -> Option<PathBuf> {
    let mut candidates = Vec::new();
    for runtime in sorted_dirs(jre_dir) {
        candidates.push(runtime.join("bin").join(java_binary()));
        for nested in sorted_dirs(&runtime) {
            candidates.push(nested.join("bin").join(java_binary()));
        }
    }
    candidates.into_iter().find(|c| c.is_file())
}

fn find_system_java() -> Option<PathBuf> {
    if let Some(home) = std::env::var_os("JAVA_HOME") {
        let candidate = PathBuf::from(home).join("bin").join(java_binary());
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    let paths = std::env::var_os("PATH")?;
    std::env::split_paths(&paths)
        .map(|p| p.join(java_binary()))
        .find(|candidate| candidate.is_file())
}

fn sorted_dirs(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut dirs: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();
    dirs
}
