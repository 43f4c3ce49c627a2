use std::process::Stdio;

use tokio::process::Command;
use tokio::runtime::Handle;
use tracing::{error, info, instrument, warn};

use crate::command::build_args;
use crate::errors::{LaunchError, Result};
use crate::event::{LaunchHandle, LaunchReporter};
use crate::java::resolve_java;
use crate::launcher::Launcher;
use crate::layout::LunarLayout;
use crate::options::LaunchOptions;

/// Launches an offline Lunar Client install with a local Java runtime.
///
/// Reports `Finished` as soon as the game process has started. The process
/// is then waited on in the background and its exit status logged.
#[derive(Debug, Clone)]
pub struct JavaLauncher {
    runtime: Handle,
    layout: LunarLayout,
}

impl JavaLauncher {
    pub fn new(runtime: Handle, layout: LunarLayout) -> Self {
        Self { runtime, layout }
    }
}

impl Launcher for JavaLauncher {
    #[instrument(
        skip(self, options),
        fields(version = %options.version, cosmetics = options.cosmetics)
    )]
    fn launch(&self, options: LaunchOptions) -> LaunchHandle {
        let (reporter, handle) = LaunchHandle::channel();
        let layout = self.layout.clone();

        self.runtime.spawn(async move {
            run(options, layout, reporter).await;
        });

        handle
    }
}

async fn run(options: LaunchOptions, layout: LunarLayout, reporter: LaunchReporter) {
    let mut command = match prepare(&options, &layout) {
        Ok(command) => command,
        Err(e) => {
            error!("Launch of {} failed: {}", options.version, e);
            reporter.error(e.to_string());
            return;
        }
    };

    let program = command.as_std().get_program().to_owned();
    let mut child = match command.spawn() {
        Ok(child) => child,
        Err(source) => {
            let e = LaunchError::SpawnFailed {
                program: program.into(),
                source,
            };
            error!("{}", e);
            reporter.error(e.to_string());
            return;
        }
    };

    info!(
        "Started Lunar Client {} (pid {})",
        options.version,
        child.id().map(|id| id.to_string()).unwrap_or_else(|| "?".into())
    );
    reporter.finished();

    match child.wait().await {
        Ok(status) if status.success() => info!("Lunar Client {} exited", options.version),
        Ok(status) => warn!("Lunar Client {} exited with {}", options.version, status),
        Err(e) => error!("Failed to wait for Lunar Client {}: {}", options.version, e),
    }
}

fn prepare(options: &LaunchOptions, layout: &LunarLayout) -> Result<Command> {
    let java = resolve_java(options, layout)?;
    let classpath = layout.classpath(&options.version)?;

    let mut command = Command::new(&java);
    command
        .args(build_args(options, layout, &classpath))
        .current_dir(layout.version_dir(&options.version))
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::LaunchEvent;
    use tempfile::tempdir;

    fn options() -> LaunchOptions {
        LaunchOptions {
            version: "1.12".to_string(),
            find_lunar_jre: false,
            custom_jre: String::new(),
            jvm_args: String::new(),
            agents: Vec::new(),
            cosmetics: false,
            initial_memory: 1024,
            max_memory: 1024,
            window_width: 640,
            window_height: 480,
        }
    }

    #[tokio::test]
    async fn test_missing_custom_jre_reports_error() {
        let temp_dir = tempdir().unwrap();
        let launcher = JavaLauncher::new(
            Handle::current(),
            LunarLayout::new(temp_dir.path(), temp_dir.path()),
        );

        let mut opts = options();
        opts.custom_jre = temp_dir.path().join("nope").to_string_lossy().into_owned();

        match launcher.launch(opts).wait().await {
            LaunchEvent::Error(message) => {
                assert!(message.contains("Custom Java runtime not found"))
            }
            LaunchEvent::Finished => panic!("Expected an error event"),
        }
    }

    #[tokio::test]
    async fn test_missing_install_reports_error() {
        let temp_dir = tempdir().unwrap();
        let java = temp_dir.path().join("java");
        std::fs::write(&java, "").unwrap();
        let launcher = JavaLauncher::new(
            Handle::current(),
            LunarLayout::new(temp_dir.path().join("lunar"), temp_dir.path()),
        );

        let mut opts = options();
        opts.custom_jre = java.to_string_lossy().into_owned();

        match launcher.launch(opts).wait().await {
            LaunchEvent::Error(message) => assert!(message.contains("1.12")),
            LaunchEvent::Finished => panic!("Expected an error event"),
        }
    }
}
