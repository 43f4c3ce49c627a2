use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::layout::LunarLayout;
use crate::options::LaunchOptions;

pub const MAIN_CLASS: &str = "com.moonsworth.lunar.patcher.LunarMain";

/// Arguments passed to `java`, in order.
pub fn build_args(
    options: &LaunchOptions,
    layout: &LunarLayout,
    classpath: &[PathBuf],
) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        format!("-Xms{}m", options.initial_memory).into(),
        format!("-Xmx{}m", options.max_memory).into(),
    ];

    args.extend(options.jvm_args.split_whitespace().map(OsString::from));

    for agent in &options.agents {
        args.push(format!("-javaagent:{}", agent).into());
    }

    args.push(prefixed("-Djava.library.path=", &layout.natives_dir(&options.version)));
    args.push("-cp".into());
    args.push(join_classpath(classpath));
    args.push(MAIN_CLASS.into());

    args.extend(
        [
            "--version",
            options.version.as_str(),
            "--accessToken",
            "0",
            "--assetIndex",
            options.version.as_str(),
            "--userProperties",
            "{}",
        ]
        .into_iter()
        .map(OsString::from),
    );
    args.push("--gameDir".into());
    args.push(layout.game_dir.clone().into_os_string());

    if options.cosmetics {
        args.push("--texturesDir".into());
        args.push(layout.textures_dir().into_os_string());
    }

    args.push("--width".into());
    args.push(options.window_width.to_string().into());
    args.push("--height".into());
    args.push(options.window_height.to_string().into());

    args
}

fn prefixed(prefix: &str, path: &Path) -> OsString {
    let mut arg = OsString::from(prefix);
    arg.push(path.as_os_str());
    arg
}

fn join_classpath(classpath: &[PathBuf]) -> OsString {
    let separator = if cfg!(windows) { ";" } else { ":" };
    let mut joined = OsString::new();
    for (i, jar) in classpath.iter().enumerate() {
        if i > 0 {
            joined.push(separator);
        }
        joined.push(jar.as_os_str());
    }
    joined
}
