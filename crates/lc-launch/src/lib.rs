//! Launch options and the launcher abstraction.
//!
//! A [`Launcher`] takes a [`LaunchOptions`] and returns a [`LaunchHandle`]
//! right away; the handle resolves to one [`LaunchEvent`] once the attempt
//! has either started the game or failed. [`JavaLauncher`] runs an offline
//! Lunar Client install.

pub mod command;
pub mod errors;
pub mod event;
pub mod java;
pub mod launcher;
pub mod layout;
pub mod options;
pub mod process;

pub use errors::{LaunchError, Result};
pub use event::{LaunchEvent, LaunchHandle, LaunchReporter};
pub use launcher::Launcher;
pub use layout::LunarLayout;
pub use options::LaunchOptions;
pub use process::JavaLauncher;
