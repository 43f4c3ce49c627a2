use crate::event::LaunchHandle;
use crate::options::LaunchOptions;

/// Starts the game described by a [`LaunchOptions`].
///
/// `launch` must return without waiting for the game. The returned handle
/// later yields exactly one [`LaunchEvent`](crate::LaunchEvent).
pub trait Launcher: Send + Sync {
    fn launch(&self, options: LaunchOptions) -> LaunchHandle;
}
