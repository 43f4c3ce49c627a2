mod versions;
mod window;

pub use versions::{DEFAULT_VERSION_INDEX, SUPPORTED_VERSIONS, VersionSelect};
pub use window::{
    LAUNCHING_LABEL, LaunchButton, LaunchVariant, MainWindow, Notice, PAGE_ORDER, PageEntry,
    PageKind,
};
