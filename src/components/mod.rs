pub use launcher_view::LauncherView;

pub mod agents_page;
pub mod general_page;
pub mod launcher_view;
pub mod sidebar;
