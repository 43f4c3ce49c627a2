use std::collections::VecDeque;
use std::sync::Arc;

use lc_config::{
    AgentsPage, ConfigStore, ConfigurationPage, GeneralPage, PageIcon, SettingsDocument,
};
use lc_launch::{LaunchEvent, LaunchHandle, LaunchOptions, Launcher};
use tracing::{debug, error, info, instrument, warn};

use crate::versions::VersionSelect;

/// Pages in display order. The page list row and the content stack share
/// this index.
pub const PAGE_ORDER: [PageKind; 2] = [PageKind::General, PageKind::Agents];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    General,
    Agents,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaunchVariant {
    Cosmetics,
    NoCosmetics,
}

impl LaunchVariant {
    pub fn cosmetics(self) -> bool {
        matches!(self, Self::Cosmetics)
    }

    pub fn default_label(self) -> &'static str {
        match self {
            Self::Cosmetics => "Launch",
            Self::NoCosmetics => "Launch without cosmetics",
        }
    }
}

pub const LAUNCHING_LABEL: &str = "Launching...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchButton {
    pub variant: LaunchVariant,
    pub label: &'static str,
    pub enabled: bool,
}

/// A message the front-end must show in a blocking dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEntry {
    pub kind: PageKind,
    pub title: &'static str,
    pub icon: PageIcon,
}

/// State behind the launcher window: pages, version selector, launch
/// buttons and the settings file lifecycle.
pub struct MainWindow {
    general: GeneralPage,
    agents: AgentsPage,
    current_page: usize,
    versions: VersionSelect,
    launching: bool,
    notices: VecDeque<Notice>,
    store: ConfigStore,
    launcher: Arc<dyn Launcher>,
}

impl MainWindow {
    pub fn new(store: ConfigStore, launcher: Arc<dyn Launcher>) -> Self {
        Self {
            general: GeneralPage::new(),
            agents: AgentsPage::new(),
            current_page: 0,
            versions: VersionSelect::default(),
            launching: false,
            notices: VecDeque::new(),
            store,
            launcher,
        }
    }

    pub fn page(&self, kind: PageKind) -> &dyn ConfigurationPage {
        match kind {
            PageKind::General => &self.general,
            PageKind::Agents => &self.agents,
        }
    }

    pub fn pages(&self) -> Vec<&dyn ConfigurationPage> {
        PAGE_ORDER.iter().map(|kind| self.page(*kind)).collect()
    }

    pub fn page_entries(&self) -> Vec<PageEntry> {
        PAGE_ORDER
            .iter()
            .map(|kind| {
                let page = self.page(*kind);
                PageEntry {
                    kind: *kind,
                    title: page.title(),
                    icon: page.icon(),
                }
            })
            .collect()
    }

    /// Switches the visible page. Rows outside the page list are ignored.
    pub fn select_page(&mut self, row: usize) -> bool {
        if row >= PAGE_ORDER.len() {
            return false;
        }
        self.current_page = row;
        true
    }

    pub fn current_page_index(&self) -> usize {
        self.current_page
    }

    pub fn current_page(&self) -> PageKind {
        PAGE_ORDER[self.current_page]
    }

    pub fn general(&self) -> &GeneralPage {
        &self.general
    }

    pub fn general_mut(&mut self) -> &mut GeneralPage {
        &mut self.general
    }

    pub fn agents(&self) -> &AgentsPage {
        &self.agents
    }

    pub fn agents_mut(&mut self) -> &mut AgentsPage {
        &mut self.agents
    }

    pub fn versions(&self) -> &VersionSelect {
        &self.versions
    }

    pub fn select_version(&mut self, index: usize) -> bool {
        self.versions.select(index)
    }

    pub fn launch_buttons(&self) -> [LaunchButton; 2] {
        [LaunchVariant::Cosmetics, LaunchVariant::NoCosmetics].map(|variant| LaunchButton {
            variant,
            label: if self.launching {
                LAUNCHING_LABEL
            } else {
                variant.default_label()
            },
            enabled: !self.launching,
        })
    }

    /// Snapshot of the live page state for one launch attempt.
    pub fn launch_options(&self, variant: LaunchVariant) -> LaunchOptions {
        let general = &self.general;
        let custom = general.is_using_custom_jre();

        LaunchOptions {
            version: self.versions.current().to_string(),
            find_lunar_jre: !custom,
            custom_jre: if custom {
                general.jre_path().to_string()
            } else {
                String::new()
            },
            jvm_args: general.jvm_args().to_string(),
            agents: self.agents.get_agents(),
            cosmetics: variant.cosmetics(),
            initial_memory: general.initial_memory(),
            max_memory: general.max_memory(),
            window_width: general.window_width(),
            window_height: general.window_height(),
        }
    }

    /// Starts a launch unless one is already running. The caller waits on
    /// the handle and passes the event to [`MainWindow::on_launch_event`].
    #[instrument(skip(self), level = "info")]
    pub fn launch(&mut self, variant: LaunchVariant) -> Option<LaunchHandle> {
        if self.launching {
            warn!("A launch is already in progress, ignoring");
            return None;
        }

        let options = self.launch_options(variant);
        info!(
            "Launching {} (cosmetics: {}, custom jre: {})",
            options.version, options.cosmetics, !options.find_lunar_jre
        );

        self.launching = true;
        Some(self.launcher.launch(options))
    }

    /// Applies the terminal event of the running launch. Both outcomes
    /// restore the launch buttons; errors also queue a notice.
    pub fn on_launch_event(&mut self, event: LaunchEvent) {
        self.launching = false;
        match event {
            LaunchEvent::Finished => info!("Launch finished"),
            LaunchEvent::Error(message) => {
                error!("Launch failed: {}", message);
                self.notices.push_back(Notice {
                    title: "Launch failed".to_string(),
                    message,
                });
            }
        }
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notices.pop_front()
    }

    pub fn pending_notices(&self) -> usize {
        self.notices.len()
    }

    /// Serializes every page in order plus the selected version.
    pub fn to_document(&self) -> SettingsDocument {
        let mut document = SettingsDocument::new();
        document.save_pages(&self.pages());
        document.set_version_index(self.versions.current_index());
        document
    }

    pub fn apply_document(&mut self, document: &SettingsDocument) {
        let mut pages: [&mut dyn ConfigurationPage; 2] = [&mut self.general, &mut self.agents];
        document.load_pages(&mut pages);
        self.versions.restore(document.version_index());
        debug!("Restored version {}", self.versions.current());
    }

    pub fn save(&self) -> lc_config::Result<()> {
        self.store.save(&self.to_document())
    }

    pub fn load(&mut self) {
        let document = self.store.load();
        self.apply_document(&document);
    }

    pub fn on_startup(&mut self) {
        info!("Loading settings from {}", self.store.path().display());
        self.load();
    }

    /// Saves the settings. Always allows the shutdown, even when saving fails.
    pub fn on_shutdown_requested(&mut self) -> bool {
        if let Err(e) = self.save() {
            error!("Failed to save settings on shutdown: {}", e);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::tempdir;

    #[derive(Default)]
    struct RecordingLauncher {
        launched: Mutex<Vec<LaunchOptions>>,
    }

    impl Launcher for RecordingLauncher {
        fn launch(&self, options: LaunchOptions) -> LaunchHandle {
            self.launched.lock().unwrap().push(options);
            LaunchHandle::ready(LaunchEvent::Finished)
        }
    }

    struct FailingLauncher;

    impl Launcher for FailingLauncher {
        fn launch(&self, _options: LaunchOptions) -> LaunchHandle {
            LaunchHandle::ready(LaunchEvent::Error("Network unreachable".to_string()))
        }
    }

    fn window_with(launcher: Arc<dyn Launcher>) -> (tempfile::TempDir, MainWindow) {
        let temp_dir = tempdir().unwrap();
        let store = ConfigStore::new(temp_dir.path().join("lunar-client").join("config.json"));
        (temp_dir, MainWindow::new(store, launcher))
    }

    fn custom_jre_state(window: &mut MainWindow) {
        assert!(window.select_version(3));
        let general = window.general_mut();
        general.set_use_custom_jre(true);
        general.set_custom_jre_path("/x/java");
        general.set_jvm_args("-Xmx1g");
        general.set_initial_memory(2048);
        general.set_window_width(800);
        general.set_window_height(600);
    }

    #[test]
    fn test_page_order_and_selection() {
        let (_dir, mut window) = window_with(Arc::new(RecordingLauncher::default()));

        let titles: Vec<&str> = window.page_entries().iter().map(|e| e.title).collect();
        assert_eq!(titles, vec!["General", "Agents"]);
        assert_eq!(window.current_page(), PageKind::General);

        assert!(window.select_page(1));
        assert_eq!(window.current_page(), PageKind::Agents);
        assert!(!window.select_page(2));
        assert_eq!(window.current_page_index(), 1);
    }

    #[test]
    fn test_launch_options_with_custom_jre() {
        let (_dir, mut window) = window_with(Arc::new(RecordingLauncher::default()));
        custom_jre_state(&mut window);

        let options = window.launch_options(LaunchVariant::Cosmetics);
        assert_eq!(options.version, "1.16");
        assert!(!options.find_lunar_jre);
        assert_eq!(options.custom_jre, "/x/java");
        assert_eq!(options.jvm_args, "-Xmx1g");
        assert_eq!(options.initial_memory, 2048);
        assert_eq!(options.max_memory, 2048);
        assert_eq!(options.window_width, 800);
        assert_eq!(options.window_height, 600);
        assert!(options.cosmetics);
    }

    #[test]
    fn test_launch_options_without_custom_jre() {
        let (_dir, mut window) = window_with(Arc::new(RecordingLauncher::default()));
        custom_jre_state(&mut window);
        window.general_mut().set_use_custom_jre(false);

        let options = window.launch_options(LaunchVariant::NoCosmetics);
        assert!(options.find_lunar_jre);
        assert_eq!(options.custom_jre, "");
        assert!(!options.cosmetics);
    }

    #[test]
    fn test_variants_differ_only_in_cosmetics() {
        let (_dir, mut window) = window_with(Arc::new(RecordingLauncher::default()));
        custom_jre_state(&mut window);
        window.agents_mut().add_agent("/agents/a.jar");

        let mut with = window.launch_options(LaunchVariant::Cosmetics);
        let without = window.launch_options(LaunchVariant::NoCosmetics);
        assert_eq!(with.agents, vec!["/agents/a.jar".to_string()]);
        with.cosmetics = false;
        assert_eq!(with, without);
    }

    #[tokio::test]
    async fn test_launch_disables_buttons_until_finished() {
        let launcher = Arc::new(RecordingLauncher::default());
        let (_dir, mut window) = window_with(launcher.clone());

        let handle = window.launch(LaunchVariant::Cosmetics).unwrap();
        assert!(window.launch_buttons().iter().all(|b| !b.enabled && b.label == LAUNCHING_LABEL));
        assert!(window.launch(LaunchVariant::NoCosmetics).is_none());
        assert_eq!(launcher.launched.lock().unwrap().len(), 1);

        window.on_launch_event(handle.wait().await);
        let buttons = window.launch_buttons();
        assert!(buttons.iter().all(|b| b.enabled));
        assert_eq!(buttons[0].label, "Launch");
        assert_eq!(buttons[1].label, "Launch without cosmetics");
        assert_eq!(window.pending_notices(), 0);
    }

    #[tokio::test]
    async fn test_error_surfaces_one_notice_and_keeps_pages() {
        let (_dir, mut window) = window_with(Arc::new(FailingLauncher));
        custom_jre_state(&mut window);
        let before = window.to_document();

        let handle = window.launch(LaunchVariant::NoCosmetics).unwrap();
        window.on_launch_event(handle.wait().await);

        assert_eq!(window.pending_notices(), 1);
        let notice = window.take_notice().unwrap();
        assert!(notice.message.contains("Network unreachable"));
        assert_eq!(window.take_notice(), None);

        assert_eq!(window.to_document(), before);
        assert!(window.launch_buttons().iter().all(|b| b.enabled));
    }

    #[test]
    fn test_save_then_load_restores_everything() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("lunar-client").join("config.json");

        let mut window = MainWindow::new(
            ConfigStore::new(&path),
            Arc::new(RecordingLauncher::default()),
        );
        custom_jre_state(&mut window);
        window.agents_mut().add_agent("/agents/a.jar");
        assert!(window.on_shutdown_requested());

        let mut restored = MainWindow::new(
            ConfigStore::new(&path),
            Arc::new(RecordingLauncher::default()),
        );
        restored.on_startup();

        assert_eq!(restored.versions().current(), "1.16");
        assert_eq!(restored.general(), window.general());
        assert_eq!(restored.agents(), window.agents());
    }

    #[test]
    fn test_document_keys_are_page_titles() {
        let (_dir, window) = window_with(Arc::new(RecordingLauncher::default()));
        let document = window.to_document();

        let mut keys: Vec<&str> = document.keys().collect();
        keys.sort();
        assert_eq!(keys, vec!["Agents", "General", "version"]);
        assert_eq!(document.version_index(), Some(1));
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let (_dir, mut window) = window_with(Arc::new(RecordingLauncher::default()));
        window.select_version(0);
        window.general_mut().set_initial_memory(8192);

        window.load();

        assert_eq!(window.versions().current_index(), 1);
        assert_eq!(window.general(), &GeneralPage::new());
    }

    #[test]
    fn test_shutdown_allowed_when_save_fails() {
        let temp_dir = tempdir().unwrap();
        let blocker = temp_dir.path().join("file");
        std::fs::write(&blocker, "").unwrap();

        let mut window = MainWindow::new(
            ConfigStore::new(blocker.join("config.json")),
            Arc::new(RecordingLauncher::default()),
        );
        assert!(window.save().is_err());
        assert!(window.on_shutdown_requested());
    }
}
