use std::ops::RangeInclusive;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use crate::document::{PageDocument, read_bool, read_clamped, read_string};
use crate::page::{ConfigurationPage, PageIcon};

pub const MEMORY_RANGE: RangeInclusive<u32> = 1024..=16384;
pub const DEFAULT_MEMORY: u32 = 16384 / 4;

pub const WINDOW_DIMENSION_RANGE: RangeInclusive<u32> = 0..=99999;
pub const DEFAULT_WINDOW_WIDTH: u32 = 640;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 480;

const KEEP_MEMORY_SAME: &str = "keepMemorySame";
const INITIAL_MEMORY: &str = "initialMemory";
const MAX_MEMORY: &str = "maxMemory";
const WINDOW_WIDTH: &str = "windowWidth";
const WINDOW_HEIGHT: &str = "windowHeight";
const USE_CUSTOM_JRE: &str = "useCustomJre";
const CUSTOM_JRE_PATH: &str = "customJrePath";
const JVM_ARGS: &str = "jvmArgs";

/// Whether maximum memory follows initial memory.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum MemoryLock {
    /// Maximum memory mirrors initial memory and can't be edited.
    #[default]
    Locked,
    Unlocked,
}

/// Memory, window size, Java runtime and JVM argument settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneralPage {
    lock: MemoryLock,
    /// Set while the initial→maximum propagation is installed.
    binding: bool,
    initial_memory: u32,
    max_memory: u32,
    window_width: u32,
    window_height: u32,
    use_custom_jre: bool,
    custom_jre_path: String,
    jvm_args: String,
}

impl Default for GeneralPage {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneralPage {
    pub fn new() -> Self {
        let mut page = Self {
            lock: MemoryLock::Unlocked,
            binding: false,
            initial_memory: DEFAULT_MEMORY,
            max_memory: DEFAULT_MEMORY,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            use_custom_jre: false,
            custom_jre_path: String::new(),
            jvm_args: String::new(),
        };
        page.set_keep_memory_same(true);
        page
    }

    pub fn set_keep_memory_same(&mut self, keep: bool) {
        if keep {
            self.enter_locked();
        } else {
            self.enter_unlocked();
        }
    }

    fn enter_locked(&mut self) {
        self.lock = MemoryLock::Locked;
        self.max_memory = self.initial_memory;
        if !self.binding {
            self.binding = true;
            debug!("Maximum memory now follows initial memory");
        }
    }

    fn enter_unlocked(&mut self) {
        self.lock = MemoryLock::Unlocked;
        if self.binding {
            self.binding = false;
            debug!("Maximum memory decoupled from initial memory");
        }
    }

    /// Sets initial memory (clamped), forwarding it to maximum memory while locked.
    pub fn set_initial_memory(&mut self, mib: u32) {
        self.initial_memory = clamp(mib, &MEMORY_RANGE);
        if self.binding {
            self.max_memory = self.initial_memory;
        }
    }

    /// Returns `false` without changing anything while maximum memory is locked.
    pub fn set_max_memory(&mut self, mib: u32) -> bool {
        if !self.is_max_memory_editable() {
            debug!("Ignoring maximum memory edit while locked");
            return false;
        }
        self.max_memory = clamp(mib, &MEMORY_RANGE);
        true
    }

    pub fn set_window_width(&mut self, width: u32) {
        self.window_width = clamp(width, &WINDOW_DIMENSION_RANGE);
    }

    pub fn set_window_height(&mut self, height: u32) {
        self.window_height = clamp(height, &WINDOW_DIMENSION_RANGE);
    }

    /// Enables or disables the custom runtime path. The path text survives
    /// being disabled.
    pub fn set_use_custom_jre(&mut self, enabled: bool) {
        self.use_custom_jre = enabled;
    }

    /// Returns `false` when the path field is disabled.
    pub fn set_custom_jre_path(&mut self, path: impl Into<String>) -> bool {
        if !self.is_jre_path_editable() {
            return false;
        }
        self.custom_jre_path = path.into();
        true
    }

    /// Applies the result of a file picker. A cancelled or empty selection
    /// leaves the current path alone.
    pub fn apply_browsed_jre(&mut self, selection: Option<&Path>) -> bool {
        let Some(path) = selection else {
            return false;
        };
        let path = path.to_string_lossy();
        if path.is_empty() {
            return false;
        }
        self.set_custom_jre_path(path.into_owned())
    }

    pub fn set_jvm_args(&mut self, args: impl Into<String>) {
        self.jvm_args = args.into();
    }

    pub fn keeps_memory_same(&self) -> bool {
        self.lock == MemoryLock::Locked
    }

    pub fn is_max_memory_editable(&self) -> bool {
        self.lock == MemoryLock::Unlocked
    }

    pub fn is_jre_path_editable(&self) -> bool {
        self.use_custom_jre
    }

    pub fn initial_memory(&self) -> u32 {
        self.initial_memory
    }

    pub fn max_memory(&self) -> u32 {
        self.max_memory
    }

    pub fn window_width(&self) -> u32 {
        self.window_width
    }

    pub fn window_height(&self) -> u32 {
        self.window_height
    }

    pub fn is_using_custom_jre(&self) -> bool {
        self.use_custom_jre
    }

    pub fn jre_path(&self) -> &str {
        &self.custom_jre_path
    }

    pub fn jvm_args(&self) -> &str {
        &self.jvm_args
    }
}

impl ConfigurationPage for GeneralPage {
    fn title(&self) -> &'static str {
        "General"
    }

    fn icon(&self) -> PageIcon {
        PageIcon::Cog
    }

    fn save(&self, into: &mut PageDocument) {
        into.insert(KEEP_MEMORY_SAME.into(), Value::from(self.keeps_memory_same()));
        into.insert(INITIAL_MEMORY.into(), Value::from(self.initial_memory));
        into.insert(MAX_MEMORY.into(), Value::from(self.max_memory));

        into.insert(WINDOW_WIDTH.into(), Value::from(self.window_width));
        into.insert(WINDOW_HEIGHT.into(), Value::from(self.window_height));

        into.insert(USE_CUSTOM_JRE.into(), Value::from(self.use_custom_jre));
        into.insert(CUSTOM_JRE_PATH.into(), Value::from(self.custom_jre_path.as_str()));

        into.insert(JVM_ARGS.into(), Value::from(self.jvm_args.as_str()));
    }

    fn load(&mut self, from: &PageDocument) {
        let keep = read_bool(from, KEEP_MEMORY_SAME, true);
        let initial = read_clamped(from, INITIAL_MEMORY, DEFAULT_MEMORY, MEMORY_RANGE);
        let max = read_clamped(from, MAX_MEMORY, DEFAULT_MEMORY, MEMORY_RANGE);

        self.set_keep_memory_same(false);
        self.initial_memory = initial;
        self.max_memory = max;
        self.set_keep_memory_same(keep);
        if keep && initial != max {
            warn!(
                "Stored maximum memory {} differs from initial memory {} while locked, using {}",
                max, initial, initial
            );
        }

        self.window_width = read_clamped(
            from,
            WINDOW_WIDTH,
            DEFAULT_WINDOW_WIDTH,
            WINDOW_DIMENSION_RANGE,
        );
        self.window_height = read_clamped(
            from,
            WINDOW_HEIGHT,
            DEFAULT_WINDOW_HEIGHT,
            WINDOW_DIMENSION_RANGE,
        );

        self.use_custom_jre = read_bool(from, USE_CUSTOM_JRE, false);
        self.custom_jre_path = read_string(from, CUSTOM_JRE_PATH);

        self.jvm_args = read_string(from, JVM_ARGS);
    }
}

/// Reads a typed window dimension. Non-digit characters are ignored, text
/// without digits reads as 0 and anything past the range saturates to its
/// upper bound.
pub fn parse_window_dimension(text: &str) -> u32 {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return 0;
    }
    let value = digits.parse::<u64>().unwrap_or(u64::MAX);
    clamp(u32::try_from(value).unwrap_or(u32::MAX), &WINDOW_DIMENSION_RANGE)
}

fn clamp(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}
