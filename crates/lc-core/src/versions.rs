use tracing::warn;

pub const SUPPORTED_VERSIONS: [&str; 5] = ["1.7", "1.8", "1.12", "1.16", "1.17"];
pub const DEFAULT_VERSION_INDEX: usize = 1;

/// Selection over the fixed list of game versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionSelect {
    index: usize,
}

impl Default for VersionSelect {
    fn default() -> Self {
        Self {
            index: DEFAULT_VERSION_INDEX,
        }
    }
}

impl VersionSelect {
    pub fn versions(&self) -> &'static [&'static str] {
        &SUPPORTED_VERSIONS
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &'static str {
        SUPPORTED_VERSIONS[self.index]
    }

    /// Returns `false` and keeps the selection for an out-of-range index.
    pub fn select(&mut self, index: usize) -> bool {
        if index < SUPPORTED_VERSIONS.len() {
            self.index = index;
            true
        } else {
            false
        }
    }

    /// Applies a stored index, falling back to the default when it is
    /// missing or out of range.
    pub fn restore(&mut self, stored: Option<i64>) {
        self.index = match stored {
            Some(index) if index >= 0 && (index as usize) < SUPPORTED_VERSIONS.len() => {
                index as usize
            }
            Some(index) => {
                warn!("Stored version index {} is out of range, using default", index);
                DEFAULT_VERSION_INDEX
            }
            None => DEFAULT_VERSION_INDEX,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_1_8() {
        assert_eq!(VersionSelect::default().current(), "1.8");
    }

    #[test]
    fn test_select_rejects_out_of_range() {
        let mut select = VersionSelect::default();
        assert!(select.select(4));
        assert_eq!(select.current(), "1.17");
        assert!(!select.select(5));
        assert_eq!(select.current_index(), 4);
    }

    #[test]
    fn test_restore_falls_back() {
        let mut select = VersionSelect::default();
        select.restore(Some(0));
        assert_eq!(select.current(), "1.7");
        select.restore(Some(-1));
        assert_eq!(select.current_index(), DEFAULT_VERSION_INDEX);
        select.restore(Some(3));
        select.restore(Some(42));
        assert_eq!(select.current_index(), DEFAULT_VERSION_INDEX);
        select.restore(Some(3));
        select.restore(None);
        assert_eq!(select.current_index(), DEFAULT_VERSION_INDEX);
    }
}
