use crate::document::PageDocument;

/// Icon shown next to a page in the page list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageIcon {
    Cog,
    Puzzle,
}

/// A settings panel that can persist itself into a shared document.
///
/// `title` doubles as the display label and the key of the page's
/// sub-object, so it must be unique among registered pages. `load` must
/// accept any sub-object, falling back to per-field defaults for anything
/// missing or malformed.
pub trait ConfigurationPage {
    fn title(&self) -> &'static str;

    fn icon(&self) -> PageIcon;

    fn save(&self, into: &mut PageDocument);

    fn load(&mut self, from: &PageDocument);
}
