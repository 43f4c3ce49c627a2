//! Settings pages and their JSON persistence.
//!
//! Every page implements [`ConfigurationPage`] and serializes itself into a
//! sub-object of the [`SettingsDocument`], keyed by its title. The
//! [`ConfigStore`] reads and writes that document as `config.json`.

pub mod agents;
pub mod document;
pub mod errors;
pub mod general;
pub mod page;
pub mod store;

pub use agents::{Agent, AgentsPage};
pub use document::{PageDocument, SettingsDocument};
pub use errors::{ConfigError, Result};
pub use general::GeneralPage;
pub use page::{ConfigurationPage, PageIcon};
pub use store::ConfigStore;
