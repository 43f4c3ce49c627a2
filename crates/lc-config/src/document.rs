use std::ops::RangeInclusive;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::errors::{ConfigError, Result};
use crate::page::ConfigurationPage;

/// The sub-object a single page reads from and writes into.
pub type PageDocument = Map<String, Value>;

/// Top-level key holding the selected game version index.
pub const VERSION_KEY: &str = "version";

/// The whole settings tree as stored in `config.json`.
///
/// One sub-object per page keyed by the page title, plus the top-level
/// `version` index. There is no schema version.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsDocument {
    root: Map<String, Value>,
}

impl SettingsDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a document, treating anything that isn't a JSON object as empty.
    pub fn from_json_slice(bytes: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(Value::Object(root)) => Self { root },
            Ok(other) => {
                warn!(
                    "Settings document is not a JSON object (found {}), using defaults",
                    json_kind(&other)
                );
                Self::default()
            }
            Err(e) => {
                warn!("Failed to parse settings document: {}. Using defaults", e);
                Self::default()
            }
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.root)
            .map_err(|source| ConfigError::SerializationFailed { source })
    }

    /// Returns the sub-object stored under `title`, if it is an object.
    pub fn page(&self, title: &str) -> Option<&PageDocument> {
        self.root.get(title).and_then(Value::as_object)
    }

    /// Stores a page sub-object, returning the one it replaced.
    pub fn set_page(&mut self, title: &str, page: PageDocument) -> Option<PageDocument> {
        match self.root.insert(title.to_string(), Value::Object(page)) {
            Some(Value::Object(previous)) => Some(previous),
            _ => None,
        }
    }

    pub fn version_index(&self) -> Option<i64> {
        self.root.get(VERSION_KEY).and_then(integer)
    }

    pub fn set_version_index(&mut self, index: usize) {
        self.root.insert(VERSION_KEY.to_string(), Value::from(index));
    }

    /// Serializes every page in order under its own title.
    ///
    /// Titles are expected to be unique. A repeated title replaces the
    /// sub-object written by the earlier page; the two are never merged.
    pub fn save_pages(&mut self, pages: &[&dyn ConfigurationPage]) {
        for page in pages {
            let mut sub = PageDocument::new();
            page.save(&mut sub);

            if self.set_page(page.title(), sub).is_some() {
                warn!(
                    "Page title '{}' was already saved, overwriting the earlier page",
                    page.title()
                );
            } else {
                debug!("Saved page '{}'", page.title());
            }
        }
    }

    /// Hands each page its sub-object, or an empty one when missing.
    pub fn load_pages(&self, pages: &mut [&mut dyn ConfigurationPage]) {
        let empty = PageDocument::new();
        for page in pages.iter_mut() {
            let sub = match self.page(page.title()) {
                Some(sub) => sub,
                None => {
                    debug!("No settings for page '{}', using defaults", page.title());
                    &empty
                }
            };
            page.load(sub);
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.root.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

pub fn read_bool(doc: &PageDocument, key: &str, default: bool) -> bool {
    doc.get(key).and_then(Value::as_bool).unwrap_or(default)
}

/// Reads an integer field, clamping it into `range`. Missing or non-integer
/// values fall back to `default`.
pub fn read_clamped(
    doc: &PageDocument,
    key: &str,
    default: u32,
    range: RangeInclusive<u32>,
) -> u32 {
    match doc.get(key).and_then(integer) {
        Some(value) => {
            let clamped = value.clamp(i64::from(*range.start()), i64::from(*range.end())) as u32;
            if i64::from(clamped) != value {
                debug!("Clamped '{}' from {} to {}", key, value, clamped);
            }
            clamped
        }
        None => default,
    }
}

pub fn read_string(doc: &PageDocument, key: &str) -> String {
    doc.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default()
}

fn integer(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.is_finite())
            .map(|f| f as i64)
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
