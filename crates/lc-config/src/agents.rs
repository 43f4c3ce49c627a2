use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::document::PageDocument;
use crate::page::{ConfigurationPage, PageIcon};

const AGENTS: &str = "agents";

/// A Java agent jar passed to the game with `-javaagent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub path: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AgentsPage {
    agents: Vec<Agent>,
}

impl AgentsPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an enabled agent. Empty and already listed paths are rejected.
    pub fn add_agent(&mut self, path: impl Into<String>) -> bool {
        let path = path.into();
        let trimmed = path.trim();
        if trimmed.is_empty() {
            return false;
        }
        if self.agents.iter().any(|agent| agent.path == trimmed) {
            debug!("Agent '{}' is already listed", trimmed);
            return false;
        }
        self.agents.push(Agent {
            path: trimmed.to_string(),
            enabled: true,
        });
        true
    }

    pub fn remove_agent(&mut self, index: usize) -> Option<Agent> {
        if index < self.agents.len() {
            Some(self.agents.remove(index))
        } else {
            None
        }
    }

    pub fn set_enabled(&mut self, index: usize, enabled: bool) -> bool {
        match self.agents.get_mut(index) {
            Some(agent) => {
                agent.enabled = enabled;
                true
            }
            None => false,
        }
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Paths of the enabled agents, in list order.
    pub fn get_agents(&self) -> Vec<String> {
        self.agents
            .iter()
            .filter(|agent| agent.enabled)
            .map(|agent| agent.path.clone())
            .collect()
    }
}

impl ConfigurationPage for AgentsPage {
    fn title(&self) -> &'static str {
        "Agents"
    }

    fn icon(&self) -> PageIcon {
        PageIcon::Puzzle
    }

    fn save(&self, into: &mut PageDocument) {
        let agents = self
            .agents
            .iter()
            .filter_map(|agent| serde_json::to_value(agent).ok())
            .collect();
        into.insert(AGENTS.into(), Value::Array(agents));
    }

    fn load(&mut self, from: &PageDocument) {
        self.agents.clear();

        let Some(entries) = from.get(AGENTS).and_then(Value::as_array) else {
            return;
        };

        for entry in entries {
            let agent = match entry {
                Value::String(path) => Some(Agent {
                    path: path.clone(),
                    enabled: true,
                }),
                other => serde_json::from_value::<Agent>(other.clone()).ok(),
            };

            match agent {
                Some(agent) if agent.path.trim().is_empty() => {
                    warn!("Skipping agent entry with an empty path");
                }
                Some(agent) if self.agents.iter().any(|a| a.path == agent.path) => {
                    warn!("Skipping duplicate agent '{}'", agent.path);
                }
                Some(agent) => self.agents.push(agent),
                None => warn!("Skipping malformed agent entry: {}", entry),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_add_rejects_empty_and_duplicates() {
        let mut page = AgentsPage::new();
        assert!(page.add_agent("/agents/one.jar"));
        assert!(!page.add_agent("   "));
        assert!(!page.add_agent(" /agents/one.jar "));
        assert_eq!(page.agents().len(), 1);
    }

    #[test]
    fn test_get_agents_only_enabled_in_order() {
        let mut page = AgentsPage::new();
        page.add_agent("/a.jar");
        page.add_agent("/b.jar");
        page.add_agent("/c.jar");
        assert!(page.set_enabled(1, false));
        assert!(!page.set_enabled(7, false));

        assert_eq!(page.get_agents(), vec!["/a.jar", "/c.jar"]);
    }

    #[test]
    fn test_remove_agent() {
        let mut page = AgentsPage::new();
        page.add_agent("/a.jar");
        assert!(page.remove_agent(3).is_none());
        assert_eq!(page.remove_agent(0).unwrap().path, "/a.jar");
        assert!(page.agents().is_empty());
    }

    #[test]
    fn test_round_trip() {
        let mut page = AgentsPage::new();
        page.add_agent("/a.jar");
        page.add_agent("/b.jar");
        page.set_enabled(0, false);

        let mut doc = PageDocument::new();
        page.save(&mut doc);

        let mut loaded = AgentsPage::new();
        loaded.load(&doc);
        assert_eq!(loaded, page);
    }

    #[test]
    fn test_load_skips_malformed_entries() {
        let doc = json!({
            "agents": [
                "/plain.jar",
                { "path": "/object.jar", "enabled": false },
                { "path": "/implicit.jar" },
                { "enabled": true },
                42,
                { "path": "" },
                "/plain.jar"
            ]
        });

        let mut page = AgentsPage::new();
        page.load(doc.as_object().unwrap());

        let paths: Vec<&str> = page.agents().iter().map(|a| a.path.as_str()).collect();
        assert_eq!(paths, vec!["/plain.jar", "/object.jar", "/implicit.jar"]);
        assert_eq!(page.get_agents(), vec!["/plain.jar", "/implicit.jar"]);
    }

    #[test]
    fn test_load_missing_list_clears() {
        let mut page = AgentsPage::new();
        page.add_agent("/a.jar");
        page.load(&PageDocument::new());
        assert!(page.agents().is_empty());
    }
}
