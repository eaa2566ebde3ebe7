use serde::{Deserialize, Serialize};
use thiserror::Error;

use widget_core::{PageRule, RuleError, RuleSet};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed page-change config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Rule(#[from] RuleError),
}

/// Page-change configuration as delivered by the host, prior to validation.
///
/// Field names mirror the host's camelCase wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageChangeConfig {
    pub page_changes: Vec<PageChangeEntry>,
    pub error_intent: String,
}

/// One raw rule entry; `regex` selects how `url` is interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageChangeEntry {
    pub url: String,
    pub callback_intent: String,
    #[serde(default)]
    pub regex: bool,
}

impl PageChangeConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Compiles the raw entries into a validated rule set, in order. Fails
    /// on the first invalid expression without producing a partial set.
    pub fn compile(self) -> Result<RuleSet, ConfigError> {
        let mut rules = Vec::with_capacity(self.page_changes.len());
        for entry in self.page_changes {
            let rule = if entry.regex {
                PageRule::regex(&entry.url, entry.callback_intent)?
            } else {
                PageRule::literal(entry.url, entry.callback_intent)
            };
            rules.push(rule);
        }
        Ok(RuleSet::new(rules, self.error_intent))
    }
}
