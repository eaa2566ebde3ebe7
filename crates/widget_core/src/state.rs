use crate::rules::RuleSet;
use crate::view_model::PageView;

/// Per-session page-change state: the last-known URL and the active rules.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageState {
    previous_url: String,
    rule_set: RuleSet,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// URL the host page was on before the in-progress transition. Tracked
    /// for host-level use and observability; evaluation never consults it.
    pub fn previous_url(&self) -> &str {
        &self.previous_url
    }

    pub fn rule_set(&self) -> &RuleSet {
        &self.rule_set
    }

    pub fn view(&self) -> PageView {
        PageView {
            previous_url: self.previous_url.clone(),
            rule_count: self.rule_set.rules().len(),
            fallback_intent: self.rule_set.fallback_intent().to_string(),
        }
    }

    pub(crate) fn set_previous_url(&mut self, url: String) {
        self.previous_url = url;
    }

    /// Installs `rules` wholesale, dropping whatever was active before.
    pub(crate) fn install_rules(&mut self, rules: RuleSet) {
        self.rule_set = rules;
    }
}
