#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Host reported the URL that was current before the transition.
    PreviousUrlSet(String),
    /// Host installed a new set of page-change rules, replacing the old one.
    RulesInstalled(crate::RuleSet),
    /// The page URL changed; decide an intent and announce it.
    UrlChanged(String),
    /// Fallback for placeholder wiring.
    NoOp,
}
