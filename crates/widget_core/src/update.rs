use crate::{Effect, Msg, PageState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: PageState, msg: Msg) -> (PageState, Vec<Effect>) {
    let effects = match msg {
        Msg::PreviousUrlSet(url) => {
            state.set_previous_url(url);
            Vec::new()
        }
        Msg::RulesInstalled(rules) => {
            state.install_rules(rules);
            Vec::new()
        }
        Msg::UrlChanged(url) => {
            // Evaluation reads state without touching it; previous_url only
            // moves on an explicit PreviousUrlSet.
            let intent = state.rule_set().evaluate(&url).to_string();
            vec![Effect::SendIntent { intent }]
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
