//! Widget core: pure page-change state machine and rule evaluation.
mod effect;
mod msg;
mod rules;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use rules::{PageRule, RuleError, RuleSet, UrlPattern};
pub use state::PageState;
pub use update::update;
pub use view_model::PageView;
