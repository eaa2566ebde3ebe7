use std::mem;

use widget_core::{update, Effect, Msg, PageState, PageView};
use widget_logging::{widget_info, widget_warn};

use crate::channel::{IntentMessage, OutboundChannel, OutboundEvent};
use crate::config::{ConfigError, PageChangeConfig};

/// Owns one widget session's page-change state and executes emitted effects.
///
/// Hosts multiplexing several widget sessions keep one `Session` each; the
/// session itself assumes a single caller and does no locking.
pub struct Session {
    state: PageState,
    session_id: Option<String>,
    channel: Box<dyn OutboundChannel>,
}

impl Session {
    pub fn new(channel: Box<dyn OutboundChannel>) -> Self {
        Self {
            state: PageState::new(),
            session_id: None,
            channel,
        }
    }

    /// Like [`Session::new`], but every outbound payload carries `session_id`.
    pub fn with_session_id(
        session_id: impl Into<String>,
        channel: Box<dyn OutboundChannel>,
    ) -> Self {
        let mut session = Self::new(channel);
        session.session_id = Some(session_id.into());
        session
    }

    /// Validates and installs a host-delivered configuration. On error the
    /// previously installed rules remain active.
    pub fn install_config(&mut self, config: PageChangeConfig) -> Result<(), ConfigError> {
        match config.compile() {
            Ok(rules) => {
                widget_info!("installing {} page-change rule(s)", rules.rules().len());
                self.dispatch(Msg::RulesInstalled(rules));
                Ok(())
            }
            Err(err) => {
                widget_warn!("rejecting page-change config: {err}");
                Err(err)
            }
        }
    }

    pub fn set_previous_url(&mut self, url: impl Into<String>) {
        self.dispatch(Msg::PreviousUrlSet(url.into()));
    }

    /// Reports a page navigation; the decided intent goes out on the channel.
    pub fn page_changed(&mut self, url: impl Into<String>) {
        self.dispatch(Msg::UrlChanged(url.into()));
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let state = mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.run_effects(effects);
    }

    pub fn view(&self) -> PageView {
        self.state.view()
    }

    fn run_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SendIntent { intent } => {
                    widget_info!("url change resolved to intent {intent}");
                    let mut payload = IntentMessage::new(intent);
                    payload.session_id = self.session_id.clone();
                    self.channel.emit(OutboundEvent::user_intent(payload));
                }
            }
        }
    }
}
