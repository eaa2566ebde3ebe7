//! Widget channel: outbound intent delivery and session effect execution.
mod channel;
mod config;
mod session;

pub use channel::{
    outbound_queue, ChannelSink, IntentMessage, OutboundChannel, OutboundEvent, USER_UTTERED,
};
pub use config::{ConfigError, PageChangeConfig, PageChangeEntry};
pub use session::Session;
