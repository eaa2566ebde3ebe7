use std::sync::mpsc;

use serde::Serialize;

/// Action tag carried by intent emissions, matching the event name the
/// conversational backend listens for.
pub const USER_UTTERED: &str = "user_uttered";

/// Wire payload announcing a decided intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntentMessage {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl IntentMessage {
    pub fn new(intent: impl Into<String>) -> Self {
        Self {
            message: intent.into(),
            session_id: None,
        }
    }
}

/// One outbound emission: an action tag plus its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEvent {
    pub action: &'static str,
    pub payload: IntentMessage,
}

impl OutboundEvent {
    /// Wraps a decided intent as a `user_uttered` emission.
    pub fn user_intent(payload: IntentMessage) -> Self {
        Self {
            action: USER_UTTERED,
            payload,
        }
    }
}

/// Transport boundary consuming evaluator decisions. Emission is
/// fire-and-forget from the session's perspective.
pub trait OutboundChannel: Send + Sync {
    fn emit(&self, event: OutboundEvent);
}

/// Channel backed by an mpsc sender; the host owns the receiver and drains
/// at its own pace.
pub struct ChannelSink {
    tx: mpsc::Sender<OutboundEvent>,
}

impl ChannelSink {
    pub fn new(tx: mpsc::Sender<OutboundEvent>) -> Self {
        Self { tx }
    }
}

impl OutboundChannel for ChannelSink {
    fn emit(&self, event: OutboundEvent) {
        // A dropped receiver means the host tore the session down.
        let _ = self.tx.send(event);
    }
}

/// Creates a connected sink/receiver pair for host integration.
pub fn outbound_queue() -> (ChannelSink, mpsc::Receiver<OutboundEvent>) {
    let (tx, rx) = mpsc::channel();
    (ChannelSink::new(tx), rx)
}
