#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Announce `intent` to the outbound transport.
    SendIntent { intent: String },
}
