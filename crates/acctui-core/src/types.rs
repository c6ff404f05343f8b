//! Small shared domain types

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// Waiting for the initial profile fetch
    #[default]
    Loading,
    /// Profile loaded (or load failed), screens are interactive
    Ready,
    /// Shutting down
    Quitting,
}

/// Visual tone of a field's message region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageTone {
    /// Help text, nothing pending
    #[default]
    Help,
    /// A request is in flight
    Pending,
    Success,
    Error,
}
