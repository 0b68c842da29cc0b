//! UI events
//!
//! The test harness and the host application both talk to widgets through
//! [`Event`] values; widgets map event types onto their state machine.

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    /// A completed user activation (click / tap / keyboard activation)
    pub const ACTIVATE: EventType = 3;
    /// The deferred pressed-state reset window elapsed
    pub const PRESS_RESET: EventType = 4;
}

/// A UI event
#[derive(Clone, Copy, Debug)]
pub struct Event {
    pub event_type: EventType,
    pub target: u64, // Widget ID
    pub timestamp: u64,
}

impl Event {
    pub fn new(event_type: EventType, target: u64) -> Self {
        Self {
            event_type,
            target,
            timestamp: 0,
        }
    }
}
