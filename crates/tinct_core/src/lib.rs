//! Tinct Core Runtime
//!
//! Foundational primitives for the Tinct widget kit:
//!
//! - **Colors**: RGBA color values with hex conversion and interpolation
//! - **Events**: Unified UI event representation
//! - **State Machines**: Flat statecharts for widget interaction states
//!
//! # Example
//!
//! ```rust
//! use tinct_core::fsm::StateMachine;
//! use tinct_core::events::event_types;
//!
//! const READY: u32 = 0;
//! const ACTIVATED: u32 = 1;
//!
//! let mut fsm = StateMachine::builder(READY)
//!     .on(READY, event_types::ACTIVATE, ACTIVATED)
//!     .build();
//!
//! fsm.send(event_types::ACTIVATE);
//! assert_eq!(fsm.current_state(), ACTIVATED);
//! ```

pub mod color;
pub mod events;
pub mod fsm;

pub use color::Color;
pub use events::{Event, EventType};
pub use fsm::{FsmId, FsmRuntime, StateId, StateMachine, Transition};
