//! Tinct Theme System
//!
//! Design tokens with light/dark modes and an explicit, subscribable theme
//! store.
//!
//! # Overview
//!
//! - **Design tokens**: color and spacing values resolved per mode
//! - **Theme bundle**: a light/dark pair of token tables, swapped wholesale
//!   on mode change
//! - **Theme store**: an explicit shared value (not a global) with
//!   drop-to-unsubscribe change notifications
//!
//! # Quick Start
//!
//! ```rust
//! use tinct_theme::{ColorToken, ThemeMode, ThemeStore};
//!
//! let store = ThemeStore::with_mode(ThemeMode::Light);
//! let primary = store.color(ColorToken::Primary);
//!
//! store.toggle();
//! assert_ne!(store.color(ColorToken::Primary), primary);
//! ```
//!
//! Widgets hold a [`ThemeHandle`] rather than the store itself; reading
//! tokens through a handle whose store is gone fails with
//! [`ThemeError::NotInitialized`] instead of silently defaulting.

pub mod error;
pub mod store;
pub mod theme;
pub mod themes;
pub mod tokens;

// Re-export commonly used types
pub use error::ThemeError;
pub use store::{SubscriptionId, ThemeHandle, ThemeStore, ThemeSubscription};
pub use theme::{Theme, ThemeBundle, ThemeMode};
pub use themes::TinctTheme;
pub use tokens::*;
