//! Tinct Widget Library
//!
//! Themeable UI components with FSM-driven interactions. Widgets read design
//! tokens from a [`tinct_theme::ThemeStore`] and resolve their full visual
//! description on every build.

pub mod button;
pub mod context;
pub mod error;
pub mod style;
pub mod widget;

pub use button::{button, Button, ButtonBehavior, ButtonConfig, ButtonState};
pub use context::WidgetContext;
pub use error::WidgetError;
pub use style::{Cursor, Size, Style, Variant};
pub use widget::{Widget, WidgetId};
