//! Base widget trait and types

use crate::context::WidgetContext;
use slotmap::new_key_type;
use tinct_core::events::Event;

new_key_type! {
    pub struct WidgetId;
}

/// Base trait for all widgets
pub trait Widget {
    /// Get the widget's unique ID
    fn id(&self) -> WidgetId;

    /// Handle an event
    fn handle_event(&mut self, ctx: &mut WidgetContext, event: &Event);

    /// Advance widget-local time (deferred state resets)
    fn update(&mut self, ctx: &mut WidgetContext, dt_ms: f32);
}
