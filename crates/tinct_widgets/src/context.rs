//! Widget context
//!
//! Per-window bookkeeping for widgets: the FSM runtime, per-widget typed
//! state, and dirty tracking. Widgets register at mount and are removed at
//! teardown, which drops their state machine, their state, and any deferred
//! reset stored in that state in one step.

use crate::widget::WidgetId;
use rustc_hash::FxHashSet;
use slotmap::SlotMap;
use std::any::Any;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tinct_core::events::Event;
use tinct_core::fsm::{FsmId, FsmRuntime, StateId, StateMachine};

struct WidgetEntry {
    fsm: FsmId,
    state: Option<Box<dyn Any + Send>>,
}

/// Context shared by all widgets in one tree
pub struct WidgetContext {
    widgets: SlotMap<WidgetId, WidgetEntry>,
    fsms: FsmRuntime,
    dirty: FxHashSet<WidgetId>,
    /// Set by theme subscriptions to request a rebuild of the tree
    dirty_flag: Arc<AtomicBool>,
}

impl WidgetContext {
    pub fn new() -> Self {
        Self {
            widgets: SlotMap::with_key(),
            fsms: FsmRuntime::new(),
            dirty: FxHashSet::default(),
            dirty_flag: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Register a widget with its interaction state machine
    pub fn register_widget_with_fsm(&mut self, fsm: StateMachine) -> WidgetId {
        let fsm_id = self.fsms.create(fsm);
        self.widgets.insert(WidgetEntry {
            fsm: fsm_id,
            state: None,
        })
    }

    /// Tear down a widget: removes its FSM and state together
    pub fn remove_widget(&mut self, id: WidgetId) {
        if let Some(entry) = self.widgets.remove(id) {
            self.fsms.remove(entry.fsm);
        }
        self.dirty.remove(&id);
    }

    /// Swap a widget's state machine, keeping its id and typed state.
    ///
    /// Returns `false` when the widget is not registered.
    pub fn replace_fsm(&mut self, id: WidgetId, fsm: StateMachine) -> bool {
        let Some(entry) = self.widgets.get_mut(id) else {
            return false;
        };
        self.fsms.remove(entry.fsm);
        entry.fsm = self.fsms.create(fsm);
        true
    }

    pub fn is_registered(&self, id: WidgetId) -> bool {
        self.widgets.contains_key(id)
    }

    pub fn widget_count(&self) -> usize {
        self.widgets.len()
    }

    // ========== Widget State ==========

    /// Store typed state for a widget
    pub fn set_widget_state<T: Send + 'static>(&mut self, id: WidgetId, state: T) {
        if let Some(entry) = self.widgets.get_mut(id) {
            entry.state = Some(Box::new(state));
        }
    }

    /// Get a widget's typed state
    pub fn get_widget_state<T: 'static>(&self, id: WidgetId) -> Option<&T> {
        self.widgets
            .get(id)
            .and_then(|entry| entry.state.as_ref())
            .and_then(|state| state.downcast_ref::<T>())
    }

    /// Get a widget's typed state mutably
    pub fn get_widget_state_mut<T: 'static>(&mut self, id: WidgetId) -> Option<&mut T> {
        self.widgets
            .get_mut(id)
            .and_then(|entry| entry.state.as_mut())
            .and_then(|state| state.downcast_mut::<T>())
    }

    // ========== FSM ==========

    /// Get the current FSM state of a widget
    pub fn get_fsm_state(&self, id: WidgetId) -> Option<StateId> {
        let entry = self.widgets.get(id)?;
        self.fsms.current_state(entry.fsm)
    }

    /// Check whether the widget's FSM accepts an event in its current state
    pub fn can_send(&self, id: WidgetId, event_type: u32) -> bool {
        self.widgets
            .get(id)
            .and_then(|entry| self.fsms.get(entry.fsm))
            .map(|fsm| fsm.can_send(event_type))
            .unwrap_or(false)
    }

    /// Dispatch an event to the widget's FSM, returning the resulting state
    pub fn dispatch_event(&mut self, id: WidgetId, event: &Event) -> Option<StateId> {
        let entry = self.widgets.get(id)?;
        self.fsms.send(entry.fsm, event.event_type)
    }

    // ========== Dirty Tracking ==========

    /// Mark a widget as needing a repaint
    pub fn mark_dirty(&mut self, id: WidgetId) {
        self.dirty.insert(id);
        self.dirty_flag.store(true, Ordering::SeqCst);
    }

    pub fn is_dirty(&self, id: WidgetId) -> bool {
        self.dirty.contains(&id)
    }

    /// Drain the set of dirty widgets
    pub fn take_dirty(&mut self) -> Vec<WidgetId> {
        self.dirty.drain().collect()
    }

    /// The shared rebuild flag, cloned into theme subscriptions
    pub fn dirty_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.dirty_flag)
    }

    /// Check and clear the rebuild flag
    pub fn take_rebuild_request(&mut self) -> bool {
        self.dirty_flag.swap(false, Ordering::SeqCst)
    }
}

impl Default for WidgetContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinct_core::events::event_types;

    const READY: StateId = 0;
    const ACTIVATED: StateId = 2;

    fn ready_fsm() -> StateMachine {
        StateMachine::builder(READY)
            .on(READY, event_types::ACTIVATE, ACTIVATED)
            .build()
    }

    #[test]
    fn test_register_and_remove() {
        let mut ctx = WidgetContext::new();
        let id = ctx.register_widget_with_fsm(ready_fsm());

        assert!(ctx.is_registered(id));
        assert_eq!(ctx.get_fsm_state(id), Some(READY));

        ctx.remove_widget(id);
        assert!(!ctx.is_registered(id));
        assert_eq!(ctx.get_fsm_state(id), None);
    }

    #[test]
    fn test_typed_state_round_trip() {
        let mut ctx = WidgetContext::new();
        let id = ctx.register_widget_with_fsm(ready_fsm());

        ctx.set_widget_state(id, 41u32);
        assert_eq!(ctx.get_widget_state::<u32>(id), Some(&41));

        // Wrong type reads as None
        assert_eq!(ctx.get_widget_state::<String>(id), None);

        *ctx.get_widget_state_mut::<u32>(id).unwrap() += 1;
        assert_eq!(ctx.get_widget_state::<u32>(id), Some(&42));
    }

    #[test]
    fn test_dispatch_drives_fsm() {
        let mut ctx = WidgetContext::new();
        let id = ctx.register_widget_with_fsm(ready_fsm());

        assert!(ctx.can_send(id, event_types::ACTIVATE));
        let event = Event::new(event_types::ACTIVATE, 0);
        assert_eq!(ctx.dispatch_event(id, &event), Some(ACTIVATED));
        assert!(!ctx.can_send(id, event_types::ACTIVATE));
    }

    #[test]
    fn test_replace_fsm_keeps_widget_state() {
        let mut ctx = WidgetContext::new();
        let id = ctx.register_widget_with_fsm(ready_fsm());
        ctx.set_widget_state(id, 7u32);

        let event = Event::new(event_types::ACTIVATE, 0);
        ctx.dispatch_event(id, &event);
        assert_eq!(ctx.get_fsm_state(id), Some(ACTIVATED));

        assert!(ctx.replace_fsm(id, ready_fsm()));
        assert_eq!(ctx.get_fsm_state(id), Some(READY));
        assert_eq!(ctx.get_widget_state::<u32>(id), Some(&7));

        ctx.remove_widget(id);
        assert!(!ctx.replace_fsm(id, ready_fsm()));
    }

    #[test]
    fn test_dirty_tracking() {
        let mut ctx = WidgetContext::new();
        let id = ctx.register_widget_with_fsm(ready_fsm());

        assert!(!ctx.is_dirty(id));
        ctx.mark_dirty(id);
        assert!(ctx.is_dirty(id));
        assert!(ctx.take_rebuild_request());

        assert_eq!(ctx.take_dirty(), vec![id]);
        assert!(!ctx.is_dirty(id));
        assert!(!ctx.take_rebuild_request());
    }
}
