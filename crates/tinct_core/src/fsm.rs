//! State machine runtime
//!
//! Flat state machines for widget interaction states. Supports guarded
//! transitions and transition actions; widgets derive their visual state from
//! the machine's current state after each dispatched event.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    /// Unique identifier for a state machine instance
    pub struct FsmId;
}

/// Identifier for a state within a state machine
pub type StateId = u32;

/// Identifier for an event type
pub type EventId = u32;

/// A guard function that determines if a transition should occur
pub type Guard = Box<dyn Fn() -> bool + Send>;

/// An action function executed during transitions
pub type Action = Box<dyn FnMut() + Send>;

/// A transition in the state machine
pub struct Transition {
    pub from_state: StateId,
    pub event: EventId,
    pub to_state: StateId,
    pub guard: Option<Guard>,
    pub actions: SmallVec<[Action; 2]>,
}

impl Transition {
    /// Create a simple transition without guard or actions
    pub fn new(from: StateId, event: EventId, to: StateId) -> Self {
        Self {
            from_state: from,
            event,
            to_state: to,
            guard: None,
            actions: SmallVec::new(),
        }
    }

    /// Add a guard condition
    pub fn with_guard<F: Fn() -> bool + Send + 'static>(mut self, guard: F) -> Self {
        self.guard = Some(Box::new(guard));
        self
    }

    /// Add an action to execute during transition
    pub fn with_action<F: FnMut() + Send + 'static>(mut self, action: F) -> Self {
        self.actions.push(Box::new(action));
        self
    }
}

/// Builder for creating state machines
pub struct StateMachineBuilder {
    initial_state: StateId,
    transitions: Vec<Transition>,
}

impl StateMachineBuilder {
    pub fn new(initial_state: StateId) -> Self {
        Self {
            initial_state,
            transitions: Vec::new(),
        }
    }

    /// Add a transition
    pub fn transition(mut self, transition: Transition) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add a simple transition (from, event, to)
    pub fn on(mut self, from: StateId, event: EventId, to: StateId) -> Self {
        self.transitions.push(Transition::new(from, event, to));
        self
    }

    /// Build the state machine
    pub fn build(self) -> StateMachine {
        StateMachine {
            current_state: self.initial_state,
            transitions: self.transitions,
            history: Vec::new(),
        }
    }
}

/// A state machine instance
pub struct StateMachine {
    current_state: StateId,
    transitions: Vec<Transition>,
    /// History of state transitions (for debugging)
    history: Vec<(StateId, EventId, StateId)>,
}

impl StateMachine {
    /// Create a new state machine with an initial state and transitions
    pub fn new(initial_state: StateId, transitions: Vec<Transition>) -> Self {
        Self {
            current_state: initial_state,
            transitions,
            history: Vec::new(),
        }
    }

    /// Create a builder for a state machine
    pub fn builder(initial_state: StateId) -> StateMachineBuilder {
        StateMachineBuilder::new(initial_state)
    }

    /// Get the current state
    pub fn current_state(&self) -> StateId {
        self.current_state
    }

    /// Get transition history
    pub fn history(&self) -> &[(StateId, EventId, StateId)] {
        &self.history
    }

    /// Check if an event can trigger a transition from current state
    pub fn can_send(&self, event: EventId) -> bool {
        let current = self.current_state;
        self.transitions.iter().any(|t| {
            t.from_state == current && t.event == event && {
                match &t.guard {
                    Some(guard) => guard(),
                    None => true,
                }
            }
        })
    }

    /// Send an event to the state machine, potentially triggering a transition
    pub fn send(&mut self, event: EventId) -> StateId {
        let current = self.current_state;

        let transition_idx = self.transitions.iter().position(|t| {
            t.from_state == current && t.event == event && {
                match &t.guard {
                    Some(guard) => guard(),
                    None => true,
                }
            }
        });

        let Some(idx) = transition_idx else {
            return current;
        };

        let to_state = self.transitions[idx].to_state;

        for action in self.transitions[idx].actions.iter_mut() {
            action();
        }

        self.current_state = to_state;
        self.history.push((current, event, to_state));

        to_state
    }
}

/// Runtime that manages all state machine instances
pub struct FsmRuntime {
    machines: SlotMap<FsmId, StateMachine>,
}

impl FsmRuntime {
    pub fn new() -> Self {
        Self {
            machines: SlotMap::with_key(),
        }
    }

    /// Create a state machine from a builder
    pub fn create(&mut self, machine: StateMachine) -> FsmId {
        self.machines.insert(machine)
    }

    /// Get a reference to a state machine
    pub fn get(&self, id: FsmId) -> Option<&StateMachine> {
        self.machines.get(id)
    }

    /// Get a mutable reference to a state machine
    pub fn get_mut(&mut self, id: FsmId) -> Option<&mut StateMachine> {
        self.machines.get_mut(id)
    }

    /// Send an event to a state machine
    pub fn send(&mut self, id: FsmId, event: EventId) -> Option<StateId> {
        self.machines.get_mut(id).map(|fsm| fsm.send(event))
    }

    /// Get current state of a state machine
    pub fn current_state(&self, id: FsmId) -> Option<StateId> {
        self.machines.get(id).map(|fsm| fsm.current_state())
    }

    /// Remove a state machine
    pub fn remove(&mut self, id: FsmId) -> Option<StateMachine> {
        self.machines.remove(id)
    }

    /// Get the number of state machines
    pub fn len(&self) -> usize {
        self.machines.len()
    }

    /// Check if runtime has no state machines
    pub fn is_empty(&self) -> bool {
        self.machines.is_empty()
    }
}

impl Default for FsmRuntime {
    fn default() -> Self {
        Self::new()
    }
}
