//! State machine runtime.
//!
//! Flat statecharts for widget interaction states (idle / hovered /
//! pressed). These machines carry presentation chrome only; application
//! state goes through the counter reducer, never through an FSM.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Unique identifier for a state machine instance
    pub struct FsmId;
}

/// Identifier for a state within a state machine
pub type StateId = u32;

/// Identifier for an event type
pub type EventId = u32;

/// A transition in the state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StateTransition {
    pub from_state: StateId,
    pub event: EventId,
    pub to_state: StateId,
}

impl StateTransition {
    pub fn new(from: StateId, event: EventId, to: StateId) -> Self {
        Self {
            from_state: from,
            event,
            to_state: to,
        }
    }
}

/// Builder for creating state machines
pub struct StateMachineBuilder {
    initial_state: StateId,
    transitions: Vec<StateTransition>,
}

impl StateMachineBuilder {
    pub fn new(initial_state: StateId) -> Self {
        Self {
            initial_state,
            transitions: Vec::new(),
        }
    }

    /// Add a transition (from, event, to)
    pub fn on(mut self, from: StateId, event: EventId, to: StateId) -> Self {
        self.transitions.push(StateTransition::new(from, event, to));
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
    transitions: Vec<StateTransition>,
    /// History of state transitions (for debugging)
    history: Vec<(StateId, EventId, StateId)>,
}

impl StateMachine {
    /// Create a new state machine with an initial state and transitions
    pub fn new(initial_state: StateId, transitions: Vec<StateTransition>) -> Self {
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

    /// Check if an event can trigger a transition from the current state
    pub fn can_send(&self, event: EventId) -> bool {
        let current = self.current_state;
        self.transitions
            .iter()
            .any(|t| t.from_state == current && t.event == event)
    }

    /// Send an event to the state machine, potentially triggering a
    /// transition. Events with no matching transition leave the current
    /// state untouched.
    pub fn send(&mut self, event: EventId) -> StateId {
        let current = self.current_state;

        let Some(transition) = self
            .transitions
            .iter()
            .find(|t| t.from_state == current && t.event == event)
        else {
            return current;
        };

        let to_state = transition.to_state;
        self.current_state = to_state;
        self.history.push((current, event, to_state));
        to_state
    }
}

/// Runtime that manages all state machine instances
pub struct FsmRuntime {
    machines: SlotMap<FsmId, StateMachine>,
    /// Machines keyed by a stable external name, surviving view rebuilds.
    named: FxHashMap<String, FsmId>,
}

impl FsmRuntime {
    pub fn new() -> Self {
        Self {
            machines: SlotMap::with_key(),
            named: FxHashMap::default(),
        }
    }

    /// Look up a machine by name, creating it on first use.
    ///
    /// View trees are rebuilt every frame; the name keeps an element's
    /// interaction state stable across rebuilds.
    pub fn named<F>(&mut self, name: &str, init: F) -> FsmId
    where
        F: FnOnce() -> StateMachine,
    {
        if let Some(&id) = self.named.get(name) {
            return id;
        }
        let id = self.machines.insert(init());
        self.named.insert(name.to_string(), id);
        id
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

    /// Get the current state of a state machine
    pub fn current_state(&self, id: FsmId) -> Option<StateId> {
        self.machines.get(id).map(|fsm| fsm.current_state())
    }

    /// Get the current state of a named machine, if it exists.
    pub fn named_state(&self, name: &str) -> Option<StateId> {
        self.named
            .get(name)
            .and_then(|&id| self.current_state(id))
    }

    /// Iterate named machines and their current states.
    pub fn named_states(&self) -> impl Iterator<Item = (&str, StateId)> {
        self.named
            .iter()
            .filter_map(|(name, &id)| self.current_state(id).map(|s| (name.as_str(), s)))
    }

    /// Remove a state machine
    pub fn remove(&mut self, id: FsmId) -> Option<StateMachine> {
        self.named.retain(|_, v| *v != id);
        self.machines.remove(id)
    }

    /// Number of live state machines
    pub fn len(&self) -> usize {
        self.machines.len()
    }

    /// Check if the runtime has no state machines
    pub fn is_empty(&self) -> bool {
        self.machines.is_empty()
    }
}

impl Default for FsmRuntime {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDLE: StateId = 0;
    const HOVERED: StateId = 1;
    const PRESSED: StateId = 2;

    const POINTER_ENTER: EventId = 1;
    const POINTER_LEAVE: EventId = 2;
    const POINTER_DOWN: EventId = 3;
    const POINTER_UP: EventId = 4;

    fn pointer_machine() -> StateMachine {
        StateMachine::builder(IDLE)
            .on(IDLE, POINTER_ENTER, HOVERED)
            .on(HOVERED, POINTER_LEAVE, IDLE)
            .on(HOVERED, POINTER_DOWN, PRESSED)
            .on(PRESSED, POINTER_UP, HOVERED)
            .on(PRESSED, POINTER_LEAVE, IDLE)
            .build()
    }

    #[test]
    fn test_simple_transitions() {
        let mut fsm = pointer_machine();
        assert_eq!(fsm.current_state(), IDLE);

        fsm.send(POINTER_ENTER);
        assert_eq!(fsm.current_state(), HOVERED);

        fsm.send(POINTER_DOWN);
        assert_eq!(fsm.current_state(), PRESSED);

        fsm.send(POINTER_UP);
        assert_eq!(fsm.current_state(), HOVERED);

        fsm.send(POINTER_LEAVE);
        assert_eq!(fsm.current_state(), IDLE);
    }

    #[test]
    fn test_invalid_event_no_transition() {
        let mut fsm = StateMachine::new(
            IDLE,
            vec![StateTransition::new(IDLE, POINTER_ENTER, HOVERED)],
        );

        fsm.send(POINTER_DOWN);
        assert_eq!(fsm.current_state(), IDLE);
    }

    #[test]
    fn test_can_send() {
        let fsm = StateMachine::new(
            IDLE,
            vec![StateTransition::new(IDLE, POINTER_ENTER, HOVERED)],
        );

        assert!(fsm.can_send(POINTER_ENTER));
        assert!(!fsm.can_send(POINTER_DOWN));
    }

    #[test]
    fn test_history() {
        let mut fsm = pointer_machine();
        fsm.send(POINTER_ENTER);
        fsm.send(POINTER_DOWN);

        let history = fsm.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], (IDLE, POINTER_ENTER, HOVERED));
        assert_eq!(history[1], (HOVERED, POINTER_DOWN, PRESSED));
    }

    #[test]
    fn test_named_machines_survive_lookup() {
        let mut runtime = FsmRuntime::new();

        let id = runtime.named("inc-1", pointer_machine);
        runtime.send(id, POINTER_ENTER);

        // Same name resolves to the same machine with its state intact.
        let again = runtime.named("inc-1", pointer_machine);
        assert_eq!(again, id);
        assert_eq!(runtime.named_state("inc-1"), Some(HOVERED));

        assert_eq!(runtime.named_state("unknown"), None);
    }

    #[test]
    fn test_fsm_runtime_isolation() {
        let mut runtime = FsmRuntime::new();

        let fsm1 = runtime.named("a", pointer_machine);
        let fsm2 = runtime.named("b", pointer_machine);
        assert_eq!(runtime.len(), 2);

        runtime.send(fsm1, POINTER_ENTER);
        assert_eq!(runtime.current_state(fsm1), Some(HOVERED));
        assert_eq!(runtime.current_state(fsm2), Some(IDLE));

        runtime.remove(fsm1);
        assert_eq!(runtime.len(), 1);
        assert_eq!(runtime.current_state(fsm1), None);
        assert_eq!(runtime.named_state("a"), None);
    }
}
