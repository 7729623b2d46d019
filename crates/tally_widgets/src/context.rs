//! Build-time context handed to widgets.
//!
//! Widgets are rebuilt every frame; the context carries the interaction
//! state snapshot taken from the event router just before the build, so a
//! widget can pick its visuals without holding a reference into the router.

use rustc_hash::FxHashMap;
use tally_core::fsm::StateId;
use tally_layout::router::interaction;

/// Per-build widget context
#[derive(Default)]
pub struct WidgetContext {
    states: FxHashMap<String, StateId>,
}

impl WidgetContext {
    /// Context with no tracked interactions; every element reads as idle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Context seeded with an interaction snapshot from the router.
    pub fn with_states(states: FxHashMap<String, StateId>) -> Self {
        Self { states }
    }

    /// Interaction state for an element id, defaulting to idle.
    pub fn interaction_state(&self, id: &str) -> StateId {
        self.states
            .get(id)
            .copied()
            .unwrap_or(interaction::IDLE)
    }
}
