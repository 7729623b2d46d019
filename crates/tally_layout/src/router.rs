//! Pointer event routing.
//!
//! The router owns pointer focus: which element is hovered, which is
//! pressed, and when a press and release on the same element becomes an
//! activation. It also drives the per-element interaction state machines
//! that widgets read their visual state from; machines are keyed by
//! element id so they survive view rebuilds.

use tally_core::events::event_types;
use tally_core::fsm::{FsmRuntime, StateId, StateMachine};

use crate::render::RenderTree;
use crate::tree::LayoutNodeId;

/// Interaction states shared by all pointer targets
pub mod interaction {
    use tally_core::fsm::StateId;

    pub const IDLE: StateId = 0;
    pub const HOVERED: StateId = 1;
    pub const PRESSED: StateId = 2;
}

/// The standard pointer interaction machine: idle, hovered, pressed.
pub fn pointer_interaction_machine() -> StateMachine {
    StateMachine::builder(interaction::IDLE)
        .on(interaction::IDLE, event_types::POINTER_ENTER, interaction::HOVERED)
        .on(interaction::HOVERED, event_types::POINTER_LEAVE, interaction::IDLE)
        .on(interaction::HOVERED, event_types::POINTER_DOWN, interaction::PRESSED)
        .on(interaction::PRESSED, event_types::POINTER_UP, interaction::HOVERED)
        .on(interaction::PRESSED, event_types::POINTER_LEAVE, interaction::IDLE)
        .build()
}

/// Result of a pointer hit-test
#[derive(Clone, Debug)]
pub struct HitResult {
    pub node: LayoutNodeId,
    /// Registered element id, when the element has one
    pub id: Option<String>,
}

/// Routes pointer events against a computed render tree
pub struct EventRouter {
    hovered: Option<HitResult>,
    pressed: Option<HitResult>,
    interactions: FsmRuntime,
    changed: bool,
}

impl EventRouter {
    pub fn new() -> Self {
        Self {
            hovered: None,
            pressed: None,
            interactions: FsmRuntime::new(),
            changed: false,
        }
    }

    /// Hit-test the tree at a point
    pub fn hit_test(&self, tree: &RenderTree, x: f32, y: f32) -> Option<HitResult> {
        let node = tree.hit_test(x, y)?;
        Some(HitResult {
            node,
            id: tree.id_of(node).map(str::to_string),
        })
    }

    /// Route a pointer move, updating hover focus
    pub fn pointer_move(&mut self, tree: &RenderTree, x: f32, y: f32) {
        let hit = self.hit_test(tree, x, y);

        if same_target(self.hovered.as_ref(), hit.as_ref()) {
            // Same element; refresh the node reference, which may be
            // stale after a rebuild.
            self.hovered = hit;
            return;
        }

        if let Some(old) = self.hovered.take() {
            self.send_interaction(&old, event_types::POINTER_LEAVE);
        }
        if let Some(ref new) = hit {
            tracing::trace!(id = new.id.as_deref(), x, y, "pointer enter");
            self.send_interaction(new, event_types::POINTER_ENTER);
        }
        self.hovered = hit;
        self.changed = true;
    }

    /// Route a pointer press
    pub fn pointer_down(&mut self, tree: &RenderTree, x: f32, y: f32) {
        self.pointer_move(tree, x, y);

        let hit = self.hit_test(tree, x, y);
        if let Some(ref hit) = hit {
            self.send_interaction(hit, event_types::POINTER_DOWN);
            self.changed = true;
        } else {
            tracing::trace!(x, y, "pointer down missed all targets");
        }
        self.pressed = hit;
    }

    /// Route a pointer release. A release over the pressed element becomes
    /// an activation dispatched through the tree.
    pub fn pointer_up(&mut self, tree: &RenderTree, x: f32, y: f32, timestamp: u64) {
        let hit = self.hit_test(tree, x, y);
        let pressed = self.pressed.take();

        if let Some(ref pressed) = pressed {
            self.send_interaction(pressed, event_types::POINTER_UP);
            self.changed = true;

            let released_on_same = hit.as_ref().map(|h| h.node) == Some(pressed.node);
            if released_on_same {
                tree.dispatch_click(pressed.node, x, y, timestamp);
            }
        }
    }

    /// Press and release at a point
    pub fn click(&mut self, tree: &RenderTree, x: f32, y: f32, timestamp: u64) {
        self.pointer_down(tree, x, y);
        self.pointer_up(tree, x, y, timestamp);
    }

    /// Current interaction state for an element id
    pub fn interaction_state(&self, id: &str) -> StateId {
        self.interactions
            .named_state(id)
            .unwrap_or(interaction::IDLE)
    }

    /// Snapshot of all tracked interaction states, keyed by element id
    pub fn interaction_states(&self) -> rustc_hash::FxHashMap<String, StateId> {
        self.interactions
            .named_states()
            .map(|(id, state)| (id.to_string(), state))
            .collect()
    }

    /// Drop node references into a tree that is about to be rebuilt.
    ///
    /// Hover focus is kept: it is remembered by element id and reconciled
    /// against the next hit-test, so leaving a hovered element after a
    /// rebuild still sends its machine a leave event. Press focus does
    /// not outlive the tree that saw the press. Interaction machines are
    /// keyed by id and survive.
    pub fn invalidate(&mut self) {
        self.pressed = None;
    }

    /// Whether any interaction state changed since the last call
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }

    fn send_interaction(&mut self, hit: &HitResult, event: u32) {
        let Some(ref id) = hit.id else {
            return;
        };
        let fsm = self.interactions.named(id, pointer_interaction_machine);
        self.interactions.send(fsm, event);
    }
}

impl Default for EventRouter {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether two hits refer to the same element. Compared by id when both
/// carry one: node keys do not survive a rebuild, ids do.
fn same_target(a: Option<&HitResult>, b: Option<&HitResult>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => match (a.id.as_deref(), b.id.as_deref()) {
            (Some(a_id), Some(b_id)) => a_id == b_id,
            _ => a.node == b.node,
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::div::div;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn two_buttons() -> RenderTree {
        let ui = div()
            .w(100.0)
            .h(40.0)
            .flex_row()
            .child(div().w(40.0).h(40.0).id("left").on_click(|_| {}))
            .child(div().w(40.0).h(40.0).id("right").on_click(|_| {}));

        let mut tree = RenderTree::from_element(&ui);
        tree.compute_layout(100.0, 40.0);
        tree
    }

    #[test]
    fn test_hover_tracks_pointer() {
        let tree = two_buttons();
        let mut router = EventRouter::new();

        router.pointer_move(&tree, 20.0, 20.0);
        assert_eq!(router.interaction_state("left"), interaction::HOVERED);
        assert_eq!(router.interaction_state("right"), interaction::IDLE);

        router.pointer_move(&tree, 60.0, 20.0);
        assert_eq!(router.interaction_state("left"), interaction::IDLE);
        assert_eq!(router.interaction_state("right"), interaction::HOVERED);
    }

    #[test]
    fn test_press_and_release_states() {
        let tree = two_buttons();
        let mut router = EventRouter::new();

        router.pointer_down(&tree, 20.0, 20.0);
        assert_eq!(router.interaction_state("left"), interaction::PRESSED);

        router.pointer_up(&tree, 20.0, 20.0, 0);
        assert_eq!(router.interaction_state("left"), interaction::HOVERED);
    }

    #[test]
    fn test_click_fires_handler_once() {
        let hits = Arc::new(AtomicU32::new(0));
        let hits_clone = Arc::clone(&hits);

        let ui = div().w(50.0).h(50.0).id("btn").on_click(move |_| {
            hits_clone.fetch_add(1, Ordering::SeqCst);
        });
        let mut tree = RenderTree::from_element(&ui);
        tree.compute_layout(50.0, 50.0);

        let mut router = EventRouter::new();
        router.click(&mut tree, 25.0, 25.0, 16);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_release_off_target_is_not_a_click() {
        let hits = Arc::new(AtomicU32::new(0));
        let hits_clone = Arc::clone(&hits);

        let ui = div()
            .w(100.0)
            .h(40.0)
            .flex_row()
            .child(div().w(40.0).h(40.0).id("btn").on_click(move |_| {
                hits_clone.fetch_add(1, Ordering::SeqCst);
            }))
            .child(div().w(40.0).h(40.0).id("other").cursor_pointer());

        let mut tree = RenderTree::from_element(&ui);
        tree.compute_layout(100.0, 40.0);

        let mut router = EventRouter::new();
        router.pointer_down(&tree, 20.0, 20.0);
        // Drag off the button before releasing.
        router.pointer_move(&tree, 60.0, 20.0);
        router.pointer_up(&tree, 60.0, 20.0, 0);

        assert_eq!(hits.load(Ordering::SeqCst), 0);
        // Dragging off a pressed element returns it to idle.
        assert_eq!(router.interaction_state("btn"), interaction::IDLE);
    }

    #[test]
    fn test_interaction_survives_invalidate() {
        let tree = two_buttons();
        let mut router = EventRouter::new();

        router.pointer_move(&tree, 20.0, 20.0);
        router.invalidate();

        // Machines are keyed by id, so a rebuilt tree keeps visual state.
        assert_eq!(router.interaction_state("left"), interaction::HOVERED);
    }

    #[test]
    fn test_leave_after_invalidate_reaches_old_hover() {
        let tree = two_buttons();
        let mut router = EventRouter::new();

        router.pointer_move(&tree, 20.0, 20.0);
        router.invalidate();

        // Pointer moves off the element against a rebuilt tree; the old
        // hover is remembered by id and gets its leave event.
        let tree = two_buttons();
        router.pointer_move(&tree, 60.0, 20.0);
        assert_eq!(router.interaction_state("left"), interaction::IDLE);
        assert_eq!(router.interaction_state("right"), interaction::HOVERED);

        // And off all targets entirely.
        router.invalidate();
        let tree = two_buttons();
        router.pointer_move(&tree, 200.0, 200.0);
        assert_eq!(router.interaction_state("right"), interaction::IDLE);
    }
}
