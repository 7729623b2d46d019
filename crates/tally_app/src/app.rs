//! The counter application.
//!
//! `CounterApp` is the root view unit plus the headless host: it owns the
//! store, establishes the shared-context binding for its lifetime, and
//! runs the build → layout → route → rebuild loop. Dropping the app
//! unmounts the root and tears the binding down.

use std::collections::HashMap;
use std::sync::Arc;

use tally_core::{ContextGuard, CounterContext, CounterStore, DisplayList};
use tally_layout::render::RenderTree;
use tally_layout::router::EventRouter;
use tally_widgets::WidgetContext;

use crate::assert::{DiagnosticsElement, DiagnosticsSnapshot};
use crate::error::{AppError, Result};
use crate::view::{counter_root, ids, CounterPanelConfig};

/// Configuration for the deterministic headless host.
#[derive(Debug, Clone, Copy)]
pub struct HeadlessRunConfig {
    /// Logical viewport width.
    pub width: u32,
    /// Logical viewport height.
    pub height: u32,
    /// Logical milliseconds per frame.
    pub tick_ms: u64,
}

impl Default for HeadlessRunConfig {
    fn default() -> Self {
        Self {
            width: 480,
            height: 320,
            tick_ms: 16,
        }
    }
}

/// The root view unit and its headless host.
pub struct CounterApp {
    store: Arc<CounterStore>,
    /// Holds the context binding for the root's lifetime.
    _context: ContextGuard,
    panel: CounterPanelConfig,
    config: HeadlessRunConfig,
    tree: RenderTree,
    router: EventRouter,
    frames: u64,
    elapsed_ms: u64,
}

impl CounterApp {
    /// Mount the root unit with the default panel.
    pub fn new(config: HeadlessRunConfig) -> Result<Self> {
        Self::with_panel(config, CounterPanelConfig::default())
    }

    /// Mount the root unit with an explicit panel configuration.
    pub fn with_panel(config: HeadlessRunConfig, panel: CounterPanelConfig) -> Result<Self> {
        if config.width == 0 || config.height == 0 {
            return Err(AppError::Config(
                "viewport dimensions must be non-zero".to_string(),
            ));
        }
        if config.tick_ms == 0 {
            return Err(AppError::Config("tick_ms must be > 0".to_string()));
        }

        let store = Arc::new(CounterStore::new());
        let context = CounterContext::provide(Arc::clone(&store));

        let mut app = Self {
            store,
            _context: context,
            panel,
            config,
            tree: RenderTree::new(),
            router: EventRouter::new(),
            frames: 0,
            elapsed_ms: 0,
        };
        app.rebuild();
        tracing::debug!(width = config.width, height = config.height, "root unit mounted");
        Ok(app)
    }

    fn rebuild(&mut self) {
        self.router.invalidate();
        let ctx = WidgetContext::with_states(self.router.interaction_states());
        let ui = counter_root(&ctx, &self.panel);

        let mut tree = RenderTree::from_element(&ui);
        tree.compute_layout(self.config.width as f32, self.config.height as f32);
        self.tree = tree;
        tracing::trace!(frame = self.frames, "view tree rebuilt");
    }

    /// Advance one frame, rebuilding the view if state or interaction
    /// visuals changed.
    pub fn tick(&mut self) {
        self.frames += 1;
        self.elapsed_ms += self.config.tick_ms;
        let dirty = self.store.take_dirty();
        let interactions = self.router.take_changed();
        if dirty || interactions {
            self.rebuild();
        }
    }

    /// Advance a fixed number of frames.
    pub fn run_frames(&mut self, frames: u32) {
        for _ in 0..frames {
            self.tick();
        }
    }

    /// Click an element by its registered id, at its center.
    pub fn click(&mut self, id: &str) -> Result<()> {
        let node = self
            .tree
            .node_by_id(id)
            .ok_or_else(|| AppError::UnknownElement(id.to_string()))?;
        let bounds = self
            .tree
            .bounds(node)
            .ok_or_else(|| AppError::UnknownElement(id.to_string()))?;

        let (x, y) = bounds.to_rect().center();
        self.router.click(&self.tree, x, y, self.elapsed_ms);
        self.tick();
        Ok(())
    }

    /// Route a pointer move through the view.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.router.pointer_move(&self.tree, x, y);
        self.tick();
    }

    /// Current counter value.
    pub fn count(&self) -> i64 {
        self.store.count()
    }

    /// Text shown by the numeric display.
    pub fn display_text(&self) -> Option<String> {
        self.tree
            .node_by_id(ids::DISPLAY)
            .and_then(|node| self.tree.subtree_text(node))
    }

    /// Frames executed so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Logical milliseconds elapsed so far.
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Logical milliseconds per frame.
    pub fn tick_ms(&self) -> u64 {
        self.config.tick_ms
    }

    /// The live render tree.
    pub fn tree(&self) -> &RenderTree {
        &self.tree
    }

    /// Interaction state tracked for an element id.
    pub fn interaction_state(&self, id: &str) -> tally_core::fsm::StateId {
        self.router.interaction_state(id)
    }

    /// Paint the current view into a display list.
    pub fn paint(&self) -> DisplayList {
        let mut list = DisplayList::new();
        self.tree.render(&mut list);
        list
    }

    /// Snapshot of the counter value and every registered element's text,
    /// for assertions.
    pub fn snapshot(&self) -> DiagnosticsSnapshot {
        let mut elements = HashMap::new();
        for (id, node) in self.tree.iter_ids() {
            elements.insert(
                id.to_string(),
                DiagnosticsElement {
                    text: self.tree.subtree_text(node),
                },
            );
        }
        DiagnosticsSnapshot {
            count: self.store.count(),
            elements,
        }
    }
}
