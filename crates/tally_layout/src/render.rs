//! RenderTree bridge connecting element builders, layout, and painting.
//!
//! A `RenderTree` is built fresh from the root element each frame, holds
//! the computed absolute bounds for hit-testing, registers activation
//! handlers with the event dispatcher, and paints onto a
//! [`DrawContext`].

use rustc_hash::FxHashMap;
use slotmap::Key;
use taffy::prelude::*;
use tally_core::events::{event_types, Event};
use tally_core::{Color, DrawContext, EventDispatcher, TextAlign};

use crate::div::ElementBuilder;
use crate::element::{ElementBounds, RenderProps};
use crate::tree::{LayoutNodeId, LayoutTree};

/// Stores an element's type for rendering
#[derive(Clone)]
pub enum ElementType {
    /// A div/container element
    Div,
    /// A text element with content
    Text(TextData),
}

/// Text data for rendering
#[derive(Clone)]
pub struct TextData {
    pub content: String,
    pub font_size: f32,
    pub color: Color,
    pub align: TextAlign,
}

/// Node data for rendering
#[derive(Clone)]
pub struct RenderNode {
    /// Render properties
    pub props: RenderProps,
    /// Element type
    pub element_type: ElementType,
}

/// RenderTree - bridges element builders, layout computation, and painting
pub struct RenderTree {
    /// The underlying layout tree
    layout_tree: LayoutTree,
    /// Render data for each node
    render_nodes: FxHashMap<LayoutNodeId, RenderNode>,
    /// Registered element ids
    ids: FxHashMap<String, LayoutNodeId>,
    /// Reverse id lookup
    node_ids: FxHashMap<LayoutNodeId, String>,
    /// Activation handlers, keyed by raw node key
    dispatcher: EventDispatcher,
    /// Absolute bounds per node, valid after `compute_layout`
    bounds: FxHashMap<LayoutNodeId, ElementBounds>,
    /// Root node ID
    root: Option<LayoutNodeId>,
}

impl Default for RenderTree {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderTree {
    /// Create a new empty render tree
    pub fn new() -> Self {
        Self {
            layout_tree: LayoutTree::new(),
            render_nodes: FxHashMap::default(),
            ids: FxHashMap::default(),
            node_ids: FxHashMap::default(),
            dispatcher: EventDispatcher::new(),
            bounds: FxHashMap::default(),
            root: None,
        }
    }

    /// Build a render tree from an element builder
    pub fn from_element<E: ElementBuilder>(element: &E) -> Self {
        let mut tree = Self::new();
        let root = tree.build_element(element);
        tree.root = Some(root);
        tree
    }

    /// Recursively build an element and its children into the tree
    fn build_element(&mut self, element: &dyn ElementBuilder) -> LayoutNodeId {
        let node_id = self.layout_tree.create_node(element.layout_style());

        let mut props = element.render_props();
        props.node_id = Some(node_id);
        if !element.click_handlers().is_empty() {
            props.interactive = true;
        }

        if let Some(id) = element.element_id() {
            if self.ids.insert(id.to_string(), node_id).is_some() {
                tracing::warn!(id, "duplicate element id; later element wins");
            }
            self.node_ids.insert(node_id, id.to_string());
        }

        for handler in element.click_handlers() {
            let handler = std::sync::Arc::clone(handler);
            self.dispatcher
                .register(node_id.data().as_ffi(), event_types::CLICK, move |event| {
                    handler(event)
                });
        }

        let element_type = match element.text_data() {
            Some(data) => ElementType::Text(data),
            None => ElementType::Div,
        };

        self.render_nodes.insert(
            node_id,
            RenderNode {
                props,
                element_type,
            },
        );

        for child in element.children_builders() {
            let child_id = self.build_element(child.as_ref());
            self.layout_tree.add_child(node_id, child_id);
        }

        node_id
    }

    /// Get the root node ID
    pub fn root(&self) -> Option<LayoutNodeId> {
        self.root
    }

    /// Compute layout for the given viewport size and refresh absolute bounds
    pub fn compute_layout(&mut self, width: f32, height: f32) {
        let Some(root) = self.root else {
            return;
        };

        self.layout_tree.compute_layout(
            root,
            Size {
                width: AvailableSpace::Definite(width),
                height: AvailableSpace::Definite(height),
            },
        );

        let mut bounds = FxHashMap::default();
        Self::collect_bounds(&self.layout_tree, root, (0.0, 0.0), &mut bounds);
        self.bounds = bounds;
    }

    fn collect_bounds(
        tree: &LayoutTree,
        node: LayoutNodeId,
        parent_offset: (f32, f32),
        out: &mut FxHashMap<LayoutNodeId, ElementBounds>,
    ) {
        let Some(node_bounds) = tree.get_bounds(node, parent_offset) else {
            return;
        };
        out.insert(node, node_bounds);

        let offset = (node_bounds.x, node_bounds.y);
        for &child in tree.children(node) {
            Self::collect_bounds(tree, child, offset, out);
        }
    }

    /// Absolute bounds for a node, valid after `compute_layout`
    pub fn bounds(&self, node: LayoutNodeId) -> Option<ElementBounds> {
        self.bounds.get(&node).copied()
    }

    /// Look up a node by its registered element id
    pub fn node_by_id(&self, id: &str) -> Option<LayoutNodeId> {
        self.ids.get(id).copied()
    }

    /// The registered element id of a node, if any
    pub fn id_of(&self, node: LayoutNodeId) -> Option<&str> {
        self.node_ids.get(&node).map(String::as_str)
    }

    /// Iterate over all registered element ids
    pub fn iter_ids(&self) -> impl Iterator<Item = (&str, LayoutNodeId)> {
        self.ids.iter().map(|(id, &node)| (id.as_str(), node))
    }

    /// Get render node data
    pub fn get_render_node(&self, node: LayoutNodeId) -> Option<&RenderNode> {
        self.render_nodes.get(&node)
    }

    /// The layout tree for inspection
    pub fn layout(&self) -> &LayoutTree {
        &self.layout_tree
    }

    /// Whether the node is a pointer target
    pub fn is_interactive(&self, node: LayoutNodeId) -> bool {
        self.render_nodes
            .get(&node)
            .map(|n| n.props.interactive)
            .unwrap_or(false)
    }

    /// Deepest interactive node containing the point, if any
    pub fn hit_test(&self, x: f32, y: f32) -> Option<LayoutNodeId> {
        let root = self.root?;
        let mut hit = None;
        self.hit_test_node(root, x, y, &mut hit);
        hit
    }

    fn hit_test_node(&self, node: LayoutNodeId, x: f32, y: f32, hit: &mut Option<LayoutNodeId>) {
        let Some(bounds) = self.bounds(node) else {
            return;
        };
        if !bounds.contains(x, y) {
            return;
        }
        if self.is_interactive(node) {
            *hit = Some(node);
        }
        for &child in self.layout_tree.children(node) {
            self.hit_test_node(child, x, y, hit);
        }
    }

    /// Invoke the activation handlers registered for a node
    pub fn dispatch_click(&self, node: LayoutNodeId, x: f32, y: f32, timestamp: u64) {
        let target = node.data().as_ffi();
        tracing::debug!(id = self.id_of(node), x, y, "click");
        let mut event = Event::pointer(event_types::CLICK, target, x, y, timestamp);
        self.dispatcher.dispatch(&mut event);
    }

    /// Text content of the node itself, for text leaves
    pub fn text_of(&self, node: LayoutNodeId) -> Option<&str> {
        match self.render_nodes.get(&node)?.element_type {
            ElementType::Text(ref data) => Some(&data.content),
            ElementType::Div => None,
        }
    }

    /// Concatenated text content of a node's subtree, in layout order
    pub fn subtree_text(&self, node: LayoutNodeId) -> Option<String> {
        let mut parts = Vec::new();
        self.collect_text(node, &mut parts);
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    fn collect_text(&self, node: LayoutNodeId, out: &mut Vec<String>) {
        if let Some(content) = self.text_of(node) {
            out.push(content.to_string());
        }
        for &child in self.layout_tree.children(node) {
            self.collect_text(child, out);
        }
    }

    /// Paint the tree onto a draw context, parents before children
    pub fn render(&self, ctx: &mut dyn DrawContext) {
        if let Some(root) = self.root {
            self.render_node(ctx, root);
        }
    }

    fn render_node(&self, ctx: &mut dyn DrawContext, node: LayoutNodeId) {
        let Some(bounds) = self.bounds(node) else {
            return;
        };
        let Some(render_node) = self.render_nodes.get(&node) else {
            return;
        };

        if let Some(bg) = render_node.props.background {
            ctx.fill_rect(bounds.to_rect(), render_node.props.border_radius, bg);
        }

        if let ElementType::Text(ref data) = render_node.element_type {
            ctx.draw_text(
                &data.content,
                bounds.to_rect(),
                data.font_size,
                data.align,
                data.color,
            );
        }

        for &child in self.layout_tree.children(node) {
            self.render_node(ctx, child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::div::div;
    use crate::text::text;
    use tally_core::DisplayList;

    #[test]
    fn test_render_tree_from_element() {
        let ui = div().w(100.0).h(100.0).child(div().w(50.0).h(50.0));

        let tree = RenderTree::from_element(&ui);
        assert!(tree.root().is_some());
    }

    #[test]
    fn test_compute_layout() {
        let ui = div()
            .w(200.0)
            .h(200.0)
            .flex_col()
            .child(div().h(50.0).w_full())
            .child(div().flex_grow().w_full());

        let mut tree = RenderTree::from_element(&ui);
        tree.compute_layout(200.0, 200.0);

        let root = tree.root().unwrap();
        let bounds = tree.bounds(root).unwrap();
        assert_eq!(bounds.width, 200.0);
        assert_eq!(bounds.height, 200.0);
    }

    #[test]
    fn test_flex_row_positions_children_in_order() {
        let ui = div()
            .w(120.0)
            .h(40.0)
            .flex_row()
            .child(div().w(40.0).h(40.0).id("a"))
            .child(div().w(40.0).h(40.0).id("b"))
            .child(div().w(40.0).h(40.0).id("c"));

        let mut tree = RenderTree::from_element(&ui);
        tree.compute_layout(120.0, 40.0);

        let a = tree.bounds(tree.node_by_id("a").unwrap()).unwrap();
        let b = tree.bounds(tree.node_by_id("b").unwrap()).unwrap();
        let c = tree.bounds(tree.node_by_id("c").unwrap()).unwrap();

        assert_eq!(a.x, 0.0);
        assert_eq!(b.x, 40.0);
        assert_eq!(c.x, 80.0);
    }

    #[test]
    fn test_hit_test_prefers_deepest_interactive() {
        let ui = div()
            .w(100.0)
            .h(100.0)
            .cursor_pointer()
            .id("outer")
            .child(div().w(50.0).h(50.0).cursor_pointer().id("inner"));

        let mut tree = RenderTree::from_element(&ui);
        tree.compute_layout(100.0, 100.0);

        let inner = tree.node_by_id("inner").unwrap();
        let outer = tree.node_by_id("outer").unwrap();

        assert_eq!(tree.hit_test(25.0, 25.0), Some(inner));
        assert_eq!(tree.hit_test(75.0, 75.0), Some(outer));
        assert_eq!(tree.hit_test(200.0, 200.0), None);
    }

    #[test]
    fn test_click_reaches_handler() {
        use std::sync::atomic::{AtomicU32, Ordering};
        use std::sync::Arc;

        let hits = Arc::new(AtomicU32::new(0));
        let hits_clone = Arc::clone(&hits);

        let ui = div().w(50.0).h(50.0).id("btn").on_click(move |_| {
            hits_clone.fetch_add(1, Ordering::SeqCst);
        });

        let mut tree = RenderTree::from_element(&ui);
        tree.compute_layout(50.0, 50.0);

        let node = tree.node_by_id("btn").unwrap();
        tree.dispatch_click(node, 10.0, 10.0, 0);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_subtree_text_and_paint() {
        let ui = div()
            .w(100.0)
            .h(40.0)
            .bg([0.2, 0.2, 0.2, 1.0])
            .id("panel")
            .child(text("hello").size(16.0));

        let mut tree = RenderTree::from_element(&ui);
        tree.compute_layout(100.0, 40.0);

        let panel = tree.node_by_id("panel").unwrap();
        assert_eq!(tree.subtree_text(panel).as_deref(), Some("hello"));

        let mut list = DisplayList::new();
        tree.render(&mut list);
        assert_eq!(list.text_runs().collect::<Vec<_>>(), vec!["hello"]);
        assert!(list.commands().len() >= 2);
    }
}
