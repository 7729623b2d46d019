//! Element types for layout-driven UI
//!
//! Computed bounds and per-node render properties shared by the builders
//! and the render tree.

use tally_core::{Color, CornerRadius, Rect};
use taffy::Layout;

use crate::tree::LayoutNodeId;

/// Computed layout bounds for an element after layout computation
#[derive(Clone, Copy, Debug, Default)]
pub struct ElementBounds {
    /// X position relative to parent
    pub x: f32,
    /// Y position relative to parent
    pub y: f32,
    /// Computed width
    pub width: f32,
    /// Computed height
    pub height: f32,
}

impl ElementBounds {
    /// Create bounds from a Taffy Layout with parent offset
    pub fn from_layout(layout: &Layout, parent_offset: (f32, f32)) -> Self {
        Self {
            x: parent_offset.0 + layout.location.x,
            y: parent_offset.1 + layout.location.y,
            width: layout.size.width,
            height: layout.size.height,
        }
    }

    /// Convert to a paint Rect
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Whether the point lies inside these bounds
    pub fn contains(&self, px: f32, py: f32) -> bool {
        self.to_rect().contains(px, py)
    }
}

/// Visual properties for rendering an element
#[derive(Clone, Default)]
pub struct RenderProps {
    /// Background fill
    pub background: Option<Color>,
    /// Corner radius for rounded rectangles
    pub border_radius: CornerRadius,
    /// Whether the element participates in pointer hit-testing
    pub interactive: bool,
    /// Node ID for looking up children
    pub node_id: Option<LayoutNodeId>,
}

impl RenderProps {
    /// Create new render properties
    pub fn new() -> Self {
        Self::default()
    }
}
