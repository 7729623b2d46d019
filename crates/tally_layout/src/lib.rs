//! Tally Layout Engine
//!
//! Flexbox layout powered by Taffy, plus the element builders, render tree,
//! and pointer event routing the counter UI is assembled from.

pub mod div;
pub mod element;
pub mod render;
pub mod router;
pub mod text;
pub mod tree;

pub use div::{div, ClickHandler, Div, ElementBuilder};
pub use element::{ElementBounds, RenderProps};
pub use render::{ElementType, RenderNode, RenderTree, TextData};
pub use router::{interaction, pointer_interaction_machine, EventRouter, HitResult};
pub use text::{text, Text};
pub use tree::{LayoutNodeId, LayoutTree};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::div::{div, Div, ElementBuilder};
    pub use crate::element::{ElementBounds, RenderProps};
    pub use crate::render::RenderTree;
    pub use crate::router::{interaction, EventRouter};
    pub use crate::text::{text, Text};
    pub use crate::tree::{LayoutNodeId, LayoutTree};

    // Core types
    pub use tally_core::{Color, CornerRadius, DrawContext, Rect, TextAlign};
}
