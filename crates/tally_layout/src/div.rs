//! Container element builder with fluent layout styling.

use std::sync::Arc;

use smallvec::SmallVec;
use taffy::prelude::*;
use tally_core::{Color, Event};

use crate::element::RenderProps;
use crate::render::TextData;

/// Activation handler attached to an element.
///
/// Handlers are shared so a built element tree can be walked by reference
/// while the handlers are registered with the event dispatcher.
pub type ClickHandler = Arc<dyn Fn(&Event) + Send + Sync>;

/// A renderable element in the view tree.
///
/// Implementors describe their layout style, visual properties, children,
/// and (for leaf text runs) their text data; [`crate::render::RenderTree`]
/// turns the description into layout nodes.
pub trait ElementBuilder {
    /// Taffy style for this element's layout node
    fn layout_style(&self) -> Style;

    /// Visual properties for rendering
    fn render_props(&self) -> RenderProps;

    /// Child elements, in layout order
    fn children_builders(&self) -> &[Box<dyn ElementBuilder>] {
        &[]
    }

    /// Text content, for text leaf elements
    fn text_data(&self) -> Option<TextData> {
        None
    }

    /// Stable identifier for registry lookup and interaction tracking
    fn element_id(&self) -> Option<&str> {
        None
    }

    /// Activation handlers to register for this element
    fn click_handlers(&self) -> &[ClickHandler] {
        &[]
    }
}

/// A div/container element with flexbox layout
pub struct Div {
    style: Style,
    props: RenderProps,
    id: Option<String>,
    handlers: SmallVec<[ClickHandler; 1]>,
    children: Vec<Box<dyn ElementBuilder>>,
}

/// Create a container element
pub fn div() -> Div {
    Div {
        style: Style {
            display: Display::Flex,
            ..Default::default()
        },
        props: RenderProps::new(),
        id: None,
        handlers: SmallVec::new(),
        children: Vec::new(),
    }
}

impl Div {
    /// Set a fixed width
    pub fn w(mut self, width: f32) -> Self {
        self.style.size.width = Dimension::Length(width);
        self
    }

    /// Set a fixed height
    pub fn h(mut self, height: f32) -> Self {
        self.style.size.height = Dimension::Length(height);
        self
    }

    /// Fill the parent's width
    pub fn w_full(mut self) -> Self {
        self.style.size.width = Dimension::Percent(1.0);
        self
    }

    /// Fill the parent's height
    pub fn h_full(mut self) -> Self {
        self.style.size.height = Dimension::Percent(1.0);
        self
    }

    /// Lay children out in a row
    pub fn flex_row(mut self) -> Self {
        self.style.flex_direction = FlexDirection::Row;
        self
    }

    /// Lay children out in a column
    pub fn flex_col(mut self) -> Self {
        self.style.flex_direction = FlexDirection::Column;
        self
    }

    /// Grow to fill remaining space
    pub fn flex_grow(mut self) -> Self {
        self.style.flex_grow = 1.0;
        self
    }

    /// Gap between children
    pub fn gap(mut self, gap: f32) -> Self {
        self.style.gap = Size {
            width: LengthPercentage::Length(gap),
            height: LengthPercentage::Length(gap),
        };
        self
    }

    /// Uniform padding
    pub fn p(mut self, pad: f32) -> Self {
        self.style.padding = Rect {
            left: LengthPercentage::Length(pad),
            right: LengthPercentage::Length(pad),
            top: LengthPercentage::Length(pad),
            bottom: LengthPercentage::Length(pad),
        };
        self
    }

    /// Horizontal padding
    pub fn px(mut self, pad: f32) -> Self {
        self.style.padding.left = LengthPercentage::Length(pad);
        self.style.padding.right = LengthPercentage::Length(pad);
        self
    }

    /// Vertical padding
    pub fn py(mut self, pad: f32) -> Self {
        self.style.padding.top = LengthPercentage::Length(pad);
        self.style.padding.bottom = LengthPercentage::Length(pad);
        self
    }

    /// Center children on the cross axis
    pub fn items_center(mut self) -> Self {
        self.style.align_items = Some(AlignItems::Center);
        self
    }

    /// Center children on the main axis
    pub fn justify_center(mut self) -> Self {
        self.style.justify_content = Some(JustifyContent::Center);
        self
    }

    /// Set background color
    pub fn bg(mut self, color: impl Into<Color>) -> Self {
        self.props.background = Some(color.into());
        self
    }

    /// Set uniform corner radius
    pub fn rounded(mut self, radius: f32) -> Self {
        self.props.border_radius = tally_core::CornerRadius::uniform(radius);
        self
    }

    /// Mark the element as a pointer target
    pub fn cursor_pointer(mut self) -> Self {
        self.props.interactive = true;
        self
    }

    /// Stable identifier for registry lookup and interaction tracking
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Attach an activation handler. Also marks the element interactive.
    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.handlers.push(Arc::new(handler));
        self.props.interactive = true;
        self
    }

    /// Append a child element
    pub fn child(mut self, child: impl ElementBuilder + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }
}

impl ElementBuilder for Div {
    fn layout_style(&self) -> Style {
        self.style.clone()
    }

    fn render_props(&self) -> RenderProps {
        self.props.clone()
    }

    fn children_builders(&self) -> &[Box<dyn ElementBuilder>] {
        &self.children
    }

    fn element_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn click_handlers(&self) -> &[ClickHandler] {
        &self.handlers
    }
}
