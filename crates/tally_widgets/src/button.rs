//! Button widget with FSM-driven interactions
//!
//! The button provides:
//! - Visual states: idle, hovered, pressed
//! - Interaction state driven by the router's per-element machines
//! - Customizable appearance

use std::sync::Arc;

use tally_core::{Color, Event};
use tally_layout::div::{div, ClickHandler, Div};
use tally_layout::router::interaction;
use tally_layout::text::text;

use crate::context::WidgetContext;

/// Button configuration
#[derive(Clone)]
pub struct ButtonConfig {
    /// Button label text
    pub label: String,
    /// Base background color
    pub bg_color: Color,
    /// Hover background color
    pub hover_color: Color,
    /// Pressed background color
    pub pressed_color: Color,
    /// Text color
    pub text_color: Color,
    /// Font size
    pub font_size: f32,
    /// Corner radius
    pub corner_radius: f32,
    /// Padding (horizontal, vertical)
    pub padding: (f32, f32),
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            label: String::new(),
            bg_color: Color::rgba(0.2, 0.5, 0.9, 1.0),
            hover_color: Color::rgba(0.3, 0.6, 1.0, 1.0),
            pressed_color: Color::rgba(0.15, 0.4, 0.8, 1.0),
            text_color: Color::WHITE,
            font_size: 16.0,
            corner_radius: 8.0,
            padding: (16.0, 8.0),
        }
    }
}

impl ButtonConfig {
    /// Create a new button config with a label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }
}

/// Create a button with a label
pub fn button(label: impl Into<String>) -> ButtonBuilder {
    ButtonBuilder {
        config: ButtonConfig::new(label),
        id: None,
        on_click: None,
    }
}

/// Builder for creating buttons
pub struct ButtonBuilder {
    config: ButtonConfig,
    id: Option<String>,
    on_click: Option<ClickHandler>,
}

impl ButtonBuilder {
    /// Set the element id. Required for hover/press visuals to track
    /// across rebuilds.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the click callback
    pub fn on_click<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.on_click = Some(Arc::new(callback));
        self
    }

    /// Set the background color
    pub fn bg(mut self, color: Color) -> Self {
        self.config.bg_color = color;
        self
    }

    /// Set the hover color
    pub fn hover(mut self, color: Color) -> Self {
        self.config.hover_color = color;
        self
    }

    /// Set the pressed color
    pub fn pressed(mut self, color: Color) -> Self {
        self.config.pressed_color = color;
        self
    }

    /// Set the text color
    pub fn text_color(mut self, color: Color) -> Self {
        self.config.text_color = color;
        self
    }

    /// Set the font size
    pub fn font_size(mut self, size: f32) -> Self {
        self.config.font_size = size;
        self
    }

    /// Set the corner radius
    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.config.corner_radius = radius;
        self
    }

    /// Set the padding
    pub fn padding(mut self, horizontal: f32, vertical: f32) -> Self {
        self.config.padding = (horizontal, vertical);
        self
    }

    /// Build the button's UI element
    pub fn build(&self, ctx: &WidgetContext) -> Div {
        let state = self
            .id
            .as_deref()
            .map(|id| ctx.interaction_state(id))
            .unwrap_or(interaction::IDLE);

        let bg_color = match state {
            interaction::PRESSED => self.config.pressed_color,
            interaction::HOVERED => self.config.hover_color,
            _ => self.config.bg_color,
        };

        let mut element = div()
            .px(self.config.padding.0)
            .py(self.config.padding.1)
            .bg(bg_color)
            .rounded(self.config.corner_radius)
            .cursor_pointer()
            .items_center()
            .justify_center()
            .child(
                text(&self.config.label)
                    .size(self.config.font_size)
                    .color(self.config.text_color),
            );

        if let Some(ref id) = self.id {
            element = element.id(id.clone());
        }
        if let Some(ref callback) = self.on_click {
            let callback = Arc::clone(callback);
            element = element.on_click(move |event| callback(event));
        }

        element
    }
}
