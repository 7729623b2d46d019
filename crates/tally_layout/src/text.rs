//! Text element builder.

use taffy::prelude::*;
use tally_core::{Color, TextAlign};

use crate::div::ElementBuilder;
use crate::element::RenderProps;
use crate::render::TextData;

/// A text leaf element
pub struct Text {
    content: String,
    font_size: f32,
    color: Color,
    width: Option<f32>,
    align: TextAlign,
    id: Option<String>,
}

/// Create a text element
pub fn text(content: impl Into<String>) -> Text {
    Text {
        content: content.into(),
        font_size: 16.0,
        color: Color::BLACK,
        width: None,
        align: TextAlign::Start,
        id: None,
    }
}

impl Text {
    /// Set the font size
    pub fn size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Set the text color
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    /// Fix the element width instead of sizing to the content
    pub fn w(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Center the run horizontally within its bounds
    pub fn text_center(mut self) -> Self {
        self.align = TextAlign::Center;
        self
    }

    /// Stable identifier for registry lookup
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Coarse advance-width estimate. The headless host has no shaping
    /// engine; a presentation backend with real text measurement overrides
    /// layout through its own measure pass.
    fn measured_width(&self) -> f32 {
        self.content.chars().count() as f32 * self.font_size * 0.6
    }

    fn line_height(&self) -> f32 {
        self.font_size * 1.25
    }
}

impl ElementBuilder for Text {
    fn layout_style(&self) -> Style {
        Style {
            size: Size {
                width: Dimension::Length(self.width.unwrap_or_else(|| self.measured_width())),
                height: Dimension::Length(self.line_height()),
            },
            ..Default::default()
        }
    }

    fn render_props(&self) -> RenderProps {
        RenderProps::new()
    }

    fn text_data(&self) -> Option<TextData> {
        Some(TextData {
            content: self.content.clone(),
            font_size: self.font_size,
            color: self.color,
            align: self.align,
        })
    }

    fn element_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
