//! Counter view units.
//!
//! Two cooperating units, mirroring the provider/consumer split:
//!
//! - the **root unit** is [`crate::app::CounterApp`], which owns the store
//!   and the context binding, and lays the panel out in the viewport via
//!   [`counter_root`];
//! - the **consumer unit** is [`counter_panel`], which reads the shared
//!   context and renders the interactive controls. It holds no logic of
//!   its own: every control dispatches through the context facade.

use tally_core::{use_counter, Color};
use tally_layout::div::{div, Div};
use tally_layout::text::text;
use tally_widgets::{button, WidgetContext};

/// Element ids for the counter controls.
pub mod ids {
    pub const DEC_LARGE: &str = "counter-dec-large";
    pub const DEC_SMALL: &str = "counter-dec-small";
    pub const DISPLAY: &str = "counter-display";
    pub const INC_SMALL: &str = "counter-inc-small";
    pub const INC_LARGE: &str = "counter-inc-large";
    pub const CLEAR: &str = "counter-clear";
}

/// Presentation settings for the counter panel.
///
/// The unit buttons always dispatch the facade's default step; only the
/// large step is configurable.
#[derive(Clone, Copy, Debug)]
pub struct CounterPanelConfig {
    /// Step dispatched by the `-N` / `+N` buttons.
    pub large_step: i64,
    /// Fixed width of the numeric display.
    pub display_width: f32,
    /// Font size for the display and button labels.
    pub font_size: f32,
}

impl Default for CounterPanelConfig {
    fn default() -> Self {
        Self {
            large_step: 5,
            display_width: 32.0,
            font_size: 16.0,
        }
    }
}

/// The consumer unit: five controls in a row, clear below.
pub fn counter_panel(ctx: &WidgetContext, config: &CounterPanelConfig) -> Div {
    let counter = use_counter();
    let count = counter.count();
    let large = config.large_step;

    let dec_large = {
        let counter = counter.clone();
        button(format!("-{large}"))
            .id(ids::DEC_LARGE)
            .font_size(config.font_size)
            .on_click(move |_| counter.decrement_by(large))
    };
    let dec_small = {
        let counter = counter.clone();
        button("-1")
            .id(ids::DEC_SMALL)
            .font_size(config.font_size)
            .on_click(move |_| counter.decrement())
    };
    let inc_small = {
        let counter = counter.clone();
        button("+1")
            .id(ids::INC_SMALL)
            .font_size(config.font_size)
            .on_click(move |_| counter.increment())
    };
    let inc_large = {
        let counter = counter.clone();
        button(format!("+{large}"))
            .id(ids::INC_LARGE)
            .font_size(config.font_size)
            .on_click(move |_| counter.increment_by(large))
    };
    let clear = {
        let counter = counter.clone();
        button("clear")
            .id(ids::CLEAR)
            .font_size(config.font_size)
            .padding(16.0, 4.0)
            .on_click(move |_| counter.clear())
    };

    div()
        .flex_col()
        .items_center()
        .gap(8.0)
        .child(
            div()
                .flex_row()
                .items_center()
                .gap(8.0)
                .child(dec_large.build(ctx))
                .child(dec_small.build(ctx))
                .child(
                    text(count.to_string())
                        .id(ids::DISPLAY)
                        .size(config.font_size)
                        .w(config.display_width)
                        .text_center()
                        .color(Color::BLACK),
                )
                .child(inc_small.build(ctx))
                .child(inc_large.build(ctx)),
        )
        .child(clear.build(ctx))
}

/// Root-unit layout: the panel centered in the viewport.
pub fn counter_root(ctx: &WidgetContext, config: &CounterPanelConfig) -> Div {
    div()
        .w_full()
        .h_full()
        .flex_col()
        .items_center()
        .justify_center()
        .child(counter_panel(ctx, config))
}
