//! Tally Widget Library
//!
//! UI components built on the layout crate's element builders, with
//! interaction states driven by the router's per-element state machines.

pub mod button;
pub mod context;

pub use button::{button, ButtonBuilder, ButtonConfig};
pub use context::WidgetContext;
