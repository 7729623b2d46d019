//! Tally Application Framework
//!
//! The counter application: view units (root provider and counter panel
//! consumer) plus the deterministic headless host that lays them out,
//! routes pointer input, and drives scenario-based diagnostics.
//!
//! # Example
//!
//! ```ignore
//! use tally_app::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut app = CounterApp::new(HeadlessRunConfig::default())?;
//!     app.click(ids::INC_SMALL)?;
//!     app.click(ids::INC_LARGE)?;
//!     assert_eq!(app.count(), 6);
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod assert;
pub mod error;
pub mod report;
pub mod runner;
pub mod scenario;
pub mod view;


pub use app::{CounterApp, HeadlessRunConfig};
pub use assert::{DiagnosticsElement, DiagnosticsSnapshot};
pub use error::{AppError, Result};
pub use report::{HeadlessReport, ReportStatus};
pub use runner::{run_loaded_scenario, run_scenario, RunOutcome};
pub use scenario::{HeadlessScenario, ScenarioStep};
pub use view::{counter_panel, counter_root, ids, CounterPanelConfig};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::app::{CounterApp, HeadlessRunConfig};
    pub use crate::error::AppError;
    pub use crate::report::{HeadlessReport, ReportStatus};
    pub use crate::runner::{run_loaded_scenario, run_scenario, RunOutcome};
    pub use crate::scenario::{HeadlessScenario, ScenarioStep};
    pub use crate::view::{counter_panel, counter_root, ids, CounterPanelConfig};

    // Layout and widget builders
    pub use tally_layout::prelude::*;
    pub use tally_widgets::{button, WidgetContext};

    // Core types
    pub use tally_core::{use_counter, CounterAction, CounterState, CounterStore};
}
