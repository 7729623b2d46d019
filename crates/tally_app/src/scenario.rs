//! Scenario definition for app-level headless diagnostics.

use serde::Deserialize;
use std::path::Path;

use crate::error::Result;

/// Sequence of headless diagnostic steps.
#[derive(Debug, Clone, Deserialize)]
pub struct HeadlessScenario {
    pub steps: Vec<ScenarioStep>,
}

impl HeadlessScenario {
    /// Load a scenario from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a scenario from file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

/// Scenario step set for driving and checking the counter UI.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    Wait { ms: u64 },
    Tick { frames: u32 },
    Click { id: String },
    PointerMove { x: f32, y: f32 },
    AssertCount { value: i64 },
    AssertExists { id: String },
    AssertTextContains { id: String, value: String },
}
