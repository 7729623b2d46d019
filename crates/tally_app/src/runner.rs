//! Scenario runner that executes headless diagnostics against a live app.

use anyhow::Result;

use crate::app::CounterApp;
use crate::assert::{
    evaluate_assert_count, evaluate_assert_exists, evaluate_assert_text_contains, AssertionResult,
};
use crate::error::AppError;
use crate::report::HeadlessReport;
use crate::scenario::{HeadlessScenario, ScenarioStep};

/// Final outcome of a scenario run.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Passed { report: HeadlessReport },
    Failed { report: HeadlessReport },
}

impl RunOutcome {
    pub fn report(&self) -> &HeadlessReport {
        match self {
            RunOutcome::Passed { report } => report,
            RunOutcome::Failed { report } => report,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RunOutcome::Failed { .. })
    }
}

/// Parse and execute scenario JSON against a live app.
pub fn run_scenario(app: &mut CounterApp, input: &str) -> Result<RunOutcome> {
    let scenario = HeadlessScenario::from_json(input)?;
    run_loaded_scenario(app, &scenario)
}

/// Execute a pre-loaded scenario against a live app.
///
/// Structural failures (an unparseable scenario) surface as errors;
/// assertion failures and clicks on unknown elements produce a `Failed`
/// outcome with a step-indexed report.
pub fn run_loaded_scenario(app: &mut CounterApp, scenario: &HeadlessScenario) -> Result<RunOutcome> {
    for (step_index, step) in scenario.steps.iter().enumerate() {
        match step {
            ScenarioStep::Wait { ms } => {
                app.run_frames(frames_for_wait(*ms, app.tick_ms()));
            }
            ScenarioStep::Tick { frames } => {
                app.run_frames(*frames);
            }
            ScenarioStep::Click { id } => match app.click(id) {
                Ok(()) => {}
                Err(AppError::UnknownElement(id)) => {
                    return Ok(failed(app, "click", step_index, format!("{id}: element not found")));
                }
                Err(other) => return Err(other.into()),
            },
            ScenarioStep::PointerMove { x, y } => {
                app.pointer_move(*x, *y);
            }
            ScenarioStep::AssertCount { value } => {
                if let AssertionResult::Failed { message, .. } =
                    evaluate_assert_count(*value, &app.snapshot())
                {
                    return Ok(failed(app, "assert_count", step_index, message));
                }
            }
            ScenarioStep::AssertExists { id } => {
                if let AssertionResult::Failed { message, .. } =
                    evaluate_assert_exists(id, &app.snapshot())
                {
                    return Ok(failed(app, "assert_exists", step_index, message));
                }
            }
            ScenarioStep::AssertTextContains { id, value } => {
                if let AssertionResult::Failed { message, .. } =
                    evaluate_assert_text_contains(id, value, &app.snapshot())
                {
                    return Ok(failed(app, "assert_text_contains", step_index, message));
                }
            }
        }
    }

    Ok(RunOutcome::Passed {
        report: HeadlessReport::passed(app.count(), app.frames(), app.elapsed_ms()),
    })
}

fn failed(app: &CounterApp, assertion: &str, step_index: usize, message: String) -> RunOutcome {
    tracing::warn!(assertion, step_index, %message, "scenario step failed");
    RunOutcome::Failed {
        report: HeadlessReport::failed(
            assertion,
            step_index,
            message,
            app.count(),
            app.frames(),
            app.elapsed_ms(),
        ),
    }
}

fn frames_for_wait(wait_ms: u64, tick_ms: u64) -> u32 {
    if wait_ms == 0 {
        return 0;
    }
    let tick = tick_ms.max(1);
    let frames = wait_ms.saturating_add(tick.saturating_sub(1)) / tick;
    frames.min(u32::MAX as u64) as u32
}
