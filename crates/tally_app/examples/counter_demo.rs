//! Headless counter demo.
//!
//! Mounts the counter app, walks through the control surface, and prints
//! the diagnostics report as JSON.
//!
//! ```sh
//! RUST_LOG=debug cargo run -p tally_app --example counter_demo
//! ```

use tally_app::prelude::*;
use tracing_subscriber::EnvFilter;

const SCENARIO: &str = r#"{
    "steps": [
        { "type": "assert_text_contains", "id": "counter-display", "value": "0" },
        { "type": "click", "id": "counter-inc-small" },
        { "type": "click", "id": "counter-inc-large" },
        { "type": "click", "id": "counter-dec-small" },
        { "type": "click", "id": "counter-dec-large" },
        { "type": "assert_text_contains", "id": "counter-display", "value": "0" },
        { "type": "click", "id": "counter-dec-small" },
        { "type": "assert_count", "value": -1 },
        { "type": "assert_text_contains", "id": "counter-display", "value": "-1" },
        { "type": "click", "id": "counter-clear" },
        { "type": "assert_count", "value": 0 },
        { "type": "assert_text_contains", "id": "counter-display", "value": "0" }
    ]
}"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut app = CounterApp::new(HeadlessRunConfig::default())?;
    let outcome = run_scenario(&mut app, SCENARIO)?;

    outcome.report().write_to_writer(&mut std::io::stdout())?;

    if outcome.is_failed() {
        anyhow::bail!("scenario failed");
    }
    Ok(())
}
