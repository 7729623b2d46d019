//! Integration tests driving the counter through JSON scenarios.

use tally_app::prelude::*;

fn mount() -> CounterApp {
    CounterApp::new(HeadlessRunConfig::default()).expect("failed to mount counter app")
}

#[test]
fn scenario_click_sequence_passes() {
    let mut app = mount();

    let outcome = run_scenario(
        &mut app,
        r#"{
            "steps": [
                { "type": "assert_exists", "id": "counter-display" },
                { "type": "assert_text_contains", "id": "counter-display", "value": "0" },
                { "type": "click", "id": "counter-inc-small" },
                { "type": "assert_text_contains", "id": "counter-display", "value": "1" },
                { "type": "click", "id": "counter-inc-large" },
                { "type": "assert_text_contains", "id": "counter-display", "value": "6" },
                { "type": "click", "id": "counter-dec-small" },
                { "type": "assert_text_contains", "id": "counter-display", "value": "5" },
                { "type": "click", "id": "counter-dec-large" },
                { "type": "tick", "frames": 2 },
                { "type": "assert_count", "value": 0 },
                { "type": "assert_text_contains", "id": "counter-display", "value": "0" }
            ]
        }"#,
    )
    .unwrap();

    assert!(!outcome.is_failed(), "report: {:?}", outcome.report());
    assert_eq!(outcome.report().final_count, 0);
}

#[test]
fn scenario_clear_always_wins() {
    let mut app = mount();

    let outcome = run_scenario(
        &mut app,
        r#"{
            "steps": [
                { "type": "click", "id": "counter-inc-large" },
                { "type": "click", "id": "counter-inc-large" },
                { "type": "click", "id": "counter-clear" },
                { "type": "wait", "ms": 32 },
                { "type": "assert_text_contains", "id": "counter-display", "value": "0" }
            ]
        }"#,
    )
    .unwrap();

    assert!(!outcome.is_failed(), "report: {:?}", outcome.report());
}

#[test]
fn scenario_pointer_move_drives_hover_without_clicking() {
    let mut app = mount();

    let node = app.tree().node_by_id(ids::INC_SMALL).unwrap();
    let (x, y) = app.tree().bounds(node).unwrap().to_rect().center();

    let outcome = run_scenario(
        &mut app,
        &format!(
            r#"{{
                "steps": [
                    {{ "type": "pointer_move", "x": {x}, "y": {y} }},
                    {{ "type": "tick", "frames": 1 }},
                    {{ "type": "assert_text_contains", "id": "counter-display", "value": "0" }}
                ]
            }}"#
        ),
    )
    .unwrap();

    assert!(!outcome.is_failed(), "report: {:?}", outcome.report());
    assert_eq!(app.count(), 0);
}

#[test]
fn scenario_loads_from_file() {
    let path = std::env::temp_dir().join("tally_scenario_from_file.json");
    std::fs::write(
        &path,
        r#"{
            "steps": [
                { "type": "click", "id": "counter-inc-small" },
                { "type": "assert_text_contains", "id": "counter-display", "value": "1" }
            ]
        }"#,
    )
    .unwrap();

    let scenario = HeadlessScenario::from_path(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let mut app = mount();
    let outcome = run_loaded_scenario(&mut app, &scenario).unwrap();
    assert!(!outcome.is_failed(), "report: {:?}", outcome.report());
}

#[test]
fn scenario_failed_assertion_reports_step_index() {
    let mut app = mount();

    let outcome = run_scenario(
        &mut app,
        r#"{
            "steps": [
                { "type": "click", "id": "counter-dec-small" },
                { "type": "assert_text_contains", "id": "counter-display", "value": "7" }
            ]
        }"#,
    )
    .unwrap();

    assert!(outcome.is_failed());
    let report = outcome.report();
    assert_eq!(report.failed_step_index, Some(1));
    assert_eq!(report.assertion.as_deref(), Some("assert_text_contains"));
    assert_eq!(report.final_count, -1);
    assert!(report
        .message
        .as_deref()
        .unwrap()
        .contains("got '-1'"));
}

#[test]
fn scenario_click_on_missing_element_fails_without_error() {
    let mut app = mount();

    let outcome = run_scenario(
        &mut app,
        r#"{ "steps": [ { "type": "click", "id": "counter-nope" } ] }"#,
    )
    .unwrap();

    assert!(outcome.is_failed());
    assert_eq!(outcome.report().assertion.as_deref(), Some("click"));
}

#[test]
fn scenario_parse_error_is_structural() {
    let mut app = mount();
    assert!(run_scenario(&mut app, "not json").is_err());
}
