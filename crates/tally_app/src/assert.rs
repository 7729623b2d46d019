//! Assertion helpers for headless diagnostics.

use std::collections::HashMap;

/// Snapshot of app-observable state used for headless assertions.
///
/// Carries the counter value alongside the rendered elements, so a
/// scenario can check either the store directly or what the display
/// actually shows after the broadcast and re-render.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticsSnapshot {
    /// Counter value at the time of the snapshot.
    pub count: i64,
    pub elements: HashMap<String, DiagnosticsElement>,
}

/// Minimal element representation for diagnostics checks.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticsElement {
    pub text: Option<String>,
}

/// Assertion result with structured failure details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionResult {
    Passed,
    Failed { code: String, message: String },
}

pub fn evaluate_assert_count(expected: i64, snapshot: &DiagnosticsSnapshot) -> AssertionResult {
    if snapshot.count == expected {
        AssertionResult::Passed
    } else {
        AssertionResult::Failed {
            code: "count_mismatch".to_string(),
            message: format!("expected count {expected}, got {}", snapshot.count),
        }
    }
}

pub fn evaluate_assert_exists(id: &str, snapshot: &DiagnosticsSnapshot) -> AssertionResult {
    if snapshot.elements.contains_key(id) {
        AssertionResult::Passed
    } else {
        AssertionResult::Failed {
            code: "missing_element".to_string(),
            message: format!("{id}: element not found"),
        }
    }
}

pub fn evaluate_assert_text_contains(
    id: &str,
    expected: &str,
    snapshot: &DiagnosticsSnapshot,
) -> AssertionResult {
    let Some(element) = snapshot.elements.get(id) else {
        return AssertionResult::Failed {
            code: "missing_element".to_string(),
            message: format!("{id}: element not found"),
        };
    };
    let Some(text) = element.text.as_deref() else {
        return AssertionResult::Failed {
            code: "missing_text".to_string(),
            message: format!("{id}: element has no text"),
        };
    };
    if text.contains(expected) {
        AssertionResult::Passed
    } else {
        AssertionResult::Failed {
            code: "text_mismatch".to_string(),
            message: format!("{id}: expected substring '{expected}', got '{text}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_with(count: i64, id: &str, text: Option<&str>) -> DiagnosticsSnapshot {
        let mut snapshot = DiagnosticsSnapshot {
            count,
            ..Default::default()
        };
        snapshot.elements.insert(
            id.to_string(),
            DiagnosticsElement {
                text: text.map(str::to_string),
            },
        );
        snapshot
    }

    #[test]
    fn test_assert_count() {
        let snapshot = snapshot_with(4, "counter-display", Some("4"));
        assert_eq!(evaluate_assert_count(4, &snapshot), AssertionResult::Passed);

        let AssertionResult::Failed { code, message } = evaluate_assert_count(5, &snapshot) else {
            panic!("expected failure");
        };
        assert_eq!(code, "count_mismatch");
        assert!(message.contains("got 4"));
    }

    #[test]
    fn test_assert_exists() {
        let snapshot = snapshot_with(0, "counter-display", Some("0"));
        assert_eq!(
            evaluate_assert_exists("counter-display", &snapshot),
            AssertionResult::Passed
        );
        assert!(matches!(
            evaluate_assert_exists("missing", &snapshot),
            AssertionResult::Failed { .. }
        ));
    }

    #[test]
    fn test_assert_text_contains() {
        let snapshot = snapshot_with(-1, "counter-display", Some("-1"));
        assert_eq!(
            evaluate_assert_text_contains("counter-display", "-1", &snapshot),
            AssertionResult::Passed
        );

        let AssertionResult::Failed { code, .. } =
            evaluate_assert_text_contains("counter-display", "7", &snapshot)
        else {
            panic!("expected failure");
        };
        assert_eq!(code, "text_mismatch");
    }
}
