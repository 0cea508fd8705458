//! Golden scenarios: key sequences and the formula they must leave behind.
//!
//! Each entry in `tests/golden/scenarios.json` lists DOM key names, the
//! expected formula text, the expected state name, and the expected log line.
//!
//! Run: cargo test -p keycalc-engine --test scenarios

#![cfg(feature = "keymap")]

use std::path::PathBuf;

use keycalc_core::StateName;
use keycalc_engine::CalcSession;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Scenario {
    name: String,
    keys: Vec<String>,
    text: String,
    state: String,
    log: String,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_golden(filename: &str) -> Vec<Scenario> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/golden")
        .join(filename);
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse golden file {}: {}", path.display(), e))
}

fn run(scenario: &Scenario) -> CalcSession {
    let mut session = CalcSession::new();
    for key in &scenario.keys {
        session.press_key(key.as_str());
    }
    session
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn golden_scenarios() {
    let scenarios = load_golden("scenarios.json");
    assert!(!scenarios.is_empty());

    let mut failures = Vec::new();
    for scenario in &scenarios {
        let session = run(scenario);
        let expected_state: StateName = scenario
            .state
            .parse()
            .unwrap_or_else(|e| panic!("{}: {}", scenario.name, e));

        if session.text() != scenario.text
            || session.state() != expected_state
            || session.log_text() != scenario.log
        {
            failures.push(format!(
                "{}: got text={:?} state={} log={:?}, expected text={:?} state={} log={:?}",
                scenario.name,
                session.text(),
                session.state(),
                session.log_text(),
                scenario.text,
                expected_state,
                scenario.log,
            ));
        }
    }

    assert!(
        failures.is_empty(),
        "{} of {} scenarios failed:\n{}",
        failures.len(),
        scenarios.len(),
        failures.join("\n")
    );
}

#[test]
fn scenario_names_are_unique() {
    let scenarios = load_golden("scenarios.json");
    let mut names: Vec<&str> = scenarios.iter().map(|s| s.name.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), scenarios.len());
}

#[test]
fn every_result_is_replayable() {
    // The units of a calculated result must survive being typed again.
    for scenario in load_golden("scenarios.json") {
        let session = run(&scenario);
        if session.state() != StateName::Answer {
            continue;
        }
        let retyped = keycalc_engine::evaluate(&session.text());
        let text: String = retyped.iter().map(|u| u.value.as_str()).collect();
        assert_eq!(text, session.text(), "scenario {}", scenario.name);
    }
}
