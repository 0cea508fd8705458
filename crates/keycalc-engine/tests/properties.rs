//! Property-based tests for the transition table, the session and the
//! result formatter.
//!
//! Key streams are drawn from the calculator's own key alphabet, so every
//! generated sequence is something a user could type.

#![cfg(feature = "keymap")]

use keycalc_core::{DEFAULT_EXP_THRESHOLD, StateName, Unit, UnitType};
use keycalc_engine::{Applied, CalcSession, evaluate, rules};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

const KEYS: &[&str] = &[
    "0", "1", "2", "3", "5", "9", ".", "%", "r", "*", "/", "+", "-", "c", "Backspace", "Enter",
];

fn key() -> impl Strategy<Value = &'static str> {
    proptest::sample::select(KEYS)
}

fn key_stream() -> impl Strategy<Value = Vec<&'static str>> {
    proptest::collection::vec(key(), 0..48)
}

fn state() -> impl Strategy<Value = StateName> {
    proptest::sample::select(StateName::ALL.to_vec())
}

fn unit_type() -> impl Strategy<Value = UnitType> {
    proptest::sample::select(UnitType::ALL.to_vec())
}

fn typed(keys: &[&str]) -> CalcSession {
    let mut session = CalcSession::new();
    for key in keys {
        session.press_key(*key);
    }
    session
}

fn text(units: &[Unit]) -> String {
    units.iter().map(|u| u.value.as_str()).collect()
}

/// Whether `shown`, read back, is close enough to the 10^-7 grid that the
/// exponent rule may pick the other notation for it.
fn near_notation_switch(shown: f64) -> bool {
    let abs = shown.abs();
    let scaled = abs * 1e7;
    let error = (scaled - scaled.floor()).min(scaled.ceil() - scaled);
    abs != 0.0 && abs <= 1.0 && error <= DEFAULT_EXP_THRESHOLD + 1e-6
}

// =============================================================================
// Transition table
// =============================================================================

proptest! {
    #[test]
    fn accept_and_overwrite_exclusive(st in state(), t in unit_type()) {
        let r = rules(st);
        prop_assert!(!(r.accept.contains(t) && r.overwrite.contains(t)));
    }
}

// =============================================================================
// Session invariants
// =============================================================================

proptest! {
    #[test]
    fn formula_never_empty(keys in key_stream()) {
        let mut session = CalcSession::new();
        for key in keys {
            session.press_key(key);
            prop_assert!(!session.units().is_empty());
        }
    }

    #[test]
    fn history_tracks_formula_length(keys in key_stream()) {
        let mut session = CalcSession::new();
        for key in keys {
            session.press_key(key);
            let len = session.units().len();
            let depth = session.history().len();
            prop_assert!(len <= depth && depth <= len + 1, "len {} depth {}", len, depth);
            prop_assert_eq!(session.history().last(), Some(&session.state()));
        }
    }

    #[test]
    fn radicand_is_contiguous(keys in key_stream()) {
        let session = typed(&keys);
        let units = session.units();
        for (i, unit) in units.iter().enumerate() {
            if unit.in_root && unit.unit_type != UnitType::Root {
                prop_assert!(i > 0 && units[i - 1].in_root, "unit {} of {:?}", i, session.text());
            }
        }
    }

    #[test]
    fn clear_is_idempotent(keys in key_stream()) {
        let mut session = typed(&keys);
        session.press_key("c");
        let once = (session.units().to_vec(), session.history().to_vec());
        session.press_key("c");
        prop_assert_eq!((session.units().to_vec(), session.history().to_vec()), once);
        prop_assert_eq!(session.state(), StateName::Default);
    }

    #[test]
    fn full_block_rejects_digits(keys in key_stream(), digit in proptest::sample::select(vec!["0", "1", "7"])) {
        let mut session = typed(&keys);
        if session.state() == StateName::DigitUpper {
            let before = session.units().to_vec();
            prop_assert_eq!(session.press_key(digit), Applied::Ignored);
            prop_assert_eq!(session.units(), before.as_slice());
        }
    }

    #[test]
    fn delete_to_one_unit_clears(keys in key_stream()) {
        let mut session = typed(&keys);
        while session.units().len() > 1 {
            session.press_key("Backspace");
        }
        session.press_key("Backspace");
        prop_assert_eq!(session.text(), "0");
        prop_assert_eq!(session.history(), &[StateName::Default]);
    }
}

// =============================================================================
// Formatting
// =============================================================================

proptest! {
    #[test]
    fn formatted_result_is_stable(
        a in 1u32..100_000,
        b in 1u32..100_000,
        op in proptest::sample::select(vec!["+", "-", "×", "÷"]),
    ) {
        let first = text(&evaluate(&format!("{a}{op}{b}")));
        let second = text(&evaluate(&first));
        let shown: f64 = first.parse().unwrap();
        prop_assert_eq!(second.parse::<f64>().unwrap(), shown, "from {}{}{}", a, op, b);
        if !near_notation_switch(shown) {
            prop_assert_eq!(first, second, "from {}{}{}", a, op, b);
        }
    }

    #[test]
    fn result_fits_digit_budget(a in 1u32..100_000, b in 1u32..100_000) {
        let result = text(&evaluate(&format!("{a}÷{b}")));
        let mantissa = result.split('e').next().unwrap_or_default();
        let digits = mantissa.chars().filter(char::is_ascii_digit).count();
        let leading_zeros = mantissa
            .chars()
            .take_while(|c| *c == '0' || *c == '.')
            .filter(|c| *c == '0')
            .count();
        prop_assert!(digits - leading_zeros <= 8, "{}", result);
    }
}
