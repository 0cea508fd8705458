// WASM bindings for the keycalc calculator engine.
//
// Provides a `WasmCalculator` class exported via wasm-bindgen that wraps a
// `CalcSession`. Units, rules and the log line are serialized to JavaScript
// values using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const calc = new WasmCalculator();
//   calc.press("number", "7");        // => "overwritten"
//   calc.press("muldiv", "×");        // => "appended"
//   calc.pressKey("6");               // => "appended"
//   calc.press("calc");               // => "calculated"
//   calc.formula();                   // => "42"
//   calc.state();                     // => "answer"
//   calc.log();                       // => "7×6="
//   calc.units();                     // => [{ unitType: "number", value: "4", inRoot: false }, ...]
//   window.addEventListener("keydown", (e) => {
//     if (calc.handleKeyEvent(e)) e.preventDefault();
//   });

use serde::Serialize;
use wasm_bindgen::prelude::*;

use keycalc_core::{ParseError, StateName, Unit, UnitSet, UnitType};
use keycalc_engine::keymap::KeyPress;
use keycalc_engine::{CalcOptions, CalcSession, rules};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of a formula unit.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsUnit {
    unit_type: &'static str,
    value: String,
    in_root: bool,
}

/// Serializable representation of one state's input rules.
#[derive(Debug, PartialEq, Serialize)]
struct JsRules {
    accept: Vec<&'static str>,
    overwrite: Vec<&'static str>,
    renew: Vec<&'static str>,
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn js_unit(unit: &Unit) -> JsUnit {
    JsUnit {
        unit_type: unit.unit_type.as_str(),
        value: unit.value.clone(),
        in_root: unit.in_root,
    }
}

fn type_names(set: UnitSet) -> Vec<&'static str> {
    set.iter().map(UnitType::as_str).collect()
}

fn js_rules(state: StateName) -> JsRules {
    let r = rules(state);
    JsRules {
        accept: type_names(r.accept),
        overwrite: type_names(r.overwrite),
        renew: type_names(r.renew),
    }
}

fn parse_error_to_js(e: ParseError) -> JsError {
    JsError::new(&e.to_string())
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

/// Read `key`, `ctrlKey` and `metaKey` from a DOM `KeyboardEvent`.
fn key_press(event: &JsValue) -> Result<KeyPress, JsError> {
    let get = |name: &str| {
        js_sys::Reflect::get(event, &JsValue::from_str(name))
            .map_err(|e| JsError::new(&format!("{e:?}")))
    };
    let key = get("key")?
        .as_string()
        .ok_or_else(|| JsError::new("event has no string `key`"))?;
    Ok(KeyPress::new(key)
        .with_ctrl(get("ctrlKey")?.is_truthy())
        .with_meta(get("metaKey")?.is_truthy()))
}

// ============================================================================
// WasmCalculator
// ============================================================================

/// Button calculator for WebAssembly.
///
/// Each instance is an independent session: a formula, a state history and
/// the last log line.
#[wasm_bindgen]
pub struct WasmCalculator {
    session: CalcSession,
}

#[wasm_bindgen]
impl WasmCalculator {
    /// Create a calculator showing `0`.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmCalculator {
        WasmCalculator {
            session: CalcSession::new(),
        }
    }

    /// Apply a button press.
    ///
    /// - `unit_type`: unit type name (`"number"`, `"muldiv"`, `"calc"`, ...)
    /// - `value`: the button's literal; `"00"` enters two zeros
    ///
    /// Returns what happened: `"appended"`, `"overwritten"`, `"removed"`,
    /// `"reset"`, `"calculated"` or `"ignored"`.
    pub fn press(&mut self, unit_type: &str, value: Option<String>) -> Result<String, JsError> {
        let unit_type: UnitType = unit_type.parse().map_err(parse_error_to_js)?;
        Ok(self
            .session
            .press_button(unit_type, value.as_deref())
            .as_str()
            .to_string())
    }

    /// Apply a keyboard key by its DOM `key` name.
    #[wasm_bindgen(js_name = "pressKey")]
    pub fn press_key(&mut self, key: &str) -> String {
        self.session.press_key(key).as_str().to_string()
    }

    /// Apply a DOM `KeyboardEvent`.
    ///
    /// Returns true when the key maps to a button, so the caller can
    /// suppress the browser default. Chords with Ctrl or Meta are left alone.
    #[wasm_bindgen(js_name = "handleKeyEvent")]
    pub fn handle_key_event(&mut self, event: &JsValue) -> Result<bool, JsError> {
        let press = key_press(event)?;
        if press.event().is_none() {
            return Ok(false);
        }
        self.session.press_key(press);
        Ok(true)
    }

    /// Reset to `0`.
    pub fn clear(&mut self) {
        self.session.reset();
    }

    /// The formula as one string.
    pub fn formula(&self) -> String {
        self.session.text()
    }

    /// The current state name.
    pub fn state(&self) -> String {
        self.session.state().to_string()
    }

    /// State names on the history stack, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.session
            .history()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Formula units as `{ unitType, value, inRoot }` objects.
    pub fn units(&self) -> Result<JsValue, JsError> {
        let units: Vec<JsUnit> = self.session.units().iter().map(js_unit).collect();
        to_js(&units)
    }

    /// The last calculated formula followed by `=`, or `""`.
    pub fn log(&self) -> String {
        self.session.log_text()
    }

    /// Units of the last log line.
    #[wasm_bindgen(js_name = "logUnits")]
    pub fn log_units(&self) -> Result<JsValue, JsError> {
        let units: Vec<JsUnit> = self.session.log().iter().map(js_unit).collect();
        to_js(&units)
    }

    /// Rules of a state as `{ accept, overwrite, renew }` arrays of type names.
    pub fn rules(state: &str) -> Result<JsValue, JsError> {
        let state: StateName = state.parse().map_err(parse_error_to_js)?;
        to_js(&js_rules(state))
    }

    /// Evaluate a formula string with default options.
    pub fn evaluate(formula: &str) -> String {
        keycalc_engine::evaluate(formula)
            .into_iter()
            .map(|u| u.value)
            .collect()
    }

    /// Get the library version string.
    #[wasm_bindgen(js_name = "getVersion")]
    pub fn get_version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Set the rounding tolerance for switching small results to exponential
    /// notation.
    #[wasm_bindgen(js_name = "setExpThreshold")]
    pub fn set_exp_threshold(&mut self, value: f64) {
        self.session.set_exp_threshold(value);
    }

    /// Set the literal shown when a calculation fails.
    #[wasm_bindgen(js_name = "setErrorLabel")]
    pub fn set_error_label(&mut self, value: &str) {
        self.session.set_error_label(value);
    }

    /// Restore default options.
    #[wasm_bindgen(js_name = "resetOptions")]
    pub fn reset_options(&mut self) {
        let defaults = CalcOptions::default();
        self.session.set_exp_threshold(defaults.exp_threshold);
        self.session.set_error_label(defaults.error_label);
    }
}

impl Default for WasmCalculator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_dto() {
        let unit = Unit::new(UnitType::Root, "√").with_in_root(true);
        assert_eq!(
            js_unit(&unit),
            JsUnit {
                unit_type: "root",
                value: "√".to_string(),
                in_root: true,
            }
        );
    }

    #[test]
    fn rules_dto() {
        let r = js_rules(StateName::Exp);
        assert_eq!(r.accept, vec!["plus", "minus"]);
        assert!(r.overwrite.is_empty());
        assert_eq!(r.renew, vec!["error"]);
    }

    #[test]
    fn session_through_bindings() {
        let mut calc = WasmCalculator::new();
        assert_eq!(calc.press_key("7"), "overwritten");
        assert_eq!(calc.press_key("*"), "appended");
        assert_eq!(calc.press_key("6"), "appended");
        assert_eq!(calc.press_key("Enter"), "calculated");
        assert_eq!(calc.formula(), "42");
        assert_eq!(calc.state(), "answer");
        assert_eq!(calc.log(), "7×6=");
    }

    #[test]
    fn options_through_bindings() {
        let mut calc = WasmCalculator::new();
        calc.set_error_label("E");
        for key in ["1", "/", "0", "="] {
            calc.press_key(key);
        }
        assert_eq!(calc.formula(), "E");
        assert_eq!(calc.state(), "error");
        calc.clear();
        assert_eq!(calc.formula(), "0");
        assert_eq!(calc.history(), vec!["default".to_string()]);
    }

    #[test]
    fn static_evaluate() {
        assert_eq!(WasmCalculator::evaluate("1÷3"), "3.3333333e-1");
    }
}
