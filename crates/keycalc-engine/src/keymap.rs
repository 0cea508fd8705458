// Keyboard keys to button events
//
// Key names follow the DOM `KeyboardEvent.key` values.

use keycalc_core::{Event, UnitType};

/// Map a key name to the button event it stands for.
///
/// The event carries the literal the button would show, so `*` enters `×`
/// and `r` enters `√`. Controllers carry an empty literal.
///
/// ```
/// use keycalc_core::{Event, UnitType};
/// use keycalc_engine::keymap::event_for_key;
/// assert_eq!(event_for_key("/"), Some(Event::new(UnitType::MulDiv, "÷")));
/// assert_eq!(event_for_key("Tab"), None);
/// ```
pub fn event_for_key(key: &str) -> Option<Event> {
    let (unit_type, value) = match key {
        "0" => (UnitType::Zero, key),
        "1" => (UnitType::One, key),
        "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9" => (UnitType::Number, key),
        "." => (UnitType::Dot, key),
        "%" => (UnitType::Percent, key),
        "r" | "R" => (UnitType::Root, "√"),
        ":" | "*" => (UnitType::MulDiv, "×"),
        "/" => (UnitType::MulDiv, "÷"),
        ";" | "+" => (UnitType::Plus, "+"),
        "-" => (UnitType::Minus, "-"),
        "c" | "C" => (UnitType::Clear, ""),
        "Backspace" => (UnitType::Delete, ""),
        "Enter" | "=" => (UnitType::Calc, ""),
        _ => return None,
    };
    Some(Event::new(unit_type, value))
}

/// A key press with the modifier state that decides whether it is ours.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyPress {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyPress {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_ctrl(mut self, ctrl: bool) -> Self {
        self.ctrl = ctrl;
        self
    }

    #[must_use]
    pub fn with_meta(mut self, meta: bool) -> Self {
        self.meta = meta;
        self
    }

    /// The button event for this press. Shortcut chords belong to the host.
    pub fn event(&self) -> Option<Event> {
        if self.ctrl || self.meta {
            return None;
        }
        event_for_key(&self.key)
    }
}

impl From<&str> for KeyPress {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}
