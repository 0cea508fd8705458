// Formula units and input events

use crate::unit::UnitType;

// ---------------------------------------------------------------------------
// Unit
// ---------------------------------------------------------------------------

/// One rendered token of the formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    /// The type of this unit.
    pub unit_type: UnitType,

    /// The literal shown for this unit (`"7"`, `"×"`, `"√"`, ...).
    pub value: String,

    /// Whether this unit is the root symbol or continues its radicand.
    pub in_root: bool,
}

impl Unit {
    /// Create a unit outside any radicand.
    pub fn new(unit_type: UnitType, value: impl Into<String>) -> Self {
        Self {
            unit_type,
            value: value.into(),
            in_root: false,
        }
    }

    /// The single `0` a fresh formula starts with.
    pub fn zero() -> Self {
        Self::new(UnitType::Zero, "0")
    }

    #[must_use]
    pub fn with_in_root(mut self, in_root: bool) -> Self {
        self.in_root = in_root;
        self
    }
}

/// Whether a unit of type `t` placed after `prev` sits under a root symbol.
///
/// True for the root symbol itself, and for digits and decimal points that
/// follow a unit which is already under the root.
pub fn continues_root(t: UnitType, prev: Option<&Unit>) -> bool {
    t == UnitType::Root
        || (prev.is_some_and(|u| u.in_root || u.unit_type == UnitType::Root)
            && matches!(
                t,
                UnitType::Number | UnitType::One | UnitType::Zero | UnitType::Dot
            ))
}

// ---------------------------------------------------------------------------
// Event
// ---------------------------------------------------------------------------

/// A typed button press.
///
/// `value` is `None` when the front end had no literal for the press. Such
/// events are ignored for every non-controller type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub unit_type: UnitType,
    pub value: Option<String>,
}

impl Event {
    pub fn new(unit_type: UnitType, value: impl Into<String>) -> Self {
        Self {
            unit_type,
            value: Some(value.into()),
        }
    }

    /// An event without a literal value (controllers).
    pub fn bare(unit_type: UnitType) -> Self {
        Self {
            unit_type,
            value: None,
        }
    }
}

impl From<Unit> for Event {
    fn from(unit: Unit) -> Self {
        Self {
            unit_type: unit.unit_type,
            value: Some(unit.value),
        }
    }
}
