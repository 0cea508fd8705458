//! Shared types for the keycalc calculator input engine.
//!
//! - [`unit`] -- Unit types and the categories that group them
//! - [`set`] -- Bit-mask sets of unit types used by the transition table
//! - [`state`] -- Machine state names
//! - [`event`] -- Rendered formula units and incoming button events

pub mod event;
pub mod set;
pub mod state;
pub mod unit;

pub use event::{Event, Unit};
pub use set::UnitSet;
pub use state::StateName;
pub use unit::{Category, UnitType};

/// Maximum number of significant digits in the trailing number block, and
/// the precision results are formatted to.
pub const DIGIT_UPPER: usize = 8;

/// Default tolerance for deciding that a small result does not terminate
/// within [`DIGIT_UPPER`] digits.
pub const DEFAULT_EXP_THRESHOLD: f64 = 0.01;

/// Default literal of the error unit.
pub const DEFAULT_ERROR_LABEL: &str = "Error";

/// Error type for parsing names at API boundaries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown unit type: {0}")]
    UnknownUnitType(String),
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("unknown state: {0}")]
    UnknownState(String),
}
