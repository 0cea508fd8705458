//! Input engine for a button calculator.
//!
//! A [`CalcSession`] takes typed button events one at a time, decides from
//! its current state whether each is appended, overwrites the last unit, or
//! resets the formula, and on `calc` evaluates the formula strictly left to
//! right and replaces it with the formatted result.
//!
//! - [`transition`] -- Per-state input rules and next-state resolution
//! - [`history`] -- State stack with undo on delete
//! - [`formula`] -- The rendered unit sequence and the [`Surface`] seam
//! - [`session`] -- Applies events to a formula
//! - [`evaluator`] -- Tokenizer, arithmetic and result formatting
//! - [`keymap`] -- Keyboard keys to button events (feature `keymap`)
//! - [`options`] -- Tunable thresholds and labels
//!
//! ```
//! use keycalc_core::{Event, StateName, UnitType};
//! use keycalc_engine::CalcSession;
//!
//! let mut calc = CalcSession::new();
//! calc.apply(&Event::new(UnitType::Number, "7"));
//! calc.apply(&Event::new(UnitType::MulDiv, "×"));
//! calc.apply(&Event::new(UnitType::Number, "6"));
//! calc.apply(&Event::bare(UnitType::Calc));
//! assert_eq!(calc.text(), "42");
//! assert_eq!(calc.state(), StateName::Answer);
//! ```

pub mod evaluator;
pub mod formula;
pub mod history;
#[cfg(feature = "keymap")]
pub mod keymap;
pub mod options;
pub mod session;
pub mod transition;

pub use evaluator::{EvalFault, evaluate, evaluate_with, try_evaluate};
pub use formula::{Formula, Surface};
pub use history::StateHistory;
pub use options::CalcOptions;
pub use session::{Applied, CalcSession};
pub use transition::{InputRules, rules};
