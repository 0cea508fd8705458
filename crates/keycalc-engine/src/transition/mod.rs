// Finite-state model of legal input
//
// `table` holds the per-state rules, `resolver` picks the state that
// follows a committed edit.

pub mod resolver;
pub mod table;

pub use resolver::{Resolution, last_number_length, next_state, resolve};
pub use table::{Action, InputRules, rules};
