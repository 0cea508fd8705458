// Engine options

use keycalc_core::{DEFAULT_ERROR_LABEL, DEFAULT_EXP_THRESHOLD};

/// Tunable behavior of a calculator session.
#[derive(Debug, Clone, PartialEq)]
pub struct CalcOptions {
    /// Rounding tolerance used to decide whether a result below 1 needs
    /// exponential notation.
    ///
    /// The result is scaled by `10^7`. If the scaled value is further than
    /// this from both its floor and its ceiling, the result is shown as
    /// `d.ddddddde-n`.
    pub exp_threshold: f64,

    /// Literal of the unit shown when evaluation fails.
    pub error_label: String,
}

impl Default for CalcOptions {
    fn default() -> Self {
        Self {
            exp_threshold: DEFAULT_EXP_THRESHOLD,
            error_label: DEFAULT_ERROR_LABEL.to_string(),
        }
    }
}

impl CalcOptions {
    #[must_use]
    pub fn with_exp_threshold(mut self, threshold: f64) -> Self {
        self.exp_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_error_label(mut self, label: impl Into<String>) -> Self {
        self.error_label = label.into();
        self
    }
}
