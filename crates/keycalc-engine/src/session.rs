// CalcSession: applies button events to a formula
//
// The session owns the formula surface, the state history, the options and
// the latest log line. Every event is processed to completion before the
// next one; `calc` replays the evaluator's result through the ordinary
// input path, which never reaches `calc` again.

use keycalc_core::event::continues_root;
use keycalc_core::{Event, StateName, Unit, UnitType};

use crate::evaluator;
use crate::formula::{Formula, Surface};
use crate::history::StateHistory;
use crate::options::CalcOptions;
use crate::transition::{Action, next_state, rules};

/// What an event did to the formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// A unit was added at the end.
    Appended,
    /// The last unit was replaced.
    Overwritten,
    /// The last unit was deleted.
    Removed,
    /// The formula was reset to `0`.
    Reset,
    /// The formula was evaluated and replaced by its result.
    Calculated,
    /// The event is not legal in the current state.
    Ignored,
}

impl Applied {
    pub const fn as_str(self) -> &'static str {
        match self {
            Applied::Appended => "appended",
            Applied::Overwritten => "overwritten",
            Applied::Removed => "removed",
            Applied::Reset => "reset",
            Applied::Calculated => "calculated",
            Applied::Ignored => "ignored",
        }
    }
}

/// Operator characters that make a formula worth calculating.
const CALC_OPERATORS: [char; 6] = ['+', '-', '×', '÷', '√', '%'];

/// Whether `formula` contains anything to calculate, ignoring a leading sign.
pub fn has_operator(formula: &str) -> bool {
    let body = formula.strip_prefix('-').unwrap_or(formula);
    body.contains(CALC_OPERATORS)
}

/// A calculator editing session.
#[derive(Debug, Clone)]
pub struct CalcSession<S: Surface = Formula> {
    surface: S,
    history: StateHistory,
    options: CalcOptions,
    log: Vec<Unit>,
}

impl CalcSession<Formula> {
    /// Create a session with an in-memory formula and default options.
    pub fn new() -> Self {
        Self::with_surface(Formula::new(), CalcOptions::default())
    }

    pub fn with_options(options: CalcOptions) -> Self {
        Self::with_surface(Formula::new(), options)
    }
}

impl Default for CalcSession<Formula> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Surface> CalcSession<S> {
    /// Create a session that renders into `surface`. The surface is reset.
    pub fn with_surface(surface: S, options: CalcOptions) -> Self {
        let mut session = Self {
            surface,
            history: StateHistory::new(),
            options,
            log: Vec::new(),
        };
        session.reset();
        session
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The current machine state.
    pub fn state(&self) -> StateName {
        self.history.current()
    }

    pub fn history(&self) -> &[StateName] {
        self.history.entries()
    }

    pub fn units(&self) -> &[Unit] {
        self.surface.units()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The formula as one string.
    pub fn text(&self) -> String {
        self.surface.text()
    }

    /// Units of the last calculated formula, ending in an `=` unit.
    /// Empty until the first successful calculation.
    pub fn log(&self) -> &[Unit] {
        &self.log
    }

    pub fn log_text(&self) -> String {
        self.log.iter().map(|u| u.value.as_str()).collect()
    }

    pub fn options(&self) -> &CalcOptions {
        &self.options
    }

    // =========================================================================
    // Options
    // =========================================================================

    pub fn set_exp_threshold(&mut self, threshold: f64) {
        self.options.exp_threshold = threshold;
    }

    pub fn set_error_label(&mut self, label: impl Into<String>) {
        self.options.error_label = label.into();
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Apply one event.
    pub fn apply(&mut self, event: &Event) -> Applied {
        match event.unit_type {
            UnitType::Calc => self.calculate(),
            UnitType::Clear => {
                self.reset();
                Applied::Reset
            }
            UnitType::Delete => self.delete(),
            _ => self.input(event),
        }
    }

    /// Apply a press of a button carrying `value`.
    ///
    /// A `"00"` button enters two zeros. A press without a value, or with an
    /// empty one, only has an effect for controllers.
    pub fn press_button(&mut self, unit_type: UnitType, value: Option<&str>) -> Applied {
        match value {
            Some("00") => {
                let zero = Event::new(unit_type, "0");
                let first = self.apply(&zero);
                let second = self.apply(&zero);
                if second == Applied::Ignored { first } else { second }
            }
            Some(v) => self.apply(&Event::new(unit_type, v)),
            None => self.apply(&Event::bare(unit_type)),
        }
    }

    /// Apply a keyboard key. Unmapped keys and modifier chords are ignored.
    #[cfg(feature = "keymap")]
    pub fn press_key(&mut self, press: impl Into<crate::keymap::KeyPress>) -> Applied {
        match press.into().event() {
            Some(event) => self.apply(&event),
            None => Applied::Ignored,
        }
    }

    /// Reset the formula to a single `0` and the state to `default`.
    pub fn reset(&mut self) {
        self.surface.reset();
        self.history.clear();
    }

    fn delete(&mut self) -> Applied {
        if self.surface.len() <= 1 {
            self.reset();
            return Applied::Reset;
        }
        self.surface.remove_last();
        self.history.back();
        tracing::debug!(state = %self.state(), "deleted last unit");
        Applied::Removed
    }

    /// Append or overwrite according to the current state's rules.
    fn input(&mut self, event: &Event) -> Applied {
        let Some(value) = event.value.as_deref().filter(|v| !v.is_empty()) else {
            tracing::trace!(unit = %event.unit_type, "event without value ignored");
            return Applied::Ignored;
        };
        let t = event.unit_type;

        let renewed = rules(self.state()).renew.contains(t);
        if renewed {
            self.reset();
        }

        let applied = match rules(self.state()).action(t) {
            Action::Overwrite => {
                let in_root = continues_root(t, self.surface.last());
                self.surface.replace_last(Unit::new(t, value).with_in_root(in_root));
                self.history.back();
                Applied::Overwritten
            }
            Action::Append => {
                let in_root = continues_root(t, self.surface.last());
                self.surface.append(Unit::new(t, value).with_in_root(in_root));
                Applied::Appended
            }
            Action::Ignore => {
                tracing::trace!(state = %self.state(), unit = %t, "unit not accepted");
                return if renewed {
                    Applied::Reset
                } else {
                    Applied::Ignored
                };
            }
        };

        let from = self.state();
        let next = next_state(&self.surface.text(), from, t);
        tracing::debug!(%from, to = %next, unit = %t, "transition");
        self.history.update(next);
        applied
    }

    /// Evaluate the formula and replace it with the result.
    fn calculate(&mut self) -> Applied {
        let formula = self.surface.text();
        if !rules(self.state()).accept.contains(UnitType::Calc) || !has_operator(&formula) {
            tracing::trace!(state = %self.state(), formula = %formula, "nothing to calculate");
            return Applied::Ignored;
        }

        let result = evaluator::evaluate_with(&formula, &self.options);

        self.log = self.surface.units().to_vec();
        self.log.push(Unit::new(UnitType::Calc, "="));
        self.reset();

        // Result units are digits, signs, points, `e` or the error unit, so
        // the replay stays on the plain input path.
        for unit in result {
            self.input(&Event::from(unit));
        }

        if self.state() != StateName::Error {
            self.history.discard_latest();
            self.history.update(StateName::Answer);
        }
        tracing::debug!(formula = %formula, result = %self.text(), state = %self.state(), "calculated");
        Applied::Calculated
    }
}
