// Per-state input rules
//
// Each state is described by three sets of unit types:
// - `accept`: appended to the formula
// - `overwrite`: replaces the last unit
// - `renew`: resets the formula before the type is judged again
//
// Several states are variations of a shared base. They are built here the
// same way: copy the base, then add or remove single types.

use keycalc_core::{StateName, UnitSet, UnitType};

/// Rules deciding how a state reacts to each unit type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputRules {
    pub accept: UnitSet,
    pub overwrite: UnitSet,
    pub renew: UnitSet,
}

/// What a state does with a given unit type, ignoring `renew`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Append,
    Overwrite,
    Ignore,
}

impl InputRules {
    const fn new(accept: &[UnitType], overwrite: &[UnitType], renew: &[UnitType]) -> Self {
        Self {
            accept: UnitSet::of(accept),
            overwrite: UnitSet::of(overwrite),
            renew: UnitSet::of(renew),
        }
    }

    const fn accepting(self, t: UnitType) -> Self {
        Self {
            accept: self.accept.with(t),
            ..self
        }
    }

    const fn refusing(self, t: UnitType) -> Self {
        Self {
            accept: self.accept.without(t),
            ..self
        }
    }

    const fn overwriting(self, t: UnitType) -> Self {
        Self {
            overwrite: self.overwrite.with(t),
            ..self
        }
    }

    const fn renewing(self, t: UnitType) -> Self {
        Self {
            renew: self.renew.with(t),
            ..self
        }
    }

    /// Overwrite wins over accept; the table never lists a type in both.
    pub const fn action(&self, t: UnitType) -> Action {
        if self.overwrite.contains(t) {
            Action::Overwrite
        } else if self.accept.contains(t) {
            Action::Append
        } else {
            Action::Ignore
        }
    }
}

use UnitType::{
    Calc, Dot, Error, Exp, Minus, MulDiv, Number, One, Percent, Plus, Root, Zero,
};

// ---------------------------------------------------------------------------
// State definitions
// ---------------------------------------------------------------------------

/// The initial `0`: digits and leading signs replace it, operators follow it.
const DEFAULT: InputRules = InputRules::new(
    &[Dot, MulDiv, Plus, Percent],
    &[Number, One, Root, Minus, Error],
    &[],
);

/// A non-leading `0` as in `1+0` may be calculated.
const ZERO: InputRules = DEFAULT.accepting(Calc);

/// A plain digit accepts anything.
const NUMBER: InputRules = InputRules::new(
    &[
        Zero, Number, One, Dot, Percent, Root, MulDiv, Plus, Minus, Exp, Calc,
    ],
    &[],
    &[Error],
);

/// `1√x` is not allowed, so a root replaces the `1`.
const ONE: InputRules = NUMBER.refusing(Root).overwriting(Root);

/// No second decimal point.
const DECIMAL: InputRules = NUMBER.refusing(Dot);

/// No nested root.
const IN_ROOT: InputRules = NUMBER.refusing(Root);

const OPERATOR_BASE: InputRules =
    InputRules::new(&[Number, One, Zero, Root], &[MulDiv, Plus], &[Error]);

/// A minus right after `×` or `÷` is a sign.
const MULDIV: InputRules = OPERATOR_BASE.accepting(Minus);

/// A minus right after `+` or `-` replaces it.
const ADDSUB: InputRules = OPERATOR_BASE.overwriting(Minus);

const NUMBERS_ONLY: InputRules = InputRules::new(&[Zero, Number, One], &[], &[Error]);

const DOT: InputRules = NUMBERS_ONLY;

const ROOT: InputRules = NUMBERS_ONLY;

/// Only something that can start a formula may replace an error.
const ERROR: InputRules = InputRules::new(&[], &[Zero, Number, One, Root, Minus], &[Error]);

const OPERATORS_ONLY: InputRules =
    InputRules::new(&[Percent, MulDiv, Plus, Minus, Calc], &[], &[Error]);

/// No consecutive `%`.
const PERCENT: InputRules = OPERATORS_ONLY.refusing(Percent);

/// A full number block may still take a decimal point or an exponent.
const DIGIT_UPPER: InputRules = OPERATORS_ONLY.accepting(Exp).accepting(Dot);

/// A result cannot be calculated again; a new number starts a new formula.
const ANSWER: InputRules = OPERATORS_ONLY
    .refusing(Calc)
    .renewing(Zero)
    .renewing(Number)
    .renewing(One)
    .renewing(Root);

/// Only the exponent sign may follow `e`.
const EXP: InputRules = InputRules::new(&[Plus, Minus], &[], &[Error]);

/// Look up the rules of a state.
pub const fn rules(state: StateName) -> InputRules {
    match state {
        StateName::Default => DEFAULT,
        StateName::Zero => ZERO,
        StateName::Number => NUMBER,
        StateName::One => ONE,
        StateName::MulDiv => MULDIV,
        StateName::AddSub => ADDSUB,
        StateName::Dot => DOT,
        StateName::Decimal => DECIMAL,
        StateName::Percent => PERCENT,
        StateName::Root => ROOT,
        StateName::InRoot => IN_ROOT,
        StateName::DigitUpper => DIGIT_UPPER,
        StateName::Exp => EXP,
        StateName::Answer => ANSWER,
        StateName::Error => ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_and_overwrite_are_disjoint() {
        for st in StateName::ALL {
            let r = rules(st);
            assert!(!r.accept.intersects(r.overwrite), "state {st}");
        }
    }

    #[test]
    fn controllers_other_than_calc_never_listed() {
        for st in StateName::ALL {
            let r = rules(st);
            for t in [UnitType::Clear, UnitType::Delete] {
                assert!(!r.accept.contains(t));
                assert!(!r.overwrite.contains(t));
                assert!(!r.renew.contains(t));
            }
        }
    }

    #[test]
    fn default_replaces_leading_zero() {
        let r = rules(StateName::Default);
        assert_eq!(r.action(UnitType::Number), Action::Overwrite);
        assert_eq!(r.action(UnitType::Minus), Action::Overwrite);
        assert_eq!(r.action(UnitType::Plus), Action::Append);
        assert_eq!(r.action(UnitType::Zero), Action::Ignore);
        assert_eq!(r.action(UnitType::Calc), Action::Ignore);
    }

    #[test]
    fn zero_state_allows_calc() {
        assert_eq!(rules(StateName::Zero).action(UnitType::Calc), Action::Append);
    }

    #[test]
    fn one_overwrites_with_root() {
        let r = rules(StateName::One);
        assert_eq!(r.action(UnitType::Root), Action::Overwrite);
        assert!(rules(StateName::Number).accept.contains(UnitType::Root));
    }

    #[test]
    fn decimal_and_in_root_refuse_their_symbol() {
        assert_eq!(rules(StateName::Decimal).action(UnitType::Dot), Action::Ignore);
        assert_eq!(rules(StateName::InRoot).action(UnitType::Root), Action::Ignore);
        assert_eq!(rules(StateName::InRoot).action(UnitType::Dot), Action::Append);
    }

    #[test]
    fn minus_after_operators() {
        assert_eq!(rules(StateName::MulDiv).action(UnitType::Minus), Action::Append);
        assert_eq!(rules(StateName::AddSub).action(UnitType::Minus), Action::Overwrite);
        assert_eq!(rules(StateName::AddSub).action(UnitType::Plus), Action::Overwrite);
    }

    #[test]
    fn digit_upper_blocks_digits() {
        let r = rules(StateName::DigitUpper);
        for t in [UnitType::Zero, UnitType::Number, UnitType::One, UnitType::Root] {
            assert_eq!(r.action(t), Action::Ignore);
        }
        assert_eq!(r.action(UnitType::Dot), Action::Append);
        assert_eq!(r.action(UnitType::Exp), Action::Append);
        assert_eq!(r.action(UnitType::Calc), Action::Append);
    }

    #[test]
    fn answer_renews_on_numbers() {
        let r = rules(StateName::Answer);
        assert!(r.renew.contains(UnitType::Number));
        assert!(r.renew.contains(UnitType::Root));
        assert!(r.renew.contains(UnitType::Error));
        assert_eq!(r.action(UnitType::Calc), Action::Ignore);
        assert_eq!(r.action(UnitType::Plus), Action::Append);
    }

    #[test]
    fn error_only_overwrites() {
        let r = rules(StateName::Error);
        assert!(r.accept.is_empty());
        assert_eq!(r.overwrite.len(), 5);
        assert_eq!(r.action(UnitType::Plus), Action::Ignore);
    }

    #[test]
    fn exp_takes_sign_only() {
        let r = rules(StateName::Exp);
        let accepted: Vec<UnitType> = r.accept.iter().collect();
        assert_eq!(accepted, vec![UnitType::Plus, UnitType::Minus]);
    }
}
