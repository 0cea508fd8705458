// Formula evaluator
//
// Pipeline: normalize notation, cut into tokens, compute roots and
// exponents, fold left to right, format under the digit budget, and turn
// the formatted string back into units for replay.

pub mod format;
pub mod tokens;

use keycalc_core::{Unit, UnitType};

use crate::options::CalcOptions;

pub use format::{format_result, result_units};
pub use tokens::{Operator, RawToken, Token, normalize, resolve_values, tokenize};

/// Reason an evaluation produced the error unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EvalFault {
    #[error("division by zero")]
    DivisionByZero,
    #[error("malformed operator sequence")]
    MalformedOperator,
    #[error("result is not a finite number")]
    Overflow,
}

/// Evaluate a formula and return its numeric value.
///
/// Operators apply strictly left to right with an implicit leading `+`.
/// Each value combines with the accumulator using the most recently seen
/// operator, so `3-5` (read as `3` and `-5`) is `-2`.
pub fn try_evaluate(formula: &str) -> Result<f64, EvalFault> {
    let normalized = normalize(formula);
    let raw = tokenize(&normalized)?;
    let values = resolve_values(&raw)?;

    let mut acc = 0.0;
    let mut op = Operator::Add;
    for token in values {
        match token {
            Token::Operator(next) => op = next,
            Token::Value(v) => acc = combine(acc, op, v)?,
        }
    }

    if acc.is_finite() {
        Ok(acc)
    } else {
        Err(EvalFault::Overflow)
    }
}

fn combine(acc: f64, op: Operator, v: f64) -> Result<f64, EvalFault> {
    Ok(match op {
        Operator::Add => acc + v,
        Operator::Sub => acc - v,
        Operator::Mul => acc * v,
        Operator::Div if v == 0.0 => return Err(EvalFault::DivisionByZero),
        Operator::Div => acc / v,
    })
}

/// Evaluate with default options. See [`evaluate_with`].
pub fn evaluate(formula: &str) -> Vec<Unit> {
    evaluate_with(formula, &CalcOptions::default())
}

/// Evaluate a formula into the units of its formatted result.
///
/// Never fails: any fault becomes a single [`UnitType::Error`] unit whose
/// value is the configured error label.
pub fn evaluate_with(formula: &str, options: &CalcOptions) -> Vec<Unit> {
    match try_evaluate(formula) {
        Ok(value) => {
            let formatted = format_result(value, options.exp_threshold);
            tracing::debug!(formula, value, result = %formatted, "evaluated");
            result_units(&formatted)
        }
        Err(fault) => {
            tracing::warn!(formula, %fault, "evaluation failed");
            vec![Unit::new(UnitType::Error, options.error_label.clone())]
        }
    }
}
