// Formula normalization and tokenization

use super::EvalFault;

/// Binary operator of the flat left-to-right evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '×' => Some(Operator::Mul),
            '÷' => Some(Operator::Div),
            _ => None,
        }
    }
}

/// Token as cut from the normalized formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawToken<'a> {
    /// `e` followed by a sign and digits, e.g. `e-7`.
    Exponent(&'a str),
    /// Optionally signed run of digits, points and root symbols.
    Operand(&'a str),
    Operator(Operator),
}

/// Token after roots and exponents have been computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Value(f64),
    Operator(Operator),
}

const ROOT: char = '√';

fn is_operand_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == ROOT
}

/// Rewrite calculator notation into plain multiplications.
///
/// - `e` becomes `×e`, so an exponent multiplies the mantissa
/// - a digit directly before `√` gets an explicit `×`
/// - `%` becomes `×0.01`
pub fn normalize(formula: &str) -> String {
    let mut out = String::with_capacity(formula.len() + 8);
    let mut prev: Option<char> = None;
    for c in formula.chars() {
        match c {
            'e' => out.push_str("×e"),
            ROOT if prev.is_some_and(|p| p.is_ascii_digit()) => {
                out.push('×');
                out.push(ROOT);
            }
            '%' => out.push_str("×0.01"),
            _ => out.push(c),
        }
        prev = Some(c);
    }
    out
}

/// Cut a normalized formula into tokens, left to right.
///
/// At each position the longest of these is taken, in order of preference:
/// an exponent run, a signed operand run, a single operator. A character
/// that starts none of them is a [`EvalFault::MalformedOperator`].
pub fn tokenize(formula: &str) -> Result<Vec<RawToken<'_>>, EvalFault> {
    let mut tokens = Vec::new();
    let mut rest = formula;

    while let Some(c) = rest.chars().next() {
        let len = exponent_len(rest)
            .or_else(|| operand_len(rest))
            .unwrap_or(0);
        if len > 0 {
            let (head, tail) = rest.split_at(len);
            tokens.push(if c == 'e' {
                RawToken::Exponent(head)
            } else {
                RawToken::Operand(head)
            });
            rest = tail;
            continue;
        }

        let op = Operator::from_char(c).ok_or(EvalFault::MalformedOperator)?;
        tokens.push(RawToken::Operator(op));
        rest = &rest[c.len_utf8()..];
    }

    Ok(tokens)
}

/// Byte length of `e[+-]\d+` at the start of `s`.
fn exponent_len(s: &str) -> Option<usize> {
    let after_e = s.strip_prefix('e')?;
    let digits = after_e
        .strip_prefix('+')
        .or_else(|| after_e.strip_prefix('-'))?;
    let n = digits.chars().take_while(char::is_ascii_digit).count();
    (n > 0).then_some(2 + n)
}

/// Byte length of `-?[0-9.√]+` at the start of `s`.
fn operand_len(s: &str) -> Option<usize> {
    let sign = usize::from(s.starts_with('-'));
    let body: usize = s[sign..]
        .chars()
        .take_while(|&c| is_operand_char(c))
        .map(char::len_utf8)
        .sum();
    (body > 0).then_some(sign + body)
}

/// Compute roots and exponents, leaving a flat list of values and operators.
pub fn resolve_values(tokens: &[RawToken<'_>]) -> Result<Vec<Token>, EvalFault> {
    tokens
        .iter()
        .map(|token| match *token {
            RawToken::Operator(op) => Ok(Token::Operator(op)),
            RawToken::Exponent(run) => power_of_ten(run).map(Token::Value),
            RawToken::Operand(run) => operand_value(run).map(Token::Value),
        })
        .collect()
}

/// `e+n` → `10^n`, `e-n` → `10^-n`.
fn power_of_ten(run: &str) -> Result<f64, EvalFault> {
    // "1e-7" parses to the closest double, which repeated multiplication
    // would not guarantee.
    format!("1{run}")
        .parse::<f64>()
        .map_err(|_| EvalFault::MalformedOperator)
}

fn operand_value(run: &str) -> Result<f64, EvalFault> {
    let (negative, body) = match run.strip_prefix('-') {
        Some(body) => (true, body),
        None => (false, run),
    };
    let magnitude = match body.strip_prefix(ROOT) {
        Some(radicand) => parse_number(radicand)?.sqrt(),
        None => parse_number(body)?,
    };
    Ok(if negative { -magnitude } else { magnitude })
}

fn parse_number(s: &str) -> Result<f64, EvalFault> {
    if s.contains(ROOT) {
        return Err(EvalFault::MalformedOperator);
    }
    s.parse::<f64>().map_err(|_| EvalFault::MalformedOperator)
}
