// Machine state names

use std::fmt;
use std::str::FromStr;

use crate::ParseError;
use crate::unit::UnitType;

/// Named mode of the formula that decides which unit types are legal next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StateName {
    /// Fresh formula showing a lone `0`.
    #[default]
    Default,
    /// A non-leading `0`, e.g. after `1+`.
    Zero,
    Number,
    /// The digit `1` was just typed.
    One,
    MulDiv,
    AddSub,
    /// Right after a decimal point.
    Dot,
    /// Inside the fractional part of a number.
    Decimal,
    Percent,
    /// Right after a root symbol.
    Root,
    /// Inside a radicand.
    InRoot,
    /// The trailing number block reached the digit cap.
    DigitUpper,
    /// Right after the exponent marker.
    Exp,
    /// Showing a calculated result.
    Answer,
    Error,
}

impl StateName {
    pub const ALL: [StateName; 15] = [
        StateName::Default,
        StateName::Zero,
        StateName::Number,
        StateName::One,
        StateName::MulDiv,
        StateName::AddSub,
        StateName::Dot,
        StateName::Decimal,
        StateName::Percent,
        StateName::Root,
        StateName::InRoot,
        StateName::DigitUpper,
        StateName::Exp,
        StateName::Answer,
        StateName::Error,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            StateName::Default => "default",
            StateName::Zero => "zero",
            StateName::Number => "number",
            StateName::One => "one",
            StateName::MulDiv => "muldiv",
            StateName::AddSub => "addsub",
            StateName::Dot => "dot",
            StateName::Decimal => "decimal",
            StateName::Percent => "percent",
            StateName::Root => "root",
            StateName::InRoot => "in_root",
            StateName::DigitUpper => "digit_upper",
            StateName::Exp => "exp",
            StateName::Answer => "answer",
            StateName::Error => "error",
        }
    }

    /// The state named after a unit type, if one exists.
    ///
    /// Used when the resolver says the next state follows directly from the
    /// input: typing `√` moves into `root`, typing `%` into `percent`.
    pub const fn named_after(t: UnitType) -> Option<StateName> {
        match t {
            UnitType::Zero => Some(StateName::Zero),
            UnitType::Number => Some(StateName::Number),
            UnitType::One => Some(StateName::One),
            UnitType::Dot => Some(StateName::Dot),
            UnitType::Percent => Some(StateName::Percent),
            UnitType::Root => Some(StateName::Root),
            UnitType::MulDiv => Some(StateName::MulDiv),
            UnitType::Exp => Some(StateName::Exp),
            UnitType::Error => Some(StateName::Error),
            UnitType::Plus
            | UnitType::Minus
            | UnitType::Clear
            | UnitType::Delete
            | UnitType::Calc => None,
        }
    }
}

impl fmt::Display for StateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StateName {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StateName::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| ParseError::UnknownState(s.to_string()))
    }
}
