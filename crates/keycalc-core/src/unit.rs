// Unit types and their categories

use std::fmt;
use std::str::FromStr;

use crate::ParseError;

/// Kind of a single formula unit or button press.
///
/// `Zero` and `One` are split out from `Number` only because some states
/// treat them differently: a leading zero may be calculated immediately,
/// and `1` cannot itself be rooted as `1√x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitType {
    /// The digit `0`.
    Zero,
    /// Any digit from `2` to `9`. Replayed results use it for `1` too.
    Number,
    /// The digit `1` typed live.
    One,
    /// Decimal point.
    Dot,
    /// Percent sign, evaluated as `×0.01`.
    Percent,
    /// Square root symbol.
    Root,
    /// Multiply or divide (`×`, `÷`).
    MulDiv,
    Plus,
    Minus,
    /// Exponent marker `e`.
    Exp,
    Clear,
    Delete,
    Calc,
    /// Evaluation fault placeholder.
    Error,
}

impl UnitType {
    /// Every unit type, in declaration order.
    pub const ALL: [UnitType; 14] = [
        UnitType::Zero,
        UnitType::Number,
        UnitType::One,
        UnitType::Dot,
        UnitType::Percent,
        UnitType::Root,
        UnitType::MulDiv,
        UnitType::Plus,
        UnitType::Minus,
        UnitType::Exp,
        UnitType::Clear,
        UnitType::Delete,
        UnitType::Calc,
        UnitType::Error,
    ];

    /// Stable lowercase name, shared with the front end's `data-type` attribute.
    pub const fn as_str(self) -> &'static str {
        match self {
            UnitType::Zero => "zero",
            UnitType::Number => "number",
            UnitType::One => "one",
            UnitType::Dot => "dot",
            UnitType::Percent => "percent",
            UnitType::Root => "root",
            UnitType::MulDiv => "muldiv",
            UnitType::Plus => "plus",
            UnitType::Minus => "minus",
            UnitType::Exp => "exp",
            UnitType::Clear => "clear",
            UnitType::Delete => "delete",
            UnitType::Calc => "calc",
            UnitType::Error => "error",
        }
    }

    /// The category this type belongs to.
    pub const fn category(self) -> Category {
        match self {
            UnitType::Zero => Category::Zero,
            UnitType::Number | UnitType::One => Category::Natural,
            UnitType::Dot
            | UnitType::Percent
            | UnitType::Root
            | UnitType::MulDiv
            | UnitType::Exp
            | UnitType::Error => Category::StateChanger,
            UnitType::Plus | UnitType::Minus => Category::PlusMinus,
            UnitType::Clear | UnitType::Delete | UnitType::Calc => Category::Controller,
        }
    }

    /// Bit used by [`UnitSet`](crate::UnitSet).
    #[inline]
    pub(crate) const fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UnitType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseError::UnknownUnitType(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// Coarse grouping of unit types that share transition behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Zero,
    Natural,
    StateChanger,
    PlusMinus,
    Controller,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Zero,
        Category::Natural,
        Category::StateChanger,
        Category::PlusMinus,
        Category::Controller,
    ];

    /// Members of this category.
    pub const fn members(self) -> &'static [UnitType] {
        match self {
            Category::Zero => &[UnitType::Zero],
            Category::Natural => &[UnitType::Number, UnitType::One],
            Category::StateChanger => &[
                UnitType::Dot,
                UnitType::Percent,
                UnitType::Root,
                UnitType::MulDiv,
                UnitType::Exp,
                UnitType::Error,
            ],
            Category::PlusMinus => &[UnitType::Plus, UnitType::Minus],
            Category::Controller => &[UnitType::Clear, UnitType::Delete, UnitType::Calc],
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Zero => "zero",
            Category::Natural => "natural",
            Category::StateChanger => "state_changer",
            Category::PlusMinus => "plus_minus",
            Category::Controller => "controller",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_has_exactly_one_category() {
        for t in UnitType::ALL {
            let owners: Vec<Category> = Category::ALL
                .into_iter()
                .filter(|c| c.members().contains(&t))
                .collect();
            assert_eq!(owners, vec![t.category()], "type {t}");
        }
    }

    #[test]
    fn members_cover_all_types() {
        let total: usize = Category::ALL.iter().map(|c| c.members().len()).sum();
        assert_eq!(total, UnitType::ALL.len());
    }

    #[test]
    fn natural_includes_one() {
        assert_eq!(UnitType::One.category(), Category::Natural);
        assert_eq!(UnitType::Zero.category(), Category::Zero);
        assert_eq!(UnitType::Error.category(), Category::StateChanger);
    }

    #[test]
    fn names_roundtrip() {
        for t in UnitType::ALL {
            assert_eq!(t.as_str().parse::<UnitType>().unwrap(), t);
        }
        for c in Category::ALL {
            assert_eq!(c.to_string().parse::<Category>().unwrap(), c);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert!(matches!(
            "sqrt".parse::<UnitType>(),
            Err(ParseError::UnknownUnitType(name)) if name == "sqrt"
        ));
        assert!("operators".parse::<Category>().is_err());
    }

    #[test]
    fn bits_are_distinct() {
        let mut seen = 0u16;
        for t in UnitType::ALL {
            assert_eq!(seen & t.bit(), 0);
            seen |= t.bit();
        }
    }
}
