// Next-state resolution
//
// The next state depends on the length of the trailing number block, the
// current state, and the category of the unit that was just entered.

use keycalc_core::{Category, DIGIT_UPPER, StateName, UnitType};

/// Outcome of a category lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Move to this state.
    State(StateName),
    /// Move to the state named after the unit type that was entered.
    FromInput,
}

/// Count the significant characters of the last number block in `formula`.
///
/// A number block is a maximal run of ASCII digits and decimal points.
/// Whitespace is ignored and the decimal point is not counted.
///
/// ```
/// use keycalc_engine::transition::last_number_length;
/// assert_eq!(last_number_length("1+√144+1.2345"), 5);
/// assert_eq!(last_number_length("12×"), 2);
/// assert_eq!(last_number_length("√"), 0);
/// ```
pub fn last_number_length(formula: &str) -> usize {
    let compact: String = formula.chars().filter(|c| !c.is_whitespace()).collect();
    compact
        .split(|c: char| !(c.is_ascii_digit() || c == '.'))
        .rfind(|run| !run.is_empty())
        .map_or(0, |run| run.replacen('.', "", 1).chars().count())
}

/// Resolve the next state for a unit of `category` entered in `current`.
///
/// Returns `None` when nothing is mapped; callers fall back to
/// [`StateName::Default`]. Controllers are never resolved here.
pub fn resolve(last_len: usize, current: StateName, category: Category) -> Option<Resolution> {
    if last_len >= DIGIT_UPPER
        && matches!(
            current,
            StateName::Number | StateName::One | StateName::Decimal | StateName::InRoot
        )
    {
        return Some(Resolution::State(StateName::DigitUpper));
    }

    always(category)
        .or_else(|| by_current(category, current).map(Resolution::State))
        .or_else(|| others(category))
}

/// Unconditional mapping for a category.
const fn always(category: Category) -> Option<Resolution> {
    match category {
        Category::PlusMinus => Some(Resolution::State(StateName::AddSub)),
        Category::StateChanger => Some(Resolution::FromInput),
        Category::Zero | Category::Natural | Category::Controller => None,
    }
}

/// State-specific mapping for a category.
const fn by_current(category: Category, current: StateName) -> Option<StateName> {
    match (category, current) {
        (Category::Zero, StateName::Dot | StateName::Decimal) => Some(StateName::Decimal),
        (Category::Zero, StateName::InRoot) => Some(StateName::InRoot),
        (Category::Zero, StateName::Number | StateName::One) => Some(StateName::Number),
        (Category::Zero, StateName::Root | StateName::MulDiv | StateName::AddSub) => {
            Some(StateName::Zero)
        }
        (Category::Natural, StateName::Dot | StateName::Decimal) => Some(StateName::Decimal),
        (Category::Natural, StateName::Root | StateName::InRoot) => Some(StateName::InRoot),
        _ => None,
    }
}

/// Fallback mapping for a category.
const fn others(category: Category) -> Option<Resolution> {
    match category {
        Category::Natural => Some(Resolution::FromInput),
        _ => None,
    }
}

/// Decide the state after `input` was applied in `current`, given the
/// formula text as it reads after the mutation.
pub fn next_state(formula: &str, current: StateName, input: UnitType) -> StateName {
    match resolve(last_number_length(formula), current, input.category()) {
        Some(Resolution::State(next)) => next,
        Some(Resolution::FromInput) => StateName::named_after(input).unwrap_or_default(),
        None => StateName::Default,
    }
}
