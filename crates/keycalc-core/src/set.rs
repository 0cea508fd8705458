// Compact set of unit types

use std::fmt;

use crate::unit::UnitType;

/// A set of [`UnitType`]s stored as a bit mask.
///
/// All operations are `const fn` so that the transition table can be built
/// by copying and adjusting base rule sets at compile time.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UnitSet(u16);

impl UnitSet {
    pub const EMPTY: UnitSet = UnitSet(0);

    /// Build a set from a slice of types.
    pub const fn of(types: &[UnitType]) -> Self {
        let mut bits = 0u16;
        let mut i = 0;
        while i < types.len() {
            bits |= types[i].bit();
            i += 1;
        }
        UnitSet(bits)
    }

    #[must_use]
    pub const fn with(self, t: UnitType) -> Self {
        UnitSet(self.0 | t.bit())
    }

    #[must_use]
    pub const fn without(self, t: UnitType) -> Self {
        UnitSet(self.0 & !t.bit())
    }

    #[inline]
    pub const fn contains(self, t: UnitType) -> bool {
        self.0 & t.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn intersects(self, other: UnitSet) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members in declaration order of [`UnitType`].
    pub fn iter(self) -> impl Iterator<Item = UnitType> {
        UnitType::ALL.into_iter().filter(move |t| self.contains(*t))
    }
}

impl fmt::Debug for UnitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<UnitType> for UnitSet {
    fn from_iter<I: IntoIterator<Item = UnitType>>(iter: I) -> Self {
        iter.into_iter().fold(UnitSet::EMPTY, UnitSet::with)
    }
}
