// Formula surface: the rendered unit sequence the engine edits

use keycalc_core::Unit;

/// Where the formula is rendered.
///
/// The engine only reads the unit sequence and asks for four edits. How the
/// units are drawn is up to the implementation. [`Formula`] is a plain
/// in-memory surface.
pub trait Surface {
    /// Units in display order.
    fn units(&self) -> &[Unit];

    /// Replace everything with a single `0` unit.
    fn reset(&mut self);

    /// Add a unit at the end.
    fn append(&mut self, unit: Unit);

    /// Remove and return the last unit.
    fn remove_last(&mut self) -> Option<Unit>;

    /// Replace the last unit, returning the one that was removed.
    fn replace_last(&mut self, unit: Unit) -> Option<Unit> {
        let removed = self.remove_last();
        self.append(unit);
        removed
    }

    /// Number of rendered units.
    fn len(&self) -> usize {
        self.units().len()
    }

    fn is_empty(&self) -> bool {
        self.units().is_empty()
    }

    fn last(&self) -> Option<&Unit> {
        self.units().last()
    }

    /// The formula as one string, without rendering whitespace.
    fn text(&self) -> String {
        self.units()
            .iter()
            .flat_map(|u| u.value.chars())
            .filter(|c| !c.is_whitespace())
            .collect()
    }
}

/// In-memory formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    units: Vec<Unit>,
}

impl Formula {
    pub fn new() -> Self {
        Self {
            units: vec![Unit::zero()],
        }
    }
}

impl Default for Formula {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for Formula {
    fn units(&self) -> &[Unit] {
        &self.units
    }

    fn reset(&mut self) {
        self.units.clear();
        self.units.push(Unit::zero());
    }

    fn append(&mut self, unit: Unit) {
        self.units.push(unit);
    }

    fn remove_last(&mut self) -> Option<Unit> {
        self.units.pop()
    }
}
