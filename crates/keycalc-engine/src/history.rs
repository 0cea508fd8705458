// State history stack with undo on delete

use keycalc_core::StateName;

/// Stack of committed machine states.
///
/// The top of the stack is the current state. Every committed edit pushes
/// one entry; deleting a unit pops one. The stack is never left empty:
/// popping the last entry pushes [`StateName::Default`] again.
#[derive(Debug, Clone)]
pub struct StateHistory {
    current: StateName,
    stack: Vec<StateName>,
}

impl StateHistory {
    pub fn new() -> Self {
        Self {
            current: StateName::Default,
            stack: vec![StateName::Default],
        }
    }

    /// The current state.
    #[inline]
    pub fn current(&self) -> StateName {
        self.current
    }

    /// Committed states, oldest first.
    pub fn entries(&self) -> &[StateName] {
        &self.stack
    }

    /// Commit `next` as the current state.
    pub fn update(&mut self, next: StateName) {
        self.current = next;
        self.stack.push(next);
    }

    /// Undo the latest commit and return to the state before it.
    pub fn back(&mut self) {
        self.stack.pop();
        match self.stack.last() {
            Some(&prev) => self.current = prev,
            None => self.update(StateName::Default),
        }
    }

    /// Drop the latest entry without changing the current state.
    ///
    /// Used to fold the replay of a result into a single commit before
    /// `answer` is pushed.
    pub fn discard_latest(&mut self) {
        self.stack.pop();
    }

    /// Forget everything and start over at `default`.
    pub fn clear(&mut self) {
        self.stack.clear();
        self.update(StateName::Default);
    }
}

impl Default for StateHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_default() {
        let h = StateHistory::new();
        assert_eq!(h.current(), StateName::Default);
        assert_eq!(h.entries(), &[StateName::Default]);
    }

    #[test]
    fn back_restores_previous() {
        let mut h = StateHistory::new();
        h.update(StateName::Number);
        h.update(StateName::AddSub);
        h.back();
        assert_eq!(h.current(), StateName::Number);
        assert_eq!(h.entries(), &[StateName::Default, StateName::Number]);
    }

    #[test]
    fn back_on_last_entry_pushes_default() {
        let mut h = StateHistory::new();
        h.back();
        assert_eq!(h.current(), StateName::Default);
        assert_eq!(h.entries(), &[StateName::Default]);
    }

    #[test]
    fn discard_keeps_current() {
        let mut h = StateHistory::new();
        h.update(StateName::Number);
        h.discard_latest();
        assert_eq!(h.current(), StateName::Number);
        assert_eq!(h.entries(), &[StateName::Default]);
    }

    #[test]
    fn clear_resets() {
        let mut h = StateHistory::new();
        h.update(StateName::Root);
        h.update(StateName::InRoot);
        h.clear();
        assert_eq!(h.current(), StateName::Default);
        assert_eq!(h.entries(), &[StateName::Default]);
    }
}
