//! Memento
//!
//! The originator can snapshot its state into a `Memento` and later roll
//! back to it. Snapshots are immutable; the caller keeps them.

use std::io::Write;

use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memento {
    state: String,
}

impl Memento {
    pub fn state(&self) -> &str {
        &self.state
    }
}

#[derive(Debug, Default)]
pub struct Originator {
    state: String,
}

impl Originator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn set_state(&mut self, state: impl Into<String>) {
        self.state = state.into();
    }

    pub fn save(&self) -> Memento {
        Memento {
            state: self.state.clone(),
        }
    }

    pub fn restore(&mut self, memento: &Memento) {
        self.state.clone_from(&memento.state);
    }
}

pub fn demo(out: &mut dyn Write) -> Result<()> {
    let mut originator = Originator::new();

    originator.set_state("A");
    let saved = originator.save();
    writeln!(out, "State saved: {}", saved.state())?;

    originator.set_state("B");
    writeln!(out, "Current state: {}", originator.state())?;

    originator.restore(&saved);
    writeln!(out, "Restored state: {}", originator.state())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_restore_after_change() {
        let mut originator = Originator::new();
        originator.set_state("A");
        let saved = originator.save();
        originator.set_state("B");
        originator.restore(&saved);
        assert_eq!(originator.state(), "A");
    }

    #[test]
    fn test_snapshot_unaffected_by_later_changes() {
        let mut originator = Originator::new();
        originator.set_state("first");
        let saved = originator.save();
        originator.set_state("second");
        assert_eq!(saved.state(), "first");
    }

    #[test]
    fn test_demo_output() {
        let mut out = Vec::new();
        demo(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "State saved: A\nCurrent state: B\nRestored state: A\n"
        );
    }

    proptest! {
        #[test]
        fn prop_round_trip(initial in ".*", edits in proptest::collection::vec(".*", 0..5)) {
            let mut originator = Originator::new();
            originator.set_state(initial.clone());
            let saved = originator.save();
            for edit in edits {
                originator.set_state(edit);
            }
            originator.restore(&saved);
            prop_assert_eq!(originator.state(), initial.as_str());
        }
    }
}
