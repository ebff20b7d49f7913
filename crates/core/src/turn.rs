//! Per-round throw slots.

use serde::{Deserialize, Serialize};

use crate::throw::{Label, Throw};
use crate::types::DARTS_PER_ROUND;

/// A dart as recorded in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DartRecord {
    pub throw: Throw,
    /// What the round display shows for this dart.
    pub label: Label,
    /// Points this dart contributed to the round total.
    pub points: u32,
}

impl DartRecord {
    /// Record that shows the throw's own label and its face value.
    pub fn scored(throw: Throw) -> Self {
        Self {
            throw,
            label: throw.label(),
            points: throw.value(),
        }
    }
}

/// One of the three slots of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "dart", rename_all = "lowercase")]
pub enum Slot {
    #[default]
    Pending,
    Thrown(DartRecord),
}

impl Slot {
    pub fn dart(&self) -> Option<&DartRecord> {
        match self {
            Slot::Pending => None,
            Slot::Thrown(d) => Some(d),
        }
    }

    /// Display text; pending slots show `-`.
    pub fn label(&self) -> &str {
        match self {
            Slot::Pending => "-",
            Slot::Thrown(d) => d.label.as_str(),
        }
    }
}

/// Darts of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Turn {
    slots: [Slot; DARTS_PER_ROUND],
    throw_index: u8,
}

impl Turn {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slots(&self) -> &[Slot; DARTS_PER_ROUND] {
        &self.slots
    }

    /// Number of filled slots (0..=3), or 3 after a round-ending bust.
    pub fn throw_index(&self) -> u8 {
        self.throw_index
    }

    pub fn is_empty(&self) -> bool {
        self.throw_index == 0
    }

    pub fn is_full(&self) -> bool {
        self.throw_index as usize >= DARTS_PER_ROUND
    }

    /// Fill the next slot. Returns `false` if the round is already full.
    pub fn push(&mut self, dart: DartRecord) -> bool {
        if self.is_full() {
            return false;
        }
        self.slots[self.throw_index as usize] = Slot::Thrown(dart);
        self.throw_index += 1;
        true
    }

    /// Forfeit the remaining darts of the round (used on bust).
    pub fn forfeit_rest(&mut self) {
        self.throw_index = DARTS_PER_ROUND as u8;
    }

    /// Sum of the points recorded in thrown slots.
    pub fn points(&self) -> u32 {
        self.slots.iter().filter_map(Slot::dart).map(|d| d.points).sum()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::throw::normalize;

    #[test]
    fn push_until_full() {
        let mut turn = Turn::new();
        let t = normalize(20, 1).unwrap();
        assert!(turn.push(DartRecord::scored(t)));
        assert!(turn.push(DartRecord::scored(t)));
        assert!(turn.push(DartRecord::scored(t)));
        assert!(turn.is_full());
        assert!(!turn.push(DartRecord::scored(t)));
        assert_eq!(turn.throw_index(), 3);
        assert_eq!(turn.points(), 60);
    }

    #[test]
    fn forfeit_keeps_thrown_slots() {
        let mut turn = Turn::new();
        turn.push(DartRecord::scored(normalize(5, 1).unwrap()));
        turn.forfeit_rest();
        assert!(turn.is_full());
        assert_eq!(turn.slots()[0].label(), "S-5");
        assert_eq!(turn.slots()[1], Slot::Pending);
        assert_eq!(turn.slots()[2].label(), "-");
    }
}
