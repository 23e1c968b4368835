use std::collections::BTreeMap;

use crate::info::{BASE_DIFFICULTY, Difficulty, SpellId, SpellInfo};

/// Read access to assembled spells by identity.
pub trait SpellLookup {
    /// Exact `(id, difficulty)` match.
    fn lookup_exact(&self, id: SpellId, difficulty: Difficulty) -> Option<&SpellInfo>;

    /// Falls back to the base difficulty when the tier has no own record.
    fn lookup(&self, id: SpellId, difficulty: Difficulty) -> Option<&SpellInfo> {
        self.lookup_exact(id, difficulty).or_else(|| {
            if difficulty == BASE_DIFFICULTY {
                None
            } else {
                self.lookup_exact(id, BASE_DIFFICULTY)
            }
        })
    }
}

impl SpellLookup for BTreeMap<(SpellId, Difficulty), SpellInfo> {
    fn lookup_exact(&self, id: SpellId, difficulty: Difficulty) -> Option<&SpellInfo> {
        self.get(&(id, difficulty))
    }
}
