//! Pinned positivity loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use spell_core::{PositivityOverrides, SpellId, Verdict};
use tracing::warn;

use crate::loaders::{LoadResult, parse_ron};

/// A verdict pinned on one effect slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinnedVerdict {
    pub spell: SpellId,
    pub effect: usize,
    pub verdict: Verdict,
}

/// Loader for pinned verdicts from RON files.
///
/// ```ron
/// [
///     (spell: 7, effect: 0, verdict: Positive),
/// ]
/// ```
pub struct OverridesLoader;

impl OverridesLoader {
    /// Later entries for the same slot replace earlier ones.
    pub fn load(path: &Path) -> LoadResult<PositivityOverrides> {
        let entries: Vec<PinnedVerdict> = parse_ron(path, "positivity overrides")?;
        let mut overrides = PositivityOverrides::new();
        for entry in entries {
            if overrides.pinned(entry.spell, entry.effect).is_some() {
                warn!(spell_id = entry.spell, effect = entry.effect, "verdict pinned twice");
            }
            overrides.pin(entry.spell, entry.effect, entry.verdict);
        }
        Ok(overrides)
    }
}
