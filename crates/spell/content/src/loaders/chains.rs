//! Rank chain loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use spell_core::SpellId;

use crate::loaders::{LoadResult, parse_ron};

/// One `spell follows prev` link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankLink {
    pub spell: SpellId,
    pub prev: SpellId,
}

/// Rank chain file structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RankChainFile {
    pub links: Vec<RankLink>,
}

/// Loader for rank chain links from RON files.
pub struct ChainLoader;

impl ChainLoader {
    /// Returns `(spell, prev)` pairs in file order.
    pub fn load(path: &Path) -> LoadResult<Vec<(SpellId, SpellId)>> {
        let file: RankChainFile = parse_ron(path, "rank chain")?;
        Ok(file
            .links
            .into_iter()
            .map(|link| (link.spell, link.prev))
            .collect())
    }
}
