use std::collections::BTreeMap;

use super::{SpellId, SpellInfo};
use crate::error::CatalogError;

/// Position of one spell inside its rank chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellChainNode {
    pub prev: Option<SpellId>,
    pub next: Option<SpellId>,
    pub first: SpellId,
    pub last: SpellId,
    pub rank: u8,
}

/// Rank chains shared by every difficulty of a spell.
///
/// Spells refer to their chain by id only; the registry owns the links.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankChainRegistry {
    nodes: BTreeMap<SpellId, SpellChainNode>,
}

impl RankChainRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the registry from `(spell, previous rank)` links.
    ///
    /// # Errors
    ///
    /// Fails when a link names a spell missing from `known` or when following
    /// previous ranks revisits a spell.
    pub fn from_links(
        links: &[(SpellId, SpellId)],
        known: impl Fn(SpellId) -> bool,
    ) -> Result<Self, CatalogError> {
        let mut prev_of: BTreeMap<SpellId, SpellId> = BTreeMap::new();
        let mut next_of: BTreeMap<SpellId, SpellId> = BTreeMap::new();

        for &(spell_id, prev) in links {
            for id in [spell_id, prev] {
                if !known(id) {
                    return Err(CatalogError::RankChainUnknownSpell { spell_id: id });
                }
            }
            prev_of.insert(spell_id, prev);
            next_of.insert(prev, spell_id);
        }

        let mut nodes = BTreeMap::new();
        let members = prev_of.keys().chain(next_of.keys()).copied();
        for spell_id in members {
            if nodes.contains_key(&spell_id) {
                continue;
            }

            let mut first = spell_id;
            let mut steps = 0usize;
            while let Some(&prev) = prev_of.get(&first) {
                first = prev;
                steps += 1;
                if first == spell_id || steps > links.len() {
                    return Err(CatalogError::RankChainCycle { spell_id });
                }
            }

            let mut chain = vec![first];
            while let Some(&next) = next_of.get(chain.last().unwrap_or(&first)) {
                if chain.contains(&next) {
                    return Err(CatalogError::RankChainCycle { spell_id: next });
                }
                chain.push(next);
            }

            let last = *chain.last().unwrap_or(&first);
            for (rank, &id) in chain.iter().enumerate() {
                nodes.insert(
                    id,
                    SpellChainNode {
                        prev: prev_of.get(&id).copied(),
                        next: next_of.get(&id).copied(),
                        first,
                        last,
                        rank: u8::try_from(rank + 1).unwrap_or(u8::MAX),
                    },
                );
            }
        }

        Ok(Self { nodes })
    }

    pub fn node(&self, spell_id: SpellId) -> Option<&SpellChainNode> {
        self.nodes.get(&spell_id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl SpellInfo {
    pub fn chain_node<'a>(&self, chains: &'a RankChainRegistry) -> Option<&'a SpellChainNode> {
        chains.node(self.id)
    }

    /// First rank of the chain; the spell itself when it has no chain.
    pub fn get_first_rank_spell(&self, chains: &RankChainRegistry) -> SpellId {
        self.chain_node(chains).map_or(self.id, |node| node.first)
    }

    pub fn get_last_rank_spell(&self, chains: &RankChainRegistry) -> SpellId {
        self.chain_node(chains).map_or(self.id, |node| node.last)
    }

    pub fn get_next_rank_spell(&self, chains: &RankChainRegistry) -> Option<SpellId> {
        self.chain_node(chains).and_then(|node| node.next)
    }

    pub fn get_prev_rank_spell(&self, chains: &RankChainRegistry) -> Option<SpellId> {
        self.chain_node(chains).and_then(|node| node.prev)
    }

    pub fn get_rank(&self, chains: &RankChainRegistry) -> u8 {
        self.chain_node(chains).map_or(0, |node| node.rank)
    }

    pub fn is_ranked(&self, chains: &RankChainRegistry) -> bool {
        self.chain_node(chains).is_some()
    }

    /// Whether both spells walk back to the same first rank.
    pub fn is_rank_of(&self, other: &SpellInfo, chains: &RankChainRegistry) -> bool {
        self.get_first_rank_spell(chains) == other.get_first_rank_spell(chains)
    }

    pub fn is_different_rank_of(&self, other: &SpellInfo, chains: &RankChainRegistry) -> bool {
        self.id != other.id && self.is_rank_of(other, chains)
    }

    pub fn is_highest_rank_of(&self, other: &SpellInfo, chains: &RankChainRegistry) -> bool {
        self.is_rank_of(other, chains) && self.get_next_rank_spell(chains).is_none()
    }
}
