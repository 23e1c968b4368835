//! Finished spell catalogs.
//!
//! [`SpellCatalogBuilder`] collects assembled spells and rank links, then
//! [`finish`](SpellCatalogBuilder::finish) runs every derivation pass in a
//! fixed order and freezes the result into an immutable [`SpellCatalog`].
//! [`CatalogStore`] publishes catalogs to concurrent readers.
mod lookup;
mod store;

pub use lookup::SpellLookup;
pub use store::{CatalogStore, CatalogVersion};

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::config::SpellConfig;
use crate::error::{CatalogError, SpellDataError};
use crate::info::{BASE_DIFFICULTY, Difficulty, RankChainRegistry, SpellId, SpellInfo};
use crate::positivity::{self, PositivityOverrides};
use crate::records::{SpellLoadUnit, SpellTables, group_records};
use crate::{diminishing, immunity};

type SpellKey = (SpellId, Difficulty);

// ============================================================================
// Catalog
// ============================================================================

/// Immutable set of finished spells.
///
/// Every derived field of every spell is populated. Share it behind an
/// [`Arc`](std::sync::Arc); [`CatalogStore`] does that for you.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpellCatalog {
    spells: BTreeMap<SpellKey, SpellInfo>,
    chains: RankChainRegistry,
    config: SpellConfig,
    version: CatalogVersion,
}

impl SpellCatalog {
    pub fn builder(config: SpellConfig) -> SpellCatalogBuilder {
        SpellCatalogBuilder::new(config)
    }

    /// Spell at `difficulty`, or its base-difficulty record.
    pub fn get(&self, id: SpellId, difficulty: Difficulty) -> Option<&SpellInfo> {
        self.lookup(id, difficulty)
    }

    /// Like [`Self::get`], naming what was missing on failure.
    ///
    /// # Errors
    ///
    /// [`SpellDataError::UnknownSpell`] when no difficulty of `id` exists,
    /// [`SpellDataError::UnknownDifficulty`] when only other tiers exist.
    pub fn try_get(&self, id: SpellId, difficulty: Difficulty) -> Result<&SpellInfo, SpellDataError> {
        if let Some(spell) = self.lookup(id, difficulty) {
            return Ok(spell);
        }
        if self.spells.range((id, 0)..=(id, Difficulty::MAX)).next().is_some() {
            Err(SpellDataError::UnknownDifficulty { spell_id: id, difficulty })
        } else {
            Err(SpellDataError::UnknownSpell { spell_id: id })
        }
    }

    /// Base-difficulty record of `id`.
    pub fn base(&self, id: SpellId) -> Option<&SpellInfo> {
        self.spells.get(&(id, BASE_DIFFICULTY))
    }

    /// Every difficulty of `id`, in tier order.
    pub fn difficulties(&self, id: SpellId) -> impl Iterator<Item = &SpellInfo> + '_ {
        self.spells
            .range((id, 0)..=(id, Difficulty::MAX))
            .map(|(_, spell)| spell)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpellInfo> + '_ {
        self.spells.values()
    }

    pub fn chains(&self) -> &RankChainRegistry {
        &self.chains
    }

    pub fn config(&self) -> &SpellConfig {
        &self.config
    }

    pub fn version(&self) -> CatalogVersion {
        self.version
    }

    pub(crate) fn set_version(&mut self, version: CatalogVersion) {
        self.version = version;
    }

    pub fn len(&self) -> usize {
        self.spells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spells.is_empty()
    }
}

impl SpellLookup for SpellCatalog {
    fn lookup_exact(&self, id: SpellId, difficulty: Difficulty) -> Option<&SpellInfo> {
        self.spells.get(&(id, difficulty))
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Collects spells for a [`SpellCatalog`].
#[derive(Debug, Default)]
pub struct SpellCatalogBuilder {
    config: SpellConfig,
    overrides: PositivityOverrides,
    spells: BTreeMap<SpellKey, SpellInfo>,
    rank_links: Vec<(SpellId, SpellId)>,
}

impl SpellCatalogBuilder {
    pub fn new(config: SpellConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Positivity verdicts pinned upstream of the classifier.
    pub fn with_overrides(mut self, overrides: PositivityOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Declares `prev` as the rank before `spell_id`.
    pub fn with_rank_link(mut self, spell_id: SpellId, prev: SpellId) -> Self {
        self.rank_links.push((spell_id, prev));
        self
    }

    /// Adds an assembled spell.
    ///
    /// # Errors
    ///
    /// [`CatalogError::DuplicateSpell`] when `(id, difficulty)` is taken.
    pub fn insert(&mut self, spell: SpellInfo) -> Result<(), CatalogError> {
        let key = (spell.id, spell.difficulty);
        if self.spells.contains_key(&key) {
            return Err(CatalogError::DuplicateSpell {
                spell_id: key.0,
                difficulty: key.1,
            });
        }
        self.spells.insert(key, spell);
        Ok(())
    }

    /// Assembles and adds grouped records.
    ///
    /// # Errors
    ///
    /// Fails on the first duplicate identity.
    pub fn insert_units(
        &mut self,
        units: impl IntoIterator<Item = SpellLoadUnit>,
    ) -> Result<(), CatalogError> {
        for unit in units {
            let spell = SpellInfo::new(&unit.name, unit.difficulty, &unit.helper, &unit.effects);
            self.insert(spell)?;
        }
        Ok(())
    }

    /// Groups flat tables and adds every spell they describe.
    ///
    /// # Errors
    ///
    /// Fails on the first duplicate identity.
    pub fn insert_tables(&mut self, tables: &SpellTables) -> Result<(), CatalogError> {
        self.insert_units(group_records(tables))
    }

    pub fn len(&self) -> usize {
        self.spells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spells.is_empty()
    }

    /// Runs every derivation pass and freezes the catalog.
    ///
    /// Order: rank chains, positivity, aura state and spell specific,
    /// diminishing returns, immunities, explicit target mask.
    ///
    /// # Errors
    ///
    /// Rank links that name unknown spells or form a cycle.
    pub fn finish(self) -> Result<SpellCatalog, CatalogError> {
        let Self {
            config,
            overrides,
            mut spells,
            rank_links,
        } = self;

        let chains = RankChainRegistry::from_links(&rank_links, |id| {
            spells.range((id, 0)..=(id, Difficulty::MAX)).next().is_some()
        })?;
        debug!(links = rank_links.len(), ranked = chains.len(), "rank chains resolved");

        positivity::classify_all(&mut spells, &overrides, &config);

        for spell in spells.values_mut() {
            spell.aura_state = spell.load_aura_state();
            spell.spell_specific = spell.load_spell_specific(&chains);
        }

        diminishing::classify_all(&mut spells, &config);
        immunity::resolve_all(&mut spells);

        for spell in spells.values_mut() {
            spell.init_explicit_target_mask();
        }

        info!(spells = spells.len(), "spell catalog finished");
        Ok(SpellCatalog {
            spells,
            chains,
            config,
            version: CatalogVersion::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defines::{
        AuraType, DiminishingGroup, Mechanic, SpellCastTargetFlags, SpellEffectName, Targets,
    };
    use crate::records::{EffectRecord, SpellEffectEntry, SpellNameEntry};

    fn aura(id: SpellId, difficulty: Difficulty, aura: AuraType, target: Targets) -> SpellInfo {
        aura_with_misc(id, difficulty, aura, target, 0)
    }

    fn aura_with_misc(
        id: SpellId,
        difficulty: Difficulty,
        aura: AuraType,
        target: Targets,
        misc: i32,
    ) -> SpellInfo {
        let record: EffectRecord = SpellEffectEntry {
            spell_id: id,
            effect: SpellEffectName::ApplyAura as u32,
            effect_aura: aura as u32,
            effect_misc_value: [misc, 0],
            implicit_target: [target as u32, 0],
            ..Default::default()
        }
        .into();
        let mut spell = SpellInfo::from_effects(
            &SpellNameEntry {
                id,
                name: format!("spell {id}"),
            },
            &[record],
        );
        spell.difficulty = difficulty;
        spell
    }

    #[test]
    fn duplicate_identity_rejected() {
        let mut builder = SpellCatalog::builder(SpellConfig::default());
        builder
            .insert(aura(1, 0, AuraType::ModStun, Targets::UnitTargetEnemy))
            .unwrap();
        let err = builder
            .insert(aura(1, 0, AuraType::ModRoot, Targets::UnitTargetEnemy))
            .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateSpell { spell_id: 1, difficulty: 0 });
    }

    #[test]
    fn finish_derives_every_pass() {
        let mut builder = SpellCatalog::builder(SpellConfig::default());
        builder
            .insert(aura(20549, 0, AuraType::ModStun, Targets::UnitTargetEnemy))
            .unwrap();
        builder
            .insert(aura_with_misc(
                2,
                0,
                AuraType::MechanicImmunity,
                Targets::UnitCaster,
                Mechanic::Stun as i32,
            ))
            .unwrap();
        let catalog = builder.finish().unwrap();

        let stun = catalog.get(20549, 0).unwrap();
        assert!(!stun.is_positive());
        assert_eq!(stun.diminish().group, DiminishingGroup::Stun);
        assert!(stun.explicit_target_mask().intersects(SpellCastTargetFlags::UNIT_MASK));

        let immunity = catalog.get(2, 0).unwrap();
        assert!(immunity.is_positive());
        assert!(immunity.effects()[0].immunity.is_some());
    }

    #[test]
    fn lookup_falls_back_to_base_difficulty() {
        let mut builder = SpellCatalog::builder(SpellConfig::default());
        builder
            .insert(aura(1, 0, AuraType::ModStun, Targets::UnitTargetEnemy))
            .unwrap();
        builder
            .insert(aura(1, 14, AuraType::ModRoot, Targets::UnitTargetEnemy))
            .unwrap();
        let catalog = builder.finish().unwrap();

        assert_eq!(catalog.get(1, 14).unwrap().difficulty, 14);
        assert_eq!(catalog.get(1, 15).unwrap().difficulty, 0);
        assert_eq!(catalog.difficulties(1).count(), 2);
        assert_eq!(
            catalog.try_get(2, 0).unwrap_err(),
            SpellDataError::UnknownSpell { spell_id: 2 }
        );
    }

    #[test]
    fn unknown_rank_link_fails() {
        let mut builder = SpellCatalog::builder(SpellConfig::default()).with_rank_link(2, 1);
        builder
            .insert(aura(2, 0, AuraType::ModStun, Targets::UnitTargetEnemy))
            .unwrap();
        assert_eq!(
            builder.finish().unwrap_err(),
            CatalogError::RankChainUnknownSpell { spell_id: 1 }
        );
    }
}
