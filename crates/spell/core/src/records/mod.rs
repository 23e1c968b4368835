//! Raw spell-definition records and the adapter that groups them.
//!
//! The data collaborator hands over flat tables ([`SpellTables`]); the
//! [`adapter`] groups rows by `(spell, difficulty)` into [`SpellLoadUnit`]s,
//! which the assembler turns into [`SpellInfo`](crate::SpellInfo) values.
pub mod adapter;
mod entries;

pub use adapter::{SpellLoadUnit, group_records};
pub use entries::{
    SpellAuraOptionsEntry, SpellAuraRestrictionsEntry, SpellCastTimesEntry,
    SpellCastingRequirementsEntry, SpellCategoriesEntry, SpellClassOptionsEntry,
    SpellCooldownsEntry, SpellDurationEntry, SpellEffectEntry, SpellEmpowerStageEntry,
    SpellEquippedItemsEntry, SpellInterruptsEntry, SpellLabelEntry, SpellLevelsEntry,
    SpellMiscEntry, SpellNameEntry, SpellPowerEntry, SpellRadiusEntry, SpellRangeEntry,
    SpellReagentsCurrencyEntry, SpellReagentsEntry, SpellScalingEntry, SpellShapeshiftEntry,
    SpellTargetRestrictionsEntry, SpellTotemsEntry, SpellXSpellVisualEntry,
};

/// Optional sub-records for one `(spell, difficulty)` pair.
///
/// Every field may be absent; the assembler substitutes documented defaults.
/// Cross-table references (duration, cast time, range) are already resolved.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpellInfoLoadHelper {
    pub misc: Option<SpellMiscEntry>,
    pub scaling: Option<SpellScalingEntry>,
    pub aura_options: Option<SpellAuraOptionsEntry>,
    pub aura_restrictions: Option<SpellAuraRestrictionsEntry>,
    pub casting_requirements: Option<SpellCastingRequirementsEntry>,
    pub categories: Option<SpellCategoriesEntry>,
    pub class_options: Option<SpellClassOptionsEntry>,
    pub cooldowns: Option<SpellCooldownsEntry>,
    pub equipped_items: Option<SpellEquippedItemsEntry>,
    pub interrupts: Option<SpellInterruptsEntry>,
    pub labels: Vec<SpellLabelEntry>,
    pub levels: Option<SpellLevelsEntry>,
    pub powers: Vec<SpellPowerEntry>,
    pub reagents: Option<SpellReagentsEntry>,
    pub reagents_currency: Vec<SpellReagentsCurrencyEntry>,
    pub shapeshift: Option<SpellShapeshiftEntry>,
    pub target_restrictions: Option<SpellTargetRestrictionsEntry>,
    pub totems: Option<SpellTotemsEntry>,
    pub visuals: Vec<SpellXSpellVisualEntry>,
    pub empower_stages: Vec<SpellEmpowerStageEntry>,

    pub duration: Option<SpellDurationEntry>,
    pub casting_time: Option<SpellCastTimesEntry>,
    pub range: Option<SpellRangeEntry>,
}

/// An effect row together with its resolved radius entries.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EffectRecord {
    pub entry: SpellEffectEntry,
    pub radius: [Option<SpellRadiusEntry>; 2],
}

impl From<SpellEffectEntry> for EffectRecord {
    fn from(entry: SpellEffectEntry) -> Self {
        Self {
            entry,
            radius: [None, None],
        }
    }
}

/// Flat spell tables, one `Vec` per source table.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpellTables {
    pub names: Vec<SpellNameEntry>,
    pub misc: Vec<SpellMiscEntry>,
    pub scaling: Vec<SpellScalingEntry>,
    pub aura_options: Vec<SpellAuraOptionsEntry>,
    pub aura_restrictions: Vec<SpellAuraRestrictionsEntry>,
    pub casting_requirements: Vec<SpellCastingRequirementsEntry>,
    pub categories: Vec<SpellCategoriesEntry>,
    pub class_options: Vec<SpellClassOptionsEntry>,
    pub cooldowns: Vec<SpellCooldownsEntry>,
    pub equipped_items: Vec<SpellEquippedItemsEntry>,
    pub interrupts: Vec<SpellInterruptsEntry>,
    pub labels: Vec<SpellLabelEntry>,
    pub levels: Vec<SpellLevelsEntry>,
    pub powers: Vec<SpellPowerEntry>,
    pub reagents: Vec<SpellReagentsEntry>,
    pub reagents_currency: Vec<SpellReagentsCurrencyEntry>,
    pub shapeshift: Vec<SpellShapeshiftEntry>,
    pub target_restrictions: Vec<SpellTargetRestrictionsEntry>,
    pub totems: Vec<SpellTotemsEntry>,
    pub visuals: Vec<SpellXSpellVisualEntry>,
    pub empower_stages: Vec<SpellEmpowerStageEntry>,
    pub effects: Vec<SpellEffectEntry>,

    pub durations: Vec<SpellDurationEntry>,
    pub cast_times: Vec<SpellCastTimesEntry>,
    pub ranges: Vec<SpellRangeEntry>,
    pub radii: Vec<SpellRadiusEntry>,
}
