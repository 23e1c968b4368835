use std::collections::BTreeSet;

use arrayvec::ArrayVec;

use super::{DiminishInfo, Difficulty, SpellEffectInfo, SpellId};
use crate::config::SpellConfig;
use crate::defines::{
    AuraStateType, AuraType, DispelType, Mechanic, SpellAttr0, SpellAttr1, SpellAttr2, SpellAttr3,
    SpellAttr4, SpellAttr5, SpellAttr6, SpellAttr7, SpellAttr8, SpellAttr9, SpellAttr10,
    SpellAttr11, SpellAttr12, SpellAttr13, SpellAttr14, SpellAttribute, SpellAuraInterruptFlags,
    SpellCastTargetFlags, SpellCustomAttributes, SpellDmgClass, SpellEffectName, SpellFamilyFlags,
    SpellFamilyName, SpellPreventionType, SpellSchoolMask, SpellSpecificType,
};
use crate::error::SpellDataError;
use crate::records::{SpellCastTimesEntry, SpellDurationEntry, SpellPowerEntry, SpellRangeEntry};

/// Item consumed by a cast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellReagent {
    pub item: i32,
    pub count: i32,
}

/// Currency consumed by a cast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellReagentCurrency {
    pub currency_type: u32,
    pub count: u32,
}

/// Equipped-item requirement of a spell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquippedItemRequirement {
    pub item_class: i32,
    pub sub_class_mask: i32,
    pub inventory_type_mask: i32,
}

/// Level range over which the spell's values scale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellScalingInfo {
    pub min_scaling_level: u32,
    pub max_scaling_level: u32,
    pub scales_from_item_level: u32,
}

/// Aura-state, aura-spell and aura-type requirements on caster and target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AuraRestrictions {
    pub caster_aura_state: AuraStateType,
    pub target_aura_state: AuraStateType,
    pub exclude_caster_aura_state: AuraStateType,
    pub exclude_target_aura_state: AuraStateType,
    pub caster_aura_spell: SpellId,
    pub target_aura_spell: SpellId,
    pub exclude_caster_aura_spell: SpellId,
    pub exclude_target_aura_spell: SpellId,
    pub caster_aura_type: AuraType,
    pub target_aura_type: AuraType,
    pub exclude_caster_aura_type: AuraType,
    pub exclude_target_aura_type: AuraType,
}

/// Normalized description of one spell at one difficulty.
///
/// Raw fields are filled by the assembler. Derived fields (`aura_state`,
/// `spell_specific`, `explicit_target_mask`, negative effects, diminishing
/// info, allowed mechanics and per-effect immunities) are written exactly once
/// by the catalog builder and are read-only afterwards.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellInfo {
    pub id: SpellId,
    pub difficulty: Difficulty,
    pub name: String,

    pub category_id: u32,
    pub start_recovery_category: u32,
    pub charge_category_id: u32,
    pub dispel: DispelType,
    pub mechanic: Mechanic,
    pub dmg_class: SpellDmgClass,
    pub prevention_type: SpellPreventionType,
    pub school_mask: SpellSchoolMask,

    pub attributes: SpellAttr0,
    pub attributes_ex: SpellAttr1,
    pub attributes_ex2: SpellAttr2,
    pub attributes_ex3: SpellAttr3,
    pub attributes_ex4: SpellAttr4,
    pub attributes_ex5: SpellAttr5,
    pub attributes_ex6: SpellAttr6,
    pub attributes_ex7: SpellAttr7,
    pub attributes_ex8: SpellAttr8,
    pub attributes_ex9: SpellAttr9,
    pub attributes_ex10: SpellAttr10,
    pub attributes_ex11: SpellAttr11,
    pub attributes_ex12: SpellAttr12,
    pub attributes_ex13: SpellAttr13,
    pub attributes_ex14: SpellAttr14,
    pub attributes_cu: SpellCustomAttributes,

    /// Forms the spell may be cast in, one bit per form id minus one.
    pub stances: u64,
    /// Forms the spell may never be cast in.
    pub stances_not: u64,
    pub targets: SpellCastTargetFlags,
    pub target_creature_type: u32,
    pub max_affected_targets: u32,
    pub max_target_level: u32,
    pub cone_angle: f32,
    pub width: f32,
    pub requires_spell_focus: u32,
    pub facing_caster_flags: u32,
    pub aura_restrictions: AuraRestrictions,
    pub required_area_id: i32,

    pub casting_time: Option<SpellCastTimesEntry>,
    pub duration_entry: Option<SpellDurationEntry>,
    pub range_entry: Option<SpellRangeEntry>,
    pub recovery_time: u32,
    pub category_recovery_time: u32,
    pub start_recovery_time: u32,
    pub cooldown_aura_spell_id: SpellId,
    pub speed: f32,
    pub launch_delay: f32,
    pub min_duration: f32,

    pub interrupt_flags: u32,
    pub aura_interrupt_flags: SpellAuraInterruptFlags,
    pub aura_interrupt_flags2: u32,
    pub channel_interrupt_flags: SpellAuraInterruptFlags,
    pub channel_interrupt_flags2: u32,

    pub proc_flags: [i32; 2],
    pub proc_chance: u32,
    pub proc_charges: i32,
    pub proc_cooldown: u32,
    pub proc_category_recovery: i32,
    pub stack_amount: u32,

    pub base_level: u32,
    pub max_level: u32,
    pub spell_level: u32,
    pub max_passive_aura_level: u32,
    pub scaling: SpellScalingInfo,
    pub content_tuning_id: u32,

    pub power_costs: ArrayVec<SpellPowerEntry, { SpellConfig::MAX_POWERS_PER_SPELL }>,
    pub reagents: ArrayVec<SpellReagent, { SpellConfig::MAX_REAGENTS }>,
    pub reagent_currencies: ArrayVec<SpellReagentCurrency, { SpellConfig::MAX_REAGENT_CURRENCIES }>,
    pub totems: [u32; SpellConfig::MAX_TOTEMS],
    pub totem_categories: [u32; SpellConfig::MAX_TOTEMS],
    pub equipped_items: Option<EquippedItemRequirement>,

    pub spell_family_name: SpellFamilyName,
    pub spell_family_flags: SpellFamilyFlags,
    pub modal_next_spell: SpellId,
    pub labels: BTreeSet<u32>,
    pub spell_visual: u32,
    pub icon_file_data_id: u32,
    pub active_icon_file_data_id: u32,
    pub empower_stage_durations: ArrayVec<u32, { SpellConfig::MAX_EMPOWER_STAGES }>,

    pub(crate) effects: ArrayVec<SpellEffectInfo, { SpellConfig::MAX_SPELL_EFFECTS }>,

    pub(crate) aura_state: AuraStateType,
    pub(crate) spell_specific: SpellSpecificType,
    pub(crate) explicit_target_mask: SpellCastTargetFlags,
    pub(crate) negative_effects: u32,
    pub(crate) diminish: DiminishInfo,
    pub(crate) allowed_mechanic_mask: u64,
}

impl SpellInfo {
    // ========================================================================
    // Effects
    // ========================================================================

    /// All effect slots, blank placeholders included.
    pub fn effects(&self) -> &[SpellEffectInfo] {
        &self.effects
    }

    /// Effect slot `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SpellDataError::EffectIndexOutOfRange`] when the slot is not
    /// populated.
    pub fn get_effect(&self, index: usize) -> Result<&SpellEffectInfo, SpellDataError> {
        self.effects
            .get(index)
            .ok_or(SpellDataError::EffectIndexOutOfRange {
                spell_id: self.id,
                index,
                count: self.effects.len(),
            })
    }

    pub fn has_effect(&self, effect: SpellEffectName) -> bool {
        self.effects.iter().any(|e| e.is_effect_name(effect))
    }

    pub fn has_aura(&self, aura: AuraType) -> bool {
        self.effects.iter().any(|e| e.is_aura_type(aura))
    }

    pub fn has_area_aura_effect(&self) -> bool {
        self.effects.iter().any(|e| e.is_area_aura_effect())
    }

    pub fn has_attribute(&self, attribute: impl Into<SpellAttribute>) -> bool {
        match attribute.into() {
            SpellAttribute::Attr0(flag) => self.attributes.intersects(flag),
            SpellAttribute::Attr1(flag) => self.attributes_ex.intersects(flag),
            SpellAttribute::Attr2(flag) => self.attributes_ex2.intersects(flag),
            SpellAttribute::Attr3(flag) => self.attributes_ex3.intersects(flag),
            SpellAttribute::Attr4(flag) => self.attributes_ex4.intersects(flag),
            SpellAttribute::Attr5(flag) => self.attributes_ex5.intersects(flag),
            SpellAttribute::Attr6(flag) => self.attributes_ex6.intersects(flag),
            SpellAttribute::Attr7(flag) => self.attributes_ex7.intersects(flag),
            SpellAttribute::Attr8(flag) => self.attributes_ex8.intersects(flag),
            SpellAttribute::Custom(flag) => self.attributes_cu.intersects(flag),
        }
    }

    pub fn has_label(&self, label: u32) -> bool {
        self.labels.contains(&label)
    }

    pub fn has_aura_interrupt_flag(&self, flag: SpellAuraInterruptFlags) -> bool {
        self.aura_interrupt_flags.intersects(flag)
    }

    // ========================================================================
    // Classification
    // ========================================================================

    pub fn is_passive(&self) -> bool {
        self.has_attribute(SpellAttr0::PASSIVE)
    }

    pub fn is_channeled(&self) -> bool {
        self.has_attribute(SpellAttr1::IS_CHANNELLED | SpellAttr1::IS_SELF_CHANNELLED)
    }

    /// True when no effect slot harms its target.
    pub fn is_positive(&self) -> bool {
        self.negative_effects == 0
    }

    pub fn is_positive_effect(&self, index: usize) -> bool {
        index >= u32::BITS as usize || self.negative_effects & (1 << index) == 0
    }

    /// Indices of effect slots classified as harmful.
    pub fn negative_effects(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.effects.len()).filter(|i| !self.is_positive_effect(*i))
    }

    pub fn aura_state(&self) -> AuraStateType {
        self.aura_state
    }

    pub fn spell_specific(&self) -> SpellSpecificType {
        self.spell_specific
    }

    pub fn explicit_target_mask(&self) -> SpellCastTargetFlags {
        self.explicit_target_mask
    }

    pub fn diminish(&self) -> &DiminishInfo {
        &self.diminish
    }

    pub fn is_affecting_area(&self) -> bool {
        self.effects.iter().any(|e| {
            e.is_effect()
                && (e.is_targeting_area()
                    || e.is_effect_name(SpellEffectName::PersistentAreaAura)
                    || e.is_area_aura_effect())
        })
    }

    pub fn is_targeting_area(&self) -> bool {
        self.effects
            .iter()
            .any(|e| e.is_effect() && e.is_targeting_area())
    }

    pub fn needs_explicit_unit_target(&self) -> bool {
        self.explicit_target_mask
            .intersects(SpellCastTargetFlags::UNIT_MASK)
    }

    pub fn is_requiring_dead_target(&self) -> bool {
        self.has_attribute(SpellAttr3::ONLY_ON_GHOSTS)
    }

    /// Whether dead units or corpses are legal targets.
    pub fn is_allowing_dead_target(&self) -> bool {
        if self.has_attribute(SpellAttr2::ALLOW_DEAD_TARGET)
            || self.targets.intersects(
                SpellCastTargetFlags::CORPSE_ALLY
                    | SpellCastTargetFlags::CORPSE_ENEMY
                    | SpellCastTargetFlags::UNIT_DEAD,
            )
        {
            return true;
        }

        self.effects.iter().any(|e| {
            e.target_a.object_type().is_corpse() || e.target_b.object_type().is_corpse()
        })
    }

    pub fn can_be_used_in_combat(&self) -> bool {
        !self.has_attribute(SpellAttr0::NOT_IN_COMBAT_ONLY_PEACEFUL)
    }

    /// Whether several ranks of this spell may be active on one target.
    pub fn is_stackable_with_ranks(&self) -> bool {
        if self.is_passive() {
            return false;
        }

        // Paladin auras and druid forms replace lower ranks.
        !self.effects.iter().any(|e| match self.spell_family_name {
            SpellFamilyName::Paladin => e.is_effect_name(SpellEffectName::ApplyAreaAuraRaid),
            SpellFamilyName::Druid => e.is_aura_type(AuraType::ModShapeshift),
            _ => false,
        })
    }

    pub fn is_multi_slot_aura(&self) -> bool {
        self.is_passive() || matches!(self.id, 55849 | 40075 | 44413)
    }

    pub fn is_cooldown_started_on_event(&self) -> bool {
        self.has_attribute(SpellAttr0::COOLDOWN_ON_EVENT)
    }

    pub fn is_death_persistent(&self) -> bool {
        self.has_attribute(SpellAttr3::ALLOW_AURA_WHILE_DEAD)
    }

    pub fn is_auto_repeat_ranged_spell(&self) -> bool {
        self.has_attribute(SpellAttr2::AUTO_REPEAT)
    }

    pub fn is_break_stealth(&self) -> bool {
        !self.has_attribute(SpellAttr1::ALLOW_WHILE_STEALTHED)
    }

    pub fn is_single_target(&self) -> bool {
        self.has_attribute(SpellAttr5::SINGLE_TARGET_AURA)
    }

    // ========================================================================
    // Timing and range
    // ========================================================================

    /// Base duration in milliseconds; `-1` is infinite.
    pub fn get_duration(&self) -> i32 {
        match &self.duration_entry {
            None => {
                if self.is_passive() {
                    -1
                } else {
                    0
                }
            }
            Some(entry) if entry.duration == -1 => -1,
            Some(entry) => entry.duration.abs(),
        }
    }

    /// Maximum duration in milliseconds; `-1` is infinite.
    pub fn get_max_duration(&self) -> i32 {
        match &self.duration_entry {
            None => {
                if self.is_passive() {
                    -1
                } else {
                    0
                }
            }
            Some(entry) if entry.max_duration == -1 => -1,
            Some(entry) => entry.max_duration.abs(),
        }
    }

    pub fn get_recovery_time(&self) -> u32 {
        self.recovery_time.max(self.category_recovery_time)
    }

    /// Base cast time in milliseconds.
    pub fn get_cast_time(&self) -> i32 {
        self.casting_time.as_ref().map_or(0, |entry| entry.base.max(0))
    }

    /// Maximum range; friendly range when `positive`, hostile otherwise.
    pub fn get_max_range(&self, positive: bool) -> f32 {
        self.range_entry
            .as_ref()
            .map_or(0.0, |entry| entry.range_max[usize::from(positive)])
    }

    pub fn get_min_range(&self, positive: bool) -> f32 {
        self.range_entry
            .as_ref()
            .map_or(0.0, |entry| entry.range_min[usize::from(positive)])
    }

    // ========================================================================
    // Dispel and mechanics
    // ========================================================================

    /// Dispel mask of a dispel type; [`DispelType::All`] expands to every type.
    pub fn dispel_mask_of(dispel: DispelType) -> u32 {
        dispel.mask()
    }

    pub fn get_dispel_mask(&self) -> u32 {
        Self::dispel_mask_of(self.dispel)
    }

    pub fn get_all_effects_mechanic_mask(&self) -> u64 {
        self.effects
            .iter()
            .filter(|e| e.is_effect())
            .fold(self.mechanic.mask(), |mask, e| mask | e.mechanic.mask())
    }

    pub fn get_effect_mechanic_mask(&self, index: usize) -> u64 {
        let mut mask = self.mechanic.mask();
        if let Some(effect) = self.effects.get(index)
            && effect.is_effect()
        {
            mask |= effect.mechanic.mask();
        }
        mask
    }

    /// Mechanic mask restricted to effects whose bit is set in `effect_mask`.
    pub fn get_spell_mechanic_mask_by_effect_mask(&self, effect_mask: u32) -> u64 {
        self.effects
            .iter()
            .filter(|e| e.is_effect() && effect_mask & (1 << e.effect_index) != 0)
            .fold(self.mechanic.mask(), |mask, e| mask | e.mechanic.mask())
    }

    pub fn get_effect_mechanic(&self, index: usize) -> Mechanic {
        if let Some(effect) = self.effects.get(index)
            && effect.is_effect()
            && effect.mechanic != Mechanic::None
        {
            return effect.mechanic;
        }
        self.mechanic
    }

    /// Stance bit of a shapeshift form id; form `0` has no bit.
    pub const fn stance_mask(form: u32) -> u64 {
        if form == 0 || form > 64 {
            0
        } else {
            1 << (form - 1)
        }
    }
}
