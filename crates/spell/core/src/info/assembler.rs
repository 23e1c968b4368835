//! Builds [`SpellInfo`] values from raw records.
//!
//! Absent sub-records leave fields at their defaults:
//!
//! | Missing record          | Resulting fields                                   |
//! |-------------------------|----------------------------------------------------|
//! | misc                    | no attributes, empty school mask, no timing data   |
//! | categories              | no category, `DispelType::None`, `Mechanic::None`  |
//! | equipped items          | `equipped_items = None`                            |
//! | target restrictions     | empty target flags, no creature-type restriction   |
//! | shapeshift              | `stances = stances_not = 0`                        |
//! | powers                  | no cost                                            |
//!
//! Unknown enumerated raw values are logged and replaced by the type's default.
use std::fmt::Display;

use arrayvec::ArrayVec;
use tracing::error;

use super::{
    AuraRestrictions, DiminishInfo, Difficulty, EquippedItemRequirement, SpellEffectInfo,
    SpellEffectScaling, SpellId, SpellImplicitTargetInfo, SpellInfo, SpellReagent,
    SpellReagentCurrency, SpellScalingInfo,
};
use crate::config::SpellConfig;
use crate::defines::{
    AuraStateType, AuraType, DispelType, Mechanic, SpellAttr0, SpellAttr1, SpellAttr2, SpellAttr3,
    SpellAttr4, SpellAttr5, SpellAttr6, SpellAttr7, SpellAttr8, SpellAttr9, SpellAttr10,
    SpellAttr11, SpellAttr12, SpellAttr13, SpellAttr14, SpellAuraInterruptFlags,
    SpellCastTargetFlags, SpellCustomAttributes, SpellDmgClass, SpellEffectName, SpellFamilyFlags,
    SpellFamilyName, SpellPreventionType, SpellSchoolMask, SpellSpecificType, Targets,
};
use crate::records::{EffectRecord, SpellInfoLoadHelper, SpellNameEntry};

/// Decodes a raw enumerated value, logging and defaulting unknown ones.
fn decode<T: Default>(spell_id: SpellId, field: &'static str, raw: impl Display, value: Option<T>) -> T {
    value.unwrap_or_else(|| {
        error!(spell_id, field, %raw, "unknown enumerated value, using default");
        T::default()
    })
}

fn stance_bits(words: [u32; 2]) -> u64 {
    u64::from(words[0]) | (u64::from(words[1]) << 32)
}

impl SpellEffectInfo {
    /// Builds one effect slot from its raw row.
    pub(crate) fn from_record(spell_id: SpellId, record: &EffectRecord) -> Self {
        let entry = &record.entry;
        let effect_index = entry.effect_index as usize;

        let effect = decode(spell_id, "effect", entry.effect, SpellEffectName::from_raw(entry.effect));
        let apply_aura_name = decode(
            spell_id,
            "effect_aura",
            entry.effect_aura,
            AuraType::from_raw(entry.effect_aura),
        );
        let mechanic = decode(
            spell_id,
            "effect_mechanic",
            entry.effect_mechanic,
            Mechanic::from_raw(entry.effect_mechanic),
        );
        let [target_a, target_b] = entry.implicit_target.map(|raw| {
            SpellImplicitTargetInfo::new(decode(spell_id, "implicit_target", raw, Targets::from_raw(raw)))
        });
        let [mask_0, mask_1, mask_2, mask_3] = entry.effect_spell_class_mask;

        Self {
            effect_index,
            effect,
            apply_aura_name,
            apply_aura_period: entry.effect_aura_period,
            base_points: entry.effect_base_points,
            real_points_per_level: entry.effect_real_points_per_level,
            points_per_resource: entry.effect_points_per_resource,
            amplitude: entry.effect_amplitude,
            chain_amplitude: entry.effect_chain_amplitude,
            bonus_coefficient: entry.effect_bonus_coefficient,
            bonus_coefficient_from_ap: entry.bonus_coefficient_from_ap,
            pvp_multiplier: entry.pvp_multiplier,
            position_facing: entry.effect_pos_facing,
            scaling: SpellEffectScaling {
                coefficient: entry.coefficient,
                variance: entry.variance,
                resource_coefficient: entry.resource_coefficient,
            },
            misc_value: entry.effect_misc_value[0],
            misc_value_b: entry.effect_misc_value[1],
            mechanic,
            target_a,
            target_b,
            target_a_radius: record.radius[0].clone(),
            target_b_radius: record.radius[1].clone(),
            chain_targets: entry.effect_chain_targets,
            item_type: entry.effect_item_type,
            trigger_spell: entry.effect_trigger_spell,
            spell_class_mask: SpellFamilyFlags::new(mask_0, mask_1, mask_2, mask_3),
            effect_attributes: entry.effect_attributes,
            immunity: None,
        }
    }
}

/// Lays effect rows out in index order, filling gaps with placeholders.
fn effect_slots(
    spell_id: SpellId,
    effects: &[EffectRecord],
) -> ArrayVec<SpellEffectInfo, { SpellConfig::MAX_SPELL_EFFECTS }> {
    let mut slots = ArrayVec::new();

    let count = effects
        .iter()
        .map(|record| record.entry.effect_index as usize + 1)
        .filter(|count| *count <= SpellConfig::MAX_SPELL_EFFECTS)
        .max()
        .unwrap_or(0);
    for index in 0..count {
        slots.push(SpellEffectInfo::placeholder(index));
    }

    for record in effects {
        let index = record.entry.effect_index as usize;
        match slots.get_mut(index) {
            Some(slot) => *slot = SpellEffectInfo::from_record(spell_id, record),
            None => error!(spell_id, index, "effect index beyond slot capacity, dropped"),
        }
    }

    slots
}

impl SpellInfo {
    /// Assembles a spell from its name record, optional sub-records and effect rows.
    pub fn new(
        name: &SpellNameEntry,
        difficulty: Difficulty,
        helper: &SpellInfoLoadHelper,
        effects: &[EffectRecord],
    ) -> Self {
        let id = name.id;
        let mut info = Self::blank(id, difficulty, &name.name);
        info.effects = effect_slots(id, effects);

        if let Some(misc) = &helper.misc {
            let a = misc.attributes;
            info.attributes = SpellAttr0::from_bits_retain(a[0]);
            info.attributes_ex = SpellAttr1::from_bits_retain(a[1]);
            info.attributes_ex2 = SpellAttr2::from_bits_retain(a[2]);
            info.attributes_ex3 = SpellAttr3::from_bits_retain(a[3]);
            info.attributes_ex4 = SpellAttr4::from_bits_retain(a[4]);
            info.attributes_ex5 = SpellAttr5::from_bits_retain(a[5]);
            info.attributes_ex6 = SpellAttr6::from_bits_retain(a[6]);
            info.attributes_ex7 = SpellAttr7::from_bits_retain(a[7]);
            info.attributes_ex8 = SpellAttr8::from_bits_retain(a[8]);
            info.attributes_ex9 = SpellAttr9::from_bits_retain(a[9]);
            info.attributes_ex10 = SpellAttr10::from_bits_retain(a[10]);
            info.attributes_ex11 = SpellAttr11::from_bits_retain(a[11]);
            info.attributes_ex12 = SpellAttr12::from_bits_retain(a[12]);
            info.attributes_ex13 = SpellAttr13::from_bits_retain(a[13]);
            info.attributes_ex14 = SpellAttr14::from_bits_retain(a[14]);
            info.school_mask = SpellSchoolMask::from_bits_retain(misc.school_mask);
            info.speed = misc.speed;
            info.launch_delay = misc.launch_delay;
            info.min_duration = misc.min_duration;
            info.icon_file_data_id = misc.spell_icon_file_data_id;
            info.active_icon_file_data_id = misc.active_icon_file_data_id;
            info.content_tuning_id = misc.content_tuning_id;
        }
        info.casting_time = helper.casting_time.clone();
        info.duration_entry = helper.duration.clone();
        info.range_entry = helper.range.clone();

        if let Some(scaling) = &helper.scaling {
            info.scaling = SpellScalingInfo {
                min_scaling_level: scaling.min_scaling_level,
                max_scaling_level: scaling.max_scaling_level,
                scales_from_item_level: scaling.scales_from_item_level,
            };
        }

        if let Some(options) = &helper.aura_options {
            info.stack_amount = options.cumulative_aura;
            info.proc_flags = options.proc_type_mask;
            info.proc_chance = options.proc_chance;
            info.proc_charges = options.proc_charges;
            info.proc_cooldown = options.spell_proc_cooldown;
            info.proc_category_recovery = options.proc_category_recovery;
        }

        if let Some(r) = &helper.aura_restrictions {
            let state = |field, raw| decode(id, field, raw, AuraStateType::from_raw(raw));
            let aura = |field, raw| decode(id, field, raw, AuraType::from_raw(raw));
            info.aura_restrictions = AuraRestrictions {
                caster_aura_state: state("caster_aura_state", r.caster_aura_state),
                target_aura_state: state("target_aura_state", r.target_aura_state),
                exclude_caster_aura_state: state("exclude_caster_aura_state", r.exclude_caster_aura_state),
                exclude_target_aura_state: state("exclude_target_aura_state", r.exclude_target_aura_state),
                caster_aura_spell: r.caster_aura_spell,
                target_aura_spell: r.target_aura_spell,
                exclude_caster_aura_spell: r.exclude_caster_aura_spell,
                exclude_target_aura_spell: r.exclude_target_aura_spell,
                caster_aura_type: aura("caster_aura_type", r.caster_aura_type),
                target_aura_type: aura("target_aura_type", r.target_aura_type),
                exclude_caster_aura_type: aura("exclude_caster_aura_type", r.exclude_caster_aura_type),
                exclude_target_aura_type: aura("exclude_target_aura_type", r.exclude_target_aura_type),
            };
        }

        if let Some(requirements) = &helper.casting_requirements {
            info.facing_caster_flags = requirements.facing_caster_flags;
            info.required_area_id = requirements.required_areas_id;
            info.requires_spell_focus = requirements.requires_spell_focus;
        }

        if let Some(categories) = &helper.categories {
            info.category_id = categories.category;
            info.dispel = decode(
                id,
                "dispel_type",
                categories.dispel_type,
                DispelType::from_raw(categories.dispel_type),
            );
            info.mechanic = decode(
                id,
                "mechanic",
                categories.mechanic,
                Mechanic::from_raw(categories.mechanic),
            );
            info.dmg_class = decode(
                id,
                "defense_type",
                categories.defense_type,
                SpellDmgClass::from_raw(categories.defense_type),
            );
            info.prevention_type = SpellPreventionType::from_bits_retain(categories.prevention_type);
            info.start_recovery_category = categories.start_recovery_category;
            info.charge_category_id = categories.charge_category;
        }

        if let Some(class_options) = &helper.class_options {
            info.spell_family_name = decode(
                id,
                "spell_class_set",
                class_options.spell_class_set,
                SpellFamilyName::from_raw(class_options.spell_class_set),
            );
            let [w0, w1, w2, w3] = class_options.spell_class_mask;
            info.spell_family_flags = SpellFamilyFlags::new(w0, w1, w2, w3);
            info.modal_next_spell = class_options.modal_next_spell;
        }

        if let Some(cooldowns) = &helper.cooldowns {
            info.recovery_time = cooldowns.recovery_time;
            info.category_recovery_time = cooldowns.category_recovery_time;
            info.start_recovery_time = cooldowns.start_recovery_time;
            info.cooldown_aura_spell_id = cooldowns.aura_spell_id;
        }

        info.equipped_items = helper
            .equipped_items
            .as_ref()
            .filter(|items| items.equipped_item_class >= 0)
            .map(|items| EquippedItemRequirement {
                item_class: items.equipped_item_class,
                sub_class_mask: items.equipped_item_subclass,
                inventory_type_mask: items.equipped_item_inv_types,
            });

        if let Some(interrupts) = &helper.interrupts {
            info.interrupt_flags = interrupts.interrupt_flags;
            info.aura_interrupt_flags =
                SpellAuraInterruptFlags::from_bits_retain(interrupts.aura_interrupt_flags[0]);
            info.aura_interrupt_flags2 = interrupts.aura_interrupt_flags[1];
            info.channel_interrupt_flags =
                SpellAuraInterruptFlags::from_bits_retain(interrupts.channel_interrupt_flags[0]);
            info.channel_interrupt_flags2 = interrupts.channel_interrupt_flags[1];
        }

        info.labels = helper.labels.iter().map(|label| label.label_id).collect();

        if let Some(levels) = &helper.levels {
            info.base_level = levels.base_level;
            info.max_level = levels.max_level;
            info.spell_level = levels.spell_level;
            info.max_passive_aura_level = levels.max_passive_aura_level;
        }

        let mut powers = helper.powers.clone();
        powers.sort_by_key(|power| power.order_index);
        for power in powers {
            if info.power_costs.try_push(power).is_err() {
                error!(spell_id = id, "more power costs than slots, extra entries dropped");
                break;
            }
        }

        if let Some(reagents) = &helper.reagents {
            for (&item, &count) in reagents.reagent.iter().zip(&reagents.reagent_count) {
                if item > 0 {
                    info.reagents.push(SpellReagent { item, count });
                }
            }
        }
        for currency in &helper.reagents_currency {
            let entry = SpellReagentCurrency {
                currency_type: currency.currency_types_id,
                count: currency.currency_count,
            };
            if info.reagent_currencies.try_push(entry).is_err() {
                break;
            }
        }

        if let Some(shapeshift) = &helper.shapeshift {
            info.stances = stance_bits(shapeshift.shapeshift_mask);
            info.stances_not = stance_bits(shapeshift.shapeshift_exclude);
        }

        if let Some(restrictions) = &helper.target_restrictions {
            info.cone_angle = restrictions.cone_degrees;
            info.width = restrictions.width;
            info.targets = SpellCastTargetFlags::from_bits_retain(restrictions.targets);
            info.target_creature_type = restrictions.target_creature_type;
            info.max_affected_targets = restrictions.max_targets;
            info.max_target_level = restrictions.max_target_level;
        }

        if let Some(totems) = &helper.totems {
            info.totems = totems.totem;
            info.totem_categories = totems.required_totem_category_id;
        }

        info.spell_visual = helper
            .visuals
            .iter()
            .filter(|visual| visual.caster_player_condition_id == 0)
            .max_by_key(|visual| visual.priority)
            .map_or(0, |visual| visual.spell_visual_id);

        let mut stages: Vec<_> = helper.empower_stages.iter().collect();
        stages.sort_by_key(|stage| stage.stage);
        info.empower_stage_durations = stages
            .into_iter()
            .take(SpellConfig::MAX_EMPOWER_STAGES)
            .map(|stage| stage.duration_ms)
            .collect();

        info
    }

    /// Synthesizes a spell from effect rows alone; nothing is derived.
    pub fn from_effects(name: &SpellNameEntry, effects: &[EffectRecord]) -> Self {
        let mut info = Self::blank(name.id, super::BASE_DIFFICULTY, &name.name);
        info.effects = effect_slots(name.id, effects);
        info
    }

    fn blank(id: SpellId, difficulty: Difficulty, name: &str) -> Self {
        Self {
            id,
            difficulty,
            name: name.to_owned(),
            category_id: 0,
            start_recovery_category: 0,
            charge_category_id: 0,
            dispel: DispelType::None,
            mechanic: Mechanic::None,
            dmg_class: SpellDmgClass::None,
            prevention_type: SpellPreventionType::empty(),
            school_mask: SpellSchoolMask::empty(),
            attributes: SpellAttr0::empty(),
            attributes_ex: SpellAttr1::empty(),
            attributes_ex2: SpellAttr2::empty(),
            attributes_ex3: SpellAttr3::empty(),
            attributes_ex4: SpellAttr4::empty(),
            attributes_ex5: SpellAttr5::empty(),
            attributes_ex6: SpellAttr6::empty(),
            attributes_ex7: SpellAttr7::empty(),
            attributes_ex8: SpellAttr8::empty(),
            attributes_ex9: SpellAttr9::empty(),
            attributes_ex10: SpellAttr10::empty(),
            attributes_ex11: SpellAttr11::empty(),
            attributes_ex12: SpellAttr12::empty(),
            attributes_ex13: SpellAttr13::empty(),
            attributes_ex14: SpellAttr14::empty(),
            attributes_cu: SpellCustomAttributes::empty(),
            stances: 0,
            stances_not: 0,
            targets: SpellCastTargetFlags::empty(),
            target_creature_type: 0,
            max_affected_targets: 0,
            max_target_level: 0,
            cone_angle: 0.0,
            width: 0.0,
            requires_spell_focus: 0,
            facing_caster_flags: 0,
            aura_restrictions: AuraRestrictions::default(),
            required_area_id: -1,
            casting_time: None,
            duration_entry: None,
            range_entry: None,
            recovery_time: 0,
            category_recovery_time: 0,
            start_recovery_time: 0,
            cooldown_aura_spell_id: 0,
            speed: 0.0,
            launch_delay: 0.0,
            min_duration: 0.0,
            interrupt_flags: 0,
            aura_interrupt_flags: SpellAuraInterruptFlags::empty(),
            aura_interrupt_flags2: 0,
            channel_interrupt_flags: SpellAuraInterruptFlags::empty(),
            channel_interrupt_flags2: 0,
            proc_flags: [0; 2],
            proc_chance: 0,
            proc_charges: 0,
            proc_cooldown: 0,
            proc_category_recovery: 0,
            stack_amount: 0,
            base_level: 0,
            max_level: 0,
            spell_level: 0,
            max_passive_aura_level: 0,
            scaling: SpellScalingInfo::default(),
            content_tuning_id: 0,
            power_costs: ArrayVec::new(),
            reagents: ArrayVec::new(),
            reagent_currencies: ArrayVec::new(),
            totems: [0; SpellConfig::MAX_TOTEMS],
            totem_categories: [0; SpellConfig::MAX_TOTEMS],
            equipped_items: None,
            spell_family_name: SpellFamilyName::Generic,
            spell_family_flags: SpellFamilyFlags::default(),
            modal_next_spell: 0,
            labels: Default::default(),
            spell_visual: 0,
            icon_file_data_id: 0,
            active_icon_file_data_id: 0,
            empower_stage_durations: ArrayVec::new(),
            effects: ArrayVec::new(),
            aura_state: AuraStateType::None,
            spell_specific: SpellSpecificType::Normal,
            explicit_target_mask: SpellCastTargetFlags::empty(),
            negative_effects: 0,
            diminish: DiminishInfo::default(),
            allowed_mechanic_mask: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{
        SpellCategoriesEntry, SpellDurationEntry, SpellEffectEntry, SpellEquippedItemsEntry,
        SpellMiscEntry, SpellShapeshiftEntry,
    };

    fn name(id: SpellId) -> SpellNameEntry {
        SpellNameEntry {
            id,
            name: format!("Spell {id}"),
        }
    }

    fn effect_row(index: u32, effect: SpellEffectName) -> EffectRecord {
        SpellEffectEntry {
            spell_id: 1,
            effect_index: index,
            effect: effect as u32,
            ..Default::default()
        }
        .into()
    }

    #[test]
    fn gaps_between_effects_become_placeholders() {
        let effects = [
            effect_row(0, SpellEffectName::SchoolDamage),
            effect_row(2, SpellEffectName::Heal),
        ];
        let info = SpellInfo::new(&name(1), 0, &SpellInfoLoadHelper::default(), &effects);

        assert_eq!(info.effects().len(), 3);
        for (slot, effect) in info.effects().iter().enumerate() {
            assert_eq!(effect.effect_index, slot);
        }
        assert!(!info.effects()[1].is_effect());
        assert!(info.effects()[2].is_effect_name(SpellEffectName::Heal));
    }

    #[test]
    fn missing_sub_records_leave_defaults() {
        let info = SpellInfo::new(&name(7), 0, &SpellInfoLoadHelper::default(), &[]);

        assert_eq!(info.equipped_items, None);
        assert!(info.targets.is_empty());
        assert_eq!(info.dispel, DispelType::None);
        assert_eq!(info.stances, 0);
        assert!(info.power_costs.is_empty());
        assert_eq!(info.get_duration(), 0);
    }

    #[test]
    fn sub_records_populate_fields() {
        let helper = SpellInfoLoadHelper {
            misc: Some(SpellMiscEntry {
                spell_id: 3,
                attributes: {
                    let mut raw = [0; 15];
                    raw[0] = SpellAttr0::PASSIVE.bits();
                    raw
                },
                school_mask: SpellSchoolMask::FIRE.bits(),
                ..Default::default()
            }),
            categories: Some(SpellCategoriesEntry {
                spell_id: 3,
                dispel_type: DispelType::Magic as i32,
                mechanic: Mechanic::Stun as i32,
                ..Default::default()
            }),
            equipped_items: Some(SpellEquippedItemsEntry {
                spell_id: 3,
                equipped_item_class: 2,
                equipped_item_subclass: 0x10,
                ..Default::default()
            }),
            shapeshift: Some(SpellShapeshiftEntry {
                spell_id: 3,
                shapeshift_mask: [0x1, 0x2],
                ..Default::default()
            }),
            duration: Some(SpellDurationEntry {
                id: 1,
                duration: -1,
                max_duration: -1,
            }),
            ..Default::default()
        };

        let info = SpellInfo::new(&name(3), 0, &helper, &[]);
        assert!(info.is_passive());
        assert_eq!(info.school_mask, SpellSchoolMask::FIRE);
        assert_eq!(info.dispel, DispelType::Magic);
        assert_eq!(info.mechanic, Mechanic::Stun);
        assert_eq!(info.equipped_items.map(|items| items.item_class), Some(2));
        assert_eq!(info.stances, 0x1 | (0x2 << 32));
        assert_eq!(info.get_duration(), -1);
    }

    #[test]
    fn unknown_mechanic_degrades_to_none() {
        let helper = SpellInfoLoadHelper {
            categories: Some(SpellCategoriesEntry {
                spell_id: 4,
                mechanic: 999,
                ..Default::default()
            }),
            ..Default::default()
        };
        let info = SpellInfo::new(&name(4), 0, &helper, &[]);
        assert_eq!(info.mechanic, Mechanic::None);
    }

    #[test]
    fn from_effects_builds_bare_spell() {
        let info = SpellInfo::from_effects(&name(9), &[effect_row(0, SpellEffectName::Heal)]);
        assert_eq!(info.id, 9);
        assert_eq!(info.effects().len(), 1);
        assert!(info.is_positive());
        assert_eq!(info.spell_specific(), SpellSpecificType::Normal);
    }
}
