//! Raw table rows as supplied by the data collaborator.
//!
//! Fields keep the source encoding (plain integers and floats). Conversion
//! into typed values happens in the assembler.

use crate::info::{Difficulty, SpellId};

macro_rules! raw_row {
    ($(#[$meta:meta])* pub struct $name:ident { $($(#[$fmeta:meta])* pub $field:ident : $ty:ty),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(default))]
        pub struct $name {
            $($(#[$fmeta])* pub $field: $ty),*
        }
    };
}

raw_row! {
    /// Identity row; every spell has exactly one.
    pub struct SpellNameEntry {
        pub id: SpellId,
        pub name: String,
    }
}

raw_row! {
    pub struct SpellMiscEntry {
        pub spell_id: SpellId,
        pub difficulty_id: Difficulty,
        /// Attribute words 0..=14 in order.
        pub attributes: [u32; 15],
        pub casting_time_index: u32,
        pub duration_index: u32,
        pub range_index: u32,
        pub school_mask: u32,
        pub speed: f32,
        pub launch_delay: f32,
        pub min_duration: f32,
        pub spell_icon_file_data_id: u32,
        pub active_icon_file_data_id: u32,
        pub content_tuning_id: u32,
    }
}

raw_row! {
    pub struct SpellScalingEntry {
        pub spell_id: SpellId,
        pub min_scaling_level: u32,
        pub max_scaling_level: u32,
        pub scales_from_item_level: u32,
    }
}

raw_row! {
    pub struct SpellAuraOptionsEntry {
        pub spell_id: SpellId,
        pub difficulty_id: Difficulty,
        pub cumulative_aura: u32,
        pub proc_category_recovery: i32,
        pub proc_chance: u32,
        pub proc_charges: i32,
        pub spell_proc_cooldown: u32,
        pub proc_type_mask: [i32; 2],
    }
}

raw_row! {
    pub struct SpellAuraRestrictionsEntry {
        pub spell_id: SpellId,
        pub difficulty_id: Difficulty,
        pub caster_aura_state: u32,
        pub target_aura_state: u32,
        pub exclude_caster_aura_state: u32,
        pub exclude_target_aura_state: u32,
        pub caster_aura_spell: SpellId,
        pub target_aura_spell: SpellId,
        pub exclude_caster_aura_spell: SpellId,
        pub exclude_target_aura_spell: SpellId,
        pub caster_aura_type: u32,
        pub target_aura_type: u32,
        pub exclude_caster_aura_type: u32,
        pub exclude_target_aura_type: u32,
    }
}

raw_row! {
    pub struct SpellCastingRequirementsEntry {
        pub spell_id: SpellId,
        pub facing_caster_flags: u32,
        pub min_faction_id: u32,
        pub min_reputation: i32,
        pub required_areas_id: i32,
        pub required_aura_vision: u32,
        pub requires_spell_focus: u32,
    }
}

raw_row! {
    pub struct SpellCategoriesEntry {
        pub spell_id: SpellId,
        pub difficulty_id: Difficulty,
        pub category: u32,
        pub defense_type: u32,
        pub dispel_type: i32,
        pub mechanic: i32,
        pub prevention_type: u32,
        pub start_recovery_category: u32,
        pub charge_category: u32,
    }
}

raw_row! {
    pub struct SpellClassOptionsEntry {
        pub spell_id: SpellId,
        pub modal_next_spell: SpellId,
        pub spell_class_set: u32,
        pub spell_class_mask: [u32; 4],
    }
}

raw_row! {
    pub struct SpellCooldownsEntry {
        pub spell_id: SpellId,
        pub difficulty_id: Difficulty,
        pub category_recovery_time: u32,
        pub recovery_time: u32,
        pub start_recovery_time: u32,
        pub aura_spell_id: SpellId,
    }
}

raw_row! {
    pub struct SpellEquippedItemsEntry {
        pub spell_id: SpellId,
        /// `-1` means no item class restriction.
        pub equipped_item_class: i32,
        pub equipped_item_inv_types: i32,
        pub equipped_item_subclass: i32,
    }
}

raw_row! {
    pub struct SpellInterruptsEntry {
        pub spell_id: SpellId,
        pub difficulty_id: Difficulty,
        pub interrupt_flags: u32,
        pub aura_interrupt_flags: [u32; 2],
        pub channel_interrupt_flags: [u32; 2],
    }
}

raw_row! {
    pub struct SpellLabelEntry {
        pub spell_id: SpellId,
        pub label_id: u32,
    }
}

raw_row! {
    pub struct SpellLevelsEntry {
        pub spell_id: SpellId,
        pub difficulty_id: Difficulty,
        pub base_level: u32,
        pub max_level: u32,
        pub spell_level: u32,
        pub max_passive_aura_level: u32,
    }
}

raw_row! {
    /// One declared resource cost of a spell.
    pub struct SpellPowerEntry {
        pub id: u32,
        pub spell_id: SpellId,
        pub difficulty_id: Difficulty,
        /// Slot of this cost; keys the power-cost spell modifiers.
        pub order_index: u8,
        pub mana_cost: i32,
        pub mana_cost_per_level: i32,
        pub mana_per_second: i32,
        pub power_cost_pct: f32,
        pub power_cost_max_pct: f32,
        pub optional_cost_pct: f32,
        pub power_pct_per_second: f32,
        pub power_type: i32,
        pub required_aura_spell_id: SpellId,
        pub optional_cost: u32,
    }
}

raw_row! {
    pub struct SpellReagentsEntry {
        pub spell_id: SpellId,
        pub reagent: [i32; 8],
        pub reagent_count: [i32; 8],
    }
}

raw_row! {
    pub struct SpellReagentsCurrencyEntry {
        pub spell_id: SpellId,
        pub currency_types_id: u32,
        pub currency_count: u32,
    }
}

raw_row! {
    pub struct SpellShapeshiftEntry {
        pub spell_id: SpellId,
        pub shapeshift_exclude: [u32; 2],
        pub shapeshift_mask: [u32; 2],
        pub stance_bar_order: i32,
    }
}

raw_row! {
    pub struct SpellTargetRestrictionsEntry {
        pub spell_id: SpellId,
        pub difficulty_id: Difficulty,
        pub cone_degrees: f32,
        pub max_targets: u32,
        pub max_target_level: u32,
        pub target_creature_type: u32,
        pub targets: u32,
        pub width: f32,
    }
}

raw_row! {
    pub struct SpellTotemsEntry {
        pub spell_id: SpellId,
        pub required_totem_category_id: [u32; 2],
        pub totem: [u32; 2],
    }
}

raw_row! {
    pub struct SpellXSpellVisualEntry {
        pub spell_id: SpellId,
        pub difficulty_id: Difficulty,
        pub spell_visual_id: u32,
        pub priority: i32,
        pub caster_player_condition_id: u32,
    }
}

raw_row! {
    pub struct SpellEmpowerStageEntry {
        pub spell_id: SpellId,
        pub stage: u32,
        pub duration_ms: u32,
    }
}

raw_row! {
    /// One effect slot definition.
    pub struct SpellEffectEntry {
        pub spell_id: SpellId,
        pub difficulty_id: Difficulty,
        pub effect_index: u32,
        pub effect: u32,
        pub effect_aura: u32,
        pub effect_amplitude: f32,
        pub effect_attributes: u32,
        pub effect_aura_period: u32,
        pub effect_bonus_coefficient: f32,
        pub effect_chain_amplitude: f32,
        pub effect_chain_targets: u32,
        pub effect_item_type: u32,
        pub effect_mechanic: i32,
        pub effect_points_per_resource: f32,
        pub effect_pos_facing: f32,
        pub effect_real_points_per_level: f32,
        pub effect_trigger_spell: SpellId,
        pub bonus_coefficient_from_ap: f32,
        pub pvp_multiplier: f32,
        pub coefficient: f32,
        pub variance: f32,
        pub resource_coefficient: f32,
        pub group_size_base_points_coefficient: f32,
        pub effect_base_points: f32,
        pub effect_misc_value: [i32; 2],
        pub effect_radius_index: [u32; 2],
        pub effect_spell_class_mask: [u32; 4],
        pub implicit_target: [u32; 2],
    }
}

// ============================================================================
// Referenced lookup tables
// ============================================================================

raw_row! {
    pub struct SpellDurationEntry {
        pub id: u32,
        /// `-1` encodes an infinite duration.
        pub duration: i32,
        pub max_duration: i32,
    }
}

raw_row! {
    pub struct SpellCastTimesEntry {
        pub id: u32,
        pub base: i32,
        pub minimum: i32,
    }
}

raw_row! {
    pub struct SpellRangeEntry {
        pub id: u32,
        /// Index 0 is the hostile range, index 1 the friendly range.
        pub range_min: [f32; 2],
        pub range_max: [f32; 2],
        pub flags: u32,
    }
}

raw_row! {
    pub struct SpellRadiusEntry {
        pub id: u32,
        pub radius: f32,
        pub radius_per_level: f32,
        pub radius_min: f32,
        pub radius_max: f32,
    }
}
