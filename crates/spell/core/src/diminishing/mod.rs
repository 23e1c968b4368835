//! Diminishing-returns classification.
//!
//! Runs after positivity: only harmful spells are ever diminished.

pub mod table;

use std::collections::BTreeMap;

use tracing::trace;

use crate::config::SpellConfig;
use crate::defines::{AuraType, DiminishingGroup, DiminishingLevel, DiminishingReturnsType};
use crate::info::{Difficulty, DiminishInfo, SpellId, SpellInfo};

impl DiminishingGroup {
    /// Target kinds the group diminishes against.
    pub const fn return_type(self) -> DiminishingReturnsType {
        match self {
            Self::Taunt | Self::Stun => DiminishingReturnsType::All,
            Self::LimitOnly | Self::None => DiminishingReturnsType::None,
            _ => DiminishingReturnsType::Player,
        }
    }

    /// Terminal suppression level.
    pub const fn max_level(self) -> DiminishingLevel {
        match self {
            Self::Taunt => DiminishingLevel::TauntImmune,
            Self::AoeKnockback => DiminishingLevel::Level2,
            _ => DiminishingLevel::Immune,
        }
    }
}

/// Group a spell belongs to, before return type and caps are derived.
pub fn group_for(spell: &SpellInfo) -> DiminishingGroup {
    if spell.is_positive() {
        return DiminishingGroup::None;
    }

    if spell.has_aura(AuraType::ModTaunt) {
        return DiminishingGroup::Taunt;
    }

    table::id_group(spell)
        .or_else(|| table::family_group(spell))
        .unwrap_or(DiminishingGroup::None)
}

/// Full diminishing info for a classified spell.
pub fn diminish_info_for(spell: &SpellInfo, config: &SpellConfig) -> DiminishInfo {
    let group = group_for(spell);
    let duration = table::duration_limit(spell).unwrap_or(config.default_diminish_duration_ms);

    trace!(spell_id = spell.id, %group, duration, "diminishing group");
    DiminishInfo::new(group, group.return_type(), group.max_level(), duration)
}

/// Stores diminishing info on every spell.
pub fn classify_all(spells: &mut BTreeMap<(SpellId, Difficulty), SpellInfo>, config: &SpellConfig) {
    for spell in spells.values_mut() {
        spell.diminish = diminish_info_for(spell, config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defines::{SpellEffectName, SpellFamilyFlags, SpellFamilyName, Targets};
    use crate::records::{EffectRecord, SpellEffectEntry, SpellNameEntry};

    fn harmful(id: SpellId, aura: AuraType) -> SpellInfo {
        let record: EffectRecord = SpellEffectEntry {
            spell_id: id,
            effect: SpellEffectName::ApplyAura as u32,
            effect_aura: aura as u32,
            implicit_target: [Targets::UnitTargetEnemy as u32, 0],
            ..Default::default()
        }
        .into();
        let mut spell = SpellInfo::from_effects(
            &SpellNameEntry {
                id,
                name: String::new(),
            },
            &[record],
        );
        spell.negative_effects = 1;
        spell
    }

    #[test]
    fn positive_spells_are_never_diminished() {
        let spell = SpellInfo::from_effects(
            &SpellNameEntry {
                id: 1,
                name: String::new(),
            },
            &[],
        );
        let info = diminish_info_for(&spell, &SpellConfig::default());
        assert_eq!(info, DiminishInfo::default());
    }

    #[test]
    fn taunt_aura_wins_over_tables() {
        let spell = harmful(20549, AuraType::ModTaunt);
        let info = diminish_info_for(&spell, &SpellConfig::default());
        assert_eq!(info.group, DiminishingGroup::Taunt);
        assert_eq!(info.return_type, DiminishingReturnsType::All);
        assert_eq!(info.max_level, DiminishingLevel::TauntImmune);
    }

    #[test]
    fn id_override_precedes_family() {
        let spell = harmful(20549, AuraType::ModStun);
        assert_eq!(group_for(&spell), DiminishingGroup::Stun);
    }

    #[test]
    fn family_flags_select_group() {
        let mut polymorph = harmful(118, AuraType::Transform);
        polymorph.spell_family_name = SpellFamilyName::Mage;
        polymorph.spell_family_flags = SpellFamilyFlags::new(0x0100_0000, 0, 0, 0);
        let info = diminish_info_for(&polymorph, &SpellConfig::default());
        assert_eq!(info.group, DiminishingGroup::Incapacitate);
        assert_eq!(info.return_type, DiminishingReturnsType::Player);
        assert_eq!(info.duration_limit(), 8000);
    }

    #[test]
    fn excluded_flags_block_match() {
        let mut fists = harmful(120086, AuraType::ModStun);
        fists.spell_family_name = SpellFamilyName::Monk;
        fists.spell_family_flags = SpellFamilyFlags::new(0, 0x0080_0000, 0, 0);
        assert_eq!(group_for(&fists), DiminishingGroup::Stun);

        fists.spell_family_flags = SpellFamilyFlags::new(0, 0x0080_0000, 0x8, 0);
        assert_eq!(group_for(&fists), DiminishingGroup::None);
    }

    #[test]
    fn duration_caps_shorten_pvp_effects() {
        let mut breath = harmful(31661, AuraType::ModConfuse);
        breath.spell_family_name = SpellFamilyName::Mage;
        breath.spell_family_flags = SpellFamilyFlags::new(0x0080_0000, 0, 0, 0);
        assert_eq!(diminish_info_for(&breath, &SpellConfig::default()).duration_limit(), 3000);

        let mut cripple = harmful(170995, AuraType::ModDecreaseSpeed);
        cripple.spell_family_name = SpellFamilyName::Warlock;
        let info = diminish_info_for(&cripple, &SpellConfig::default());
        assert_eq!(info.group, DiminishingGroup::LimitOnly);
        assert_eq!(info.return_type, DiminishingReturnsType::None);
        assert_eq!(info.duration_limit(), 4000);
    }

    #[test]
    fn knockback_group_stops_at_level_two() {
        let spell = harmful(108199, AuraType::Dummy);
        let info = diminish_info_for(&spell, &SpellConfig::default());
        assert_eq!(info.group, DiminishingGroup::AoeKnockback);
        assert_eq!(info.max_level, DiminishingLevel::Level2);
    }

    #[test]
    fn unmatched_spell_uses_configured_cap() {
        let spell = harmful(999_999, AuraType::ModRoot);
        let config = SpellConfig::default().with_default_diminish_duration(5000);
        let info = diminish_info_for(&spell, &config);
        assert_eq!(info.group, DiminishingGroup::None);
        assert_eq!(info.duration_limit(), 5000);
    }
}
