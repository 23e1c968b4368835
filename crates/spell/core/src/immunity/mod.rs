//! Immunity derivation and application.
//!
//! [`resolve_all`] fills each effect's [`ImmunityInfo`] and the spell's
//! allowed-mechanic mask once at load. [`apply`] writes those immunities
//! onto a live target.

mod apply;
pub mod table;

use std::collections::BTreeMap;

use tracing::{error, trace};

use crate::defines::{AuraType, DispelType, Mechanic, SpellAttr5, SpellEffectName, SpellSchoolMask};
use crate::info::{Difficulty, ImmunityInfo, SpellEffectInfo, SpellId, SpellInfo};

/// Runs the immunity pass over every spell.
pub fn resolve_all(spells: &mut BTreeMap<(SpellId, Difficulty), SpellInfo>) {
    for spell in spells.values_mut() {
        spell.load_immunity_info();
    }
}

impl SpellInfo {
    pub(crate) fn load_immunity_info(&mut self) {
        let spell_id = self.id;
        let mut allowed = 0u64;

        for effect in self.effects.iter_mut() {
            let info = effect_immunity(spell_id, effect);
            allowed |= info.mechanic_immune_mask;
            effect.immunity = (!info.is_empty()).then_some(info);
        }

        allowed |= self.mechanic_allowances();
        self.allowed_mechanic_mask = allowed;
    }

    /// Extra mechanics the spell may be cast through.
    fn mechanic_allowances(&self) -> u64 {
        let mut allowed = 0u64;

        if self.has_attribute(SpellAttr5::ALLOW_WHILE_STUNNED) {
            if table::STUN_ALLOWANCE_EXTENDED.contains(&self.id) {
                allowed |= Mechanic::Stun.mask()
                    | Mechanic::Freeze.mask()
                    | Mechanic::Knockout.mask()
                    | Mechanic::Sleep.mask();
            } else if !table::STUN_ALLOWANCE_DENIED.contains(&self.id) {
                allowed |= Mechanic::Stun.mask();
            }
        }

        if self.has_attribute(SpellAttr5::ALLOW_WHILE_CONFUSED) {
            allowed |= Mechanic::Disoriented.mask();
        }

        if self.has_attribute(SpellAttr5::ALLOW_WHILE_FLEEING) {
            allowed |= Mechanic::Fear.mask();
            if table::FLEE_ALLOWANCE_EXTENDED.contains(&self.id) {
                allowed |= Mechanic::Horror.mask();
            }
        }

        allowed
    }

    /// Mechanics this spell can still be cast through.
    pub fn get_allowed_mechanic_mask(&self) -> u64 {
        self.allowed_mechanic_mask
    }
}

fn effect_immunity(spell_id: SpellId, effect: &SpellEffectInfo) -> ImmunityInfo {
    let mut info = ImmunityInfo::default();
    if !effect.is_aura() {
        return info;
    }

    let misc = effect.misc_value;
    // Masks are stored as raw unsigned bits.
    let misc_bits = misc as u32;

    match effect.apply_aura_name {
        AuraType::MechanicImmunityMask => {
            let mut matched = false;
            for bundle in table::mechanic_mask_bundles(spell_id, misc, effect.calc_value()) {
                matched = true;
                info.mechanic_immune_mask |= bundle.mechanics;
                info.aura_type_immune.extend(bundle.auras.iter().copied());
                info.spell_effect_immune.extend(bundle.effects.iter().copied());
            }

            if info.aura_type_immune.is_empty() {
                for (bit, auras) in table::MECHANIC_MASK_BITS {
                    if misc_bits & (1 << bit) != 0 {
                        info.aura_type_immune.extend(auras.iter().copied());
                    }
                }
            }
            trace!(spell_id, misc, matched, "mechanic immunity mask expanded");
        }
        AuraType::MechanicImmunity => {
            match table::MECHANIC_IMMUNITY_OVERRIDES
                .iter()
                .find(|(id, _, _)| *id == spell_id)
            {
                Some((_, mechanics, auras)) => {
                    info.mechanic_immune_mask |= mechanics;
                    info.aura_type_immune.extend(auras.iter().copied());
                }
                None if misc >= 1 && (misc as usize) < u64::BITS as usize => {
                    info.mechanic_immune_mask |= 1u64 << misc;
                }
                None => {}
            }
        }
        AuraType::EffectImmunity => match SpellEffectName::from_raw(misc_bits) {
            Some(name) => {
                info.spell_effect_immune.insert(name);
            }
            None => error!(spell_id, misc, "unknown effect in effect immunity"),
        },
        AuraType::StateImmunity => match AuraType::from_raw(misc_bits) {
            Some(aura) => {
                info.aura_type_immune.insert(aura);
            }
            None => error!(spell_id, misc, "unknown aura in state immunity"),
        },
        AuraType::SchoolImmunity => {
            info.school_immune_mask |= SpellSchoolMask::from_bits_retain(misc_bits);
        }
        AuraType::ModImmuneAuraApplySchool => {
            info.apply_harmful_aura_immune_mask |= SpellSchoolMask::from_bits_retain(misc_bits);
        }
        AuraType::DamageImmunity => {
            info.damage_school_mask |= SpellSchoolMask::from_bits_retain(misc_bits);
        }
        AuraType::DispelImmunity => match DispelType::from_raw(misc) {
            Some(DispelType::None) => {}
            Some(dispel) => info.dispel_immune = Some(dispel),
            None => error!(spell_id, misc, "unknown dispel type in dispel immunity"),
        },
        _ => {}
    }

    info
}
