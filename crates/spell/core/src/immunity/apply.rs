use tracing::debug;

use crate::defines::{
    AuraType, Mechanic, SpellAttr0, SpellAttr1, SpellAttr2, SpellAuraInterruptFlags, SpellEffectName,
    SpellSchoolMask,
};
use crate::env::{AppliedAura, ImmunityTarget, SpellImmunity};
use crate::info::{SpellEffectInfo, SpellInfo};

impl SpellInfo {
    /// Grants or revokes every immunity `effect` carries on `target`.
    ///
    /// When granting a spell flagged to purge, auras the new immunity covers
    /// are removed, except auras immune to immunities and auras of this
    /// spell.
    pub fn apply_all_spell_immunities_to(
        &self,
        target: &mut dyn ImmunityTarget,
        effect: &SpellEffectInfo,
        apply: bool,
    ) {
        let Some(info) = effect.immunity.as_ref() else {
            return;
        };
        let purge = apply && self.has_attribute(SpellAttr1::IMMUNITY_PURGES_EFFECT);
        let mut removed = 0usize;

        let school = info.school_immune_mask;
        if !school.is_empty() {
            target.apply_spell_immune(self.id, SpellImmunity::School(school), apply);
            if purge {
                let positive = self.is_positive();
                removed += self.purge(target, |aura| {
                    aura.school_mask.intersects(school) && aura.is_positive != positive && !aura.is_passive
                });
            }
            if apply && school.contains(SpellSchoolMask::NORMAL) {
                target.remove_auras_with_interrupt_flags(SpellAuraInterruptFlags::INVULNERABILITY_BUFF);
            }
        }

        let harmful_school = info.apply_harmful_aura_immune_mask;
        if !harmful_school.is_empty() {
            target.apply_spell_immune(self.id, SpellImmunity::ApplyHarmfulAuraSchool(harmful_school), apply);
            if purge {
                removed += self.purge(target, |aura| {
                    !aura.is_positive && aura.school_mask.intersects(harmful_school)
                });
            }
        }

        let mechanics = info.mechanic_immune_mask;
        if mechanics != 0 {
            for mechanic in (1..Mechanic::COUNT).filter_map(|i| Mechanic::from_raw(i as i32)) {
                if mechanics & mechanic.mask() != 0 {
                    target.apply_spell_immune(self.id, SpellImmunity::Mechanic(mechanic), apply);
                }
            }
            if purge {
                removed += self.purge(target, |aura| aura.mechanic_mask & mechanics != 0);
            }
        }

        if let Some(dispel) = info.dispel_immune {
            target.apply_spell_immune(self.id, SpellImmunity::Dispel(dispel), apply);
            if purge {
                removed += self.purge(target, |aura| aura.dispel == dispel);
            }
        }

        let damage = info.damage_school_mask;
        if !damage.is_empty() {
            target.apply_spell_immune(self.id, SpellImmunity::Damage(damage), apply);
            if apply && damage.contains(SpellSchoolMask::NORMAL) {
                target.remove_auras_with_interrupt_flags(SpellAuraInterruptFlags::INVULNERABILITY_BUFF);
            }
        }

        for aura_type in &info.aura_type_immune {
            target.apply_spell_immune(self.id, SpellImmunity::State(*aura_type), apply);
            if purge {
                removed += self.purge(target, |aura| aura.aura_types.contains(aura_type));
            }
        }

        for effect_name in &info.spell_effect_immune {
            target.apply_spell_immune(self.id, SpellImmunity::Effect(*effect_name), apply);
        }

        if removed > 0 {
            debug!(spell_id = self.id, removed, "immunity purged auras");
        }
    }

    fn purge(&self, target: &mut dyn ImmunityTarget, mut covered: impl FnMut(&AppliedAura) -> bool) -> usize {
        let own_id = self.id;
        target.remove_applied_auras(&mut |aura| {
            !aura.no_immunities && aura.spell_id != own_id && covered(aura)
        })
    }

    /// Whether any effect of this spell makes its holder immune to `aura_spell`.
    pub fn can_spell_provide_immunity_against_aura(&self, aura_spell: &SpellInfo) -> bool {
        self.effects().iter().filter(|e| e.is_effect()).any(|effect| {
            let Some(info) = effect.immunity.as_ref() else {
                return false;
            };

            if aura_spell.school_mask.intersects(info.school_immune_mask) {
                return true;
            }
            if info.mechanic_immune_mask & aura_spell.mechanic.mask() != 0 {
                return true;
            }
            if info.dispel_immune.is_some_and(|d| d == aura_spell.dispel) {
                return true;
            }

            let mut aura_effects = aura_spell.effects().iter().filter(|e| e.is_aura()).peekable();
            aura_effects.peek().is_some()
                && aura_effects.all(|aura_effect| {
                    if aura_effect.mechanic != Mechanic::None
                        && info.mechanic_immune_mask & aura_effect.mechanic.mask() == 0
                    {
                        return false;
                    }
                    info.aura_type_immune.contains(&aura_effect.apply_aura_name)
                        || (!aura_spell.is_positive_effect(aura_effect.effect_index)
                            && aura_spell.school_mask.intersects(info.apply_harmful_aura_immune_mask))
                })
        })
    }

    /// Whether this spell's immunities strip the given effect of `aura_spell`.
    pub fn spell_cancels_aura_effect(&self, aura_spell: &SpellInfo, aura_effect: &SpellEffectInfo) -> bool {
        if !self.has_attribute(SpellAttr1::IMMUNITY_PURGES_EFFECT)
            || aura_spell.has_attribute(SpellAttr0::NO_IMMUNITIES)
        {
            return false;
        }

        self.effects()
            .iter()
            .filter(|e| e.is_effect_name(SpellEffectName::ApplyAura))
            .any(|effect| {
                let misc = effect.misc_value;
                match effect.apply_aura_name {
                    AuraType::StateImmunity => misc == aura_effect.apply_aura_name as i32,
                    AuraType::SchoolImmunity | AuraType::ModImmuneAuraApplySchool => {
                        !aura_spell.has_attribute(SpellAttr2::NO_SCHOOL_IMMUNITIES)
                            && aura_spell.school_mask.bits() & misc as u32 != 0
                    }
                    AuraType::DispelImmunity => misc == aura_spell.dispel as i32,
                    AuraType::MechanicImmunity => {
                        misc == aura_spell.mechanic as i32 || misc == aura_effect.mechanic as i32
                    }
                    _ => false,
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defines::{DispelType, Targets};
    use crate::info::SpellId;
    use crate::records::{EffectRecord, SpellEffectEntry, SpellNameEntry};

    #[derive(Default)]
    struct Target {
        granted: Vec<(SpellId, SpellImmunity, bool)>,
        auras: Vec<AppliedAura>,
        interrupted: Vec<SpellAuraInterruptFlags>,
    }

    impl ImmunityTarget for Target {
        fn apply_spell_immune(&mut self, spell_id: SpellId, immunity: SpellImmunity, apply: bool) {
            self.granted.push((spell_id, immunity, apply));
        }

        fn remove_applied_auras(&mut self, predicate: &mut dyn FnMut(&AppliedAura) -> bool) -> usize {
            let before = self.auras.len();
            self.auras.retain(|aura| !predicate(aura));
            before - self.auras.len()
        }

        fn remove_auras_with_interrupt_flags(&mut self, flags: SpellAuraInterruptFlags) {
            self.interrupted.push(flags);
        }
    }

    fn immunity_spell(id: SpellId, aura: AuraType, misc: i32, purges: bool) -> SpellInfo {
        let record: EffectRecord = SpellEffectEntry {
            spell_id: id,
            effect: SpellEffectName::ApplyAura as u32,
            effect_aura: aura as u32,
            effect_misc_value: [misc, 0],
            implicit_target: [Targets::UnitCaster as u32, 0],
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
        if purges {
            spell.attributes_ex |= SpellAttr1::IMMUNITY_PURGES_EFFECT;
        }
        spell.load_immunity_info();
        spell
    }

    fn applied(spell_id: SpellId, dispel: DispelType) -> AppliedAura {
        AppliedAura {
            spell_id,
            dispel,
            ..Default::default()
        }
    }

    #[test]
    fn dispel_immunity_purges_matching_auras() {
        let spell = immunity_spell(100, AuraType::DispelImmunity, DispelType::Poison as i32, true);
        let mut target = Target {
            auras: vec![
                applied(1, DispelType::Poison),
                applied(2, DispelType::Magic),
                applied(100, DispelType::Poison),
                AppliedAura {
                    no_immunities: true,
                    ..applied(3, DispelType::Poison)
                },
            ],
            ..Default::default()
        };

        spell.apply_all_spell_immunities_to(&mut target, &spell.effects()[0], true);

        assert_eq!(target.granted, vec![(100, SpellImmunity::Dispel(DispelType::Poison), true)]);
        let left: Vec<SpellId> = target.auras.iter().map(|a| a.spell_id).collect();
        assert_eq!(left, vec![2, 100, 3]);
    }

    #[test]
    fn revoking_never_purges() {
        let spell = immunity_spell(101, AuraType::DispelImmunity, DispelType::Poison as i32, true);
        let mut target = Target {
            auras: vec![applied(1, DispelType::Poison)],
            ..Default::default()
        };

        spell.apply_all_spell_immunities_to(&mut target, &spell.effects()[0], false);

        assert_eq!(target.granted, vec![(101, SpellImmunity::Dispel(DispelType::Poison), false)]);
        assert_eq!(target.auras.len(), 1);
    }

    #[test]
    fn without_purge_flag_auras_stay() {
        let spell = immunity_spell(102, AuraType::DispelImmunity, DispelType::Poison as i32, false);
        let mut target = Target {
            auras: vec![applied(1, DispelType::Poison)],
            ..Default::default()
        };
        spell.apply_all_spell_immunities_to(&mut target, &spell.effects()[0], true);
        assert_eq!(target.auras.len(), 1);
    }

    #[test]
    fn physical_school_immunity_breaks_invulnerability_buffs() {
        let spell = immunity_spell(103, AuraType::SchoolImmunity, SpellSchoolMask::NORMAL.bits() as i32, false);
        let mut target = Target::default();
        spell.apply_all_spell_immunities_to(&mut target, &spell.effects()[0], true);
        assert_eq!(target.interrupted, vec![SpellAuraInterruptFlags::INVULNERABILITY_BUFF]);
    }

    #[test]
    fn state_immunity_purges_by_aura_type() {
        let spell = immunity_spell(104, AuraType::StateImmunity, AuraType::ModStun as i32, true);
        let mut target = Target {
            auras: vec![AppliedAura {
                spell_id: 5,
                aura_types: vec![AuraType::ModStun],
                ..Default::default()
            }],
            ..Default::default()
        };
        spell.apply_all_spell_immunities_to(&mut target, &spell.effects()[0], true);
        assert!(target.auras.is_empty());
    }

    #[test]
    fn immunity_against_aura_spell() {
        let shield = immunity_spell(105, AuraType::StateImmunity, AuraType::ModStun as i32, true);
        let stun = immunity_spell(6, AuraType::ModStun, 0, false);
        let root = immunity_spell(7, AuraType::ModRoot, 0, false);

        assert!(shield.can_spell_provide_immunity_against_aura(&stun));
        assert!(!shield.can_spell_provide_immunity_against_aura(&root));

        assert!(shield.spell_cancels_aura_effect(&stun, &stun.effects()[0]));
        assert!(!shield.spell_cancels_aura_effect(&root, &root.effects()[0]));
    }
}
