//! Local positivity rules for one effect slot.
//!
//! [`evaluate`] either decides the slot outright or asks the walker to
//! classify the effects of a triggered spell first.

use super::{Verdict, exceptions};
use crate::defines::{
    AuraType, DispelType, Mechanic, SpellAttr0, SpellAttr1, SpellAttr4, SpellEffectName,
    SpellModOp,
};
use crate::info::{SpellEffectInfo, SpellId, SpellInfo};

/// Outcome of the local rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Step {
    Decided(Verdict),
    /// Classify the effects of `trigger`; any negative one makes this slot
    /// negative, otherwise the slot takes `fallback`.
    Descend {
        trigger: SpellId,
        /// Only triggered effects aimed at non-enemies count.
        positive_targets_only: bool,
        fallback: Verdict,
    },
}

/// Effect aims at no enemy. Blank slots count as positive.
pub(super) fn is_positive_target(effect: &SpellEffectInfo) -> bool {
    !effect.is_effect() || !effect.targets_enemy()
}

/// Attribute short-circuits that run before the slot is marked visited.
pub(super) fn attribute_verdict(spell: &SpellInfo) -> Option<Verdict> {
    if spell.has_attribute(SpellAttr0::PASSIVE) {
        return Some(Verdict::Positive);
    }
    if spell.has_attribute(SpellAttr0::AURA_IS_DEBUFF) {
        return Some(Verdict::Negative);
    }
    if spell.has_attribute(SpellAttr4::AURA_IS_BUFF) {
        return Some(Verdict::Positive);
    }
    None
}

fn negative_if(condition: bool) -> Option<Verdict> {
    condition.then_some(Verdict::Negative)
}

pub(super) fn evaluate(spell: &SpellInfo, effect: &SpellEffectInfo) -> Step {
    if let Some(verdict) = exceptions::exception_for(spell) {
        return Step::Decided(verdict);
    }

    if spell.mechanic == Mechanic::ImmuneShield {
        return Step::Decided(Verdict::Positive);
    }

    if spell.has_attribute(SpellAttr1::AURA_UNIQUE)
        && spell.effects().iter().any(|other| !is_positive_target(other))
    {
        return Step::Decided(Verdict::Negative);
    }

    if let Some(verdict) = whole_spell_verdict(spell, effect) {
        return Step::Decided(verdict);
    }

    let bp = effect.calc_value();
    let positive_target = is_positive_target(effect);

    if let Some(verdict) = effect_verdict(effect, bp, positive_target) {
        return Step::Decided(verdict);
    }

    if effect.is_aura() {
        match aura_verdict(spell, effect, bp, positive_target) {
            AuraRule::Decided(verdict) => return Step::Decided(verdict),
            AuraRule::Descend(trigger) => {
                return Step::Descend {
                    trigger,
                    positive_targets_only: true,
                    fallback: Verdict::Positive,
                };
            }
            AuraRule::Continue => {}
        }
    }

    if effect.apply_aura_name == AuraType::None && effect.trigger_spell != 0 {
        return Step::Descend {
            trigger: effect.trigger_spell,
            positive_targets_only: false,
            fallback: Verdict::Positive,
        };
    }

    Step::Decided(Verdict::Positive)
}

/// Effects and auras anywhere in the spell that decide every slot.
fn whole_spell_verdict(spell: &SpellInfo, effect: &SpellEffectInfo) -> Option<Verdict> {
    for other in spell.effects() {
        match other.effect {
            SpellEffectName::Heal
            | SpellEffectName::LearnSpell
            | SpellEffectName::SkillStep
            | SpellEffectName::HealPct => return Some(Verdict::Positive),
            // An instakill on the same targets in another slot, not the slot itself.
            SpellEffectName::Instakill
                if other.effect_index != effect.effect_index
                    && other.target_a.target() == effect.target_a.target()
                    && other.target_b.target() == effect.target_b.target() =>
            {
                return Some(Verdict::Negative);
            }
            _ => {}
        }

        if other.is_aura() {
            match other.apply_aura_name {
                AuraType::ModStealth | AuraType::ModUnattackable => return Some(Verdict::Positive),
                AuraType::SchoolHealAbsorb
                | AuraType::Empathy
                | AuraType::SpellMagnet
                | AuraType::ModSpellDamageFromCaster
                | AuraType::PreventsFleeing => return Some(Verdict::Negative),
                _ => {}
            }
        }
    }
    None
}

fn effect_verdict(effect: &SpellEffectInfo, bp: i32, positive_target: bool) -> Option<Verdict> {
    use SpellEffectName as E;

    match effect.effect {
        E::WeaponDamage
        | E::WeaponDamageNoSchool
        | E::NormalizedWeaponDmg
        | E::WeaponPercentDamage
        | E::SchoolDamage
        | E::EnvironmentalDamage
        | E::HealthLeech
        | E::Instakill
        | E::PowerDrain
        | E::StealBeneficialBuff
        | E::InterruptCast
        | E::Pickpocket
        | E::GameObjectDamage
        | E::DurabilityDamage
        | E::DurabilityDamagePct
        | E::ApplyAreaAuraEnemy
        | E::TameCreature
        | E::Distract => Some(Verdict::Negative),
        E::Energize | E::EnergizePct | E::HealPct | E::HealMaxHealth | E::HealMechanical => {
            Some(Verdict::Positive)
        }
        E::KnockBack | E::Charge | E::PersistentAreaAura | E::AttackMe | E::PowerBurn => {
            negative_if(!positive_target)
        }
        E::Dispel => {
            let harmful_dispel = matches!(
                DispelType::from_raw(effect.misc_value),
                Some(DispelType::Stealth | DispelType::Invisibility | DispelType::Enrage)
            );
            negative_if(harmful_dispel || !positive_target)
        }
        E::DispelMechanic => negative_if(!positive_target && is_protective_mechanic(effect.misc_value)),
        E::Threat | E::ModifyThreatPercent => negative_if(!positive_target && bp > 0),
        _ => None,
    }
}

/// Mechanics whose removal hurts the unit losing them.
fn is_protective_mechanic(raw: i32) -> bool {
    matches!(
        Mechanic::from_raw(raw),
        Some(Mechanic::Bandage | Mechanic::Shield | Mechanic::Mount | Mechanic::Invulnerability)
    )
}

enum AuraRule {
    Decided(Verdict),
    Descend(SpellId),
    Continue,
}

impl From<Option<Verdict>> for AuraRule {
    fn from(verdict: Option<Verdict>) -> Self {
        verdict.map_or(Self::Continue, Self::Decided)
    }
}

fn aura_verdict(spell: &SpellInfo, effect: &SpellEffectInfo, bp: i32, positive_target: bool) -> AuraRule {
    use AuraType as A;

    match effect.apply_aura_name {
        // Negative when the magnitude is negative.
        A::ModStat
        | A::ModSkill
        | A::ModSkill2
        | A::ModDodgePercent
        | A::ModHealingDone
        | A::ModDamageDoneCreature
        | A::ObsModHealth
        | A::ObsModPower
        | A::ModCritPct
        | A::ModHitChance
        | A::ModSpellHitChance
        | A::ModSpellCritChance
        | A::ModRangedHaste
        | A::ModMeleeRangedHaste
        | A::ModCastingSpeedNotStack
        | A::HasteSpells
        | A::ModRecoveryRateBySpellLabel
        | A::ModDetectRange
        | A::ModIncreaseHealthPercent
        | A::ModTotalStatPercentage
        | A::ModIncreaseSwimSpeed
        | A::ModPercentStat
        | A::ModIncreaseHealth
        | A::ModSpeedAlways => negative_if(bp < 0 || effect.real_points_per_level < 0.0).into(),

        // Positive only on non-enemies with a non-negative magnitude.
        A::ModAttackSpeed
        | A::ModMeleeHaste
        | A::ModDamageDone
        | A::ModResistance
        | A::ModResistancePct
        | A::ModRating
        | A::ModAttackPower
        | A::ModRangedAttackPower
        | A::ModDamagePercentDone
        | A::ModSpeedSlowAll
        | A::MeleeSlow
        | A::ModAttackPowerPct
        | A::ModHealingDonePercent
        | A::ModHealingPct => negative_if(!positive_target || bp < 0).into(),

        // Negative when the magnitude is positive.
        A::ModDamageTaken
        | A::ModMeleeDamageTaken
        | A::ModMeleeDamageTakenPct
        | A::ModPowerCostSchool
        | A::ModPowerCostSchoolPct
        | A::MechanicDurationMod => negative_if(bp > 0).into(),

        A::ModDamagePercentTaken => negative_if(!positive_target && bp > 0).into(),
        A::ModHealthRegenPercent => negative_if(!positive_target && bp < 0).into(),

        A::AddTargetTrigger => AuraRule::Decided(Verdict::Positive),

        A::PeriodicTriggerSpell | A::PeriodicTriggerSpellWithValue => {
            AuraRule::Descend(effect.trigger_spell)
        }

        // A stun is a debuff when it is the spell's only effect.
        A::ModStun if is_sole_effect(spell, effect) => AuraRule::Decided(Verdict::Negative),

        // Decided by target; rechecked against siblings after every slot is known.
        A::PeriodicTriggerSpellFromClient
        | A::ModStun
        | A::Transform
        | A::ModDecreaseSpeed
        | A::ModFear
        | A::ModTaunt
        | A::ModPacify
        | A::ModPacifySilence
        | A::ModDisarm
        | A::ModDisarmOffhand
        | A::ModDisarmRanged
        | A::ModCharm
        | A::AoeCharm
        | A::ModPossess
        | A::ModLanguage
        | A::DamageShield
        | A::ProcTriggerSpell
        | A::ModAttackerMeleeHitChance
        | A::ModAttackerRangedHitChance
        | A::ModAttackerSpellHitChance
        | A::ModAttackerMeleeCritChance
        | A::ModAttackerRangedCritChance
        | A::ModAttackerSpellAndWeaponCritChance
        | A::Dummy
        | A::PeriodicDummy
        | A::ModHealing
        | A::ModWeaponCritPercent
        | A::PowerBurn
        | A::ModCooldown
        | A::ModChargeCooldown
        | A::ModIncreaseSpeed
        | A::ModParryPercent
        | A::SetVehicleId
        | A::PeriodicEnergize
        | A::EffectImmunity
        | A::OverrideClassScripts
        | A::ModShapeshift
        | A::ModThreat
        | A::ProcTriggerSpellWithValue => negative_if(!positive_target).into(),

        // Always harmful.
        A::ModConfuse
        | A::ChannelDeathItem
        | A::ModRoot
        | A::ModRoot2
        | A::ModSilence
        | A::ModDetaunt
        | A::Ghost
        | A::PeriodicLeech
        | A::PeriodicManaLeech
        | A::ModStalked
        | A::PreventResurrection
        | A::PeriodicDamage
        | A::PeriodicWeaponPercentDamage
        | A::PeriodicDamagePercent => AuraRule::Decided(Verdict::Negative),

        A::MechanicImmunity => negative_if(is_protective_mechanic(effect.misc_value)).into(),

        A::AddFlatModifier
        | A::AddPctModifier
        | A::AddFlatModifierBySpellLabel
        | A::AddPctModifierBySpellLabel => modifier_verdict(spell, effect.misc_value, bp).into(),

        _ => AuraRule::Continue,
    }
}

fn modifier_verdict(spell: &SpellInfo, raw_op: i32, bp: i32) -> Option<Verdict> {
    use SpellModOp as Op;

    match SpellModOp::from_raw(raw_op)? {
        Op::ChangeCastTime | Op::Period | Op::PowerCostOnMiss | Op::StartCooldown => {
            negative_if(bp > 0)
        }
        // Passive talents raising a cost or cooldown are still talents.
        Op::Cooldown | Op::PowerCost0 | Op::PowerCost1 | Op::PowerCost2 => {
            negative_if(!spell.is_passive() && bp > 0)
        }
        Op::CritChance
        | Op::HealingAndDamage
        | Op::Points
        | Op::PointsIndex0
        | Op::PointsIndex1
        | Op::PointsIndex2
        | Op::PointsIndex3
        | Op::PointsIndex4 => negative_if(bp < 0),
        _ => None,
    }
}

fn is_sole_effect(spell: &SpellInfo, effect: &SpellEffectInfo) -> bool {
    spell
        .effects()
        .iter()
        .all(|other| other.effect_index == effect.effect_index || !other.is_effect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defines::{SpellTargetCheckType, Targets};
    use crate::info::SpellImplicitTargetInfo;
    use crate::records::{EffectRecord, SpellEffectEntry, SpellNameEntry};

    fn slot(
        index: u32,
        effect: SpellEffectName,
        aura: AuraType,
        target: Targets,
        bp: f32,
        misc: i32,
    ) -> EffectRecord {
        SpellEffectEntry {
            spell_id: 900,
            effect_index: index,
            effect: effect as u32,
            effect_aura: aura as u32,
            effect_base_points: bp,
            effect_misc_value: [misc, 0],
            implicit_target: [target as u32, 0],
            ..Default::default()
        }
        .into()
    }

    fn spell_of(records: &[EffectRecord]) -> SpellInfo {
        SpellInfo::from_effects(
            &SpellNameEntry {
                id: 900,
                name: String::new(),
            },
            records,
        )
    }

    fn single(effect: SpellEffectName, aura: AuraType, target: Targets, bp: f32) -> SpellInfo {
        spell_of(&[slot(0, effect, aura, target, bp, 0)])
    }

    fn with_misc(effect: SpellEffectName, aura: AuraType, target: Targets, bp: f32, misc: i32) -> SpellInfo {
        spell_of(&[slot(0, effect, aura, target, bp, misc)])
    }

    fn first(spell: &SpellInfo) -> Step {
        evaluate(spell, &spell.effects()[0])
    }

    const POSITIVE: Step = Step::Decided(Verdict::Positive);
    const NEGATIVE: Step = Step::Decided(Verdict::Negative);

    #[test]
    fn enemy_target_is_not_positive() {
        let effect = SpellEffectInfo {
            effect: SpellEffectName::Dummy,
            target_a: SpellImplicitTargetInfo::new(Targets::UnitTargetEnemy),
            ..Default::default()
        };
        assert_eq!(effect.target_a.check_type(), SpellTargetCheckType::Enemy);
        assert!(!is_positive_target(&effect));
        assert!(is_positive_target(&SpellEffectInfo::placeholder(0)));
    }

    #[test]
    fn stat_mod_sign_decides() {
        let buff = single(SpellEffectName::ApplyAura, AuraType::ModStat, Targets::UnitTargetAlly, 10.0);
        assert_eq!(evaluate(&buff, &buff.effects()[0]), Step::Decided(Verdict::Positive));

        let debuff = single(SpellEffectName::ApplyAura, AuraType::ModStat, Targets::UnitTargetAlly, -10.0);
        assert_eq!(evaluate(&debuff, &debuff.effects()[0]), Step::Decided(Verdict::Negative));
    }

    #[test]
    fn damage_taken_mod_is_negative_when_raised() {
        let spell = single(
            SpellEffectName::ApplyAura,
            AuraType::ModDamageTaken,
            Targets::UnitTargetAlly,
            5.0,
        );
        assert_eq!(evaluate(&spell, &spell.effects()[0]), Step::Decided(Verdict::Negative));
    }

    #[test]
    fn threat_on_enemy_depends_on_sign() {
        let taunt = single(SpellEffectName::Threat, AuraType::None, Targets::UnitTargetEnemy, 100.0);
        assert_eq!(evaluate(&taunt, &taunt.effects()[0]), Step::Decided(Verdict::Negative));
    }

    #[test]
    fn sole_stun_is_negative_on_any_target() {
        let stun = single(SpellEffectName::ApplyAura, AuraType::ModStun, Targets::UnitTargetRaid, 0.0);
        assert_eq!(evaluate(&stun, &stun.effects()[0]), Step::Decided(Verdict::Negative));
    }

    #[test]
    fn periodic_trigger_descends() {
        let mut spell = single(
            SpellEffectName::ApplyAura,
            AuraType::PeriodicTriggerSpell,
            Targets::UnitCaster,
            0.0,
        );
        spell.effects[0].trigger_spell = 77;
        assert_eq!(
            evaluate(&spell, &spell.effects()[0]),
            Step::Descend {
                trigger: 77,
                positive_targets_only: true,
                fallback: Verdict::Positive,
            }
        );
    }

    #[test]
    fn exception_table_overrides_shape() {
        // Envenom deals damage to an enemy yet is listed positive.
        let mut envenom = single(
            SpellEffectName::SchoolDamage,
            AuraType::None,
            Targets::UnitTargetEnemy,
            100.0,
        );
        envenom.id = 32645;
        envenom.spell_family_name = crate::defines::SpellFamilyName::Rogue;
        assert_eq!(evaluate(&envenom, &envenom.effects()[0]), Step::Decided(Verdict::Positive));
    }

    #[test]
    fn attribute_flags_decide_before_rules() {
        let mut spell = single(SpellEffectName::Heal, AuraType::None, Targets::UnitTargetAlly, 10.0);
        assert_eq!(attribute_verdict(&spell), None);

        spell.attributes |= SpellAttr0::AURA_IS_DEBUFF;
        assert_eq!(attribute_verdict(&spell), Some(Verdict::Negative));

        spell.attributes |= SpellAttr0::PASSIVE;
        assert_eq!(attribute_verdict(&spell), Some(Verdict::Positive));

        let mut buff = single(SpellEffectName::SchoolDamage, AuraType::None, Targets::UnitTargetEnemy, 10.0);
        buff.attributes_ex4 |= SpellAttr4::AURA_IS_BUFF;
        assert_eq!(attribute_verdict(&buff), Some(Verdict::Positive));
    }

    #[test]
    fn immune_shield_mechanic_beats_damage() {
        let mut spell = single(SpellEffectName::SchoolDamage, AuraType::None, Targets::UnitTargetEnemy, 50.0);
        assert_eq!(first(&spell), NEGATIVE);

        spell.mechanic = Mechanic::ImmuneShield;
        assert_eq!(first(&spell), POSITIVE);
    }

    #[test]
    fn unique_aura_with_enemy_sibling_is_negative() {
        let mut spell = spell_of(&[
            slot(0, SpellEffectName::ApplyAura, AuraType::ModStat, Targets::UnitTargetAlly, 10.0, 0),
            slot(1, SpellEffectName::SchoolDamage, AuraType::None, Targets::UnitTargetEnemy, 10.0, 0),
        ]);
        assert_eq!(first(&spell), POSITIVE);

        spell.attributes_ex |= SpellAttr1::AURA_UNIQUE;
        assert_eq!(first(&spell), NEGATIVE);
    }

    #[test]
    fn stealth_anywhere_makes_every_slot_positive() {
        let spell = spell_of(&[
            slot(0, SpellEffectName::ApplyAura, AuraType::ModStealth, Targets::UnitCaster, 0.0, 0),
            slot(1, SpellEffectName::SchoolDamage, AuraType::None, Targets::UnitTargetEnemy, 10.0, 0),
        ]);
        assert_eq!(evaluate(&spell, &spell.effects()[1]), POSITIVE);

        let hidden = spell_of(&[
            slot(0, SpellEffectName::ApplyAura, AuraType::ModRoot, Targets::UnitTargetEnemy, 0.0, 0),
            slot(1, SpellEffectName::ApplyAura, AuraType::ModUnattackable, Targets::UnitCaster, 0.0, 0),
        ]);
        assert_eq!(first(&hidden), POSITIVE);
    }

    #[test]
    fn instakill_taints_slots_sharing_its_targets() {
        let shared = spell_of(&[
            slot(0, SpellEffectName::Instakill, AuraType::None, Targets::UnitTargetEnemy, 0.0, 0),
            slot(1, SpellEffectName::ApplyAura, AuraType::ModStat, Targets::UnitTargetEnemy, 10.0, 0),
        ]);
        assert_eq!(evaluate(&shared, &shared.effects()[1]), NEGATIVE);

        let apart = spell_of(&[
            slot(0, SpellEffectName::Instakill, AuraType::None, Targets::UnitCaster, 0.0, 0),
            slot(1, SpellEffectName::ApplyAura, AuraType::ModStat, Targets::UnitTargetEnemy, 10.0, 0),
        ]);
        assert_eq!(evaluate(&apart, &apart.effects()[1]), POSITIVE);
    }

    #[test]
    fn dispel_type_and_target_decide_dispels() {
        let stealth = DispelType::Stealth as i32;
        let magic = DispelType::Magic as i32;

        let reveal = with_misc(SpellEffectName::Dispel, AuraType::None, Targets::UnitTargetAlly, 0.0, stealth);
        assert_eq!(first(&reveal), NEGATIVE);

        let cleanse = with_misc(SpellEffectName::Dispel, AuraType::None, Targets::UnitTargetAlly, 0.0, magic);
        assert_eq!(first(&cleanse), POSITIVE);

        let purge = with_misc(SpellEffectName::Dispel, AuraType::None, Targets::UnitTargetEnemy, 0.0, magic);
        assert_eq!(first(&purge), NEGATIVE);
    }

    #[test]
    fn dispel_mechanic_on_enemy_hurts_only_when_protective() {
        let shield = Mechanic::Shield as i32;
        let stun = Mechanic::Stun as i32;

        let strip = with_misc(SpellEffectName::DispelMechanic, AuraType::None, Targets::UnitTargetEnemy, 0.0, shield);
        assert_eq!(first(&strip), NEGATIVE);

        let free = with_misc(SpellEffectName::DispelMechanic, AuraType::None, Targets::UnitTargetEnemy, 0.0, stun);
        assert_eq!(first(&free), POSITIVE);
    }

    #[test]
    fn immunity_to_protective_mechanic_is_negative() {
        let forbearance = with_misc(
            SpellEffectName::ApplyAura,
            AuraType::MechanicImmunity,
            Targets::UnitCaster,
            0.0,
            Mechanic::Invulnerability as i32,
        );
        assert_eq!(first(&forbearance), NEGATIVE);

        let stun_immune = with_misc(
            SpellEffectName::ApplyAura,
            AuraType::MechanicImmunity,
            Targets::UnitCaster,
            0.0,
            Mechanic::Stun as i32,
        );
        assert_eq!(first(&stun_immune), POSITIVE);
    }

    #[test]
    fn cooldown_modifier_depends_on_passivity() {
        let cooldown = SpellModOp::Cooldown as i32;
        let mut talent = with_misc(
            SpellEffectName::ApplyAura,
            AuraType::AddFlatModifier,
            Targets::UnitCaster,
            1000.0,
            cooldown,
        );
        assert_eq!(first(&talent), NEGATIVE);

        talent.attributes |= SpellAttr0::PASSIVE;
        assert_eq!(first(&talent), POSITIVE);
    }

    #[test]
    fn points_modifier_sign_decides() {
        let points = SpellModOp::Points as i32;
        let weaken = with_misc(SpellEffectName::ApplyAura, AuraType::AddPctModifier, Targets::UnitCaster, -20.0, points);
        assert_eq!(first(&weaken), NEGATIVE);

        let empower = with_misc(SpellEffectName::ApplyAura, AuraType::AddPctModifier, Targets::UnitCaster, 20.0, points);
        assert_eq!(first(&empower), POSITIVE);
    }

    #[test]
    fn detaunt_and_weapon_bleed_are_always_harmful() {
        let detaunt = single(SpellEffectName::ApplyAura, AuraType::ModDetaunt, Targets::UnitTargetAlly, 0.0);
        assert_eq!(first(&detaunt), NEGATIVE);

        let bleed = single(
            SpellEffectName::ApplyAura,
            AuraType::PeriodicWeaponPercentDamage,
            Targets::UnitCaster,
            10.0,
        );
        assert_eq!(first(&bleed), NEGATIVE);
    }

    #[test]
    fn attacker_chance_auras_follow_target() {
        let on_enemy = single(
            SpellEffectName::ApplyAura,
            AuraType::ModAttackerMeleeHitChance,
            Targets::UnitTargetEnemy,
            5.0,
        );
        assert_eq!(first(&on_enemy), NEGATIVE);

        let on_ally = single(
            SpellEffectName::ApplyAura,
            AuraType::ModAttackerSpellAndWeaponCritChance,
            Targets::UnitTargetAlly,
            -5.0,
        );
        assert_eq!(first(&on_ally), POSITIVE);
    }

    #[test]
    fn unmatched_effects_on_enemy_default_positive() {
        let dummy = single(SpellEffectName::Dummy, AuraType::None, Targets::UnitTargetEnemy, 0.0);
        assert_eq!(first(&dummy), POSITIVE);

        let invisibility = single(
            SpellEffectName::ApplyAura,
            AuraType::ModInvisibility,
            Targets::UnitTargetEnemy,
            0.0,
        );
        assert_eq!(first(&invisibility), POSITIVE);

        let mut trigger = single(SpellEffectName::TriggerSpell, AuraType::None, Targets::UnitTargetEnemy, 0.0);
        trigger.effects[0].trigger_spell = 77;
        assert_eq!(
            first(&trigger),
            Step::Descend {
                trigger: 77,
                positive_targets_only: false,
                fallback: Verdict::Positive,
            }
        );
    }

    #[test]
    fn periodic_trigger_on_enemy_falls_back_positive() {
        let mut spell = single(
            SpellEffectName::ApplyAura,
            AuraType::PeriodicTriggerSpell,
            Targets::UnitTargetEnemy,
            0.0,
        );
        spell.effects[0].trigger_spell = 78;
        assert_eq!(
            first(&spell),
            Step::Descend {
                trigger: 78,
                positive_targets_only: true,
                fallback: Verdict::Positive,
            }
        );
    }
}
