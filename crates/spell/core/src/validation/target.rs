use tracing::trace;

use super::NO_PLAYER_TARGET_CATEGORY;
use crate::defines::{
    AuraStateType, AuraType, Mechanic, SpellAttr1, SpellAttr2, SpellAttr3, SpellAttr5, SpellAttr6,
    SpellAttr7, SpellAttr8, SpellCastResult, SpellCustomAttributes, SpellEffectName,
    SpellFamilyName,
};
use crate::env::{CastTarget, CastUnit};
use crate::info::SpellInfo;

impl SpellInfo {
    /// Checks whether `target` may be affected by this spell cast by `caster`.
    ///
    /// `implicit` marks targets picked by chain or area selection rather than
    /// by the player; those ignore stealth and skip crowd-controlled units
    /// when the spell asks for it.
    pub fn check_target(
        &self,
        caster: &dyn CastUnit,
        target: CastTarget<'_>,
        implicit: bool,
    ) -> SpellCastResult {
        let same_object = caster.guid() == target.guid();

        if self.has_attribute(SpellAttr1::EXCLUDE_CASTER) && same_object {
            return SpellCastResult::BadTargets;
        }

        if !self.has_attribute(SpellAttr6::IGNORE_PHASE_SHIFT)
            && !caster.can_see_or_detect(target.guid(), implicit)
        {
            return SpellCastResult::BadTargets;
        }

        let unit = match target {
            CastTarget::Unit(unit) => {
                let result = self.check_live_unit(caster, unit, same_object);
                if !result.is_ok() {
                    return result;
                }
                unit
            }
            CastTarget::Corpse(corpse) => {
                if corpse.is_bones {
                    return SpellCastResult::BadTargets;
                }
                // Remaining checks read the owner, so resurrection blockers apply.
                let Some(owner) = corpse.owner else {
                    return SpellCastResult::BadTargets;
                };
                owner
            }
            CastTarget::Object(_) => return SpellCastResult::SpellCastOk,
        };

        if !unit.is_player() {
            if self.has_attribute(SpellAttr3::ONLY_ON_PLAYER) {
                return SpellCastResult::TargetNotPlayer;
            }
            if self.has_attribute(SpellAttr5::NOT_ON_PLAYER_CONTROLLED_NPC)
                && unit.is_controlled_by_player()
            {
                return SpellCastResult::TargetIsPlayerControlled;
            }
        } else if self.has_attribute(SpellAttr5::NOT_ON_PLAYER) {
            return SpellCastResult::TargetIsPlayer;
        }

        if !self.is_allowing_dead_target() && !unit.is_alive() {
            return SpellCastResult::TargetsDead;
        }

        if implicit
            && self.has_attribute(SpellAttr6::DO_NOT_CHAIN_TO_CROWD_CONTROLLED_TARGETS)
            && !unit.can_free_move()
        {
            return SpellCastResult::BadTargets;
        }

        if !self.check_target_creature_type(unit) {
            return if matches!(target, CastTarget::Unit(u) if u.is_player()) {
                SpellCastResult::TargetIsPlayer
            } else {
                SpellCastResult::BadTargets
            };
        }

        if unit.guid() != caster.guid()
            && (caster.affecting_player().is_some() || !self.is_positive())
            && unit.is_player()
            && (!unit.is_visible() || unit.is_game_master())
        {
            return SpellCastResult::BmOrInvisgod;
        }

        if unit.is_in_flight() && !self.has_attribute(SpellCustomAttributes::ALLOW_INFLIGHT_TARGET) {
            return SpellCastResult::BadTargets;
        }

        let result = self.check_target_auras(caster, unit);
        if !result.is_ok() {
            return result;
        }

        if unit.has_aura_type(AuraType::PreventResurrection)
            && !self.has_attribute(SpellAttr7::BYPASS_NO_RESURRECT_AURA)
            && (self.has_effect(SpellEffectName::SelfResurrect)
                || self.has_effect(SpellEffectName::Resurrect))
        {
            return SpellCastResult::TargetCannotBeResurrected;
        }

        if self.has_attribute(SpellAttr8::BATTLE_RESURRECTION)
            && let Some(state) = caster.combat_resurrection()
            && state.charges == 0
            && state.encounter_in_progress
        {
            trace!(spell_id = self.id, "no combat resurrection charges left");
            return SpellCastResult::TargetCannotBeResurrected;
        }

        SpellCastResult::SpellCastOk
    }

    /// Whether `target`'s creature type is one the spell may hit.
    pub fn check_target_creature_type(&self, target: &dyn CastUnit) -> bool {
        if self.spell_family_name == SpellFamilyName::Warlock
            && self.category_id == NO_PLAYER_TARGET_CATEGORY
        {
            return !target.is_player();
        }

        if target.is_magnet() {
            return true;
        }

        let creature_type = target.creature_type_mask();
        self.target_creature_type == 0
            || creature_type == 0
            || creature_type & self.target_creature_type != 0
    }

    /// Rules that only apply to a living unit target, not to a corpse owner.
    fn check_live_unit(
        &self,
        caster: &dyn CastUnit,
        unit: &dyn CastUnit,
        same_object: bool,
    ) -> SpellCastResult {
        if self.has_attribute(SpellAttr1::ONLY_PEACEFUL_TARGETS) && unit.is_in_combat() {
            return SpellCastResult::TargetAffectingCombat;
        }

        let ghost_only = self.has_attribute(SpellAttr3::ONLY_ON_GHOSTS);
        if ghost_only != unit.has_aura_type(AuraType::Ghost) {
            return if ghost_only {
                SpellCastResult::TargetNotGhost
            } else {
                SpellCastResult::BadTargets
            };
        }

        if !same_object && caster.is_player() {
            if self.has_attribute(SpellAttr2::CANNOT_CAST_ON_TAPPED)
                && !unit.is_player()
                && unit.has_loot_recipient()
                && !unit.is_tapped_by(caster.guid())
            {
                return SpellCastResult::CantCastOnTapped;
            }

            if self.has_attribute(SpellCustomAttributes::PICKPOCKET) {
                if unit.is_player() {
                    return SpellCastResult::BadTargets;
                }
                if !unit.has_pickpocket_loot() {
                    return SpellCastResult::TargetNoPockets;
                }
            }

            if self.mechanic == Mechanic::Disarm && !unit.has_usable_weapon() {
                return SpellCastResult::TargetNoWeapons;
            }
        }

        if self.has_attribute(SpellAttr8::ONLY_TARGET_OWN_SUMMONS)
            && unit.charmer_or_owner() != Some(caster.guid())
        {
            return SpellCastResult::BadTargets;
        }

        SpellCastResult::SpellCastOk
    }

    fn check_target_auras(&self, caster: &dyn CastUnit, unit: &dyn CastUnit) -> SpellCastResult {
        let restrictions = &self.aura_restrictions;

        // Vehicles and a caster's own master skip aura-state requirements.
        if !caster.is_vehicle() && caster.charmer_or_owner() != Some(unit.guid()) {
            if restrictions.target_aura_state != AuraStateType::None
                && !unit.has_aura_state(restrictions.target_aura_state)
            {
                return SpellCastResult::TargetAurastate;
            }
            if restrictions.exclude_target_aura_state != AuraStateType::None
                && unit.has_aura_state(restrictions.exclude_target_aura_state)
            {
                return SpellCastResult::TargetAurastate;
            }
        }

        if restrictions.target_aura_spell != 0 && !unit.has_aura(restrictions.target_aura_spell) {
            return SpellCastResult::TargetAurastate;
        }
        if restrictions.exclude_target_aura_spell != 0
            && unit.has_aura(restrictions.exclude_target_aura_spell)
        {
            return SpellCastResult::TargetAurastate;
        }

        SpellCastResult::SpellCastOk
    }
}
