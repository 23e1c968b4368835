use crate::defines::{SpellCastResult, SpellCastTargetFlags};
use crate::env::{CastTarget, CastUnit, ObjectGuid};
use crate::info::SpellInfo;

impl SpellInfo {
    /// Checks the target the player picked against the spell's explicit
    /// target mask.
    ///
    /// `item` is the item the cast was aimed at, if any. A spell expecting a
    /// unit, game object or corpse fails without a target unless it accepts a
    /// game object and an item was supplied instead.
    pub fn check_explicit_target(
        &self,
        caster: &dyn CastUnit,
        target: Option<CastTarget<'_>>,
        item: Option<ObjectGuid>,
    ) -> SpellCastResult {
        let needed = self.explicit_target_mask();

        let Some(target) = target else {
            let wants_object = needed.intersects(
                SpellCastTargetFlags::UNIT_MASK
                    | SpellCastTargetFlags::GAMEOBJECT_MASK
                    | SpellCastTargetFlags::CORPSE_MASK,
            );
            if wants_object && (!needed.contains(SpellCastTargetFlags::GAMEOBJECT) || item.is_none()) {
                return SpellCastResult::BadTargets;
            }
            return SpellCastResult::SpellCastOk;
        };

        let Some(unit) = target.as_unit() else {
            return SpellCastResult::SpellCastOk;
        };

        let relation = SpellCastTargetFlags::UNIT_ENEMY
            | SpellCastTargetFlags::UNIT_ALLY
            | SpellCastTargetFlags::UNIT_RAID
            | SpellCastTargetFlags::UNIT_PARTY
            | SpellCastTargetFlags::UNIT_MINIPET
            | SpellCastTargetFlags::UNIT_PASSENGER;
        if !needed.intersects(relation) {
            return SpellCastResult::SpellCastOk;
        }

        if needed.contains(SpellCastTargetFlags::UNIT_ENEMY) && caster.is_valid_attack_target(unit) {
            return SpellCastResult::SpellCastOk;
        }

        let assist = needed.contains(SpellCastTargetFlags::UNIT_ALLY)
            || (needed.contains(SpellCastTargetFlags::UNIT_PARTY) && caster.is_in_party_with(unit))
            || (needed.contains(SpellCastTargetFlags::UNIT_RAID) && caster.is_in_raid_with(unit));
        if assist && caster.is_valid_assist_target(unit) {
            return SpellCastResult::SpellCastOk;
        }

        if needed.contains(SpellCastTargetFlags::UNIT_MINIPET) && caster.critter() == Some(unit.guid()) {
            return SpellCastResult::SpellCastOk;
        }

        if needed.contains(SpellCastTargetFlags::UNIT_PASSENGER)
            && unit.vehicle_base() == Some(caster.guid())
        {
            return SpellCastResult::SpellCastOk;
        }

        SpellCastResult::BadTargets
    }
}
