use tracing::debug;

use crate::defines::{
    AuraType, ShapeshiftFormFlags, SpellAttr0, SpellAttr6, SpellCastResult, SpellEffectName,
    SummonCategory, VehicleSeatFlags,
};
use crate::env::{CastUnit, SpellTablesOracle};
use crate::info::SpellInfo;

impl SpellInfo {
    /// Seat capabilities a passenger needs to cast this spell.
    pub fn required_seat_flags(&self, tables: &dyn SpellTablesOracle) -> VehicleSeatFlags {
        let mut needed = VehicleSeatFlags::empty();

        let shapeshift = self
            .effects()
            .iter()
            .find(|e| e.is_aura_type(AuraType::ModShapeshift));
        if let Some(effect) = shapeshift {
            let form = u32::try_from(effect.misc_value)
                .ok()
                .and_then(|form| tables.shapeshift_form(form));
            if form.is_some_and(|f| !f.flags.contains(ShapeshiftFormFlags::STANCE)) {
                needed |= VehicleSeatFlags::UNCONTROLLED;
            }
        }

        if self.has_aura(AuraType::Mounted) {
            needed |= VehicleSeatFlags::CAN_CAST_MOUNT_SPELL;
        }

        if needed.is_empty() {
            VehicleSeatFlags::CAN_ATTACK
        } else {
            needed
        }
    }

    /// Checks whether a passenger may cast this spell from its seat.
    ///
    /// Only player passengers are restricted.
    pub fn check_vehicle(&self, caster: &dyn CastUnit, tables: &dyn SpellTablesOracle) -> SpellCastResult {
        if !caster.is_player() || caster.vehicle_base().is_none() {
            return SpellCastResult::SpellCastOk;
        }
        let Some(seat) = caster.vehicle_seat() else {
            debug!(spell_id = self.id, caster = %caster.guid(), "passenger without a seat");
            return SpellCastResult::SpellCastOk;
        };

        let needed = self.required_seat_flags(tables);
        let ignores_seat = self.has_attribute(SpellAttr6::ALLOW_WHILE_RIDING_VEHICLE)
            || self.has_attribute(SpellAttr0::ALLOW_WHILE_MOUNTED);
        if !ignores_seat && !seat.flags.contains(needed) {
            return SpellCastResult::CantDoThatRightNow;
        }

        if !seat.flags.contains(VehicleSeatFlags::CAN_CONTROL) {
            let controlled_summon = self
                .effects()
                .iter()
                .filter(|e| e.is_effect_name(SpellEffectName::Summon))
                .filter_map(|e| u32::try_from(e.misc_value_b).ok())
                .filter_map(|id| tables.summon_properties(id))
                .any(|props| props.control != SummonCategory::Wild);
            if controlled_summon {
                return SpellCastResult::CantDoThatRightNow;
            }
        }

        SpellCastResult::SpellCastOk
    }
}
