//! Power cost calculation.
//!
//! A spell declares up to four cost rows. Each row yields a base cost and an
//! optional cost; [`SpellInfo::calc_power_costs`] folds them into one amount
//! per power type.

use tracing::error;

use crate::defines::{
    AuraType, Powers, SpellAttr0, SpellAttr1, SpellAttr3, SpellAttr4, SpellModOp, SpellSchoolMask,
};
use crate::env::{CastContext, PowerCaster, SpellTablesOracle, WeaponAttackType};
use crate::info::SpellInfo;
use crate::records::SpellPowerEntry;

/// Amount of one power type a cast consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellPowerCost {
    pub power: Powers,
    pub amount: i32,
}

fn pct_of(base: f32, pct: f32) -> i32 {
    (base * pct / 100.0) as i32
}

fn saturating_i32(value: u64) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Current amount of `power`, reading health for health costs.
fn current_amount(caster: &dyn PowerCaster, power: Powers) -> i32 {
    match power {
        Powers::Health => saturating_i32(caster.health()),
        other => caster.power(other),
    }
}

impl SpellInfo {
    /// Cost of one declared row, or `None` when the row does not apply.
    ///
    /// `optional` selects the row's optional channel instead of its base cost.
    pub fn calc_power_cost(
        &self,
        entry: &SpellPowerEntry,
        optional: bool,
        caster: &dyn PowerCaster,
        tables: &dyn SpellTablesOracle,
        school_mask: SpellSchoolMask,
        cast: Option<&dyn CastContext>,
    ) -> Option<SpellPowerCost> {
        if entry.required_aura_spell_id != 0 && !caster.has_aura(entry.required_aura_spell_id) {
            return None;
        }

        let Some(power) = Powers::from_raw(entry.power_type) else {
            error!(spell_id = self.id, power_type = entry.power_type, "unknown power type");
            return None;
        };

        if self.has_attribute(SpellAttr1::USE_ALL_MANA) {
            if optional {
                return None;
            }
            return Some(SpellPowerCost {
                power,
                amount: current_amount(caster, power),
            });
        }

        let mut cost = if optional {
            let base = entry.optional_cost as i32
                + self.pct_cost(entry, entry.optional_cost_pct, power, caster, tables)?;
            let additional: i32 = caster
                .aura_effects(AuraType::ModAdditionalPowerCost)
                .iter()
                .filter(|aura| aura.misc_value == entry.power_type && aura.is_affecting_spell(self))
                .map(|aura| aura.amount)
                .sum();
            base + additional
        } else {
            // The max-health percentage column never adds to the cost.
            entry.mana_cost + self.pct_cost(entry, entry.power_cost_pct, power, caster, tables)?
        };

        let initially_negative = cost < 0;

        if self.has_attribute(SpellAttr4::WEAPON_SPEED_COST_SCALING) {
            cost += (self.cost_scaling_speed(caster, tables) / 100) as i32;
        }

        if let Some(bit) = power.mask_bit() {
            let matches = |misc: i32, misc_b: i32| {
                misc as u32 & school_mask.bits() != 0 && misc_b as u32 & bit != 0
            };

            if !optional {
                for aura in caster.aura_effects(AuraType::ModPowerCostSchool) {
                    if matches(aura.misc_value, aura.misc_value_b) {
                        cost += aura.amount;
                    }
                }
            }

            for aura in caster.aura_effects(AuraType::ModPowerCostSchoolPct) {
                if matches(aura.misc_value, aura.misc_value_b) {
                    cost += pct_of(cost as f32, aura.amount as f32);
                }
            }
        }

        if let Some(owner) = caster.spell_mod_owner() {
            let op = match entry.order_index {
                0 => Some(SpellModOp::PowerCost0),
                1 => Some(SpellModOp::PowerCost1),
                2 => Some(SpellModOp::PowerCost2),
                _ => None,
            };
            if let Some(op) = op {
                cost = if optional {
                    // Optional costs ignore flat modifiers.
                    let (_, pct) = owner.spell_mod_values(self, op, cost, cast);
                    (cost as f32 * pct) as i32
                } else {
                    owner.apply_spell_mod(self, op, cost, cast)
                };
            }
        }

        if power == Powers::Mana
            && !caster.is_controlled_by_player()
            && entry.power_cost_pct == 0.0
            && self.spell_level != 0
            && self.has_attribute(SpellAttr0::SCALES_WITH_CREATURE_LEVEL)
        {
            let spell_scaler = tables.npc_mana_cost_scaler(self.spell_level);
            let caster_scaler = tables.npc_mana_cost_scaler(caster.level());
            if let (Some(spell_scaler), Some(caster_scaler)) = (spell_scaler, caster_scaler)
                && spell_scaler != 0.0
            {
                cost = (cost as f32 * (caster_scaler / spell_scaler)) as i32;
            }
        }

        if power == Powers::Mana {
            cost = (cost as f32 * (1.0 + caster.mana_cost_multiplier())) as i32;
        }

        if initially_negative != (cost < 0) {
            cost = 0;
        }

        Some(SpellPowerCost { power, amount: cost })
    }

    /// Percentage part of a cost; `None` when the power type has no basis.
    fn pct_cost(
        &self,
        entry: &SpellPowerEntry,
        pct: f32,
        power: Powers,
        caster: &dyn PowerCaster,
        tables: &dyn SpellTablesOracle,
    ) -> Option<i32> {
        if pct == 0.0 {
            return Some(0);
        }

        let basis = match power {
            Powers::Health => caster.max_health() as f32,
            Powers::Mana => caster.create_mana() as f32,
            Powers::AlternatePower => {
                error!(spell_id = self.id, "percentage cost of alternate power");
                return None;
            }
            other => match tables.max_base_power(other) {
                Some(max) => max as f32,
                None => {
                    error!(spell_id = self.id, power_type = entry.power_type, "no max base power");
                    return None;
                }
            },
        };

        Some(pct_of(basis, pct))
    }

    fn cost_scaling_speed(&self, caster: &dyn PowerCaster, tables: &dyn SpellTablesOracle) -> u32 {
        if let Some(form) = tables.shapeshift_form(caster.shapeshift_form()) {
            return form.combat_round_time;
        }

        let slot = if !self.has_attribute(SpellAttr3::REQUIRES_MAIN_HAND_WEAPON)
            && self.has_attribute(SpellAttr3::REQUIRES_OFF_HAND_WEAPON)
        {
            WeaponAttackType::OffAttack
        } else {
            WeaponAttackType::BaseAttack
        };
        caster.base_attack_time(slot)
    }

    /// Every declared cost, one entry per power type.
    ///
    /// Optional costs join the base cost of their power type, capped at what
    /// the caster has left after the base cost.
    pub fn calc_power_costs(
        &self,
        caster: &dyn PowerCaster,
        tables: &dyn SpellTablesOracle,
        school_mask: SpellSchoolMask,
        cast: Option<&dyn CastContext>,
    ) -> Vec<SpellPowerCost> {
        let mut costs: Vec<SpellPowerCost> = Vec::with_capacity(self.power_costs.len());

        fn slot(costs: &mut Vec<SpellPowerCost>, power: Powers) -> &mut SpellPowerCost {
            let index = match costs.iter().position(|c| c.power == power) {
                Some(index) => index,
                None => {
                    costs.push(SpellPowerCost { power, amount: 0 });
                    costs.len() - 1
                }
            };
            &mut costs[index]
        }

        for entry in &self.power_costs {
            if let Some(base) = self.calc_power_cost(entry, false, caster, tables, school_mask, cast) {
                slot(&mut costs, base.power).amount += base.amount;
            }

            if let Some(extra) = self.calc_power_cost(entry, true, caster, tables, school_mask, cast) {
                let total = slot(&mut costs, extra.power);
                let remaining = current_amount(caster, extra.power) - total.amount;
                if remaining > 0 {
                    total.amount += extra.amount.min(remaining);
                }
            }
        }

        costs
    }
}
