use crate::defines::{AuraType, Powers, SpellFamilyFlags, SpellFamilyName, SpellModOp};
use crate::info::{SpellId, SpellInfo};

/// Weapon slot used for attack timing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeaponAttackType {
    #[default]
    BaseAttack,
    OffAttack,
    RangedAttack,
}

/// An active aura effect on the caster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AuraEffectView {
    pub spell_id: SpellId,
    pub amount: i32,
    pub misc_value: i32,
    pub misc_value_b: i32,
    pub family: SpellFamilyName,
    pub class_mask: SpellFamilyFlags,
}

impl AuraEffectView {
    /// Whether this aura's class mask selects `spell`.
    pub fn is_affecting_spell(&self, spell: &SpellInfo) -> bool {
        self.family == spell.spell_family_name && self.class_mask.intersects(&spell.spell_family_flags)
    }
}

/// An in-flight cast, passed through to modifier lookups.
pub trait CastContext {
    fn cast_id(&self) -> u64;
}

/// Player-owned spell modifiers, such as talents reducing a cost.
pub trait SpellModifierHook {
    /// Flat and percentage modifiers of `op` for `spell`, given the current value.
    ///
    /// The percentage is a multiplier; `1.0` leaves the value unchanged.
    fn spell_mod_values(
        &self,
        spell: &SpellInfo,
        op: SpellModOp,
        base: i32,
        cast: Option<&dyn CastContext>,
    ) -> (i32, f32);

    /// Applies both modifiers: `(base + flat) * pct`.
    fn apply_spell_mod(
        &self,
        spell: &SpellInfo,
        op: SpellModOp,
        base: i32,
        cast: Option<&dyn CastContext>,
    ) -> i32 {
        let (flat, pct) = self.spell_mod_values(spell, op, base, cast);
        ((base + flat) as f32 * pct) as i32
    }
}

/// Caster state read by the power cost calculator.
pub trait PowerCaster {
    fn health(&self) -> u64;
    fn max_health(&self) -> u64;
    fn power(&self, power: Powers) -> i32;
    /// Base mana before any bonuses.
    fn create_mana(&self) -> u32;
    fn level(&self) -> u32;
    fn is_controlled_by_player(&self) -> bool;
    fn has_aura(&self, spell_id: SpellId) -> bool;
    fn aura_effects(&self, aura: AuraType) -> Vec<AuraEffectView>;
    fn shapeshift_form(&self) -> u32;
    fn base_attack_time(&self, attack: WeaponAttackType) -> u32;
    /// Caster-wide mana cost multiplier offset; `0.0` leaves costs unchanged.
    fn mana_cost_multiplier(&self) -> f32;
    fn spell_mod_owner(&self) -> Option<&dyn SpellModifierHook>;
}
