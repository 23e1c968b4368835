use crate::defines::{
    AuraType, DispelType, Mechanic, SpellAuraInterruptFlags, SpellEffectName, SpellSchoolMask,
};
use crate::info::SpellId;

/// One immunity a spell grants or revokes on a target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpellImmunity {
    School(SpellSchoolMask),
    /// Harmful auras of these schools cannot be applied.
    ApplyHarmfulAuraSchool(SpellSchoolMask),
    Mechanic(Mechanic),
    Dispel(DispelType),
    Damage(SpellSchoolMask),
    State(AuraType),
    Effect(SpellEffectName),
}

/// Aura currently applied to an immunity target.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AppliedAura {
    pub spell_id: SpellId,
    pub school_mask: SpellSchoolMask,
    /// Mechanics of the aura's spell and of its applied effects.
    pub mechanic_mask: u64,
    pub dispel: DispelType,
    pub aura_types: Vec<AuraType>,
    pub is_passive: bool,
    /// The application helps its holder.
    pub is_positive: bool,
    /// The aura's spell ignores immunities and is never purged.
    pub no_immunities: bool,
}

/// Mutable immunity and aura state of a unit.
///
/// Callers own the synchronization of the target; the resolver only writes
/// through this trait.
pub trait ImmunityTarget {
    fn apply_spell_immune(&mut self, spell_id: SpellId, immunity: SpellImmunity, apply: bool);
    /// Removes every applied aura matching `predicate`, returning how many were removed.
    fn remove_applied_auras(&mut self, predicate: &mut dyn FnMut(&AppliedAura) -> bool) -> usize;
    fn remove_auras_with_interrupt_flags(&mut self, flags: SpellAuraInterruptFlags);
}
