use std::collections::BTreeSet;

use crate::defines::{AuraType, DispelType, SpellEffectName, SpellSchoolMask};

/// Immunities granted by one effect slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImmunityInfo {
    pub school_immune_mask: SpellSchoolMask,
    pub apply_harmful_aura_immune_mask: SpellSchoolMask,
    /// One bit per mechanic id.
    pub mechanic_immune_mask: u64,
    pub dispel_immune: Option<DispelType>,
    pub damage_school_mask: SpellSchoolMask,
    pub aura_type_immune: BTreeSet<AuraType>,
    pub spell_effect_immune: BTreeSet<SpellEffectName>,
}

impl ImmunityInfo {
    pub fn is_empty(&self) -> bool {
        self.school_immune_mask.is_empty()
            && self.apply_harmful_aura_immune_mask.is_empty()
            && self.mechanic_immune_mask == 0
            && self.dispel_immune.is_none()
            && self.damage_school_mask.is_empty()
            && self.aura_type_immune.is_empty()
            && self.spell_effect_immune.is_empty()
    }
}
