//! Enumerations and bit flags shared by every part of the engine.
//!
//! Numeric values follow the raw table encoding so records can be converted
//! with `from_raw`/`from_bits_retain` without translation tables.
mod attributes;
mod aura;
mod effect;
mod mechanic;
mod result;
mod school;
mod target;
mod unit;

pub use attributes::{
    SpellAttr0, SpellAttr1, SpellAttr2, SpellAttr3, SpellAttr4, SpellAttr5, SpellAttr6, SpellAttr7,
    SpellAttr8, SpellAttr9, SpellAttr10, SpellAttr11, SpellAttr12, SpellAttr13, SpellAttr14,
    SpellAttribute, SpellCustomAttributes,
};
pub use aura::{AuraType, SpellModOp};
pub use effect::SpellEffectName;
pub use mechanic::{
    DispelType, IMMUNE_TO_MOVEMENT_IMPAIRMENT_AND_LOSS_CONTROL_MASK, Mechanic, mechanic_mask,
};
pub use result::SpellCastResult;
pub use school::{SpellDmgClass, SpellPreventionType, SpellSchool, SpellSchoolMask};
pub use target::{
    EffectImplicitTargetType, SpellCastTargetFlags, SpellTargetCheckType, SpellTargetObjectType,
    SpellTargetReferenceType, SpellTargetSelectionCategory, TargetDescriptor, Targets,
};
pub use unit::{
    AuraStateType, CreatureType, DiminishingGroup, DiminishingLevel, DiminishingReturnsType, Powers,
    ShapeshiftFormFlags, SpellAuraInterruptFlags, SpellFamilyFlags, SpellFamilyName,
    SpellSpecificType, SummonCategory, VehicleSeatFlags,
};
