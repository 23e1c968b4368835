//! Normalized spell definitions.
//!
//! [`SpellInfo`] is assembled once per `(spell, difficulty)` from raw records and
//! then finished by the catalog builder, which fills the derived fields.
mod assembler;
mod chain;
mod derived;
mod diminish;
mod effect;
mod immunity;
mod spell;

pub use chain::{RankChainRegistry, SpellChainNode};
pub use diminish::DiminishInfo;
pub use effect::{SpellEffectInfo, SpellEffectScaling, SpellImplicitTargetInfo};
pub use immunity::ImmunityInfo;
pub use spell::{
    AuraRestrictions, EquippedItemRequirement, SpellInfo, SpellReagent, SpellReagentCurrency,
    SpellScalingInfo,
};

/// Numeric spell identifier.
pub type SpellId = u32;

/// Difficulty tier id.
pub type Difficulty = u32;

/// Difficulty every other tier falls back to.
pub const BASE_DIFFICULTY: Difficulty = 0;
