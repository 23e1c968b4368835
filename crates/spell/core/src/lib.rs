//! Spell rule resolution.
//!
//! `spell-core` turns raw spell-definition records into normalized
//! [`SpellInfo`] values and derives the rule facts a combat simulation needs
//! at cast time: effect positivity, diminishing-returns grouping, granted
//! immunities, power costs and cast legality. Derivations run once inside
//! [`SpellCatalogBuilder::finish`]; the resulting [`SpellCatalog`] is
//! immutable and shared through [`CatalogStore`]. Per-cast queries read the
//! world through the traits in [`env`].
pub mod catalog;
pub mod config;
pub mod defines;
pub mod diminishing;
pub mod env;
pub mod error;
pub mod immunity;
pub mod info;
pub mod positivity;
pub mod power;
pub mod records;
pub mod validation;

pub use catalog::{CatalogStore, CatalogVersion, SpellCatalog, SpellCatalogBuilder, SpellLookup};
pub use config::SpellConfig;
pub use defines::{
    AuraStateType, AuraType, DiminishingGroup, DiminishingLevel, DiminishingReturnsType,
    DispelType, Mechanic, Powers, SpellCastResult, SpellCastTargetFlags, SpellEffectName,
    SpellSchoolMask, SpellSpecificType,
};
pub use env::{
    CastLocation, CastTarget, CastUnit, ImmunityTarget, LocationContext, ObjectGuid, PowerCaster,
    SpellTablesOracle, TablesSnapshot,
};
pub use error::{CatalogError, ErrorSeverity, SpellDataError, SpellError};
pub use info::{
    BASE_DIFFICULTY, Difficulty, DiminishInfo, ImmunityInfo, RankChainRegistry, SpellEffectInfo,
    SpellId, SpellInfo,
};
pub use positivity::{PositivityOverrides, Verdict};
pub use power::SpellPowerCost;
pub use records::{SpellLoadUnit, SpellTables};
