//! Traits describing the world state spell rules read and write.
//!
//! Lookup tables come through [`SpellTablesOracle`]; live unit state through
//! [`CastUnit`], [`LocationContext`] and [`PowerCaster`]; the only write path
//! is [`ImmunityTarget`]. [`TablesSnapshot`] is a ready-made in-memory oracle.
mod caster;
mod immunity;
mod location;
mod snapshot;
mod tables;
mod unit;

pub use caster::{AuraEffectView, CastContext, PowerCaster, SpellModifierHook, WeaponAttackType};
pub use immunity::{AppliedAura, ImmunityTarget, SpellImmunity};
pub use location::{BattlegroundStatus, CastLocation, LocationContext, QuestProgress};
pub use snapshot::TablesSnapshot;
pub use tables::{
    AreaInfo, AreaMountFlags, MapInfo, MapKind, ShapeshiftFormInfo, SpellArea, SpellTablesOracle,
    SummonPropertiesInfo,
};
pub use unit::{CastTarget, CastUnit, CombatResurrectionState, CorpseView, ObjectGuid, VehicleSeat};
