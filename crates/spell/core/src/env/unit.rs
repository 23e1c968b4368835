use std::fmt;

use crate::defines::{AuraStateType, AuraType, VehicleSeatFlags};
use crate::info::SpellId;

/// Opaque world object identifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectGuid(pub u64);

impl fmt::Display for ObjectGuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:016X}", self.0)
    }
}

/// Read-only view of a unit taking part in a cast, as caster or target.
pub trait CastUnit {
    fn guid(&self) -> ObjectGuid;
    fn is_player(&self) -> bool;
    /// Pets, guardians and charmed units of a player.
    fn is_controlled_by_player(&self) -> bool;
    /// Player this unit acts for, itself included.
    fn affecting_player(&self) -> Option<ObjectGuid>;
    fn charmer_or_owner(&self) -> Option<ObjectGuid>;
    /// Guid of this unit's companion pet.
    fn critter(&self) -> Option<ObjectGuid>;

    fn is_alive(&self) -> bool;
    /// In combat, or has a pet in combat.
    fn is_in_combat(&self) -> bool;
    fn is_in_flight(&self) -> bool;
    fn can_free_move(&self) -> bool;
    fn is_visible(&self) -> bool;
    fn is_game_master(&self) -> bool;
    /// Redirects spells to itself, like a grounding totem.
    fn is_magnet(&self) -> bool;
    fn is_vehicle(&self) -> bool;
    /// Vehicle this unit rides, if any.
    fn vehicle_base(&self) -> Option<ObjectGuid>;
    /// Seat this unit occupies on its vehicle.
    fn vehicle_seat(&self) -> Option<VehicleSeat>;
    fn creature_type_mask(&self) -> u32;

    fn has_aura(&self, spell_id: SpellId) -> bool;
    fn has_aura_type(&self, aura: AuraType) -> bool;
    fn has_aura_state(&self, state: AuraStateType) -> bool;

    fn can_see_or_detect(&self, target: ObjectGuid, implicit: bool) -> bool;
    fn is_valid_attack_target(&self, target: &dyn CastUnit) -> bool;
    fn is_valid_assist_target(&self, target: &dyn CastUnit) -> bool;
    fn is_in_party_with(&self, other: &dyn CastUnit) -> bool;
    fn is_in_raid_with(&self, other: &dyn CastUnit) -> bool;

    /// Whether a creature has been tagged for loot by someone.
    fn has_loot_recipient(&self) -> bool;
    fn is_tapped_by(&self, player: ObjectGuid) -> bool;
    fn has_pickpocket_loot(&self) -> bool;
    /// Wields a main-hand weapon it can use.
    fn has_usable_weapon(&self) -> bool;

    /// Combat resurrection state of the instance the unit is in.
    fn combat_resurrection(&self) -> Option<CombatResurrectionState>;
}

/// Object a spell is aimed at.
#[derive(Clone, Copy)]
pub enum CastTarget<'a> {
    Unit(&'a dyn CastUnit),
    Corpse(CorpseView<'a>),
    /// Game objects and items carry no unit restrictions.
    Object(ObjectGuid),
}

impl<'a> CastTarget<'a> {
    pub fn guid(&self) -> ObjectGuid {
        match self {
            Self::Unit(unit) => unit.guid(),
            Self::Corpse(corpse) => corpse.guid,
            Self::Object(guid) => *guid,
        }
    }

    pub fn as_unit(&self) -> Option<&'a dyn CastUnit> {
        match self {
            Self::Unit(unit) => Some(*unit),
            _ => None,
        }
    }
}

impl fmt::Debug for CastTarget<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit(unit) => f.debug_tuple("Unit").field(&unit.guid()).finish(),
            Self::Corpse(corpse) => f.debug_tuple("Corpse").field(&corpse.guid).finish(),
            Self::Object(guid) => f.debug_tuple("Object").field(guid).finish(),
        }
    }
}

/// A corpse together with its owner, when the owner is online.
#[derive(Clone, Copy)]
pub struct CorpseView<'a> {
    pub guid: ObjectGuid,
    /// Bones are what remains after the owner resurrected or released.
    pub is_bones: bool,
    pub owner: Option<&'a dyn CastUnit>,
}

/// Seat a passenger occupies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleSeat {
    pub flags: VehicleSeatFlags,
}

impl VehicleSeat {
    pub const fn new(flags: VehicleSeatFlags) -> Self {
        Self { flags }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatResurrectionState {
    pub charges: u32,
    pub encounter_in_progress: bool,
}
