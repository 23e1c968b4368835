//! Implicit target descriptors and explicit target flags.

use bitflags::bitflags;

use super::SpellEffectName;

bitflags! {
    /// Target categories a cast request may carry explicitly.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct SpellCastTargetFlags: u32 {
        const UNIT            = 0x0000_0002;
        const UNIT_RAID       = 0x0000_0004;
        const UNIT_PARTY      = 0x0000_0008;
        const ITEM            = 0x0000_0010;
        const SOURCE_LOCATION = 0x0000_0020;
        const DEST_LOCATION   = 0x0000_0040;
        const UNIT_ENEMY      = 0x0000_0080;
        const UNIT_ALLY       = 0x0000_0100;
        const CORPSE_ENEMY    = 0x0000_0200;
        const UNIT_DEAD       = 0x0000_0400;
        const GAMEOBJECT      = 0x0000_0800;
        const TRADE_ITEM      = 0x0000_1000;
        const STRING          = 0x0000_2000;
        const GAMEOBJECT_ITEM = 0x0000_4000;
        const CORPSE_ALLY     = 0x0000_8000;
        const UNIT_MINIPET    = 0x0001_0000;
        const GLYPH_SLOT      = 0x0002_0000;
        const DEST_TARGET     = 0x0004_0000;
        const EXTRA_TARGETS   = 0x0008_0000;
        const UNIT_PASSENGER  = 0x0010_0000;

        const UNIT_MASK = Self::UNIT.bits()
            | Self::UNIT_RAID.bits()
            | Self::UNIT_PARTY.bits()
            | Self::UNIT_ENEMY.bits()
            | Self::UNIT_ALLY.bits()
            | Self::UNIT_DEAD.bits()
            | Self::UNIT_MINIPET.bits()
            | Self::UNIT_PASSENGER.bits();
        const GAMEOBJECT_MASK = Self::GAMEOBJECT.bits() | Self::GAMEOBJECT_ITEM.bits();
        const CORPSE_MASK = Self::CORPSE_ALLY.bits() | Self::CORPSE_ENEMY.bits();
        const ITEM_MASK = Self::TRADE_ITEM.bits() | Self::ITEM.bits() | Self::GAMEOBJECT_ITEM.bits();
    }
}

/// What kind of object an implicit target resolves to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpellTargetObjectType {
    #[default]
    None,
    Src,
    Dest,
    Unit,
    UnitAndDest,
    Gobj,
    GobjItem,
    Item,
    Corpse,
    CorpseEnemy,
    CorpseAlly,
}

impl SpellTargetObjectType {
    /// Explicit target flags that can provide an object of this type.
    pub const fn target_flag_mask(self) -> SpellCastTargetFlags {
        match self {
            Self::Dest => SpellCastTargetFlags::DEST_LOCATION,
            Self::UnitAndDest => SpellCastTargetFlags::DEST_LOCATION.union(SpellCastTargetFlags::UNIT),
            Self::CorpseAlly => SpellCastTargetFlags::CORPSE_ALLY,
            Self::CorpseEnemy => SpellCastTargetFlags::CORPSE_ENEMY,
            Self::Corpse => SpellCastTargetFlags::CORPSE_MASK,
            Self::Unit => SpellCastTargetFlags::UNIT,
            Self::Gobj => SpellCastTargetFlags::GAMEOBJECT,
            Self::GobjItem => SpellCastTargetFlags::GAMEOBJECT_ITEM,
            Self::Item => SpellCastTargetFlags::ITEM,
            Self::Src => SpellCastTargetFlags::SOURCE_LOCATION,
            Self::None => SpellCastTargetFlags::empty(),
        }
    }

    pub const fn is_corpse(self) -> bool {
        matches!(self, Self::Corpse | Self::CorpseAlly | Self::CorpseEnemy)
    }
}

/// Object the target selection is anchored to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpellTargetReferenceType {
    #[default]
    None,
    Caster,
    Target,
    Last,
    Src,
    Dest,
}

/// How candidates are gathered around the reference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpellTargetSelectionCategory {
    #[default]
    Nyi,
    Default,
    Channel,
    Nearby,
    Cone,
    Area,
    Traj,
    Line,
}

/// Relationship a candidate must have with the caster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpellTargetCheckType {
    #[default]
    Default,
    Entry,
    Enemy,
    Ally,
    Party,
    Raid,
    RaidClass,
    Passenger,
    Summoned,
    Threat,
    Tap,
}

/// Implicit target identifiers as stored in effect records.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum Targets {
    #[default]
    None = 0,
    UnitCaster = 1,
    UnitNearbyEnemy = 2,
    UnitNearbyAlly = 3,
    UnitNearbyParty = 4,
    UnitPet = 5,
    UnitTargetEnemy = 6,
    UnitSrcAreaEntry = 7,
    UnitDestAreaEntry = 8,
    DestHome = 9,
    UnitSrcAreaEnemy = 15,
    UnitDestAreaEnemy = 16,
    DestDb = 17,
    DestCaster = 18,
    UnitCasterAreaParty = 20,
    UnitTargetAlly = 21,
    SrcCaster = 22,
    GameobjectTarget = 23,
    UnitConeEnemy24 = 24,
    UnitTargetAny = 25,
    GameobjectItemTarget = 26,
    UnitMaster = 27,
    DestDynobjEnemy = 28,
    DestDynobjAlly = 29,
    UnitSrcAreaAlly = 30,
    UnitDestAreaAlly = 31,
    DestCasterSummon = 32,
    UnitSrcAreaParty = 33,
    UnitDestAreaParty = 34,
    UnitTargetParty = 35,
    UnitLasttargetAreaParty = 37,
    UnitNearbyEntry = 38,
    GameobjectNearbyEntry = 40,
    UnitChainhealAlly = 45,
    DestNearbyEntry = 46,
    DestCasterFront = 47,
    DestCasterBack = 48,
    DestTargetEnemy = 53,
    UnitCone180DegEnemy = 54,
    DestCasterFrontLeap = 55,
    UnitCasterAreaRaid = 56,
    UnitTargetRaid = 57,
    UnitNearbyRaid = 58,
    UnitConeAlly = 59,
    UnitConeEntry = 60,
    UnitTargetAreaRaidClass = 61,
    DestCasterGround = 62,
    DestTargetAny = 63,
    DestCasterRandom = 72,
    DestCasterRadius = 73,
    DestTargetRandom = 74,
    DestTargetRadius = 75,
    DestChannelTarget = 76,
    UnitChannelTarget = 77,
    DestDest = 87,
    DestDynobjNone = 88,
    DestTraj = 89,
    UnitTargetMinipet = 90,
    UnitTargetPassenger = 111,
    CorpseSrcAreaEnemy = 116,
    CorpseTargetAlly = 118,
    CorpseSrcAreaRaid = 119,
}

/// Static selection rules for one [`Targets`] value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TargetDescriptor {
    pub object_type: SpellTargetObjectType,
    pub reference_type: SpellTargetReferenceType,
    pub selection_category: SpellTargetSelectionCategory,
    pub check_type: SpellTargetCheckType,
}

impl TargetDescriptor {
    const fn new(
        object_type: SpellTargetObjectType,
        reference_type: SpellTargetReferenceType,
        selection_category: SpellTargetSelectionCategory,
        check_type: SpellTargetCheckType,
    ) -> Self {
        Self {
            object_type,
            reference_type,
            selection_category,
            check_type,
        }
    }
}

impl Targets {
    pub fn from_raw(raw: u32) -> Option<Self> {
        Self::from_repr(raw)
    }

    /// Selection rules for this implicit target.
    pub const fn descriptor(self) -> TargetDescriptor {
        use SpellTargetCheckType as C;
        use SpellTargetObjectType as O;
        use SpellTargetReferenceType as R;
        use SpellTargetSelectionCategory as S;

        match self {
            Self::None => TargetDescriptor::new(O::None, R::None, S::Nyi, C::Default),
            Self::UnitCaster => TargetDescriptor::new(O::Unit, R::Caster, S::Default, C::Default),
            Self::UnitNearbyEnemy => TargetDescriptor::new(O::Unit, R::Caster, S::Nearby, C::Enemy),
            Self::UnitNearbyAlly => TargetDescriptor::new(O::Unit, R::Caster, S::Nearby, C::Ally),
            Self::UnitNearbyParty => TargetDescriptor::new(O::Unit, R::Caster, S::Nearby, C::Party),
            Self::UnitPet => TargetDescriptor::new(O::Unit, R::Caster, S::Default, C::Default),
            Self::UnitTargetEnemy => TargetDescriptor::new(O::Unit, R::Target, S::Default, C::Enemy),
            Self::UnitSrcAreaEntry => TargetDescriptor::new(O::Unit, R::Src, S::Area, C::Entry),
            Self::UnitDestAreaEntry => TargetDescriptor::new(O::Unit, R::Dest, S::Area, C::Entry),
            Self::DestHome => TargetDescriptor::new(O::Dest, R::Caster, S::Default, C::Default),
            Self::UnitSrcAreaEnemy => TargetDescriptor::new(O::Unit, R::Src, S::Area, C::Enemy),
            Self::UnitDestAreaEnemy => TargetDescriptor::new(O::Unit, R::Dest, S::Area, C::Enemy),
            Self::DestDb => TargetDescriptor::new(O::Dest, R::Caster, S::Default, C::Default),
            Self::DestCaster => TargetDescriptor::new(O::Dest, R::Caster, S::Default, C::Default),
            Self::UnitCasterAreaParty => TargetDescriptor::new(O::Unit, R::Caster, S::Area, C::Party),
            Self::UnitTargetAlly => TargetDescriptor::new(O::Unit, R::Target, S::Default, C::Ally),
            Self::SrcCaster => TargetDescriptor::new(O::Src, R::Caster, S::Default, C::Default),
            Self::GameobjectTarget => TargetDescriptor::new(O::Gobj, R::Target, S::Default, C::Default),
            Self::UnitConeEnemy24 => TargetDescriptor::new(O::Unit, R::Caster, S::Cone, C::Enemy),
            Self::UnitTargetAny => TargetDescriptor::new(O::Unit, R::Target, S::Default, C::Default),
            Self::GameobjectItemTarget => {
                TargetDescriptor::new(O::GobjItem, R::Target, S::Default, C::Default)
            }
            Self::UnitMaster => TargetDescriptor::new(O::Unit, R::Caster, S::Default, C::Default),
            Self::DestDynobjEnemy => TargetDescriptor::new(O::Dest, R::Caster, S::Default, C::Enemy),
            Self::DestDynobjAlly => TargetDescriptor::new(O::Dest, R::Caster, S::Default, C::Ally),
            Self::UnitSrcAreaAlly => TargetDescriptor::new(O::Unit, R::Src, S::Area, C::Ally),
            Self::UnitDestAreaAlly => TargetDescriptor::new(O::Unit, R::Dest, S::Area, C::Ally),
            Self::DestCasterSummon => TargetDescriptor::new(O::Dest, R::Caster, S::Default, C::Default),
            Self::UnitSrcAreaParty => TargetDescriptor::new(O::Unit, R::Src, S::Area, C::Party),
            Self::UnitDestAreaParty => TargetDescriptor::new(O::Unit, R::Dest, S::Area, C::Party),
            Self::UnitTargetParty => TargetDescriptor::new(O::Unit, R::Target, S::Default, C::Party),
            Self::UnitLasttargetAreaParty => TargetDescriptor::new(O::Unit, R::Last, S::Area, C::Party),
            Self::UnitNearbyEntry => TargetDescriptor::new(O::Unit, R::Caster, S::Nearby, C::Entry),
            Self::GameobjectNearbyEntry => {
                TargetDescriptor::new(O::Gobj, R::Caster, S::Nearby, C::Entry)
            }
            Self::UnitChainhealAlly => TargetDescriptor::new(O::Unit, R::Target, S::Default, C::Ally),
            Self::DestNearbyEntry => TargetDescriptor::new(O::Dest, R::Caster, S::Nearby, C::Entry),
            Self::DestCasterFront | Self::DestCasterBack | Self::DestCasterFrontLeap => {
                TargetDescriptor::new(O::Dest, R::Caster, S::Default, C::Default)
            }
            Self::DestTargetEnemy => TargetDescriptor::new(O::Dest, R::Target, S::Default, C::Enemy),
            Self::UnitCone180DegEnemy => TargetDescriptor::new(O::Unit, R::Caster, S::Cone, C::Enemy),
            Self::UnitCasterAreaRaid => TargetDescriptor::new(O::Unit, R::Caster, S::Area, C::Raid),
            Self::UnitTargetRaid => TargetDescriptor::new(O::Unit, R::Target, S::Default, C::Raid),
            Self::UnitNearbyRaid => TargetDescriptor::new(O::Unit, R::Caster, S::Nearby, C::Raid),
            Self::UnitConeAlly => TargetDescriptor::new(O::Unit, R::Caster, S::Cone, C::Ally),
            Self::UnitConeEntry => TargetDescriptor::new(O::Unit, R::Caster, S::Cone, C::Entry),
            Self::UnitTargetAreaRaidClass => {
                TargetDescriptor::new(O::Unit, R::Target, S::Area, C::RaidClass)
            }
            Self::DestCasterGround
            | Self::DestCasterRandom
            | Self::DestCasterRadius => TargetDescriptor::new(O::Dest, R::Caster, S::Default, C::Default),
            Self::DestTargetAny | Self::DestTargetRandom | Self::DestTargetRadius => {
                TargetDescriptor::new(O::Dest, R::Target, S::Default, C::Default)
            }
            Self::DestChannelTarget => TargetDescriptor::new(O::Dest, R::Caster, S::Channel, C::Default),
            Self::UnitChannelTarget => TargetDescriptor::new(O::Unit, R::Caster, S::Channel, C::Default),
            Self::DestDest => TargetDescriptor::new(O::Dest, R::Dest, S::Default, C::Default),
            Self::DestDynobjNone => TargetDescriptor::new(O::Dest, R::Caster, S::Default, C::Default),
            Self::DestTraj => TargetDescriptor::new(O::Dest, R::Caster, S::Traj, C::Default),
            Self::UnitTargetMinipet => TargetDescriptor::new(O::Unit, R::Target, S::Default, C::Default),
            Self::UnitTargetPassenger => {
                TargetDescriptor::new(O::Unit, R::Target, S::Default, C::Passenger)
            }
            Self::CorpseSrcAreaEnemy => TargetDescriptor::new(O::CorpseEnemy, R::Src, S::Area, C::Enemy),
            Self::CorpseTargetAlly => {
                TargetDescriptor::new(O::CorpseAlly, R::Target, S::Default, C::Ally)
            }
            Self::CorpseSrcAreaRaid => TargetDescriptor::new(O::CorpseAlly, R::Src, S::Area, C::Raid),
        }
    }
}

/// How an effect chooses its targets when no implicit target is configured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EffectImplicitTargetType {
    /// Effect never needs a target.
    #[default]
    None,
    /// Effect uses the explicit target of the cast.
    Explicit,
    /// Effect selects its own targets (area auras).
    Caster,
}

impl SpellEffectName {
    /// Implicit target behavior and the object type the effect operates on.
    pub const fn implicit_target_info(self) -> (EffectImplicitTargetType, SpellTargetObjectType) {
        use EffectImplicitTargetType as I;
        use SpellTargetObjectType as O;

        match self {
            Self::None => (I::None, O::None),
            Self::TeleportUnits | Self::TeleportUnitsFaceCaster => (I::Explicit, O::UnitAndDest),
            Self::PersistentAreaAura
            | Self::Summon
            | Self::TriggerMissile
            | Self::TriggerMissileSpellWithValue
            | Self::TransDoor
            | Self::SummonObjectWild
            | Self::ChargeDest
            | Self::KnockBackDest
            | Self::PullTowardsDest
            | Self::JumpDest
            | Self::LeapBack => (I::Explicit, O::Dest),
            Self::OpenLock => (I::Explicit, O::GobjItem),
            Self::EnchantItem
            | Self::EnchantItemTemporary
            | Self::Disenchant
            | Self::Prospecting
            | Self::Milling
            | Self::RechargeItem => (I::Explicit, O::Item),
            Self::GameObjectDamage | Self::GameObjectRepair | Self::ActivateObject => {
                (I::Explicit, O::Gobj)
            }
            Self::SkinPlayerCorpse => (I::Explicit, O::Corpse),
            Self::ApplyAreaAuraParty
            | Self::ApplyAreaAuraRaid
            | Self::ApplyAreaAuraPet
            | Self::ApplyAreaAuraFriend
            | Self::ApplyAreaAuraEnemy
            | Self::ApplyAreaAuraOwner
            | Self::ApplyAreaAuraSummons => (I::Caster, O::Unit),
            Self::Language | Self::Proficiency | Self::DualWield | Self::TitanGrip | Self::Skill => {
                (I::Caster, O::Unit)
            }
            _ => (I::Explicit, O::Unit),
        }
    }
}
