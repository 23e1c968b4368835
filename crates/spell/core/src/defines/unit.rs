//! Unit-side enumerations referenced by spell data.

use bitflags::bitflags;

/// Resource a spell cost is paid from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::FromRepr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i8)]
pub enum Powers {
    Health = -2,
    Mana = 0,
    Rage = 1,
    Focus = 2,
    Energy = 3,
    ComboPoints = 4,
    Runes = 5,
    RunicPower = 6,
    SoulShards = 7,
    LunarPower = 8,
    HolyPower = 9,
    AlternatePower = 10,
    Maelstrom = 11,
    Chi = 12,
    Insanity = 13,
    BurningEmbers = 14,
    DemonicFury = 15,
    ArcaneCharges = 16,
    Fury = 17,
    Pain = 18,
    Essence = 19,
}

impl Powers {
    /// Number of regular power types (health excluded).
    pub const MAX_POWERS: usize = 20;

    pub fn from_raw(raw: i32) -> Option<Self> {
        i8::try_from(raw).ok().and_then(Self::from_repr)
    }

    /// Bit of this power inside a power-type mask, `None` for health.
    pub const fn mask_bit(self) -> Option<u32> {
        match self {
            Self::Health => None,
            other => Some(1 << (other as i8 as u32)),
        }
    }
}

/// Class family a spell belongs to; keys the per-class rule tables.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum SpellFamilyName {
    #[default]
    Generic = 0,
    Events = 1,
    Mage = 3,
    Warrior = 4,
    Warlock = 5,
    Priest = 6,
    Druid = 7,
    Rogue = 8,
    Hunter = 9,
    Paladin = 10,
    Shaman = 11,
    Potion = 13,
    DeathKnight = 15,
    Pet = 17,
    Totems = 50,
    Monk = 53,
    WarlockPet = 57,
    DemonHunter = 107,
    Evoker = 224,
}

impl SpellFamilyName {
    pub fn from_raw(raw: u32) -> Option<Self> {
        Self::from_repr(raw)
    }
}

/// 128-bit class ability flags, stored as four words.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellFamilyFlags(pub [u32; 4]);

impl SpellFamilyFlags {
    pub const fn new(w0: u32, w1: u32, w2: u32, w3: u32) -> Self {
        Self([w0, w1, w2, w3])
    }

    pub const fn word(&self, index: usize) -> u32 {
        self.0[index]
    }

    /// True when any bit is shared with `other`.
    pub fn intersects(&self, other: &Self) -> bool {
        self.0.iter().zip(other.0.iter()).any(|(a, b)| a & b != 0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|w| *w == 0)
    }
}

/// Creature classification used by target creature-type masks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::FromRepr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum CreatureType {
    Beast = 1,
    Dragonkin = 2,
    Demon = 3,
    Elemental = 4,
    Giant = 5,
    Undead = 6,
    Humanoid = 7,
    Critter = 8,
    Mechanical = 9,
    NotSpecified = 10,
    Totem = 11,
    NonCombatPet = 12,
    GasCloud = 13,
    WildPet = 14,
    Aberration = 15,
}

impl CreatureType {
    pub const fn mask(self) -> u32 {
        1 << (self as u32 - 1)
    }
}

/// Caster or target states referenced by aura-state requirements.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum AuraStateType {
    #[default]
    None = 0,
    Defensive = 1,
    Wounded20Percent = 2,
    Unbalanced = 3,
    Frozen = 4,
    Marked = 5,
    Wounded25Percent = 6,
    Defensive2 = 7,
    Banished = 8,
    Dazed = 9,
    Victorious = 10,
    Rampage = 11,
    FaerieFire = 12,
    Wounded35Percent = 13,
    RaidEncounter2 = 14,
    DruidPeriodicHeal = 15,
    RoguePoisoned = 16,
    Enraged = 17,
    Bleed = 18,
    Vulnerable = 19,
    ArenaPreparation = 20,
    WoundHealth20To80 = 21,
    RaidEncounter = 22,
    Healthy75Percent = 23,
    WoundHealth35To80 = 24,
}

impl AuraStateType {
    /// Bit of this state inside an aura-state mask; `None` maps to no bit.
    pub const fn mask(self) -> u32 {
        match self {
            Self::None => 0,
            other => 1 << (other as u32 - 1),
        }
    }

    pub fn from_raw(raw: u32) -> Option<Self> {
        u8::try_from(raw).ok().and_then(Self::from_repr)
    }
}

/// Categorical tag used for mutual exclusion between same-kind buffs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::FromRepr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum SpellSpecificType {
    #[default]
    Normal = 0,
    Seal = 1,
    Aura = 3,
    Sting = 4,
    Curse = 5,
    Aspect = 6,
    Tracker = 7,
    WarlockArmor = 8,
    MageArmor = 9,
    ElementalShield = 10,
    MagePolymorph = 11,
    Judgement = 13,
    WarlockCorruption = 17,
    Food = 19,
    Drink = 20,
    FoodAndDrink = 21,
    Presence = 22,
    Charm = 23,
    Scroll = 24,
    MageArcaneBrillance = 25,
    WarriorEnrage = 26,
    PriestDivineSpirit = 27,
    Hand = 28,
    Phase = 29,
    Bane = 30,
}

// ============================================================================
// Diminishing returns
// ============================================================================

/// Bucket a harmful crowd-control effect diminishes in.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiminishingGroup {
    #[default]
    None,
    AoeKnockback,
    Taunt,
    Disorient,
    Incapacitate,
    Root,
    Silence,
    Stun,
    LimitOnly,
}

/// Target kinds a diminishing group applies against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiminishingReturnsType {
    /// Never diminishes.
    #[default]
    None,
    /// Diminishes against player-controlled targets only.
    Player,
    /// Diminishes against every target.
    All,
}

/// Successive suppression steps; the last reachable level is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiminishingLevel {
    Level1,
    Level2,
    Level3,
    #[default]
    Immune,
    Level4,
    TauntImmune,
}

// ============================================================================
// Shapeshift & vehicles
// ============================================================================

bitflags! {
    /// Flags carried by a shapeshift form table entry.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct ShapeshiftFormFlags: u32 {
        const STANCE                          = 0x0000_0001;
        const NOT_TOGGLEABLE                  = 0x0000_0002;
        const PERSIST_ON_DEATH                = 0x0000_0004;
        const CAN_INTERACT_NPC                = 0x0000_0008;
        const DONT_USE_WEAPON                 = 0x0000_0010;
        const CAN_USE_EQUIPPED_ITEMS          = 0x0000_0040;
        const CAN_USE_ITEMS                   = 0x0000_0080;
        const DONT_AUTO_UNSHIFT               = 0x0000_0100;
        const CONSIDERED_DEAD                 = 0x0000_0200;
        const CAN_ONLY_CAST_SHAPESHIFT_SPELLS = 0x0000_0400;
        const STANCE_CANCELS_AT_FLIGHTMASTER  = 0x0000_0800;
        const NO_EMOTE_SOUNDS                 = 0x0000_1000;
        const NO_TRIGGER_TELEPORT             = 0x0000_2000;
        const CANNOT_CHANGE_EQUIPPED_ITEMS    = 0x0000_4000;
        const CANNOT_USE_GAME_OBJECTS         = 0x0001_0000;
    }
}

bitflags! {
    /// Capabilities granted to a passenger by a vehicle seat.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct VehicleSeatFlags: u32 {
        const HAS_LOWER_ANIM_FOR_ENTER = 0x0000_0001;
        const HAS_LOWER_ANIM_FOR_RIDE  = 0x0000_0002;
        const SHOULD_USE_VEH_SEAT_EXIT_ANIM_ON_VOLUNTARY_EXIT = 0x0000_0008;
        const HIDE_PASSENGER           = 0x0000_0200;
        const ALLOW_TURNING            = 0x0000_0400;
        const CAN_CONTROL              = 0x0000_0800;
        const CAN_CAST_MOUNT_SPELL     = 0x0000_1000;
        const UNCONTROLLED             = 0x0000_2000;
        const CAN_ATTACK               = 0x0000_4000;
        const CAN_ENTER_OR_EXIT        = 0x0200_0000;
        const CAN_SWITCH               = 0x0400_0000;
        const CAN_CAST                 = 0x2000_0000;
    }
}

/// Control category of a summon properties entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::FromRepr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum SummonCategory {
    #[default]
    Wild = 0,
    Ally = 1,
    Pet = 2,
    Puppet = 3,
    Vehicle = 4,
    Unk = 5,
}

bitflags! {
    /// Events that interrupt an applied aura.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct SpellAuraInterruptFlags: u32 {
        const HOSTILE_ACTION      = 0x0000_0001;
        const DAMAGE              = 0x0000_0002;
        const ACTION              = 0x0000_0004;
        const MOVING              = 0x0000_0008;
        const TURNING             = 0x0000_0010;
        const ANIM                = 0x0000_0020;
        const DISMOUNT            = 0x0000_0040;
        const UNDER_WATER         = 0x0000_0080;
        const ABOVE_WATER         = 0x0000_0100;
        const SHEATHING           = 0x0000_0200;
        const INTERACTING         = 0x0000_0400;
        const LOOTING             = 0x0000_0800;
        const ATTACKING           = 0x0000_1000;
        const ITEM_USE            = 0x0000_2000;
        const DAMAGE_CHANNEL_DURATION = 0x0000_4000;
        const SHAPESHIFTING       = 0x0000_8000;
        const ACTION_DELAYED      = 0x0001_0000;
        const MOUNT               = 0x0002_0000;
        const STANDING            = 0x0004_0000;
        const LEAVE_WORLD         = 0x0008_0000;
        const STEALTH_OR_INVIS    = 0x0010_0000;
        const INVULNERABILITY_BUFF = 0x0020_0000;
        const ENTER_WORLD         = 0x0040_0000;
        const PVP_ACTIVE          = 0x0080_0000;
        const NON_PERIODIC_DAMAGE = 0x0100_0000;
        const LANDING_OR_FLIGHT   = 0x0200_0000;
        const RELEASE             = 0x0400_0000;
        const DAMAGE_CANCELS_SCRIPT = 0x0800_0000;
        const ENTERING_COMBAT     = 0x1000_0000;
        const LOGIN               = 0x2000_0000;
        const SUMMON              = 0x4000_0000;
        const LEAVING_COMBAT      = 0x8000_0000;

        const NOT_VICTIM = Self::HOSTILE_ACTION.bits()
            | Self::DAMAGE.bits()
            | Self::NON_PERIODIC_DAMAGE.bits();
    }
}
