//! Spell attribute flag groups.
//!
//! Raw spell records carry fifteen independent 32-bit attribute words. Only the
//! bits the engine reasons about are named; unnamed bits are kept verbatim
//! (`from_bits_retain`) so nothing is lost between load and query.

use bitflags::bitflags;

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct SpellAttr0: u32 {
        const PROC_FAILURE_BURNS_CHARGE       = 1 << 0;
        const USES_RANGED_SLOT                = 1 << 1;
        const ON_NEXT_SWING_NO_DAMAGE         = 1 << 2;
        const IS_ABILITY                      = 1 << 4;
        const IS_TRADESKILL                   = 1 << 5;
        const PASSIVE                         = 1 << 6;
        const DO_NOT_DISPLAY                  = 1 << 7;
        const ON_NEXT_SWING                   = 1 << 10;
        const SERVER_ONLY                     = 1 << 12;
        const ONLY_INDOORS                    = 1 << 14;
        const ONLY_OUTDOORS                   = 1 << 15;
        const NOT_SHAPESHIFTED                = 1 << 16;
        const ONLY_STEALTHED                  = 1 << 17;
        const SCALES_WITH_CREATURE_LEVEL      = 1 << 19;
        const CANCELS_AUTO_ATTACK_COMBAT      = 1 << 20;
        const ALLOW_CAST_WHILE_DEAD           = 1 << 23;
        const ALLOW_WHILE_MOUNTED             = 1 << 24;
        const COOLDOWN_ON_EVENT               = 1 << 25;
        const AURA_IS_DEBUFF                  = 1 << 26;
        const ALLOW_WHILE_SITTING             = 1 << 27;
        const NOT_IN_COMBAT_ONLY_PEACEFUL     = 1 << 28;
        const NO_IMMUNITIES                   = 1 << 29;
        const HEARTBEAT_RESIST                = 1 << 30;
        const NO_AURA_CANCEL                  = 1 << 31;
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct SpellAttr1: u32 {
        const DISMISS_PET_FIRST                       = 1 << 0;
        const USE_ALL_MANA                            = 1 << 1;
        const IS_CHANNELLED                           = 1 << 2;
        const NO_REDIRECTION                          = 1 << 3;
        const ALLOW_WHILE_STEALTHED                   = 1 << 5;
        const IS_SELF_CHANNELLED                      = 1 << 6;
        const NO_REFLECTION                           = 1 << 7;
        const ONLY_PEACEFUL_TARGETS                   = 1 << 8;
        const NO_THREAT                               = 1 << 10;
        const AURA_UNIQUE                             = 1 << 11;
        const FAILURE_BREAKS_STEALTH                  = 1 << 12;
        const TRACK_TARGET_IN_CHANNEL                 = 1 << 14;
        const IMMUNITY_PURGES_EFFECT                  = 1 << 15;
        const IMMUNITY_TO_HOSTILE_AND_FRIENDLY_EFFECTS = 1 << 16;
        const EXCLUDE_CASTER                          = 1 << 19;
        const FINISHING_MOVE_DAMAGE                   = 1 << 20;
        const FINISHING_MOVE_DURATION                 = 1 << 22;
        const AURA_STAYS_AFTER_COMBAT                 = 1 << 24;
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct SpellAttr2: u32 {
        const ALLOW_DEAD_TARGET                        = 1 << 0;
        const NO_SHAPESHIFT_UI                         = 1 << 1;
        const IGNORE_LINE_OF_SIGHT                     = 1 << 2;
        const ALLOW_LOW_LEVEL_BUFF                     = 1 << 3;
        const AUTO_REPEAT                              = 1 << 5;
        const CANNOT_CAST_ON_TAPPED                    = 1 << 6;
        const ALLOW_WHILE_NOT_SHAPESHIFTED_CASTER_FORM = 1 << 19;
        const NO_TARGET_PER_SECOND_COSTS               = 1 << 22;
        const NO_SCHOOL_IMMUNITIES                     = 1 << 26;
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct SpellAttr3: u32 {
        const PVP_ENABLING              = 1 << 0;
        const NO_PROC_EQUIP_REQUIREMENT = 1 << 1;
        const ONLY_ON_PLAYER            = 1 << 8;
        const REQUIRES_MAIN_HAND_WEAPON = 1 << 10;
        const ONLY_BATTLEGROUNDS        = 1 << 11;
        const ONLY_ON_GHOSTS            = 1 << 12;
        const ALLOW_AURA_WHILE_DEAD     = 1 << 20;
        const REQUIRES_OFF_HAND_WEAPON  = 1 << 24;
        const NOT_ON_AOE_IMMUNE         = 1 << 31;
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct SpellAttr4: u32 {
        const NO_CAST_LOG                        = 1 << 0;
        const CANNOT_BE_STOLEN                   = 1 << 6;
        const WEAPON_SPEED_COST_SCALING          = 1 << 10;
        const AURA_IS_BUFF                       = 1 << 12;
        const NOT_IN_ARENA_OR_RATED_BATTLEGROUND = 1 << 16;
        const ONLY_FLYING_AREAS                  = 1 << 20;
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct SpellAttr5: u32 {
        const ALLOW_ACTIONS_DURING_CHANNEL       = 1 << 0;
        const ALLOW_WHILE_STUNNED                = 1 << 3;
        const SINGLE_TARGET_AURA                 = 1 << 5;
        const NOT_ON_PLAYER                      = 1 << 8;
        const NOT_ON_PLAYER_CONTROLLED_NPC       = 1 << 9;
        const ALLOW_WHILE_FLEEING                = 1 << 17;
        const ALLOW_WHILE_CONFUSED               = 1 << 18;
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct SpellAttr6: u32 {
        const NOT_IN_RAID_INSTANCES                    = 1 << 8;
        const ALLOW_WHILE_RIDING_VEHICLE               = 1 << 11;
        const IGNORE_PHASE_SHIFT                       = 1 << 12;
        const DO_NOT_CHAIN_TO_CROWD_CONTROLLED_TARGETS = 1 << 22;
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct SpellAttr7: u32 {
        const ALLOW_SPELL_REFLECTION     = 1 << 0;
        const BYPASS_NO_RESURRECT_AURA   = 1 << 11;
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct SpellAttr8: u32 {
        const NOT_IN_BATTLEGROUND               = 1 << 16;
        const REMOVE_OUTSIDE_DUNGEONS_AND_RAIDS = 1 << 20;
        const BATTLE_RESURRECTION               = 1 << 23;
        const ONLY_TARGET_OWN_SUMMONS           = 1 << 30;
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct SpellAttr9: u32 {
        const ONLY_WHEN_ILLEGALLY_MOUNTED = 1 << 0;
        const AUTOCAST_OFF_BY_DEFAULT     = 1 << 16;
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct SpellAttr10: u32 {
        const USE_SPELL_BASE_LEVEL_FOR_SCALING = 1 << 1;
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct SpellAttr11: u32 {
        const SCALES_WITH_ITEM_LEVEL = 1 << 2;
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct SpellAttr12: u32 {
        const ONLY_PROC_FROM_CLASS_ABILITIES = 1 << 24;
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct SpellAttr13: u32 {
        const ACTIVATES_REQUIRED_SHAPESHIFT = 1 << 17;
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct SpellAttr14: u32 {
        const REAPPLY_EXTEND_DURATION = 1 << 0;
    }
}

bitflags! {
    /// Attributes assigned by the engine's own corrections rather than the
    /// raw records.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct SpellCustomAttributes: u32 {
        const ENCHANT_PROC          = 1 << 0;
        const CONE_BACK             = 1 << 1;
        const CONE_LINE             = 1 << 2;
        const SHARE_DAMAGE          = 1 << 3;
        const NO_INITIAL_THREAT     = 1 << 4;
        const IS_TALENT             = 1 << 5;
        const AURA_CC               = 1 << 6;
        const DONT_BREAK_STEALTH    = 1 << 7;
        const CAN_CRIT              = 1 << 8;
        const DIRECT_DAMAGE         = 1 << 9;
        const CHARGE                = 1 << 10;
        const PICKPOCKET            = 1 << 11;
        const DEATH_PERSISTENT      = 1 << 12;
        const REQ_TARGET_FACING_CASTER = 1 << 13;
        const REQ_CASTER_BEHIND_TARGET = 1 << 14;
        const ALLOW_INFLIGHT_TARGET = 1 << 15;
        const NEEDS_AMMO_DATA       = 1 << 16;
        const BINARY_SPELL          = 1 << 17;
        const SCHOOLMASK_NORMAL_WITH_MAGIC = 1 << 18;
        const IGNORE_ARMOR          = 1 << 19;
    }
}

/// Index of one attribute word, used by [`crate::info::SpellInfo::has_attribute`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpellAttribute {
    Attr0(SpellAttr0),
    Attr1(SpellAttr1),
    Attr2(SpellAttr2),
    Attr3(SpellAttr3),
    Attr4(SpellAttr4),
    Attr5(SpellAttr5),
    Attr6(SpellAttr6),
    Attr7(SpellAttr7),
    Attr8(SpellAttr8),
    Custom(SpellCustomAttributes),
}

macro_rules! impl_attribute_from {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for SpellAttribute {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_attribute_from! {
    Attr0 => SpellAttr0,
    Attr1 => SpellAttr1,
    Attr2 => SpellAttr2,
    Attr3 => SpellAttr3,
    Attr4 => SpellAttr4,
    Attr5 => SpellAttr5,
    Attr6 => SpellAttr6,
    Attr7 => SpellAttr7,
    Attr8 => SpellAttr8,
    Custom => SpellCustomAttributes,
}
