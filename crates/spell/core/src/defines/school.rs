//! Spell schools and school masks.

use bitflags::bitflags;

/// A single damage/magic school.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumIter,
    strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum SpellSchool {
    Normal = 0,
    Holy = 1,
    Fire = 2,
    Nature = 3,
    Frost = 4,
    Shadow = 5,
    Arcane = 6,
}

impl SpellSchool {
    pub const COUNT: usize = 7;

    /// Returns the mask with only this school set.
    #[inline]
    pub const fn mask(self) -> SpellSchoolMask {
        SpellSchoolMask::from_bits_retain(1 << self as u32)
    }
}

bitflags! {
    /// Set of schools a spell, aura or immunity applies to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct SpellSchoolMask: u32 {
        const NORMAL = 1 << 0;
        const HOLY   = 1 << 1;
        const FIRE   = 1 << 2;
        const NATURE = 1 << 3;
        const FROST  = 1 << 4;
        const SHADOW = 1 << 5;
        const ARCANE = 1 << 6;

        const SPELL = Self::FIRE.bits()
            | Self::NATURE.bits()
            | Self::FROST.bits()
            | Self::SHADOW.bits()
            | Self::ARCANE.bits();
        const MAGIC = Self::HOLY.bits() | Self::SPELL.bits();
        const ALL = Self::NORMAL.bits() | Self::MAGIC.bits();
    }
}

impl SpellSchoolMask {
    /// Lowest school present in the mask, used for single-school lookups.
    pub fn first_school(self) -> Option<SpellSchool> {
        if self.is_empty() {
            return None;
        }
        SpellSchool::from_repr(self.bits().trailing_zeros() as u8)
    }
}

/// How a spell's hit and damage are resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::FromRepr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum SpellDmgClass {
    #[default]
    None = 0,
    Magic = 1,
    Melee = 2,
    Ranged = 3,
}

impl SpellDmgClass {
    pub fn from_raw(raw: u32) -> Option<Self> {
        u8::try_from(raw).ok().and_then(Self::from_repr)
    }
}

bitflags! {
    /// Crowd-control states that prevent casting the spell.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct SpellPreventionType: u32 {
        const SILENCE    = 1 << 0;
        const PACIFY     = 1 << 1;
        const NO_ACTIONS = 1 << 2;
    }
}
