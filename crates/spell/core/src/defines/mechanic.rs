//! Mechanics and dispel types.

/// Behavioral category of a crowd-control or utility effect.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
pub enum Mechanic {
    #[default]
    None = 0,
    Charm = 1,
    Disoriented = 2,
    Disarm = 3,
    Distract = 4,
    Fear = 5,
    Grip = 6,
    Root = 7,
    SlowAttack = 8,
    Silence = 9,
    Sleep = 10,
    Snare = 11,
    Stun = 12,
    Freeze = 13,
    Knockout = 14,
    Bleed = 15,
    Bandage = 16,
    Polymorph = 17,
    Banish = 18,
    Shield = 19,
    Shackle = 20,
    Mount = 21,
    Infected = 22,
    Turn = 23,
    Horror = 24,
    Invulnerability = 25,
    Interrupt = 26,
    Daze = 27,
    Discovery = 28,
    ImmuneShield = 29,
    Sapped = 30,
    Enraged = 31,
    Wounded = 32,
    Infected2 = 33,
    Infected3 = 34,
    Infected4 = 35,
    Taunted = 36,
}

impl Mechanic {
    pub const COUNT: usize = 37;

    /// Single-bit mask for this mechanic; [`Mechanic::None`] maps to an empty mask.
    #[inline]
    pub const fn mask(self) -> u64 {
        match self {
            Self::None => 0,
            other => 1u64 << other as u64,
        }
    }

    /// Converts a raw misc value, returning `None` for out-of-range ids.
    pub fn from_raw(raw: i32) -> Option<Self> {
        u8::try_from(raw).ok().and_then(Self::from_repr)
    }
}

/// Builds a mechanic mask from a list of mechanics.
pub const fn mechanic_mask(mechanics: &[Mechanic]) -> u64 {
    let mut mask = 0u64;
    let mut i = 0;
    while i < mechanics.len() {
        mask |= mechanics[i].mask();
        i += 1;
    }
    mask
}

/// Every loss-of-control and movement-impairing mechanic.
pub const IMMUNE_TO_MOVEMENT_IMPAIRMENT_AND_LOSS_CONTROL_MASK: u64 = mechanic_mask(&[
    Mechanic::Charm,
    Mechanic::Disoriented,
    Mechanic::Fear,
    Mechanic::Root,
    Mechanic::Sleep,
    Mechanic::Snare,
    Mechanic::Stun,
    Mechanic::Freeze,
    Mechanic::Silence,
    Mechanic::Disarm,
    Mechanic::Knockout,
    Mechanic::Polymorph,
    Mechanic::Banish,
    Mechanic::Shackle,
    Mechanic::Turn,
    Mechanic::Horror,
    Mechanic::Daze,
    Mechanic::Sapped,
]);

/// How an aura can be removed by dispel effects.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
pub enum DispelType {
    #[default]
    None = 0,
    Magic = 1,
    Curse = 2,
    Disease = 3,
    Poison = 4,
    Stealth = 5,
    Invisibility = 6,
    All = 7,
    SpeNpcOnly = 8,
    Enrage = 9,
    ZgTicket = 10,
    OldUnused = 11,
}

impl DispelType {
    /// Bitmask with every concrete dispel type except [`DispelType::All`] itself.
    pub const ALL_MASK: u32 = (1 << DispelType::Magic as u32)
        | (1 << DispelType::Curse as u32)
        | (1 << DispelType::Disease as u32)
        | (1 << DispelType::Poison as u32);

    /// Converts a raw misc value, returning `None` for unknown ids.
    pub fn from_raw(raw: i32) -> Option<Self> {
        u8::try_from(raw).ok().and_then(Self::from_repr)
    }

    /// Mask used to match auras against a dispel of this type.
    ///
    /// [`DispelType::All`] expands to [`DispelType::ALL_MASK`]; every other
    /// type yields exactly its own bit.
    pub const fn mask(self) -> u32 {
        match self {
            Self::All => Self::ALL_MASK,
            other => 1 << other as u32,
        }
    }
}
