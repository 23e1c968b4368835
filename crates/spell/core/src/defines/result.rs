//! Closed set of cast-check outcomes.

/// Outcome of a cast legality check.
///
/// Every validator returns one of these; a failed check is a value, never an
/// error, so callers can report the exact reason to the player.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpellCastResult {
    #[default]
    SpellCastOk,
    BadTargets,
    BadImplicitTargets,
    IncorrectArea,
    RequiresArea,
    NotInRaidInstance,
    TargetNotInInstance,
    NotInBattleground,
    NotInArena,
    NotInRatedBattleground,
    OnlyBattlegrounds,
    OnlyOutdoors,
    TargetNotGhost,
    TargetNotDead,
    TargetAffectingCombat,
    TargetFriendly,
    TargetEnemy,
    CantCastOnTapped,
    TargetNoPockets,
    TargetNoWeapons,
    TargetNotPlayer,
    TargetIsPlayerControlled,
    TargetIsPlayer,
    TargetsDead,
    BmOrInvisgod,
    TargetAurastate,
    CasterAurastate,
    TargetCannotBeResurrected,
    NotShapeshift,
    OnlyShapeshift,
    NotHere,
    NotMounted,
    CantDoThatRightNow,
}

impl SpellCastResult {
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::SpellCastOk)
    }
}
