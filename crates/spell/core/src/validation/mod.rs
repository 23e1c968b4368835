//! Cast-time validators.
//!
//! Each check reads a finished [`SpellInfo`](crate::info::SpellInfo) together
//! with a view of the world and answers with a
//! [`SpellCastResult`](crate::defines::SpellCastResult). Checks never mutate
//! anything; the first failing rule decides the result.
//!
//! | check | world view |
//! |-------|------------|
//! | `check_explicit_target` | caster and target [`CastUnit`](crate::env::CastUnit)s |
//! | `check_target` | caster and target units, corpse owner |
//! | `check_location` | [`CastLocation`](crate::env::CastLocation), [`LocationContext`](crate::env::LocationContext), tables |
//! | `check_shapeshift` | form id, tables |
//! | `check_vehicle` | caster unit, tables |

mod explicit;
mod location;
mod shapeshift;
mod target;
mod vehicle;

#[cfg(test)]
pub(crate) mod testkit;

/// Battleground and arena auras whose legality depends on the instance.
pub mod battleground {
    use crate::info::SpellId;

    /// Warsong Gulch map.
    pub const WARSONG_GULCH_MAP: u32 = 489;
    /// Eye of the Storm map.
    pub const EYE_OF_THE_STORM_MAP: u32 = 566;
    /// Wintergrasp zone, which behaves like a battleground for some auras.
    pub const WINTERGRASP_ZONE: u32 = 4197;

    pub const WARSONG_FLAG: SpellId = 23333;
    pub const SILVERWING_FLAG: SpellId = 23335;
    pub const NETHERSTORM_FLAG: SpellId = 34976;

    /// Waiting to Resurrect, Recently Dropped Flag, Inactive, Spirit Heal.
    pub const BATTLEGROUND_OR_WINTERGRASP: [SpellId; 4] = [2584, 42792, 43681, 44535];
    /// Gold and green team auras of both factions.
    pub const ARENA_TEAMS: [SpellId; 4] = [32724, 32725, 35774, 35775];
    pub const ARENA_PREPARATION: SpellId = 32727;
}

/// Flying-area pathfinder requirements, keyed by cosmetic parent map.
pub(crate) const PATHFINDER_REQUIREMENTS: &[(&[u32], crate::info::SpellId)] = &[
    // Draenor
    (&[1116, 1464], 191645),
    // Broken Isles
    (&[1220], 233368),
    // Kul Tiras and Zandalar
    (&[1642, 1643], 278833),
];

/// Warlock spell category that may never be cast on players.
pub(crate) const NO_PLAYER_TARGET_CATEGORY: u32 = 1179;
