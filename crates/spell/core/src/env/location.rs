use crate::defines::AuraType;
use crate::info::SpellId;

/// Where a cast takes place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CastLocation {
    pub map_id: u32,
    pub zone_id: u32,
    pub area_id: u32,
}

impl CastLocation {
    pub const fn new(map_id: u32, zone_id: u32, area_id: u32) -> Self {
        Self {
            map_id,
            zone_id,
            area_id,
        }
    }
}

/// Lifecycle stage of a battleground instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattlegroundStatus {
    WaitQueue,
    WaitJoin,
    InProgress,
    WaitLeave,
}

/// Quest progress as far as area requirements care.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QuestProgress {
    #[default]
    None,
    Active,
    Complete,
    Rewarded,
}

/// Player state consulted by location checks.
pub trait LocationContext {
    fn has_aura(&self, spell_id: SpellId) -> bool;
    fn has_aura_type(&self, aura: AuraType) -> bool;
    /// Misc values of every active aura of `aura` type.
    fn aura_misc_values(&self, aura: AuraType) -> Vec<i32>;
    fn has_spell(&self, spell_id: SpellId) -> bool;
    fn has_mount_capability(&self, mount_type: u32) -> bool;
    fn in_battleground(&self) -> bool;
    fn battleground_status(&self) -> Option<BattlegroundStatus>;
    fn race_mask(&self) -> u64;
    fn gender(&self) -> u8;
    fn quest_progress(&self, quest_id: u32) -> QuestProgress;
}
