use bitflags::bitflags;

use crate::defines::{Powers, ShapeshiftFormFlags, SummonCategory};
use crate::info::SpellId;

/// Oracle providing the lookup tables spell rules consult at cast time.
///
/// Every lookup is by id and returns `None` for ids the tables do not know;
/// callers log and fall back to a conservative default.
pub trait SpellTablesOracle: Send + Sync {
    /// Maximum base amount of a power type, used for percentage costs.
    fn max_base_power(&self, power: Powers) -> Option<i32>;
    fn shapeshift_form(&self, form: u32) -> Option<ShapeshiftFormInfo>;
    fn summon_properties(&self, id: u32) -> Option<SummonPropertiesInfo>;
    fn map(&self, map_id: u32) -> Option<MapInfo>;
    fn area(&self, area_id: u32) -> Option<AreaInfo>;
    /// Member areas of an area group.
    fn area_group_members(&self, group_id: u32) -> Vec<u32>;
    /// Mount type granted by a mount spell.
    fn mount_type_for_spell(&self, spell_id: SpellId) -> Option<u32>;
    /// Area requirements of a spell; empty when the spell is unrestricted.
    fn spell_areas(&self, spell_id: SpellId) -> Vec<SpellArea>;
    /// NPC mana cost scaler for a level.
    fn npc_mana_cost_scaler(&self, level: u32) -> Option<f32>;

    /// Whether `area_id` is `zone_id` or nested inside it.
    fn is_in_area(&self, area_id: u32, zone_id: u32) -> bool {
        let mut current = area_id;
        // Area trees are shallow; the bound only guards against bad data.
        for _ in 0..16 {
            if current == zone_id {
                return true;
            }
            match self.area(current) {
                Some(area) if area.parent_area_id != 0 => current = area.parent_area_id,
                _ => return false,
            }
        }
        false
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShapeshiftFormInfo {
    pub flags: ShapeshiftFormFlags,
    /// Attack interval in milliseconds while in the form.
    pub combat_round_time: u32,
    pub mount_type_id: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SummonPropertiesInfo {
    pub control: SummonCategory,
}

/// Instance type of a map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MapKind {
    #[default]
    Common,
    Dungeon,
    Raid,
    Battleground,
    Arena,
    Scenario,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapInfo {
    pub kind: MapKind,
    /// Map whose rules a phased copy follows; the map itself when not phased.
    pub cosmetic_parent_map_id: Option<u32>,
}

impl MapInfo {
    pub fn is_dungeon(&self) -> bool {
        matches!(self.kind, MapKind::Dungeon | MapKind::Raid | MapKind::Scenario)
    }

    pub fn is_raid(&self) -> bool {
        self.kind == MapKind::Raid
    }

    pub fn is_battleground(&self) -> bool {
        self.kind == MapKind::Battleground
    }

    pub fn is_battle_arena(&self) -> bool {
        self.kind == MapKind::Arena
    }
}

bitflags! {
    /// Which mounts an area allows.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct AreaMountFlags: u32 {
        const ALLOW_GROUND_MOUNTS     = 0x1;
        const ALLOW_FLYING_MOUNTS     = 0x2;
        const ALLOW_SURFACE_SWIMMING  = 0x4;
        const ALLOW_UNDERWATER_MOUNTS = 0x8;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AreaInfo {
    pub parent_area_id: u32,
    pub mount_flags: AreaMountFlags,
}

/// One area requirement row of a spell.
///
/// A spell with area rows may only be cast when at least one row fits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpellArea {
    pub spell_id: SpellId,
    /// Zone or area id; `0` matches everywhere.
    pub area_id: u32,
    /// Quest that must be active or completed; `0` for none.
    pub quest_start: u32,
    /// Quest that must not be rewarded yet; `0` for none.
    pub quest_end: u32,
    /// Positive: aura the player needs. Negative: aura the player must lack.
    pub aura_spell: i32,
    /// `0` allows every race.
    pub race_mask: u64,
    /// `None` allows both genders.
    pub gender: Option<u8>,
}
