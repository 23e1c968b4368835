use tracing::debug;

use super::{PATHFINDER_REQUIREMENTS, battleground as bg};
use crate::defines::{AuraType, SpellAttr4, SpellAttr6, SpellAttr8, SpellCastResult};
use crate::env::{
    AreaMountFlags, BattlegroundStatus, CastLocation, LocationContext, MapInfo, QuestProgress,
    SpellArea, SpellTablesOracle,
};
use crate::info::SpellInfo;

impl SpellInfo {
    /// Checks whether the spell may be cast at `location`.
    ///
    /// `player` is the casting player; creature casts pass `None` and skip
    /// every player-specific rule.
    pub fn check_location(
        &self,
        location: CastLocation,
        player: Option<&dyn LocationContext>,
        tables: &dyn SpellTablesOracle,
    ) -> SpellCastResult {
        let CastLocation {
            map_id,
            zone_id,
            area_id,
        } = location;

        if self.required_area_id > 0 {
            let group = self.required_area_id.unsigned_abs();
            let inside = tables
                .area_group_members(group)
                .into_iter()
                .any(|member| tables.is_in_area(area_id, member));
            if !inside {
                return SpellCastResult::IncorrectArea;
            }
        }

        if self.has_attribute(SpellAttr4::ONLY_FLYING_AREAS) {
            let result = self.check_flying_area(location, player, tables);
            if !result.is_ok() {
                return result;
            }
        }

        let map = tables.map(map_id);

        if self.has_attribute(SpellAttr6::NOT_IN_RAID_INSTANCES) && map.is_none_or(|m| m.is_raid()) {
            return SpellCastResult::NotInRaidInstance;
        }

        if self.has_attribute(SpellAttr8::REMOVE_OUTSIDE_DUNGEONS_AND_RAIDS)
            && !map.is_some_and(|m| m.is_dungeon())
        {
            return SpellCastResult::TargetNotInInstance;
        }

        if self.has_attribute(SpellAttr8::NOT_IN_BATTLEGROUND)
            && map.is_none_or(|m| m.is_battleground())
        {
            return SpellCastResult::NotInBattleground;
        }

        let areas = tables.spell_areas(self.id);
        if !areas.is_empty() {
            return if areas.iter().any(|area| area_fits(area, player, zone_id, area_id)) {
                SpellCastResult::SpellCastOk
            } else {
                SpellCastResult::IncorrectArea
            };
        }

        if let Some(result) = self.check_battleground_aura(location, map, player) {
            return result;
        }

        match player {
            Some(player) => self.check_mount_effects(player, tables),
            None => SpellCastResult::SpellCastOk,
        }
    }

    fn check_flying_area(
        &self,
        location: CastLocation,
        player: Option<&dyn LocationContext>,
        tables: &dyn SpellTablesOracle,
    ) -> SpellCastResult {
        let restricted = player.filter(|p| p.has_aura_type(AuraType::MountRestrictions));
        let mount_flags = match restricted {
            Some(player) => player
                .aura_misc_values(AuraType::MountRestrictions)
                .into_iter()
                .fold(AreaMountFlags::empty(), |acc, misc| {
                    acc | AreaMountFlags::from_bits_retain(misc as u32)
                }),
            None => tables
                .area(location.area_id)
                .map(|area| area.mount_flags)
                .unwrap_or_default(),
        };

        if !mount_flags.contains(AreaMountFlags::ALLOW_FLYING_MOUNTS) {
            return SpellCastResult::IncorrectArea;
        }

        let Some(player) = player else {
            return SpellCastResult::SpellCastOk;
        };

        let map_to_check = tables
            .map(location.map_id)
            .and_then(|map| map.cosmetic_parent_map_id)
            .unwrap_or(location.map_id);
        let missing_pathfinder = PATHFINDER_REQUIREMENTS
            .iter()
            .find(|(maps, _)| maps.contains(&map_to_check))
            .is_some_and(|&(_, achievement)| !player.has_spell(achievement));
        if missing_pathfinder {
            debug!(spell_id = self.id, map_id = map_to_check, "flying needs pathfinder");
            return SpellCastResult::IncorrectArea;
        }

        SpellCastResult::SpellCastOk
    }

    /// Result for battleground and arena auras, `None` for every other spell.
    fn check_battleground_aura(
        &self,
        location: CastLocation,
        map: Option<MapInfo>,
        player: Option<&dyn LocationContext>,
    ) -> Option<SpellCastResult> {
        let in_battleground = player.is_some_and(|p| p.in_battleground());
        let allow = |ok: bool| {
            if ok {
                SpellCastResult::SpellCastOk
            } else {
                SpellCastResult::RequiresArea
            }
        };

        let result = match self.id {
            bg::WARSONG_FLAG | bg::SILVERWING_FLAG => {
                allow(location.map_id == bg::WARSONG_GULCH_MAP && in_battleground)
            }
            bg::NETHERSTORM_FLAG => {
                allow(location.map_id == bg::EYE_OF_THE_STORM_MAP && in_battleground)
            }
            id if bg::BATTLEGROUND_OR_WINTERGRASP.contains(&id) => match map {
                None => SpellCastResult::IncorrectArea,
                Some(map) => allow(
                    location.zone_id == bg::WINTERGRASP_ZONE
                        || (map.is_battleground() && in_battleground),
                ),
            },
            id if bg::ARENA_TEAMS.contains(&id) => match map {
                None => SpellCastResult::IncorrectArea,
                Some(map) => allow(map.is_battle_arena() && in_battleground),
            },
            bg::ARENA_PREPARATION => match map {
                None => SpellCastResult::IncorrectArea,
                Some(map) if !map.is_battle_arena() => SpellCastResult::RequiresArea,
                Some(_) => allow(
                    player.and_then(|p| p.battleground_status())
                        == Some(BattlegroundStatus::WaitJoin),
                ),
            },
            _ => return None,
        };
        Some(result)
    }

    /// Mount and mount-like shapeshift auras need a matching capability.
    fn check_mount_effects(
        &self,
        player: &dyn LocationContext,
        tables: &dyn SpellTablesOracle,
    ) -> SpellCastResult {
        for effect in self.effects().iter().filter(|e| e.is_aura()) {
            match effect.apply_aura_name {
                AuraType::ModShapeshift => {
                    let mount_type = u32::try_from(effect.misc_value)
                        .ok()
                        .and_then(|form| tables.shapeshift_form(form))
                        .map_or(0, |form| form.mount_type_id);
                    if mount_type != 0 && !player.has_mount_capability(mount_type) {
                        return SpellCastResult::NotHere;
                    }
                }
                AuraType::Mounted => {
                    let mount_type = tables
                        .mount_type_for_spell(self.id)
                        .unwrap_or(effect.misc_value_b as u32);
                    if mount_type != 0 && !player.has_mount_capability(mount_type) {
                        return SpellCastResult::NotMounted;
                    }
                }
                _ => {}
            }
        }
        SpellCastResult::SpellCastOk
    }
}

/// Whether one area row admits the cast.
fn area_fits(
    area: &SpellArea,
    player: Option<&dyn LocationContext>,
    zone_id: u32,
    area_id: u32,
) -> bool {
    if let Some(gender) = area.gender
        && player.is_none_or(|p| p.gender() != gender)
    {
        return false;
    }

    if area.race_mask != 0 && player.is_none_or(|p| p.race_mask() & area.race_mask == 0) {
        return false;
    }

    if area.area_id != 0 && zone_id != area.area_id && area_id != area.area_id {
        return false;
    }

    if area.quest_start != 0
        && player.is_none_or(|p| {
            !matches!(
                p.quest_progress(area.quest_start),
                QuestProgress::Active | QuestProgress::Complete
            )
        })
    {
        return false;
    }

    if area.quest_end != 0
        && player.is_none_or(|p| p.quest_progress(area.quest_end) == QuestProgress::Rewarded)
    {
        return false;
    }

    if area.aura_spell != 0 {
        let aura = area.aura_spell.unsigned_abs();
        let Some(player) = player else {
            return false;
        };
        let has = player.has_aura(aura);
        if (area.aura_spell > 0) != has {
            return false;
        }
    }

    true
}
