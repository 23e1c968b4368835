//! In-memory tables backing [`SpellTablesOracle`].

use std::collections::BTreeMap;

use super::{
    AreaInfo, MapInfo, ShapeshiftFormInfo, SpellArea, SpellTablesOracle, SummonPropertiesInfo,
};
use crate::defines::Powers;
use crate::info::SpellId;

/// Serializable snapshot of every lookup table the rules consult.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TablesSnapshot {
    pub max_base_power: BTreeMap<Powers, i32>,
    pub shapeshift_forms: BTreeMap<u32, ShapeshiftFormInfo>,
    pub summon_properties: BTreeMap<u32, SummonPropertiesInfo>,
    pub maps: BTreeMap<u32, MapInfo>,
    pub areas: BTreeMap<u32, AreaInfo>,
    pub area_groups: BTreeMap<u32, Vec<u32>>,
    pub mounts: BTreeMap<SpellId, u32>,
    pub spell_areas: Vec<SpellArea>,
    pub npc_mana_cost_scaler: BTreeMap<u32, f32>,
}

impl TablesSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_base_power(mut self, power: Powers, amount: i32) -> Self {
        self.max_base_power.insert(power, amount);
        self
    }

    pub fn with_shapeshift_form(mut self, form: u32, info: ShapeshiftFormInfo) -> Self {
        self.shapeshift_forms.insert(form, info);
        self
    }

    pub fn with_summon_properties(mut self, id: u32, info: SummonPropertiesInfo) -> Self {
        self.summon_properties.insert(id, info);
        self
    }

    pub fn with_map(mut self, map_id: u32, info: MapInfo) -> Self {
        self.maps.insert(map_id, info);
        self
    }

    pub fn with_area(mut self, area_id: u32, info: AreaInfo) -> Self {
        self.areas.insert(area_id, info);
        self
    }

    pub fn with_area_group(mut self, group_id: u32, members: Vec<u32>) -> Self {
        self.area_groups.insert(group_id, members);
        self
    }

    pub fn with_mount(mut self, spell_id: SpellId, mount_type: u32) -> Self {
        self.mounts.insert(spell_id, mount_type);
        self
    }

    pub fn with_spell_area(mut self, area: SpellArea) -> Self {
        self.spell_areas.push(area);
        self
    }

    pub fn with_npc_mana_cost_scaler(mut self, level: u32, scaler: f32) -> Self {
        self.npc_mana_cost_scaler.insert(level, scaler);
        self
    }
}

impl SpellTablesOracle for TablesSnapshot {
    fn max_base_power(&self, power: Powers) -> Option<i32> {
        self.max_base_power.get(&power).copied()
    }

    fn shapeshift_form(&self, form: u32) -> Option<ShapeshiftFormInfo> {
        self.shapeshift_forms.get(&form).copied()
    }

    fn summon_properties(&self, id: u32) -> Option<SummonPropertiesInfo> {
        self.summon_properties.get(&id).copied()
    }

    fn map(&self, map_id: u32) -> Option<MapInfo> {
        self.maps.get(&map_id).copied()
    }

    fn area(&self, area_id: u32) -> Option<AreaInfo> {
        self.areas.get(&area_id).copied()
    }

    fn area_group_members(&self, group_id: u32) -> Vec<u32> {
        self.area_groups.get(&group_id).cloned().unwrap_or_default()
    }

    fn mount_type_for_spell(&self, spell_id: SpellId) -> Option<u32> {
        self.mounts.get(&spell_id).copied()
    }

    fn spell_areas(&self, spell_id: SpellId) -> Vec<SpellArea> {
        self.spell_areas
            .iter()
            .filter(|area| area.spell_id == spell_id)
            .copied()
            .collect()
    }

    fn npc_mana_cost_scaler(&self, level: u32) -> Option<f32> {
        self.npc_mana_cost_scaler.get(&level).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_area_resolves_through_parents() {
        let tables = TablesSnapshot::new()
            .with_area(10, AreaInfo { parent_area_id: 0, ..Default::default() })
            .with_area(11, AreaInfo { parent_area_id: 10, ..Default::default() })
            .with_area(12, AreaInfo { parent_area_id: 11, ..Default::default() });

        assert!(tables.is_in_area(12, 10));
        assert!(tables.is_in_area(10, 10));
        assert!(!tables.is_in_area(10, 12));
        assert!(!tables.is_in_area(99, 10));
    }

    #[test]
    fn spell_areas_filter_by_spell() {
        let tables = TablesSnapshot::new()
            .with_spell_area(SpellArea { spell_id: 1, area_id: 5, ..Default::default() })
            .with_spell_area(SpellArea { spell_id: 2, area_id: 6, ..Default::default() });

        let areas = tables.spell_areas(1);
        assert_eq!(areas.len(), 1);
        assert_eq!(areas[0].area_id, 5);
        assert!(tables.spell_areas(3).is_empty());
    }
}
