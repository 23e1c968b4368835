//! Groups flat table rows into per-`(spell, difficulty)` load units.
//!
//! Difficulty-specific rows override the difficulty `0` rows field by field;
//! anything missing for a difficulty falls back to the base rows. Effect slots
//! fall back per index.

use std::collections::{BTreeMap, BTreeSet};

use tracing::warn;

use super::{
    EffectRecord, SpellCastTimesEntry, SpellDurationEntry, SpellInfoLoadHelper, SpellNameEntry,
    SpellRadiusEntry, SpellRangeEntry, SpellTables,
};
use crate::config::SpellConfig;
use crate::info::{BASE_DIFFICULTY, Difficulty, SpellId};

type Key = (SpellId, Difficulty);

/// Everything the assembler needs to build one [`SpellInfo`](crate::SpellInfo).
#[derive(Clone, Debug, PartialEq)]
pub struct SpellLoadUnit {
    pub name: SpellNameEntry,
    pub difficulty: Difficulty,
    pub helper: SpellInfoLoadHelper,
    /// Effect rows in slot order; gaps are filled by the assembler.
    pub effects: Vec<EffectRecord>,
}

/// Id-indexed views over the referenced lookup tables.
struct Lookups<'a> {
    durations: BTreeMap<u32, &'a SpellDurationEntry>,
    cast_times: BTreeMap<u32, &'a SpellCastTimesEntry>,
    ranges: BTreeMap<u32, &'a SpellRangeEntry>,
    radii: BTreeMap<u32, &'a SpellRadiusEntry>,
}

impl<'a> Lookups<'a> {
    fn new(tables: &'a SpellTables) -> Self {
        Self {
            durations: tables.durations.iter().map(|e| (e.id, e)).collect(),
            cast_times: tables.cast_times.iter().map(|e| (e.id, e)).collect(),
            ranges: tables.ranges.iter().map(|e| (e.id, e)).collect(),
            radii: tables.radii.iter().map(|e| (e.id, e)).collect(),
        }
    }

    fn resolve<T: Clone>(
        map: &BTreeMap<u32, &T>,
        index: u32,
        spell_id: SpellId,
        table: &'static str,
    ) -> Option<T> {
        if index == 0 {
            return None;
        }
        let found = map.get(&index).map(|entry| (*entry).clone());
        if found.is_none() {
            warn!(spell_id, index, table, "spell references a missing lookup row");
        }
        found
    }
}

fn place_single<T: Clone>(
    data: &mut BTreeMap<Key, SpellInfoLoadHelper>,
    rows: &[T],
    key: impl Fn(&T) -> Key,
    slot: fn(&mut SpellInfoLoadHelper) -> &mut Option<T>,
    table: &'static str,
) {
    for row in rows {
        let (spell_id, difficulty) = key(row);
        let target = slot(data.entry((spell_id, difficulty)).or_default());
        if target.is_some() {
            warn!(spell_id, difficulty, table, "duplicate row ignored");
            continue;
        }
        *target = Some(row.clone());
    }
}

fn place_many<T: Clone>(
    data: &mut BTreeMap<Key, SpellInfoLoadHelper>,
    rows: &[T],
    key: impl Fn(&T) -> Key,
    slot: fn(&mut SpellInfoLoadHelper) -> &mut Vec<T>,
) {
    for row in rows {
        slot(data.entry(key(row)).or_default()).push(row.clone());
    }
}

fn merge_option<T: Clone>(own: &Option<T>, base: &Option<T>) -> Option<T> {
    own.clone().or_else(|| base.clone())
}

fn merge_vec<T: Clone>(own: &[T], base: &[T]) -> Vec<T> {
    if own.is_empty() { base.to_vec() } else { own.to_vec() }
}

/// Overlays `own` on top of `base`, field by field.
fn merge_helpers(own: &SpellInfoLoadHelper, base: &SpellInfoLoadHelper) -> SpellInfoLoadHelper {
    let mut powers = own.powers.clone();
    for power in &base.powers {
        if !powers.iter().any(|p| p.order_index == power.order_index) {
            powers.push(power.clone());
        }
    }
    powers.sort_by_key(|p| p.order_index);

    SpellInfoLoadHelper {
        misc: merge_option(&own.misc, &base.misc),
        scaling: merge_option(&own.scaling, &base.scaling),
        aura_options: merge_option(&own.aura_options, &base.aura_options),
        aura_restrictions: merge_option(&own.aura_restrictions, &base.aura_restrictions),
        casting_requirements: merge_option(&own.casting_requirements, &base.casting_requirements),
        categories: merge_option(&own.categories, &base.categories),
        class_options: merge_option(&own.class_options, &base.class_options),
        cooldowns: merge_option(&own.cooldowns, &base.cooldowns),
        equipped_items: merge_option(&own.equipped_items, &base.equipped_items),
        interrupts: merge_option(&own.interrupts, &base.interrupts),
        labels: merge_vec(&own.labels, &base.labels),
        levels: merge_option(&own.levels, &base.levels),
        powers,
        reagents: merge_option(&own.reagents, &base.reagents),
        reagents_currency: merge_vec(&own.reagents_currency, &base.reagents_currency),
        shapeshift: merge_option(&own.shapeshift, &base.shapeshift),
        target_restrictions: merge_option(&own.target_restrictions, &base.target_restrictions),
        totems: merge_option(&own.totems, &base.totems),
        visuals: merge_vec(&own.visuals, &base.visuals),
        empower_stages: merge_vec(&own.empower_stages, &base.empower_stages),
        duration: None,
        casting_time: None,
        range: None,
    }
}

/// Groups every table row by `(spell, difficulty)`.
///
/// One unit is produced for difficulty `0` of every named spell, plus one per
/// additional difficulty that has at least one row of its own. Rows whose
/// spell has no name entry are dropped with a warning.
pub fn group_records(tables: &SpellTables) -> Vec<SpellLoadUnit> {
    let lookups = Lookups::new(tables);
    let mut data: BTreeMap<Key, SpellInfoLoadHelper> = BTreeMap::new();
    let mut effects: BTreeMap<Key, BTreeMap<u32, EffectRecord>> = BTreeMap::new();

    for row in &tables.effects {
        if row.effect_index as usize >= SpellConfig::MAX_SPELL_EFFECTS {
            warn!(
                spell_id = row.spell_id,
                effect_index = row.effect_index,
                "effect index exceeds slot capacity, row skipped"
            );
            continue;
        }
        let slots = effects.entry((row.spell_id, row.difficulty_id)).or_default();
        if slots.contains_key(&row.effect_index) {
            warn!(
                spell_id = row.spell_id,
                effect_index = row.effect_index,
                "duplicate effect row ignored"
            );
            continue;
        }
        let radius = row.effect_radius_index.map(|index| {
            Lookups::resolve(&lookups.radii, index, row.spell_id, "SpellRadius")
        });
        slots.insert(
            row.effect_index,
            EffectRecord {
                entry: row.clone(),
                radius,
            },
        );
    }

    place_single(&mut data, &tables.misc, |r| (r.spell_id, r.difficulty_id), |h| &mut h.misc, "SpellMisc");
    place_single(&mut data, &tables.scaling, |r| (r.spell_id, BASE_DIFFICULTY), |h| &mut h.scaling, "SpellScaling");
    place_single(&mut data, &tables.aura_options, |r| (r.spell_id, r.difficulty_id), |h| &mut h.aura_options, "SpellAuraOptions");
    place_single(&mut data, &tables.aura_restrictions, |r| (r.spell_id, r.difficulty_id), |h| &mut h.aura_restrictions, "SpellAuraRestrictions");
    place_single(&mut data, &tables.casting_requirements, |r| (r.spell_id, BASE_DIFFICULTY), |h| &mut h.casting_requirements, "SpellCastingRequirements");
    place_single(&mut data, &tables.categories, |r| (r.spell_id, r.difficulty_id), |h| &mut h.categories, "SpellCategories");
    place_single(&mut data, &tables.class_options, |r| (r.spell_id, BASE_DIFFICULTY), |h| &mut h.class_options, "SpellClassOptions");
    place_single(&mut data, &tables.cooldowns, |r| (r.spell_id, r.difficulty_id), |h| &mut h.cooldowns, "SpellCooldowns");
    place_single(&mut data, &tables.equipped_items, |r| (r.spell_id, BASE_DIFFICULTY), |h| &mut h.equipped_items, "SpellEquippedItems");
    place_single(&mut data, &tables.interrupts, |r| (r.spell_id, r.difficulty_id), |h| &mut h.interrupts, "SpellInterrupts");
    place_single(&mut data, &tables.levels, |r| (r.spell_id, r.difficulty_id), |h| &mut h.levels, "SpellLevels");
    place_single(&mut data, &tables.reagents, |r| (r.spell_id, BASE_DIFFICULTY), |h| &mut h.reagents, "SpellReagents");
    place_single(&mut data, &tables.shapeshift, |r| (r.spell_id, BASE_DIFFICULTY), |h| &mut h.shapeshift, "SpellShapeshift");
    place_single(&mut data, &tables.target_restrictions, |r| (r.spell_id, r.difficulty_id), |h| &mut h.target_restrictions, "SpellTargetRestrictions");
    place_single(&mut data, &tables.totems, |r| (r.spell_id, BASE_DIFFICULTY), |h| &mut h.totems, "SpellTotems");

    place_many(&mut data, &tables.labels, |r| (r.spell_id, BASE_DIFFICULTY), |h| &mut h.labels);
    place_many(&mut data, &tables.reagents_currency, |r| (r.spell_id, BASE_DIFFICULTY), |h| &mut h.reagents_currency);
    place_many(&mut data, &tables.visuals, |r| (r.spell_id, r.difficulty_id), |h| &mut h.visuals);
    place_many(&mut data, &tables.empower_stages, |r| (r.spell_id, BASE_DIFFICULTY), |h| &mut h.empower_stages);

    for power in &tables.powers {
        let helper = data.entry((power.spell_id, power.difficulty_id)).or_default();
        if power.order_index as usize >= SpellConfig::MAX_POWERS_PER_SPELL {
            warn!(
                spell_id = power.spell_id,
                order_index = power.order_index,
                "power cost slot exceeds capacity, row skipped"
            );
            continue;
        }
        if helper.powers.iter().any(|p| p.order_index == power.order_index) {
            warn!(
                spell_id = power.spell_id,
                order_index = power.order_index,
                "duplicate power cost slot ignored"
            );
            continue;
        }
        helper.powers.push(power.clone());
    }

    let names: BTreeMap<SpellId, &SpellNameEntry> =
        tables.names.iter().map(|name| (name.id, name)).collect();

    for &(spell_id, _) in data.keys().chain(effects.keys()) {
        if !names.contains_key(&spell_id) {
            warn!(spell_id, "rows reference a spell without a name entry");
        }
    }

    let empty_helper = SpellInfoLoadHelper::default();
    let empty_effects = BTreeMap::new();
    let mut units = Vec::new();

    for (&spell_id, name) in &names {
        let mut difficulties: BTreeSet<Difficulty> = BTreeSet::from([BASE_DIFFICULTY]);
        difficulties.extend(
            data.range((spell_id, Difficulty::MIN)..=(spell_id, Difficulty::MAX))
                .map(|((_, d), _)| *d),
        );
        difficulties.extend(
            effects
                .range((spell_id, Difficulty::MIN)..=(spell_id, Difficulty::MAX))
                .map(|((_, d), _)| *d),
        );

        let base_helper = data.get(&(spell_id, BASE_DIFFICULTY)).unwrap_or(&empty_helper);
        let base_effects = effects
            .get(&(spell_id, BASE_DIFFICULTY))
            .unwrap_or(&empty_effects);

        for difficulty in difficulties {
            let mut helper = if difficulty == BASE_DIFFICULTY {
                base_helper.clone()
            } else {
                let own = data.get(&(spell_id, difficulty)).unwrap_or(&empty_helper);
                merge_helpers(own, base_helper)
            };

            if let Some(misc) = &helper.misc {
                helper.duration =
                    Lookups::resolve(&lookups.durations, misc.duration_index, spell_id, "SpellDuration");
                helper.casting_time = Lookups::resolve(
                    &lookups.cast_times,
                    misc.casting_time_index,
                    spell_id,
                    "SpellCastTimes",
                );
                helper.range =
                    Lookups::resolve(&lookups.ranges, misc.range_index, spell_id, "SpellRange");
            }

            let mut slots = effects
                .get(&(spell_id, difficulty))
                .cloned()
                .unwrap_or_default();
            if difficulty != BASE_DIFFICULTY {
                for (index, record) in base_effects {
                    slots.entry(*index).or_insert_with(|| record.clone());
                }
            }

            units.push(SpellLoadUnit {
                name: (*name).clone(),
                difficulty,
                helper,
                effects: slots.into_values().collect(),
            });
        }
    }

    units
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{SpellDurationEntry, SpellEffectEntry, SpellMiscEntry};

    fn named(id: SpellId) -> SpellNameEntry {
        SpellNameEntry {
            id,
            name: format!("Spell {id}"),
        }
    }

    fn effect(spell_id: SpellId, difficulty_id: Difficulty, effect_index: u32, effect: u32) -> SpellEffectEntry {
        SpellEffectEntry {
            spell_id,
            difficulty_id,
            effect_index,
            effect,
            ..Default::default()
        }
    }

    #[test]
    fn spell_without_rows_still_yields_base_unit() {
        let tables = SpellTables {
            names: vec![named(1)],
            ..Default::default()
        };

        let units = group_records(&tables);
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].difficulty, BASE_DIFFICULTY);
        assert!(units[0].helper.misc.is_none());
        assert!(units[0].effects.is_empty());
    }

    #[test]
    fn difficulty_rows_fall_back_to_base_rows() {
        let tables = SpellTables {
            names: vec![named(10)],
            misc: vec![SpellMiscEntry {
                spell_id: 10,
                duration_index: 21,
                ..Default::default()
            }],
            effects: vec![effect(10, 0, 0, 2), effect(10, 0, 1, 6), effect(10, 2, 1, 10)],
            durations: vec![SpellDurationEntry {
                id: 21,
                duration: -1,
                max_duration: -1,
            }],
            ..Default::default()
        };

        let units = group_records(&tables);
        assert_eq!(units.len(), 2);

        let heroic = &units[1];
        assert_eq!(heroic.difficulty, 2);
        // Misc comes from the base difficulty, and so does the duration it references.
        assert!(heroic.helper.misc.is_some());
        assert_eq!(heroic.helper.duration.as_ref().map(|d| d.duration), Some(-1));
        // Slot 0 falls back, slot 1 is overridden.
        assert_eq!(heroic.effects.len(), 2);
        assert_eq!(heroic.effects[0].entry.effect, 2);
        assert_eq!(heroic.effects[1].entry.effect, 10);
    }

    #[test]
    fn out_of_range_and_duplicate_effects_are_dropped() {
        let tables = SpellTables {
            names: vec![named(5)],
            effects: vec![
                effect(5, 0, 0, 2),
                effect(5, 0, 0, 10),
                effect(5, 0, SpellConfig::MAX_SPELL_EFFECTS as u32, 2),
            ],
            ..Default::default()
        };

        let units = group_records(&tables);
        assert_eq!(units[0].effects.len(), 1);
        assert_eq!(units[0].effects[0].entry.effect, 2);
    }

    #[test]
    fn orphan_rows_are_ignored() {
        let tables = SpellTables {
            names: vec![named(1)],
            effects: vec![effect(99, 0, 0, 2)],
            ..Default::default()
        };

        let units = group_records(&tables);
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].name.id, 1);
    }
}
