//! Shared fixtures for spell-core integration tests.
#![allow(dead_code)]

use spell_core::defines::{AuraStateType, SpellModOp, Targets};
use spell_core::env::{
    AuraEffectView, CastContext, CombatResurrectionState, SpellModifierHook, VehicleSeat,
    WeaponAttackType,
};
use spell_core::records::{
    SpellDurationEntry, SpellEffectEntry, SpellMiscEntry, SpellNameEntry, SpellPowerEntry,
};
use spell_core::{
    AuraType, CastUnit, ObjectGuid, PowerCaster, Powers, SpellCatalog, SpellConfig, SpellEffectName,
    SpellId, SpellInfo, SpellTables,
};

/// Routes derivation logs to the test harness; `RUST_LOG` selects the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ============================================================================
// Table fixtures
// ============================================================================

/// Builds flat spell tables one row at a time.
#[derive(Default)]
pub struct TableFixture {
    pub tables: SpellTables,
}

impl TableFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spell(mut self, id: SpellId) -> Self {
        self.tables.names.push(SpellNameEntry {
            id,
            name: format!("Spell {id}"),
        });
        self
    }

    pub fn effect(
        mut self,
        id: SpellId,
        index: u32,
        effect: SpellEffectName,
        aura: AuraType,
        target: Targets,
    ) -> Self {
        self.tables.effects.push(SpellEffectEntry {
            spell_id: id,
            effect_index: index,
            effect: effect as u32,
            effect_aura: aura as u32,
            implicit_target: [target as u32, 0],
            ..Default::default()
        });
        self
    }

    pub fn trigger(mut self, id: SpellId, index: u32, triggered: SpellId) -> Self {
        self.tables.effects.push(SpellEffectEntry {
            spell_id: id,
            effect_index: index,
            effect: SpellEffectName::TriggerSpell as u32,
            effect_trigger_spell: triggered,
            implicit_target: [Targets::UnitCaster as u32, 0],
            ..Default::default()
        });
        self
    }

    /// Misc row with attribute words and an optional duration reference.
    pub fn misc(mut self, id: SpellId, attributes: [u32; 15], duration_index: u32) -> Self {
        self.tables.misc.push(SpellMiscEntry {
            spell_id: id,
            attributes,
            duration_index,
            ..Default::default()
        });
        self
    }

    pub fn duration(mut self, index: u32, duration: i32, max_duration: i32) -> Self {
        self.tables.durations.push(SpellDurationEntry {
            id: index,
            duration,
            max_duration,
        });
        self
    }

    pub fn power(mut self, row: SpellPowerEntry) -> Self {
        self.tables.powers.push(row);
        self
    }

    pub fn build(self) -> SpellCatalog {
        let mut builder = SpellCatalog::builder(SpellConfig::default());
        builder
            .insert_tables(&self.tables)
            .expect("fixture spells are unique");
        builder.finish().expect("fixture catalog is consistent")
    }
}

pub fn attributes(word: usize, bits: u32) -> [u32; 15] {
    let mut words = [0; 15];
    words[word] = bits;
    words
}

pub fn spell<'a>(catalog: &'a SpellCatalog, id: SpellId) -> &'a SpellInfo {
    catalog.get(id, 0).expect("fixture spell present")
}

// ============================================================================
// Casters
// ============================================================================

/// Flat and percentage discount applied to every cost.
pub struct Discount {
    pub flat: i32,
    pub pct: f32,
}

impl SpellModifierHook for Discount {
    fn spell_mod_values(
        &self,
        _spell: &SpellInfo,
        _op: SpellModOp,
        _base: i32,
        _cast: Option<&dyn CastContext>,
    ) -> (i32, f32) {
        (self.flat, self.pct)
    }
}

pub struct Caster {
    pub health: u64,
    pub mana: i32,
    pub level: u32,
    pub discount: Option<Discount>,
}

impl Default for Caster {
    fn default() -> Self {
        Self {
            health: 1200,
            mana: 1000,
            level: 60,
            discount: None,
        }
    }
}

impl PowerCaster for Caster {
    fn health(&self) -> u64 {
        self.health
    }
    fn max_health(&self) -> u64 {
        self.health.max(2000)
    }
    fn power(&self, power: Powers) -> i32 {
        if power == Powers::Mana { self.mana } else { 0 }
    }
    fn create_mana(&self) -> u32 {
        1000
    }
    fn level(&self) -> u32 {
        self.level
    }
    fn is_controlled_by_player(&self) -> bool {
        true
    }
    fn has_aura(&self, _spell_id: SpellId) -> bool {
        false
    }
    fn aura_effects(&self, _aura: AuraType) -> Vec<AuraEffectView> {
        Vec::new()
    }
    fn shapeshift_form(&self) -> u32 {
        0
    }
    fn base_attack_time(&self, _attack: WeaponAttackType) -> u32 {
        2000
    }
    fn mana_cost_multiplier(&self) -> f32 {
        0.0
    }
    fn spell_mod_owner(&self) -> Option<&dyn SpellModifierHook> {
        self.discount.as_ref().map(|d| d as &dyn SpellModifierHook)
    }
}

// ============================================================================
// Units
// ============================================================================

/// A unit with configurable life state and nothing else special.
#[derive(Clone, Debug)]
pub struct Dummy {
    pub guid: ObjectGuid,
    pub player: bool,
    pub alive: bool,
    pub ghost: bool,
    pub creature_type_mask: u32,
}

impl Dummy {
    pub fn creature(id: u64) -> Self {
        Self {
            guid: ObjectGuid(id),
            player: false,
            alive: true,
            ghost: false,
            creature_type_mask: 0,
        }
    }

    pub fn player(id: u64) -> Self {
        Self {
            player: true,
            ..Self::creature(id)
        }
    }
}

impl CastUnit for Dummy {
    fn guid(&self) -> ObjectGuid {
        self.guid
    }
    fn is_player(&self) -> bool {
        self.player
    }
    fn is_controlled_by_player(&self) -> bool {
        self.player
    }
    fn affecting_player(&self) -> Option<ObjectGuid> {
        self.player.then_some(self.guid)
    }
    fn charmer_or_owner(&self) -> Option<ObjectGuid> {
        None
    }
    fn critter(&self) -> Option<ObjectGuid> {
        None
    }
    fn is_alive(&self) -> bool {
        self.alive
    }
    fn is_in_combat(&self) -> bool {
        false
    }
    fn is_in_flight(&self) -> bool {
        false
    }
    fn can_free_move(&self) -> bool {
        true
    }
    fn is_visible(&self) -> bool {
        true
    }
    fn is_game_master(&self) -> bool {
        false
    }
    fn is_magnet(&self) -> bool {
        false
    }
    fn is_vehicle(&self) -> bool {
        false
    }
    fn vehicle_base(&self) -> Option<ObjectGuid> {
        None
    }
    fn vehicle_seat(&self) -> Option<VehicleSeat> {
        None
    }
    fn creature_type_mask(&self) -> u32 {
        self.creature_type_mask
    }
    fn has_aura(&self, _spell_id: SpellId) -> bool {
        false
    }
    fn has_aura_type(&self, aura: AuraType) -> bool {
        aura == AuraType::Ghost && self.ghost
    }
    fn has_aura_state(&self, _state: AuraStateType) -> bool {
        false
    }
    fn can_see_or_detect(&self, _target: ObjectGuid, _implicit: bool) -> bool {
        true
    }
    fn is_valid_attack_target(&self, target: &dyn CastUnit) -> bool {
        target.guid() != self.guid
    }
    fn is_valid_assist_target(&self, _target: &dyn CastUnit) -> bool {
        true
    }
    fn is_in_party_with(&self, _other: &dyn CastUnit) -> bool {
        false
    }
    fn is_in_raid_with(&self, _other: &dyn CastUnit) -> bool {
        false
    }
    fn has_loot_recipient(&self) -> bool {
        false
    }
    fn is_tapped_by(&self, _player: ObjectGuid) -> bool {
        false
    }
    fn has_pickpocket_loot(&self) -> bool {
        false
    }
    fn has_usable_weapon(&self) -> bool {
        true
    }
    fn combat_resurrection(&self) -> Option<CombatResurrectionState> {
        None
    }
}
