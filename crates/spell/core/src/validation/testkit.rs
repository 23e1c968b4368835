//! Stand-in world objects for validator tests.

use crate::defines::{AuraStateType, AuraType};
use crate::env::{
    BattlegroundStatus, CastUnit, CombatResurrectionState, LocationContext, ObjectGuid,
    QuestProgress, VehicleSeat,
};
use crate::info::{SpellId, SpellInfo};
use crate::records::{EffectRecord, SpellNameEntry};

pub(crate) fn spell(id: SpellId, effects: &[EffectRecord]) -> SpellInfo {
    SpellInfo::from_effects(
        &SpellNameEntry {
            id,
            name: String::new(),
        },
        effects,
    )
}

#[derive(Clone, Debug, Default)]
pub(crate) struct Unit {
    pub guid: ObjectGuid,
    pub player: bool,
    pub player_controlled: bool,
    pub owner: Option<ObjectGuid>,
    pub critter: Option<ObjectGuid>,
    pub dead: bool,
    pub in_combat: bool,
    pub in_flight: bool,
    pub rooted: bool,
    pub hidden: bool,
    pub game_master: bool,
    pub magnet: bool,
    pub vehicle: bool,
    pub vehicle_base: Option<ObjectGuid>,
    pub seat: Option<VehicleSeat>,
    pub creature_type_mask: u32,
    pub auras: Vec<SpellId>,
    pub aura_types: Vec<AuraType>,
    pub aura_states: Vec<AuraStateType>,
    pub blind_to: Vec<ObjectGuid>,
    pub enemies: Vec<ObjectGuid>,
    pub friends: Vec<ObjectGuid>,
    pub party: Vec<ObjectGuid>,
    pub tapped_by: Option<ObjectGuid>,
    pub pockets: bool,
    pub weapon: bool,
    pub resurrection: Option<CombatResurrectionState>,
}

impl Unit {
    pub fn player(id: u64) -> Self {
        Self {
            guid: ObjectGuid(id),
            player: true,
            player_controlled: true,
            weapon: true,
            ..Default::default()
        }
    }

    pub fn creature(id: u64) -> Self {
        Self {
            guid: ObjectGuid(id),
            pockets: true,
            weapon: true,
            ..Default::default()
        }
    }

    pub fn hostile_to(mut self, id: u64) -> Self {
        self.enemies.push(ObjectGuid(id));
        self
    }

    pub fn friendly_to(mut self, id: u64) -> Self {
        self.friends.push(ObjectGuid(id));
        self
    }
}

impl CastUnit for Unit {
    fn guid(&self) -> ObjectGuid {
        self.guid
    }
    fn is_player(&self) -> bool {
        self.player
    }
    fn is_controlled_by_player(&self) -> bool {
        self.player_controlled
    }
    fn affecting_player(&self) -> Option<ObjectGuid> {
        self.player.then_some(self.guid)
    }
    fn charmer_or_owner(&self) -> Option<ObjectGuid> {
        self.owner
    }
    fn critter(&self) -> Option<ObjectGuid> {
        self.critter
    }
    fn is_alive(&self) -> bool {
        !self.dead
    }
    fn is_in_combat(&self) -> bool {
        self.in_combat
    }
    fn is_in_flight(&self) -> bool {
        self.in_flight
    }
    fn can_free_move(&self) -> bool {
        !self.rooted
    }
    fn is_visible(&self) -> bool {
        !self.hidden
    }
    fn is_game_master(&self) -> bool {
        self.game_master
    }
    fn is_magnet(&self) -> bool {
        self.magnet
    }
    fn is_vehicle(&self) -> bool {
        self.vehicle
    }
    fn vehicle_base(&self) -> Option<ObjectGuid> {
        self.vehicle_base
    }
    fn vehicle_seat(&self) -> Option<VehicleSeat> {
        self.seat
    }
    fn creature_type_mask(&self) -> u32 {
        self.creature_type_mask
    }
    fn has_aura(&self, spell_id: SpellId) -> bool {
        self.auras.contains(&spell_id)
    }
    fn has_aura_type(&self, aura: AuraType) -> bool {
        self.aura_types.contains(&aura)
    }
    fn has_aura_state(&self, state: AuraStateType) -> bool {
        self.aura_states.contains(&state)
    }
    fn can_see_or_detect(&self, target: ObjectGuid, _implicit: bool) -> bool {
        !self.blind_to.contains(&target)
    }
    fn is_valid_attack_target(&self, target: &dyn CastUnit) -> bool {
        self.enemies.contains(&target.guid())
    }
    fn is_valid_assist_target(&self, target: &dyn CastUnit) -> bool {
        target.guid() == self.guid || self.friends.contains(&target.guid())
    }
    fn is_in_party_with(&self, other: &dyn CastUnit) -> bool {
        self.party.contains(&other.guid())
    }
    fn is_in_raid_with(&self, other: &dyn CastUnit) -> bool {
        self.party.contains(&other.guid())
    }
    fn has_loot_recipient(&self) -> bool {
        self.tapped_by.is_some()
    }
    fn is_tapped_by(&self, player: ObjectGuid) -> bool {
        self.tapped_by == Some(player)
    }
    fn has_pickpocket_loot(&self) -> bool {
        self.pockets
    }
    fn has_usable_weapon(&self) -> bool {
        self.weapon
    }
    fn combat_resurrection(&self) -> Option<CombatResurrectionState> {
        self.resurrection
    }
}

#[derive(Clone, Debug, Default)]
pub(crate) struct Player {
    pub auras: Vec<SpellId>,
    pub mount_restrictions: Vec<i32>,
    pub spells: Vec<SpellId>,
    pub mount_capabilities: Vec<u32>,
    pub battleground: Option<BattlegroundStatus>,
    pub race_mask: u64,
    pub gender: u8,
    pub quests: Vec<(u32, QuestProgress)>,
}

impl LocationContext for Player {
    fn has_aura(&self, spell_id: SpellId) -> bool {
        self.auras.contains(&spell_id)
    }
    fn has_aura_type(&self, aura: AuraType) -> bool {
        aura == AuraType::MountRestrictions && !self.mount_restrictions.is_empty()
    }
    fn aura_misc_values(&self, aura: AuraType) -> Vec<i32> {
        if aura == AuraType::MountRestrictions {
            self.mount_restrictions.clone()
        } else {
            Vec::new()
        }
    }
    fn has_spell(&self, spell_id: SpellId) -> bool {
        self.spells.contains(&spell_id)
    }
    fn has_mount_capability(&self, mount_type: u32) -> bool {
        self.mount_capabilities.contains(&mount_type)
    }
    fn in_battleground(&self) -> bool {
        self.battleground.is_some()
    }
    fn battleground_status(&self) -> Option<BattlegroundStatus> {
        self.battleground
    }
    fn race_mask(&self) -> u64 {
        self.race_mask
    }
    fn gender(&self) -> u8 {
        self.gender
    }
    fn quest_progress(&self, quest_id: u32) -> QuestProgress {
        self.quests
            .iter()
            .find(|(id, _)| *id == quest_id)
            .map_or(QuestProgress::None, |(_, progress)| *progress)
    }
}
