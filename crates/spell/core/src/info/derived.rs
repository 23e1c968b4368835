use super::{RankChainRegistry, SpellInfo};
use crate::defines::{
    AuraStateType, AuraType, DispelType, EffectImplicitTargetType, Mechanic,
    SpellAuraInterruptFlags, SpellCastTargetFlags, SpellEffectName, SpellFamilyFlags,
    SpellFamilyName, SpellSchoolMask, SpellSpecificType,
};

/// Spells that mark their target for stealth detection.
const FAERIE_FIRE_LIKE: &[u32] = &[
    6950, 9806, 9991, 13424, 13752, 16432, 20656, 25602, 32129, 35325, 35328, 35329, 35331,
    49163, 65863, 79559, 82855, 102953, 127907, 127913, 129007, 130159, 142537, 168455, 176905,
    189502, 201785, 201786, 201935, 239233, 319400, 321470, 331134,
];

/// First ranks of the stat scrolls.
const SCROLLS: &[u32] = &[8118, 8099, 8112, 8096, 8115, 8091];

/// Gas Cloud Tracking does not share the tracker slot.
const NON_EXCLUSIVE_TRACKER: u32 = 30645;

impl SpellInfo {
    /// Aura state the spell's auras put on their target.
    pub fn load_aura_state(&self) -> AuraStateType {
        if self.category_id == 1133 {
            return AuraStateType::FaerieFire;
        }

        let flags = &self.spell_family_flags;
        match self.spell_family_name {
            // Regrowth, Rejuvenation, Wild Growth
            SpellFamilyName::Druid if flags.word(0) & 0x50 != 0 || flags.word(1) & 0x0400_0000 != 0 => {
                return AuraStateType::DruidPeriodicHeal;
            }
            SpellFamilyName::Rogue if flags.word(0) & 0x0001_0000 != 0 => {
                return AuraStateType::RoguePoisoned;
            }
            _ => {}
        }

        if self.dispel == DispelType::Enrage {
            return AuraStateType::Enraged;
        }

        if self.get_all_effects_mechanic_mask() & Mechanic::Bleed.mask() != 0 {
            return AuraStateType::Bleed;
        }

        if self.school_mask.intersects(SpellSchoolMask::FROST)
            && self.effects.iter().any(|e| {
                e.is_aura_type(AuraType::ModStun)
                    || e.is_aura_type(AuraType::ModRoot)
                    || e.is_aura_type(AuraType::ModRoot2)
            })
        {
            return AuraStateType::Frozen;
        }

        match self.id {
            1064 => AuraStateType::Dazed,
            32216 => AuraStateType::Victorious,
            71465 | 50241 | 81262 => AuraStateType::RaidEncounter,
            id if FAERIE_FIRE_LIKE.contains(&id) => AuraStateType::FaerieFire,
            _ => AuraStateType::None,
        }
    }

    /// Mutual-exclusion category of the spell.
    pub fn load_spell_specific(&self, chains: &RankChainRegistry) -> SpellSpecificType {
        if let Some(specific) = self.family_spell_specific(chains) {
            return specific;
        }

        for effect in &self.effects {
            if !effect.is_effect_name(SpellEffectName::ApplyAura) {
                continue;
            }
            match effect.apply_aura_name {
                AuraType::ModCharm
                | AuraType::ModPossessPet
                | AuraType::ModPossess
                | AuraType::AoeCharm => return SpellSpecificType::Charm,
                AuraType::TrackCreatures if self.id == NON_EXCLUSIVE_TRACKER => {
                    return SpellSpecificType::Normal;
                }
                AuraType::TrackCreatures | AuraType::TrackResources | AuraType::TrackStealthed => {
                    return SpellSpecificType::Tracker;
                }
                AuraType::Phase => return SpellSpecificType::Phase,
                _ => {}
            }
        }

        SpellSpecificType::Normal
    }

    fn family_spell_specific(&self, chains: &RankChainRegistry) -> Option<SpellSpecificType> {
        let flags = &self.spell_family_flags;
        let specific = match self.spell_family_name {
            SpellFamilyName::Generic => {
                if self.has_aura_interrupt_flag(SpellAuraInterruptFlags::STANDING) {
                    return self.consumable_specific();
                }
                if SCROLLS.contains(&self.get_first_rank_spell(chains)) {
                    SpellSpecificType::Scroll
                } else {
                    return None;
                }
            }
            SpellFamilyName::Mage => {
                if flags.word(0) & 0x1204_0000 != 0 {
                    SpellSpecificType::MageArmor
                } else if flags.word(0) & 0x400 != 0 {
                    SpellSpecificType::MageArcaneBrillance
                } else if flags.word(0) & 0x0100_0000 != 0
                    && self
                        .effects
                        .first()
                        .is_some_and(|e| e.is_aura_type(AuraType::ModConfuse))
                {
                    SpellSpecificType::MagePolymorph
                } else {
                    return None;
                }
            }
            // Death Wish
            SpellFamilyName::Warrior if self.id == 12292 => SpellSpecificType::WarriorEnrage,
            SpellFamilyName::Warlock => {
                if matches!(self.id, 603 | 980 | 80240) {
                    SpellSpecificType::Bane
                } else if self.dispel == DispelType::Curse {
                    SpellSpecificType::Curse
                } else if flags.word(1) & 0x2000_0020 != 0 || flags.word(2) & 0x10 != 0 {
                    SpellSpecificType::WarlockArmor
                } else if flags.word(1) & 0x10 != 0 || flags.word(0) & 0x2 != 0 {
                    SpellSpecificType::WarlockCorruption
                } else {
                    return None;
                }
            }
            SpellFamilyName::Priest if flags.word(0) & 0x20 != 0 => {
                SpellSpecificType::PriestDivineSpirit
            }
            SpellFamilyName::Hunter => {
                if self.dispel == DispelType::Poison {
                    SpellSpecificType::Sting
                } else if flags.intersects(&SpellFamilyFlags::new(0x0020_0000, 0, 0x1010, 0)) {
                    SpellSpecificType::Aspect
                } else {
                    return None;
                }
            }
            SpellFamilyName::Paladin => {
                if flags.word(1) & 0xA200_0800 != 0 {
                    SpellSpecificType::Seal
                } else if flags.word(0) & 0x2190 != 0 {
                    SpellSpecificType::Hand
                } else if self.id == 20271 {
                    SpellSpecificType::Judgement
                } else if matches!(self.id, 465 | 32223 | 183435 | 317920) {
                    SpellSpecificType::Aura
                } else {
                    return None;
                }
            }
            SpellFamilyName::Shaman
                if flags.word(0) & 0x400 != 0 || flags.word(1) & 0x20 != 0 || flags.word(2) & 0x10 != 0 =>
            {
                SpellSpecificType::ElementalShield
            }
            SpellFamilyName::DeathKnight if matches!(self.id, 48266 | 48263 | 48265) => {
                SpellSpecificType::Presence
            }
            _ => return None,
        };
        Some(specific)
    }

    /// Food and drink buffs are removed on standing up.
    fn consumable_specific(&self) -> Option<SpellSpecificType> {
        let mut food = false;
        let mut drink = false;
        for effect in self.effects.iter().filter(|e| e.is_aura()) {
            match effect.apply_aura_name {
                AuraType::ModRegen | AuraType::ObsModHealth => food = true,
                AuraType::ModPowerRegen | AuraType::ObsModPower => drink = true,
                _ => {}
            }
        }

        match (food, drink) {
            (true, true) => Some(SpellSpecificType::FoodAndDrink),
            (true, false) => Some(SpellSpecificType::Food),
            (false, true) => Some(SpellSpecificType::Drink),
            (false, false) => None,
        }
    }

    /// Explicit target flags a cast request must carry.
    pub fn compute_explicit_target_mask(&self) -> SpellCastTargetFlags {
        let mut mask = self.targets;
        let (mut src_set, mut dst_set) = (false, false);
        let no_range = self.get_max_range(true) == 0.0 && self.get_max_range(false) == 0.0;

        for effect in self.effects.iter().filter(|e| e.is_effect()) {
            mask |= effect.target_a.explicit_target_mask(&mut src_set, &mut dst_set);
            mask |= effect.target_b.explicit_target_mask(&mut src_set, &mut dst_set);

            if effect.implicit_target_type() != EffectImplicitTargetType::Explicit {
                continue;
            }

            let mut missing = effect.missing_target_mask(src_set, dst_set, mask);
            if no_range {
                missing.remove(
                    SpellCastTargetFlags::UNIT_MASK
                        | SpellCastTargetFlags::GAMEOBJECT
                        | SpellCastTargetFlags::CORPSE_MASK
                        | SpellCastTargetFlags::DEST_LOCATION,
                );
            }
            mask |= missing;
        }

        mask
    }

    /// Stores [`Self::compute_explicit_target_mask`].
    pub fn init_explicit_target_mask(&mut self) {
        self.explicit_target_mask = self.compute_explicit_target_mask();
    }

    /// Whether an aura of `other` replaces this one on the same target.
    pub fn is_aura_exclusive_by_specific_with(&self, other: &SpellInfo) -> bool {
        use SpellSpecificType as S;

        let (mine, theirs) = (self.spell_specific, other.spell_specific);
        match mine {
            S::WarlockArmor
            | S::MageArmor
            | S::ElementalShield
            | S::MagePolymorph
            | S::Presence
            | S::Charm
            | S::Scroll
            | S::WarriorEnrage
            | S::MageArcaneBrillance
            | S::PriestDivineSpirit => mine == theirs,
            S::Food => matches!(theirs, S::Food | S::FoodAndDrink),
            S::Drink => matches!(theirs, S::Drink | S::FoodAndDrink),
            S::FoodAndDrink => matches!(theirs, S::Food | S::Drink | S::FoodAndDrink),
            _ => false,
        }
    }

    /// Whether one caster may keep only one aura of this category per target.
    pub fn is_aura_exclusive_by_specific_per_caster_with(&self, other: &SpellInfo) -> bool {
        use SpellSpecificType as S;

        matches!(
            self.spell_specific,
            S::Seal
                | S::Hand
                | S::Aura
                | S::Sting
                | S::Curse
                | S::Bane
                | S::Aspect
                | S::Judgement
                | S::WarlockCorruption
        ) && self.spell_specific == other.spell_specific
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{EffectRecord, SpellEffectEntry, SpellNameEntry};

    fn spell(id: u32, effects: &[(SpellEffectName, AuraType)]) -> SpellInfo {
        let records: Vec<EffectRecord> = effects
            .iter()
            .enumerate()
            .map(|(index, (effect, aura))| {
                SpellEffectEntry {
                    spell_id: id,
                    effect_index: index as u32,
                    effect: *effect as u32,
                    effect_aura: *aura as u32,
                    ..Default::default()
                }
                .into()
            })
            .collect();
        SpellInfo::from_effects(
            &SpellNameEntry {
                id,
                name: String::new(),
            },
            &records,
        )
    }

    #[test]
    fn tracking_auras_share_the_tracker_slot() {
        let chains = RankChainRegistry::new();
        let tracker = spell(2580, &[(SpellEffectName::ApplyAura, AuraType::TrackResources)]);
        assert_eq!(tracker.load_spell_specific(&chains), SpellSpecificType::Tracker);

        let creatures = spell(1494, &[(SpellEffectName::ApplyAura, AuraType::TrackCreatures)]);
        assert_eq!(creatures.load_spell_specific(&chains), SpellSpecificType::Tracker);
    }

    #[test]
    fn gas_cloud_tracking_stays_normal() {
        let chains = RankChainRegistry::new();
        let gas = spell(30645, &[(SpellEffectName::ApplyAura, AuraType::TrackCreatures)]);
        assert_eq!(gas.load_spell_specific(&chains), SpellSpecificType::Normal);
    }

    #[test]
    fn food_and_drink_are_detected_from_standing_interrupt() {
        let chains = RankChainRegistry::new();
        let mut feast = spell(
            433,
            &[
                (SpellEffectName::ApplyAura, AuraType::ModRegen),
                (SpellEffectName::ApplyAura, AuraType::ModPowerRegen),
            ],
        );
        // Without the interrupt flag it is an ordinary aura.
        assert_eq!(feast.load_spell_specific(&chains), SpellSpecificType::Normal);

        feast.aura_interrupt_flags = SpellAuraInterruptFlags::STANDING;
        feast.spell_specific = feast.load_spell_specific(&chains);
        assert_eq!(feast.spell_specific(), SpellSpecificType::FoodAndDrink);

        let mut bread = spell(434, &[(SpellEffectName::ApplyAura, AuraType::ModRegen)]);
        bread.aura_interrupt_flags = SpellAuraInterruptFlags::STANDING;
        bread.spell_specific = bread.load_spell_specific(&chains);
        assert!(feast.is_aura_exclusive_by_specific_with(&bread));
        assert!(bread.is_aura_exclusive_by_specific_with(&feast));
    }

    #[test]
    fn frost_stun_sets_frozen_state() {
        let mut nova = spell(122, &[(SpellEffectName::ApplyAura, AuraType::ModRoot)]);
        assert_eq!(nova.load_aura_state(), AuraStateType::None);

        nova.school_mask = SpellSchoolMask::FROST;
        assert_eq!(nova.load_aura_state(), AuraStateType::Frozen);
    }

    #[test]
    fn per_caster_exclusivity_needs_matching_category() {
        let mut curse = spell(702, &[]);
        curse.spell_family_name = SpellFamilyName::Warlock;
        curse.dispel = DispelType::Curse;
        curse.spell_specific = curse.load_spell_specific(&RankChainRegistry::new());
        assert_eq!(curse.spell_specific(), SpellSpecificType::Curse);

        let other = curse.clone();
        assert!(curse.is_aura_exclusive_by_specific_per_caster_with(&other));
        assert!(!curse.is_aura_exclusive_by_specific_with(&other));
    }

    #[test]
    fn explicit_mask_collects_enemy_unit_target() {
        use crate::defines::Targets;

        let mut bolt = spell(133, &[(SpellEffectName::SchoolDamage, AuraType::None)]);
        bolt.effects[0].target_a = crate::info::SpellImplicitTargetInfo::new(Targets::UnitTargetEnemy);
        bolt.init_explicit_target_mask();
        assert!(bolt.explicit_target_mask().contains(SpellCastTargetFlags::UNIT_ENEMY));
        assert!(bolt.needs_explicit_unit_target());
    }
}
