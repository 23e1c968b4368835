mod common;

use common::{Caster, Discount, Dummy, TableFixture, attributes, init_tracing, spell};
use spell_core::defines::{SpellAttr0, SpellAttr1, Targets};
use spell_core::diminishing::diminish_info_for;
use spell_core::records::SpellPowerEntry;
use spell_core::{
    AuraType, CastTarget, DiminishingGroup, DispelType, Powers, SpellCastResult, SpellConfig,
    SpellEffectName, SpellInfo, SpellPowerCost, SpellSchoolMask, TablesSnapshot,
};
use strum::IntoEnumIterator;

// ============================================================================
// Durations
// ============================================================================

#[test]
fn durations_follow_entry_and_passivity() {
    let catalog = TableFixture::new()
        .spell(1)
        .spell(2)
        .misc(2, attributes(0, SpellAttr0::PASSIVE.bits()), 0)
        .spell(3)
        .misc(3, [0; 15], 21)
        .duration(21, -1, -1)
        .spell(4)
        .misc(4, [0; 15], 22)
        .duration(22, 10_000, 30_000)
        .build();

    let plain = spell(&catalog, 1);
    assert_eq!((plain.get_duration(), plain.get_max_duration()), (0, 0));

    let passive = spell(&catalog, 2);
    assert_eq!((passive.get_duration(), passive.get_max_duration()), (-1, -1));

    let infinite = spell(&catalog, 3);
    assert_eq!((infinite.get_duration(), infinite.get_max_duration()), (-1, -1));

    let timed = spell(&catalog, 4);
    assert_eq!((timed.get_duration(), timed.get_max_duration()), (10_000, 30_000));
}

// ============================================================================
// Positivity
// ============================================================================

#[test]
fn spell_without_effects_is_positive_and_undiminished() {
    let catalog = TableFixture::new().spell(1).build();
    let empty = spell(&catalog, 1);

    assert!(empty.is_positive());
    assert_eq!(empty.diminish().group, DiminishingGroup::None);
}

#[test]
fn mutually_triggering_spells_terminate() {
    let catalog = TableFixture::new()
        .spell(10)
        .trigger(10, 0, 11)
        .spell(11)
        .trigger(11, 0, 10)
        .build();

    assert!(spell(&catalog, 10).is_positive());
    assert!(spell(&catalog, 11).is_positive());
}

#[test]
fn trigger_cycle_reaching_harm_is_negative() {
    init_tracing();
    let catalog = TableFixture::new()
        .spell(10)
        .trigger(10, 0, 11)
        .spell(11)
        .trigger(11, 0, 12)
        .spell(12)
        .trigger(12, 0, 10)
        .effect(12, 1, SpellEffectName::SchoolDamage, AuraType::None, Targets::UnitTargetEnemy)
        .build();

    assert!(!spell(&catalog, 12).is_positive_effect(1));
    for id in [10, 11, 12] {
        assert!(!spell(&catalog, id).is_positive_effect(0), "spell {id}");
    }
}

#[test]
fn heal_ally_positive_damage_enemy_negative() {
    let catalog = TableFixture::new()
        .spell(1)
        .effect(1, 0, SpellEffectName::Heal, AuraType::None, Targets::UnitTargetAlly)
        .spell(2)
        .effect(2, 0, SpellEffectName::SchoolDamage, AuraType::None, Targets::UnitTargetEnemy)
        .build();

    assert!(spell(&catalog, 1).is_positive());
    assert!(!spell(&catalog, 2).is_positive());
}

#[test]
fn unmatched_effects_on_enemy_stay_positive() {
    let catalog = TableFixture::new()
        .spell(4)
        .effect(4, 0, SpellEffectName::Dummy, AuraType::None, Targets::UnitTargetEnemy)
        .spell(5)
        .effect(5, 0, SpellEffectName::ApplyAura, AuraType::ModInvisibility, Targets::UnitTargetEnemy)
        .spell(6)
        .effect(6, 0, SpellEffectName::ApplyAura, AuraType::ModDecreaseSpeed, Targets::UnitTargetEnemy)
        .build();

    assert!(spell(&catalog, 4).is_positive());
    assert!(spell(&catalog, 5).is_positive());
    assert!(!spell(&catalog, 6).is_positive());
}

#[test]
fn lone_stun_on_raid_member_is_negative() {
    let catalog = TableFixture::new()
        .spell(3)
        .effect(3, 0, SpellEffectName::ApplyAura, AuraType::ModStun, Targets::UnitTargetRaid)
        .build();

    let stun = spell(&catalog, 3);
    assert!(!stun.is_positive_effect(0));
    assert!(!stun.is_positive());
}

// ============================================================================
// Diminishing returns
// ============================================================================

#[test]
fn diminishing_classification_is_idempotent() {
    let catalog = TableFixture::new()
        .spell(20549)
        .effect(20549, 0, SpellEffectName::ApplyAura, AuraType::ModStun, Targets::UnitSrcAreaEnemy)
        .build();
    let stomp = spell(&catalog, 20549);
    let config = SpellConfig::default();

    let first = diminish_info_for(stomp, &config);
    let second = diminish_info_for(stomp, &config);
    assert_eq!(first, second);
    assert_eq!(first, *stomp.diminish());
    assert_eq!(first.group, DiminishingGroup::Stun);
}

// ============================================================================
// Dispel masks
// ============================================================================

#[test]
fn dispel_masks() {
    assert_eq!(SpellInfo::dispel_mask_of(DispelType::All), DispelType::ALL_MASK);

    for dispel in DispelType::iter().filter(|d| *d != DispelType::All) {
        let mask = SpellInfo::dispel_mask_of(dispel);
        assert_eq!(mask, 1 << dispel as u32, "{dispel}");
        assert_eq!(mask.count_ones(), 1);
    }
}

// ============================================================================
// Power costs
// ============================================================================

#[test]
fn drain_all_health_ignores_buffs() {
    let catalog = TableFixture::new()
        .spell(5)
        .misc(5, attributes(1, SpellAttr1::USE_ALL_MANA.bits()), 0)
        .power(SpellPowerEntry {
            spell_id: 5,
            power_type: Powers::Health as i32,
            mana_cost: 50,
            ..Default::default()
        })
        .build();
    let caster = Caster {
        health: 1337,
        discount: Some(Discount {
            flat: -1000,
            pct: 0.5,
        }),
        ..Caster::default()
    };

    let costs = spell(&catalog, 5).calc_power_costs(
        &caster,
        &TablesSnapshot::new(),
        SpellSchoolMask::SHADOW,
        None,
    );
    assert_eq!(costs, vec![SpellPowerCost {
        power: Powers::Health,
        amount: 1337,
    }]);
}

#[test]
fn discount_never_turns_cost_negative() {
    let catalog = TableFixture::new()
        .spell(6)
        .power(SpellPowerEntry {
            spell_id: 6,
            power_type: Powers::Mana as i32,
            mana_cost: 100,
            ..Default::default()
        })
        .build();
    let caster = Caster {
        discount: Some(Discount {
            flat: -500,
            pct: 1.0,
        }),
        ..Caster::default()
    };

    let costs = spell(&catalog, 6).calc_power_costs(
        &caster,
        &TablesSnapshot::new(),
        SpellSchoolMask::ARCANE,
        None,
    );
    assert_eq!(costs, vec![SpellPowerCost {
        power: Powers::Mana,
        amount: 0,
    }]);
}

// ============================================================================
// Validators
// ============================================================================

#[test]
fn dead_target_rejected_live_target_accepted() {
    let catalog = TableFixture::new()
        .spell(7)
        .effect(7, 0, SpellEffectName::SchoolDamage, AuraType::None, Targets::UnitTargetEnemy)
        .build();
    let bolt = spell(&catalog, 7);
    let caster = Dummy::player(1);

    let corpse_like = Dummy {
        alive: false,
        ..Dummy::creature(2)
    };
    assert_eq!(
        bolt.check_target(&caster, CastTarget::Unit(&corpse_like), false),
        SpellCastResult::TargetsDead
    );

    let living = Dummy::creature(3);
    assert_eq!(
        bolt.check_target(&caster, CastTarget::Unit(&living), false),
        SpellCastResult::SpellCastOk
    );
}

#[test]
fn forbidden_stance_beats_allowed_stance() {
    let catalog = TableFixture::new().spell(8).build();
    let mut spell = spell(&catalog, 8).clone();
    let form = 5;
    spell.stances = SpellInfo::stance_mask(form);
    spell.stances_not = SpellInfo::stance_mask(form);

    assert_eq!(
        spell.check_shapeshift(form, &TablesSnapshot::new()),
        SpellCastResult::NotShapeshift
    );
}
