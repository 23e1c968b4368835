//! Immunity expansion tables.
//!
//! A mechanic-immunity-mask aura carries a raw misc value that content often
//! reuses for unrelated bundles; rows keyed by misc value (and optionally by
//! spell id) spell out what each bundle really grants.

use crate::defines::{
    AuraType, IMMUNE_TO_MOVEMENT_IMPAIRMENT_AND_LOSS_CONTROL_MASK as LOSS_OF_CONTROL, Mechanic,
    SpellEffectName, mechanic_mask,
};
use crate::info::SpellId;

/// What one override row grants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImmunityBundle {
    pub mechanics: u64,
    pub auras: &'static [AuraType],
    pub effects: &'static [SpellEffectName],
}

const CONTROL_AURAS: &[AuraType] = &[
    AuraType::ModStun,
    AuraType::ModDecreaseSpeed,
    AuraType::ModRoot,
    AuraType::ModConfuse,
    AuraType::ModFear,
    AuraType::ModRoot2,
];

const KNOCKBACKS: &[SpellEffectName] = &[SpellEffectName::KnockBack, SpellEffectName::KnockBackDest];

const LOSS_OF_CONTROL_BUNDLE: ImmunityBundle = ImmunityBundle {
    mechanics: LOSS_OF_CONTROL,
    auras: CONTROL_AURAS,
    effects: &[],
};

const TAUNT_BUNDLE: ImmunityBundle = ImmunityBundle {
    mechanics: 0,
    auras: &[AuraType::ModTaunt],
    effects: &[SpellEffectName::AttackMe],
};

const INTERRUPT_AND_KNOCKBACK: u64 = mechanic_mask(&[Mechanic::Interrupt, Mechanic::Silence]);

/// Which spells a row applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpellFilter {
    Any,
    Only(&'static [SpellId]),
    /// Applies only when the effect's value is zero.
    ZeroAmount,
}

impl SpellFilter {
    fn accepts(&self, spell_id: SpellId, amount: i32) -> bool {
        match self {
            Self::Any => true,
            Self::Only(ids) => ids.contains(&spell_id),
            Self::ZeroAmount => amount == 0,
        }
    }
}

/// `(misc value, filter, bundle)`; every matching row is merged.
pub static MECHANIC_MASK_OVERRIDES: &[(i32, SpellFilter, ImmunityBundle)] = &[
    // Free Friend, Uncontrollable Frenzy, Warlord's Presence
    (96, SpellFilter::Any, LOSS_OF_CONTROL_BUNDLE),
    // Incite Rage, Wolf Spirit
    (1615, SpellFilter::Only(&[43292, 49172]), LOSS_OF_CONTROL_BUNDLE),
    // Incite Rage, Wolf Spirit, Overload, Lightning Tendrils
    (
        1615,
        SpellFilter::Only(&[43292, 49172, 61869, 63481, 61887, 63486]),
        ImmunityBundle {
            mechanics: INTERRUPT_AND_KNOCKBACK,
            auras: &[],
            effects: KNOCKBACKS,
        },
    ),
    // Avenging Fury
    (679, SpellFilter::Only(&[57742]), LOSS_OF_CONTROL_BUNDLE),
    // Stormshield
    (
        1557,
        SpellFilter::Only(&[64187]),
        ImmunityBundle {
            mechanics: Mechanic::Stun.mask(),
            auras: &[AuraType::ModStun],
            effects: &[],
        },
    ),
    // Fixate
    (1614, SpellFilter::Any, TAUNT_BUNDLE),
    // Fixated, Lightning Tendrils
    (1694, SpellFilter::Any, TAUNT_BUNDLE),
    // Berserk
    (1630, SpellFilter::Only(&[64112]), TAUNT_BUNDLE),
    // Bladestorm
    (
        477,
        SpellFilter::ZeroAmount,
        ImmunityBundle {
            mechanics: LOSS_OF_CONTROL,
            auras: CONTROL_AURAS,
            effects: KNOCKBACKS,
        },
    ),
    // Bladestorm, Killing Spree
    (
        1733,
        SpellFilter::ZeroAmount,
        ImmunityBundle {
            mechanics: LOSS_OF_CONTROL,
            auras: CONTROL_AURAS,
            effects: KNOCKBACKS,
        },
    ),
    // Determination
    (
        878,
        SpellFilter::Only(&[66092]),
        ImmunityBundle {
            mechanics: mechanic_mask(&[
                Mechanic::Snare,
                Mechanic::Stun,
                Mechanic::Disoriented,
                Mechanic::Freeze,
            ]),
            auras: &[AuraType::ModStun, AuraType::ModDecreaseSpeed],
            effects: &[],
        },
    ),
];

/// Rows for a misc value whose default is the full loss-of-control bundle
/// unless the spell is listed with its own bundle.
pub static MECHANIC_MASK_EXCEPT: &[(i32, &[SpellId], ImmunityBundle)] = &[
    // Startling Roar, Warlord Roar, Break Bonds; Stormshield has its own row
    (1557, &[64187], LOSS_OF_CONTROL_BUNDLE),
    // Fervor; Berserk has its own row
    (1630, &[64112], LOSS_OF_CONTROL_BUNDLE),
];

/// Raw mask bit to granted aura types, used when no override matched.
pub static MECHANIC_MASK_BITS: &[(u32, &[AuraType])] = &[
    (10, &[AuraType::ModStun]),
    (1, &[AuraType::Transform]),
    (6, &[AuraType::ModDecreaseSpeed]),
    (0, &[AuraType::ModRoot, AuraType::ModRoot2]),
    (2, &[AuraType::ModConfuse]),
    (9, &[AuraType::ModFear]),
    (7, &[AuraType::ModDisarm]),
];

/// Bundles matched for a mechanic-immunity-mask aura.
pub fn mechanic_mask_bundles(
    spell_id: SpellId,
    misc_value: i32,
    amount: i32,
) -> impl Iterator<Item = &'static ImmunityBundle> {
    let direct = MECHANIC_MASK_OVERRIDES
        .iter()
        .filter(move |(misc, filter, _)| *misc == misc_value && filter.accepts(spell_id, amount))
        .map(|(_, _, bundle)| bundle);
    let fallback = MECHANIC_MASK_EXCEPT
        .iter()
        .filter(move |(misc, excluded, _)| *misc == misc_value && !excluded.contains(&spell_id))
        .map(|(_, _, bundle)| bundle);
    direct.chain(fallback)
}

/// Singular mechanic-immunity auras whose misc value understates the grant.
pub static MECHANIC_IMMUNITY_OVERRIDES: &[(SpellId, u64, &[AuraType])] = &[
    (42292, LOSS_OF_CONTROL, &[AuraType::UseNormalMovementSpeed]), // PvP Trinket
    (59752, LOSS_OF_CONTROL, &[AuraType::UseNormalMovementSpeed]), // Every Man for Himself
    (34471, LOSS_OF_CONTROL, &[]),                                 // The Beast Within
    (19574, LOSS_OF_CONTROL, &[]),                                 // Bestial Wrath
    (46227, LOSS_OF_CONTROL, &[]),                                 // Medallion of Immunity
    (53490, LOSS_OF_CONTROL, &[]),                                 // Bullheaded
    (65547, LOSS_OF_CONTROL, &[]),                                 // PvP Trinket
    (134946, LOSS_OF_CONTROL, &[]),                                // Supremacy of the Alliance
    (134956, LOSS_OF_CONTROL, &[]),                                // Supremacy of the Horde
    (195710, LOSS_OF_CONTROL, &[]),                                // Honorable Medallion
    (208683, LOSS_OF_CONTROL, &[]),                                // Gladiator's Medallion
    (
        54508, // Demonic Empowerment
        mechanic_mask(&[Mechanic::Snare, Mechanic::Root, Mechanic::Stun]),
        &[],
    ),
];

/// Spells usable while stunned that also ignore freeze, knockout and sleep.
pub const STUN_ALLOWANCE_EXTENDED: &[SpellId] = &[
    22812, // Barkskin
    47585, // Dispersion
];

/// Spells flagged usable while stunned that still obey ordinary stuns.
pub const STUN_ALLOWANCE_DENIED: &[SpellId] = &[
    49039, // Lichborne
];

/// Spells usable while fleeing that also ignore horror.
pub const FLEE_ALLOWANCE_EXTENDED: &[SpellId] = &[
    22812, // Barkskin
    47585, // Dispersion
];
