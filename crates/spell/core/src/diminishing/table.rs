//! Diminishing-returns content tables.
//!
//! Rows are checked top to bottom; the first match wins. Each row names the
//! ability it was written for.

use crate::defines::{DiminishingGroup as G, SpellFamilyFlags, SpellFamilyName as F};
use crate::info::{SpellId, SpellInfo};

/// How a table row recognizes a spell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpellMatch {
    Id(SpellId),
    /// Any shared class-mask bit.
    Flags(SpellFamilyFlags),
    /// Shares a bit with the first mask and none with the second.
    FlagsExcept(SpellFamilyFlags, SpellFamilyFlags),
    /// Shares a bit and uses the given visual.
    FlagsWithVisual(SpellFamilyFlags, u32),
}

impl SpellMatch {
    pub fn matches(&self, spell: &SpellInfo) -> bool {
        let own = &spell.spell_family_flags;
        match self {
            Self::Id(id) => spell.id == *id,
            Self::Flags(flags) => own.intersects(flags),
            Self::FlagsExcept(flags, excluded) => own.intersects(flags) && !own.intersects(excluded),
            Self::FlagsWithVisual(flags, visual) => own.intersects(flags) && spell.spell_visual == *visual,
        }
    }
}

const fn w0(bits: u32) -> SpellFamilyFlags {
    SpellFamilyFlags::new(bits, 0, 0, 0)
}

const fn w1(bits: u32) -> SpellFamilyFlags {
    SpellFamilyFlags::new(0, bits, 0, 0)
}

const fn w2(bits: u32) -> SpellFamilyFlags {
    SpellFamilyFlags::new(0, 0, bits, 0)
}

const fn w3(bits: u32) -> SpellFamilyFlags {
    SpellFamilyFlags::new(0, 0, 0, bits)
}

use SpellMatch::{Flags, FlagsExcept, FlagsWithVisual, Id};

/// Family-independent overrides checked before the class tables.
pub static ID_GROUPS: &[(SpellId, G)] = &[
    (20549, G::Stun),            // War Stomp
    (24394, G::Stun),            // Intimidation
    (118345, G::Stun),           // Pulverize
    (118905, G::Stun),           // Static Charge
    (107079, G::Incapacitate),   // Quaking Palm
    (155145, G::Silence),        // Arcane Torrent
    (108199, G::AoeKnockback),   // Gorefiend's Grasp
    (191244, G::AoeKnockback),   // Sticky Bomb
];

/// Per-class detection, `(family, match, group)`.
pub static FAMILY_GROUPS: &[(F, SpellMatch, G)] = &[
    (F::Generic, Id(47481), G::Stun), // Gnaw
    // Mage
    (F::Mage, Flags(w2(0x0004_0000)), G::Silence),      // Frostjaw
    (F::Mage, Flags(w0(0x0000_0040)), G::Root),         // Frost Nova
    (F::Mage, Flags(w2(0x0080_0000)), G::Incapacitate), // Ice Nova
    (F::Mage, Flags(w2(0x0000_0200)), G::Root),         // Freeze
    (F::Mage, Flags(w0(0x0080_0000)), G::Incapacitate), // Dragon's Breath
    (F::Mage, Flags(w0(0x0100_0000)), G::Incapacitate), // Polymorph
    (F::Mage, Flags(w2(0x0000_0040)), G::Incapacitate), // Ring of Frost
    // Warrior
    (F::Warrior, Flags(w1(0x0000_8000)), G::Stun),      // Shockwave
    (F::Warrior, Flags(w2(0x0000_1000)), G::Stun),      // Storm Bolt
    (F::Warrior, Flags(w0(0x0004_0000)), G::Disorient), // Intimidating Shout
    // Warlock
    (F::Warlock, Flags(w0(0x0008_0000)), G::Incapacitate), // Mortal Coil
    (F::Warlock, Flags(w1(0x0800_0000)), G::Incapacitate), // Banish
    (F::Warlock, Flags(w1(0x0000_0400)), G::Disorient),    // Fear
    (F::Warlock, Flags(w1(0x0000_0008)), G::Disorient),    // Howl of Terror
    (F::Warlock, Flags(w1(0x0000_1000)), G::Stun),         // Shadowfury
    (F::Warlock, Flags(w0(0x0000_1000)), G::Stun),         // Summon Infernal
    (F::Warlock, Id(170995), G::LimitOnly),                // Cripple
    // Warlock pets
    (F::WarlockPet, Flags(w0(0x0800_0000)), G::AoeKnockback), // Whiplash
    (F::WarlockPet, Flags(w0(0x0200_0000)), G::Disorient),    // Seduction
    (F::WarlockPet, Flags(w1(0x0000_0004)), G::Stun),         // Axe Toss
    // Druid
    (F::Druid, Flags(w1(0x0000_0080)), G::Stun),         // Maim
    (F::Druid, Flags(w0(0x0000_2000)), G::Stun),         // Mighty Bash
    (F::Druid, Id(163505), G::Stun),                     // Rake
    (F::Druid, Flags(w1(0x0000_0001)), G::Incapacitate), // Incapacitating Roar
    (F::Druid, Flags(w1(0x0000_0020)), G::Disorient),    // Cyclone
    (F::Druid, Id(81261), G::Silence),                   // Solar Beam
    (F::Druid, Flags(w1(0x0100_0000)), G::AoeKnockback), // Typhoon
    (F::Druid, Id(118283), G::AoeKnockback),             // Ursol's Vortex
    (F::Druid, Flags(w0(0x0000_0200)), G::Root),         // Entangling Roots
    (F::Druid, Flags(w2(0x0000_0004)), G::Root),         // Mass Entanglement
    // Rogue
    (F::Rogue, Flags(w0(0x0080_0000)), G::Stun),         // Between the Eyes
    (F::Rogue, Flags(w0(0x0000_0400)), G::Stun),         // Cheap Shot
    (F::Rogue, Flags(w0(0x0020_0000)), G::Stun),         // Kidney Shot
    (F::Rogue, Flags(w0(0x0000_0008)), G::Incapacitate), // Gouge
    (F::Rogue, Flags(w0(0x0000_0080)), G::Incapacitate), // Sap
    (F::Rogue, Flags(w0(0x0100_0000)), G::Disorient),    // Blind
    (F::Rogue, Flags(w1(0x2000_0000)), G::Silence),      // Garrote
    // Hunter
    (F::Hunter, Id(53148), G::Root),                      // Charge (tenacity pet)
    (F::Hunter, Id(117526), G::Stun),                     // Binding Shot
    (F::Hunter, Flags(w0(0x0000_0008)), G::Incapacitate), // Freezing Trap
    (F::Hunter, Id(24394), G::Stun),                      // Intimidation
    (F::Hunter, Flags(w2(0x0000_4000)), G::Incapacitate), // Scatter Shot
    (F::Hunter, Id(202933), G::Silence),                  // Spider Sting
    // Paladin
    (F::Paladin, Flags(w0(0x0000_0004)), G::Incapacitate), // Repentance
    (F::Paladin, Id(105421), G::Disorient),                // Blinding Light
    (F::Paladin, Flags(w0(0x0000_4000)), G::Silence),      // Avenger's Shield
    (F::Paladin, Flags(w0(0x0000_0800)), G::Stun),         // Hammer of Justice
    // Shaman
    (F::Shaman, Flags(w1(0x0000_8000)), G::Incapacitate), // Hex
    (F::Shaman, Flags(w1(0x0000_2000)), G::AoeKnockback), // Thunderstorm
    (F::Shaman, Flags(w2(0x0000_4000)), G::Root),         // Earthgrab Totem
    (F::Shaman, Flags(w3(0x0200_0000)), G::Stun),         // Lightning Lasso
    // Death knight
    (F::DeathKnight, Id(96294), G::Root),               // Chains of Ice
    (F::DeathKnight, Id(207167), G::Disorient),         // Blinding Sleet
    (F::DeathKnight, Flags(w0(0x0000_0200)), G::Silence), // Strangulate
    (F::DeathKnight, Flags(w2(0x0010_0000)), G::Stun),  // Asphyxiate
    (F::DeathKnight, Id(91800), G::Stun),               // Gnaw (ghoul)
    (F::DeathKnight, Id(91797), G::Stun),               // Monstrous Blow
    (F::DeathKnight, Id(207171), G::Stun),              // Winter is Coming
    // Priest
    (F::Priest, FlagsWithVisual(w2(0x0000_0020), 52021), G::Stun),         // Holy Word: Chastise
    (F::Priest, Id(226943), G::Stun),                                      // Mind Bomb
    (F::Priest, FlagsWithVisual(w0(0x0002_0000), 39068), G::Incapacitate), // Mind Control
    (F::Priest, FlagsWithVisual(w2(0x0000_0020), 52019), G::Incapacitate), // Holy Word: Chastise
    (F::Priest, Flags(w0(0x0001_0000)), G::Disorient),                     // Psychic Scream
    (F::Priest, FlagsWithVisual(w1(0x0020_0000), 39025), G::Silence),      // Silence
    (F::Priest, Id(204263), G::AoeKnockback),                              // Shining Force
    // Monk
    (F::Monk, Id(116706), G::Root),                                        // Disable
    (F::Monk, FlagsExcept(w1(0x0080_0000), w2(0x0000_0008)), G::Stun),     // Fists of Fury
    (F::Monk, Flags(w1(0x0000_0200)), G::Stun),                            // Leg Sweep
    (F::Monk, Id(202274), G::Incapacitate),                                // Incendiary Breath
    (F::Monk, Flags(w2(0x0080_0000)), G::Incapacitate),                    // Paralysis
    (F::Monk, Id(198909), G::Disorient),                                   // Song of Chi-Ji
    // Demon hunter
    (F::DemonHunter, Id(179057), G::Stun),         // Chaos Nova
    (F::DemonHunter, Id(211881), G::Stun),         // Fel Eruption
    (F::DemonHunter, Id(200166), G::Stun),         // Metamorphosis
    (F::DemonHunter, Id(205630), G::Stun),         // Illidan's Grasp
    (F::DemonHunter, Id(217832), G::Incapacitate), // Imprison
    (F::DemonHunter, Id(221527), G::Incapacitate), // Imprison
];

/// PvP duration caps in milliseconds, `(family, match, cap)`.
pub static DURATION_LIMITS: &[(F, SpellMatch, i32)] = &[
    (F::Mage, Flags(w0(0x0080_0000)), 3000), // Dragon's Breath
    (F::Warlock, Id(170995), 4000),          // Cripple
    (F::Hunter, Id(117526), 3000),           // Binding Shot
    (F::Hunter, Flags(w1(0x0000_1000)), 6000), // Wyvern Sting
    (F::Monk, Flags(w2(0x0080_0000)), 4000), // Paralysis
    (F::DemonHunter, Id(217832), 4000),      // Imprison
    (F::DemonHunter, Id(221527), 4000),      // Imprison
];

pub fn id_group(spell: &SpellInfo) -> Option<G> {
    ID_GROUPS
        .iter()
        .find(|(id, _)| *id == spell.id)
        .map(|(_, group)| *group)
}

pub fn family_group(spell: &SpellInfo) -> Option<G> {
    FAMILY_GROUPS
        .iter()
        .find(|(family, rule, _)| *family == spell.spell_family_name && rule.matches(spell))
        .map(|(_, _, group)| *group)
}

pub fn duration_limit(spell: &SpellInfo) -> Option<i32> {
    DURATION_LIMITS
        .iter()
        .find(|(family, rule, _)| *family == spell.spell_family_name && rule.matches(spell))
        .map(|(_, _, cap)| *cap)
}
