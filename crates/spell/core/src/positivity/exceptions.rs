//! Per-spell positivity exceptions.
//!
//! Content data: entries override the generic rules for the listed spells
//! only. Extend the tables; do not fold entries into the rules.

use super::Verdict;
use crate::defines::{SpellFamilyFlags, SpellFamilyName};
use crate::info::{SpellId, SpellInfo};

/// `(family, spell id, verdict)`; an entry applies only within its family.
pub static ID_EXCEPTIONS: &[(SpellFamilyName, SpellId, Verdict)] = &[
    // Spiritual Vengeance, Teron Gorefiend
    (SpellFamilyName::Generic, 40268, Verdict::Negative),
    // Avenging Wrath Marker
    (SpellFamilyName::Generic, 61987, Verdict::Negative),
    // Divine Shield exclude aura
    (SpellFamilyName::Generic, 61988, Verdict::Negative),
    // Phase Punch, Algalon the Observer
    (SpellFamilyName::Generic, 64412, Verdict::Negative),
    // Rune of Blood, Saurfang
    (SpellFamilyName::Generic, 72410, Verdict::Negative),
    // Touch of Insignificance, Lady Deathwhisper
    (SpellFamilyName::Generic, 71204, Verdict::Negative),
    // Bat Costume
    (SpellFamilyName::Generic, 24732, Verdict::Positive),
    // Tag Murloc
    (SpellFamilyName::Generic, 30877, Verdict::Positive),
    // Rabbit Costume
    (SpellFamilyName::Generic, 61716, Verdict::Positive),
    // Noblegarden Bunny
    (SpellFamilyName::Generic, 61734, Verdict::Positive),
    // Fists of Stone
    (SpellFamilyName::Generic, 62344, Verdict::Positive),
    // Dream Funnel
    (SpellFamilyName::Generic, 50344, Verdict::Positive),
    // Manabonked! (item)
    (SpellFamilyName::Generic, 61819, Verdict::Positive),
    // Manabonked! (minigob)
    (SpellFamilyName::Generic, 61834, Verdict::Positive),
    // Rigor Mortis
    (SpellFamilyName::Generic, 73523, Verdict::Positive),
    // Envenom deals damage but counts as a buff on the rogue
    (SpellFamilyName::Rogue, 32645, Verdict::Positive),
    // Shadow of Death, Teron Gorefiend
    (SpellFamilyName::Rogue, 40251, Verdict::Negative),
];

/// `(family, class mask, verdict)`; matches when any mask bit is set.
pub static FAMILY_FLAG_EXCEPTIONS: &[(SpellFamilyName, SpellFamilyFlags, Verdict)] = &[
    // Slam, Execute
    (
        SpellFamilyName::Warrior,
        SpellFamilyFlags::new(0x2020_0000, 0, 0, 0),
        Verdict::Negative,
    ),
];

/// Hard-coded verdict for `spell`, if any table lists it.
pub fn exception_for(spell: &SpellInfo) -> Option<Verdict> {
    ID_EXCEPTIONS
        .iter()
        .find(|(family, id, _)| *family == spell.spell_family_name && *id == spell.id)
        .map(|(_, _, verdict)| *verdict)
        .or_else(|| {
            FAMILY_FLAG_EXCEPTIONS
                .iter()
                .find(|(family, flags, _)| {
                    *family == spell.spell_family_name && flags.intersects(&spell.spell_family_flags)
                })
                .map(|(_, _, verdict)| *verdict)
        })
}
