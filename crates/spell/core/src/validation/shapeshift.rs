use tracing::error;

use crate::defines::{ShapeshiftFormFlags, SpellAttr0, SpellAttr2, SpellCastResult};
use crate::env::SpellTablesOracle;
use crate::info::SpellInfo;

impl SpellInfo {
    /// Checks the spell's stance rules against the caster's current `form`.
    ///
    /// Form `0` means no shapeshift. Stance-flagged forms behave like no
    /// form at all unless the spell names them explicitly.
    pub fn check_shapeshift(&self, form: u32, tables: &dyn SpellTablesOracle) -> SpellCastResult {
        let stance = Self::stance_mask(form);

        if stance & self.stances_not != 0 {
            return SpellCastResult::NotShapeshift;
        }
        if stance & self.stances != 0 {
            return SpellCastResult::SpellCastOk;
        }

        let mut shifted = None;
        if form > 0 {
            let Some(info) = tables.shapeshift_form(form) else {
                error!(spell_id = self.id, form, "unknown shapeshift form");
                return SpellCastResult::SpellCastOk;
            };
            if !info.flags.contains(ShapeshiftFormFlags::STANCE) {
                shifted = Some(info);
            }
        }

        match shifted {
            Some(info) => {
                if self.has_attribute(SpellAttr0::NOT_SHAPESHIFTED)
                    || info.flags.contains(ShapeshiftFormFlags::CAN_ONLY_CAST_SHAPESHIFT_SPELLS)
                {
                    SpellCastResult::NotShapeshift
                } else if self.stances != 0 {
                    SpellCastResult::OnlyShapeshift
                } else {
                    SpellCastResult::SpellCastOk
                }
            }
            None => {
                if !self.has_attribute(SpellAttr2::ALLOW_WHILE_NOT_SHAPESHIFTED_CASTER_FORM)
                    && self.stances != 0
                {
                    SpellCastResult::OnlyShapeshift
                } else {
                    SpellCastResult::SpellCastOk
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{ShapeshiftFormInfo, TablesSnapshot};
    use crate::validation::testkit::spell;

    const CAT: u32 = 1;
    const BATTLE_STANCE: u32 = 17;
    const SPIRIT: u32 = 30;

    fn forms() -> TablesSnapshot {
        TablesSnapshot::new()
            .with_shapeshift_form(CAT, ShapeshiftFormInfo::default())
            .with_shapeshift_form(BATTLE_STANCE, ShapeshiftFormInfo {
                flags: ShapeshiftFormFlags::STANCE,
                ..Default::default()
            })
            .with_shapeshift_form(SPIRIT, ShapeshiftFormInfo {
                flags: ShapeshiftFormFlags::CAN_ONLY_CAST_SHAPESHIFT_SPELLS,
                ..Default::default()
            })
    }

    #[test]
    fn forbidden_form_wins_over_allowed() {
        let mut spell = spell(1, &[]);
        spell.stances = SpellInfo::stance_mask(CAT);
        spell.stances_not = SpellInfo::stance_mask(CAT);
        assert_eq!(spell.check_shapeshift(CAT, &forms()), SpellCastResult::NotShapeshift);
    }

    #[test]
    fn required_form_missing() {
        let mut spell = spell(1, &[]);
        spell.stances = SpellInfo::stance_mask(CAT);
        assert_eq!(spell.check_shapeshift(0, &forms()), SpellCastResult::OnlyShapeshift);
        assert_eq!(spell.check_shapeshift(CAT, &forms()), SpellCastResult::SpellCastOk);
        assert_eq!(
            spell.check_shapeshift(BATTLE_STANCE, &forms()),
            SpellCastResult::OnlyShapeshift
        );

        spell.attributes_ex2 |= SpellAttr2::ALLOW_WHILE_NOT_SHAPESHIFTED_CASTER_FORM;
        assert_eq!(spell.check_shapeshift(0, &forms()), SpellCastResult::SpellCastOk);
    }

    #[test]
    fn shifted_caster_restrictions() {
        let mut spell = spell(1, &[]);
        assert_eq!(spell.check_shapeshift(CAT, &forms()), SpellCastResult::SpellCastOk);
        assert_eq!(spell.check_shapeshift(SPIRIT, &forms()), SpellCastResult::NotShapeshift);

        spell.attributes |= SpellAttr0::NOT_SHAPESHIFTED;
        assert_eq!(spell.check_shapeshift(CAT, &forms()), SpellCastResult::NotShapeshift);
        assert_eq!(spell.check_shapeshift(BATTLE_STANCE, &forms()), SpellCastResult::SpellCastOk);
    }

    #[test]
    fn unknown_form_is_tolerated() {
        let mut spell = spell(1, &[]);
        spell.stances = SpellInfo::stance_mask(CAT);
        assert_eq!(spell.check_shapeshift(44, &forms()), SpellCastResult::SpellCastOk);
    }
}
