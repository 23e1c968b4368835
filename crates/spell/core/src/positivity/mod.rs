//! Effect positivity: whether each effect slot helps or harms its target.
//!
//! Slots are nodes of an implicit graph whose edges are "triggers spell"
//! links. [`PositivityClassifier`] walks it with an explicit stack and a
//! visited set, so content-authored trigger cycles always terminate.

pub mod exceptions;
mod rules;

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, warn};

use crate::catalog::SpellLookup;
use crate::config::SpellConfig;
use crate::defines::AuraType;
use crate::info::{Difficulty, SpellId, SpellInfo};

/// Helps or harms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    Positive,
    Negative,
}

impl Verdict {
    pub const fn is_negative(self) -> bool {
        matches!(self, Self::Negative)
    }
}

impl From<bool> for Verdict {
    /// `true` is positive.
    fn from(positive: bool) -> Self {
        if positive { Self::Positive } else { Self::Negative }
    }
}

/// Positivity pinned by an authoritative upstream source, per `(spell, slot)`.
///
/// Pinned slots skip every rule, including the sibling pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositivityOverrides {
    pinned: BTreeMap<(SpellId, usize), Verdict>,
}

impl PositivityOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_pinned(mut self, spell_id: SpellId, effect_index: usize, verdict: Verdict) -> Self {
        self.pin(spell_id, effect_index, verdict);
        self
    }

    pub fn pin(&mut self, spell_id: SpellId, effect_index: usize, verdict: Verdict) {
        self.pinned.insert((spell_id, effect_index), verdict);
    }

    pub fn pinned(&self, spell_id: SpellId, effect_index: usize) -> Option<Verdict> {
        self.pinned.get(&(spell_id, effect_index)).copied()
    }

    pub fn len(&self) -> usize {
        self.pinned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pinned.is_empty()
    }
}

type NodeKey = (SpellId, Difficulty, usize);

/// A slot waiting on the classification of a triggered spell's effects.
struct Frame<'s> {
    trigger: &'s SpellInfo,
    next_child: usize,
    positive_targets_only: bool,
    fallback: Verdict,
}

enum Entered<'s> {
    Decided(Verdict),
    Waiting(Frame<'s>),
}

/// Classifies effect slots against a read-only view of every loaded spell.
pub struct PositivityClassifier<'a, L: SpellLookup + ?Sized> {
    spells: &'a L,
    overrides: &'a PositivityOverrides,
    max_depth: usize,
}

impl<'a, L: SpellLookup + ?Sized> PositivityClassifier<'a, L> {
    pub fn new(spells: &'a L, overrides: &'a PositivityOverrides, config: &SpellConfig) -> Self {
        Self {
            spells,
            overrides,
            max_depth: config.max_trigger_depth.max(1),
        }
    }

    /// Bitmask of harmful slots, sibling pass included. Bit `i` is slot `i`.
    pub fn negative_mask(&self, spell: &SpellInfo) -> u32 {
        let effects = spell.effects();
        let mut mask = 0u32;

        for effect in effects {
            if self.classify_effect(spell, effect.effect_index).is_negative() {
                mask |= 1 << effect.effect_index;
            }
        }

        // A conditional aura sharing delivery targets with a later harmful slot is harmful too.
        for effect in effects {
            let index = effect.effect_index;
            if !effect.is_effect()
                || mask & (1 << index) != 0
                || self.overrides.pinned(spell.id, index).is_some()
                || !is_sibling_sensitive(effect.apply_aura_name)
            {
                continue;
            }

            let shares_negative_sibling = effects[index + 1..].iter().any(|later| {
                mask & (1 << later.effect_index) != 0
                    && later.target_a.target() == effect.target_a.target()
                    && later.target_b.target() == effect.target_b.target()
            });
            if shares_negative_sibling {
                debug!(spell_id = spell.id, effect_index = index, "slot negative via sibling");
                mask |= 1 << index;
            }
        }

        mask
    }

    /// Verdict for one slot before the sibling pass.
    pub fn classify_effect(&self, spell: &SpellInfo, effect_index: usize) -> Verdict {
        let mut visited = BTreeSet::new();
        let mut stack = match self.enter(spell, effect_index, &mut visited) {
            Entered::Decided(verdict) => return verdict,
            Entered::Waiting(frame) => vec![frame],
        };

        // Verdict of the most recently finished child of the top frame.
        let mut finished: Option<Verdict> = None;

        while let Some(top) = stack.last_mut() {
            if finished.take() == Some(Verdict::Negative) {
                stack.pop();
                finished = Some(Verdict::Negative);
                continue;
            }

            let trigger = top.trigger;
            let Some(child) = trigger.effects().get(top.next_child) else {
                let fallback = top.fallback;
                stack.pop();
                finished = Some(fallback);
                continue;
            };
            top.next_child += 1;

            let key = (trigger.id, trigger.difficulty, child.effect_index);
            if visited.contains(&key)
                || !child.is_effect()
                || (top.positive_targets_only && !rules::is_positive_target(child))
            {
                continue;
            }

            match self.enter(trigger, child.effect_index, &mut visited) {
                Entered::Decided(verdict) => finished = Some(verdict),
                Entered::Waiting(frame) if stack.len() >= self.max_depth => {
                    warn!(
                        spell_id = trigger.id,
                        effect_index = child.effect_index,
                        depth = stack.len(),
                        "trigger chain too deep; using local verdict"
                    );
                    finished = Some(frame.fallback);
                }
                Entered::Waiting(frame) => stack.push(frame),
            }
        }

        finished.unwrap_or(Verdict::Positive)
    }

    fn enter<'s>(
        &self,
        spell: &'s SpellInfo,
        effect_index: usize,
        visited: &mut BTreeSet<NodeKey>,
    ) -> Entered<'s>
    where
        'a: 's,
    {
        let Some(effect) = spell.effects().get(effect_index).filter(|e| e.is_effect()) else {
            return Entered::Decided(Verdict::Positive);
        };

        if let Some(verdict) = self.overrides.pinned(spell.id, effect_index) {
            return Entered::Decided(verdict);
        }

        if let Some(verdict) = rules::attribute_verdict(spell) {
            return Entered::Decided(verdict);
        }

        visited.insert((spell.id, spell.difficulty, effect_index));

        match rules::evaluate(spell, effect) {
            rules::Step::Decided(verdict) => Entered::Decided(verdict),
            rules::Step::Descend {
                trigger,
                positive_targets_only,
                fallback,
            } => match self.spells.lookup(trigger, spell.difficulty) {
                Some(trigger) => Entered::Waiting(Frame {
                    trigger,
                    next_child: 0,
                    positive_targets_only,
                    fallback,
                }),
                None => {
                    debug!(spell_id = spell.id, trigger, "triggered spell not loaded");
                    Entered::Decided(fallback)
                }
            },
        }
    }
}

fn is_sibling_sensitive(aura: AuraType) -> bool {
    matches!(
        aura,
        AuraType::Dummy
            | AuraType::ModStun
            | AuraType::ModFear
            | AuraType::ModTaunt
            | AuraType::Transform
            | AuraType::ModAttackSpeed
            | AuraType::ModDecreaseSpeed
    )
}

/// Classifies every spell in `spells`, then stores the masks.
///
/// All masks are computed against the unmodified input before any is
/// written, so the outcome does not depend on iteration order.
pub fn classify_all(
    spells: &mut BTreeMap<(SpellId, Difficulty), SpellInfo>,
    overrides: &PositivityOverrides,
    config: &SpellConfig,
) {
    let masks: Vec<((SpellId, Difficulty), u32)> = {
        let classifier = PositivityClassifier::new(&*spells, overrides, config);
        spells
            .iter()
            .map(|(key, spell)| (*key, classifier.negative_mask(spell)))
            .collect()
    };

    for (key, mask) in masks {
        if let Some(spell) = spells.get_mut(&key) {
            spell.negative_effects = mask;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defines::{SpellAttr0, SpellEffectName, Targets};
    use crate::info::BASE_DIFFICULTY;
    use crate::records::{EffectRecord, SpellEffectEntry, SpellNameEntry};

    fn effect(
        spell_id: SpellId,
        index: u32,
        name: SpellEffectName,
        aura: AuraType,
        target: Targets,
        trigger: SpellId,
    ) -> EffectRecord {
        SpellEffectEntry {
            spell_id,
            effect_index: index,
            effect: name as u32,
            effect_aura: aura as u32,
            effect_trigger_spell: trigger,
            implicit_target: [target as u32, 0],
            ..Default::default()
        }
        .into()
    }

    fn spell(id: SpellId, effects: &[EffectRecord]) -> SpellInfo {
        SpellInfo::from_effects(
            &SpellNameEntry {
                id,
                name: format!("spell {id}"),
            },
            effects,
        )
    }

    fn store(spells: Vec<SpellInfo>) -> BTreeMap<(SpellId, Difficulty), SpellInfo> {
        spells
            .into_iter()
            .map(|s| ((s.id, BASE_DIFFICULTY), s))
            .collect()
    }

    fn mask_of(spells: &BTreeMap<(SpellId, Difficulty), SpellInfo>, id: SpellId) -> u32 {
        let overrides = PositivityOverrides::new();
        let config = SpellConfig::default();
        let classifier = PositivityClassifier::new(spells, &overrides, &config);
        classifier.negative_mask(&spells[&(id, BASE_DIFFICULTY)])
    }

    #[test]
    fn empty_spell_is_positive() {
        let spells = store(vec![spell(1, &[])]);
        assert_eq!(mask_of(&spells, 1), 0);
    }

    #[test]
    fn passive_short_circuits() {
        let mut damage = spell(
            2,
            &[effect(2, 0, SpellEffectName::SchoolDamage, AuraType::None, Targets::UnitTargetEnemy, 0)],
        );
        damage.attributes |= SpellAttr0::PASSIVE;
        let spells = store(vec![damage]);
        assert_eq!(mask_of(&spells, 2), 0);
    }

    #[test]
    fn pinned_verdict_wins() {
        let heal = spell(
            3,
            &[effect(3, 0, SpellEffectName::Heal, AuraType::None, Targets::UnitTargetAlly, 0)],
        );
        let spells = store(vec![heal]);
        let overrides = PositivityOverrides::new().with_pinned(3, 0, Verdict::Negative);
        let config = SpellConfig::default();
        let classifier = PositivityClassifier::new(&spells, &overrides, &config);
        assert_eq!(classifier.negative_mask(&spells[&(3, BASE_DIFFICULTY)]), 1);
    }

    #[test]
    fn negative_trigger_taints_periodic_aura() {
        let periodic = spell(
            10,
            &[effect(10, 0, SpellEffectName::ApplyAura, AuraType::PeriodicTriggerSpell, Targets::UnitCaster, 11)],
        );
        let harmful = spell(
            11,
            &[effect(11, 0, SpellEffectName::ApplyAura, AuraType::ModRoot, Targets::UnitCaster, 0)],
        );
        let spells = store(vec![periodic, harmful]);
        assert_eq!(mask_of(&spells, 10), 1);
    }

    #[test]
    fn enemy_targeted_trigger_is_ignored_by_periodic_aura() {
        let periodic = spell(
            20,
            &[effect(20, 0, SpellEffectName::ApplyAura, AuraType::PeriodicTriggerSpell, Targets::UnitCaster, 21)],
        );
        let bolt = spell(
            21,
            &[effect(21, 0, SpellEffectName::SchoolDamage, AuraType::None, Targets::UnitTargetEnemy, 0)],
        );
        let spells = store(vec![periodic, bolt]);
        assert_eq!(mask_of(&spells, 20), 0);
    }

    #[test]
    fn trigger_on_enemy_takes_triggered_verdict() {
        let spells = store(vec![
            spell(60, &[effect(60, 0, SpellEffectName::TriggerSpell, AuraType::None, Targets::UnitTargetEnemy, 61)]),
            spell(61, &[effect(61, 0, SpellEffectName::Dummy, AuraType::None, Targets::UnitTargetEnemy, 0)]),
            spell(62, &[effect(62, 0, SpellEffectName::TriggerSpell, AuraType::None, Targets::UnitTargetEnemy, 63)]),
            spell(63, &[effect(63, 0, SpellEffectName::SchoolDamage, AuraType::None, Targets::UnitTargetEnemy, 0)]),
        ]);
        assert_eq!(mask_of(&spells, 61), 0);
        assert_eq!(mask_of(&spells, 60), 0);
        assert_eq!(mask_of(&spells, 62), 1);
    }

    #[test]
    fn mutual_triggers_terminate() {
        let a = spell(
            30,
            &[effect(30, 0, SpellEffectName::TriggerSpell, AuraType::None, Targets::UnitCaster, 31)],
        );
        let b = spell(
            31,
            &[effect(31, 0, SpellEffectName::TriggerSpell, AuraType::None, Targets::UnitCaster, 30)],
        );
        let spells = store(vec![a, b]);
        assert_eq!(mask_of(&spells, 30), 0);
        assert_eq!(mask_of(&spells, 31), 0);
    }

    #[test]
    fn depth_guard_stops_long_chains() {
        let chain: Vec<SpellInfo> = (100..110)
            .map(|id| {
                spell(
                    id,
                    &[effect(id, 0, SpellEffectName::TriggerSpell, AuraType::None, Targets::UnitCaster, id + 1)],
                )
            })
            .chain(std::iter::once(spell(
                110,
                &[effect(110, 0, SpellEffectName::SchoolDamage, AuraType::None, Targets::UnitCaster, 0)],
            )))
            .collect();
        let spells = store(chain);
        let overrides = PositivityOverrides::new();

        let deep = SpellConfig::default();
        assert_eq!(
            PositivityClassifier::new(&spells, &overrides, &deep).negative_mask(&spells[&(100, BASE_DIFFICULTY)]),
            1
        );

        let shallow = SpellConfig::default().with_max_trigger_depth(3);
        assert_eq!(
            PositivityClassifier::new(&spells, &overrides, &shallow).negative_mask(&spells[&(100, BASE_DIFFICULTY)]),
            0
        );
    }

    #[test]
    fn sibling_pass_marks_shared_target_stun() {
        let mixed = spell(
            40,
            &[
                effect(40, 0, SpellEffectName::ApplyAura, AuraType::Dummy, Targets::UnitTargetAny, 0),
                effect(40, 1, SpellEffectName::ApplyAura, AuraType::ModRoot, Targets::UnitTargetAny, 0),
            ],
        );
        let spells = store(vec![mixed]);
        assert_eq!(mask_of(&spells, 40), 0b11);
    }

    #[test]
    fn sibling_pass_requires_matching_targets() {
        let mixed = spell(
            41,
            &[
                effect(41, 0, SpellEffectName::ApplyAura, AuraType::Dummy, Targets::UnitCaster, 0),
                effect(41, 1, SpellEffectName::ApplyAura, AuraType::ModRoot, Targets::UnitTargetAny, 0),
            ],
        );
        let spells = store(vec![mixed]);
        assert_eq!(mask_of(&spells, 41), 0b10);
    }

    #[test]
    fn classify_all_writes_masks() {
        let mut spells = store(vec![
            spell(50, &[effect(50, 0, SpellEffectName::Heal, AuraType::None, Targets::UnitTargetAlly, 0)]),
            spell(51, &[effect(51, 0, SpellEffectName::SchoolDamage, AuraType::None, Targets::UnitTargetEnemy, 0)]),
        ]);
        classify_all(&mut spells, &PositivityOverrides::new(), &SpellConfig::default());
        assert!(spells[&(50, BASE_DIFFICULTY)].is_positive());
        assert!(!spells[&(51, BASE_DIFFICULTY)].is_positive());
        assert!(!spells[&(51, BASE_DIFFICULTY)].is_positive_effect(0));
    }
}
