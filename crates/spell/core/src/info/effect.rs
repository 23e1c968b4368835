use super::{ImmunityInfo, SpellId};
use crate::defines::{
    AuraType, EffectImplicitTargetType, Mechanic, SpellCastTargetFlags, SpellEffectName,
    SpellFamilyFlags, SpellTargetCheckType, SpellTargetObjectType, SpellTargetReferenceType,
    SpellTargetSelectionCategory, Targets,
};
use crate::records::SpellRadiusEntry;

/// One implicit target specification of an effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellImplicitTargetInfo {
    target: Targets,
}

impl SpellImplicitTargetInfo {
    pub const fn new(target: Targets) -> Self {
        Self { target }
    }

    pub const fn target(&self) -> Targets {
        self.target
    }

    pub const fn object_type(&self) -> SpellTargetObjectType {
        self.target.descriptor().object_type
    }

    pub const fn reference_type(&self) -> SpellTargetReferenceType {
        self.target.descriptor().reference_type
    }

    pub const fn selection_category(&self) -> SpellTargetSelectionCategory {
        self.target.descriptor().selection_category
    }

    pub const fn check_type(&self) -> SpellTargetCheckType {
        self.target.descriptor().check_type
    }

    /// Whether the target selection hits everything in an area or cone.
    pub const fn is_area(&self) -> bool {
        matches!(
            self.selection_category(),
            SpellTargetSelectionCategory::Area | SpellTargetSelectionCategory::Cone
        )
    }

    /// Explicit target flags this implicit target needs from the cast request.
    ///
    /// `src_set`/`dst_set` track whether an earlier target already provided a
    /// source or destination location and are updated accordingly.
    pub fn explicit_target_mask(&self, src_set: &mut bool, dst_set: &mut bool) -> SpellCastTargetFlags {
        let mut mask = SpellCastTargetFlags::empty();

        if self.target == Targets::DestTraj {
            if !*src_set {
                mask |= SpellCastTargetFlags::SOURCE_LOCATION;
            }
            if !*dst_set {
                mask |= SpellCastTargetFlags::DEST_LOCATION;
            }
        } else {
            match self.reference_type() {
                SpellTargetReferenceType::Src if !*src_set => {
                    mask = SpellCastTargetFlags::SOURCE_LOCATION;
                }
                SpellTargetReferenceType::Dest if !*dst_set => {
                    mask = SpellCastTargetFlags::DEST_LOCATION;
                }
                SpellTargetReferenceType::Target => match self.object_type() {
                    SpellTargetObjectType::Gobj => mask = SpellCastTargetFlags::GAMEOBJECT,
                    SpellTargetObjectType::GobjItem => mask = SpellCastTargetFlags::GAMEOBJECT_ITEM,
                    SpellTargetObjectType::UnitAndDest
                    | SpellTargetObjectType::Unit
                    | SpellTargetObjectType::Dest => {
                        mask = match self.check_type() {
                            SpellTargetCheckType::Enemy => SpellCastTargetFlags::UNIT_ENEMY,
                            SpellTargetCheckType::Ally => SpellCastTargetFlags::UNIT_ALLY,
                            SpellTargetCheckType::Party => SpellCastTargetFlags::UNIT_PARTY,
                            SpellTargetCheckType::Raid => SpellCastTargetFlags::UNIT_RAID,
                            SpellTargetCheckType::Passenger => SpellCastTargetFlags::UNIT_PASSENGER,
                            _ => SpellCastTargetFlags::UNIT,
                        };
                    }
                    _ => {}
                },
                _ => {}
            }
        }

        match self.object_type() {
            SpellTargetObjectType::Src => *src_set = true,
            SpellTargetObjectType::Dest | SpellTargetObjectType::UnitAndDest => *dst_set = true,
            _ => {}
        }

        mask
    }
}

/// Scaling coefficients of an effect's numeric value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellEffectScaling {
    pub coefficient: f32,
    pub variance: f32,
    pub resource_coefficient: f32,
}

/// One effect slot of a spell.
///
/// Blank slots are kept as placeholders with [`SpellEffectName::None`] so the
/// slot index always equals [`SpellEffectInfo::effect_index`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellEffectInfo {
    pub effect_index: usize,
    pub effect: SpellEffectName,
    pub apply_aura_name: AuraType,
    pub apply_aura_period: u32,
    pub base_points: f32,
    pub real_points_per_level: f32,
    pub points_per_resource: f32,
    pub amplitude: f32,
    pub chain_amplitude: f32,
    pub bonus_coefficient: f32,
    pub bonus_coefficient_from_ap: f32,
    pub pvp_multiplier: f32,
    pub position_facing: f32,
    pub scaling: SpellEffectScaling,
    pub misc_value: i32,
    pub misc_value_b: i32,
    pub mechanic: Mechanic,
    pub target_a: SpellImplicitTargetInfo,
    pub target_b: SpellImplicitTargetInfo,
    pub target_a_radius: Option<SpellRadiusEntry>,
    pub target_b_radius: Option<SpellRadiusEntry>,
    pub chain_targets: u32,
    pub item_type: u32,
    pub trigger_spell: SpellId,
    pub spell_class_mask: SpellFamilyFlags,
    pub effect_attributes: u32,
    /// Populated only when the aura grants an immunity.
    pub immunity: Option<ImmunityInfo>,
}

impl SpellEffectInfo {
    /// Index-only placeholder for a blank slot.
    pub fn placeholder(effect_index: usize) -> Self {
        Self {
            effect_index,
            ..Self::default()
        }
    }

    pub fn is_effect(&self) -> bool {
        self.effect != SpellEffectName::None
    }

    pub fn is_effect_name(&self, name: SpellEffectName) -> bool {
        self.effect == name
    }

    pub fn is_area_aura_effect(&self) -> bool {
        self.effect.is_area_aura_application()
    }

    pub fn is_unit_owned_aura_effect(&self) -> bool {
        self.is_area_aura_effect()
            || matches!(
                self.effect,
                SpellEffectName::ApplyAura | SpellEffectName::ApplyAuraOnPet
            )
    }

    /// Whether this slot applies an aura with a concrete aura type.
    pub fn is_aura(&self) -> bool {
        (self.is_unit_owned_aura_effect() || self.effect == SpellEffectName::PersistentAreaAura)
            && self.apply_aura_name != AuraType::None
    }

    pub fn is_aura_type(&self, aura: AuraType) -> bool {
        self.is_aura() && self.apply_aura_name == aura
    }

    pub fn is_targeting_area(&self) -> bool {
        self.target_a.is_area() || self.target_b.is_area()
    }

    /// Whether either target selection checks for an enemy.
    pub fn targets_enemy(&self) -> bool {
        self.target_a.check_type() == SpellTargetCheckType::Enemy
            || self.target_b.check_type() == SpellTargetCheckType::Enemy
    }

    /// Unscaled integer value of the effect.
    pub fn calc_value(&self) -> i32 {
        self.base_points.round() as i32
    }

    pub fn implicit_target_type(&self) -> EffectImplicitTargetType {
        self.effect.implicit_target_info().0
    }

    /// Object type the effect operates on when resolving its own targets.
    pub fn used_target_object_type(&self) -> SpellTargetObjectType {
        self.effect.implicit_target_info().1
    }

    /// Explicit target flags still needed after the implicit targets and
    /// `mask` have been taken into account.
    pub fn missing_target_mask(
        &self,
        src_set: bool,
        dst_set: bool,
        mask: SpellCastTargetFlags,
    ) -> SpellCastTargetFlags {
        let mut needed = self.used_target_object_type().target_flag_mask();
        let provided = self.target_a.object_type().target_flag_mask()
            | self.target_b.object_type().target_flag_mask()
            | mask;

        if provided.intersects(SpellCastTargetFlags::UNIT_MASK) {
            needed.remove(SpellCastTargetFlags::UNIT_MASK);
        }
        if provided.intersects(SpellCastTargetFlags::CORPSE_MASK) {
            needed.remove(SpellCastTargetFlags::UNIT_MASK | SpellCastTargetFlags::CORPSE_MASK);
        }
        if provided.contains(SpellCastTargetFlags::GAMEOBJECT_ITEM) {
            needed.remove(
                SpellCastTargetFlags::GAMEOBJECT_ITEM
                    | SpellCastTargetFlags::GAMEOBJECT
                    | SpellCastTargetFlags::ITEM,
            );
        }
        if provided.contains(SpellCastTargetFlags::GAMEOBJECT) {
            needed.remove(SpellCastTargetFlags::GAMEOBJECT | SpellCastTargetFlags::GAMEOBJECT_ITEM);
        }
        if provided.contains(SpellCastTargetFlags::ITEM) {
            needed.remove(SpellCastTargetFlags::ITEM | SpellCastTargetFlags::GAMEOBJECT_ITEM);
        }
        if dst_set || provided.contains(SpellCastTargetFlags::DEST_LOCATION) {
            needed.remove(SpellCastTargetFlags::DEST_LOCATION);
        }
        if src_set || provided.contains(SpellCastTargetFlags::SOURCE_LOCATION) {
            needed.remove(SpellCastTargetFlags::SOURCE_LOCATION);
        }

        needed
    }
}
