//! Aura type tags.

/// What a persistent aura applied by an effect does while it is active.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum AuraType {
    #[default]
    None = 0,
    BindSight = 1,
    ModPossess = 2,
    PeriodicDamage = 3,
    Dummy = 4,
    ModConfuse = 5,
    ModCharm = 6,
    ModFear = 7,
    PeriodicHeal = 8,
    ModAttackSpeed = 9,
    ModThreat = 10,
    ModTaunt = 11,
    ModStun = 12,
    ModDamageDone = 13,
    ModDamageTaken = 14,
    DamageShield = 15,
    ModStealth = 16,
    ModStealthDetect = 17,
    ModInvisibility = 18,
    ModInvisibilityDetect = 19,
    ObsModHealth = 20,
    ObsModPower = 21,
    ModResistance = 22,
    PeriodicTriggerSpell = 23,
    PeriodicEnergize = 24,
    ModPacify = 25,
    ModRoot = 26,
    ModSilence = 27,
    ReflectSpells = 28,
    ModStat = 29,
    ModSkill = 30,
    ModIncreaseSpeed = 31,
    ModIncreaseMountedSpeed = 32,
    ModDecreaseSpeed = 33,
    ModIncreaseHealth = 34,
    ModIncreaseEnergy = 35,
    ModShapeshift = 36,
    EffectImmunity = 37,
    StateImmunity = 38,
    SchoolImmunity = 39,
    DamageImmunity = 40,
    DispelImmunity = 41,
    ProcTriggerSpell = 42,
    ProcTriggerDamage = 43,
    TrackCreatures = 44,
    TrackResources = 45,
    ModParryPercent = 47,
    PeriodicTriggerSpellFromClient = 48,
    ModDodgePercent = 49,
    ModCriticalHealingAmount = 50,
    ModBlockPercent = 51,
    ModWeaponCritPercent = 52,
    PeriodicLeech = 53,
    ModHitChance = 54,
    ModSpellHitChance = 55,
    Transform = 56,
    ModSpellCritChance = 57,
    ModIncreaseSwimSpeed = 58,
    ModDamageDoneCreature = 59,
    ModPacifySilence = 60,
    ModScale = 61,
    PeriodicHealthFunnel = 62,
    ModAdditionalPowerCost = 63,
    PeriodicManaLeech = 64,
    ModCastingSpeedNotStack = 65,
    FeignDeath = 66,
    ModDisarm = 67,
    ModStalked = 68,
    SchoolAbsorb = 69,
    ModPowerCostSchoolPct = 72,
    ModPowerCostSchool = 73,
    ReflectSpellsSchool = 74,
    ModLanguage = 75,
    FarSight = 76,
    MechanicImmunity = 77,
    Mounted = 78,
    ModDamagePercentDone = 79,
    ModPercentStat = 80,
    SplitDamagePct = 81,
    WaterBreathing = 82,
    ModBaseResistance = 83,
    ModRegen = 84,
    ModPowerRegen = 85,
    ChannelDeathItem = 86,
    ModDamagePercentTaken = 87,
    ModHealthRegenPercent = 88,
    PeriodicDamagePercent = 89,
    ModDetaunt = 90,
    ModDetectRange = 91,
    PreventsFleeing = 92,
    ModUnattackable = 93,
    InterruptRegen = 94,
    Ghost = 95,
    SpellMagnet = 96,
    ManaShield = 97,
    ModSkill2 = 98,
    ModAttackPower = 99,
    AurasVisible = 100,
    ModResistancePct = 101,
    ModMeleeAttackPowerVersus = 102,
    ModTotalThreat = 103,
    WaterWalk = 104,
    FeatherFall = 105,
    Hover = 106,
    AddFlatModifier = 107,
    AddPctModifier = 108,
    AddTargetTrigger = 109,
    ModPowerRegenPercent = 110,
    InterceptMeleeRangedAttacks = 111,
    OverrideClassScripts = 112,
    ModRangedDamageTaken = 113,
    ModRangedDamageTakenPct = 114,
    ModHealing = 115,
    ModRegenDuringCombat = 116,
    ModMechanicResistance = 117,
    ModHealingPct = 118,
    Untrackable = 120,
    Empathy = 121,
    ModOffhandDamagePct = 122,
    ModTargetResistance = 123,
    ModRangedAttackPower = 124,
    ModMeleeDamageTaken = 125,
    ModMeleeDamageTakenPct = 126,
    RangedAttackPowerAttackerBonus = 127,
    ModPossessPet = 128,
    ModSpeedAlways = 129,
    ModMountedSpeedAlways = 130,
    ModIncreaseEnergyPercent = 132,
    ModIncreaseHealthPercent = 133,
    ModManaRegenInterrupt = 134,
    ModHealingDone = 135,
    ModHealingDonePercent = 136,
    ModTotalStatPercentage = 137,
    ModMeleeHaste = 138,
    ForceReaction = 139,
    ModRangedHaste = 140,
    ModBaseResistancePct = 142,
    ModRecoveryRateBySpellLabel = 143,
    SafeFall = 144,
    ModIncreaseHealthPercent2 = 145,
    AllowTamePetType = 146,
    MechanicImmunityMask = 147,
    ModChargeRecoveryRate = 148,
    ReducePushback = 149,
    TrackStealthed = 151,
    ModDetectedRange = 152,
    ModStealthLevel = 154,
    ModWaterBreathing = 155,
    ModReputationGain = 156,
    PowerBurn = 162,
    ModAttackPowerPct = 166,
    ModRangedAttackPowerPct = 167,
    ModDamageDoneVersus = 168,
    PeriodicWeaponPercentDamage = 176,
    AoeCharm = 177,
    ModAttackerMeleeHitChance = 184,
    ModAttackerRangedHitChance = 185,
    ModAttackerSpellHitChance = 186,
    ModAttackerMeleeCritChance = 187,
    ModAttackerRangedCritChance = 188,
    ModRating = 189,
    ModMeleeRangedHaste = 192,
    MeleeSlow = 193,
    ModTargetAbsorbSchool = 194,
    ModCooldown = 196,
    ModAttackerSpellAndWeaponCritChance = 197,
    Fly = 201,
    HasteSpells = 216,
    AddPctModifierBySpellLabel = 218,
    AddFlatModifierBySpellLabel = 219,
    PeriodicDummy = 226,
    PeriodicTriggerSpellWithValue = 227,
    DetectStealth = 228,
    ProcTriggerSpellWithValue = 231,
    MechanicDurationMod = 232,
    ControlVehicle = 236,
    ModDisarmOffhand = 254,
    ModMechanicDamageTakenPercent = 255,
    Phase = 261,
    ModImmuneAuraApplySchool = 267,
    ModSpellDamageFromCaster = 271,
    ModDisarmRanged = 278,
    ModCritPct = 290,
    SetVehicleId = 296,
    SchoolHealAbsorb = 301,
    ModSpeedSlowAll = 302,
    PreventResurrection = 314,
    UseNormalMovementSpeed = 442,
    MountRestrictions = 452,
    ModChargeCooldown = 453,
    ModRoot2 = 455,
}

impl AuraType {
    /// Converts a raw table value, returning `None` for values the engine does
    /// not know about.
    pub fn from_raw(raw: u32) -> Option<Self> {
        Self::from_repr(raw)
    }

    /// Auras that let their holder stay hidden or untargetable.
    pub const fn is_concealment(self) -> bool {
        matches!(self, Self::ModStealth | Self::ModUnattackable)
    }
}

/// Operation changed by spell-modifier auras (`AddFlatModifier`,
/// `AddPctModifier`), stored in the effect's misc value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::FromRepr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum SpellModOp {
    HealingAndDamage = 0,
    Duration = 1,
    Hate = 2,
    PointsIndex0 = 3,
    ProcCharges = 4,
    Range = 5,
    Radius = 6,
    CritChance = 7,
    Points = 8,
    ResistPushback = 9,
    ChangeCastTime = 10,
    Cooldown = 11,
    PointsIndex1 = 12,
    TargetResistance = 13,
    PowerCost0 = 14,
    CritDamageAndHealing = 15,
    HitChance = 16,
    ChainTargets = 17,
    ProcChance = 18,
    Period = 19,
    ChainAmplitude = 20,
    StartCooldown = 21,
    PeriodicHealingAndDamage = 22,
    PointsIndex2 = 23,
    BonusCoefficient = 24,
    TriggerDamage = 25,
    ProcFrequency = 26,
    Amplitude = 27,
    DispelResistance = 28,
    CrowdDamage = 29,
    PowerCostOnMiss = 30,
    Doses = 31,
    PointsIndex3 = 32,
    PointsIndex4 = 33,
    PowerCost1 = 34,
    ChainJumpDistance = 35,
    AreaTriggerMaxSummons = 36,
    MaxAuraStacks = 37,
    ProcCooldown = 38,
    PowerCost2 = 39,
}

impl SpellModOp {
    pub fn from_raw(raw: i32) -> Option<Self> {
        u8::try_from(raw).ok().and_then(Self::from_repr)
    }
}
