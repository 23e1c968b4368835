//! Spell effect type tags.

/// What a single effect slot does when it hits.
///
/// Values match the raw table encoding; unknown values are rejected by
/// [`SpellEffectName::from_raw`].
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum SpellEffectName {
    #[default]
    None = 0,
    Instakill = 1,
    SchoolDamage = 2,
    Dummy = 3,
    TeleportUnits = 5,
    ApplyAura = 6,
    EnvironmentalDamage = 7,
    PowerDrain = 8,
    HealthLeech = 9,
    Heal = 10,
    Bind = 11,
    Portal = 12,
    QuestComplete = 16,
    WeaponDamageNoSchool = 17,
    Resurrect = 18,
    AddExtraAttacks = 19,
    Dodge = 20,
    Evade = 21,
    Parry = 22,
    Block = 23,
    CreateItem = 24,
    Weapon = 25,
    Defense = 26,
    PersistentAreaAura = 27,
    Summon = 28,
    Leap = 29,
    Energize = 30,
    WeaponPercentDamage = 31,
    TriggerMissile = 32,
    OpenLock = 33,
    ApplyAreaAuraParty = 35,
    LearnSpell = 36,
    Dispel = 38,
    Language = 39,
    DualWield = 40,
    Jump = 41,
    JumpDest = 42,
    TeleportUnitsFaceCaster = 43,
    SkillStep = 44,
    Stealth = 48,
    Detect = 49,
    TransDoor = 50,
    EnchantItem = 53,
    EnchantItemTemporary = 54,
    TameCreature = 55,
    SummonPet = 56,
    LearnPetSpell = 57,
    WeaponDamage = 58,
    CreateRandomItem = 59,
    Proficiency = 60,
    SendEvent = 61,
    PowerBurn = 62,
    Threat = 63,
    TriggerSpell = 64,
    ApplyAreaAuraRaid = 65,
    RechargeItem = 66,
    HealMaxHealth = 67,
    InterruptCast = 68,
    Distract = 69,
    Pickpocket = 71,
    AddFarsight = 72,
    HealMechanical = 75,
    SummonObjectWild = 76,
    ScriptEffect = 77,
    Attack = 78,
    Sanctuary = 79,
    BindSight = 82,
    Duel = 83,
    Stuck = 84,
    SummonPlayer = 85,
    ActivateObject = 86,
    GameObjectDamage = 87,
    GameObjectRepair = 88,
    KillCredit = 90,
    ThreatAll = 91,
    EnchantHeldItem = 92,
    SelfResurrect = 94,
    Skinning = 95,
    Charge = 96,
    KnockBack = 98,
    Disenchant = 99,
    Inebriate = 100,
    FeedPet = 101,
    DismissPet = 102,
    Reputation = 103,
    DispelMechanic = 108,
    ResurrectPet = 109,
    DestroyAllTotems = 110,
    DurabilityDamage = 111,
    AttackMe = 114,
    DurabilityDamagePct = 115,
    SkinPlayerCorpse = 116,
    SpiritHeal = 117,
    Skill = 118,
    ApplyAreaAuraPet = 119,
    TeleportGraveyard = 120,
    NormalizedWeaponDmg = 121,
    SendTaxi = 123,
    PullTowards = 124,
    ModifyThreatPercent = 125,
    StealBeneficialBuff = 126,
    Prospecting = 127,
    ApplyAreaAuraFriend = 128,
    ApplyAreaAuraEnemy = 129,
    RedirectThreat = 130,
    PlaySound = 131,
    PlayMusic = 132,
    KillCredit2 = 134,
    CallPet = 135,
    HealPct = 136,
    EnergizePct = 137,
    LeapBack = 138,
    ClearQuest = 139,
    ForceCast = 140,
    ForceCastWithValue = 141,
    TriggerSpellWithValue = 142,
    ApplyAreaAuraOwner = 143,
    KnockBackDest = 144,
    PullTowardsDest = 145,
    QuestFail = 147,
    TriggerMissileSpellWithValue = 148,
    ChargeDest = 149,
    QuestStart = 150,
    TriggerSpell2 = 151,
    CreateTamedPet = 153,
    DiscoverTaxi = 154,
    TitanGrip = 155,
    CreateLoot = 157,
    Milling = 158,
    ForceCast2 = 160,
    ApplyAuraOnPet = 174,
    ApplyAreaAuraSummons = 202,
    CreateConversation = 237,
}

impl SpellEffectName {
    /// Converts a raw table value, returning `None` for values the engine does
    /// not know about.
    pub fn from_raw(raw: u32) -> Option<Self> {
        Self::from_repr(raw)
    }

    /// Effects that apply an aura to their targets.
    pub const fn is_aura_application(self) -> bool {
        matches!(
            self,
            Self::ApplyAura
                | Self::ApplyAuraOnPet
                | Self::PersistentAreaAura
                | Self::ApplyAreaAuraParty
                | Self::ApplyAreaAuraRaid
                | Self::ApplyAreaAuraPet
                | Self::ApplyAreaAuraFriend
                | Self::ApplyAreaAuraEnemy
                | Self::ApplyAreaAuraOwner
                | Self::ApplyAreaAuraSummons
        )
    }

    /// Aura-application effects that hit everyone in an area around the caster.
    pub const fn is_area_aura_application(self) -> bool {
        matches!(
            self,
            Self::ApplyAreaAuraParty
                | Self::ApplyAreaAuraRaid
                | Self::ApplyAreaAuraPet
                | Self::ApplyAreaAuraFriend
                | Self::ApplyAreaAuraEnemy
                | Self::ApplyAreaAuraOwner
                | Self::ApplyAreaAuraSummons
        )
    }
}
