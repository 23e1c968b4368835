/// Engine capacities and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpellConfig {
    /// Duration cap applied to diminished effects that have no specific override.
    pub default_diminish_duration_ms: i32,
    /// Upper bound on how many trigger edges the positivity walk follows from one slot.
    pub max_trigger_depth: usize,
}

impl SpellConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_SPELL_EFFECTS: usize = 32;
    pub const MAX_POWERS_PER_SPELL: usize = 4;
    pub const MAX_REAGENTS: usize = 8;
    pub const MAX_REAGENT_CURRENCIES: usize = 4;
    pub const MAX_TOTEMS: usize = 2;
    pub const MAX_SPELL_LABELS: usize = 16;
    pub const MAX_SHAPESHIFT_FORMS: usize = 64;
    pub const MAX_EMPOWER_STAGES: usize = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_DIMINISH_DURATION_MS: i32 = 8000;
    pub const DEFAULT_MAX_TRIGGER_DEPTH: usize = 64;

    pub fn new() -> Self {
        Self {
            default_diminish_duration_ms: Self::DEFAULT_DIMINISH_DURATION_MS,
            max_trigger_depth: Self::DEFAULT_MAX_TRIGGER_DEPTH,
        }
    }

    #[must_use]
    pub fn with_default_diminish_duration(mut self, duration_ms: i32) -> Self {
        self.default_diminish_duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn with_max_trigger_depth(mut self, depth: usize) -> Self {
        self.max_trigger_depth = depth;
        self
    }
}

impl Default for SpellConfig {
    fn default() -> Self {
        Self::new()
    }
}
