use crate::config::SpellConfig;
use crate::defines::{DiminishingGroup, DiminishingLevel, DiminishingReturnsType};

/// Diminishing-returns classification of a spell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiminishInfo {
    pub group: DiminishingGroup,
    pub return_type: DiminishingReturnsType,
    pub max_level: DiminishingLevel,
    pub duration_limit_ms: i32,
}

impl DiminishInfo {
    pub const fn new(
        group: DiminishingGroup,
        return_type: DiminishingReturnsType,
        max_level: DiminishingLevel,
        duration_limit_ms: i32,
    ) -> Self {
        Self {
            group,
            return_type,
            max_level,
            duration_limit_ms,
        }
    }

    /// Duration cap in milliseconds applied while the group is diminished.
    pub const fn duration_limit(&self) -> i32 {
        self.duration_limit_ms
    }
}

impl Default for DiminishInfo {
    fn default() -> Self {
        Self::new(
            DiminishingGroup::None,
            DiminishingReturnsType::None,
            DiminishingLevel::Immune,
            SpellConfig::DEFAULT_DIMINISH_DURATION_MS,
        )
    }
}
