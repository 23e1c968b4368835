//! Common error infrastructure for spell-core.
//!
//! Lookup and catalog failures are typed errors. Failed cast checks are not
//! errors at all; they are [`SpellCastResult`](crate::SpellCastResult) values.

use crate::info::SpellId;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the caller can retry with different input
/// - **Validation**: the request referenced data that does not exist
/// - **Internal**: the catalog is inconsistent and should be investigated
/// - **Fatal**: the catalog cannot be used
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all spell-core errors.
///
/// - All error enums implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Error codes are stable SCREAMING_SNAKE_CASE strings for logs and tooling
pub trait SpellError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    fn error_code(&self) -> &'static str;
}

/// Lookup failures against an assembled spell or catalog.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SpellDataError {
    #[error("spell {spell_id} has no effect slot {index} (populated slots: {count})")]
    EffectIndexOutOfRange {
        spell_id: SpellId,
        index: usize,
        count: usize,
    },

    #[error("spell {spell_id} not found")]
    UnknownSpell { spell_id: SpellId },

    #[error("spell {spell_id} has no data for difficulty {difficulty}")]
    UnknownDifficulty { spell_id: SpellId, difficulty: u32 },
}

impl SpellError for SpellDataError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EffectIndexOutOfRange { .. } => ErrorSeverity::Internal,
            Self::UnknownSpell { .. } | Self::UnknownDifficulty { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EffectIndexOutOfRange { .. } => "SPELL_EFFECT_INDEX_OUT_OF_RANGE",
            Self::UnknownSpell { .. } => "SPELL_UNKNOWN",
            Self::UnknownDifficulty { .. } => "SPELL_UNKNOWN_DIFFICULTY",
        }
    }
}

/// Failures raised while building a catalog.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("spell {spell_id} difficulty {difficulty} registered twice")]
    DuplicateSpell { spell_id: SpellId, difficulty: u32 },

    #[error("rank chain starting at spell {spell_id} loops back on itself")]
    RankChainCycle { spell_id: SpellId },

    #[error("rank chain references unknown spell {spell_id}")]
    RankChainUnknownSpell { spell_id: SpellId },
}

impl SpellError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::DuplicateSpell { .. } => ErrorSeverity::Validation,
            Self::RankChainCycle { .. } | Self::RankChainUnknownSpell { .. } => {
                ErrorSeverity::Internal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateSpell { .. } => "CATALOG_DUPLICATE_SPELL",
            Self::RankChainCycle { .. } => "CATALOG_RANK_CHAIN_CYCLE",
            Self::RankChainUnknownSpell { .. } => "CATALOG_RANK_CHAIN_UNKNOWN_SPELL",
        }
    }
}
