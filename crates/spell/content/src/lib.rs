//! Data-driven spell content and loaders.
//!
//! This crate reads the files `spell-core` is fed from:
//! - Raw spell tables (RON)
//! - Rank chain links (RON)
//! - Pinned positivity verdicts (RON)
//! - World lookup tables backing the cast-time oracle (RON)
//! - Engine configuration (TOML)
//!
//! [`ContentFactory`] ties them together and builds a [`spell_core::SpellCatalog`].

pub mod loaders;

pub use loaders::{
    ChainLoader, ConfigLoader, ContentFactory, LoadResult, OverridesLoader, TablesLoader,
    WorldLoader,
};
