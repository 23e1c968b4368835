//! Utility functions for xtask commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use spell_content::ContentFactory;
use spell_core::SpellCatalog;

/// Sample data shipped with `spell-content`.
pub fn default_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("spell")
        .join("content")
        .join("data")
}

/// Builds the catalog from `data_dir`, or from the sample data when absent.
pub fn load_catalog(data_dir: Option<PathBuf>) -> Result<SpellCatalog> {
    let data_dir = data_dir.unwrap_or_else(default_data_dir);
    if !data_dir.is_dir() {
        anyhow::bail!("Data directory not found: {}", data_dir.display());
    }
    ContentFactory::new(&data_dir)
        .build_catalog()
        .with_context(|| format!("Failed to build catalog from {}", data_dir.display()))
}

/// Renders a 64-bit mask as the list of set bit positions.
pub fn bit_list(mask: u64) -> String {
    if mask == 0 {
        return "-".to_string();
    }
    (0..64)
        .filter(|bit| mask & (1 << bit) != 0)
        .map(|bit| bit.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
