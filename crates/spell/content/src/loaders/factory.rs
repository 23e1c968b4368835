//! Content factory for building a spell catalog from data files.

use std::path::{Path, PathBuf};

use anyhow::Context;
use spell_core::{
    CatalogStore, CatalogVersion, PositivityOverrides, SpellCatalog, SpellConfig, SpellId,
    SpellTables, TablesSnapshot,
};
use tracing::{debug, info};

use crate::loaders::{
    ChainLoader, ConfigLoader, LoadResult, OverridesLoader, TablesLoader, WorldLoader,
};

/// Content factory that loads all spell content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml      (optional)
/// ├── tables.ron
/// ├── chains.ron       (optional)
/// ├── overrides.ron    (optional)
/// └── world.ron        (optional)
/// ```
///
/// Optional files that are absent yield their empty or default value.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const TABLES_FILE: &'static str = "tables.ron";
    pub const CHAINS_FILE: &'static str = "chains.ron";
    pub const OVERRIDES_FILE: &'static str = "overrides.ron";
    pub const WORLD_FILE: &'static str = "world.ron";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load engine configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<SpellConfig> {
        self.optional(Self::CONFIG_FILE, ConfigLoader::load)
    }

    /// Load raw spell tables from `tables.ron`.
    pub fn load_tables(&self) -> LoadResult<SpellTables> {
        TablesLoader::load(&self.data_dir.join(Self::TABLES_FILE))
    }

    /// Load rank chain links from `chains.ron`.
    pub fn load_rank_links(&self) -> LoadResult<Vec<(SpellId, SpellId)>> {
        self.optional(Self::CHAINS_FILE, ChainLoader::load)
    }

    /// Load pinned positivity verdicts from `overrides.ron`.
    pub fn load_overrides(&self) -> LoadResult<PositivityOverrides> {
        self.optional(Self::OVERRIDES_FILE, OverridesLoader::load)
    }

    /// Load the cast-time lookup tables from `world.ron`.
    pub fn load_world(&self) -> LoadResult<TablesSnapshot> {
        self.optional(Self::WORLD_FILE, WorldLoader::load)
    }

    /// Loads every file and runs the catalog derivations.
    pub fn build_catalog(&self) -> LoadResult<SpellCatalog> {
        let config = self.load_config()?;
        let tables = self.load_tables()?;
        let links = self.load_rank_links()?;
        let overrides = self.load_overrides()?;

        let mut builder = links.into_iter().fold(
            SpellCatalog::builder(config).with_overrides(overrides),
            |builder, (spell, prev)| builder.with_rank_link(spell, prev),
        );
        builder
            .insert_tables(&tables)
            .context("Failed to insert spell tables")?;
        let catalog = builder.finish().context("Failed to finish spell catalog")?;

        info!(
            data_dir = %self.data_dir.display(),
            spells = catalog.len(),
            "built spell catalog"
        );
        Ok(catalog)
    }

    /// Rebuilds the catalog and publishes it into `store`.
    ///
    /// On failure the store keeps serving its current catalog.
    pub fn reload(&self, store: &CatalogStore) -> LoadResult<CatalogVersion> {
        let catalog = self.build_catalog()?;
        Ok(store.replace(catalog))
    }

    fn optional<T: Default>(
        &self,
        file: &str,
        load: impl FnOnce(&Path) -> LoadResult<T>,
    ) -> LoadResult<T> {
        let path = self.data_dir.join(file);
        if !path.exists() {
            debug!(path = %path.display(), "optional content file absent");
            return Ok(T::default());
        }
        load(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn absent_optional_files_yield_defaults() {
        let factory = ContentFactory::new("/nonexistent/spell-data");
        assert_eq!(factory.load_config().unwrap(), SpellConfig::default());
        assert!(factory.load_rank_links().unwrap().is_empty());
        assert!(factory.load_overrides().unwrap().is_empty());
        assert!(factory.load_tables().is_err());
    }
}
