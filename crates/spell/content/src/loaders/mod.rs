//! Content loaders for reading spell data from files.

pub mod chains;
pub mod config;
pub mod factory;
pub mod overrides;
pub mod tables;
pub mod world;

pub use chains::ChainLoader;
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use overrides::OverridesLoader;
pub use tables::TablesLoader;
pub use world::WorldLoader;

use std::path::Path;

use anyhow::Context;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file {}", path.display()))
}

/// Parses a RON document, naming `what` and the file in the error.
pub(crate) fn parse_ron<T: serde::de::DeserializeOwned>(
    path: &Path,
    what: &str,
) -> LoadResult<T> {
    let content = read_file(path)?;
    ron::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse {} RON at {}: {}", what, path.display(), e))
}
