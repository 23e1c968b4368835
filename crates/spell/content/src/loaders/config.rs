//! Engine configuration loader.

use std::path::Path;

use spell_core::SpellConfig;
use tracing::debug;

use crate::loaders::{LoadResult, read_file};

/// Loader for engine configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys missing from the file keep their [`SpellConfig::default`] values.
    pub fn load(path: &Path) -> LoadResult<SpellConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML at {}: {}", path.display(), e))
    }

    /// Parses an in-memory TOML document.
    pub fn parse(content: &str) -> LoadResult<SpellConfig> {
        let config: SpellConfig = toml::from_str(content)?;
        if config.max_trigger_depth == 0 {
            anyhow::bail!("max_trigger_depth must be at least 1");
        }
        debug!(?config, "loaded spell config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_take_defaults() {
        let config = ConfigLoader::parse("max_trigger_depth = 12\n").unwrap();
        assert_eq!(config.max_trigger_depth, 12);
        assert_eq!(
            config.default_diminish_duration_ms,
            SpellConfig::DEFAULT_DIMINISH_DURATION_MS
        );
    }

    #[test]
    fn zero_depth_rejected() {
        assert!(ConfigLoader::parse("max_trigger_depth = 0").is_err());
    }
}
