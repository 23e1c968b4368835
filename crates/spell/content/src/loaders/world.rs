//! World lookup table loader.

use std::path::Path;

use spell_core::TablesSnapshot;
use tracing::debug;

use crate::loaders::{LoadResult, parse_ron};

/// Loader for the lookup tables consulted at cast time (maps, areas,
/// shapeshift forms, mounts, summon properties).
pub struct WorldLoader;

impl WorldLoader {
    pub fn load(path: &Path) -> LoadResult<TablesSnapshot> {
        let world: TablesSnapshot = parse_ron(path, "world tables")?;
        debug!(
            maps = world.maps.len(),
            areas = world.areas.len(),
            forms = world.shapeshift_forms.len(),
            "loaded world tables"
        );
        Ok(world)
    }
}
