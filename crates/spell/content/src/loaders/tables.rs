//! Raw spell table loader.

use std::path::Path;

use spell_core::SpellTables;
use tracing::info;

use crate::loaders::{LoadResult, parse_ron};

/// Loader for the flat spell tables from RON files.
///
/// The file holds one [`SpellTables`] value; every table is optional and
/// defaults to empty.
///
/// ```ron
/// (
///     names: [(id: 133, name: "Fireball")],
///     effects: [(spell_id: 133, effect: 2, implicit_target: (6, 0))],
/// )
/// ```
pub struct TablesLoader;

impl TablesLoader {
    pub fn load(path: &Path) -> LoadResult<SpellTables> {
        let tables: SpellTables = parse_ron(path, "spell tables")?;
        info!(
            path = %path.display(),
            spells = tables.names.len(),
            effects = tables.effects.len(),
            powers = tables.powers.len(),
            "loaded spell tables"
        );
        Ok(tables)
    }
}
