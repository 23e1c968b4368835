use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::info;

use super::SpellCatalog;

/// Monotonic catalog generation, bumped on every [`CatalogStore::replace`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogVersion(pub u64);

impl CatalogVersion {
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for CatalogVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Shared holder of the current catalog.
///
/// # Thread Safety
///
/// Readers take a [`snapshot`](Self::snapshot) and keep it for as long as
/// they need a consistent view; a concurrent [`replace`](Self::replace) only
/// affects later snapshots.
#[derive(Debug)]
pub struct CatalogStore {
    current: RwLock<Arc<SpellCatalog>>,
}

impl CatalogStore {
    /// Publishes `catalog` as version 1.
    pub fn new(mut catalog: SpellCatalog) -> Self {
        catalog.set_version(CatalogVersion::default().next());
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    pub fn snapshot(&self) -> Arc<SpellCatalog> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    pub fn version(&self) -> CatalogVersion {
        self.snapshot().version()
    }

    /// Swaps in `catalog` and returns the version it was published under.
    pub fn replace(&self, mut catalog: SpellCatalog) -> CatalogVersion {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let version = guard.version().next();
        catalog.set_version(version);
        *guard = Arc::new(catalog);
        info!(%version, spells = guard.len(), "spell catalog replaced");
        version
    }
}
