use std::fs;
use std::path::{Path, PathBuf};

use spell_content::{ContentFactory, OverridesLoader, TablesLoader};
use spell_core::{
    CatalogStore, CatalogVersion, DiminishingGroup, Powers, SpellLookup, SpellTablesOracle,
    Verdict,
};
use tempfile::TempDir;

fn shipped_data() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

fn write(dir: &TempDir, name: &str, content: &str) {
    fs::write(dir.path().join(name), content).unwrap();
}

// ============================================================================
// Shipped sample data
// ============================================================================

#[test]
fn shipped_data_builds_a_catalog() {
    let factory = ContentFactory::new(shipped_data());
    let catalog = factory.build_catalog().unwrap();

    let fireball = catalog.get(133, 0).unwrap();
    assert!(!fireball.is_positive());
    assert!(catalog.get(139, 0).unwrap().is_positive());
    assert!(catalog.get(642, 0).unwrap().is_positive_effect(0));

    let stomp = catalog.get(20549, 0).unwrap();
    assert_eq!(stomp.diminish().group, DiminishingGroup::Stun);

    let rank_two = catalog.get(205, 0).unwrap();
    assert_eq!(rank_two.get_first_rank_spell(catalog.chains()), 116);
    assert!(catalog.lookup_exact(116, 0).is_some());
}

#[test]
fn shipped_world_tables_answer_oracle_queries() {
    let world = ContentFactory::new(shipped_data()).load_world().unwrap();

    assert_eq!(world.max_base_power(Powers::Mana), Some(100_000));
    assert!(world.map(533).unwrap().is_raid());
    assert!(world.map(489).unwrap().is_battleground());
    assert_eq!(world.mount_type_for_spell(458), Some(230));
}

// ============================================================================
// Temporary directories
// ============================================================================

#[test]
fn config_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    write(&dir, "tables.ron", "(names: [])");
    write(&dir, "config.toml", "max_trigger_depth = 3\n");

    let factory = ContentFactory::new(dir.path());
    let config = factory.load_config().unwrap();
    assert_eq!(config.max_trigger_depth, 3);

    let catalog = factory.build_catalog().unwrap();
    assert!(catalog.is_empty());
    assert_eq!(catalog.config().max_trigger_depth, 3);
}

#[test]
fn malformed_tables_report_the_file() {
    let dir = TempDir::new().unwrap();
    write(&dir, "tables.ron", "(names: [(id: \"oops\")])");

    let err = TablesLoader::load(&dir.path().join("tables.ron")).unwrap_err();
    assert!(err.to_string().contains("tables.ron"), "{err}");
}

#[test]
fn rank_link_to_unknown_spell_fails_the_build() {
    let dir = TempDir::new().unwrap();
    write(&dir, "tables.ron", "(names: [(id: 1, name: \"One\")])");
    write(&dir, "chains.ron", "(links: [(spell: 2, prev: 1)])");

    assert!(ContentFactory::new(dir.path()).build_catalog().is_err());
}

#[test]
fn later_pins_replace_earlier_ones() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "overrides.ron",
        "[(spell: 9, effect: 1, verdict: Positive), (spell: 9, effect: 1, verdict: Negative)]",
    );

    let overrides = OverridesLoader::load(&dir.path().join("overrides.ron")).unwrap();
    assert_eq!(overrides.pinned(9, 1), Some(Verdict::Negative));
    assert_eq!(overrides.len(), 1);
}

#[test]
fn reload_publishes_a_new_version() {
    let dir = TempDir::new().unwrap();
    write(&dir, "tables.ron", "(names: [(id: 1, name: \"One\")])");
    let factory = ContentFactory::new(dir.path());
    let store = CatalogStore::new(factory.build_catalog().unwrap());

    write(
        &dir,
        "tables.ron",
        "(names: [(id: 1, name: \"One\"), (id: 2, name: \"Two\")])",
    );
    assert_eq!(factory.reload(&store).unwrap(), CatalogVersion(2));
    assert_eq!(store.snapshot().len(), 2);

    write(&dir, "tables.ron", "not ron");
    assert!(factory.reload(&store).is_err());
    assert_eq!(store.version(), CatalogVersion(2));
}
