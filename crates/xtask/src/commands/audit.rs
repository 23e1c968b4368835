//! Build the whole catalog and report what the derivations produced
//!
//! Useful after editing table files: every spell goes through the same
//! passes the engine runs at startup, and the report shows how the data
//! was classified.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use serde::Serialize;
use spell_core::{DiminishingGroup, SpellCatalog, SpellId};

use crate::utils::load_catalog;

/// Build the whole catalog and report what the derivations produced
#[derive(Parser)]
pub struct Audit {
    /// Data directory (defaults to the sample data shipped with spell-content)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// List the spells of one diminishing group (e.g. Stun, Root)
    #[arg(short, long, value_name = "GROUP")]
    group: Option<DiminishingGroup>,

    /// Emit the report as JSON
    #[arg(long)]
    json: bool,
}

/// Counts gathered over every `(spell, difficulty)` record.
#[derive(Debug, Default, Serialize)]
struct AuditReport {
    records: usize,
    positive: usize,
    negative: usize,
    /// Spells with both helpful and harmful effect slots.
    mixed: Vec<SpellId>,
    without_effects: usize,
    granting_immunity: Vec<SpellId>,
    ranked: usize,
    diminishing: BTreeMap<DiminishingGroup, usize>,
}

impl AuditReport {
    fn collect(catalog: &SpellCatalog) -> Self {
        let mut report = Self::default();

        for spell in catalog.iter() {
            report.records += 1;

            let active: Vec<_> = spell.effects().iter().filter(|e| e.is_effect()).collect();
            if active.is_empty() {
                report.without_effects += 1;
            }

            if spell.is_positive() {
                report.positive += 1;
            } else {
                report.negative += 1;
                if active.iter().any(|e| spell.is_positive_effect(e.effect_index)) {
                    report.mixed.push(spell.id);
                }
            }

            if active.iter().any(|e| e.immunity.is_some()) {
                report.granting_immunity.push(spell.id);
            }
            if spell.chain_node(catalog.chains()).is_some() {
                report.ranked += 1;
            }

            let group = spell.diminish().group;
            if group != DiminishingGroup::None {
                *report.diminishing.entry(group).or_default() += 1;
            }
        }

        report.mixed.dedup();
        report.granting_immunity.dedup();
        report
    }
}

impl Audit {
    pub fn execute(self) -> Result<()> {
        let catalog = load_catalog(self.data_dir)?;
        let report = AuditReport::collect(&catalog);

        if self.json {
            let json = serde_json::to_string_pretty(&report)
                .context("Failed to serialize audit report to JSON")?;
            println!("{}", json);
        } else {
            print_report(&catalog, &report);
        }

        if let Some(group) = self.group {
            print_group(&catalog, group);
        }

        Ok(())
    }
}

fn print_report(catalog: &SpellCatalog, report: &AuditReport) {
    println!(
        "{} {} ({} records)",
        style("Catalog:").bold().cyan(),
        catalog.version(),
        report.records
    );
    println!();

    println!("{}", style("Positivity:").bold().yellow());
    println!("  Positive: {}", report.positive);
    println!("  Negative: {}", report.negative);
    println!("  Mixed: {}", join_ids(&report.mixed));
    println!("  Without Effects: {}", report.without_effects);
    println!();

    println!("{}", style("Immunity:").bold().yellow());
    println!("  Granting: {}", join_ids(&report.granting_immunity));
    println!();

    println!("{}", style("Rank Chains:").bold().yellow());
    println!("  Ranked Records: {}", report.ranked);
    println!();

    println!("{}", style("Diminishing Groups:").bold().yellow());
    if report.diminishing.is_empty() {
        println!("  (none)");
    }
    for (group, count) in &report.diminishing {
        println!("  {:?}: {}", group, count);
    }
}

fn print_group(catalog: &SpellCatalog, group: DiminishingGroup) {
    println!();
    println!("{} {:?}", style("Group:").bold().cyan(), group);
    for spell in catalog.iter().filter(|s| s.diminish().group == group) {
        println!("  {} {} (difficulty {})", spell.id, spell.name, spell.difficulty);
    }
}

fn join_ids(ids: &[SpellId]) -> String {
    if ids.is_empty() {
        return "-".to_string();
    }
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
