//! Show the derived rule facts of one spell
//!
//! Builds the catalog from a data directory and prints what the derivation
//! passes decided for the requested `(spell, difficulty)`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use spell_core::{SpellCatalog, SpellId, SpellInfo};

use crate::utils::{bit_list, load_catalog};

/// Show the derived rule facts of one spell
#[derive(Parser)]
pub struct Inspect {
    /// Spell id to inspect
    #[arg(value_name = "SPELL")]
    spell: SpellId,

    /// Difficulty tier; tiers without own records fall back to the base record
    #[arg(short = 'D', long, default_value_t = 0)]
    difficulty: u32,

    /// Data directory (defaults to the sample data shipped with spell-content)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Derived facts only
    Summary,
    /// Full JSON output
    Json,
    /// Pretty-printed debug format
    Debug,
}

impl Inspect {
    pub fn execute(self) -> Result<()> {
        let catalog = load_catalog(self.data_dir)?;
        let spell = catalog.try_get(self.spell, self.difficulty)?;

        match self.format {
            OutputFormat::Summary => print_summary(&catalog, spell),
            OutputFormat::Json => print_json(spell)?,
            OutputFormat::Debug => println!("{:#?}", spell),
        }

        Ok(())
    }
}

fn print_summary(catalog: &SpellCatalog, spell: &SpellInfo) {
    println!(
        "{} {} ({}) difficulty {}",
        style("Spell:").bold().cyan(),
        spell.name,
        spell.id,
        spell.difficulty
    );
    println!();

    println!("{}", style("Classification:").bold().yellow());
    println!("  Positive: {}", spell.is_positive());
    println!("  School: {:?}", spell.school_mask);
    println!("  Aura State: {:?}", spell.aura_state());
    println!("  Specific: {:?}", spell.spell_specific());
    println!("  Explicit Targets: {:?}", spell.explicit_target_mask());
    println!(
        "  Duration: {} / {} ms",
        spell.get_duration(),
        spell.get_max_duration()
    );
    println!();

    let diminish = spell.diminish();
    println!("{}", style("Diminishing Returns:").bold().yellow());
    println!("  Group: {:?}", diminish.group);
    println!("  Return Type: {:?}", diminish.return_type);
    println!("  Max Level: {:?}", diminish.max_level);
    println!("  Duration Limit: {} ms", diminish.duration_limit_ms);
    println!();

    let chains = catalog.chains();
    if spell.chain_node(chains).is_some() {
        println!("{}", style("Rank Chain:").bold().yellow());
        println!("  First: {}", spell.get_first_rank_spell(chains));
        println!("  Last: {}", spell.get_last_rank_spell(chains));
        if let Some(next) = spell.get_next_rank_spell(chains) {
            println!("  Next: {}", next);
        }
        println!();
    }

    println!("{}", style("Effects:").bold().yellow());
    for effect in spell.effects().iter().filter(|e| e.is_effect()) {
        let verdict = if spell.is_positive_effect(effect.effect_index) {
            style("positive").green()
        } else {
            style("negative").red()
        };
        println!(
            "  [{}] {:?} {:?} -> {}",
            effect.effect_index, effect.effect, effect.apply_aura_name, verdict
        );
        if let Some(immunity) = &effect.immunity {
            println!("      schools: {:?}", immunity.school_immune_mask);
            println!("      mechanics: {}", bit_list(immunity.mechanic_immune_mask));
            if let Some(dispel) = immunity.dispel_immune {
                println!("      dispel: {:?}", dispel);
            }
            if !immunity.aura_type_immune.is_empty() {
                println!("      auras: {:?}", immunity.aura_type_immune);
            }
        }
    }
    println!();

    println!(
        "{} {}",
        style("Allowed Mechanics:").bold().yellow(),
        bit_list(spell.get_allowed_mechanic_mask())
    );
}

fn print_json(spell: &SpellInfo) -> Result<()> {
    let json = serde_json::to_string_pretty(spell).context("Failed to serialize spell to JSON")?;
    println!("{}", json);
    Ok(())
}
