use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::store::json::JsonStore;

#[derive(Args)]
pub struct InspectArgs {
    /// Store file to inspect
    #[arg(long, value_name = "FILE")]
    pub store: PathBuf,

    /// Only show this coordinate system, listing its regions
    #[arg(long, value_name = "NAME")]
    pub coord_system: Option<String>,
}

#[derive(Serialize)]
struct CoordSystemSummary {
    name: String,
    version: Option<String>,
    rank: u32,
    default: bool,
    sequence_level: bool,
    regions: usize,
}

#[derive(Serialize)]
struct RegionSummary {
    name: String,
    start: u64,
    end: u64,
    length: u64,
    strand: i8,
    has_sequence: bool,
}

/// Execute inspect subcommand
///
/// # Errors
///
/// Returns an error if the store cannot be read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: InspectArgs, format: OutputFormat) -> anyhow::Result<()> {
    let store = JsonStore::load_from_file(&args.store)
        .with_context(|| format!("failed to load store {}", args.store.display()))?;

    match &args.coord_system {
        Some(name) => show_regions(&store, name, format),
        None => show_coord_systems(&store, format),
    }
}

fn show_coord_systems(store: &JsonStore, format: OutputFormat) -> anyhow::Result<()> {
    let summaries: Vec<CoordSystemSummary> = store
        .coord_systems()
        .iter()
        .map(|cs| CoordSystemSummary {
            name: cs.name.clone(),
            version: cs.version.clone(),
            rank: cs.rank,
            default: cs.default,
            sequence_level: cs.sequence_level,
            regions: store.region_count(cs),
        })
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summaries)?),
        OutputFormat::Text => {
            println!("{:<20} {:<12} {:>4} {:>8} {:>10} {:>8}", "NAME", "VERSION", "RANK", "DEFAULT", "SEQ-LEVEL", "REGIONS");
            for s in &summaries {
                println!(
                    "{:<20} {:<12} {:>4} {:>8} {:>10} {:>8}",
                    s.name,
                    s.version.as_deref().unwrap_or("-"),
                    s.rank,
                    s.default,
                    s.sequence_level,
                    s.regions
                );
            }
            if !store.hits().is_empty() {
                println!("\n{} stored search hits", store.hits().len());
            }
        }
    }
    Ok(())
}

fn show_regions(store: &JsonStore, coord_system: &str, format: OutputFormat) -> anyhow::Result<()> {
    let summaries: Vec<RegionSummary> = store
        .regions()
        .iter()
        .filter(|r| r.region.coord_system.name == coord_system)
        .map(|r| RegionSummary {
            name: r.region.name.clone(),
            start: r.region.start,
            end: r.region.end,
            length: r.region.length,
            strand: r.region.strand,
            has_sequence: r.sequence.is_some(),
        })
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summaries)?),
        OutputFormat::Text => {
            println!("{:<30} {:>10} {:>10} {:>10} {:>6} {:>8}", "NAME", "START", "END", "LENGTH", "STRAND", "SEQ");
            for s in &summaries {
                println!(
                    "{:<30} {:>10} {:>10} {:>10} {:>6} {:>8}",
                    s.name, s.start, s.end, s.length, s.strand, s.has_sequence
                );
            }
        }
    }
    Ok(())
}
