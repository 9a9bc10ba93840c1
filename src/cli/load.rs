use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Args;
use regex::Regex;

use crate::core::name_map::NameMap;
use crate::core::resolver::NameResolver;
use crate::loader;
use crate::parsing;
use crate::store::json::JsonStore;

#[derive(Args)]
pub struct LoadArgs {
    /// FASTA file to load (plain or gzip/bgzip compressed)
    #[arg(long, value_name = "FILE", required_unless_present = "agp", conflicts_with = "agp")]
    pub fasta: Option<PathBuf>,

    /// AGP golden-path file to load
    #[arg(long, value_name = "FILE")]
    pub agp: Option<PathBuf>,

    /// Store file to load into (created if absent)
    #[arg(long, value_name = "FILE")]
    pub store: PathBuf,

    /// Coordinate system name (e.g. "chromosome", "contig")
    #[arg(long)]
    pub name: String,

    /// Coordinate system rank; 1 is the top of the assembly hierarchy
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub rank: u32,

    /// Coordinate system version (e.g. "GRCh38")
    #[arg(long)]
    pub version: Option<String>,

    /// Mark the coordinate system as the default for its name
    #[arg(long)]
    pub default: bool,

    /// Mark the coordinate system as sequence-level and store raw sequence
    /// (FASTA only)
    #[arg(long)]
    pub sequence_level: bool,

    /// Extract region names from FASTA ids with this pattern's first
    /// capture group; a non-matching id fails the run
    #[arg(long, value_name = "PATTERN")]
    pub name_regex: Option<String>,

    /// Accession-to-name map file (display name, then accession, per line)
    #[arg(long, value_name = "FILE")]
    pub name_file: Option<PathBuf>,
}

/// Execute load subcommand
///
/// # Errors
///
/// Returns an error on incompatible flags, unreadable input, name
/// resolution failure, or a store failure. A FASTA load that stored
/// sequences containing ambiguous bases fails after the whole file has been
/// processed and saved.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: LoadArgs, verbose: bool) -> anyhow::Result<()> {
    // Incompatible flags are rejected before any store is touched
    if args.agp.is_some() && args.sequence_level {
        bail!("--sequence-level cannot be combined with --agp: AGP regions never carry sequence");
    }

    let regex = args
        .name_regex
        .as_deref()
        .map(Regex::new)
        .transpose()
        .context("invalid --name-regex pattern")?;

    let name_map = args
        .name_file
        .as_deref()
        .map(NameMap::from_file)
        .transpose()
        .context("failed to read --name-file")?;

    if verbose {
        if let Some(map) = &name_map {
            eprintln!("Loaded name map with {} entries", map.len());
        }
    }

    let mut store = if args.store.exists() {
        JsonStore::load_from_file(&args.store)?
    } else {
        JsonStore::new()
    };

    let coord_system = loader::coord::resolve_or_create(
        &mut store,
        &args.name,
        args.version.as_deref(),
        args.rank,
        args.default,
        args.sequence_level,
    )?;

    let mut ambiguous = 0;
    if let Some(fasta_path) = &args.fasta {
        if !parsing::fasta::is_fasta_file(fasta_path) {
            eprintln!(
                "Warning: '{}' does not look like a FASTA file, loading anyway",
                fasta_path.display()
            );
        }

        let mut reader = parsing::fasta::open_fasta(fasta_path)
            .with_context(|| format!("failed to open {}", fasta_path.display()))?;
        let resolver = NameResolver::new(regex.as_ref(), name_map.as_ref());

        ambiguous = loader::fasta::load_fasta(
            &mut reader,
            &coord_system,
            args.sequence_level,
            &resolver,
            &mut store,
        )?;
    } else if let Some(agp_path) = &args.agp {
        let file = std::fs::File::open(agp_path)
            .with_context(|| format!("failed to open {}", agp_path.display()))?;

        loader::agp::load_agp(
            std::io::BufReader::new(file),
            &coord_system,
            name_map.as_ref(),
            &mut store,
        )?;
    }

    store.save_to_file(&args.store)?;

    if verbose {
        eprintln!(
            "Store now holds {} coordinate systems and {} regions",
            store.coord_systems().len(),
            store.regions().len()
        );
    }

    // Ambiguity is reported once, after the full file has been processed
    // and persisted
    if ambiguous > 0 {
        bail!("{ambiguous} sequences contained bases outside A/C/G/T/N");
    }

    Ok(())
}
