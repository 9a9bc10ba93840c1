use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::search::blast::TabularAligner;
use crate::search::config::SearchConfig;
use crate::search::job::{HitStore, Runnable, SearchJob};
use crate::store::json::JsonStore;

#[derive(Args)]
pub struct SearchArgs {
    /// Store file holding the query region's sequence
    #[arg(long, value_name = "FILE")]
    pub store: PathBuf,

    /// Name of the stored region to use as the query
    #[arg(long)]
    pub query: String,

    /// Target database name, passed to the search program
    #[arg(long)]
    pub database: String,

    /// Per-database search parameter file (JSON)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// External search program to run
    #[arg(long, value_name = "PROGRAM", default_value = "blastn")]
    pub program: PathBuf,
}

/// Execute search subcommand
///
/// # Errors
///
/// Returns an error if the store or config cannot be read, the query region
/// has no stored sequence, or the external program fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SearchArgs, verbose: bool) -> anyhow::Result<()> {
    let mut store = JsonStore::load_from_file(&args.store)
        .with_context(|| format!("failed to load store {}", args.store.display()))?;

    let config = match &args.config {
        Some(path) => SearchConfig::load_from_file(path)
            .with_context(|| format!("failed to load search config {}", path.display()))?,
        None => SearchConfig::default(),
    };

    if verbose {
        let params = config.params_for(&args.database);
        eprintln!(
            "Searching '{}' against '{}' (ungapped: {}, unmasked: {})",
            args.query, args.database, params.ungapped, params.unmasked
        );
    }

    // The job borrows the store as its sequence fetcher, so collect the
    // hits before persisting them back into the same store
    let hits = {
        let aligner = TabularAligner::new(&args.program);
        let mut job = SearchJob::new(&args.query, &args.database, &config, &store, aligner);
        job.run()
            .with_context(|| format!("search for '{}' failed", args.query))?;
        job.output().to_vec()
    };

    println!(
        "{} hits for '{}' against '{}'",
        hits.len(),
        args.query,
        args.database
    );

    for hit in hits {
        store.store_hit(hit)?;
    }
    store.save_to_file(&args.store)?;

    Ok(())
}
