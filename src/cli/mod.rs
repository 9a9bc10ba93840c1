//! Command-line interface for region-loader.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **load**: Load coordinate systems and sequence regions from a FASTA or
//!   AGP file into a store
//! - **search**: Run a similarity-search job for a stored region against a
//!   configured database
//! - **inspect**: List coordinate systems and regions in a store
//!
//! ## Usage
//!
//! ```text
//! # Load contigs with raw sequence
//! region-loader load --fasta contigs.fa --store regions.json \
//!     --name contig --rank 2 --sequence-level
//!
//! # Load an assembly tiling path
//! region-loader load --agp golden_path.agp --store regions.json \
//!     --name chromosome --version GRCh38 --rank 1 --default
//!
//! # Inspect what was loaded
//! region-loader inspect --store regions.json --format json
//! ```

use clap::{Parser, Subcommand};

pub mod inspect;
pub mod load;
pub mod search;

#[derive(Parser)]
#[command(name = "region-loader")]
#[command(version)]
#[command(about = "Load coordinate systems and sequence regions from FASTA/AGP files")]
#[command(
    long_about = "region-loader turns a FASTA file or an AGP golden-path file into named,\nranked, versioned coordinate systems and sequence regions in an annotation\nstore.\n\nFASTA records become one region each, optionally with raw sequence; AGP rows\nare folded into one region per object spanning its maximum tiling end."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load a FASTA or AGP file into a store
    Load(load::LoadArgs),

    /// Run a similarity search for a stored region
    Search(search::SearchArgs),

    /// List coordinate systems and regions in a store
    Inspect(inspect::InspectArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
