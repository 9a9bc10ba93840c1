//! # region-loader
//!
//! A library for loading coordinate systems and sequence regions from FASTA
//! and AGP files into a genome annotation store.
//!
//! Genome annotation needs reference coordinate metadata before anything can
//! be placed on it: which coordinate systems exist (chromosome, scaffold,
//! contig, clone), how they rank in the assembly hierarchy, and what named
//! regions each one contains. `region-loader` builds that metadata from the
//! two files assembly providers actually ship — FASTA sequence files and AGP
//! golden-path tiling files — with correct start/end/length/strand
//! semantics, name deduplication, and base-composition validation.
//!
//! ## Example
//!
//! ```rust,no_run
//! use region_loader::core::resolver::NameResolver;
//! use region_loader::loader;
//! use region_loader::store::json::JsonStore;
//!
//! let mut store = JsonStore::new();
//!
//! // Find or create the coordinate system the regions belong to
//! let cs = loader::coord::resolve_or_create(
//!     &mut store, "contig", None, 2, false, true,
//! ).unwrap();
//!
//! // One region per FASTA record, with raw sequence
//! let mut reader = region_loader::parsing::fasta::open_fasta(
//!     std::path::Path::new("contigs.fa"),
//! ).unwrap();
//! let resolver = NameResolver::new(None, None);
//! let ambiguous =
//!     loader::fasta::load_fasta(&mut reader, &cs, true, &resolver, &mut store).unwrap();
//!
//! if ambiguous > 0 {
//!     eprintln!("{ambiguous} sequences contained ambiguous bases");
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Coordinate systems, regions, name maps, and name resolution
//! - [`loader`]: The FASTA and AGP loaders
//! - [`parsing`]: FASTA and AGP file parsing
//! - [`store`]: Store traits and the JSON file-backed store
//! - [`search`]: Similarity-search jobs and per-database parameters
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod loader;
pub mod parsing;
pub mod search;
pub mod store;

// Re-export commonly used types for convenience
pub use core::coord::CoordSystem;
pub use core::name_map::NameMap;
pub use core::region::SeqRegion;
pub use core::resolver::NameResolver;
pub use store::json::JsonStore;
pub use store::{CoordSystemStore, RegionStore};
