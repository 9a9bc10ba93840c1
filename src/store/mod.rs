//! Persistence interfaces for coordinate systems and sequence regions.
//!
//! The loaders never talk to a database directly; they call through the
//! narrow traits defined here, injected as parameters. [`JsonStore`] is the
//! bundled file-backed implementation used by the CLI and tests.
//!
//! [`JsonStore`]: json::JsonStore

use thiserror::Error;

use crate::core::coord::CoordSystem;
use crate::core::region::SeqRegion;

pub mod json;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read store: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse store: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("rank {rank} is already held by coordinate system '{existing}'")]
    RankConflict { rank: u32, existing: String },

    #[error("coordinate system rank must be >= 1")]
    ZeroRank,

    #[error("region '{name}' already exists in coordinate system '{coord_system}'")]
    DuplicateRegion { name: String, coord_system: String },

    #[error("coordinate system '{0}' is not sequence-level; cannot attach sequence")]
    NotSequenceLevel(String),

    #[error("invalid region: {0}")]
    InvalidRegion(String),
}

/// Lookup and persistence of coordinate systems.
pub trait CoordSystemStore {
    /// Find a coordinate system by its (name, version) key.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be queried.
    fn find_by_name_and_version(
        &self,
        name: &str,
        version: Option<&str>,
    ) -> Result<Option<CoordSystem>, StoreError>;

    /// Persist a coordinate system, returning the stored value. Storing a
    /// key that already exists returns the existing system unchanged.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::RankConflict` if a different system already
    /// holds the requested rank, or `StoreError::ZeroRank` for rank 0.
    fn store_coord_system(&mut self, coord_system: CoordSystem) -> Result<CoordSystem, StoreError>;
}

/// Persistence of sequence regions, with or without raw sequence.
pub trait RegionStore {
    /// Persist a region without sequence.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateRegion` if the (coordinate system,
    /// name) pair already exists, or `StoreError::InvalidRegion` if the
    /// span invariants do not hold.
    fn store_region(&mut self, region: SeqRegion) -> Result<SeqRegion, StoreError>;

    /// Persist a region together with its raw sequence. Only regions of a
    /// sequence-level coordinate system are eligible.
    ///
    /// # Errors
    ///
    /// As [`RegionStore::store_region`], plus `StoreError::NotSequenceLevel`
    /// if the region's coordinate system cannot carry sequence.
    fn store_region_with_sequence(
        &mut self,
        region: SeqRegion,
        sequence: &[u8],
    ) -> Result<SeqRegion, StoreError>;
}
