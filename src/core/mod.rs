//! Core data types for coordinate-system and sequence-region loading.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`CoordSystem`]: A named, ranked, versioned coordinate system
//! - [`SeqRegion`]: A sequence region (slice) within a coordinate system
//! - [`NameMap`]: Accession-to-display-name lookup table
//! - [`NameResolver`]: Raw id to canonical region name resolution
//!
//! ## Region construction
//!
//! Both loaders build whole-sequence spans: start is always 1, end equals the
//! sequence length (FASTA) or the maximum tiling end (AGP), and the strand is
//! forward. The store rejects anything that violates end >= start >= 1.
//!
//! [`CoordSystem`]: coord::CoordSystem
//! [`SeqRegion`]: region::SeqRegion
//! [`NameMap`]: name_map::NameMap
//! [`NameResolver`]: resolver::NameResolver

pub mod coord;
pub mod name_map;
pub mod region;
pub mod resolver;
