//! Parsers for the loader's input files.
//!
//! This module provides:
//!
//! - **FASTA files**: Record access via noodles, with transparent
//!   gzip/bgzip decompression
//! - **AGP tiling files**: Per-line parsing of golden-path rows
//!
//! The accession/name map file format is handled by
//! [`crate::core::name_map::NameMap`], which owns both the type and its
//! parser.

pub mod agp;
pub mod fasta;
