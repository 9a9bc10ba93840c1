//! Loaders that turn FASTA or AGP input into stored sequence regions.
//!
//! One loader runs per invocation:
//!
//! - [`fasta::load_fasta`] stores one region per FASTA record, optionally
//!   with raw sequence, and counts records containing ambiguous bases
//! - [`agp::load_agp`] stores one region per distinct object name, spanning
//!   the maximum tiling end seen for that name
//!
//! Both resolve names through [`crate::core::resolver::NameResolver`] and
//! persist through the store traits; neither retries a failed store call.

use thiserror::Error;

use crate::core::resolver::ResolveError;
use crate::store::StoreError;

pub mod agp;
pub mod coord;
pub mod fasta;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("FASTA parse error: {0}")]
    Fasta(String),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("AGP input cannot be loaded into sequence-level coordinate system '{0}'")]
    SequenceLevelAgp(String),
}
