use std::io::BufRead;

use noodles::fasta;
use tracing::{info, warn};

use crate::core::coord::CoordSystem;
use crate::core::region::SeqRegion;
use crate::core::resolver::NameResolver;
use crate::loader::LoadError;
use crate::store::RegionStore;

/// Load FASTA records as sequence regions, one region per record, in file
/// order.
///
/// Each record becomes a whole-sequence span (start 1, end = sequence
/// length, forward strand) named by the resolver. With `store_sequence` the
/// raw sequence is persisted alongside the region and scanned for bases
/// outside A/C/G/T/N; a record containing any such base is counted once and
/// logged, but still stored — the caller decides after the whole file
/// whether a nonzero count fails the run.
///
/// Returns the number of records flagged ambiguous.
///
/// # Errors
///
/// Returns `LoadError` on unreadable input, a name the resolver rejects, or
/// a store failure. These abort the load immediately.
pub fn load_fasta<R: BufRead, S: RegionStore>(
    reader: &mut fasta::io::Reader<R>,
    coord_system: &CoordSystem,
    store_sequence: bool,
    resolver: &NameResolver<'_>,
    store: &mut S,
) -> Result<usize, LoadError> {
    let mut ambiguous = 0;
    let mut stored = 0;

    for result in reader.records() {
        let record =
            result.map_err(|e| LoadError::Fasta(format!("failed to parse FASTA record: {e}")))?;

        let raw_id = String::from_utf8_lossy(record.name()).to_string();
        let name = resolver.resolve(&raw_id)?;

        let sequence = record.sequence();
        let region = SeqRegion::whole_span(&name, sequence.len() as u64, coord_system);

        if store_sequence {
            if has_ambiguous_base(sequence.as_ref()) {
                ambiguous += 1;
                warn!("sequence for region '{name}' contains bases outside A/C/G/T/N");
            }
            // Flagged, not rejected: the region and sequence are stored anyway
            store.store_region_with_sequence(region, sequence.as_ref())?;
        } else {
            store.store_region(region)?;
        }
        stored += 1;
    }

    info!("stored {stored} regions in coordinate system {coord_system}");
    Ok(ambiguous)
}

/// True if the sequence contains any base outside A/C/G/T/N,
/// case-insensitive.
fn has_ambiguous_base(sequence: &[u8]) -> bool {
    sequence
        .iter()
        .any(|b| !matches!(b.to_ascii_uppercase(), b'A' | b'C' | b'G' | b'T' | b'N'))
}
