use std::collections::BTreeMap;
use std::io::BufRead;

use tracing::{info, warn};

use crate::core::coord::CoordSystem;
use crate::core::name_map::NameMap;
use crate::core::region::SeqRegion;
use crate::core::resolver::strip_chr_prefix;
use crate::loader::LoadError;
use crate::parsing::agp::{parse_line, AgpLine};
use crate::store::RegionStore;

/// Load AGP tiling rows as sequence regions, one region per distinct object
/// name.
///
/// First pass accumulates the maximum object end seen per resolved name —
/// the maximum, not the last value, because an object may appear in multiple
/// non-monotonic rows. Second pass stores one whole-sequence span per name.
/// AGP regions never carry raw sequence, so loading into a sequence-level
/// coordinate system is rejected before any row is read.
///
/// A leading "chr" prefix is stripped from each object name; the remainder
/// is looked up in the name map (when given) and otherwise used as-is.
/// Malformed rows are skipped with a warning and cannot disturb the extent
/// of well-formed rows.
///
/// Returns the number of regions stored.
///
/// # Errors
///
/// Returns `LoadError::SequenceLevelAgp` for a sequence-level target
/// system, `LoadError::Io` if the input cannot be read, or `LoadError::Store`
/// if persistence fails.
pub fn load_agp<R: BufRead, S: RegionStore>(
    reader: R,
    coord_system: &CoordSystem,
    name_map: Option<&NameMap>,
    store: &mut S,
) -> Result<usize, LoadError> {
    if coord_system.sequence_level {
        return Err(LoadError::SequenceLevelAgp(coord_system.to_string()));
    }

    let mut max_ends: BTreeMap<String, u64> = BTreeMap::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_line(&line) {
            AgpLine::Skip => {}
            AgpLine::Malformed(reason) => {
                warn!("AGP line {} skipped: {reason}", i + 1);
            }
            AgpLine::Row(row) => {
                let accession = strip_chr_prefix(&row.object_name);
                let name = name_map
                    .and_then(|map| map.get(accession))
                    .unwrap_or(accession)
                    .to_string();

                let end = max_ends.entry(name).or_insert(0);
                *end = (*end).max(row.object_end);
            }
        }
    }

    for (name, end) in &max_ends {
        store.store_region(SeqRegion::whole_span(name, *end, coord_system))?;
    }

    info!(
        "stored {} regions in coordinate system {coord_system}",
        max_ends.len()
    );
    Ok(max_ends.len())
}
