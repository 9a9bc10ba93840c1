use tracing::{debug, info, warn};

use crate::core::coord::CoordSystem;
use crate::store::{CoordSystemStore, StoreError};

/// Find the coordinate system with this (name, version), creating it with
/// the supplied attributes if it does not exist yet.
///
/// Idempotent: a second call with the same key returns the stored system and
/// creates nothing. When the stored system's attributes differ from the
/// request, the stored ones win and a warning is logged.
///
/// # Errors
///
/// Returns `StoreError` if the lookup fails or the new system cannot be
/// persisted (e.g. its rank is already taken).
pub fn resolve_or_create<S: CoordSystemStore>(
    store: &mut S,
    name: &str,
    version: Option<&str>,
    rank: u32,
    default: bool,
    sequence_level: bool,
) -> Result<CoordSystem, StoreError> {
    if let Some(existing) = store.find_by_name_and_version(name, version)? {
        debug!("reusing coordinate system {existing}");
        if existing.rank != rank || existing.default != default || existing.sequence_level != sequence_level
        {
            warn!(
                "coordinate system {existing} already stored with rank={}, default={}, \
                 sequence_level={}; stored attributes win",
                existing.rank, existing.default, existing.sequence_level
            );
        }
        return Ok(existing);
    }

    let coord_system = CoordSystem::new(name, version.map(String::from), rank)
        .with_default(default)
        .with_sequence_level(sequence_level);
    info!("creating coordinate system {coord_system} (rank {rank})");

    store.store_coord_system(coord_system)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::json::JsonStore;

    #[test]
    fn test_creates_when_absent() {
        let mut store = JsonStore::new();
        let cs = resolve_or_create(&mut store, "chromosome", Some("GRCh38"), 1, true, false)
            .unwrap();
        assert_eq!(cs.name, "chromosome");
        assert_eq!(cs.version.as_deref(), Some("GRCh38"));
        assert_eq!(cs.rank, 1);
        assert!(cs.default);
        assert!(!cs.sequence_level);
    }

    #[test]
    fn test_idempotent_across_calls() {
        let mut store = JsonStore::new();
        let first =
            resolve_or_create(&mut store, "chromosome", Some("GRCh38"), 1, true, false).unwrap();
        let second =
            resolve_or_create(&mut store, "chromosome", Some("GRCh38"), 1, true, false).unwrap();

        assert_eq!(first, second);
        assert_eq!(store.coord_systems().len(), 1);
    }

    #[test]
    fn test_reuse_keeps_stored_attributes() {
        let mut store = JsonStore::new();
        resolve_or_create(&mut store, "contig", None, 2, false, true).unwrap();

        // Conflicting attributes on reuse: stored ones win
        let reused = resolve_or_create(&mut store, "contig", None, 5, true, false).unwrap();
        assert_eq!(reused.rank, 2);
        assert!(reused.sequence_level);
        assert_eq!(store.coord_systems().len(), 1);
    }

    #[test]
    fn test_rank_conflict_propagates() {
        let mut store = JsonStore::new();
        resolve_or_create(&mut store, "chromosome", Some("GRCh38"), 1, true, false).unwrap();

        let err = resolve_or_create(&mut store, "scaffold", None, 1, false, false).unwrap_err();
        assert!(matches!(err, StoreError::RankConflict { rank: 1, .. }));
    }
}
