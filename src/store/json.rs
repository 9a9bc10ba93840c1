use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::core::coord::CoordSystem;
use crate::core::region::SeqRegion;
use crate::search::job::{Hit, HitStore, SearchError, SequenceFetcher};
use crate::store::{CoordSystemStore, RegionStore, StoreError};

/// Store format version for compatibility checking
pub const STORE_VERSION: &str = "1.0.0";

/// Serializable store document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreData {
    pub version: String,
    pub created_at: String,
    pub coord_systems: Vec<CoordSystem>,
    pub regions: Vec<StoredRegion>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hits: Vec<Hit>,
}

/// A persisted region, optionally carrying raw sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredRegion {
    #[serde(flatten)]
    pub region: SeqRegion,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<String>,
}

/// File-backed store over a single JSON document.
///
/// Everything lives in memory between [`JsonStore::load_from_file`] and
/// [`JsonStore::save_to_file`]; the loaders mutate it through the store
/// traits and the CLI saves once at the end of a run.
#[derive(Debug, Default)]
pub struct JsonStore {
    coord_systems: Vec<CoordSystem>,
    regions: Vec<StoredRegion>,
    hits: Vec<Hit>,

    /// Index: (name, version) -> index in coord_systems
    key_to_index: HashMap<(String, Option<String>), usize>,

    /// Index: rank -> index in coord_systems
    rank_to_index: HashMap<u32, usize>,

    /// Index: (cs name, cs version, region name) -> index in regions
    region_index: HashMap<(String, Option<String>, String), usize>,
}

impl JsonStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a store from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file cannot be read or
    /// `StoreError::Parse` if the document is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, StoreError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a store from a JSON string
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Parse` if the document is invalid.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let data: StoreData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != STORE_VERSION {
            eprintln!(
                "Warning: Store version mismatch (expected {}, found {})",
                STORE_VERSION, data.version
            );
        }

        let mut store = Self::new();
        for coord_system in data.coord_systems {
            store.index_coord_system(coord_system);
        }
        for region in data.regions {
            store.index_region(region);
        }
        store.hits = data.hits;

        Ok(store)
    }

    /// Export the store to JSON
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Parse` if serialization fails.
    pub fn to_json(&self) -> Result<String, StoreError> {
        let data = StoreData {
            version: STORE_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            coord_systems: self.coord_systems.clone(),
            regions: self.regions.clone(),
            hits: self.hits.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Write the store to a JSON file
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file cannot be written.
    pub fn save_to_file(&self, path: &Path) -> Result<(), StoreError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    fn index_coord_system(&mut self, coord_system: CoordSystem) {
        let index = self.coord_systems.len();
        self.key_to_index.insert(coord_system.key(), index);
        self.rank_to_index.insert(coord_system.rank, index);
        self.coord_systems.push(coord_system);
    }

    fn index_region(&mut self, region: StoredRegion) {
        let index = self.regions.len();
        self.region_index.insert(region_key(&region.region), index);
        self.regions.push(region);
    }

    /// All stored coordinate systems
    #[must_use]
    pub fn coord_systems(&self) -> &[CoordSystem] {
        &self.coord_systems
    }

    /// All stored regions
    #[must_use]
    pub fn regions(&self) -> &[StoredRegion] {
        &self.regions
    }

    /// All stored hits
    #[must_use]
    pub fn hits(&self) -> &[Hit] {
        &self.hits
    }

    /// Look up one region by coordinate system and name
    #[must_use]
    pub fn find_region(&self, coord_system: &CoordSystem, name: &str) -> Option<&StoredRegion> {
        let key = (
            coord_system.name.clone(),
            coord_system.version.clone(),
            name.to_string(),
        );
        self.region_index.get(&key).map(|&idx| &self.regions[idx])
    }

    /// Number of regions belonging to a coordinate system
    #[must_use]
    pub fn region_count(&self, coord_system: &CoordSystem) -> usize {
        self.regions
            .iter()
            .filter(|r| r.region.coord_system.key() == coord_system.key())
            .count()
    }

    fn check_region(&self, region: &SeqRegion) -> Result<(), StoreError> {
        region.validate().map_err(StoreError::InvalidRegion)?;

        if self.region_index.contains_key(&region_key(region)) {
            return Err(StoreError::DuplicateRegion {
                name: region.name.clone(),
                coord_system: region.coord_system.to_string(),
            });
        }
        Ok(())
    }
}

fn region_key(region: &SeqRegion) -> (String, Option<String>, String) {
    (
        region.coord_system.name.clone(),
        region.coord_system.version.clone(),
        region.name.clone(),
    )
}

impl CoordSystemStore for JsonStore {
    fn find_by_name_and_version(
        &self,
        name: &str,
        version: Option<&str>,
    ) -> Result<Option<CoordSystem>, StoreError> {
        let key = (name.to_string(), version.map(String::from));
        Ok(self
            .key_to_index
            .get(&key)
            .map(|&idx| self.coord_systems[idx].clone()))
    }

    fn store_coord_system(&mut self, coord_system: CoordSystem) -> Result<CoordSystem, StoreError> {
        if coord_system.rank == 0 {
            return Err(StoreError::ZeroRank);
        }

        // Re-storing an existing key returns the stored system unchanged
        if let Some(&idx) = self.key_to_index.get(&coord_system.key()) {
            return Ok(self.coord_systems[idx].clone());
        }

        if let Some(&idx) = self.rank_to_index.get(&coord_system.rank) {
            return Err(StoreError::RankConflict {
                rank: coord_system.rank,
                existing: self.coord_systems[idx].to_string(),
            });
        }

        self.index_coord_system(coord_system.clone());
        Ok(coord_system)
    }
}

impl RegionStore for JsonStore {
    fn store_region(&mut self, region: SeqRegion) -> Result<SeqRegion, StoreError> {
        self.check_region(&region)?;
        self.index_region(StoredRegion {
            region: region.clone(),
            sequence: None,
        });
        Ok(region)
    }

    fn store_region_with_sequence(
        &mut self,
        region: SeqRegion,
        sequence: &[u8],
    ) -> Result<SeqRegion, StoreError> {
        if !region.coord_system.sequence_level {
            return Err(StoreError::NotSequenceLevel(
                region.coord_system.to_string(),
            ));
        }
        self.check_region(&region)?;
        self.index_region(StoredRegion {
            region: region.clone(),
            sequence: Some(String::from_utf8_lossy(sequence).to_string()),
        });
        Ok(region)
    }
}

impl HitStore for JsonStore {
    fn store_hit(&mut self, hit: Hit) -> Result<(), StoreError> {
        self.hits.push(hit);
        Ok(())
    }
}

impl SequenceFetcher for JsonStore {
    fn fetch(&self, region_name: &str) -> Result<Vec<u8>, SearchError> {
        self.regions
            .iter()
            .find(|r| r.region.name == region_name)
            .and_then(|r| r.sequence.as_ref())
            .map(|s| s.as_bytes().to_vec())
            .ok_or_else(|| SearchError::UnknownRegion(region_name.to_string()))
    }
}
