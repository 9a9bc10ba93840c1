use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::search::config::{DatabaseParams, SearchConfig};
use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("no stored sequence for region '{0}'")]
    UnknownRegion(String),

    #[error("aligner failed: {0}")]
    Aligner(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One similarity-search hit against a target database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    pub query_name: String,
    pub target_name: String,
    pub query_start: u64,
    pub query_end: u64,
    pub target_start: u64,
    pub target_end: u64,
    pub strand: i8,
    pub score: f64,
    pub identity: f64,
}

/// Supplies query sequence for a search job.
pub trait SequenceFetcher {
    /// Fetch the raw sequence for a region by name.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::UnknownRegion` if no sequence is stored under
    /// this name.
    fn fetch(&self, region_name: &str) -> Result<Vec<u8>, SearchError>;
}

impl<T: SequenceFetcher> SequenceFetcher for &T {
    fn fetch(&self, region_name: &str) -> Result<Vec<u8>, SearchError> {
        (**self).fetch(region_name)
    }
}

/// The external similarity-search runner.
pub trait Aligner {
    /// Align a query sequence against a named database.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Aligner` if the external runner fails.
    fn align(
        &mut self,
        query: &[u8],
        database: &str,
        params: &DatabaseParams,
    ) -> Result<Vec<Hit>, SearchError>;
}

/// Persistence of search hits.
pub trait HitStore {
    /// Store one hit.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on persistence failure; never retried.
    fn store_hit(&mut self, hit: Hit) -> Result<(), StoreError>;
}

/// Capability interface for anything the pipeline can execute.
pub trait Runnable {
    /// Execute to completion or fail outright.
    ///
    /// # Errors
    ///
    /// Returns `SearchError` from the fetch or align step.
    fn run(&mut self) -> Result<(), SearchError>;

    /// The hits produced by the last run.
    fn output(&self) -> &[Hit];
}

/// One similarity-search job: fetch the query region's sequence, align it
/// against a target database with that database's configured parameters,
/// keep the hits for later persistence.
pub struct SearchJob<'a, F, A> {
    query_name: String,
    database: String,
    config: &'a SearchConfig,
    fetcher: F,
    aligner: A,
    hits: Vec<Hit>,
}

impl<'a, F: SequenceFetcher, A: Aligner> SearchJob<'a, F, A> {
    pub fn new(
        query_name: impl Into<String>,
        database: impl Into<String>,
        config: &'a SearchConfig,
        fetcher: F,
        aligner: A,
    ) -> Self {
        Self {
            query_name: query_name.into(),
            database: database.into(),
            config,
            fetcher,
            aligner,
            hits: Vec::new(),
        }
    }

    /// Store every hit from the last run.
    ///
    /// # Errors
    ///
    /// Returns the first `StoreError`; persistence is not retried.
    pub fn persist<S: HitStore>(&self, store: &mut S) -> Result<(), SearchError> {
        for hit in &self.hits {
            store.store_hit(hit.clone())?;
        }
        Ok(())
    }
}

impl<F: SequenceFetcher, A: Aligner> Runnable for SearchJob<'_, F, A> {
    fn run(&mut self) -> Result<(), SearchError> {
        let query = self.fetcher.fetch(&self.query_name)?;
        let params = self.config.params_for(&self.database);

        self.hits = self.aligner.align(&query, &self.database, &params)?;
        info!(
            "search of '{}' against '{}' produced {} hits",
            self.query_name,
            self.database,
            self.hits.len()
        );
        Ok(())
    }

    fn output(&self) -> &[Hit] {
        &self.hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MapFetcher(HashMap<String, Vec<u8>>);

    impl SequenceFetcher for MapFetcher {
        fn fetch(&self, region_name: &str) -> Result<Vec<u8>, SearchError> {
            self.0
                .get(region_name)
                .cloned()
                .ok_or_else(|| SearchError::UnknownRegion(region_name.to_string()))
        }
    }

    /// Records what it was asked to do and returns one canned hit.
    struct RecordingAligner {
        seen_params: Option<DatabaseParams>,
        seen_query: Vec<u8>,
    }

    impl Aligner for RecordingAligner {
        fn align(
            &mut self,
            query: &[u8],
            database: &str,
            params: &DatabaseParams,
        ) -> Result<Vec<Hit>, SearchError> {
            self.seen_params = Some(*params);
            self.seen_query = query.to_vec();
            Ok(vec![Hit {
                query_name: "q".to_string(),
                target_name: format!("{database}_target"),
                query_start: 1,
                query_end: 4,
                target_start: 10,
                target_end: 13,
                strand: 1,
                score: 42.0,
                identity: 1.0,
            }])
        }
    }

    #[derive(Default)]
    struct VecHitStore(Vec<Hit>);

    impl HitStore for VecHitStore {
        fn store_hit(&mut self, hit: Hit) -> Result<(), StoreError> {
            self.0.push(hit);
            Ok(())
        }
    }

    fn test_config() -> SearchConfig {
        serde_json::from_str(r#"{"databases": {"embl_vertrna": {"ungapped": true}}}"#).unwrap()
    }

    #[test]
    fn test_run_fetches_and_aligns_with_database_params() {
        let config = test_config();
        let fetcher = MapFetcher(HashMap::from([("contig1".to_string(), b"ACGT".to_vec())]));
        let aligner = RecordingAligner {
            seen_params: None,
            seen_query: Vec::new(),
        };

        let mut job = SearchJob::new("contig1", "embl_vertrna", &config, fetcher, aligner);
        job.run().unwrap();

        assert_eq!(job.output().len(), 1);
        assert_eq!(job.aligner.seen_query, b"ACGT");
        assert!(job.aligner.seen_params.unwrap().ungapped);
    }

    #[test]
    fn test_run_fails_for_unknown_region() {
        let config = test_config();
        let fetcher = MapFetcher(HashMap::new());
        let aligner = RecordingAligner {
            seen_params: None,
            seen_query: Vec::new(),
        };

        let mut job = SearchJob::new("missing", "embl_vertrna", &config, fetcher, aligner);
        assert!(matches!(
            job.run().unwrap_err(),
            SearchError::UnknownRegion(_)
        ));
        assert!(job.output().is_empty());
    }

    #[test]
    fn test_persist_stores_every_hit() {
        let config = test_config();
        let fetcher = MapFetcher(HashMap::from([("contig1".to_string(), b"ACGT".to_vec())]));
        let aligner = RecordingAligner {
            seen_params: None,
            seen_query: Vec::new(),
        };

        let mut job = SearchJob::new("contig1", "embl_vertrna", &config, fetcher, aligner);
        job.run().unwrap();

        let mut hit_store = VecHitStore::default();
        job.persist(&mut hit_store).unwrap();
        assert_eq!(hit_store.0.len(), 1);
        assert_eq!(hit_store.0[0].target_name, "embl_vertrna_target");
    }
}
