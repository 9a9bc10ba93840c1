use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read search config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse search config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Search flags for one target database.
///
/// Unlisted databases run gapped against the masked sequence, so both flags
/// default to false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseParams {
    /// Run the search ungapped
    #[serde(default)]
    pub ungapped: bool,

    /// Search the unmasked sequence
    #[serde(default)]
    pub unmasked: bool,
}

/// Per-database search parameters, loaded once from a JSON file and passed
/// by reference into whichever component needs them. Never process-wide
/// mutable state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub databases: HashMap<String, DatabaseParams>,
}

impl SearchConfig {
    /// Load a search config from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read or
    /// `ConfigError::Parse` if the document is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Parameters for a database, falling back to the defaults for
    /// databases the config does not list.
    #[must_use]
    pub fn params_for(&self, database: &str) -> DatabaseParams {
        self.databases.get(database).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_for_listed_database() {
        let config: SearchConfig = serde_json::from_str(
            r#"{"databases": {"embl_vertrna": {"ungapped": true, "unmasked": true}}}"#,
        )
        .unwrap();

        let params = config.params_for("embl_vertrna");
        assert!(params.ungapped);
        assert!(params.unmasked);
    }

    #[test]
    fn test_unlisted_database_gets_defaults() {
        let config: SearchConfig =
            serde_json::from_str(r#"{"databases": {"embl_vertrna": {"ungapped": true}}}"#).unwrap();

        let params = config.params_for("uniprot");
        assert!(!params.ungapped);
        assert!(!params.unmasked);
    }

    #[test]
    fn test_missing_flags_default_false() {
        let config: SearchConfig =
            serde_json::from_str(r#"{"databases": {"embl_vertrna": {}}}"#).unwrap();

        let params = config.params_for("embl_vertrna");
        assert!(!params.ungapped);
        assert!(!params.unmasked);
    }

    #[test]
    fn test_empty_document() {
        let config: SearchConfig = serde_json::from_str("{}").unwrap();
        assert!(config.databases.is_empty());
    }
}
