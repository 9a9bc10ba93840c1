use std::collections::HashMap;
use std::path::Path;

use tracing::warn;

/// Accession-to-display-name lookup table, loaded once before a load run.
///
/// File format: plain text, one mapping per line, whitespace-separated into
/// at least two fields. The second field is the accession key and the first
/// is the display name — the column order is inverted relative to the usual
/// key/value layout and is preserved here exactly. Lines with fewer than two
/// fields are skipped with a warning.
#[derive(Debug, Clone, Default)]
pub struct NameMap {
    names: HashMap<String, String>,
}

impl NameMap {
    /// Load a name map from a file.
    ///
    /// # Errors
    ///
    /// Returns `std::io::Error` if the file cannot be read.
    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_text(&content))
    }

    /// Parse a name map from text.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut names = HashMap::new();

        for (i, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < 2 {
                warn!("name map line {} has fewer than 2 fields, skipped", i + 1);
                continue;
            }

            // field[1] is the accession, field[0] the display name
            names.insert(fields[1].to_string(), fields[0].to_string());
        }

        Self { names }
    }

    /// Look up the display name for an accession.
    #[must_use]
    pub fn get(&self, accession: &str) -> Option<&str> {
        self.names.get(accession).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_order_is_inverted() {
        let map = NameMap::from_text("clone7 AL627309.15\n");
        assert_eq!(map.get("AL627309.15"), Some("clone7"));
        assert_eq!(map.get("clone7"), None);
    }

    #[test]
    fn test_short_lines_skipped() {
        let map = NameMap::from_text("clone7 AL627309.15\nlonely\n\nclone8 AL627310.3\n");
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("AL627310.3"), Some("clone8"));
    }

    #[test]
    fn test_extra_fields_ignored() {
        let map = NameMap::from_text("clone7 AL627309.15 extra trailing fields\n");
        assert_eq!(map.get("AL627309.15"), Some("clone7"));
    }

    #[test]
    fn test_tab_separated() {
        let map = NameMap::from_text("clone7\tAL627309.15\n");
        assert_eq!(map.get("AL627309.15"), Some("clone7"));
    }
}
