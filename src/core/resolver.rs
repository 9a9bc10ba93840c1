use regex::Regex;
use thiserror::Error;
use tracing::debug;

use crate::core::name_map::NameMap;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("name pattern '{pattern}' did not match id '{id}'")]
    NoMatch { pattern: String, id: String },

    #[error("name pattern '{pattern}' matched id '{id}' but has no capture group")]
    NoCapture { pattern: String, id: String },
}

/// Maps raw sequence identifiers to canonical region names.
///
/// Resolution order: accession map first, then regex extraction, then the
/// raw id unchanged. A regex that does not match, or matches without a
/// first capture group, is a hard error; there is no silent fallback to the
/// raw id.
#[derive(Debug, Default)]
pub struct NameResolver<'a> {
    regex: Option<&'a Regex>,
    name_map: Option<&'a NameMap>,
}

impl<'a> NameResolver<'a> {
    #[must_use]
    pub fn new(regex: Option<&'a Regex>, name_map: Option<&'a NameMap>) -> Self {
        Self { regex, name_map }
    }

    /// Resolve a raw id to a region name.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError` if a regex is configured and does not yield a
    /// first capture group for this id.
    pub fn resolve(&self, raw_id: &str) -> Result<String, ResolveError> {
        if let Some(map) = self.name_map {
            if let Some(name) = map.get(raw_id) {
                return Ok(name.to_string());
            }
        }

        if let Some(regex) = self.regex {
            let captures = regex.captures(raw_id).ok_or_else(|| ResolveError::NoMatch {
                pattern: regex.as_str().to_string(),
                id: raw_id.to_string(),
            })?;
            let name = captures
                .get(1)
                .ok_or_else(|| ResolveError::NoCapture {
                    pattern: regex.as_str().to_string(),
                    id: raw_id.to_string(),
                })?
                .as_str()
                .to_string();

            // Let an operator sanity-check naming before a large load
            debug!("resolved '{raw_id}' -> '{name}' via pattern");
            return Ok(name);
        }

        Ok(raw_id.to_string())
    }
}

/// Strip a leading "chr" prefix from an AGP object name, yielding the
/// accession to resolve. "chr5" becomes "5"; names without the prefix pass
/// through untouched.
#[must_use]
pub fn strip_chr_prefix(name: &str) -> &str {
    name.strip_prefix("chr").unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passthrough_without_regex_or_map() {
        let resolver = NameResolver::new(None, None);
        assert_eq!(resolver.resolve("scaffold_1").unwrap(), "scaffold_1");
    }

    #[test]
    fn test_map_wins_over_regex() {
        let map = NameMap::from_text("clone7 AL627309.15\n");
        let regex = Regex::new(r"^(\S+)\.\d+$").unwrap();
        let resolver = NameResolver::new(Some(&regex), Some(&map));
        assert_eq!(resolver.resolve("AL627309.15").unwrap(), "clone7");
    }

    #[test]
    fn test_regex_extracts_first_capture() {
        let regex = Regex::new(r"^gi\|\d+\|ref\|([^|]+)\|").unwrap();
        let resolver = NameResolver::new(Some(&regex), None);
        assert_eq!(
            resolver.resolve("gi|568336023|ref|NC_000001.11|").unwrap(),
            "NC_000001.11"
        );
    }

    #[test]
    fn test_regex_non_match_is_fatal() {
        let regex = Regex::new(r"^contig_(\d+)$").unwrap();
        let resolver = NameResolver::new(Some(&regex), None);
        let err = resolver.resolve("scaffold_9").unwrap_err();
        assert!(matches!(err, ResolveError::NoMatch { .. }));
    }

    #[test]
    fn test_regex_without_capture_group_is_fatal() {
        let regex = Regex::new(r"^contig_\d+$").unwrap();
        let resolver = NameResolver::new(Some(&regex), None);
        let err = resolver.resolve("contig_9").unwrap_err();
        assert!(matches!(err, ResolveError::NoCapture { .. }));
    }

    #[test]
    fn test_map_miss_falls_through_to_raw_id() {
        let map = NameMap::from_text("clone7 AL627309.15\n");
        let resolver = NameResolver::new(None, Some(&map));
        assert_eq!(resolver.resolve("AL999999.1").unwrap(), "AL999999.1");
    }

    #[test]
    fn test_strip_chr_prefix() {
        assert_eq!(strip_chr_prefix("chr5"), "5");
        assert_eq!(strip_chr_prefix("chrX"), "X");
        assert_eq!(strip_chr_prefix("scaffold1"), "scaffold1");
        // Only one prefix is stripped
        assert_eq!(strip_chr_prefix("chrchr1"), "chr1");
    }
}
