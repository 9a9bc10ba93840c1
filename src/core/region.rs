use serde::{Deserialize, Serialize};

use crate::core::coord::CoordSystem;

/// A sequence region (slice): one named span within a coordinate system.
///
/// Regions built by the loaders are always whole-sequence spans, so start is
/// 1, length mirrors end, and strand is forward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeqRegion {
    /// Region name, unique within its coordinate system
    pub name: String,

    /// 1-based start coordinate
    pub start: u64,

    /// Inclusive end coordinate
    pub end: u64,

    /// Region length; equals end for whole-sequence spans
    pub length: u64,

    /// Strand, +1 for everything the loaders produce
    pub strand: i8,

    /// The coordinate system this region belongs to
    pub coord_system: CoordSystem,
}

impl SeqRegion {
    /// Build a whole-sequence span: start=1, end=length, forward strand.
    pub fn whole_span(name: impl Into<String>, length: u64, coord_system: &CoordSystem) -> Self {
        Self {
            name: name.into(),
            start: 1,
            end: length,
            length,
            strand: 1,
            coord_system: coord_system.clone(),
        }
    }

    /// Check the region invariants: end >= start >= 1, length consistent
    /// with the span.
    pub fn validate(&self) -> Result<(), String> {
        if self.start < 1 {
            return Err(format!(
                "region '{}' has start {} (must be >= 1)",
                self.name, self.start
            ));
        }
        if self.end < self.start {
            return Err(format!(
                "region '{}' has end {} before start {}",
                self.name, self.end, self.start
            ));
        }
        if self.length != self.end - self.start + 1 {
            return Err(format!(
                "region '{}' has length {} but spans {}..{}",
                self.name, self.length, self.start, self.end
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contig_cs() -> CoordSystem {
        CoordSystem::new("contig", None, 2).with_sequence_level(true)
    }

    #[test]
    fn test_whole_span() {
        let region = SeqRegion::whole_span("AL627309.15", 1000, &contig_cs());
        assert_eq!(region.start, 1);
        assert_eq!(region.end, 1000);
        assert_eq!(region.length, 1000);
        assert_eq!(region.strand, 1);
        assert!(region.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_span() {
        // A zero-length sequence yields end=0 < start=1
        let region = SeqRegion::whole_span("empty", 0, &contig_cs());
        assert!(region.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inconsistent_length() {
        let mut region = SeqRegion::whole_span("chr1", 500, &contig_cs());
        region.length = 400;
        assert!(region.validate().is_err());
    }
}
