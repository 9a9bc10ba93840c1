use serde::{Deserialize, Serialize};

/// A named, ranked, versioned coordinate system (e.g. `chromosome:GRCh38`,
/// `contig`, `clone`).
///
/// Every sequence region produced by a load belongs to exactly one coordinate
/// system. Rank 1 is the top of the assembly hierarchy; ranks are unique
/// within a store. Only sequence-level systems may carry stored raw sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordSystem {
    /// System name (e.g. "chromosome", "scaffold", "contig")
    pub name: String,

    /// Assembly version (e.g. "GRCh38"); absent for version-less systems
    /// such as `contig`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Position in the assembly hierarchy; 1 is the top
    pub rank: u32,

    /// Whether this is the default system for its name
    #[serde(default)]
    pub default: bool,

    /// Whether regions of this system carry stored raw sequence
    #[serde(default)]
    pub sequence_level: bool,
}

impl CoordSystem {
    pub fn new(name: impl Into<String>, version: Option<String>, rank: u32) -> Self {
        Self {
            name: name.into(),
            version,
            rank,
            default: false,
            sequence_level: false,
        }
    }

    #[must_use]
    pub fn with_default(mut self, default: bool) -> Self {
        self.default = default;
        self
    }

    #[must_use]
    pub fn with_sequence_level(mut self, sequence_level: bool) -> Self {
        self.sequence_level = sequence_level;
        self
    }

    /// Lookup key: systems are identified by (name, version)
    #[must_use]
    pub fn key(&self) -> (String, Option<String>) {
        (self.name.clone(), self.version.clone())
    }
}

impl std::fmt::Display for CoordSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}:{version}", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}
