use serde::{Deserialize, Serialize};

/// Linkage class of a marker, also used as a filter when aggregating samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Linkage {
    Autosomal,
    YLinked,
    XLinked,
    /// Filter only: admits every marker
    All,
}

impl Linkage {
    /// Whether a marker of linkage `marker` passes this filter
    #[must_use]
    pub fn admits(self, marker: Linkage) -> bool {
        self == Self::All || self == marker
    }
}

impl std::fmt::Display for Linkage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Autosomal => write!(f, "autosomal"),
            Self::YLinked => write!(f, "Y-linked"),
            Self::XLinked => write!(f, "X-linked"),
            Self::All => write!(f, "all_linkage"),
        }
    }
}

/// How alleles of several samples are combined at a shared locus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationMode {
    /// Union of all alleles
    Composite,
    /// Only alleles present in every sample
    Consensus,
}

impl std::fmt::Display for AggregationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Composite => write!(f, "composite"),
            Self::Consensus => write!(f, "consensus"),
        }
    }
}

/// Sex inferred from the amelogenin locus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Female,
    Male,
    Undetermined,
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Female => write!(f, "female"),
            Self::Male => write!(f, "male"),
            Self::Undetermined => write!(f, "na"),
        }
    }
}
