use serde::{Deserialize, Serialize};

use crate::core::sample::Sample;

/// Kit ID given to samples whose PCR kit could not be determined
pub const UNKNOWN_KIT_ID: &str = "unknown Kit";

/// One STR marker of a PCR kit
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Str {
    /// Marker name, upper case
    pub id: String,

    /// Dye color of the marker in this kit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dye: Option<String>,
}

impl Str {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self {
            id: id.as_ref().to_uppercase(),
            dye: None,
        }
    }

    #[must_use]
    pub fn with_dye(mut self, dye: impl Into<String>) -> Self {
        self.dye = Some(dye.into());
        self
    }
}

/// A PCR kit: an ordered list of STR markers
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Kit {
    /// Kit name, e.g. `NGM-Detect`
    pub id: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strs: Vec<Str>,
}

impl Kit {
    pub fn new(id: impl Into<String>, strs: Vec<Str>) -> Self {
        Self {
            id: id.into(),
            strs,
        }
    }

    /// The unknown kit for `sample`, listing its markers in sample order
    #[must_use]
    pub fn unknown(sample: &Sample) -> Self {
        Self {
            id: UNKNOWN_KIT_ID.to_string(),
            strs: sample.loci().iter().map(|l| Str::new(l.id())).collect(),
        }
    }

    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.id == UNKNOWN_KIT_ID
    }

    /// Whether the kit amplifies marker `id`
    #[must_use]
    pub fn has_str(&self, id: &str) -> bool {
        self.strs.iter().any(|s| s.id == id)
    }

    /// Positional comparison: the i-th locus of the sample must be the i-th
    /// STR of the kit, and the sample may not have more loci than the kit.
    #[must_use]
    pub fn matches_sample(&self, sample: &Sample) -> bool {
        sample.loci().len() <= self.strs.len()
            && sample
                .loci()
                .iter()
                .zip(&self.strs)
                .all(|(locus, s)| locus.id() == s.id)
    }
}
