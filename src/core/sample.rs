use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::catalog::kit::Kit;
use crate::catalog::store::KitClassifier;
use crate::core::allele::X_ALLELE;
use crate::core::locus::Locus;
use crate::core::types::Sex;

/// Free-form key/value information attached to a sample by the importer
pub type Info = BTreeMap<String, String>;

/// Amelogenin marker used for sex determination
pub const AMELOGENIN: &str = "AMEL";

/// Samples with fewer loci than this are never matched against a kit
pub const MIN_LOCI_FOR_KIT: usize = 3;

/// The STR profile of one specimen, or of a profile derived from one
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "SampleRecord")]
pub struct Sample {
    /// Sample name (e.g. `Stain-01`)
    pub id: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub info: Info,

    /// PCR kit the profile was typed with
    #[serde(default)]
    pub kit: Kit,

    /// Provenance: the file the sample came from, or the derivation trail
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub source: String,

    /// Loci in insertion order, unique by ID
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    loci: Vec<Locus>,
}

/// Serialized form of a [`Sample`]. Loci are re-added with
/// [`Sample::add_locus`] on read, so duplicate loci are dropped.
#[derive(Deserialize)]
struct SampleRecord {
    id: String,
    #[serde(default)]
    info: Info,
    #[serde(default)]
    kit: Kit,
    #[serde(default)]
    source: String,
    #[serde(default)]
    loci: Vec<Locus>,
}

impl From<SampleRecord> for Sample {
    fn from(record: SampleRecord) -> Self {
        let mut sample = Sample::with_loci(record.id, record.source, record.loci);
        sample.info = record.info;
        sample.kit = record.kit;
        sample
    }
}

impl Sample {
    pub fn new(id: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            info: Info::new(),
            kit: Kit::default(),
            source: source.into(),
            loci: Vec::new(),
        }
    }

    /// Create a sample and add `loci` one by one with [`Sample::add_locus`]
    pub fn with_loci(
        id: impl Into<String>,
        source: impl Into<String>,
        loci: impl IntoIterator<Item = Locus>,
    ) -> Self {
        let mut sample = Self::new(id, source);
        for locus in loci {
            sample.add_locus(locus);
        }
        sample
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    #[must_use]
    pub fn loci(&self) -> &[Locus] {
        &self.loci
    }

    /// Add a locus. Loci without an ID or with an ID already present are
    /// ignored. Loci without alleles are kept.
    pub fn add_locus(&mut self, locus: Locus) {
        if locus.id().is_empty() || self.locus(locus.id()).is_some() {
            return;
        }
        self.loci.push(locus);
    }

    /// Locus `id`, matched case-insensitively like [`Locus::new`]
    #[must_use]
    pub fn locus(&self, id: &str) -> Option<&Locus> {
        let id = id.to_uppercase();
        self.loci.iter().find(|l| l.id() == id)
    }

    /// Whether the sample has locus `id` with at least one allele
    #[must_use]
    pub fn has_locus(&self, id: &str) -> bool {
        self.locus(id).is_some_and(|l| !l.is_empty())
    }

    /// Largest number of alleles at any locus
    #[must_use]
    pub fn max_alleles(&self) -> usize {
        self.loci.iter().map(Locus::len).max().unwrap_or(0)
    }

    #[must_use]
    pub fn total_alleles(&self) -> usize {
        self.loci.iter().map(Locus::len).sum()
    }

    /// Minimum number of people that could have contributed to the sample
    #[must_use]
    pub fn min_contributors(&self) -> usize {
        self.max_alleles().div_ceil(2)
    }

    /// Sex of a single-contributor profile, read from the amelogenin locus
    #[must_use]
    pub fn sex(&self) -> Sex {
        if self.min_contributors() > 1 {
            return Sex::Undetermined;
        }
        let Some(amel) = self.locus(AMELOGENIN) else {
            return Sex::Undetermined;
        };
        match amel.alleles() {
            [] => Sex::Undetermined,
            [single] if single.id == X_ALLELE => Sex::Female,
            // a lone Y allele is not a plausible call
            [_] => Sex::Undetermined,
            _ => Sex::Male,
        }
    }

    /// Tag the sample with the unknown kit built from its own markers
    pub fn tag_unknown_kit(&mut self) {
        self.kit = Kit::unknown(self);
    }

    pub fn assign_kit(&mut self, kit: Kit) {
        self.kit = kit;
    }

    #[must_use]
    pub fn is_of_unknown_kit(&self) -> bool {
        self.kit.is_unknown()
    }

    /// Ask `classifier` for the sample's kit, falling back to the unknown kit
    pub fn infer_kit(&mut self, classifier: &dyn KitClassifier) {
        if self.loci.len() < MIN_LOCI_FOR_KIT {
            self.tag_unknown_kit();
            return;
        }
        match classifier.classify(self) {
            Some(kit) => self.kit = kit,
            None => {
                debug!("No kit matches sample '{}'; tagging as unknown", self.id);
                self.tag_unknown_kit();
            }
        }
    }
}
