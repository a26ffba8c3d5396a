use serde::{Deserialize, Serialize};

use crate::core::allele::{Allele, EMPTY_CALL, UNREADABLE};
use crate::core::linkage::linkage_of;
use crate::core::types::Linkage;

/// The alleles observed at one marker.
///
/// Alleles are kept in ascending ID order and are unique by ID, except that
/// several unreadable calls ([`UNREADABLE`]) may coexist.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "LocusRecord")]
pub struct Locus {
    /// Marker name, upper case (e.g. `VWA`)
    id: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    alleles: Vec<Allele>,
}

/// Serialized form of a [`Locus`]. Deserialized loci are rebuilt with
/// [`Locus::with_alleles`] so the ID and allele ordering rules hold.
#[derive(Deserialize)]
struct LocusRecord {
    id: String,
    #[serde(default)]
    alleles: Vec<Allele>,
}

impl From<LocusRecord> for Locus {
    fn from(record: LocusRecord) -> Self {
        Locus::with_alleles(record.id, record.alleles)
    }
}

impl Locus {
    /// Create an empty locus. The ID is upper-cased so `vWA` and `VWA` agree.
    pub fn new(id: impl AsRef<str>) -> Self {
        Self {
            id: id.as_ref().to_uppercase(),
            alleles: Vec::new(),
        }
    }

    /// Create a locus and add `alleles` one by one with [`Locus::add_allele`]
    pub fn with_alleles(id: impl AsRef<str>, alleles: impl IntoIterator<Item = Allele>) -> Self {
        let mut locus = Self::new(id);
        for allele in alleles {
            locus.add_allele(allele);
        }
        locus
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn alleles(&self) -> &[Allele] {
        &self.alleles
    }

    pub fn allele_ids(&self) -> impl Iterator<Item = f64> + '_ {
        self.alleles.iter().map(|a| a.id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.alleles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alleles.is_empty()
    }

    /// Add an allele, keeping the alleles sorted by ID.
    ///
    /// Empty calls are ignored, and so is an allele whose ID is already
    /// present unless it is the unreadable sentinel.
    pub fn add_allele(&mut self, allele: Allele) {
        if allele.id == EMPTY_CALL {
            return;
        }
        if self.has_allele(allele.id) && allele.id != UNREADABLE {
            return;
        }
        self.alleles.push(allele);
        self.alleles.sort_by(|a, b| a.id.total_cmp(&b.id));
    }

    /// Remove every allele with ID `id`. The order of the rest is unchanged.
    pub fn remove_allele(&mut self, id: f64) {
        self.alleles.retain(|a| a.id != id);
    }

    /// First allele with ID `id`
    #[must_use]
    pub fn allele(&self, id: f64) -> Option<&Allele> {
        if id == EMPTY_CALL {
            return None;
        }
        self.alleles.iter().find(|a| a.id == id)
    }

    #[must_use]
    pub fn has_allele(&self, id: f64) -> bool {
        self.allele(id).is_some()
    }

    /// A copy of this locus with alleles ordered by descending height.
    /// Alleles of equal height keep their relative order.
    #[must_use]
    pub fn sort_by_height(&self) -> Locus {
        let mut alleles = self.alleles.clone();
        alleles.sort_by(|a, b| b.height.total_cmp(&a.height));
        Locus {
            id: self.id.clone(),
            alleles,
        }
    }

    /// A copy of this locus with only allele IDs retained
    #[must_use]
    pub fn ids_only(&self) -> Locus {
        Locus {
            id: self.id.clone(),
            alleles: self.alleles.iter().map(Allele::id_only).collect(),
        }
    }

    /// Linkage class of this marker
    #[must_use]
    pub fn linkage(&self) -> Linkage {
        linkage_of(&self.id)
    }
}
