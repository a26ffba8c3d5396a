use serde::{Deserialize, Serialize};

use crate::core::allele::EMPTY_CALL;

/// Frequency of one allele in a population
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Fallele {
    /// Allele ID, e.g. 9.3
    pub id: f64,
    pub freq: f64,
}

impl Fallele {
    #[must_use]
    pub fn new(id: f64, freq: f64) -> Self {
        Self { id, freq }
    }
}

/// Allele frequencies at one marker
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Flocus {
    /// Marker name, e.g. `VWA`
    pub id: String,

    #[serde(default)]
    pub falleles: Vec<Fallele>,
}

impl Flocus {
    pub fn new(id: impl Into<String>, falleles: Vec<Fallele>) -> Self {
        Self {
            id: id.into(),
            falleles,
        }
    }

    #[must_use]
    pub fn fallele(&self, id: f64) -> Option<&Fallele> {
        if id == EMPTY_CALL {
            return None;
        }
        self.falleles.iter().find(|fa| fa.id == id)
    }

    #[must_use]
    pub fn has_fallele(&self, id: f64) -> bool {
        self.fallele(id).is_some()
    }

    /// Sum of all allele frequencies at this marker
    #[must_use]
    pub fn total_frequency(&self) -> f64 {
        self.falleles.iter().map(|fa| fa.freq).sum()
    }
}

/// Allele frequency tables for one population
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Freqs {
    /// Where the frequencies were read from
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub source: String,

    /// Population name, e.g. `Europe`
    pub population: String,

    /// Frequency used for alleles missing from a table
    pub fmin: f64,

    #[serde(default)]
    pub floci: Vec<Flocus>,
}

impl Freqs {
    pub fn new(population: impl Into<String>, fmin: f64, floci: Vec<Flocus>) -> Self {
        Self {
            source: String::new(),
            population: population.into(),
            fmin,
            floci,
        }
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Frequency table of marker `id`, if it has any alleles
    #[must_use]
    pub fn flocus(&self, id: &str) -> Option<&Flocus> {
        self.floci
            .iter()
            .find(|fl| fl.id == id)
            .filter(|fl| !fl.falleles.is_empty())
    }

    #[must_use]
    pub fn has_flocus(&self, id: &str) -> bool {
        self.flocus(id).is_some()
    }

    /// Frequency of allele `allele` at marker `locus`, substituting `fmin`
    /// for alleles the table does not list. `None` if the marker is unknown.
    #[must_use]
    pub fn frequency(&self, locus: &str, allele: f64) -> Option<f64> {
        self.flocus(locus)
            .map(|fl| fl.fallele(allele).map_or(self.fmin, |fa| fa.freq))
    }
}
