use std::collections::HashMap;
use thiserror::Error;

use crate::catalog::kit::Kit;
use crate::core::sample::Sample;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("More than one kit with ID '{0}'")]
    DuplicateKit(String),
}

/// Strategy deciding which PCR kit a sample was typed with
pub trait KitClassifier {
    /// The kit of `sample`, or `None` if no known kit fits
    fn classify(&self, sample: &Sample) -> Option<Kit>;
}

/// In-memory collection of known kits, matched by marker order
#[derive(Debug, Default)]
pub struct KitCatalog {
    /// All known kits, in registration order
    kits: Vec<Kit>,

    /// Index: kit ID -> index in kits vec
    id_to_index: HashMap<String, usize>,

    /// Index: first marker of the kit -> indices of kits starting with it
    first_str_to_kits: HashMap<String, Vec<usize>>,
}

impl KitCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from `kits`, rejecting duplicate kit IDs
    pub fn from_kits(kits: impl IntoIterator<Item = Kit>) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for kit in kits {
            catalog.add_kit(kit)?;
        }
        Ok(catalog)
    }

    /// Register a kit
    pub fn add_kit(&mut self, kit: Kit) -> Result<(), CatalogError> {
        if self.id_to_index.contains_key(&kit.id) {
            return Err(CatalogError::DuplicateKit(kit.id));
        }

        let index = self.kits.len();
        self.id_to_index.insert(kit.id.clone(), index);
        if let Some(first) = kit.strs.first() {
            self.first_str_to_kits
                .entry(first.id.clone())
                .or_default()
                .push(index);
        }
        self.kits.push(kit);
        Ok(())
    }

    /// Get a kit by ID
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Kit> {
        self.id_to_index.get(id).map(|&idx| &self.kits[idx])
    }

    #[must_use]
    pub fn kits(&self) -> &[Kit] {
        &self.kits
    }

    /// Number of kits in catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.kits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kits.is_empty()
    }
}

impl KitClassifier for KitCatalog {
    fn classify(&self, sample: &Sample) -> Option<Kit> {
        let first = sample.loci().first()?;
        self.first_str_to_kits
            .get(first.id())?
            .iter()
            .map(|&idx| &self.kits[idx])
            .find(|kit| kit.matches_sample(sample))
            .cloned()
    }
}
