//! PCR kit descriptions and kit classification.
//!
//! A sample's kit is decided by a [`KitClassifier`](store::KitClassifier).
//! [`KitCatalog`](store::KitCatalog) is an in-memory classifier over kits
//! registered by the caller; samples that fit no kit are tagged with the
//! unknown kit built from their own markers.
//!
//! ## Example
//!
//! ```rust
//! use str_solver::catalog::kit::{Kit, Str};
//! use str_solver::catalog::store::KitCatalog;
//! use str_solver::core::locus::Locus;
//! use str_solver::core::sample::Sample;
//!
//! let catalog = KitCatalog::from_kits([Kit::new(
//!     "Alpha",
//!     ["D3S1358", "VWA", "D16S539", "SE33"].iter().map(Str::new).collect(),
//! )])
//! .unwrap();
//!
//! let mut sample = Sample::with_loci(
//!     "s1",
//!     "",
//!     ["D3S1358", "VWA", "D16S539"].iter().map(Locus::new),
//! );
//! sample.infer_kit(&catalog);
//! assert_eq!(sample.kit.id, "Alpha");
//! ```

pub mod kit;
pub mod store;
