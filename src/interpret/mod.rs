//! Engines deriving new profiles from existing ones.
//!
//! Every function here takes its inputs by reference and returns a new
//! [`Sample`](crate::core::sample::Sample) or [`Locus`](crate::core::locus::Locus):
//!
//! - [`aggregation`]: composite (union) and consensus (intersection) profiles
//! - [`major_component`]: the dominant contributor of a mixed stain
//! - [`stutter`]: peak heights corrected for PCR stutter
//! - [`unknown_person`]: iterative deconvolution into unknown persons (UPs)
//!
//! ## Example
//!
//! ```rust
//! use str_solver::config::MixtureParams;
//! use str_solver::core::allele::Allele;
//! use str_solver::core::locus::Locus;
//! use str_solver::core::sample::Sample;
//! use str_solver::interpret::unknown_person::infer_unknown_persons;
//!
//! let stain = Sample::with_loci(
//!     "stain",
//!     "run1.txt",
//!     [Locus::with_alleles(
//!         "VWA",
//!         [
//!             Allele::new(16.0).with_height(9300.0),
//!             Allele::new(17.0).with_height(7095.0),
//!         ],
//!     )],
//! );
//!
//! let ups = infer_unknown_persons(&stain, &MixtureParams::default());
//! assert_eq!(ups.len(), 1);
//! assert_eq!(ups[0].id, "stain::UP1");
//! ```

pub mod aggregation;
pub mod major_component;
pub mod stutter;
pub mod unknown_person;
