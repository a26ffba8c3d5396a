//! # str-solver
//!
//! A library for interpreting forensic short tandem repeat (STR) profiles.
//!
//! Crime-scene stains are often mixtures of several people, typed with PCR
//! kits that produce stutter artifacts next to the true peaks. `str-solver`
//! turns the raw per-marker allele calls of such profiles into results an
//! analyst can report on.
//!
//! ## Features
//!
//! - **Major component**: calls the dominant contributor of a mixed stain
//! - **Unknown persons**: deconvolutes a stain into its contributors, one
//!   major component at a time
//! - **Stutter correction**: removes stutter contributions from peak heights
//! - **Aggregation**: composite (union) and consensus (intersection) profiles
//! - **Matching**: fuzzy same-person comparison and ranking of references
//! - **Statistics**: PI, PE, CPI, CPE and RMNE from allele frequencies
//! - **Simulation**: synthetic mixtures drawn from allele frequencies
//!
//! ## Example
//!
//! ```rust
//! use str_solver::{Allele, Freqs, Locus, Sample};
//! use str_solver::config::InterpretationConfig;
//! use str_solver::core::freqs::{Fallele, Flocus};
//! use str_solver::interpret::major_component::major_component;
//! use str_solver::stats::cpi::cpi;
//!
//! let config = InterpretationConfig::default();
//!
//! let stain = Sample::with_loci(
//!     "stain",
//!     "run1.txt",
//!     [Locus::with_alleles(
//!         "SE33",
//!         [
//!             Allele::new(9.2).with_height(820.0),
//!             Allele::new(18.0).with_height(998.0),
//!             Allele::new(23.0).with_height(7623.0),
//!         ],
//!     )],
//! );
//!
//! let mc = major_component(&stain, &config.mixture);
//! assert_eq!(mc.locus("SE33").unwrap().allele_ids().collect::<Vec<_>>(), vec![23.0]);
//!
//! let freqs = Freqs::new(
//!     "Europe",
//!     0.001,
//!     vec![Flocus::new("SE33", vec![Fallele::new(23.0, 0.2)])],
//! );
//! assert!((cpi(&mc, &freqs, config.theta) - 0.04).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Alleles, loci, samples, frequencies and marker linkage
//! - [`catalog`]: PCR kits and kit classification
//! - [`interpret`]: Aggregation, major component, stutter and unknown persons
//! - [`matching`]: Same-person comparison and missing alleles
//! - [`stats`]: Match statistics and simulation
//! - [`config`]: Interpretation parameters

pub mod catalog;
pub mod config;
pub mod core;
pub mod interpret;
pub mod matching;
pub mod stats;

// Re-export commonly used types for convenience
pub use catalog::kit::Kit;
pub use catalog::store::{KitCatalog, KitClassifier};
pub use config::{InterpretationConfig, MixtureParams, StutterRatios};
pub use core::allele::Allele;
pub use core::freqs::Freqs;
pub use core::locus::Locus;
pub use core::sample::Sample;
pub use core::types::*;
pub use matching::engine::{MatchResult, ProfileMatcher};
