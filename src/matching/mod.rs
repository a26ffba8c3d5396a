//! Profile comparison.
//!
//! - [`scoring`]: locus-by-locus comparison of two single-person profiles and
//!   the same-person decision
//! - [`engine`]: [`ProfileMatcher`], ranking reference profiles against a query
//! - [`missing`]: alleles of a person that a stain does not show
//!
//! ## Same-person rule
//!
//! Each locus typed in both profiles is a full match, a fuzzy match (a single
//! allele inside the other side's pair) or a mismatch. Two fuzzy matches
//! weigh as one mismatch. Two profiles are the same person if the effective
//! mismatches do not exceed a quarter of the loci of the shorter profile.
//! Profiles with more than two alleles at any locus are mixtures and never
//! match.
//!
//! ## Example
//!
//! ```rust
//! use str_solver::core::allele::Allele;
//! use str_solver::core::locus::Locus;
//! use str_solver::core::sample::Sample;
//! use str_solver::matching::ProfileMatcher;
//!
//! let profile = |id: &str, a: f64, b: f64| {
//!     Sample::with_loci(
//!         id,
//!         "",
//!         [Locus::with_alleles("VWA", [Allele::new(a), Allele::new(b)])],
//!     )
//! };
//!
//! let references = vec![profile("suspect", 16.0, 17.0), profile("staff", 14.0, 15.0)];
//! let matcher = ProfileMatcher::new(&references);
//!
//! let best = matcher.find_best_match(&profile("UP1", 16.0, 17.0)).unwrap();
//! assert_eq!(best.reference.id, "suspect");
//! ```

pub mod engine;
pub mod missing;
pub mod scoring;

pub use engine::{MatchResult, ProfileMatcher};
pub use scoring::{same_person, LocusMatch, MatchScore};
