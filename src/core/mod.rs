//! Core data types for STR profile interpretation.
//!
//! - [`Allele`](allele::Allele): one peak called at a marker, with its numeric ID
//!   and the text codec for IDs
//! - [`Locus`](locus::Locus): the alleles observed at one marker
//! - [`Sample`](sample::Sample): the STR profile of a specimen
//! - [`Freqs`](freqs::Freqs): population allele frequencies
//! - [`linkage`]: the static marker to chromosome table
//! - [`types`]: small classification enums
//!
//! ## Allele IDs
//!
//! Allele IDs are repeat numbers such as `9.3`. A few negative values are
//! reserved:
//!
//! | Text          | ID     |
//! |---------------|--------|
//! | (empty)       | 0      |
//! | `Y`           | -1     |
//! | `X`           | -2     |
//! | anything else | -999   |
//!
//! Marker IDs are upper case throughout, so `vWA` and `VWA` are the same
//! marker.

pub mod allele;
pub mod freqs;
pub mod linkage;
pub mod locus;
pub mod sample;
pub mod types;
