//! Population-genetics statistics and simulation.
//!
//! - [`cpi`]: PI, PE, CPI, CPE and RMNE of a stain against allele frequencies
//! - [`simulation`]: [`Simulator`], drawing synthetic profiles from allele
//!   frequencies with a seedable random source

pub mod cpi;
pub mod simulation;

pub use simulation::Simulator;
