use rand::prelude::*;

use crate::core::allele::Allele;
use crate::core::freqs::{Flocus, Freqs};
use crate::core::locus::Locus;
use crate::core::sample::Sample;
use crate::core::types::Linkage;
use crate::interpret::aggregation::composite;

/// Prefix of the IDs of simulated persons; the population name follows
pub const SIMULATED_ID_PREFIX: &str = "sim_";

/// Monte-Carlo generator of synthetic profiles from allele frequencies
pub struct Simulator {
    rng: StdRng,
}

impl Simulator {
    /// Create a new simulator
    ///
    /// # Arguments
    /// * `seed` - Optional random seed for reproducibility
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Draw `n` independent samples of `persons` persons each
    pub fn draw_samples(&mut self, freqs: &Freqs, n: usize, persons: usize) -> Vec<Sample> {
        (0..n).map(|_| self.draw_sample(freqs, persons)).collect()
    }

    /// Draw a mixture of `persons` persons: the composite of their profiles
    /// over all markers
    pub fn draw_sample(&mut self, freqs: &Freqs, persons: usize) -> Sample {
        let people: Vec<Sample> = (0..persons).map(|_| self.draw_person(freqs)).collect();
        composite(&people, Linkage::All)
    }

    /// Draw one person: two alleles per marker of `freqs`
    pub fn draw_person(&mut self, freqs: &Freqs) -> Sample {
        let loci: Vec<Locus> = freqs
            .floci
            .iter()
            .map(|fl| Locus::with_alleles(&fl.id, [self.draw_allele(fl), self.draw_allele(fl)]))
            .collect();
        Sample::with_loci(
            format!("{SIMULATED_ID_PREFIX}{}", freqs.population),
            String::new(),
            loci,
        )
    }

    /// Draw an allele with probability proportional to its frequency.
    ///
    /// Frequencies need not sum to 1. A marker without alleles yields an
    /// empty call.
    pub fn draw_allele(&mut self, flocus: &Flocus) -> Allele {
        let Some(last) = flocus.falleles.last() else {
            return Allele::default();
        };

        let mut r = self.rng.gen::<f64>() * flocus.total_frequency();
        for fa in &flocus.falleles {
            r -= fa.freq;
            if r < 0.0 {
                return Allele::new(fa.id);
            }
        }
        Allele::new(last.id)
    }
}
