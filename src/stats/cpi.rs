//! Match statistics for a stain: probability of inclusion (PI) and of
//! exclusion (PE) per locus, their combined forms over a sample (CPI, CPE)
//! and the random-man-not-excluded (RMNE) ratio.
//!
//! `theta` is the population substructure correction; with `theta = 0` the
//! formulas reduce to Hardy-Weinberg equilibrium.

use crate::core::freqs::Freqs;
use crate::core::locus::Locus;
use crate::core::sample::Sample;

/// Probability of inclusion at `locus`.
///
/// With `s` the summed frequencies of the locus' alleles (`fmin` standing in
/// for alleles the table lacks), `PI = s² + θ·s·(1 − s)`. Markers without a
/// frequency table give 0.
#[must_use]
pub fn pi(locus: &Locus, freqs: &Freqs, theta: f64) -> f64 {
    if !freqs.has_flocus(locus.id()) {
        return 0.0;
    }

    let sum: f64 = locus
        .allele_ids()
        .filter_map(|id| freqs.frequency(locus.id(), id))
        .sum();

    sum.powi(2) + theta * sum * (1.0 - sum)
}

/// Probability of exclusion at `locus`, 0 when no inclusion probability can
/// be computed
#[must_use]
pub fn pe(locus: &Locus, freqs: &Freqs, theta: f64) -> f64 {
    if pi(locus, freqs, 0.0) == 0.0 {
        return 0.0;
    }
    1.0 - pi(locus, freqs, theta)
}

/// Combined probability of inclusion over the informative loci of `sample`.
///
/// Loci without a frequency table or without alleles are skipped. The first
/// informative locus starts the product, and a product that has dropped to 0
/// is restarted by the next locus. A sample without informative loci gives 0.
#[must_use]
pub fn cpi(sample: &Sample, freqs: &Freqs, theta: f64) -> f64 {
    sample
        .loci()
        .iter()
        .filter(|l| !l.is_empty() && freqs.has_flocus(l.id()))
        .map(|l| pi(l, freqs, theta))
        .fold(0.0, |acc, p| if acc == 0.0 { p } else { acc * p })
}

/// Combined probability of exclusion
#[must_use]
pub fn cpe(sample: &Sample, freqs: &Freqs, theta: f64) -> f64 {
    1.0 - cpi(sample, freqs, theta)
}

/// Random man not excluded: `1 / CPI`, or 0 when the CPI is 0
#[must_use]
pub fn rmne(sample: &Sample, freqs: &Freqs, theta: f64) -> f64 {
    let cpi = cpi(sample, freqs, theta);
    if cpi == 0.0 {
        return 0.0;
    }
    1.0 / cpi
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::allele::Allele;
    use crate::core::freqs::{Fallele, Flocus};
    use rstest::rstest;

    const EPS: f64 = 1e-12;

    fn locus(id: &str, alleles: &[f64]) -> Locus {
        Locus::with_alleles(id, alleles.iter().map(|&a| Allele::new(a)))
    }

    fn flocus(id: &str, falleles: &[(f64, f64)]) -> Flocus {
        Flocus::new(
            id,
            falleles.iter().map(|&(a, f)| Fallele::new(a, f)).collect(),
        )
    }

    fn vwa_fga() -> Freqs {
        Freqs::new(
            "Europe",
            0.001,
            vec![
                flocus("VWA", &[(17.0, 0.1), (21.0, 0.03)]),
                flocus("FGA", &[(20.1, 0.21), (31.0, 0.17)]),
            ],
        )
    }

    fn se33(fmin: f64) -> Freqs {
        Freqs::new(
            "Europe",
            fmin,
            vec![flocus("SE33", &[(17.0, 0.1), (21.0, 0.2), (21.3, 0.3)])],
        )
    }

    #[rstest]
    #[case::hardy_weinberg(locus("VWA", &[17.0, 21.0]), vwa_fga(), 0.0, 0.0169)]
    #[case::unlisted_allele(locus("VWA", &[17.0, 21.0, 27.1]), vwa_fga(), 0.0, 0.017161)]
    #[case::unknown_marker(locus("VWA", &[17.0, 21.0]), Freqs::new("Europe", 0.001, vec![]), 0.0, 0.0)]
    #[case::theta(locus("SE33", &[17.0, 21.0, 21.3]), se33(0.001), 0.01, 0.3624)]
    #[case::theta_fmin(locus("SE33", &[17.0, 21.0, 21.3]), se33(0.01), 0.03, 0.3672)]
    fn test_pi_pe(
        #[case] locus: Locus,
        #[case] freqs: Freqs,
        #[case] theta: f64,
        #[case] want_pi: f64,
    ) {
        let got = pi(&locus, &freqs, theta);
        assert!((got - want_pi).abs() < EPS, "PI {got} != {want_pi}");

        let want_pe = if want_pi == 0.0 { 0.0 } else { 1.0 - want_pi };
        let got = pe(&locus, &freqs, theta);
        assert!((got - want_pe).abs() < EPS, "PE {got} != {want_pe}");
    }

    #[test]
    fn test_cpi_skips_uninformative_loci() {
        let sample = Sample::with_loci(
            "stain",
            "",
            [
                locus("VWA", &[17.0, 21.0]),
                locus("FGA", &[20.1, 31.0]),
                locus("DYS391", &[12.0]),
                Locus::new("TH01"),
            ],
        );
        let freqs = vwa_fga();

        let want = 0.0169 * 0.1444;
        assert!((cpi(&sample, &freqs, 0.0) - want).abs() < EPS);
        assert!((cpe(&sample, &freqs, 0.0) - (1.0 - want)).abs() < EPS);
        assert!((rmne(&sample, &freqs, 0.0) - 1.0 / want).abs() < 1e-6);
        assert!((rmne(&sample, &freqs, 0.0) - 409.775_606_877_673_74).abs() < 1e-6);
    }

    #[test]
    fn test_no_informative_loci() {
        let sample = Sample::with_loci("stain", "", [locus("DYS391", &[12.0])]);
        let freqs = vwa_fga();
        assert_eq!(cpi(&sample, &freqs, 0.0), 0.0);
        assert_eq!(cpe(&sample, &freqs, 0.0), 1.0);
        assert_eq!(rmne(&sample, &freqs, 0.0), 0.0);
        assert_eq!(cpi(&Sample::default(), &freqs, 0.0), 0.0);
    }

    #[test]
    fn test_zero_product_restarts() {
        let freqs = Freqs::new(
            "Europe",
            0.0,
            vec![
                flocus("VWA", &[(17.0, 0.1)]),
                flocus("FGA", &[(20.0, 0.2)]),
            ],
        );
        // 99 is not listed and fmin is 0, so VWA contributes PI = 0
        let sample = Sample::with_loci(
            "stain",
            "",
            [locus("VWA", &[99.0]), locus("FGA", &[20.0])],
        );
        assert!((cpi(&sample, &freqs, 0.0) - 0.04).abs() < EPS);
    }
}
