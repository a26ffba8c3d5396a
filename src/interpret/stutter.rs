//! Peak-height correction for PCR stutter.
//!
//! A true peak A loses a fraction `minus` of its height to a stutter peak one
//! repeat shorter and a fraction `plus` to one a repeat longer. When two
//! alleles are one repeat apart their observed heights therefore contain each
//! other's stutter, which is removed here.

use tracing::trace;

use crate::config::StutterRatios;
use crate::core::allele::Allele;
use crate::core::locus::Locus;
use crate::core::sample::Sample;

/// Prefix prepended to the source of a corrected sample
pub const CORRECTED_SOURCE_PREFIX: &str = "correctedAlleleHeight::";

/// Correct the allele heights of every locus of `sample` for stutter.
///
/// Info and kit are carried over unchanged.
#[must_use]
pub fn correct_stutter(sample: &Sample, ratios: &StutterRatios) -> Sample {
    let mut result = Sample::with_loci(
        sample.id.clone(),
        format!("{CORRECTED_SOURCE_PREFIX}{}", sample.source),
        sample.loci().iter().map(|l| correct_locus(l, ratios)),
    );
    result.info = sample.info.clone();
    result.assign_kit(sample.kit.clone());
    result
}

/// Correct the allele heights at one locus for stutter.
///
/// Alleles are walked in ascending ID order so the corrected height of a
/// predecessor is known when its successor is reached. Loci with fewer than
/// two alleles are returned unchanged.
#[must_use]
pub fn correct_locus(locus: &Locus, ratios: &StutterRatios) -> Locus {
    let alleles = locus.alleles();
    if alleles.len() < 2 {
        return locus.clone();
    }

    let mut corrected: Vec<Allele> = Vec::with_capacity(alleles.len());
    for (i, a) in alleles.iter().enumerate() {
        // corrected height of an allele one repeat shorter, if there is one
        let predecessor = i
            .checked_sub(1)
            .filter(|&p| alleles[p].id == a.id - 1.0)
            .and_then(|_| corrected.last())
            .map(|p| p.height);
        let successor = alleles.get(i + 1).filter(|b| b.id == a.id + 1.0);

        let height = match (successor, predecessor) {
            (Some(b), predecessor) => true_peak(
                a.height,
                b.height,
                predecessor.unwrap_or(0.0),
                ratios,
            ),
            (None, Some(p)) => a.height - p * ratios.plus,
            (None, None) => a.height,
        };
        corrected.push(Allele { height, ..*a });
    }

    Locus::with_alleles(locus.id(), corrected)
}

/// True height of peak A given its observed height, the observed height of
/// its successor B one repeat longer, and the true height of its predecessor
/// one repeat shorter (0 if there is none).
///
/// Solving `A_true = A_obs - B_fwd` with `B_fwd = minus * (B_obs - plus * A_true)`
/// gives `B_fwd = minus * (B_obs - plus * A_obs) / (1 - minus * plus)`.
fn true_peak(a_obs: f64, b_obs: f64, a_minus1_true: f64, ratios: &StutterRatios) -> f64 {
    let StutterRatios { minus, plus } = *ratios;
    let own = a_obs - a_minus1_true * plus;
    let forward = minus * (b_obs - plus * a_obs) / (1.0 - minus * plus);
    trace!(
        own,
        back = plus * a_obs,
        successor_true = b_obs - plus * a_obs,
        forward,
        denominator = 1.0 - minus * plus,
        "true peak"
    );
    own - forward
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::kit::{Kit, Str};
    use pretty_assertions::assert_eq;

    const EPS: f64 = 1e-9;

    fn locus(id: &str, peaks: &[(f64, f64)]) -> Locus {
        Locus::with_alleles(
            id,
            peaks
                .iter()
                .map(|&(a, h)| Allele::new(a).with_height(h).with_area(h * 10.0)),
        )
    }

    fn heights(locus: &Locus) -> Vec<f64> {
        locus.alleles().iter().map(|a| a.height).collect()
    }

    #[test]
    fn test_isolated_alleles_unchanged() {
        let input = locus("VWA", &[(14.0, 1000.0), (17.0, 800.0)]);
        assert_eq!(correct_locus(&input, &StutterRatios::default()), input);
    }

    #[test]
    fn test_single_allele_unchanged() {
        let input = locus("VWA", &[(14.0, 1000.0)]);
        assert_eq!(correct_locus(&input, &StutterRatios::default()), input);
    }

    #[test]
    fn test_adjacent_pair() {
        let ratios = StutterRatios {
            minus: 0.1,
            plus: 0.02,
        };
        let input = locus("TH01", &[(8.0, 200.0), (9.0, 2000.0)]);
        let result = correct_locus(&input, &ratios);

        // A = 8: 200 - 0.1 * (2000 - 0.02 * 200) / (1 - 0.002)
        let a = 200.0 - 0.1 * (2000.0 - 4.0) / 0.998;
        // B = 9: 2000 - a * 0.02
        let b = 2000.0 - a * 0.02;
        let got = heights(&result);
        assert!((got[0] - a).abs() < EPS, "{} != {a}", got[0]);
        assert!((got[1] - b).abs() < EPS, "{} != {b}", got[1]);
    }

    #[test]
    fn test_run_of_three() {
        let ratios = StutterRatios {
            minus: 0.1,
            plus: 0.0,
        };
        let input = locus("D8S1179", &[(12.0, 100.0), (13.0, 1000.0), (14.0, 1000.0)]);
        let got = heights(&correct_locus(&input, &ratios));

        // without plus stutter each allele only loses its successor's back stutter
        assert!((got[0] - 0.0).abs() < EPS);
        assert!((got[1] - 900.0).abs() < EPS);
        assert!((got[2] - 1000.0).abs() < EPS);
    }

    #[test]
    fn test_run_of_three_with_forward_stutter() {
        let ratios = StutterRatios {
            minus: 0.1,
            plus: 0.02,
        };
        let input = locus("D8S1179", &[(12.0, 100.0), (13.0, 1000.0), (14.0, 1000.0)]);
        let got = heights(&correct_locus(&input, &ratios));

        let a = 100.0 - 0.1 * (1000.0 - 2.0) / 0.998;
        // 13 loses the forward stutter of the corrected 12 peak
        let b = (1000.0 - 0.02 * a) - 0.1 * (1000.0 - 20.0) / 0.998;
        let c = 1000.0 - 0.02 * b;
        assert!((got[0] - a).abs() < EPS, "{} != {a}", got[0]);
        assert!((got[1] - b).abs() < EPS, "{} != {b}", got[1]);
        assert!((got[2] - c).abs() < EPS, "{} != {c}", got[2]);
        assert!((got[1] - 901.8036).abs() < 1e-4);
        assert!((got[2] - 981.9639).abs() < 1e-4);
    }

    #[test]
    fn test_zero_ratios_are_identity() {
        let ratios = StutterRatios {
            minus: 0.0,
            plus: 0.0,
        };
        let input = locus("FGA", &[(20.0, 500.0), (21.0, 700.0), (22.0, 900.0)]);
        assert_eq!(heights(&correct_locus(&input, &ratios)), heights(&input));
    }

    #[test]
    fn test_area_and_size_are_kept() {
        let input = locus("TH01", &[(8.0, 200.0), (9.0, 2000.0)]);
        let result = correct_locus(&input, &StutterRatios::default());
        assert_eq!(result.alleles()[0].area, 2000.0);
        assert_eq!(result.alleles()[1].area, 20000.0);
    }

    #[test]
    fn test_correct_sample() {
        let mut sample = Sample::with_loci(
            "s1",
            "run1.txt",
            [
                locus("TH01", &[(8.0, 200.0), (9.0, 2000.0)]),
                locus("VWA", &[(14.0, 1000.0)]),
            ],
        );
        sample.info.insert("Operator".to_string(), "AB".to_string());
        sample.assign_kit(Kit::new("Alpha", vec![Str::new("TH01"), Str::new("VWA")]));

        let result = correct_stutter(&sample, &StutterRatios::default());
        assert_eq!(result.id, "s1");
        assert_eq!(result.source, "correctedAlleleHeight::run1.txt");
        assert_eq!(result.kit.id, "Alpha");
        assert_eq!(result.info.get("Operator").map(String::as_str), Some("AB"));
        assert_eq!(result.locus("VWA"), sample.locus("VWA"));
        assert!(result.locus("TH01").unwrap().alleles()[0].height < 200.0);

        // input is untouched
        assert_eq!(heights(sample.locus("TH01").unwrap()), vec![200.0, 2000.0]);
    }
}
