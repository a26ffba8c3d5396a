use serde::Serialize;

use crate::core::locus::Locus;
use crate::core::sample::Sample;

/// Agreement of two single-person loci
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocusMatch {
    /// Identical allele sets, e.g. 15,16 and 15,16
    Full,
    /// The single allele of one side is part of the other side's pair,
    /// e.g. 15,16 and 15
    Fuzzy,
    /// Anything else, e.g. 15,16 and 15,22
    NoMatch,
}

/// Classify two loci of at most two alleles each.
///
/// Both loci must carry at least one allele.
#[must_use]
pub fn match_loci(l1: &Locus, l2: &Locus) -> LocusMatch {
    let contains_all = |a: &Locus, b: &Locus| a.allele_ids().all(|id| b.has_allele(id));
    match (l1.len(), l2.len()) {
        (1, 2) | (2, 1) | (1, 1) | (2, 2) if contains_all(l1, l2) && contains_all(l2, l1) => {
            LocusMatch::Full
        }
        (1, 2) if contains_all(l1, l2) => LocusMatch::Fuzzy,
        (2, 1) if contains_all(l2, l1) => LocusMatch::Fuzzy,
        _ => LocusMatch::NoMatch,
    }
}

/// Result of comparing two single-person profiles locus by locus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MatchScore {
    /// Loci called in both profiles
    pub compared: usize,

    /// Loci with identical allele sets
    pub full: usize,

    /// Loci where a single allele is part of the other side's pair
    pub fuzzy: usize,

    /// Loci that disagree
    pub mismatched: usize,

    /// Effective mismatches accepted for the same person: a quarter of the
    /// locus count of the shorter profile, rounded down
    pub tolerance: usize,
}

impl MatchScore {
    /// Compare `p1` against `p2`.
    ///
    /// Returns `None` if either profile has a locus with more than two
    /// alleles, since such a profile cannot stem from a single person.
    #[must_use]
    pub fn calculate(p1: &Sample, p2: &Sample) -> Option<Self> {
        if p1.max_alleles() > 2 || p2.max_alleles() > 2 {
            return None;
        }

        let mut score = Self {
            tolerance: p1.loci().len().min(p2.loci().len()) / 4,
            ..Self::default()
        };

        for l1 in p1.loci().iter().filter(|l| !l.is_empty()) {
            let Some(l2) = p2.locus(l1.id()).filter(|l| !l.is_empty()) else {
                continue;
            };
            score.compared += 1;
            match match_loci(l1, l2) {
                LocusMatch::Full => score.full += 1,
                LocusMatch::Fuzzy => score.fuzzy += 1,
                LocusMatch::NoMatch => score.mismatched += 1,
            }
        }

        Some(score)
    }

    /// Mismatches with fuzzy matches counting half, rounded down
    #[must_use]
    pub fn effective_mismatches(&self) -> usize {
        self.mismatched + self.fuzzy / 2
    }

    #[must_use]
    pub fn is_same_person(&self) -> bool {
        self.effective_mismatches() <= self.tolerance
    }
}

/// Whether `p1` and `p2` are profiles of the same person, allowing a
/// quarter of the shorter profile's loci as effective mismatches
#[must_use]
pub fn same_person(p1: &Sample, p2: &Sample) -> bool {
    MatchScore::calculate(p1, p2).is_some_and(|s| s.is_same_person())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::allele::Allele;
    use rstest::rstest;

    fn locus(id: &str, alleles: &[f64]) -> Locus {
        Locus::with_alleles(id, alleles.iter().map(|&a| Allele::new(a)))
    }

    fn profile(id: &str, loci: &[(&str, &[f64])]) -> Sample {
        Sample::with_loci(id, "", loci.iter().map(|(l, a)| locus(l, a)))
    }

    #[rstest]
    #[case::identical_pairs(&[15.0, 16.0], &[15.0, 16.0], LocusMatch::Full)]
    #[case::identical_singles(&[15.0], &[15.0], LocusMatch::Full)]
    #[case::single_in_pair(&[15.0], &[15.0, 16.0], LocusMatch::Fuzzy)]
    #[case::pair_around_single(&[15.0, 16.0], &[16.0], LocusMatch::Fuzzy)]
    #[case::single_outside_pair(&[14.0], &[15.0, 16.0], LocusMatch::NoMatch)]
    #[case::one_shared(&[15.0, 16.0], &[15.0, 22.0], LocusMatch::NoMatch)]
    #[case::disjoint_pairs(&[15.0, 16.0], &[21.0, 22.0], LocusMatch::NoMatch)]
    #[case::different_singles(&[15.0], &[16.0], LocusMatch::NoMatch)]
    fn test_match_loci(#[case] a: &[f64], #[case] b: &[f64], #[case] want: LocusMatch) {
        assert_eq!(match_loci(&locus("VWA", a), &locus("VWA", b)), want);
    }

    #[test]
    fn test_identical_profiles() {
        let p = profile(
            "p",
            &[
                ("VWA", &[16.0, 17.0]),
                ("TH01", &[7.0, 9.3]),
                ("FGA", &[21.0]),
                ("D3S1358", &[14.0, 16.0]),
            ],
        );
        let score = MatchScore::calculate(&p, &p).unwrap();
        assert_eq!(score.compared, 4);
        assert_eq!(score.full, 4);
        assert_eq!(score.tolerance, 1);
        assert!(same_person(&p, &p));
    }

    #[test]
    fn test_tolerance_from_shorter_profile() {
        let long = profile(
            "long",
            &[
                ("VWA", &[16.0, 17.0]),
                ("TH01", &[7.0, 9.3]),
                ("FGA", &[21.0]),
                ("D3S1358", &[14.0, 16.0]),
                ("D8S1179", &[10.0, 13.0]),
                ("D18S51", &[14.0]),
                ("D1S1656", &[11.0]),
                ("D2S441", &[11.0]),
            ],
        );
        let short = profile(
            "short",
            &[
                ("VWA", &[16.0, 18.0]),
                ("TH01", &[7.0, 9.3]),
                ("FGA", &[21.0]),
                ("D3S1358", &[14.0, 16.0]),
            ],
        );
        let score = MatchScore::calculate(&long, &short).unwrap();
        assert_eq!(score.tolerance, 1);
        assert_eq!(score.mismatched, 1);
        assert!(score.is_same_person());

        let worse = profile(
            "worse",
            &[
                ("VWA", &[16.0, 18.0]),
                ("TH01", &[6.0, 9.3]),
                ("FGA", &[21.0]),
                ("D3S1358", &[14.0, 16.0]),
            ],
        );
        assert!(!same_person(&long, &worse));
    }

    #[test]
    fn test_fuzzy_counts_half() {
        let p1 = profile(
            "p1",
            &[
                ("VWA", &[16.0, 17.0]),
                ("TH01", &[7.0, 9.3]),
                ("FGA", &[21.0, 22.0]),
                ("D3S1358", &[14.0, 16.0]),
            ],
        );
        let p2 = profile(
            "p2",
            &[
                ("VWA", &[16.0]),
                ("TH01", &[9.3]),
                ("FGA", &[21.0]),
                ("D3S1358", &[14.0, 16.0]),
            ],
        );
        let score = MatchScore::calculate(&p1, &p2).unwrap();
        assert_eq!(score.fuzzy, 3);
        // 3 fuzzy matches count as one mismatch
        assert_eq!(score.effective_mismatches(), 1);
        assert!(score.is_same_person());
    }

    #[test]
    fn test_mixtures_are_never_the_same_person() {
        let mixture = profile("m", &[("D22S1045", &[16.0, 17.0, 18.0])]);
        let person = profile("p", &[("D22S1045", &[16.0, 17.0])]);
        assert!(MatchScore::calculate(&mixture, &person).is_none());
        assert!(!same_person(&mixture, &person));
        assert!(!same_person(&person, &mixture));
    }

    #[test]
    fn test_uncalled_loci_are_skipped() {
        let p1 = Sample::with_loci(
            "p1",
            "",
            [locus("VWA", &[16.0, 17.0]), Locus::new("TH01")],
        );
        let p2 = profile("p2", &[("VWA", &[16.0, 17.0]), ("TH01", &[6.0])]);
        let score = MatchScore::calculate(&p1, &p2).unwrap();
        assert_eq!(score.compared, 1);
        assert_eq!(score.full, 1);
    }

    #[test]
    fn test_up_against_reference_profile() {
        let up = profile(
            "UP1",
            &[
                ("D21S11", &[30.0, 31.0]),
                ("VWA", &[16.0, 17.0]),
                ("TH01", &[7.0, 9.3]),
                ("FGA", &[21.0]),
                ("D3S1358", &[14.0, 16.0]),
                ("D8S1179", &[10.0, 13.0]),
                ("D18S51", &[14.0]),
                ("D1S1656", &[11.0]),
                ("D2S441", &[11.0]),
                ("D22S1045", &[16.0]),
                ("D16S539", &[12.0]),
                ("D2S1338", &[17.0]),
                ("D19S433", &[14.0]),
                ("AMEL", &[-2.0, -1.0]),
            ],
        );
        let reference = profile(
            "ref",
            &[
                ("SE33", &[16.0, 18.0]),
                ("D21S11", &[30.0]),
                ("VWA", &[14.0, 16.0]),
                ("TH01", &[6.0, 9.3]),
                ("FGA", &[20.0, 22.0]),
                ("D3S1358", &[16.0]),
                ("D8S1179", &[11.0, 13.0]),
                ("D18S51", &[16.0, 20.0]),
                ("D1S1656", &[12.0, 19.3]),
                ("D2S441", &[10.0, 14.0]),
                ("D10S1248", &[13.0, 14.0]),
                ("D12S391", &[16.0, 18.0]),
                ("D22S1045", &[15.0, 16.0]),
                ("D16S539", &[9.0, 12.0]),
                ("D2S1338", &[17.0, 25.0]),
                ("D19S433", &[15.0, 15.2]),
                ("AMEL", &[-2.0]),
            ],
        );

        let score = MatchScore::calculate(&up, &reference).unwrap();
        assert_eq!(score.compared, 14);
        assert_eq!(score.fuzzy, 6);
        assert_eq!(score.mismatched, 8);
        assert_eq!(score.tolerance, 3);
        assert!(!same_person(&up, &reference));
    }
}
