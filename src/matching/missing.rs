//! Alleles of a person that a stain does not show.

use crate::core::locus::Locus;
use crate::core::sample::Sample;
use crate::core::types::{Linkage, Sex};

/// The alleles of `person` missing from `stain`, as a sample named
/// `Missing_<person>_from_<stain>`.
///
/// Only stain loci at which the person is typed are considered, and only
/// loci with at least one missing allele are listed. Y-linked loci are
/// ignored for a female person. The stain's kit is carried over so reports
/// can list the loci the stain was typed for.
#[must_use]
pub fn missing_from(person: &Sample, stain: &Sample) -> Sample {
    let mut missing = Sample::new(
        format!("Missing_{}_from_{}", person.id, stain.id),
        String::new(),
    );
    missing.assign_kit(stain.kit.clone());

    let female = person.sex() == Sex::Female;
    for stain_locus in stain.loci() {
        if female && stain_locus.linkage() == Linkage::YLinked {
            continue;
        }
        let Some(person_locus) = person.locus(stain_locus.id()) else {
            continue;
        };

        let absent = Locus::with_alleles(
            stain_locus.id(),
            person_locus
                .alleles()
                .iter()
                .filter(|a| !stain_locus.has_allele(a.id))
                .copied(),
        );
        if !absent.is_empty() {
            missing.add_locus(absent);
        }
    }

    missing
}

/// Number of alleles of `person` missing from `stain`
#[must_use]
pub fn missing_count(person: &Sample, stain: &Sample) -> usize {
    missing_from(person, stain).total_alleles()
}

/// Whether `person` is typed at any locus of `stain`
#[must_use]
pub fn share_any_loci(person: &Sample, stain: &Sample) -> bool {
    stain.loci().iter().any(|l| person.has_locus(l.id()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::kit::{Kit, Str};
    use crate::core::allele::{Allele, X_ALLELE, Y_ALLELE};
    use pretty_assertions::assert_eq;

    fn locus(id: &str, alleles: &[f64]) -> Locus {
        Locus::with_alleles(id, alleles.iter().map(|&a| Allele::new(a)))
    }

    fn person() -> Sample {
        Sample::with_loci(
            "person",
            "",
            [
                locus("SE33", &[18.0, 29.0]),
                locus("VWA", &[9.0, 11.0]),
                locus("TH01", &[17.0, 17.2]),
            ],
        )
    }

    fn stain() -> Sample {
        let mut stain = Sample::with_loci(
            "stain",
            "",
            [
                locus("SE33", &[18.0, 29.0, 29.3, 31.0]),
                locus("VWA", &[7.0, 11.0, 17.0]),
                locus("Penta", &[4.0, 7.1]),
            ],
        );
        stain.assign_kit(Kit::new(
            "Alpha",
            vec![Str::new("SE33"), Str::new("VWA"), Str::new("PENTA")],
        ));
        stain
    }

    #[test]
    fn test_missing_from() {
        let missing = missing_from(&person(), &stain());
        assert_eq!(missing.id, "Missing_person_from_stain");
        assert_eq!(missing.kit.id, "Alpha");
        assert_eq!(missing.loci(), &[locus("VWA", &[9.0])]);
        assert_eq!(missing_count(&person(), &stain()), 1);
    }

    #[test]
    fn test_nothing_missing() {
        let missing = missing_from(&person(), &person());
        assert!(missing.loci().is_empty());
        assert_eq!(missing_count(&person(), &person()), 0);
    }

    #[test]
    fn test_y_loci_ignored_for_women() {
        let stain = Sample::with_loci("stain", "", [locus("DYS391", &[10.0])]);
        let woman = Sample::with_loci(
            "woman",
            "",
            [locus("AMEL", &[X_ALLELE]), locus("DYS391", &[11.0])],
        );
        let man = Sample::with_loci(
            "man",
            "",
            [locus("AMEL", &[X_ALLELE, Y_ALLELE]), locus("DYS391", &[11.0])],
        );
        assert_eq!(missing_count(&woman, &stain), 0);
        assert_eq!(missing_count(&man, &stain), 1);
    }

    #[test]
    fn test_share_any_loci() {
        assert!(share_any_loci(&person(), &stain()));

        let other = Sample::with_loci("other", "", [locus("FGA", &[21.0])]);
        assert!(!share_any_loci(&other, &stain()));

        // an uncalled locus is not shared
        let uncalled = Sample::with_loci("uncalled", "", [Locus::new("VWA")]);
        assert!(!share_any_loci(&uncalled, &stain()));
    }
}
