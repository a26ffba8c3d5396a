//! Major-component (dominant contributor) extraction from mixed stains.
//!
//! At each locus the peaks are ranked by height. A major component is called
//! when either
//!
//! - the highest peak exceeds the second by more than `major_comp_ratio` and
//!   is above `min_homozygous` (homozygous major), or
//! - the two highest peaks are balanced within `hetero_imbalance`, the weaker
//!   one is above `weak_signal`, and, if there is a third peak, the second
//!   exceeds it by more than `major_comp_ratio` (heterozygous major).
//!
//! A lone peak is a homozygous major if it reaches `min_homozygous`.

use tracing::trace;

use crate::config::MixtureParams;
use crate::core::locus::Locus;
use crate::core::sample::Sample;
use crate::interpret::aggregation::ID_SEPARATOR;

/// Internal quality-control markers; never interpreted
pub const QC_MARKERS: [&str; 2] = ["IQCS", "IQCL"];

/// Prefix of the IDs of major-component samples
pub const MAJOR_COMPONENT_PREFIX: &str = "MC";

/// Major component at one locus. The result has the locus ID and no alleles
/// when no major component can be called.
#[must_use]
pub fn major_component_locus(locus: &Locus, params: &MixtureParams) -> Locus {
    if QC_MARKERS.contains(&locus.id()) {
        return locus.clone();
    }

    let sorted = locus.sort_by_height();
    let (a1, a2, rest) = match sorted.alleles() {
        [] => return Locus::new(locus.id()),
        [single] => {
            return if single.height >= params.min_homozygous {
                locus.clone()
            } else {
                trace!("{}: single peak below homozygous threshold", locus.id());
                Locus::new(locus.id())
            };
        }
        [a1, a2, rest @ ..] => (*a1, *a2, rest),
    };

    if a1.height / a2.height > params.major_comp_ratio && a1.height > params.min_homozygous {
        trace!("{}: homozygous major component {}", locus.id(), a1.name());
        return Locus::with_alleles(locus.id(), [a1]);
    }

    if a2.height / a1.height > params.hetero_imbalance && a2.height > params.weak_signal {
        let Some(a3) = rest.first() else {
            return locus.clone();
        };
        if a2.height / a3.height > params.major_comp_ratio {
            trace!(
                "{}: heterozygous major component {}/{}",
                locus.id(),
                a1.name(),
                a2.name()
            );
            return Locus::with_alleles(locus.id(), [a1, a2]);
        }
    }

    trace!("{}: no major component", locus.id());
    Locus::new(locus.id())
}

/// Major component of a sample: every locus where one could be called.
///
/// The result is tagged with the unknown kit.
#[must_use]
pub fn major_component(sample: &Sample, params: &MixtureParams) -> Sample {
    let mut result = Sample::new(
        format!("{MAJOR_COMPONENT_PREFIX}{ID_SEPARATOR}{}", sample.id),
        sample.source.clone(),
    );

    for locus in sample.loci() {
        let mc = major_component_locus(locus, params);
        if !mc.is_empty() {
            result.add_locus(mc);
        }
    }

    result.tag_unknown_kit();
    result
}

/// Whether a major component can be called at any locus of `sample`
#[must_use]
pub fn has_major_component(sample: &Sample, params: &MixtureParams) -> bool {
    sample
        .loci()
        .iter()
        .any(|l| !major_component_locus(l, params).is_empty())
}
