//! Iterative deconvolution of mixed stains into unknown-person (UP) profiles.
//!
//! The strongest contributor of a stain is called as its major component,
//! recorded as a UP and subtracted from the stain. The residual is then
//! interpreted again until no autosomal major component is left.

use tracing::debug;

use crate::config::MixtureParams;
use crate::core::allele::Allele;
use crate::core::locus::Locus;
use crate::core::sample::Sample;
use crate::core::types::Linkage;
use crate::interpret::aggregation::{composite, joined_id, ID_SEPARATOR};
use crate::interpret::major_component::{major_component, MAJOR_COMPONENT_PREFIX, QC_MARKERS};

/// Marker in a provenance trail for the removal of a person
const REMOVAL_TAG: &str = "REM";

/// Infer the unknown persons contributing to `stain`, strongest first.
///
/// UPs are named `<stain>::UP<n>` with `n` counting from 1. Each UP records
/// in its source the steps that led to it, e.g. `stain::MC::REM::MC` for the
/// second one. Only autosomal loci are kept. The result may be empty.
#[must_use]
pub fn infer_unknown_persons(stain: &Sample, params: &MixtureParams) -> Vec<Sample> {
    let mut ups: Vec<Sample> = Vec::new();
    let mut residual = stain.clone();
    let mut source = stain.id.clone();

    loop {
        let mc = major_component(&residual, params);
        source = format!("{source}{ID_SEPARATOR}{MAJOR_COMPONENT_PREFIX}");

        let loci: Vec<&Locus> = mc
            .loci()
            .iter()
            .filter(|l| l.linkage() == Linkage::Autosomal && !QC_MARKERS.contains(&l.id()))
            .collect();
        if loci.is_empty() {
            break;
        }

        let up = new_up(
            format!("{}{ID_SEPARATOR}UP{}", stain.id, ups.len() + 1),
            source.clone(),
            loci,
        );
        debug!(
            "Inferred {} with {} loci from '{}'",
            up.id,
            up.loci().len(),
            stain.id
        );

        residual = remove_person_from_sample(&residual, &up);
        ups.push(up);
        source = format!("{source}{ID_SEPARATOR}{REMOVAL_TAG}");
    }

    ups
}

/// A UP profile: allele IDs only, tagged with the unknown kit
fn new_up<'a>(
    id: impl Into<String>,
    source: impl Into<String>,
    loci: impl IntoIterator<Item = &'a Locus>,
) -> Sample {
    let mut up = Sample::with_loci(id, source, loci.into_iter().map(Locus::ids_only));
    up.tag_unknown_kit();
    up
}

/// Subtract the alleles of `person` from `stain`.
///
/// Loci left without alleles are dropped. The source of the result records
/// the removal as `<source>::REM:<person>`.
#[must_use]
pub fn remove_person_from_sample(stain: &Sample, person: &Sample) -> Sample {
    let mut result = Sample::new(
        stain.id.clone(),
        format!(
            "{}{ID_SEPARATOR}{REMOVAL_TAG}:{}",
            stain.source, person.id
        ),
    );

    for locus in stain.loci() {
        let remaining = match person.locus(locus.id()) {
            Some(p) => remove_person_from_locus(locus, p),
            None => locus.clone(),
        };
        if !remaining.is_empty() {
            result.add_locus(remaining);
        }
    }

    result
}

/// Subtract the alleles of a person's locus from a stain locus.
///
/// A person locus without alleles leaves the stain locus unchanged. One with
/// more than two alleles is not a single person, so nothing of the stain
/// locus is trusted and the result is empty.
#[must_use]
pub fn remove_person_from_locus(locus: &Locus, person: &Locus) -> Locus {
    match person.len() {
        0 => locus.clone(),
        1 | 2 => Locus::with_alleles(
            locus.id(),
            locus
                .alleles()
                .iter()
                .filter(|a| !person.has_allele(a.id))
                .copied(),
        ),
        _ => Locus::new(locus.id()),
    }
}

/// Unite UPs believed to be the same person into one profile named `id`.
///
/// Only autosomal loci are considered. At each locus the UPs' alleles are
/// combined; a locus with one allele is kept, one with two alleles only if
/// the UPs that called a single allele there agree on it, and one with more
/// alleles is dropped. The source is the joined IDs of `ups`.
#[must_use]
pub fn unite_ups(ups: &[Sample], id: &str) -> Sample {
    if ups.is_empty() {
        return Sample::default();
    }

    let union = composite(ups, Linkage::Autosomal);
    let loci = union.loci().iter().filter(|l| match l.len() {
        1 => true,
        2 => single_allele_calls(ups, l.id()).len() < 2,
        _ => false,
    });

    new_up(id, joined_id(ups), loci)
}

/// Distinct alleles of the UPs that have exactly one allele at `locus_id`
fn single_allele_calls(ups: &[Sample], locus_id: &str) -> Vec<f64> {
    let mut calls: Vec<f64> = Vec::new();
    for up in ups {
        if let Some([Allele { id, .. }]) = up.locus(locus_id).map(Locus::alleles) {
            if !calls.contains(id) {
                calls.push(*id);
            }
        }
    }
    calls
}

/// Whether `up` has a locus or an allele that `other` lacks
#[must_use]
pub fn has_new_alleles(up: &Sample, other: &Sample) -> bool {
    up.loci().iter().any(|l| match other.locus(l.id()) {
        Some(o) if !o.is_empty() => l.allele_ids().any(|a| !o.has_allele(a)),
        _ => true,
    })
}
