//! Composite (union) and consensus (intersection) profiles across samples.

use std::collections::BTreeSet;

use crate::core::allele::Allele;
use crate::core::locus::Locus;
use crate::core::sample::Sample;
use crate::core::types::{AggregationMode, Linkage};

/// Separator between sample IDs in aggregated IDs and provenance trails
pub const ID_SEPARATOR: &str = "::";

/// Union profile: every allele seen at a locus in any sample
#[must_use]
pub fn composite(samples: &[Sample], linkage: Linkage) -> Sample {
    aggregate(samples, linkage, AggregationMode::Composite)
}

/// Intersection profile: only alleles seen at a locus in every sample
#[must_use]
pub fn consensus(samples: &[Sample], linkage: Linkage) -> Sample {
    aggregate(samples, linkage, AggregationMode::Consensus)
}

/// Aggregate `samples` locus by locus.
///
/// Only loci whose linkage passes `linkage` are considered. Loci appear in
/// lexicographic order of their IDs and carry allele IDs only. Loci left
/// without alleles are omitted. An empty input gives an empty sample.
#[must_use]
pub fn aggregate(samples: &[Sample], linkage: Linkage, mode: AggregationMode) -> Sample {
    if samples.is_empty() {
        return Sample::default();
    }

    let locus_ids: BTreeSet<&str> = samples
        .iter()
        .flat_map(Sample::loci)
        .filter(|l| linkage.admits(l.linkage()))
        .map(Locus::id)
        .collect();

    let id = joined_id(samples);
    let source = format!("{mode}{ID_SEPARATOR}{linkage}{ID_SEPARATOR}{id}");
    let mut result = Sample::new(id, source);

    for locus_id in locus_ids {
        let loci: Vec<Option<&Locus>> = samples.iter().map(|s| s.locus(locus_id)).collect();
        let aggregated = aggregate_locus(locus_id, &loci, mode);
        if !aggregated.is_empty() {
            result.add_locus(aggregated);
        }
    }

    result
}

fn aggregate_locus(id: &str, loci: &[Option<&Locus>], mode: AggregationMode) -> Locus {
    let mut seen: Vec<f64> = Vec::new();
    for locus in loci.iter().flatten() {
        for allele_id in locus.allele_ids() {
            if !seen.contains(&allele_id) {
                seen.push(allele_id);
            }
        }
    }

    let kept = seen.into_iter().filter(|&allele_id| match mode {
        AggregationMode::Composite => true,
        AggregationMode::Consensus => loci
            .iter()
            .all(|l| l.is_some_and(|l| l.has_allele(allele_id))),
    });

    Locus::with_alleles(id, kept.map(Allele::new))
}

/// Sorted, de-duplicated sample IDs joined with `::`
#[must_use]
pub fn joined_id(samples: &[Sample]) -> String {
    let ids: BTreeSet<&str> = samples.iter().map(|s| s.id.as_str()).collect();
    ids.into_iter().collect::<Vec<_>>().join(ID_SEPARATOR)
}
