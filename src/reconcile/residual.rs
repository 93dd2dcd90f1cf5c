use std::collections::HashSet;

use serde::Serialize;
use tracing::info;

use crate::core::annotation::AnnotationIndex;
use crate::core::locus::Locus;
use crate::core::reference::ReferenceLocusSet;
use crate::core::types::Sample;
use crate::matching::matcher::find_match;
use crate::reconcile::samples::PeriodSamples;

/// Counts from the residual pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResidualSummary {
    pub hits: usize,
    pub misses: usize,
    /// Reference loci already handled by the frequency pass
    pub skipped: usize,
}

/// Add a zero-heterozygosity sample for every reference locus that has a TRF
/// annotation but no frequency record.
///
/// Such loci showed no polymorphism in the dataset; they are counted as
/// monomorphic so the aggregate is not limited to polymorphic loci.
pub fn reconcile_residual(
    reference: &ReferenceLocusSet,
    index: &AnnotationIndex,
    processed: &HashSet<Locus>,
    samples: &mut PeriodSamples,
) -> ResidualSummary {
    let mut summary = ResidualSummary::default();

    for locus in reference.iter() {
        if processed.contains(locus) {
            summary.skipped += 1;
            continue;
        }

        match find_match(index, locus) {
            Some(hit) => {
                summary.hits += 1;
                samples.push(
                    hit.entry.repeat_period,
                    Sample::new(hit.entry.quality_score, 0.0),
                );
            }
            None => summary.misses += 1,
        }
    }

    info!("Remaining reference loci with TRF entries: {}", summary.hits);
    info!(
        "Remaining reference loci without TRF entries: {}",
        summary.misses
    );

    summary
}
