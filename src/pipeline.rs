//! End-to-end analysis over already-loaded inputs.

use tracing::info;

use crate::aggregate::{aggregate_profiles, cutoff_tables};
use crate::config::AnalysisConfig;
use crate::core::annotation::AnnotationIndex;
use crate::core::reference::ReferenceLocusSet;
use crate::reconcile::{reconcile_frequencies, reconcile_residual, FrequencyRecord};
use crate::report::{AnalysisReport, IndexSummary};

/// Run both reconciliation passes and aggregate the resulting samples.
///
/// The frequency pass completes before the residual pass starts, since the
/// latter skips every locus the former saw.
pub fn run_analysis(
    index: &AnnotationIndex,
    reference: &ReferenceLocusSet,
    frequencies: &[FrequencyRecord],
    config: &AnalysisConfig,
) -> AnalysisReport {
    let frequency = reconcile_frequencies(index, frequencies, config);
    info!("Finished processing frequency records");

    let mut samples = frequency.samples;
    let residual = reconcile_residual(reference, index, &frequency.processed, &mut samples);
    info!("Finished processing remaining reference loci");

    let cutoffs = cutoff_tables(&samples, config);
    for table in &cutoffs {
        info!(
            "Period {}: {} samples with score <= {} and H > {}",
            table.period,
            table.exceedance(),
            table.cutoff,
            config.heterozygosity_threshold
        );
    }

    let profiles = aggregate_profiles(&samples, &config.binning);

    AnalysisReport {
        config: config.clone(),
        index: IndexSummary {
            annotations: index.len(),
            excluded_periods: index.excluded(),
            duplicates_overwritten: index.overwritten(),
            reference_loci: reference.len(),
            frequency_records: frequencies.len(),
        },
        frequency_hits: frequency.hits,
        frequency_misses: frequency.misses,
        multiple_bands: frequency.bands,
        residual,
        profiles,
        cutoffs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::annotation::AnnotationRecord;
    use crate::core::locus::Locus;
    use crate::core::types::AlleleObservation;

    fn annotation(start: i64, stop: i64, unit: &str, score: i64) -> AnnotationRecord {
        AnnotationRecord {
            start,
            stop,
            repeat_unit: unit.to_string(),
            score,
        }
    }

    #[test]
    fn test_run_analysis() {
        let chr1 = vec![
            annotation(100, 110, "AC", 20),
            annotation(200, 210, "AC", 22),
            annotation(300, 310, "A", 60),
            annotation(400, 460, "AACCGGT", 90),
        ];
        let index = AnnotationIndex::from_chromosomes([("1", chr1.as_slice())]);

        let reference: ReferenceLocusSet = vec![
            Locus::new("1", 101, 111), // also in the frequency data
            Locus::new("1", 201, 209), // residual hit
            Locus::new("1", 300, 310), // residual hit
            Locus::new("1", 900, 910), // residual miss
        ]
        .into_iter()
        .collect();

        let frequencies = vec![FrequencyRecord {
            locus: Locus::new("1", 101, 111),
            alleles: vec![
                AlleleObservation::new(10, 0.5),
                AlleleObservation::new(12, 0.5),
            ],
        }];

        let report = run_analysis(&index, &reference, &frequencies, &AnalysisConfig::default());

        assert_eq!(report.index.annotations, 3);
        assert_eq!(report.index.excluded_periods, 1);
        assert_eq!(report.frequency_hits, 1);
        assert_eq!(report.frequency_misses, 0);
        assert_eq!(report.residual.skipped, 1);
        assert_eq!(report.residual.hits, 2);
        assert_eq!(report.residual.misses, 1);

        // Period 2: (20, 0.5) from frequencies, (22, 0.0) from the residual pass
        let p2 = &report.profiles[1];
        assert_eq!(p2.bins.len(), 1);
        assert_eq!(p2.bins[0].count, 2);
        assert!((p2.bins[0].mean - 0.25).abs() < 1e-12);
        assert!((p2.bins[0].stdev - 0.25).abs() < 1e-12);

        assert_eq!(report.cutoffs[1].low_score_heterozygous, 1);
        assert_eq!(report.cutoffs[1].low_score_monomorphic, 1);
        assert_eq!(report.cutoffs[0].high_score_monomorphic, 1);
    }

    #[test]
    fn test_frequency_miss_skipped_by_residual_pass() {
        let chr1 = vec![annotation(100, 110, "AC", 20)];
        let index = AnnotationIndex::from_chromosomes([("1", chr1.as_slice())]);

        let reference: ReferenceLocusSet = vec![Locus::new("1", 900, 910)].into_iter().collect();
        let frequencies = vec![FrequencyRecord {
            locus: Locus::new("1", 900, 910),
            alleles: vec![AlleleObservation::new(10, 1.0)],
        }];

        let report = run_analysis(&index, &reference, &frequencies, &AnalysisConfig::default());

        assert_eq!(report.frequency_misses, 1);
        assert_eq!(report.residual.skipped, 1);
        assert_eq!(report.residual.misses, 0);
        assert_eq!(report.residual.hits, 0);
    }
}
