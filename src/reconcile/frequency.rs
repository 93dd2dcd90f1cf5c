use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::{AnalysisConfig, ScoreBand};
use crate::core::annotation::AnnotationIndex;
use crate::core::locus::Locus;
use crate::core::types::{AlleleObservation, Sample};
use crate::matching::matcher::find_match;
use crate::reconcile::samples::PeriodSamples;
use crate::stats::heterozygosity::{allele_heterozygosity, classify_repeat_multiple};

/// Observed allele-length distribution at one locus
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyRecord {
    pub locus: Locus,
    pub alleles: Vec<AlleleObservation>,
}

/// Repeat-unit-multiple counts for one score band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MultipleBandTally {
    pub band: ScoreBand,
    /// Loci of the checked period with a score in the band
    pub total: usize,
    /// Loci carrying an allele a whole number of repeat units from the wild type
    pub flagged: usize,
    /// Flagged loci whose heterozygosity exceeds the threshold
    pub flagged_heterozygous: usize,
}

impl MultipleBandTally {
    pub fn new(band: ScoreBand) -> Self {
        Self {
            band,
            total: 0,
            flagged: 0,
            flagged_heterozygous: 0,
        }
    }
}

/// Everything the frequency pass produces
#[derive(Debug, Clone)]
pub struct FrequencyReconciliation {
    pub samples: PeriodSamples,
    /// Nominal loci of every frequency record, matched or not
    pub processed: HashSet<Locus>,
    pub hits: usize,
    pub misses: usize,
    pub bands: Vec<MultipleBandTally>,
}

/// Match every frequency record to a TRF annotation and record its
/// `(score, heterozygosity)` sample under the annotation's repeat period.
pub fn reconcile_frequencies<'r, I>(
    index: &AnnotationIndex,
    records: I,
    config: &AnalysisConfig,
) -> FrequencyReconciliation
where
    I: IntoIterator<Item = &'r FrequencyRecord>,
{
    let mut samples = PeriodSamples::new();
    let mut processed = HashSet::new();
    let mut hits = 0;
    let mut misses = 0;
    let mut bands: Vec<MultipleBandTally> = config
        .multiple_bands
        .iter()
        .copied()
        .map(MultipleBandTally::new)
        .collect();

    for record in records {
        processed.insert(record.locus.clone());

        let Some(hit) = find_match(index, &record.locus) else {
            misses += 1;
            continue;
        };

        hits += 1;

        let period = hit.entry.repeat_period;
        let score = hit.entry.quality_score;
        let h = allele_heterozygosity(&record.alleles);
        samples.push(period, Sample::new(score, h));

        if period != config.multiple_period {
            continue;
        }

        for tally in bands.iter_mut().filter(|t| t.band.contains(score)) {
            tally.total += 1;

            if classify_repeat_multiple(&record.alleles, period).has_multiple {
                tally.flagged += 1;
                if h > config.heterozygosity_threshold {
                    tally.flagged_heterozygous += 1;
                }
                debug!(
                    "Repeat-unit multiple at {} (period {}, score {}, H {:.4})",
                    hit.locus, period, score, h
                );
            }
        }
    }

    info!("Frequency records matched to TRF entries: {hits}");
    info!("Frequency records without TRF entries: {misses}");
    for tally in &bands {
        info!(
            "Period {} score band {}: {} flagged of {} ({} with H > {})",
            config.multiple_period,
            tally.band,
            tally.flagged,
            tally.total,
            tally.flagged_heterozygous,
            config.heterozygosity_threshold
        );
    }

    FrequencyReconciliation {
        samples,
        processed,
        hits,
        misses,
        bands,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::annotation::AnnotationRecord;
    use crate::core::types::RepeatPeriod;

    fn index() -> AnnotationIndex {
        let mut index = AnnotationIndex::new();
        let mut add = |start, stop, unit: &str, score| {
            index.insert(
                "1",
                &AnnotationRecord {
                    start,
                    stop,
                    repeat_unit: unit.to_string(),
                    score,
                },
            );
        };
        add(100, 110, "AC", 20);
        add(200, 230, "AAAAT", 22);
        add(300, 330, "AAAAT", 28);
        add(400, 430, "AAAAT", 40);
        index
    }

    fn record(locus: &str, alleles: &[(i64, f64)]) -> FrequencyRecord {
        FrequencyRecord {
            locus: locus.parse().unwrap(),
            alleles: alleles
                .iter()
                .map(|&(l, f)| AlleleObservation::new(l, f))
                .collect(),
        }
    }

    #[test]
    fn test_hits_and_misses() {
        let records = vec![
            record("1:101-111", &[(10, 0.5), (12, 0.3), (14, 0.2)]),
            record("1:500-510", &[(10, 1.0)]),
        ];
        let result = reconcile_frequencies(&index(), &records, &AnalysisConfig::default());

        assert_eq!(result.hits, 1);
        assert_eq!(result.misses, 1);
        assert!(result.processed.contains(&Locus::new("1", 101, 111)));
        assert!(result.processed.contains(&Locus::new("1", 500, 510)));

        let p2 = result.samples.get(RepeatPeriod::new(2).unwrap());
        assert_eq!(p2.len(), 1);
        assert_eq!(p2[0].score, 20);
        assert!((p2[0].heterozygosity - 0.62).abs() < 1e-12);
    }

    #[test]
    fn test_period_five_bands() {
        let records = vec![
            // [20,25): flagged, heterozygous
            record("1:200-230", &[(15, 0.6), (20, 0.3), (25, 0.1)]),
            // [25,32]: not flagged
            record("1:300-330", &[(15, 0.9), (17, 0.1)]),
            // score 40 is outside both bands
            record("1:400-430", &[(15, 0.5), (20, 0.5)]),
        ];
        let result = reconcile_frequencies(&index(), &records, &AnalysisConfig::default());

        assert_eq!(result.bands.len(), 2);
        let low = result.bands[0];
        assert_eq!((low.total, low.flagged, low.flagged_heterozygous), (1, 1, 1));
        let high = result.bands[1];
        assert_eq!((high.total, high.flagged, high.flagged_heterozygous), (1, 0, 0));

        assert_eq!(result.samples.get(RepeatPeriod::new(5).unwrap()).len(), 3);
    }

    #[test]
    fn test_flagged_below_threshold() {
        let records = vec![record("1:200-230", &[(15, 0.995), (20, 0.005)])];
        let result = reconcile_frequencies(&index(), &records, &AnalysisConfig::default());
        let low = result.bands[0];
        assert_eq!((low.total, low.flagged, low.flagged_heterozygous), (1, 1, 0));
    }
}
