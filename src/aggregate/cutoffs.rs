use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::core::types::{RepeatPeriod, Sample};
use crate::reconcile::samples::PeriodSamples;

/// Score cutoff × heterozygosity threshold cross-tabulation for one period.
///
/// "Low" means `score <= cutoff`; "heterozygous" means `H > threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CutoffTable {
    pub period: RepeatPeriod,
    pub cutoff: i64,
    pub total: usize,
    pub low_score_heterozygous: usize,
    pub high_score_heterozygous: usize,
    pub low_score_monomorphic: usize,
    pub high_score_monomorphic: usize,
}

impl CutoffTable {
    /// Samples at or below the cutoff that are nonetheless heterozygous
    pub fn exceedance(&self) -> usize {
        self.low_score_heterozygous
    }

    pub fn tabulate(period: RepeatPeriod, samples: &[Sample], cutoff: i64, threshold: f64) -> Self {
        let mut table = Self {
            period,
            cutoff,
            total: 0,
            low_score_heterozygous: 0,
            high_score_heterozygous: 0,
            low_score_monomorphic: 0,
            high_score_monomorphic: 0,
        };

        for sample in samples {
            table.total += 1;
            let low = sample.score <= cutoff;
            let cell = match (sample.heterozygosity > threshold, low) {
                (true, true) => &mut table.low_score_heterozygous,
                (true, false) => &mut table.high_score_heterozygous,
                (false, true) => &mut table.low_score_monomorphic,
                (false, false) => &mut table.high_score_monomorphic,
            };
            *cell += 1;
        }

        table
    }
}

/// Cross-tabulate every period against its configured cutoff
pub fn cutoff_tables(samples: &PeriodSamples, config: &AnalysisConfig) -> Vec<CutoffTable> {
    samples
        .iter()
        .map(|(period, s)| {
            CutoffTable::tabulate(
                period,
                s,
                config.score_cutoff(period),
                config.heterozygosity_threshold,
            )
        })
        .collect()
}
