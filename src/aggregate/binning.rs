use serde::Serialize;

use crate::config::BinningConfig;
use crate::core::types::{RepeatPeriod, Sample};
use crate::reconcile::samples::PeriodSamples;

/// Heterozygosity summary of one non-empty score bin
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BinSummary {
    pub lower: i64,
    /// Exclusive; the last bin stops at the configured upper bound
    pub upper: i64,
    pub midpoint: f64,
    pub count: usize,
    pub mean: f64,
    /// Population standard deviation
    pub stdev: f64,
}

/// Binned heterozygosity profile for one repeat period
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodProfile {
    pub period: RepeatPeriod,
    pub bins: Vec<BinSummary>,
    /// Samples whose score fell outside the binned range
    pub excluded: usize,
}

impl PeriodProfile {
    /// Samples that landed in some bin
    pub fn binned(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }
}

/// Mean and population standard deviation
fn mean_and_stdev(values: &[f64]) -> (f64, f64) {
    #[allow(clippy::cast_precision_loss)]
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, variance.sqrt())
}

/// Bin one period's samples by score
pub fn profile_period(period: RepeatPeriod, samples: &[Sample], binning: &BinningConfig) -> PeriodProfile {
    let mut bins: Vec<Vec<f64>> = vec![Vec::new(); binning.bin_count()];
    let mut excluded = 0;

    for sample in samples {
        match binning.bin_index(sample.score).and_then(|i| bins.get_mut(i)) {
            Some(bin) => bin.push(sample.heterozygosity),
            None => excluded += 1,
        }
    }

    let bins = bins
        .iter()
        .enumerate()
        .filter(|(_, values)| !values.is_empty())
        .map(|(i, values)| {
            let lower = binning.bin_lower(i);
            let upper = binning.bin_upper(i);
            let (mean, stdev) = mean_and_stdev(values);
            #[allow(clippy::cast_precision_loss)] // scores are small integers
            let midpoint = 0.5 * (lower as f64 + upper as f64);
            BinSummary {
                lower,
                upper,
                midpoint,
                count: values.len(),
                mean,
                stdev,
            }
        })
        .collect();

    PeriodProfile {
        period,
        bins,
        excluded,
    }
}

/// Bin every period's samples by score
pub fn aggregate_profiles(samples: &PeriodSamples, binning: &BinningConfig) -> Vec<PeriodProfile> {
    samples
        .iter()
        .map(|(period, s)| profile_period(period, s, binning))
        .collect()
}
