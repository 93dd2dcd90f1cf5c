use serde::Serialize;

use crate::core::types::{RepeatPeriod, Sample, MAX_PERIOD};

/// Sample sequences for repeat periods 1..=5, in insertion order
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct PeriodSamples {
    by_period: [Vec<Sample>; MAX_PERIOD as usize],
}

impl PeriodSamples {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, period: RepeatPeriod, sample: Sample) {
        self.by_period[period.index()].push(sample);
    }

    pub fn get(&self, period: RepeatPeriod) -> &[Sample] {
        &self.by_period[period.index()]
    }

    /// Iterate `(period, samples)` in ascending period order
    pub fn iter(&self) -> impl Iterator<Item = (RepeatPeriod, &[Sample])> {
        RepeatPeriod::all().map(move |p| (p, self.get(p)))
    }

    /// Total samples across all periods
    pub fn len(&self) -> usize {
        self.by_period.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
