//! Results handed to reporting and plotting.

use serde::Serialize;

use crate::aggregate::{CutoffTable, PeriodProfile};
use crate::config::AnalysisConfig;
use crate::reconcile::frequency::MultipleBandTally;
use crate::reconcile::residual::ResidualSummary;

/// Sizes of the loaded inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexSummary {
    pub annotations: usize,
    /// TRF records dropped for a period outside 1..=5
    pub excluded_periods: usize,
    pub duplicates_overwritten: usize,
    pub reference_loci: usize,
    pub frequency_records: usize,
}

/// Complete output of one analysis run
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub config: AnalysisConfig,
    pub index: IndexSummary,
    pub frequency_hits: usize,
    pub frequency_misses: usize,
    pub multiple_bands: Vec<MultipleBandTally>,
    pub residual: ResidualSummary,
    pub profiles: Vec<PeriodProfile>,
    pub cutoffs: Vec<CutoffTable>,
}
