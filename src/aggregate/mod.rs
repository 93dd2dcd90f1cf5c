//! Score-binned aggregation of heterozygosity samples.
//!
//! - [`binning`]: per-period mean and population standard deviation of
//!   heterozygosity in fixed-width TRF score bins (default `[0,150)` in steps of 5)
//! - [`cutoffs`]: per-period 2×2 table of score cutoff against the
//!   heterozygosity threshold, including the exceedance count
//!   (`score <= cutoff` and `H > 0.02`)

pub mod binning;
pub mod cutoffs;

pub use binning::{aggregate_profiles, BinSummary, PeriodProfile};
pub use cutoffs::{cutoff_tables, CutoffTable};
