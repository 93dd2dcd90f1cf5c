//! Reconciliation of observed frequencies and reference loci with TRF annotations.
//!
//! Two passes run in order:
//!
//! 1. [`frequency`]: every locus with observed allele frequencies is matched to
//!    a TRF annotation and contributes `(score, H)`.
//! 2. [`residual`]: reference loci the first pass did not resolve are matched
//!    too and contribute `(score, 0.0)`.
//!
//! The second pass reads the set of loci resolved by the first, so a locus
//! contributes to at most one of them. Samples accumulate in a
//! [`PeriodSamples`](samples::PeriodSamples) threaded through both passes.

pub mod frequency;
pub mod residual;
pub mod samples;

pub use frequency::{reconcile_frequencies, FrequencyReconciliation, FrequencyRecord};
pub use residual::{reconcile_residual, ResidualSummary};
pub use samples::PeriodSamples;
