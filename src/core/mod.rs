//! Core data types for STR locus reconciliation.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Locus`](locus::Locus): A `chrom:start-stop` interval, compared by exact equality
//! - [`AnnotationIndex`](annotation::AnnotationIndex): TRF annotations keyed by locus
//! - [`ReferenceLocusSet`](reference::ReferenceLocusSet): Loci from the reference STR panel
//! - [`RepeatPeriod`](types::RepeatPeriod), [`Sample`](types::Sample),
//!   [`AlleleObservation`](types::AlleleObservation): Value types shared by the engine
//!
//! ## Coordinate systems
//!
//! The reference panel and TRF call the same repeats with boundaries that may
//! disagree by a base pair on either side:
//!
//! | Source    | Example locus   |
//! |-----------|-----------------|
//! | Reference | `1:10001-10024` |
//! | TRF       | `1:10000-10024` |
//!
//! Exact-key lookup lives here; tolerance for the disagreement is handled by
//! [`crate::matching`].

pub mod annotation;
pub mod locus;
pub mod reference;
pub mod types;
