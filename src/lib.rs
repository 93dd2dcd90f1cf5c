//! # str-het
//!
//! A library for profiling short tandem repeat (STR) heterozygosity against
//! Tandem Repeats Finder (TRF) quality scores.
//!
//! A reference STR panel and TRF call the same repeats independently, and
//! their coordinates routinely disagree by a base pair at either end.
//! `str-het` reconciles the two under that uncertainty, computes expected
//! heterozygosity for every locus with observed allele frequencies, and
//! summarises heterozygosity by TRF score bin for each repeat period 1–5.
//!
//! ## Features
//!
//! - **Fuzzy matching**: ±1 bp tolerance on start and stop, with a fixed priority order
//! - **Heterozygosity**: `1 - Σ f²` from observed allele frequencies
//! - **Residual loci**: reference loci without frequency data count as monomorphic
//! - **Score profiles**: per-bin mean and standard deviation of heterozygosity
//! - **Stutter check**: period-5 loci with alleles a whole number of repeat units
//!   from the wild type
//!
//! ## Example
//!
//! ```rust
//! use str_het::config::AnalysisConfig;
//! use str_het::core::annotation::{AnnotationIndex, AnnotationRecord};
//! use str_het::core::locus::Locus;
//! use str_het::core::reference::ReferenceLocusSet;
//! use str_het::core::types::AlleleObservation;
//! use str_het::pipeline::run_analysis;
//! use str_het::reconcile::FrequencyRecord;
//!
//! let mut index = AnnotationIndex::new();
//! index.insert("1", &AnnotationRecord {
//!     start: 100,
//!     stop: 110,
//!     repeat_unit: "AC".to_string(),
//!     score: 20,
//! });
//!
//! let frequencies = vec![FrequencyRecord {
//!     locus: Locus::new("1", 101, 111),
//!     alleles: vec![AlleleObservation::new(10, 0.5), AlleleObservation::new(12, 0.5)],
//! }];
//!
//! let report = run_analysis(
//!     &index,
//!     &ReferenceLocusSet::new(),
//!     &frequencies,
//!     &AnalysisConfig::default(),
//! );
//! assert_eq!(report.frequency_hits, 1);
//! assert_eq!(report.profiles[1].bins[0].mean, 0.5);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Loci, annotation index and reference locus set
//! - [`matching`]: Fuzzy locus matcher
//! - [`stats`]: Heterozygosity and repeat-unit-multiple classification
//! - [`reconcile`]: Frequency and residual reconciliation passes
//! - [`aggregate`]: Score-binned profiles and cutoff tables
//! - [`parsing`]: Parsers for TRF, reference and frequency files
//! - [`cli`]: Command-line interface implementation

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod pipeline;
pub mod reconcile;
pub mod report;
pub mod stats;

// Re-export commonly used types for convenience
pub use crate::config::AnalysisConfig;
pub use crate::core::annotation::AnnotationIndex;
pub use crate::core::locus::Locus;
pub use crate::core::reference::ReferenceLocusSet;
pub use crate::core::types::*;
pub use crate::matching::matcher::{find_match, LocusMatch};
pub use crate::report::AnalysisReport;
