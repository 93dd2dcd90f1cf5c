//! Command-line interface for str-het.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **analyze**: Reconcile frequencies and reference loci with TRF and profile heterozygosity
//! - **lookup**: Resolve individual loci against the TRF annotations
//!
//! ## Usage
//!
//! ```text
//! # Full analysis, TRF output in ./source_results
//! str-het analyze frequencies.txt reference_loci.txt
//!
//! # Binned profile rows for plotting
//! str-het analyze frequencies.txt reference_loci.txt --trf-dir trf/ --format tsv
//!
//! # Which TRF entry does a locus resolve to?
//! str-het lookup --trf-dir trf/ 1:10001-10024 X:500-530
//! ```

use std::path::Path;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use crate::core::annotation::AnnotationIndex;
use crate::parsing::trf::parse_trf_directory;

pub mod analyze;
pub mod lookup;

/// Directory searched for TRF output when `--trf-dir` is not given
pub const DEFAULT_TRF_DIR: &str = "source_results";

#[derive(Parser)]
#[command(name = "str-het")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Profile STR heterozygosity against Tandem Repeats Finder scores")]
#[command(
    long_about = "str-het matches STR loci with observed allele frequencies, and the loci of a reference STR panel, to Tandem Repeats Finder annotations.\n\nCoordinates may disagree by one base at either end. For each repeat period 1-5 it reports:\n- Mean and standard deviation of heterozygosity per TRF score bin\n- Counts of heterozygous loci at or below a per-period score cutoff\n- Period-5 loci whose alleles differ by whole repeat units"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Reconcile loci with TRF annotations and profile heterozygosity by score
    Analyze(analyze::AnalyzeArgs),

    /// Resolve loci against TRF annotations with ±1 bp tolerance
    Lookup(lookup::LookupArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Load every TRF file in `dir` into an annotation index
pub(crate) fn load_annotation_index(dir: &Path) -> anyhow::Result<AnnotationIndex> {
    let chromosomes = parse_trf_directory(dir)
        .with_context(|| format!("Failed to read TRF annotations from {}", dir.display()))?;

    let index = AnnotationIndex::from_chromosomes(
        chromosomes
            .iter()
            .map(|c| (c.chrom.as_str(), c.records.as_slice())),
    );

    info!(
        "Loaded {} TRF annotations from {} files ({} excluded by period, {} duplicates)",
        index.len(),
        chromosomes.len(),
        index.excluded(),
        index.overwritten()
    );

    Ok(index)
}
