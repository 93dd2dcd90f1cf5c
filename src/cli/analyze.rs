use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::{load_annotation_index, OutputFormat, DEFAULT_TRF_DIR};
use crate::config::AnalysisConfig;
use crate::parsing::frequency::parse_frequency_file;
use crate::parsing::reference::parse_reference_file;
use crate::pipeline::run_analysis;
use crate::report::AnalysisReport;

/// Arguments for the analyze command
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Observed allele frequencies: a locus followed by length-frequency pairs per line
    #[arg(required = true)]
    pub frequencies: PathBuf,

    /// Reference STR loci: chrom:start-stop in the first column
    #[arg(required = true)]
    pub reference: PathBuf,

    /// Directory of per-chromosome TRF .dat files
    #[arg(long, default_value = DEFAULT_TRF_DIR)]
    pub trf_dir: PathBuf,

    /// JSON file overriding analysis thresholds
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Width of TRF score bins (overrides config)
    #[arg(long)]
    pub bin_width: Option<i64>,

    /// Exclusive upper bound of the binned score range (overrides config)
    #[arg(long)]
    pub bin_upper: Option<i64>,
}

/// Execute the analyze command
///
/// # Errors
///
/// Returns an error if the configuration is invalid or any input is malformed.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: AnalyzeArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let config = build_config(&args)?;

    let index = load_annotation_index(&args.trf_dir)?;
    let frequencies = parse_frequency_file(&args.frequencies).with_context(|| {
        format!(
            "Failed to read frequency file {}",
            args.frequencies.display()
        )
    })?;
    let reference = parse_reference_file(&args.reference).with_context(|| {
        format!(
            "Failed to read reference loci {}",
            args.reference.display()
        )
    })?;

    if verbose {
        eprintln!(
            "Loaded {} TRF annotations, {} frequency records, {} reference loci",
            index.len(),
            frequencies.len(),
            reference.len()
        );
    }

    let report = run_analysis(&index, &reference, &frequencies, &config);

    match format {
        OutputFormat::Text => print_text_report(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Tsv => print_tsv_profiles(&report),
    }

    Ok(())
}

fn build_config(args: &AnalyzeArgs) -> anyhow::Result<AnalysisConfig> {
    let mut config = match &args.config {
        Some(path) => AnalysisConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AnalysisConfig::default(),
    };

    if let Some(width) = args.bin_width {
        config.binning.width = width;
    }
    if let Some(upper) = args.bin_upper {
        config.binning.upper = upper;
    }
    config.validate()?;

    Ok(config)
}

fn print_text_report(report: &AnalysisReport) {
    let idx = &report.index;
    println!(
        "\nTRF annotations: {} ({} excluded by period, {} duplicates overwritten)",
        idx.annotations, idx.excluded_periods, idx.duplicates_overwritten
    );

    println!(
        "Frequency records: {} total → {} matched, {} without TRF entry",
        idx.frequency_records, report.frequency_hits, report.frequency_misses
    );
    println!(
        "Reference loci: {} total → {} already processed, {} matched, {} without TRF entry",
        idx.reference_loci, report.residual.skipped, report.residual.hits, report.residual.misses
    );

    println!(
        "\nPeriod {} repeat-unit multiples:",
        report.config.multiple_period
    );
    for tally in &report.multiple_bands {
        println!(
            "   score {:<8} {} flagged of {} ({} with H > {})",
            tally.band.to_string(),
            tally.flagged,
            tally.total,
            tally.flagged_heterozygous,
            report.config.heterozygosity_threshold
        );
    }

    println!(
        "\nScore cutoffs (heterozygous means H > {}):",
        report.config.heterozygosity_threshold
    );
    println!("   period  cutoff  total  low+het  high+het  low+mono  high+mono");
    for t in &report.cutoffs {
        println!(
            "   {:>6}  {:>6}  {:>5}  {:>7}  {:>8}  {:>8}  {:>9}",
            t.period.to_string(),
            t.cutoff,
            t.total,
            t.low_score_heterozygous,
            t.high_score_heterozygous,
            t.low_score_monomorphic,
            t.high_score_monomorphic
        );
    }

    for profile in &report.profiles {
        println!(
            "\nPeriod {}: {} binned, {} outside [{}, {})",
            profile.period,
            profile.binned(),
            profile.excluded,
            report.config.binning.lower,
            report.config.binning.upper
        );
        for bin in &profile.bins {
            println!(
                "   {:>6.1}  n={:<6} mean={:.4}  stdev={:.4}",
                bin.midpoint, bin.count, bin.mean, bin.stdev
            );
        }
    }
}

fn print_tsv_profiles(report: &AnalysisReport) {
    println!("period\tbin_lower\tbin_upper\tmidpoint\tcount\tmean\tstdev");
    for profile in &report.profiles {
        for bin in &profile.bins {
            println!(
                "{}\t{}\t{}\t{:.1}\t{}\t{:.6}\t{:.6}",
                profile.period, bin.lower, bin.upper, bin.midpoint, bin.count, bin.mean, bin.stdev
            );
        }
    }
}
