//! Lookup command - resolve individual loci through the fuzzy matcher.

use std::path::PathBuf;

use clap::Args;

use crate::cli::{load_annotation_index, OutputFormat, DEFAULT_TRF_DIR};
use crate::core::locus::Locus;
use crate::matching::matcher::{find_match, LocusMatch};

#[derive(Args)]
pub struct LookupArgs {
    /// Loci to resolve, as chrom:start-stop
    #[arg(required = true)]
    pub loci: Vec<Locus>,

    /// Directory of per-chromosome TRF .dat files
    #[arg(long, default_value = DEFAULT_TRF_DIR)]
    pub trf_dir: PathBuf,
}

/// Execute the lookup command
///
/// # Errors
///
/// Returns an error if the TRF annotations cannot be loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: LookupArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let index = load_annotation_index(&args.trf_dir)?;
    if verbose {
        eprintln!("Loaded {} TRF annotations", index.len());
    }

    let results: Vec<(&Locus, Option<LocusMatch>)> = args
        .loci
        .iter()
        .map(|locus| (locus, find_match(&index, locus)))
        .collect();

    match format {
        OutputFormat::Text => {
            for (locus, hit) in &results {
                match hit {
                    Some(m) => println!(
                        "{locus} → {} offset {} score {} period {}",
                        m.locus, m.offset, m.entry.quality_score, m.entry.repeat_period
                    ),
                    None => println!("{locus} → no match"),
                }
            }
        }
        OutputFormat::Json => {
            let output: Vec<_> = results
                .iter()
                .map(|(locus, hit)| {
                    serde_json::json!({
                        "query": locus.to_string(),
                        "match": hit.as_ref().map(|m| serde_json::json!({
                            "locus": m.locus.to_string(),
                            "offset": m.offset,
                            "score": m.entry.quality_score,
                            "period": m.entry.repeat_period,
                        })),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("query\tmatch\tstart_offset\tstop_offset\tscore\tperiod");
            for (locus, hit) in &results {
                match hit {
                    Some(m) => println!(
                        "{locus}\t{}\t{}\t{}\t{}\t{}",
                        m.locus, m.offset.start, m.offset.stop, m.entry.quality_score, m.entry.repeat_period
                    ),
                    None => println!("{locus}\t.\t.\t.\t.\t."),
                }
            }
        }
    }

    Ok(())
}
