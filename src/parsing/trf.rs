//! Parser for Tandem Repeats Finder `.dat` output.
//!
//! A `.dat` file opens with a free-text preamble (program banner, `Sequence:`
//! and `Parameters:` lines) followed by one whitespace-separated record per
//! repeat:
//!
//! ```text
//! start stop period copies consensus_size %match %indel score A C G T entropy consensus repeat
//! 10001 10468 6 77.2 6 95 3 801 33 51 0 15 1.43 TAACCC TAACCCTAACCC...
//! ```
//!
//! Only `start` (col 0), `stop` (col 1), `score` (col 7) and the consensus
//! repeat unit (col 13) are used. Records are the lines that start with a digit.

use std::path::Path;

use tracing::{debug, warn};

use crate::core::annotation::AnnotationRecord;
use crate::parsing::{read_text, ParseError};

const MIN_TRF_FIELDS: usize = 14;
const COL_START: usize = 0;
const COL_STOP: usize = 1;
const COL_SCORE: usize = 7;
const COL_CONSENSUS: usize = 13;

/// TRF records for one chromosome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrfChromosome {
    pub chrom: String,
    pub records: Vec<AnnotationRecord>,
}

/// Chromosome name from a TRF output file name.
///
/// Everything from the first `.fa` on is dropped, as is a leading `chr`:
/// `chr1.fa.2.7.7.80.10.50.500.dat` becomes `1`. Without `.fa` the file
/// stem is used.
pub fn chrom_from_file_name(file_name: &str) -> String {
    let base = match file_name.find(".fa") {
        Some(pos) => &file_name[..pos],
        None => Path::new(file_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(file_name),
    };
    base.strip_prefix("chr").unwrap_or(base).to_string()
}

/// Parse every TRF file in `dir`, in file-name order.
///
/// Hidden files and subdirectories are skipped.
///
/// # Errors
///
/// Returns `ParseError::Io` if the directory or a file cannot be read,
/// `ParseError::InvalidRecord` for a malformed record, or
/// `ParseError::NoTrfFiles` if the directory holds no files.
pub fn parse_trf_directory(dir: &Path) -> Result<Vec<TrfChromosome>, ParseError> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            warn!("Skipping non-UTF-8 file name in {}", dir.display());
            continue;
        };
        if name.starts_with('.') || !entry.file_type()?.is_file() {
            continue;
        }
        paths.push(path);
    }
    paths.sort();

    if paths.is_empty() {
        return Err(ParseError::NoTrfFiles(dir.display().to_string()));
    }

    paths.iter().map(|path| parse_trf_file(path.as_path())).collect()
}

/// Parse one TRF file, taking the chromosome name from its file name
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::InvalidRecord` for a malformed record.
pub fn parse_trf_file(path: &Path) -> Result<TrfChromosome, ParseError> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    let chrom = chrom_from_file_name(file_name);

    let content = read_text(path)?;
    let records = parse_trf_text(&content, &path.display().to_string())?;
    debug!("Read {} TRF records for chromosome {chrom}", records.len());

    Ok(TrfChromosome { chrom, records })
}

/// Parse TRF records from text
///
/// # Errors
///
/// Returns `ParseError::InvalidRecord` for the first malformed record.
pub fn parse_trf_text(text: &str, origin: &str) -> Result<Vec<AnnotationRecord>, ParseError> {
    let mut records = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if !line.starts_with(|c: char| c.is_ascii_digit()) {
            continue;
        }

        let line_num = i + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < MIN_TRF_FIELDS {
            return Err(ParseError::invalid(
                origin,
                line_num,
                format!(
                    "expected at least {MIN_TRF_FIELDS} fields, found {}",
                    fields.len()
                ),
                line,
            ));
        }

        let int_field = |col: usize, what: &str| {
            fields[col].parse::<i64>().map_err(|_| {
                ParseError::invalid(
                    origin,
                    line_num,
                    format!("invalid {what} '{}'", fields[col]),
                    line,
                )
            })
        };

        records.push(AnnotationRecord {
            start: int_field(COL_START, "start")?,
            stop: int_field(COL_STOP, "stop")?,
            score: int_field(COL_SCORE, "score")?,
            repeat_unit: fields[COL_CONSENSUS].to_string(),
        });
    }

    Ok(records)
}
