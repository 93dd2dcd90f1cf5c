//! Parsers for the three analysis inputs.
//!
//! This module provides parsers for:
//!
//! - **TRF `.dat` files** ([`trf`]): one file per chromosome, loaded from a directory
//! - **Reference locus lists** ([`reference`]): first column is `chrom:start-stop`
//! - **Allele frequency files** ([`frequency`]): a locus followed by `length-frequency` pairs
//!
//! Files ending in `.gz` are decompressed transparently.
//!
//! Every parser is strict: a record that cannot be parsed aborts the load with
//! [`ParseError::InvalidRecord`], naming the input, the 1-based line number and
//! the raw line. Silently skipping records would bias the downstream statistics.
//!
//! ## Example
//!
//! ```rust
//! use str_het::parsing::frequency::parse_frequency_text;
//!
//! let records = parse_frequency_text("1:100-110 10-0.5;12-0.5\n", "inline").unwrap();
//! assert_eq!(records[0].alleles.len(), 2);
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use thiserror::Error;

pub mod frequency;
pub mod reference;
pub mod trf;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{origin} line {line}: {message}: '{raw}'")]
    InvalidRecord {
        origin: String,
        line: usize,
        message: String,
        raw: String,
    },

    #[error("No TRF files found in {0}")]
    NoTrfFiles(String),
}

impl ParseError {
    pub(crate) fn invalid(origin: &str, line: usize, message: impl Into<String>, raw: &str) -> Self {
        Self::InvalidRecord {
            origin: origin.to_string(),
            line,
            message: message.into(),
            raw: raw.to_string(),
        }
    }
}

/// Read a whole text file, decompressing it when the name ends in `.gz`
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened or decoded.
pub fn read_text(path: &Path) -> Result<String, ParseError> {
    let file = File::open(path)?;
    let is_gz = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("gz"));

    let mut reader: Box<dyn BufRead> = if is_gz {
        Box::new(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(content)
}

/// Iterate `(1-based line number, trimmed line)` skipping blank and `#` lines
pub(crate) fn data_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}
