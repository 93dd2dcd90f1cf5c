use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocusParseError {
    #[error("Missing ':' between chromosome and coordinates in '{0}'")]
    MissingColon(String),

    #[error("Missing '-' between start and stop in '{0}'")]
    MissingDash(String),

    #[error("Empty chromosome name in '{0}'")]
    EmptyChromosome(String),

    #[error("Invalid coordinate '{value}' in '{locus}'")]
    InvalidCoordinate { locus: String, value: String },
}

/// A genomic interval identified by chromosome, start and stop.
///
/// Loci are compared by exact equality of all three fields. The textual form
/// is `chrom:start-stop`, e.g. `1:10000-10024`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Locus {
    pub chrom: String,
    pub start: i64,
    pub stop: i64,
}

impl Locus {
    pub fn new(chrom: impl Into<String>, start: i64, stop: i64) -> Self {
        Self {
            chrom: chrom.into(),
            start,
            stop,
        }
    }

    /// Return this locus shifted independently on start and stop, or `None`
    /// if either coordinate would overflow
    #[must_use]
    pub fn shifted(&self, start_delta: i64, stop_delta: i64) -> Option<Self> {
        Some(Self {
            chrom: self.chrom.clone(),
            start: self.start.checked_add(start_delta)?,
            stop: self.stop.checked_add(stop_delta)?,
        })
    }
}

impl fmt::Display for Locus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.chrom, self.start, self.stop)
    }
}

impl FromStr for Locus {
    type Err = LocusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        // Chromosome names may themselves contain ':' (e.g. HLA contigs)
        let (chrom, coords) = s
            .rsplit_once(':')
            .ok_or_else(|| LocusParseError::MissingColon(s.to_string()))?;

        if chrom.is_empty() {
            return Err(LocusParseError::EmptyChromosome(s.to_string()));
        }

        let (start, stop) = coords
            .split_once('-')
            .ok_or_else(|| LocusParseError::MissingDash(s.to_string()))?;

        let parse_coord = |value: &str| {
            value
                .parse::<i64>()
                .map_err(|_| LocusParseError::InvalidCoordinate {
                    locus: s.to_string(),
                    value: value.to_string(),
                })
        };

        Ok(Self::new(chrom, parse_coord(start)?, parse_coord(stop)?))
    }
}
