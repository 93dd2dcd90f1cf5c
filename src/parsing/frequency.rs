//! Parser for observed allele-frequency files.
//!
//! One locus per line: the locus followed by `length-frequency` pairs separated
//! by `;`, `,` or whitespace.
//!
//! ```text
//! 1:10000-10024 12-0.75;15-0.25
//! 1:20000-20010 10-1.0
//! ```

use std::path::Path;

use crate::core::locus::Locus;
use crate::core::types::AlleleObservation;
use crate::parsing::{data_lines, read_text, ParseError};
use crate::reconcile::frequency::FrequencyRecord;

/// Parse a frequency file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::InvalidRecord` for the first malformed line.
pub fn parse_frequency_file(path: &Path) -> Result<Vec<FrequencyRecord>, ParseError> {
    let content = read_text(path)?;
    parse_frequency_text(&content, &path.display().to_string())
}

/// Parse frequency records from text
///
/// # Errors
///
/// Returns `ParseError::InvalidRecord` for the first malformed line.
pub fn parse_frequency_text(text: &str, origin: &str) -> Result<Vec<FrequencyRecord>, ParseError> {
    data_lines(text)
        .map(|(line_num, line)| {
            parse_frequency_line(line)
                .map_err(|message| ParseError::invalid(origin, line_num, message, line))
        })
        .collect()
}

fn parse_frequency_line(line: &str) -> Result<FrequencyRecord, String> {
    let mut tokens = line
        .split(|c: char| c == ';' || c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty());

    let locus: Locus = tokens
        .next()
        .ok_or("missing locus")?
        .parse()
        .map_err(|e: crate::core::locus::LocusParseError| e.to_string())?;

    let alleles = tokens
        .map(parse_allele)
        .collect::<Result<Vec<_>, _>>()?;

    if alleles.is_empty() {
        return Err(format!("no allele frequencies for {locus}"));
    }

    Ok(FrequencyRecord { locus, alleles })
}

fn parse_allele(token: &str) -> Result<AlleleObservation, String> {
    let (length, frequency) = token
        .split_once('-')
        .ok_or_else(|| format!("allele '{token}' is not length-frequency"))?;

    let length: i64 = length
        .parse()
        .map_err(|_| format!("invalid allele length '{length}'"))?;
    let frequency: f64 = frequency
        .parse()
        .map_err(|_| format!("invalid allele frequency '{frequency}'"))?;

    if !(0.0..=1.0).contains(&frequency) {
        return Err(format!("allele frequency {frequency} outside [0, 1]"));
    }

    Ok(AlleleObservation::new(length, frequency))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_frequency_text() {
        let text = "1:100-110 10-0.5;12-0.3,14-0.2\n# comment\n2:5-9\t7-1.0\n";
        let records = parse_frequency_text(text, "freqs").unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].locus, Locus::new("1", 100, 110));
        assert_eq!(
            records[0].alleles,
            vec![
                AlleleObservation::new(10, 0.5),
                AlleleObservation::new(12, 0.3),
                AlleleObservation::new(14, 0.2),
            ]
        );
        assert_eq!(records[1].alleles, vec![AlleleObservation::new(7, 1.0)]);
    }

    #[test]
    fn test_malformed_coordinate_is_fatal() {
        let err = parse_frequency_text("1:100-110 10-1.0\n1:1x0-110 10-1.0\n", "f").unwrap_err();
        assert!(matches!(err, ParseError::InvalidRecord { line: 2, .. }));
    }

    #[test]
    fn test_malformed_allele_is_fatal() {
        for bad in ["1:1-2 10", "1:1-2 a-0.5", "1:1-2 10-x", "1:1-2 10-1.5", "1:1-2"] {
            assert!(
                parse_frequency_text(bad, "f").is_err(),
                "expected '{bad}' to be rejected"
            );
        }
    }

    #[test]
    fn test_error_message_names_line() {
        let err = parse_frequency_text("1:1-2 10-oops\n", "freqs.txt").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("freqs.txt line 1"));
        assert!(message.contains("10-oops"));
    }
}
