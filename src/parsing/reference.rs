use std::path::Path;

use crate::core::locus::Locus;
use crate::core::reference::ReferenceLocusSet;
use crate::parsing::{data_lines, read_text, ParseError};

/// Parse a reference locus file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::InvalidRecord` if any locus is malformed.
pub fn parse_reference_file(path: &Path) -> Result<ReferenceLocusSet, ParseError> {
    let content = read_text(path)?;
    parse_reference_text(&content, &path.display().to_string())
}

/// Parse reference loci from text: the first whitespace-separated column of
/// each line is a `chrom:start-stop` locus; remaining columns are ignored.
///
/// # Errors
///
/// Returns `ParseError::InvalidRecord` if any locus is malformed.
pub fn parse_reference_text(text: &str, origin: &str) -> Result<ReferenceLocusSet, ParseError> {
    data_lines(text)
        .map(|(line_num, line)| {
            let first = line.split_whitespace().next().unwrap_or_default();
            first
                .parse::<Locus>()
                .map_err(|e| ParseError::invalid(origin, line_num, e.to_string(), line))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reference_text() {
        let text = "1:100-110\tAC\t5\n2:50-80 AAT\n\n1:100-110\n";
        let set = parse_reference_text(text, "ref").unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&Locus::new("2", 50, 80)));
    }

    #[test]
    fn test_malformed_reference_is_fatal() {
        let err = parse_reference_text("1:100-110\n1:abc-110\n", "ref.txt").unwrap_err();
        match err {
            ParseError::InvalidRecord { origin, line, raw, .. } => {
                assert_eq!(origin, "ref.txt");
                assert_eq!(line, 2);
                assert_eq!(raw, "1:abc-110");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
