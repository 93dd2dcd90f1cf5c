use serde::Serialize;

use crate::core::types::{AlleleObservation, RepeatPeriod};

/// Expected heterozygosity `1 - Σ f²`.
///
/// Frequencies are used as given; they are not re-normalised.
pub fn heterozygosity<I>(frequencies: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    1.0 - frequencies.into_iter().map(|f| f * f).sum::<f64>()
}

/// Heterozygosity of an allele distribution
pub fn allele_heterozygosity(alleles: &[AlleleObservation]) -> f64 {
    heterozygosity(alleles.iter().map(|a| a.frequency))
}

/// Outcome of the repeat-unit-multiple check at one locus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RepeatMultiple {
    /// Length of the most frequent allele, `None` for an empty distribution
    pub wild_type_length: Option<i64>,
    /// Another allele differs from the wild type by a whole number of repeat units
    pub has_multiple: bool,
}

/// Look for alleles that differ from the wild type by whole repeat units.
///
/// The wild type is the first allele carrying the highest frequency. Alleles
/// whose frequency equals that maximum are never compared, so a tie with the
/// wild type does not count as a multiple.
pub fn classify_repeat_multiple(
    alleles: &[AlleleObservation],
    period: RepeatPeriod,
) -> RepeatMultiple {
    let Some(wild_type) = alleles
        .iter()
        .reduce(|best, a| if a.frequency > best.frequency { a } else { best })
    else {
        return RepeatMultiple {
            wild_type_length: None,
            has_multiple: false,
        };
    };

    let unit = i64::from(period.get());
    #[allow(clippy::float_cmp)] // ties are exact copies of the maximum
    let has_multiple = alleles
        .iter()
        .filter(|a| a.frequency != wild_type.frequency)
        .any(|a| (a.length - wild_type.length) % unit == 0);

    RepeatMultiple {
        wild_type_length: Some(wild_type.length),
        has_multiple,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alleles(pairs: &[(i64, f64)]) -> Vec<AlleleObservation> {
        pairs
            .iter()
            .map(|&(length, frequency)| AlleleObservation::new(length, frequency))
            .collect()
    }

    fn period(p: usize) -> RepeatPeriod {
        RepeatPeriod::new(p).unwrap()
    }

    #[test]
    fn test_heterozygosity_three_alleles() {
        let h = heterozygosity([0.5, 0.3, 0.2]);
        assert!((h - 0.62).abs() < 1e-12);
    }

    #[test]
    fn test_heterozygosity_monomorphic() {
        assert!(heterozygosity([1.0]).abs() < 1e-12);
    }

    #[test]
    fn test_heterozygosity_bounds() {
        let distributions: &[&[f64]] = &[
            &[0.5, 0.5],
            &[0.25, 0.25, 0.25, 0.25],
            &[0.9, 0.05, 0.05],
            &[0.7, 0.1, 0.1, 0.05, 0.05],
        ];
        for freqs in distributions {
            let n = freqs.len() as f64;
            let h = heterozygosity(freqs.iter().copied());
            assert!(h >= 0.0);
            assert!(h <= 1.0 - 1.0 / n + 1e-12, "H={h} exceeds bound for {freqs:?}");
        }
    }

    #[test]
    fn test_heterozygosity_not_renormalized() {
        assert!((heterozygosity([0.5]) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_multiple_detected() {
        let result = classify_repeat_multiple(&alleles(&[(15, 0.6), (20, 0.3), (25, 0.1)]), period(5));
        assert_eq!(result.wild_type_length, Some(15));
        assert!(result.has_multiple);
    }

    #[test]
    fn test_no_multiple() {
        let result = classify_repeat_multiple(&alleles(&[(15, 0.6), (17, 0.3), (21, 0.1)]), period(5));
        assert_eq!(result.wild_type_length, Some(15));
        assert!(!result.has_multiple);
    }

    #[test]
    fn test_wild_type_not_first() {
        let result = classify_repeat_multiple(&alleles(&[(12, 0.2), (17, 0.8)]), period(5));
        assert_eq!(result.wild_type_length, Some(17));
        assert!(result.has_multiple);
    }

    #[test]
    fn test_first_maximum_wins() {
        let result = classify_repeat_multiple(&alleles(&[(10, 0.4), (15, 0.4), (13, 0.2)]), period(5));
        assert_eq!(result.wild_type_length, Some(10));
        // 15 ties with the wild type and is skipped; 13 is not a multiple
        assert!(!result.has_multiple);
    }

    #[test]
    fn test_shorter_allele_multiple() {
        let result = classify_repeat_multiple(&alleles(&[(30, 0.7), (20, 0.3)]), period(5));
        assert!(result.has_multiple);
    }

    #[test]
    fn test_single_allele() {
        let result = classify_repeat_multiple(&alleles(&[(30, 1.0)]), period(5));
        assert_eq!(result.wild_type_length, Some(30));
        assert!(!result.has_multiple);
    }

    #[test]
    fn test_empty() {
        let result = classify_repeat_multiple(&[], period(5));
        assert_eq!(result.wild_type_length, None);
        assert!(!result.has_multiple);
    }
}
