//! Analysis configuration.
//!
//! Every threshold the engine uses lives here, so the frequency reconciler and
//! the aggregator read the same numbers. Defaults reproduce the published
//! analysis; a JSON file may override any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::types::{RepeatPeriod, MAX_PERIOD};

/// Heterozygosity above which a locus counts as polymorphic
pub const HETEROZYGOSITY_THRESHOLD: f64 = 0.02;

/// TRF score cutoff per repeat period 1..=5
pub const SCORE_CUTOFFS: [i64; MAX_PERIOD as usize] = [24, 22, 28, 28, 32];

pub const DEFAULT_BIN_WIDTH: i64 = 5;
pub const DEFAULT_BIN_LOWER: i64 = 0;
pub const DEFAULT_BIN_UPPER: i64 = 150;

/// Largest bin layout a configuration may request
pub const MAX_BIN_COUNT: usize = 100_000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Score bins `[lower + k*width, lower + (k+1)*width)` covering `[lower, upper)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BinningConfig {
    pub lower: i64,
    pub upper: i64,
    pub width: i64,
}

impl Default for BinningConfig {
    fn default() -> Self {
        Self {
            lower: DEFAULT_BIN_LOWER,
            upper: DEFAULT_BIN_UPPER,
            width: DEFAULT_BIN_WIDTH,
        }
    }
}

impl BinningConfig {
    /// Number of bins, or `None` when the layout is unusable or its span
    /// does not fit in an `i64`. The last bin is clipped at `upper` when the
    /// range is not a multiple of `width`.
    pub fn checked_bin_count(&self) -> Option<usize> {
        if self.width <= 0 || self.upper <= self.lower {
            return None;
        }
        let span = self.upper.checked_sub(self.lower)?;
        let bins = span / self.width + i64::from(span % self.width != 0);
        usize::try_from(bins).ok()
    }

    /// Number of bins, zero for an unusable layout
    pub fn bin_count(&self) -> usize {
        self.checked_bin_count().unwrap_or(0)
    }

    /// Index of the bin holding `score`, or `None` when out of range
    pub fn bin_index(&self, score: i64) -> Option<usize> {
        if self.width <= 0 || score < self.lower || score >= self.upper {
            return None;
        }
        usize::try_from(score.checked_sub(self.lower)? / self.width).ok()
    }

    /// Lower bound of bin `index`
    pub fn bin_lower(&self, index: usize) -> i64 {
        #[allow(clippy::cast_possible_wrap)] // bin counts are capped by MAX_BIN_COUNT
        let offset = (index as i64).saturating_mul(self.width);
        self.lower.saturating_add(offset)
    }

    /// Upper bound of bin `index`, clipped at `upper`
    pub fn bin_upper(&self, index: usize) -> i64 {
        self.bin_lower(index).saturating_add(self.width).min(self.upper)
    }
}

/// Inclusive-or-exclusive score interval used for period-5 stutter checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBand {
    pub min: i64,
    pub max: i64,
    /// Whether `max` itself belongs to the band
    #[serde(default)]
    pub max_inclusive: bool,
}

impl ScoreBand {
    pub const fn new(min: i64, max: i64, max_inclusive: bool) -> Self {
        Self {
            min,
            max,
            max_inclusive,
        }
    }

    pub fn contains(&self, score: i64) -> bool {
        score >= self.min
            && if self.max_inclusive {
                score <= self.max
            } else {
                score < self.max
            }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let close = if self.max_inclusive { ']' } else { ')' };
        write!(f, "[{},{}{}", self.min, self.max, close)
    }
}

/// Period-5 score bands: [20,25) and [25,32]
pub const MULTIPLE_BANDS: [ScoreBand; 2] = [
    ScoreBand::new(20, 25, false),
    ScoreBand::new(25, 32, true),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub binning: BinningConfig,
    pub heterozygosity_threshold: f64,
    pub score_cutoffs: [i64; MAX_PERIOD as usize],
    /// Period checked for repeat-unit-multiple alleles
    pub multiple_period: RepeatPeriod,
    pub multiple_bands: Vec<ScoreBand>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            binning: BinningConfig::default(),
            heterozygosity_threshold: HETEROZYGOSITY_THRESHOLD,
            score_cutoffs: SCORE_CUTOFFS,
            multiple_period: RepeatPeriod::LONGEST,
            multiple_bands: MULTIPLE_BANDS.to_vec(),
        }
    }
}

impl AnalysisConfig {
    /// Load a (possibly partial) configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadError` if the file cannot be read,
    /// `ConfigError::ParseError` if it is not valid JSON for this type, or
    /// `ConfigError::Invalid` if validation fails.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse and validate a JSON configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` or `ConfigError::Invalid`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the bin layout is usable
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` for a non-positive bin width, an empty
    /// range, or a range that needs more than `MAX_BIN_COUNT` bins.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.binning.width <= 0 {
            return Err(ConfigError::Invalid(format!(
                "bin width must be positive, got {}",
                self.binning.width
            )));
        }
        if self.binning.upper <= self.binning.lower {
            return Err(ConfigError::Invalid(format!(
                "bin range [{}, {}) is empty",
                self.binning.lower, self.binning.upper
            )));
        }
        match self.binning.checked_bin_count() {
            Some(bins) if bins <= MAX_BIN_COUNT => Ok(()),
            _ => Err(ConfigError::Invalid(format!(
                "bin range [{}, {}) with width {} needs more than {MAX_BIN_COUNT} bins",
                self.binning.lower, self.binning.upper, self.binning.width
            ))),
        }
    }

    /// Score cutoff for `period`
    pub fn score_cutoff(&self, period: RepeatPeriod) -> i64 {
        self.score_cutoffs[period.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bins() {
        let binning = BinningConfig::default();
        assert_eq!(binning.bin_count(), 30);
        assert_eq!(binning.bin_index(0), Some(0));
        assert_eq!(binning.bin_index(4), Some(0));
        assert_eq!(binning.bin_index(5), Some(1));
        assert_eq!(binning.bin_index(149), Some(29));
        assert_eq!(binning.bin_index(150), None);
        assert_eq!(binning.bin_index(-1), None);
        assert_eq!(binning.bin_lower(29), 145);
    }

    #[test]
    fn test_score_band() {
        let [low, high] = MULTIPLE_BANDS;
        assert!(low.contains(20));
        assert!(low.contains(24));
        assert!(!low.contains(25));
        assert!(high.contains(25));
        assert!(high.contains(32));
        assert!(!high.contains(33));
        assert_eq!(low.to_string(), "[20,25)");
        assert_eq!(high.to_string(), "[25,32]");
    }

    #[test]
    fn test_partial_json() {
        let config = AnalysisConfig::from_json(r#"{"binning": {"width": 10}}"#).unwrap();
        assert_eq!(config.binning.width, 10);
        assert_eq!(config.binning.upper, DEFAULT_BIN_UPPER);
        assert_eq!(config.score_cutoffs, SCORE_CUTOFFS);
        assert_eq!(config.multiple_period.get(), 5);
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            AnalysisConfig::from_json(r#"{"binning": {"width": 0}}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            AnalysisConfig::from_json(r#"{"binning": {"lower": 10, "upper": 10}}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            AnalysisConfig::from_json("not json"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_oversized_bin_range_rejected() {
        let mut config = AnalysisConfig::default();
        config.binning.upper = i64::MAX;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
        assert!(config.binning.checked_bin_count().is_some());

        config.binning = BinningConfig {
            lower: i64::MIN,
            upper: i64::MAX,
            width: 5,
        };
        assert_eq!(config.binning.checked_bin_count(), None);
        assert_eq!(config.binning.bin_count(), 0);
        assert_eq!(config.binning.bin_index(0), None);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.binning = BinningConfig {
            lower: 0,
            upper: 1_000_000_000_000,
            width: 5,
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_partial_last_bin() {
        let binning = BinningConfig {
            lower: 0,
            upper: 12,
            width: 5,
        };
        assert_eq!(binning.bin_count(), 3);
        assert_eq!(binning.bin_index(11), Some(2));
        assert_eq!(binning.bin_lower(2), 10);
        assert_eq!(binning.bin_upper(2), 12);
        assert_eq!(binning.bin_upper(1), 10);
    }

    #[test]
    fn test_score_cutoff_lookup() {
        let config = AnalysisConfig::default();
        let cutoffs: Vec<i64> = RepeatPeriod::all().map(|p| config.score_cutoff(p)).collect();
        assert_eq!(cutoffs, vec![24, 22, 28, 28, 32]);
    }
}
