use serde::{Deserialize, Serialize};

/// Largest repeat period retained in the analysis
pub const MAX_PERIOD: u8 = 5;

/// Length in bases of the repeated motif, restricted to `1..=MAX_PERIOD`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RepeatPeriod(u8);

impl RepeatPeriod {
    /// The longest period retained
    pub const LONGEST: Self = Self(MAX_PERIOD);

    /// Returns `None` for periods outside `1..=MAX_PERIOD`
    #[must_use]
    pub fn new(period: usize) -> Option<Self> {
        match u8::try_from(period) {
            Ok(p) if (1..=MAX_PERIOD).contains(&p) => Some(Self(p)),
            _ => None,
        }
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based slot used by per-period tables
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// All valid periods in ascending order
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=MAX_PERIOD).map(Self)
    }
}

impl TryFrom<u8> for RepeatPeriod {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(usize::from(value))
            .ok_or_else(|| format!("repeat period must be in 1..={MAX_PERIOD}, got {value}"))
    }
}

impl From<RepeatPeriod> for u8 {
    fn from(period: RepeatPeriod) -> Self {
        period.0
    }
}

impl std::fmt::Display for RepeatPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Annotation attached to a TRF-called locus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationEntry {
    /// TRF alignment score
    pub quality_score: i64,
    pub repeat_period: RepeatPeriod,
}

/// One observed allele length and its frequency at a locus
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlleleObservation {
    pub length: i64,
    pub frequency: f64,
}

impl AlleleObservation {
    pub fn new(length: i64, frequency: f64) -> Self {
        Self { length, frequency }
    }
}

/// A (score, heterozygosity) data point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub score: i64,
    pub heterozygosity: f64,
}

impl Sample {
    pub fn new(score: i64, heterozygosity: f64) -> Self {
        Self {
            score,
            heterozygosity,
        }
    }
}
