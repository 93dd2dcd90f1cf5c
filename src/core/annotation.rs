use std::collections::HashMap;

use tracing::debug;

use crate::core::locus::Locus;
use crate::core::types::{AnnotationEntry, RepeatPeriod};

/// A raw TRF record as handed over by the parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationRecord {
    pub start: i64,
    pub stop: i64,
    /// Consensus repeat unit; its length is the repeat period
    pub repeat_unit: String,
    pub score: i64,
}

/// What happened when a record was offered to the index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// An entry for the same locus already existed and was replaced
    Overwritten,
    /// Repeat period outside 1..=5
    Excluded,
}

/// Lookup from exact locus to TRF annotation
#[derive(Debug, Default)]
pub struct AnnotationIndex {
    entries: HashMap<Locus, AnnotationEntry>,
    excluded: usize,
    overwritten: usize,
}

impl AnnotationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from records grouped by chromosome
    pub fn from_chromosomes<'a, I>(chromosomes: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a [AnnotationRecord])>,
    {
        let mut index = Self::new();
        for (chrom, records) in chromosomes {
            for record in records {
                index.insert(chrom, record);
            }
        }
        index
    }

    /// Add a record for `chrom`. Later records for the same locus replace
    /// earlier ones.
    pub fn insert(&mut self, chrom: &str, record: &AnnotationRecord) -> InsertOutcome {
        let Some(repeat_period) = RepeatPeriod::new(record.repeat_unit.len()) else {
            self.excluded += 1;
            return InsertOutcome::Excluded;
        };

        let locus = Locus::new(chrom, record.start, record.stop);
        let entry = AnnotationEntry {
            quality_score: record.score,
            repeat_period,
        };

        match self.entries.insert(locus, entry) {
            Some(previous) => {
                self.overwritten += 1;
                debug!(
                    "Duplicate TRF entry for {}:{}-{} (score {} replaced by {})",
                    chrom, record.start, record.stop, previous.quality_score, record.score
                );
                InsertOutcome::Overwritten
            }
            None => InsertOutcome::Inserted,
        }
    }

    pub fn get(&self, locus: &Locus) -> Option<&AnnotationEntry> {
        self.entries.get(locus)
    }

    pub fn contains(&self, locus: &Locus) -> bool {
        self.entries.contains_key(locus)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records dropped because their period is not in 1..=5
    pub fn excluded(&self) -> usize {
        self.excluded
    }

    /// Records that replaced an existing entry for the same locus
    pub fn overwritten(&self) -> usize {
        self.overwritten
    }
}
