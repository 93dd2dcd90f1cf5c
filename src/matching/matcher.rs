use serde::Serialize;

use crate::core::annotation::AnnotationIndex;
use crate::core::locus::Locus;
use crate::core::types::AnnotationEntry;

/// Shift applied to a nominal locus when probing the index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Offset {
    pub start: i64,
    pub stop: i64,
}

impl Offset {
    pub const fn new(start: i64, stop: i64) -> Self {
        Self { start, stop }
    }
}

impl std::fmt::Display for Offset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:+},{:+})", self.start, self.stop)
    }
}

/// Candidate offsets in priority order. The first one present in the index
/// wins, so this order is the tie-break policy when several would match.
pub const CANDIDATE_OFFSETS: [Offset; 9] = [
    Offset::new(1, 1),
    Offset::new(1, 0),
    Offset::new(1, -1),
    Offset::new(0, 1),
    Offset::new(0, 0),
    Offset::new(0, -1),
    Offset::new(-1, 1),
    Offset::new(-1, 0),
    Offset::new(-1, -1),
];

/// A nominal locus resolved to an annotation
#[derive(Debug, Clone, PartialEq)]
pub struct LocusMatch<'a> {
    /// Coordinates of the annotation that matched
    pub locus: Locus,
    pub entry: &'a AnnotationEntry,
    pub offset: Offset,
}

/// Resolve `nominal` against the index, tolerating ±1 bp on start and stop.
///
/// Returns `None` when no candidate in the 3×3 neighbourhood is annotated.
/// Candidates whose coordinates would overflow are skipped.
pub fn find_match<'a>(index: &'a AnnotationIndex, nominal: &Locus) -> Option<LocusMatch<'a>> {
    CANDIDATE_OFFSETS.iter().find_map(|&offset| {
        let candidate = nominal.shifted(offset.start, offset.stop)?;
        index.get(&candidate).map(|entry| LocusMatch {
            locus: candidate,
            entry,
            offset,
        })
    })
}
