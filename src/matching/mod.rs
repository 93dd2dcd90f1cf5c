//! Fuzzy locus matching between the reference panel and TRF annotations.
//!
//! Reference and TRF coordinates for the same repeat frequently disagree by a
//! single base at either end. The matcher probes the 3×3 neighbourhood of a
//! nominal locus in a fixed priority order and returns the first annotated
//! candidate:
//!
//! | Priority | start | stop |
//! |----------|-------|------|
//! | 1        | +1    | +1   |
//! | 2        | +1    |  0   |
//! | 3        | +1    | −1   |
//! | 4        |  0    | +1   |
//! | 5        |  0    |  0   |
//! | 6        |  0    | −1   |
//! | 7        | −1    | +1   |
//! | 8        | −1    |  0   |
//! | 9        | −1    | −1   |
//!
//! This is a deterministic tie-break, not a best-fit search: an exact match at
//! `(0,0)` loses to an annotation at `(+1,0)`.
//!
//! ## Example
//!
//! ```rust
//! use str_het::core::annotation::{AnnotationIndex, AnnotationRecord};
//! use str_het::core::locus::Locus;
//! use str_het::matching::matcher::{find_match, Offset};
//!
//! let mut index = AnnotationIndex::new();
//! index.insert("chr1", &AnnotationRecord {
//!     start: 100,
//!     stop: 110,
//!     repeat_unit: "AC".to_string(),
//!     score: 20,
//! });
//!
//! let hit = find_match(&index, &Locus::new("chr1", 101, 111)).unwrap();
//! assert_eq!(hit.offset, Offset::new(-1, -1));
//! ```

pub mod matcher;

pub use matcher::{find_match, LocusMatch, Offset, CANDIDATE_OFFSETS};
