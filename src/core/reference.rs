use std::collections::BTreeSet;

use crate::core::locus::Locus;

/// The set of loci defined by the reference STR panel.
///
/// Backed by an ordered set so iteration is deterministic across runs.
#[derive(Debug, Default, Clone)]
pub struct ReferenceLocusSet {
    loci: BTreeSet<Locus>,
}

impl ReferenceLocusSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, locus: &Locus) -> bool {
        self.loci.contains(locus)
    }

    pub fn len(&self) -> usize {
        self.loci.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loci.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Locus> {
        self.loci.iter()
    }
}

impl FromIterator<Locus> for ReferenceLocusSet {
    fn from_iter<I: IntoIterator<Item = Locus>>(iter: I) -> Self {
        Self {
            loci: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_and_order() {
        let set: ReferenceLocusSet = vec![
            Locus::new("2", 5, 10),
            Locus::new("1", 50, 60),
            Locus::new("1", 5, 10),
            Locus::new("2", 5, 10),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.len(), 3);
        let order: Vec<String> = set.iter().map(ToString::to_string).collect();
        assert_eq!(order, vec!["1:5-10", "1:50-60", "2:5-10"]);
        assert!(set.contains(&Locus::new("1", 50, 60)));
    }
}
