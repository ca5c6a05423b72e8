//! Contributing-diagram tracking for merged nodes and edges.
//!
//! Every merged node and edge records which source diagrams contributed to
//! it. The set is order-independent and recording the same diagram index
//! twice is a no-op, so repeated encounters never double-count.

use std::collections::BTreeSet;
use std::fmt;

/// The set of diagram indices that contributed to a merged entity.
///
/// Stored as a proper integer set rather than a delimited string, so
/// membership of index `1` can never be confused with index `10`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Provenance {
    diagrams: BTreeSet<u32>,
}

impl Provenance {
    /// Creates an empty provenance set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a contributing diagram index.
    ///
    /// Returns `true` if the index was not yet present.
    pub fn record(&mut self, diagram: u32) -> bool {
        self.diagrams.insert(diagram)
    }

    /// Returns whether the given diagram index has been recorded.
    pub fn contains(&self, diagram: u32) -> bool {
        self.diagrams.contains(&diagram)
    }

    /// The number of distinct contributing diagrams.
    pub fn count(&self) -> usize {
        self.diagrams.len()
    }

    /// Iterates the contributing diagram indices in ascending order.
    pub fn diagrams(&self) -> impl Iterator<Item = u32> + '_ {
        self.diagrams.iter().copied()
    }
}

impl fmt::Display for Provenance {
    /// Renders the classic `"0 | 1 | 2"` form used by the export format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for diagram in &self.diagrams {
            if !first {
                write!(f, " | ")?;
            }
            write!(f, "{diagram}")?;
            first = false;
        }
        Ok(())
    }
}

impl FromIterator<u32> for Provenance {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self {
            diagrams: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_is_idempotent() {
        let mut prov = Provenance::new();

        assert!(prov.record(0));
        assert!(!prov.record(0));
        assert_eq!(prov.count(), 1);
    }

    #[test]
    fn test_index_one_distinct_from_ten() {
        // Regression guard for the substring membership defect: after
        // recording 10, index 1 must still count as new.
        let mut prov = Provenance::new();
        prov.record(10);

        assert!(!prov.contains(1));
        assert!(prov.record(1));
        assert_eq!(prov.count(), 2);
    }

    #[test]
    fn test_display_joins_in_ascending_order() {
        let prov: Provenance = [2, 0, 1].into_iter().collect();

        assert_eq!(prov.to_string(), "0 | 1 | 2");
    }

    #[test]
    fn test_empty_display() {
        assert_eq!(Provenance::new().to_string(), "");
    }
}
