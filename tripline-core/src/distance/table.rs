//! Name-keyed lookup-table provider.

use std::collections::HashMap;

use crate::{DistanceError, DistanceProvider, Location, TravelEstimate};

/// Provider resolving pairs from a fixed table keyed by location names.
///
/// A lookup tries the `(from, to)` pair first and falls back to `(to, from)`
/// so a table only needs one direction per pair. Pairs absent in both
/// directions fail with [`DistanceError::UnknownPair`]. Used by tests and
/// the demo command; real deployments use a network-backed provider.
///
/// # Examples
///
/// ```
/// use tripline_core::{DistanceProvider, Location, TableDistanceProvider, TravelEstimate};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let table = TableDistanceProvider::new()
///     .with_entry("Home", "Work", TravelEstimate::new(12.0, 25.0));
///
/// let home = Location::new("Home", 51.5, -0.1)?;
/// let work = Location::new("Work", 51.52, -0.08)?;
///
/// // The reverse direction resolves through the same entry.
/// assert_eq!(table.distance(&work, &home)?.distance_km, 12.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableDistanceProvider {
    entries: HashMap<(String, String), TravelEstimate>,
}

impl TableDistanceProvider {
    /// An empty table; every lookup fails until entries are added.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, builder style.
    #[must_use]
    pub fn with_entry(
        mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        estimate: TravelEstimate,
    ) -> Self {
        self.insert(from, to, estimate);
        self
    }

    /// Add an entry for the named pair.
    pub fn insert(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        estimate: TravelEstimate,
    ) {
        self.entries.insert((from.into(), to.into()), estimate);
    }
}

impl DistanceProvider for TableDistanceProvider {
    fn distance(&self, from: &Location, to: &Location) -> Result<TravelEstimate, DistanceError> {
        if let Some(estimate) = self.entries.get(&(from.name.clone(), to.name.clone())) {
            return Ok(*estimate);
        }
        if let Some(estimate) = self.entries.get(&(to.name.clone(), from.name.clone())) {
            return Ok(*estimate);
        }
        Err(DistanceError::UnknownPair {
            from: from.name.clone(),
            to: to.name.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn table() -> TableDistanceProvider {
        TableDistanceProvider::new().with_entry("A", "B", TravelEstimate::new(7.0, 8.0))
    }

    fn location(name: &str) -> Location {
        Location::new(name, 1.0, 2.0).expect("valid coordinates")
    }

    #[rstest]
    fn forward_lookup_resolves(table: TableDistanceProvider) {
        let estimate = table
            .distance(&location("A"), &location("B"))
            .expect("entry present");
        assert_eq!(estimate, TravelEstimate::new(7.0, 8.0));
    }

    #[rstest]
    fn reverse_lookup_falls_back_to_forward_entry(table: TableDistanceProvider) {
        let estimate = table
            .distance(&location("B"), &location("A"))
            .expect("reverse direction resolves");
        assert_eq!(estimate, TravelEstimate::new(7.0, 8.0));
    }

    #[rstest]
    fn missing_pair_fails(table: TableDistanceProvider) {
        let err = table
            .distance(&location("A"), &location("C"))
            .expect_err("no entry in either direction");
        assert_eq!(
            err,
            DistanceError::UnknownPair {
                from: "A".into(),
                to: "C".into(),
            }
        );
    }
}
