//! Rewards table
//!
//! The in-memory, immutable table the matcher queries. Rows keep the order
//! they were loaded in. Loading from CSV lives in `io::table_reader`.

use crate::types::RewardsRow;
use std::collections::BTreeMap;

/// Ordered, immutable sequence of rewards rows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RewardsTable {
    rows: Vec<RewardsRow>,
}

impl RewardsTable {
    /// Build a table from already-validated rows
    pub fn from_rows(rows: Vec<RewardsRow>) -> Self {
        RewardsTable { rows }
    }

    pub fn rows(&self) -> &[RewardsRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Airline/country pairs that appear on more than one row
    ///
    /// Each entry is `(airline, country, count)`, sorted by airline then
    /// country. An empty result means the table satisfies the one-row-per-pair
    /// invariant.
    pub fn duplicate_pairs(&self) -> Vec<(String, String, usize)> {
        let mut counts: BTreeMap<(&str, &str), usize> = BTreeMap::new();
        for row in &self.rows {
            *counts
                .entry((row.airline.as_str(), row.destination_country.as_str()))
                .or_default() += 1;
        }

        counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|((airline, country), count)| (airline.to_string(), country.to_string(), count))
            .collect()
    }
}
