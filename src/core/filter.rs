//! Row predicates
//!
//! Every matcher query is one `RowFilter` evaluated over the table rows: the
//! account's program, its affordability threshold, and optionally a region or
//! a country. Region and country are normalized when they are attached, so
//! callers may pass user input as-is.

use crate::types::{is_affordable, normalize, Account, Points, Program, RewardsRow};

/// Composable predicate over rewards rows
#[derive(Debug, Clone)]
pub struct RowFilter {
    airline: Program,
    balance: Points,
    region: Option<String>,
    country: Option<String>,
}

impl RowFilter {
    /// Rows on the account's program that its balance covers as a roundtrip
    pub fn affordable_for(account: &Account) -> Self {
        RowFilter {
            airline: account.program().clone(),
            balance: account.balance_check(),
            region: None,
            country: None,
        }
    }

    /// Further restrict to a destination region (case-insensitive)
    pub fn in_region(mut self, region: &str) -> Self {
        self.region = Some(normalize(region));
        self
    }

    /// Further restrict to a destination country (case-insensitive)
    pub fn in_country(mut self, country: &str) -> Self {
        self.country = Some(normalize(country));
        self
    }

    pub fn matches(&self, row: &RewardsRow) -> bool {
        row.airline == self.airline
            && self
                .region
                .as_deref()
                .is_none_or(|region| row.destination_region == region)
            && self
                .country
                .as_deref()
                .is_none_or(|country| row.destination_country == country)
            && is_affordable(row.points_cost, self.balance)
    }

    /// Lazily yield the matching rows, in table order
    pub fn apply<'r>(&'r self, rows: &'r [RewardsRow]) -> impl Iterator<Item = &'r RewardsRow> + 'r {
        rows.iter().filter(move |row| self.matches(row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn rows() -> Vec<RewardsRow> {
        vec![
            RewardsRow::new(Program::american(), Decimal::from(10000), "asia", "japan"),
            RewardsRow::new(Program::american(), Decimal::from(40000), "europe", "france"),
            RewardsRow::new(Program::united(), Decimal::from(5000), "asia", "korea"),
        ]
    }

    #[test]
    fn test_program_and_threshold() {
        let account = Account::new(Program::american(), 25000).unwrap();
        let filter = RowFilter::affordable_for(&account);
        let rows = rows();

        let matched: Vec<&str> = filter
            .apply(&rows)
            .map(|r| r.destination_country.as_str())
            .collect();
        assert_eq!(matched, vec!["japan"]);
    }

    #[test]
    fn test_region_is_case_insensitive() {
        let account = Account::new(Program::american(), 100000).unwrap();
        let rows = rows();

        let filter = RowFilter::affordable_for(&account).in_region("  EUROPE ");
        let matched: Vec<&str> = filter
            .apply(&rows)
            .map(|r| r.destination_country.as_str())
            .collect();
        assert_eq!(matched, vec!["france"]);
    }

    #[test]
    fn test_country_filter() {
        let account = Account::new(Program::united(), 100000).unwrap();
        let rows = rows();

        let filter = RowFilter::affordable_for(&account).in_country("Korea");
        assert_eq!(filter.apply(&rows).count(), 1);

        let filter = RowFilter::affordable_for(&account).in_country("Japan");
        assert_eq!(filter.apply(&rows).count(), 0);
    }
}
