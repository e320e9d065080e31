//! Redemption matcher
//!
//! Pure queries over a rewards table: which regions and countries an
//! account can reach on a roundtrip, what a given country costs on each
//! airline, and which airline to redeem with.
//!
//! The matcher never mutates the table or the accounts, and never prints.
//! Every query returns structured data for the caller to render.

use crate::core::filter::RowFilter;
use crate::core::table::RewardsTable;
use crate::types::{
    normalize, Account, AirlineQuote, CostComparison, PointsCost, Recommendation, RewardsError,
    RewardsRow,
};
use std::collections::BTreeSet;
use tracing::debug;

/// Query layer over a borrowed rewards table
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'t> {
    table: &'t RewardsTable,
}

impl<'t> Matcher<'t> {
    pub fn new(table: &'t RewardsTable) -> Self {
        Matcher { table }
    }

    /// Regions the account can reach on a roundtrip, sorted ascending
    pub fn regions_affordable(&self, account: &Account) -> Vec<String> {
        let filter = RowFilter::affordable_for(account);
        let regions = self.project(&filter, |row| &row.destination_region);
        debug!(program = %account.program(), balance = account.balance_check(), count = regions.len(), "affordable regions");
        regions.into_iter().collect()
    }

    /// Union of both accounts' affordable regions, deduplicated and sorted
    pub fn combined_regions(&self, first: &Account, second: &Account) -> Vec<String> {
        union(
            self.regions_affordable(first),
            self.regions_affordable(second),
        )
    }

    /// Countries in `region` the account can reach on a roundtrip, sorted ascending
    ///
    /// `region` is matched case-insensitively.
    pub fn countries_affordable(&self, account: &Account, region: &str) -> Vec<String> {
        let filter = RowFilter::affordable_for(account).in_region(region);
        let countries = self.project(&filter, |row| &row.destination_country);
        debug!(program = %account.program(), region, count = countries.len(), "affordable countries");
        countries.into_iter().collect()
    }

    /// Union of both accounts' affordable countries in `region`
    pub fn combined_countries(&self, first: &Account, second: &Account, region: &str) -> Vec<String> {
        union(
            self.countries_affordable(first, region),
            self.countries_affordable(second, region),
        )
    }

    /// One-way cost of `country` on the account's airline
    ///
    /// # Returns
    ///
    /// * `Ok(Some(cost))` - exactly one affordable row matched
    /// * `Ok(None)` - the country is absent for this airline or unaffordable
    ///
    /// # Errors
    ///
    /// Returns `DuplicateRow` if two or more affordable rows match. The table
    /// should be reloaded.
    pub fn cost_for_airline(
        &self,
        account: &Account,
        country: &str,
    ) -> Result<Option<PointsCost>, RewardsError> {
        let filter = RowFilter::affordable_for(account).in_country(country);
        let matched: Vec<PointsCost> = filter
            .apply(self.table.rows())
            .map(|row| row.points_cost)
            .collect();

        match matched.as_slice() {
            [] => Ok(None),
            [cost] => Ok(Some(*cost)),
            _ => Err(RewardsError::duplicate_row(
                account.program().as_str(),
                &normalize(country),
                matched.len(),
            )),
        }
    }

    /// Look up both airlines' costs for `country` and compare them
    pub fn compare_country(
        &self,
        first: &Account,
        second: &Account,
        country: &str,
    ) -> Result<CostComparison, RewardsError> {
        let first_cost = self.cost_for_airline(first, country)?;
        let second_cost = self.cost_for_airline(second, country)?;
        let recommendation = compare_costs(first_cost, second_cost);
        debug!(country, ?first_cost, ?second_cost, ?recommendation, "compared airlines");

        Ok(CostComparison {
            country: normalize(country),
            first: AirlineQuote {
                program: first.program().clone(),
                one_way_cost: first_cost,
            },
            second: AirlineQuote {
                program: second.program().clone(),
                one_way_cost: second_cost,
            },
            recommendation,
        })
    }

    fn project<F>(&self, filter: &RowFilter, column: F) -> BTreeSet<String>
    where
        F: Fn(&RewardsRow) -> &String,
    {
        filter
            .apply(self.table.rows())
            .map(|row| column(row).clone())
            .collect()
    }
}

/// Pick the cheaper airline
///
/// An absent cost counts as infinitely expensive, and is resolved before any
/// ordering comparison.
pub fn compare_costs(first: Option<PointsCost>, second: Option<PointsCost>) -> Recommendation {
    match (first, second) {
        (None, None) => Recommendation::NeitherAffordable,
        (Some(_), None) => Recommendation::AirlineA,
        (None, Some(_)) => Recommendation::AirlineB,
        (Some(a), Some(b)) if a > b => Recommendation::AirlineB,
        (Some(a), Some(b)) if a == b => Recommendation::Indifferent,
        (Some(_), Some(_)) => Recommendation::AirlineA,
    }
}

fn union(first: Vec<String>, second: Vec<String>) -> Vec<String> {
    first
        .into_iter()
        .chain(second)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Points, Program};
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn row(airline: Program, cost: i64, region: &str, country: &str) -> RewardsRow {
        RewardsRow::new(airline, Decimal::from(cost), region, country)
    }

    fn american(balance: Points) -> Account {
        Account::new(Program::american(), balance).unwrap()
    }

    fn united(balance: Points) -> Account {
        Account::new(Program::united(), balance).unwrap()
    }

    fn japan_table() -> RewardsTable {
        RewardsTable::from_rows(vec![row(Program::american(), 10000, "asia", "japan")])
    }

    fn mixed_table() -> RewardsTable {
        RewardsTable::from_rows(vec![
            row(Program::american(), 10000, "asia", "japan"),
            row(Program::american(), 15000, "europe", "france"),
            row(Program::american(), 30000, "oceania", "australia"),
            row(Program::american(), 8000, "asia", "korea"),
            row(Program::united(), 12000, "asia", "japan"),
            row(Program::united(), 9000, "south america", "peru"),
            row(Program::united(), 15000, "europe", "france"),
            row(Program::united(), 6000, "asia", "vietnam"),
        ])
    }

    #[test]
    fn test_single_row_scenario() {
        let table = japan_table();
        let matcher = Matcher::new(&table);
        let account = american(25000);

        assert_eq!(matcher.regions_affordable(&account), vec!["asia"]);
        assert_eq!(matcher.countries_affordable(&account, "asia"), vec!["japan"]);
        assert_eq!(
            matcher.cost_for_airline(&account, "japan"),
            Ok(Some(Decimal::from(10000)))
        );

        let comparison = matcher
            .compare_country(&account, &united(0), "japan")
            .unwrap();
        assert_eq!(comparison.first.roundtrip_cost(), Some(Decimal::from(20000)));
        assert_eq!(comparison.recommendation, Recommendation::AirlineA);
    }

    #[test]
    fn test_roundtrip_threshold_excludes_half_balance_overrun() {
        let table = japan_table();
        let matcher = Matcher::new(&table);

        // 10000 > 0.5 * 15000
        assert!(matcher.regions_affordable(&american(15000)).is_empty());
    }

    #[test]
    fn test_regions_are_sorted_and_distinct() {
        let table = mixed_table();
        let matcher = Matcher::new(&table);

        assert_eq!(
            matcher.regions_affordable(&american(100000)),
            vec!["asia", "europe", "oceania"]
        );
    }

    #[rstest]
    #[case::poor(5000)]
    #[case::middling(20000)]
    #[case::rich(60000)]
    fn test_regions_never_include_unaffordable_rows(#[case] balance: Points) {
        let table = mixed_table();
        let matcher = Matcher::new(&table);
        let account = american(balance);

        for region in matcher.regions_affordable(&account) {
            assert!(table.rows().iter().any(|r| r.airline == Program::american()
                && r.destination_region == region
                && r.points_cost * Decimal::TWO <= Decimal::from(balance)));
        }
    }

    #[rstest]
    #[case::both_poor(1000, 1000)]
    #[case::american_only(20000, 0)]
    #[case::united_only(0, 30000)]
    #[case::both_rich(60000, 60000)]
    fn test_combined_regions_is_deduplicated_superset(
        #[case] american_balance: Points,
        #[case] united_balance: Points,
    ) {
        let table = mixed_table();
        let matcher = Matcher::new(&table);
        let a = american(american_balance);
        let b = united(united_balance);

        let combined = matcher.combined_regions(&a, &b);

        for region in matcher
            .regions_affordable(&a)
            .iter()
            .chain(matcher.regions_affordable(&b).iter())
        {
            assert!(combined.contains(region));
        }
        let distinct: BTreeSet<&String> = combined.iter().collect();
        assert_eq!(distinct.len(), combined.len());
    }

    #[test]
    fn test_combined_regions_union() {
        let table = mixed_table();
        let matcher = Matcher::new(&table);

        assert_eq!(
            matcher.combined_regions(&american(20000), &united(20000)),
            vec!["asia", "south america"]
        );
    }

    #[test]
    fn test_combined_countries_region_is_case_insensitive() {
        let table = mixed_table();
        let matcher = Matcher::new(&table);

        assert_eq!(
            matcher.combined_countries(&american(20000), &united(24000), "ASIA"),
            vec!["japan", "korea", "vietnam"]
        );
    }

    #[test]
    fn test_countries_for_unknown_region_is_empty() {
        let table = mixed_table();
        let matcher = Matcher::new(&table);

        assert!(matcher
            .combined_countries(&american(100000), &united(100000), "antarctica")
            .is_empty());
    }

    #[test]
    fn test_cost_absent_for_other_program() {
        let table = japan_table();
        let matcher = Matcher::new(&table);

        assert_eq!(matcher.cost_for_airline(&united(100000), "japan"), Ok(None));
    }

    #[test]
    fn test_cost_absent_when_unaffordable() {
        let table = japan_table();
        let matcher = Matcher::new(&table);

        assert_eq!(matcher.cost_for_airline(&american(19999), "japan"), Ok(None));
    }

    #[test]
    fn test_cost_country_is_case_insensitive() {
        let table = japan_table();
        let matcher = Matcher::new(&table);

        assert_eq!(
            matcher.cost_for_airline(&american(20000), "Japan"),
            Ok(Some(Decimal::from(10000)))
        );
    }

    #[test]
    fn test_duplicate_rows_fail_cost_lookup() {
        let table = RewardsTable::from_rows(vec![
            row(Program::american(), 10000, "asia", "japan"),
            row(Program::american(), 10000, "asia", "japan"),
        ]);
        let matcher = Matcher::new(&table);

        assert_eq!(
            matcher.cost_for_airline(&american(25000), "japan"),
            Err(RewardsError::duplicate_row("american airlines", "japan", 2))
        );
    }

    #[rstest]
    #[case::both_absent(None, None, Recommendation::NeitherAffordable)]
    #[case::only_first(Some(10000), None, Recommendation::AirlineA)]
    #[case::only_second(None, Some(10000), Recommendation::AirlineB)]
    #[case::second_cheaper(Some(12000), Some(10000), Recommendation::AirlineB)]
    #[case::first_cheaper(Some(8000), Some(10000), Recommendation::AirlineA)]
    #[case::equal(Some(10000), Some(10000), Recommendation::Indifferent)]
    fn test_compare_costs(
        #[case] first: Option<i64>,
        #[case] second: Option<i64>,
        #[case] expected: Recommendation,
    ) {
        assert_eq!(
            compare_costs(first.map(Decimal::from), second.map(Decimal::from)),
            expected
        );
    }

    #[test]
    fn test_compare_country_neither_affordable() {
        let table = mixed_table();
        let matcher = Matcher::new(&table);

        let comparison = matcher
            .compare_country(&american(100), &united(100), "japan")
            .unwrap();

        assert_eq!(comparison.recommendation, Recommendation::NeitherAffordable);
        assert_eq!(comparison.first.one_way_cost, None);
        assert_eq!(comparison.second.one_way_cost, None);
    }

    #[test]
    fn test_compare_country_picks_cheaper_airline() {
        let table = mixed_table();
        let matcher = Matcher::new(&table);

        let comparison = matcher
            .compare_country(&american(50000), &united(50000), "Japan")
            .unwrap();

        assert_eq!(comparison.country, "japan");
        assert_eq!(comparison.recommendation, Recommendation::AirlineA);
        assert_eq!(comparison.second.roundtrip_cost(), Some(Decimal::from(24000)));
    }
}
