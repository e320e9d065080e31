use crate::pipeline::{AccountSpec, RedemptionRequest};
use crate::types::{Points, Program};
use clap::Parser;
use std::path::PathBuf;

/// Find affordable roundtrip reward flights across two airline programs
#[derive(Parser, Debug)]
#[command(name = "rewards-matcher")]
#[command(about = "Find affordable roundtrip reward flights across two airline programs", long_about = None)]
pub struct CliArgs {
    /// Rewards table CSV file
    #[arg(value_name = "TABLE", help = "Path to the rewards table CSV file")]
    pub table: PathBuf,

    /// Balance of the first program's account
    #[arg(
        long = "first-balance",
        value_name = "POINTS",
        value_parser = clap::value_parser!(i64).range(0..),
        help = "Current balance of the first rewards account"
    )]
    pub first_balance: Points,

    /// Balance of the second program's account
    #[arg(
        long = "second-balance",
        value_name = "POINTS",
        value_parser = clap::value_parser!(i64).range(0..),
        help = "Current balance of the second rewards account"
    )]
    pub second_balance: Points,

    /// Program of the first account
    #[arg(
        long = "first-program",
        value_name = "PROGRAM",
        default_value = Program::AMERICAN,
        help = "Airline program of the first account"
    )]
    pub first_program: String,

    /// Program of the second account
    #[arg(
        long = "second-program",
        value_name = "PROGRAM",
        default_value = Program::UNITED,
        help = "Airline program of the second account"
    )]
    pub second_program: String,

    /// Region to list countries for
    #[arg(long = "region", value_name = "REGION")]
    pub region: Option<String>,

    /// Country to compare airlines for (requires --region)
    #[arg(long = "country", value_name = "COUNTRY", requires = "region")]
    pub country: Option<String>,
}

impl CliArgs {
    /// Build the redemption request the pipeline answers
    pub fn to_request(&self) -> RedemptionRequest {
        RedemptionRequest {
            table_path: self.table.clone(),
            first: AccountSpec {
                program: self.first_program.clone(),
                balance: self.first_balance,
            },
            second: AccountSpec {
                program: self.second_program.clone(),
                balance: self.second_balance,
            },
            region: self.region.clone(),
            country: self.country.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults() {
        let parsed = CliArgs::try_parse_from([
            "program",
            "--first-balance",
            "25000",
            "--second-balance",
            "0",
            "rewards.csv",
        ])
        .unwrap();

        let request = parsed.to_request();
        assert_eq!(request.table_path, PathBuf::from("rewards.csv"));
        assert_eq!(request.first.program, "american airlines");
        assert_eq!(request.first.balance, 25000);
        assert_eq!(request.second.program, "united airlines");
        assert_eq!(request.region, None);
        assert_eq!(request.country, None);
    }

    #[test]
    fn test_all_options() {
        let parsed = CliArgs::try_parse_from([
            "program",
            "--first-balance",
            "100",
            "--second-balance",
            "200",
            "--first-program",
            "Delta Air Lines",
            "--second-program",
            "Alaska Airlines",
            "--region",
            "asia",
            "--country",
            "japan",
            "rewards.csv",
        ])
        .unwrap();

        let request = parsed.to_request();
        assert_eq!(request.first.program, "Delta Air Lines");
        assert_eq!(request.second.balance, 200);
        assert_eq!(request.region.as_deref(), Some("asia"));
        assert_eq!(request.country.as_deref(), Some("japan"));
    }

    // Error handling tests
    #[rstest]
    #[case::missing_table(&["program", "--first-balance", "1", "--second-balance", "1"])]
    #[case::missing_balance(&["program", "--first-balance", "1", "rewards.csv"])]
    #[case::negative_balance(&["program", "--first-balance", "-1", "--second-balance", "1", "rewards.csv"])]
    #[case::non_numeric_balance(&["program", "--first-balance", "lots", "--second-balance", "1", "rewards.csv"])]
    #[case::country_without_region(&["program", "--first-balance", "1", "--second-balance", "1", "--country", "japan", "rewards.csv"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
