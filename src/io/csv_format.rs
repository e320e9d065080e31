//! CSV format handling for rewards tables
//!
//! This module centralizes all CSV format concerns, providing:
//! - The required column set and header validation
//! - CsvRow structure for deserialization
//! - Conversion from CSV rows to domain types
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{Program, RewardsError, RewardsRow};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::str::FromStr;

/// Columns a rewards table must have, no more and no fewer
pub const REQUIRED_COLUMNS: [&str; 4] = [
    "airline",
    "points_cost",
    "destination_region",
    "destination_country",
];

/// CSV row structure for deserialization
///
/// Fields are matched by header name, so column order in the file is free.
/// The cost is kept as text so a bad value can be reported verbatim.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRow {
    pub airline: String,
    pub points_cost: String,
    pub destination_region: String,
    pub destination_country: String,
}

/// Check that the header is exactly the required column set
///
/// Order does not matter; missing, extra or repeated columns do.
///
/// # Errors
///
/// Returns `SchemaMismatch` listing the expected and found columns.
pub fn validate_headers(headers: &csv::StringRecord) -> Result<(), RewardsError> {
    let found: Vec<String> = headers.iter().map(|h| h.trim().to_string()).collect();
    let found_set: BTreeSet<&str> = found.iter().map(String::as_str).collect();
    let required: BTreeSet<&str> = REQUIRED_COLUMNS.iter().copied().collect();

    if found.len() != REQUIRED_COLUMNS.len() || found_set != required {
        return Err(RewardsError::schema_mismatch(&REQUIRED_COLUMNS, &found));
    }

    Ok(())
}

/// Convert a CsvRow to a RewardsRow
///
/// This function:
/// - Normalizes the airline into a Program
/// - Parses the cost into a Decimal and rejects negative values
/// - Normalizes region and country to lowercase
///
/// # Arguments
///
/// * `csv_row` - The deserialized CSV row
/// * `line` - Line number of the row, for error messages
///
/// # Errors
///
/// - `MissingProgram` if the airline is blank
/// - `InvalidCost` if the cost is not a non-negative number
pub fn convert_csv_row(csv_row: CsvRow, line: u64) -> Result<RewardsRow, RewardsError> {
    let airline = Program::new(&csv_row.airline)?;

    let cost_str = csv_row.points_cost.trim();
    let points_cost = Decimal::from_str(cost_str)
        .or_else(|_| Decimal::from_scientific(cost_str))
        .map_err(|_| RewardsError::invalid_cost(cost_str, line))?;

    if points_cost.is_sign_negative() && !points_cost.is_zero() {
        return Err(RewardsError::invalid_cost(cost_str, line));
    }

    Ok(RewardsRow::new(
        airline,
        points_cost,
        &csv_row.destination_region,
        &csv_row.destination_country,
    ))
}
