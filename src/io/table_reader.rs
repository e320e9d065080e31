//! Rewards table loader
//!
//! Reads a whole CSV rewards table into an immutable [`RewardsTable`].
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Error Handling
//!
//! Unlike a streaming reader, a table is all-or-nothing: a bad header or any
//! bad row fails the load, with the line number in the error. Duplicate
//! airline/country pairs are logged but kept, and surface later as
//! `DuplicateRow` from the matcher.

use crate::core::RewardsTable;
use crate::io::csv_format::{convert_csv_row, validate_headers, CsvRow};
use crate::types::RewardsError;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

impl RewardsTable {
    /// Load a rewards table from any CSV source
    ///
    /// # Errors
    ///
    /// - `SchemaMismatch` if the header is not exactly the four rewards columns
    /// - `ParseError` if the CSV is malformed
    /// - `InvalidCost` or `MissingProgram` for a bad row
    pub fn load<R: Read>(source: R) -> Result<Self, RewardsError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(source);

        let headers = reader.headers()?.clone();
        validate_headers(&headers)?;

        let mut rows = Vec::new();
        let mut record = StringRecord::new();
        while reader.read_record(&mut record)? {
            let line = record.position().map_or(rows.len() as u64 + 2, |p| p.line());
            let csv_row: CsvRow = record.deserialize(Some(&headers))?;
            rows.push(convert_csv_row(csv_row, line)?);
        }

        let table = RewardsTable::from_rows(rows);
        for (airline, country, count) in table.duplicate_pairs() {
            warn!(%airline, %country, count, "duplicate rewards rows for airline and country");
        }
        info!(rows = table.len(), "loaded rewards table");

        Ok(table)
    }

    /// Load a rewards table from a CSV file
    ///
    /// # Errors
    ///
    /// `FileNotFound` if the path does not exist, `IoError` if it cannot be
    /// opened, and any error of [`RewardsTable::load`].
    pub fn load_path(path: &Path) -> Result<Self, RewardsError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => RewardsError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => RewardsError::from(e),
        })?;

        Self::load(file)
    }
}
