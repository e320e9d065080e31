//! I/O module
//!
//! Handles CSV parsing of rewards tables and text output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (column set, row conversion)
//! - `table_reader` - Loading a whole table from a reader or a file
//! - `report` - Rendering regions, countries and comparisons as text

pub mod csv_format;
pub mod report;
pub mod table_reader;

pub use csv_format::{convert_csv_row, validate_headers, CsvRow, REQUIRED_COLUMNS};
pub use report::{write_cannot_redeem, write_comparison, write_countries, write_regions};
