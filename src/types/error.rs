//! Error types for the rewards matcher
//!
//! This module defines all error types that can occur while loading a rewards
//! table, mutating an account, or querying redemptions.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **Table Errors**: Wrong columns, malformed rows, duplicated airline/country pairs
//! - **Account Errors**: Negative amounts, insufficient balance, overflow
//! - **Session Errors**: Redemption steps taken out of order
//!
//! None of these are fatal to the process. A caller may catch them and ask again.

use thiserror::Error;

/// Main error type for the rewards matcher
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RewardsError {
    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// The table header is not exactly the four rewards columns
    ///
    /// Raised at load time. The table is rejected as a whole.
    #[error("Dataset is not formatted correctly: expected columns [{}], found [{}]", expected.join(", "), found.join(", "))]
    SchemaMismatch {
        /// The required column names
        expected: Vec<String>,
        /// The column names present in the source
        found: Vec<String>,
    },

    /// A points cost that is negative or not a number
    #[error("Invalid points cost '{cost}' at line {line}")]
    InvalidCost {
        /// The raw cost value
        cost: String,
        /// Line number of the offending row
        line: u64,
    },

    /// No loyalty program was given for an account or a table row
    #[error("Please specify the program the account belongs to")]
    MissingProgram,

    /// A deposit or redemption with a negative amount
    #[error("Invalid amount {amount} for {operation} on {program}")]
    InvalidAmount {
        /// Program of the account
        program: String,
        /// Operation that was attempted
        operation: String,
        /// The rejected amount
        amount: i64,
    },

    /// Redemption exceeds the current balance
    #[error("Insufficient balance on {program}: balance {balance}, requested {requested}")]
    InsufficientBalance {
        /// Program of the account
        program: String,
        /// Current balance
        balance: i64,
        /// Requested redemption
        requested: i64,
    },

    /// Arithmetic overflow would occur
    #[error("Arithmetic overflow in {operation} on {program}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Program of the account
        program: String,
    },

    /// More than one cost row for the same airline and country
    ///
    /// The source data is corrupt or duplicated and should be reloaded.
    #[error("Table contains {count} rows for {airline} to {country}. Reload data table.")]
    DuplicateRow {
        /// Airline of the duplicated rows
        airline: String,
        /// Destination country of the duplicated rows
        country: String,
        /// Number of matching rows
        count: usize,
    },

    /// A redemption session step was called in the wrong stage
    #[error("Cannot {action} while session is at stage {stage}")]
    InvalidSessionState {
        /// Stage the session was in
        stage: String,
        /// Step that was attempted
        action: String,
    },
}

// Conversion from io::Error to RewardsError
impl From<std::io::Error> for RewardsError {
    fn from(error: std::io::Error) -> Self {
        RewardsError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to RewardsError
impl From<csv::Error> for RewardsError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        RewardsError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl RewardsError {
    /// Create a SchemaMismatch error
    pub fn schema_mismatch(expected: &[&str], found: &[String]) -> Self {
        RewardsError::SchemaMismatch {
            expected: expected.iter().map(|c| c.to_string()).collect(),
            found: found.to_vec(),
        }
    }

    /// Create an InvalidCost error
    pub fn invalid_cost(cost: &str, line: u64) -> Self {
        RewardsError::InvalidCost {
            cost: cost.to_string(),
            line,
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(program: &str, operation: &str, amount: i64) -> Self {
        RewardsError::InvalidAmount {
            program: program.to_string(),
            operation: operation.to_string(),
            amount,
        }
    }

    /// Create an InsufficientBalance error
    pub fn insufficient_balance(program: &str, balance: i64, requested: i64) -> Self {
        RewardsError::InsufficientBalance {
            program: program.to_string(),
            balance,
            requested,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, program: &str) -> Self {
        RewardsError::ArithmeticOverflow {
            operation: operation.to_string(),
            program: program.to_string(),
        }
    }

    /// Create a DuplicateRow error
    pub fn duplicate_row(airline: &str, country: &str, count: usize) -> Self {
        RewardsError::DuplicateRow {
            airline: airline.to_string(),
            country: country.to_string(),
            count,
        }
    }

    /// Create an InvalidSessionState error
    pub fn invalid_session_state(stage: impl ToString, action: &str) -> Self {
        RewardsError::InvalidSessionState {
            stage: stage.to_string(),
            action: action.to_string(),
        }
    }
}
