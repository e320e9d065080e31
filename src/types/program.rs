//! Loyalty program identifiers
//!
//! Program names arrive from the rewards table and from the caller in any
//! case ("American Airlines", "american airlines "). They are normalized once
//! here so every comparison downstream is a plain string equality.

use super::error::RewardsError;
use std::fmt;

/// Trim and lowercase a free-text value (program, region or country)
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// A normalized airline loyalty program name
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Program(String);

impl Program {
    /// American Airlines AAdvantage
    pub const AMERICAN: &'static str = "american airlines";

    /// United MileagePlus
    pub const UNITED: &'static str = "united airlines";

    /// Create a program from a raw name
    ///
    /// # Errors
    ///
    /// Returns `MissingProgram` if the name is empty after trimming.
    pub fn new(name: &str) -> Result<Self, RewardsError> {
        let normalized = normalize(name);
        if normalized.is_empty() {
            return Err(RewardsError::MissingProgram);
        }
        Ok(Program(normalized))
    }

    pub fn american() -> Self {
        Program(Self::AMERICAN.to_string())
    }

    pub fn united() -> Self {
        Program(Self::UNITED.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
