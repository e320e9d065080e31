//! Redemption pipeline
//!
//! Runs one non-interactive redemption request end to end:
//! 1. Loads the rewards table
//! 2. Opens both accounts
//! 3. Drives a `RedemptionSession` as far as the request's selections go
//! 4. Renders every step through the report module
//!
//! Without a region the pipeline stops after listing regions; without a
//! country it stops after listing countries.

use crate::core::{Matcher, RedemptionSession, RewardsTable, SessionOutcome, Step};
use crate::io::report::{write_cannot_redeem, write_comparison, write_countries, write_regions};
use crate::types::{Account, Points, Program, RewardsError};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// One program and its balance
#[derive(Debug, Clone, PartialEq)]
pub struct AccountSpec {
    pub program: String,
    pub balance: Points,
}

impl AccountSpec {
    pub fn open(&self) -> Result<Account, RewardsError> {
        Account::new(Program::new(&self.program)?, self.balance)
    }
}

/// Everything needed to answer one redemption query
#[derive(Debug, Clone, PartialEq)]
pub struct RedemptionRequest {
    pub table_path: PathBuf,
    pub first: AccountSpec,
    pub second: AccountSpec,
    pub region: Option<String>,
    pub country: Option<String>,
}

/// Load the table named by the request and answer it
pub fn run_request(
    request: &RedemptionRequest,
    output: &mut dyn Write,
) -> Result<SessionOutcome, RewardsError> {
    let table = RewardsTable::load_path(&request.table_path)?;
    answer(&table, request, output)
}

/// Answer a request against an already-loaded table
pub fn answer(
    table: &RewardsTable,
    request: &RedemptionRequest,
    output: &mut dyn Write,
) -> Result<SessionOutcome, RewardsError> {
    let first = request.first.open()?;
    let second = request.second.open()?;
    info!(
        first = %first.program(),
        first_balance = first.balance_check(),
        second = %second.program(),
        second_balance = second.balance_check(),
        "answering redemption request"
    );

    let mut session = RedemptionSession::new(Matcher::new(table), &first, &second);

    match session.offer_regions()? {
        Step::Options(regions) => write_regions(&regions, output)?,
        Step::CannotRedeem => {
            write_cannot_redeem(first.program(), second.program(), output)?;
            return Ok(session.finish());
        }
    }

    let Some(region) = request.region.as_deref() else {
        return Ok(session.finish());
    };

    match session.select_region(region)? {
        Step::Options(countries) => write_countries(&countries, output)?,
        Step::CannotRedeem => {
            write_cannot_redeem(first.program(), second.program(), output)?;
            return Ok(session.finish());
        }
    }

    let Some(country) = request.country.as_deref() else {
        return Ok(session.finish());
    };

    let comparison = session.select_country(country)?;
    write_comparison(&comparison, output)?;

    Ok(session.finish())
}
