//! Redemption session
//!
//! Drives one redemption flow over a matcher and two accounts:
//!
//! ```text
//! Start ──offer_regions──▶ Start (regions offered)
//!       ──select_region──▶ RegionSelected
//!       ──select_country─▶ CountrySelected ──▶ Compared
//!       ──finish─────────▶ End
//! ```
//!
//! Each step is gated on the previous query returning something. An empty
//! region or country list ends the session early with `CannotRedeem`.
//! The session only computes. Prompting and printing belong to the caller.

use crate::core::matcher::Matcher;
use crate::types::{normalize, Account, CostComparison, RewardsError};
use std::fmt;
use tracing::{debug, info};

/// Where a session is in the redemption flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStage {
    Start,
    RegionSelected,
    CountrySelected,
    Compared,
    End,
}

impl fmt::Display for SessionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionStage::Start => "start",
            SessionStage::RegionSelected => "region selected",
            SessionStage::CountrySelected => "country selected",
            SessionStage::Compared => "compared",
            SessionStage::End => "end",
        };
        f.write_str(name)
    }
}

/// Result of one listing step
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Non-empty options for the next selection
    Options(Vec<String>),

    /// Nothing affordable; the session has ended
    CannotRedeem,
}

/// How a session ended
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// No affordable region, or no affordable country in the chosen region
    CannotRedeem,

    /// Both airlines were priced for the chosen country
    Compared(CostComparison),

    /// The caller finished before reaching a comparison
    Abandoned,
}

/// One redemption flow over two accounts
#[derive(Debug)]
pub struct RedemptionSession<'a> {
    matcher: Matcher<'a>,
    first: &'a Account,
    second: &'a Account,
    stage: SessionStage,
    regions: Option<Vec<String>>,
    region: Option<String>,
    outcome: Option<SessionOutcome>,
}

impl<'a> RedemptionSession<'a> {
    pub fn new(matcher: Matcher<'a>, first: &'a Account, second: &'a Account) -> Self {
        RedemptionSession {
            matcher,
            first,
            second,
            stage: SessionStage::Start,
            regions: None,
            region: None,
            outcome: None,
        }
    }

    pub fn stage(&self) -> SessionStage {
        self.stage
    }

    /// Region chosen in `select_region`, normalized
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// List the regions either account can reach
    ///
    /// # Errors
    ///
    /// `InvalidSessionState` unless the session is at `Start`.
    pub fn offer_regions(&mut self) -> Result<Step, RewardsError> {
        self.expect_stage(SessionStage::Start, "offer regions")?;

        let regions = self.matcher.combined_regions(self.first, self.second);
        if regions.is_empty() {
            info!("no affordable region on either program");
            return Ok(self.end_cannot_redeem());
        }

        self.regions = Some(regions.clone());
        Ok(Step::Options(regions))
    }

    /// Choose a region and list the countries either account can reach there
    ///
    /// A region outside the offered list is not rejected. It simply yields no
    /// countries.
    ///
    /// # Errors
    ///
    /// `InvalidSessionState` unless regions were offered and the session is
    /// still at `Start`.
    pub fn select_region(&mut self, region: &str) -> Result<Step, RewardsError> {
        self.expect_stage(SessionStage::Start, "select region")?;
        if self.regions.is_none() {
            return Err(RewardsError::invalid_session_state(
                "start (regions not offered)",
                "select region",
            ));
        }

        let region = normalize(region);
        let countries = self
            .matcher
            .combined_countries(self.first, self.second, &region);
        debug!(region = %region, count = countries.len(), "region selected");

        self.stage = SessionStage::RegionSelected;
        self.region = Some(region);

        if countries.is_empty() {
            info!("no affordable country in selected region");
            return Ok(self.end_cannot_redeem());
        }

        Ok(Step::Options(countries))
    }

    /// Choose a country and compare both airlines' costs for it
    ///
    /// # Errors
    ///
    /// - `InvalidSessionState` unless the session is at `RegionSelected`
    /// - `DuplicateRow` if the table holds duplicate rows for the country; the
    ///   session ends without an outcome
    pub fn select_country(&mut self, country: &str) -> Result<CostComparison, RewardsError> {
        self.expect_stage(SessionStage::RegionSelected, "select country")?;
        self.stage = SessionStage::CountrySelected;

        let comparison = match self.matcher.compare_country(self.first, self.second, country) {
            Ok(comparison) => comparison,
            Err(e) => {
                self.stage = SessionStage::End;
                return Err(e);
            }
        };

        self.stage = SessionStage::Compared;
        self.outcome = Some(SessionOutcome::Compared(comparison.clone()));
        Ok(comparison)
    }

    /// End the session and report how it ended
    pub fn finish(mut self) -> SessionOutcome {
        self.stage = SessionStage::End;
        self.outcome.take().unwrap_or(SessionOutcome::Abandoned)
    }

    fn end_cannot_redeem(&mut self) -> Step {
        self.stage = SessionStage::End;
        self.outcome = Some(SessionOutcome::CannotRedeem);
        Step::CannotRedeem
    }

    fn expect_stage(&self, expected: SessionStage, action: &str) -> Result<(), RewardsError> {
        if self.stage != expected {
            return Err(RewardsError::invalid_session_state(self.stage, action));
        }
        Ok(())
    }
}
