//! Rewards Matcher Library
//! # Overview
//!
//! This library answers one question for a traveller holding points on two
//! airline loyalty programs: which roundtrip destinations can I afford, and
//! which airline is cheaper for the one I pick?
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Program, RewardsRow, errors, etc.)
//! - [`cli`] - CLI arguments parsing and log setup
//! - [`core`] - Business logic components:
//!   - [`core::table`] - The immutable rewards table
//!   - [`core::filter`] - Row predicates
//!   - [`core::matcher`] - Region, country and cost queries; airline comparison
//!   - [`core::session`] - The redemption flow as a state machine
//! - [`io`] - CSV loading and text reports
//! - [`pipeline`] - One request, end to end
//!
//! # Affordability
//!
//! A roundtrip is two one-way legs of equal cost, so a destination is
//! affordable when its one-way cost is at most half the account balance.
//!
//! # Recommendations
//!
//! - **AirlineA** / **AirlineB**: that airline is cheaper, or the only one affordable
//! - **Indifferent**: both cost the same
//! - **NeitherAffordable**: no affordable fare on either airline

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod types;

pub use crate::core::{compare_costs, Matcher, RedemptionSession, RewardsTable, SessionOutcome, Step};
pub use types::{
    Account, AirlineQuote, CostComparison, Points, PointsCost, Program, Recommendation,
    RewardsError, RewardsRow,
};
