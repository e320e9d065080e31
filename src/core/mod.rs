//! Core business logic module
//!
//! This module contains the redemption matching components:
//! - `table` - The immutable in-memory rewards table
//! - `filter` - Composable row predicates
//! - `matcher` - Region, country and cost queries, and the airline comparison
//! - `session` - The redemption flow as a state machine

pub mod filter;
pub mod matcher;
pub mod session;
pub mod table;

pub use filter::RowFilter;
pub use matcher::{compare_costs, Matcher};
pub use session::{RedemptionSession, SessionOutcome, SessionStage, Step};
pub use table::RewardsTable;
