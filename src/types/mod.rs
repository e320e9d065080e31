//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Loyalty account and its balance operations
//! - `program`: Normalized program identifiers
//! - `rewards`: Rewards table rows and the affordability rule
//! - `recommendation`: Cost comparison results
//! - `error`: Error types for the rewards matcher

pub mod account;
pub mod error;
pub mod program;
pub mod recommendation;
pub mod rewards;

pub use account::Account;
pub use error::RewardsError;
pub use program::{normalize, Program};
pub use recommendation::{AirlineQuote, CostComparison, Recommendation};
pub use rewards::{is_affordable, roundtrip_cost, Points, PointsCost, RewardsRow};
