//! Rewards table row types
//!
//! A rewards row prices a one-way flight on one airline to one country. A
//! roundtrip is two such legs, so a balance covers a destination only when it
//! is at least twice the one-way cost.

use super::program::Program;
use rust_decimal::Decimal;

/// Account balance and redemption amounts, in points
pub type Points = i64;

/// One-way cost of a reward flight, in points
///
/// Decimal because source tables may carry fractional costs ("12500.0").
pub type PointsCost = Decimal;

/// One row of the rewards table
///
/// All text fields are stored trimmed and lowercased.
#[derive(Debug, Clone, PartialEq)]
pub struct RewardsRow {
    /// Airline whose program prices this flight
    pub airline: Program,

    /// One-way cost in points (never negative)
    pub points_cost: PointsCost,

    /// Destination region, e.g. "asia"
    pub destination_region: String,

    /// Destination country, e.g. "japan"
    pub destination_country: String,
}

impl RewardsRow {
    /// Build a row, normalizing region and country
    pub fn new(airline: Program, points_cost: PointsCost, region: &str, country: &str) -> Self {
        RewardsRow {
            airline,
            points_cost,
            destination_region: super::program::normalize(region),
            destination_country: super::program::normalize(country),
        }
    }
}

/// Whether a one-way cost fits a roundtrip within the balance
///
/// Equivalent to `cost <= 0.5 * balance`, evaluated as `2 * cost <= balance`
/// so no rounding is involved. A cost too large to double is never affordable.
pub fn is_affordable(cost: PointsCost, balance: Points) -> bool {
    roundtrip_cost(cost).is_some_and(|roundtrip| roundtrip <= Decimal::from(balance))
}

/// Roundtrip cost for a one-way cost, `None` on overflow
pub fn roundtrip_cost(cost: PointsCost) -> Option<PointsCost> {
    cost.checked_mul(Decimal::TWO)
}
