//! Cost comparison results
//!
//! Structured outcomes of comparing two airlines' one-way costs for the same
//! country. Rendering them is the caller's concern (see `io::report`).

use super::program::Program;
use super::rewards::{roundtrip_cost, PointsCost};

/// Which airline to redeem with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    /// The first airline is cheaper, or the only one affordable
    AirlineA,

    /// The second airline is cheaper, or the only one affordable
    AirlineB,

    /// Both airlines cost the same
    Indifferent,

    /// Neither airline has an affordable fare
    NeitherAffordable,
}

/// Quote for one airline: its program and affordable one-way cost, if any
#[derive(Debug, Clone, PartialEq)]
pub struct AirlineQuote {
    pub program: Program,

    /// `None` when the country is absent or unaffordable for this airline
    pub one_way_cost: Option<PointsCost>,
}

impl AirlineQuote {
    /// Displayed roundtrip cost (two one-way legs), if the cost is present
    pub fn roundtrip_cost(&self) -> Option<PointsCost> {
        self.one_way_cost.and_then(roundtrip_cost)
    }
}

/// Full comparison of both airlines for one country
#[derive(Debug, Clone, PartialEq)]
pub struct CostComparison {
    /// Destination country, normalized
    pub country: String,
    pub first: AirlineQuote,
    pub second: AirlineQuote,
    pub recommendation: Recommendation,
}

impl CostComparison {
    /// Quote of the recommended airline, `None` when indifferent or neither
    pub fn recommended(&self) -> Option<&AirlineQuote> {
        match self.recommendation {
            Recommendation::AirlineA => Some(&self.first),
            Recommendation::AirlineB => Some(&self.second),
            Recommendation::Indifferent | Recommendation::NeitherAffordable => None,
        }
    }
}
