//! Text rendering of redemption results
//!
//! Turns the structured results of the matcher and session into the lines a
//! user reads. Nothing here computes. Every function writes to any
//! `io::Write`, so output can go to stdout or a buffer in tests.

use crate::types::{AirlineQuote, CostComparison, PointsCost, Program, Recommendation, RewardsError};
use std::io::Write;

/// Write the affordable regions, one per line, under a heading
pub fn write_regions(regions: &[String], output: &mut dyn Write) -> Result<(), RewardsError> {
    writeln!(
        output,
        "All available regional destinations for a roundtrip flight using current rewards balances:"
    )?;
    write_list(regions, output)
}

/// Write the affordable countries, one per line, under a heading
pub fn write_countries(countries: &[String], output: &mut dyn Write) -> Result<(), RewardsError> {
    writeln!(
        output,
        "All available country destinations for a roundtrip flight using current rewards balances:"
    )?;
    write_list(countries, output)
}

/// Write the message for a flow that found nothing affordable
pub fn write_cannot_redeem(
    first: &Program,
    second: &Program,
    output: &mut dyn Write,
) -> Result<(), RewardsError> {
    writeln!(
        output,
        "You do not have enough points to redeem roundtrip flights on either {} or {}.",
        title_case(first.as_str()),
        title_case(second.as_str())
    )?;
    Ok(())
}

/// Write each present roundtrip cost, then the recommendation
pub fn write_comparison(
    comparison: &CostComparison,
    output: &mut dyn Write,
) -> Result<(), RewardsError> {
    for quote in [&comparison.first, &comparison.second] {
        write_quote(quote, output)?;
    }

    let first = title_case(comparison.first.program.as_str());
    let second = title_case(comparison.second.program.as_str());

    match comparison.recommendation {
        Recommendation::AirlineA => writeln!(
            output,
            "We recommend you redeem with {} as the points cost is cheaper.",
            first
        )?,
        Recommendation::AirlineB => writeln!(
            output,
            "We recommend you redeem with {} as the points cost is cheaper.",
            second
        )?,
        Recommendation::Indifferent => writeln!(
            output,
            "You may fly with either {} or {} for the same points cost.",
            first, second
        )?,
        Recommendation::NeitherAffordable => writeln!(
            output,
            "Neither {} nor {} has an affordable roundtrip flight to {}.",
            first,
            second,
            title_case(&comparison.country)
        )?,
    }

    Ok(())
}

fn write_quote(quote: &AirlineQuote, output: &mut dyn Write) -> Result<(), RewardsError> {
    if let Some(cost) = quote.roundtrip_cost() {
        writeln!(
            output,
            "This roundtrip flight on {} costs {} points.",
            title_case(quote.program.as_str()),
            format_points(cost)
        )?;
    }
    Ok(())
}

fn write_list(items: &[String], output: &mut dyn Write) -> Result<(), RewardsError> {
    for item in items {
        writeln!(output, "{}", item)?;
    }
    Ok(())
}

/// Points without trailing fractional zeros ("20000.0" prints as "20000")
pub fn format_points(points: PointsCost) -> String {
    points.normalize().to_string()
}

/// "united airlines" -> "United Airlines"
fn title_case(value: &str) -> String {
    value
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
