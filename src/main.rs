//! Rewards Matcher CLI
//!
//! Command-line interface for finding affordable roundtrip reward flights.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --first-balance 25000 --second-balance 30000 rewards.csv
//! cargo run -- --first-balance 25000 --second-balance 30000 --region asia rewards.csv
//! cargo run -- --first-balance 25000 --second-balance 30000 --region asia --country japan rewards.csv
//! ```
//!
//! The program loads the rewards table, lists the regions either account can
//! reach, then (when given) the countries in the chosen region, then compares
//! both airlines for the chosen country. The report goes to stdout; logs go
//! to stderr, filtered by `RUST_LOG`.
//!
//! # Exit Codes
//!
//! - 0: Success, including "not enough points"
//! - 1: Error (file not found, malformed table, duplicate rows, etc.)

use rewards_matcher::{cli, pipeline};
use std::process;

fn main() {
    let args = cli::parse_args();
    cli::init_logging();

    let request = args.to_request();
    let mut output = std::io::stdout();
    if let Err(e) = pipeline::run_request(&request, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
