//! Count status codes in a log file for a given time window.
//!
//! Usage: cargo run --example hourly_window -- <LOG> [SINCE] [UNTIL]
//!
//! Bounds accept RFC 3339, `YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DD` (UTC).

use std::env;
use std::process::ExitCode;

use logcodeslib::{scan_file, Bound, DateRange, StatusClass};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some(path) = args.first() else {
        eprintln!("Usage: hourly_window <LOG> [SINCE] [UNTIL]");
        return ExitCode::FAILURE;
    };

    match run(path, args.get(1), args.get(2)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &str, since: Option<&String>, until: Option<&String>) -> logcodeslib::Result<()> {
    let mut range = DateRange::all();
    if let Some(since) = since {
        range = range.since(DateRange::parse_bound(since, Bound::Start)?);
    }
    if let Some(until) = until {
        range = range.until(DateRange::parse_bound(until, Bound::End)?);
    }

    let report = scan_file(path, &range)?;

    for (code, count) in report.counts.iter() {
        println!("{:<6} {:>8}  {}", code, count, StatusClass::of(code).label());
    }
    println!(
        "{} lines: {} counted, {} outside window, {} unrecognized",
        report.stats.lines, report.stats.accepted, report.stats.out_of_range, report.stats.unmatched
    );

    Ok(())
}
