//! # logcodes
//!
//! A CLI tool for counting HTTP status codes in web server access logs.
//!
//! ## Overview
//!
//! logcodes is built on top of logcodeslib. It reads access logs from files,
//! directories or stdin, keeps the requests whose timestamp falls inside an
//! optional time window, and prints how many times each status code occurred.
//!
//! ## Features
//!
//! - **Time windows**: `--since` and `--until`, each optional and inclusive
//! - **Grouping**: per code (default), per status class, or per file
//! - **Glob filtering**: Include/exclude files with glob patterns
//! - **Multiple output formats**: Table (default), JSON
//!
//! ## Usage
//!
//! ```bash
//! # Count codes in a single log
//! logcodes /var/log/nginx/access.log
//!
//! # Read from stdin
//! zcat access.log.gz | logcodes
//!
//! # Only one afternoon, grouped by class
//! logcodes logs/ --since "2023-01-10 12:00:00" --until "2023-01-10 18:00:00" --by-class
//!
//! # Per-file totals for rotated logs, as JSON
//! logcodes logs/ --include "**/access.log*" --by-file --output json
//! ```

mod logging;
mod render;

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use logcodeslib::{
    scan_paths, scan_reader, Aggregation, Bound, CodeQuerySet, DateRange, FileReport,
    FilterConfig, OrderBy, OrderDirection, Ordering, ScanOptions, ScanResult,
};
use tracing::debug;

/// Label used for input read from stdin
const STDIN_LABEL: &str = "<stdin>";

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("logcodes")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Count HTTP status codes in access logs, optionally within a time window")
        .arg(
            Arg::new("paths")
                .num_args(0..)
                .action(ArgAction::Append)
                .help("Log files or directories to scan (reads stdin when omitted or '-')"),
        )
        .arg(
            Arg::new("since")
                .long("since")
                .value_name("TIME")
                .help("Only count requests at or after TIME (RFC 3339, 'YYYY-MM-DD HH:MM:SS' or 'YYYY-MM-DD', UTC)"),
        )
        .arg(
            Arg::new("until")
                .long("until")
                .value_name("TIME")
                .help("Only count requests at or before TIME (a bare date means the end of that day)"),
        )
        .arg(
            Arg::new("include")
                .short('i')
                .long("include")
                .action(ArgAction::Append)
                .help("Include files matching glob pattern"),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .action(ArgAction::Append)
                .help("Exclude files matching glob pattern"),
        )
        .arg(
            Arg::new("by-class")
                .long("by-class")
                .action(ArgAction::SetTrue)
                .conflicts_with("by-file")
                .help("Group codes by class (2xx, 3xx, 4xx, 5xx, other)"),
        )
        .arg(
            Arg::new("by-file")
                .short('f')
                .long("by-file")
                .action(ArgAction::SetTrue)
                .help("Show accepted requests per file"),
        )
        .arg(
            Arg::new("sort")
                .short('s')
                .long("sort")
                .value_parser(["first", "label", "count"])
                .default_value("first")
                .help("Row order: first appearance, label or count"),
        )
        .arg(
            Arg::new("desc")
                .long("desc")
                .action(ArgAction::SetTrue)
                .help("Sort in descending order"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Log diagnostics to stderr (-v debug, -vv trace)"),
        )
}

/// Build the time window from --since/--until
fn build_range(matches: &ArgMatches) -> Result<DateRange, anyhow::Error> {
    let mut range = DateRange::all();

    if let Some(since) = matches.get_one::<String>("since") {
        range = range.since(DateRange::parse_bound(since, Bound::Start)?);
    }
    if let Some(until) = matches.get_one::<String>("until") {
        range = range.until(DateRange::parse_bound(until, Bound::End)?);
    }

    Ok(range)
}

/// Extract a repeatable string argument
fn extract_many<'a>(matches: &'a ArgMatches, id: &str) -> Vec<&'a str> {
    matches
        .get_many::<String>(id)
        .map(|v| v.map(String::as_str).collect())
        .unwrap_or_default()
}

/// Build filter config from matches
fn build_filter(matches: &ArgMatches) -> Result<FilterConfig, anyhow::Error> {
    Ok(FilterConfig::new()
        .include_many(&extract_many(matches, "include"))?
        .exclude_many(&extract_many(matches, "exclude"))?)
}

/// Build row ordering from --sort/--desc
fn build_ordering(matches: &ArgMatches) -> Result<Ordering, anyhow::Error> {
    let by: OrderBy = matches
        .get_one::<String>("sort")
        .map(|s| s.parse())
        .transpose()
        .map_err(|e: String| anyhow::anyhow!(e))?
        .unwrap_or_default();
    let direction = if matches.get_flag("desc") {
        OrderDirection::Descending
    } else {
        OrderDirection::Ascending
    };

    Ok(Ordering { by, direction })
}

fn extract_aggregation(matches: &ArgMatches) -> Aggregation {
    if matches.get_flag("by-file") {
        Aggregation::ByFile
    } else if matches.get_flag("by-class") {
        Aggregation::ByClass
    } else {
        Aggregation::ByCode
    }
}

/// Scan stdin as a single input
fn scan_stdin(range: DateRange, per_file: bool) -> Result<ScanResult, anyhow::Error> {
    let report = scan_reader(io::stdin().lock(), &range).context("failed to read stdin")?;
    let file = FileReport {
        path: STDIN_LABEL.into(),
        report,
    };
    Ok(ScanResult::from_reports(range, vec![file], per_file))
}

/// Run the command and return what should be printed on stdout
fn run(matches: &ArgMatches) -> Result<String, anyhow::Error> {
    let range = build_range(matches)?;
    let filter = build_filter(matches)?;
    let ordering = build_ordering(matches)?;
    let aggregation = extract_aggregation(matches);
    let per_file = aggregation == Aggregation::ByFile;

    let paths: Vec<&String> = matches
        .get_many::<String>("paths")
        .map(|v| v.collect())
        .unwrap_or_default();

    let result = match paths.as_slice() {
        [] => scan_stdin(range, per_file)?,
        [only] if only.as_str() == "-" => scan_stdin(range, per_file)?,
        _ => {
            if paths.iter().any(|p| p.as_str() == "-") {
                anyhow::bail!("'-' (stdin) cannot be combined with other paths");
            }
            let options = ScanOptions::new()
                .range(range)
                .filter(filter)
                .per_file(per_file);
            scan_paths(&paths, options)?
        }
    };
    debug!(
        files = result.file_count,
        accepted = result.total.stats.accepted,
        "scan finished"
    );

    let qs = CodeQuerySet::from_result(&result, aggregation, ordering);

    match matches.get_one::<String>("output").map(String::as_str) {
        Some("json") => render::render_json(&result, &qs),
        _ => render::render_table(&qs),
    }
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    logging::init_logging(matches.get_count("verbose"));

    match run(&matches) {
        Ok(output) => {
            if output.ends_with('\n') {
                print!("{}", output);
            } else {
                println!("{}", output);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
