//! Diagnostic logging for the CLI.

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding an `EnvFilter` directive (e.g. `logcodeslib=debug`).
pub const LOG_ENV: &str = "LOGCODES_LOG";

/// Initialize the logging system, writing to stderr so stdout stays clean
/// for table and JSON output.
///
/// With no `-v` flag the filter comes from `LOGCODES_LOG`, defaulting to
/// "warn". `-v` forces "debug" and `-vv` (or more) "trace".
pub fn init_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
