//! Logging setup for `recollfox`.
//!
//! Diagnostics go to stderr so stdout stays reserved for the summary
//! line (or JSON report) that scripts parse.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Verbosity mapping: `-q` = errors only, default = warn, `-v` = info,
/// `-vv` = debug, `-vvv` = trace. `RECOLLFOX_LOG` overrides everything.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(verbose: u8, quiet: bool) -> Result<(), String> {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_env("RECOLLFOX_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| e.to_string())
}
