//! Export command implementation.

use crate::cli::commands::resolve_source;
use crate::config::Config;
use crate::error::Result;
use crate::export::Exporter;
use crate::format;

/// Execute the export command.
///
/// # Errors
///
/// Returns an error if the source store cannot be located or read, or
/// if a queue or checkpoint write fails.
pub fn execute(config: &Config, json: bool) -> Result<()> {
    let places_db = resolve_source(config)?;
    tracing::debug!("Using source store {}", places_db.display());

    let exporter = Exporter::new(places_db, &config.queue_dir, &config.state_file);
    let report = exporter.run()?;

    if json {
        println!("{}", format::json_report(&report)?);
    } else {
        println!("{}", format::summary_line(&report));
    }

    Ok(())
}
