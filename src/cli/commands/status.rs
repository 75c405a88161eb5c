//! Status command implementation.

use chrono::DateTime;
use serde::Serialize;

use crate::checkpoint::Checkpoint;
use crate::cli::commands::resolve_source;
use crate::config::Config;
use crate::error::Result;

#[derive(Debug, Serialize)]
struct StatusReport {
    source: Option<String>,
    queue_dir: String,
    state_file: String,
    watermark: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    watermark_utc: Option<String>,
}

/// Execute the status command.
///
/// Shows the resolved paths and the committed watermark without
/// touching the queue. An undiscoverable profile is reported, not
/// fatal, so status stays usable on machines without Firefox.
///
/// # Errors
///
/// Returns an error if the checkpoint cannot be read or the report
/// cannot be serialized.
pub fn execute(config: &Config, json: bool) -> Result<()> {
    let source = resolve_source(config).ok();
    let watermark = Checkpoint::new(&config.state_file).load()?;

    // Firefox stores visit times in microseconds since the epoch.
    let watermark_utc = (watermark > 0)
        .then(|| DateTime::from_timestamp_micros(watermark))
        .flatten()
        .map(|dt| dt.to_rfc3339());

    let report = StatusReport {
        source: source.as_ref().map(|p| p.display().to_string()),
        queue_dir: config.queue_dir.display().to_string(),
        state_file: config.state_file.display().to_string(),
        watermark,
        watermark_utc,
    };

    if json {
        println!("{}", serde_json::to_string(&report)?);
        return Ok(());
    }

    match &report.source {
        Some(source) => println!("Source:     {source}"),
        None => println!("Source:     (no Firefox profile found)"),
    }
    println!("Queue dir:  {}", report.queue_dir);
    println!("State file: {}", report.state_file);
    match &report.watermark_utc {
        Some(utc) => println!("Watermark:  {} ({utc})", report.watermark),
        None => println!("Watermark:  {} (no export yet)", report.watermark),
    }

    Ok(())
}
