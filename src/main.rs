//! `recollfox` - Incremental Firefox history exporter for Recoll
//!
//! Runs from cron (or a systemd timer) every minute and republishes new
//! history entries into the Recoll web queue. Non-invasive design: the
//! browser's database is only ever opened through an immutable snapshot.

use recollfox::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
