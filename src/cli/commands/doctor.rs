//! Doctor command implementation.

use std::fs;

use serde::Serialize;

use crate::checkpoint::Checkpoint;
use crate::cli::commands::resolve_source;
use crate::config::Config;
use crate::error::Result;
use crate::history::HistoryReader;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
enum CheckStatus {
    Ok,
    Error,
}

#[derive(Debug, Clone, Serialize)]
struct CheckResult {
    name: String,
    status: CheckStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
struct DoctorReport {
    ok: bool,
    checks: Vec<CheckResult>,
}

fn push_check(
    checks: &mut Vec<CheckResult>,
    name: &str,
    status: CheckStatus,
    message: Option<String>,
) {
    checks.push(CheckResult {
        name: name.to_string(),
        status,
        message,
    });
}

fn has_error(checks: &[CheckResult]) -> bool {
    checks
        .iter()
        .any(|check| matches!(check.status, CheckStatus::Error))
}

fn print_report(report: &DoctorReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(report)?);
        return Ok(());
    }

    println!("recollfox doctor");
    for check in &report.checks {
        let label = match check.status {
            CheckStatus::Ok => "OK",
            CheckStatus::Error => "ERROR",
        };
        if let Some(message) = &check.message {
            println!("{label} {}: {}", check.name, message);
        } else {
            println!("{label} {}", check.name);
        }
    }
    Ok(())
}

/// Check the source store opens and the history schema answers a query.
fn check_source(config: &Config, checks: &mut Vec<CheckResult>) {
    let places_db = match resolve_source(config) {
        Ok(path) => {
            push_check(
                checks,
                "source.locate",
                CheckStatus::Ok,
                Some(path.display().to_string()),
            );
            path
        }
        Err(e) => {
            push_check(checks, "source.locate", CheckStatus::Error, Some(e.to_string()));
            return;
        }
    };

    match HistoryReader::open(&places_db).and_then(|reader| reader.read_since(i64::MAX)) {
        Ok(_) => push_check(checks, "source.read", CheckStatus::Ok, None),
        Err(e) => push_check(checks, "source.read", CheckStatus::Error, Some(e.to_string())),
    }
}

/// Check the queue directory can be created and written.
fn check_queue(config: &Config, checks: &mut Vec<CheckResult>) {
    let probe = config.queue_dir.join(".recollfox-doctor");
    let result = fs::create_dir_all(&config.queue_dir)
        .and_then(|()| fs::write(&probe, b""))
        .and_then(|()| fs::remove_file(&probe));
    match result {
        Ok(()) => push_check(
            checks,
            "queue.writable",
            CheckStatus::Ok,
            Some(config.queue_dir.display().to_string()),
        ),
        Err(e) => push_check(checks, "queue.writable", CheckStatus::Error, Some(e.to_string())),
    }
}

/// Check the checkpoint loads (a corrupt one degrades to 0, which is
/// healthy by design; only unreadable files fail here).
fn check_checkpoint(config: &Config, checks: &mut Vec<CheckResult>) {
    match Checkpoint::new(&config.state_file).load() {
        Ok(watermark) => push_check(
            checks,
            "checkpoint.load",
            CheckStatus::Ok,
            Some(format!("watermark {watermark}")),
        ),
        Err(e) => push_check(checks, "checkpoint.load", CheckStatus::Error, Some(e.to_string())),
    }
}

/// Execute the doctor command.
///
/// # Errors
///
/// Returns an error if report serialization fails. Failing checks
/// terminate the process with a non-zero exit code.
pub fn execute(config: &Config, json: bool) -> Result<()> {
    let mut checks = Vec::new();

    check_source(config, &mut checks);
    check_queue(config, &mut checks);
    check_checkpoint(config, &mut checks);

    let report = DoctorReport {
        ok: !has_error(&checks),
        checks,
    };
    print_report(&report, json)?;

    if !report.ok {
        std::process::exit(1);
    }

    Ok(())
}
