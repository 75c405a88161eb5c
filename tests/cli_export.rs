//! End-to-end CLI tests for the `recollfox` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use rusqlite::Connection;
use tempfile::TempDir;

fn create_places_db(path: &Path) {
    let conn = Connection::open(path).unwrap();
    conn.execute_batch(
        "CREATE TABLE moz_places (
            id INTEGER PRIMARY KEY,
            url TEXT,
            title TEXT,
            description TEXT,
            hidden INTEGER NOT NULL DEFAULT 0,
            last_visit_date INTEGER
        );
        INSERT INTO moz_places (url, title, description, hidden, last_visit_date)
        VALUES ('http://a', 'A', '', 0, 100),
               ('http://b', 'B', '', 0, 200);",
    )
    .unwrap();
    conn.close().unwrap();
}

fn recollfox() -> Command {
    Command::cargo_bin("recollfox").unwrap()
}

#[test]
fn test_export_prints_summary_and_exits_zero() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("places.sqlite");
    create_places_db(&db);
    let queue = temp.path().join("queue");
    let state = temp.path().join("last_visit_date");

    recollfox()
        .arg("--db")
        .arg(&db)
        .arg("--queue-dir")
        .arg(&queue)
        .arg("--state-file")
        .arg(&state)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Exported 2 entries to "));

    assert_eq!(fs::read_dir(&queue).unwrap().count(), 4);
    assert_eq!(fs::read_to_string(&state).unwrap(), "200");
}

#[test]
fn test_second_run_reports_zero() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("places.sqlite");
    create_places_db(&db);
    let queue = temp.path().join("queue");
    let state = temp.path().join("last_visit_date");

    for expected in ["Exported 2 entries", "Exported 0 entries"] {
        recollfox()
            .arg("--db")
            .arg(&db)
            .arg("--queue-dir")
            .arg(&queue)
            .arg("--state-file")
            .arg(&state)
            .assert()
            .success()
            .stdout(predicate::str::contains(expected));
    }
}

#[test]
fn test_queue_dir_from_environment() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("places.sqlite");
    create_places_db(&db);
    let queue = temp.path().join("env-queue");
    let state = temp.path().join("last_visit_date");

    recollfox()
        .env("RECOLL_WEBQUEUE", &queue)
        .arg("--db")
        .arg(&db)
        .arg("--state-file")
        .arg(&state)
        .assert()
        .success();

    assert_eq!(fs::read_dir(&queue).unwrap().count(), 4);
}

#[test]
fn test_json_report() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("places.sqlite");
    create_places_db(&db);

    let output = recollfox()
        .arg("--json")
        .arg("--db")
        .arg(&db)
        .arg("--queue-dir")
        .arg(temp.path().join("queue"))
        .arg("--state-file")
        .arg(temp.path().join("state"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["count"], 2);
    assert_eq!(report["watermark"], 200);
}

#[test]
fn test_missing_source_exits_nonzero_with_diagnostic() {
    let temp = TempDir::new().unwrap();

    recollfox()
        .arg("--db")
        .arg(temp.path().join("nonexistent.sqlite"))
        .arg("--queue-dir")
        .arg(temp.path().join("queue"))
        .arg("--state-file")
        .arg(temp.path().join("state"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Source database not found"));
}

#[test]
fn test_no_profile_found_exits_nonzero() {
    // An empty HOME has no Firefox application directories.
    let temp = TempDir::new().unwrap();

    recollfox()
        .env("HOME", temp.path())
        .env_remove("RECOLL_WEBQUEUE")
        .env_remove("RECOLLFOX_STATE_FILE")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No Firefox profile found"));
}

#[test]
fn test_status_shows_watermark() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("places.sqlite");
    create_places_db(&db);
    let queue = temp.path().join("queue");
    let state = temp.path().join("last_visit_date");

    recollfox()
        .arg("--db")
        .arg(&db)
        .arg("--queue-dir")
        .arg(&queue)
        .arg("--state-file")
        .arg(&state)
        .assert()
        .success();

    recollfox()
        .arg("--db")
        .arg(&db)
        .arg("--queue-dir")
        .arg(&queue)
        .arg("--state-file")
        .arg(&state)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Watermark:  200"));
}

#[test]
fn test_doctor_reports_checks() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("places.sqlite");
    create_places_db(&db);

    recollfox()
        .arg("--db")
        .arg(&db)
        .arg("--queue-dir")
        .arg(temp.path().join("queue"))
        .arg("--state-file")
        .arg(temp.path().join("state"))
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("OK source.read"))
        .stdout(predicate::str::contains("OK queue.writable"));
}

#[test]
fn test_doctor_fails_without_source() {
    let temp = TempDir::new().unwrap();

    recollfox()
        .arg("--db")
        .arg(temp.path().join("missing.sqlite"))
        .arg("--queue-dir")
        .arg(temp.path().join("queue"))
        .arg("--state-file")
        .arg(temp.path().join("state"))
        .arg("doctor")
        .assert()
        .failure()
        .stdout(predicate::str::contains("ERROR source.locate"));
}
