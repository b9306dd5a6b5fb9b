use predicates::str::contains;
use std::env;
use std::path::PathBuf;

mod common;
use common::plog;

/// Create a unique test DB path inside the system temp dir
fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punchlog.sqlite", name));

    let db_path = path.to_string_lossy().to_string();

    // Remove the file if a previous run left one behind
    std::fs::remove_file(&db_path).ok();

    db_path
}

#[test]
fn test_full_punch_cycle() {
    let db = setup_test_db("punch_cycle");

    plog()
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success();

    // 2025-03-10 is a Monday: yesterday is a Sunday, so no pending absence.
    plog()
        .args(["--db", &db, "login", "Alice", "--date", "2025-03-10"])
        .assert()
        .success()
        .stdout(contains("Welcome, Alice!"))
        .stdout(contains("No pending absences"));

    plog()
        .args(["--db", &db, "in", "--date", "2025-03-10", "--at", "09:00"])
        .assert()
        .success()
        .stdout(contains("Clocked in at 09:00"));

    plog()
        .args(["--db", &db, "out", "--date", "2025-03-10", "--at", "10:30"])
        .assert()
        .success()
        .stdout(contains("Clocked out at 10:30"))
        .stdout(contains("01h 30m"));

    plog()
        .args(["--db", &db, "status", "--date", "2025-03-10"])
        .assert()
        .success()
        .stdout(contains("Alice"))
        .stdout(contains("09:00"))
        .stdout(contains("completed"));
}

#[test]
fn test_double_clock_in_is_rejected() {
    let db = setup_test_db("double_in");

    plog()
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success();
    plog()
        .args(["--db", &db, "login", "Alice", "--date", "2025-03-10"])
        .assert()
        .success();

    plog()
        .args(["--db", &db, "in", "--date", "2025-03-10", "--at", "09:00"])
        .assert()
        .success();

    plog()
        .args(["--db", &db, "in", "--date", "2025-03-10", "--at", "09:10"])
        .assert()
        .failure()
        .stderr(contains("already active"));
}

#[test]
fn test_clock_out_with_nothing_active_is_a_notice() {
    let db = setup_test_db("idle_out");

    plog()
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success();
    plog()
        .args(["--db", &db, "login", "Alice", "--date", "2025-03-10"])
        .assert()
        .success();

    plog()
        .args(["--db", &db, "out", "--date", "2025-03-10", "--at", "10:00"])
        .assert()
        .success()
        .stdout(contains("No active session"));
}

#[test]
fn test_punch_commands_require_login() {
    let db = setup_test_db("no_login");

    plog()
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success();

    plog()
        .args(["--db", &db, "in", "--date", "2025-03-10", "--at", "09:00"])
        .assert()
        .failure()
        .stderr(contains("No user is logged in"));
}

#[test]
fn test_close_is_idempotent_and_reports_goal() {
    let db = setup_test_db("close_twice");

    plog()
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success();
    plog()
        .args(["--db", &db, "login", "Alice", "--date", "2025-03-10"])
        .assert()
        .success();

    plog()
        .args(["--db", &db, "in", "--date", "2025-03-10", "--at", "09:00"])
        .assert()
        .success();

    // close clocks out the dangling session first
    plog()
        .args(["--db", &db, "close", "--date", "2025-03-10", "--at", "12:00"])
        .assert()
        .success()
        .stdout(contains("Workday 2025-03-10 closed"))
        .stdout(contains("03h 00m"))
        .stdout(contains("goal met"));

    plog()
        .args(["--db", &db, "close", "--date", "2025-03-10", "--at", "12:30"])
        .assert()
        .success()
        .stdout(contains("Workday 2025-03-10 closed"))
        .stdout(contains("03h 00m"));
}

#[test]
fn test_week_view_and_streak() {
    let db = setup_test_db("week_view");

    plog()
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success();
    plog()
        .args(["--db", &db, "login", "Alice", "--date", "2025-03-10"])
        .assert()
        .success();

    plog()
        .args(["--db", &db, "in", "--date", "2025-03-10", "--at", "08:00"])
        .assert()
        .success();
    plog()
        .args(["--db", &db, "out", "--date", "2025-03-10", "--at", "11:30"])
        .assert()
        .success();
    plog()
        .args(["--db", &db, "close", "--date", "2025-03-10", "--at", "11:30"])
        .assert()
        .success();

    plog()
        .args(["--db", &db, "week", "--date", "2025-03-10"])
        .assert()
        .success()
        .stdout(contains("Last 7 days"))
        .stdout(contains("2025-03-10"))
        .stdout(contains("goal met"))
        .stdout(contains("Streak: 1 day(s)"));
}

#[test]
fn test_login_detects_pending_absence_and_justify_clears_it() {
    let db = setup_test_db("absence_flow");

    plog()
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success();

    // 2025-03-11 is a Tuesday: Monday 2025-03-10 has no record.
    plog()
        .args(["--db", &db, "login", "Alice", "--date", "2025-03-11"])
        .assert()
        .success()
        .stdout(contains("No activity recorded for 2025-03-10"));

    plog()
        .args(["--db", &db, "justify", "2025-03-10", "traveled"])
        .assert()
        .success()
        .stdout(contains("Absence on 2025-03-10 justified"));

    plog()
        .args(["--db", &db, "login", "Alice", "--date", "2025-03-11"])
        .assert()
        .success()
        .stdout(contains("No pending absences"));

    plog()
        .args(["--db", &db, "week", "--date", "2025-03-11"])
        .assert()
        .success()
        .stdout(contains("(traveled)"));
}

#[test]
fn test_blank_justification_is_rejected() {
    let db = setup_test_db("blank_just");

    plog()
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success();
    plog()
        .args(["--db", &db, "login", "Alice", "--date", "2025-03-11"])
        .assert()
        .success();

    plog()
        .args(["--db", &db, "justify", "2025-03-10", "   "])
        .assert()
        .failure()
        .stderr(contains("must not be empty"));
}

#[test]
fn test_login_remembers_last_name() {
    let db = setup_test_db("last_name");

    plog()
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success();
    plog()
        .args(["--db", &db, "login", "Alice", "--date", "2025-03-10"])
        .assert()
        .success();

    plog()
        .args(["--db", &db, "logout"])
        .assert()
        .success()
        .stdout(contains("Goodbye, Alice!"));

    // No name given: the remembered one is reused.
    plog()
        .args(["--db", &db, "login", "--date", "2025-03-10"])
        .assert()
        .success()
        .stdout(contains("Welcome, Alice!"));
}

#[test]
fn test_operations_are_written_to_the_internal_log() {
    let db = setup_test_db("oplog");

    plog()
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success();
    plog()
        .args(["--db", &db, "login", "Alice", "--date", "2025-03-10"])
        .assert()
        .success();
    plog()
        .args(["--db", &db, "in", "--date", "2025-03-10", "--at", "09:00"])
        .assert()
        .success();

    plog()
        .args(["--db", &db, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("LOGIN"))
        .stdout(contains("IN"))
        .stdout(contains("Alice"));
}

#[test]
fn test_db_maintenance_commands() {
    let db = setup_test_db("maintenance");

    plog()
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success();

    plog()
        .args(["--db", &db, "db", "--check", "--info"])
        .assert()
        .success()
        .stdout(contains("Database integrity OK"))
        .stdout(contains("Day records"));
}

#[test]
fn test_status_shows_nothing_for_an_untouched_day() {
    let db = setup_test_db("empty_status");

    plog()
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success();
    plog()
        .args(["--db", &db, "login", "Alice", "--date", "2025-03-10"])
        .assert()
        .success();

    plog()
        .args(["--db", &db, "status", "--date", "2025-03-10"])
        .assert()
        .success()
        .stdout(contains("No sessions yet today"))
        .stdout(contains("00h 00m of 03h 00m"));
}
