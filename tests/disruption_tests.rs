use predicates::str::contains;

mod common;
use common::{init_db, init_db_with_data, setup_test_db, ss_db};

#[test]
fn test_init_creates_schema() {
    let db = setup_test_db("init_schema");
    ss_db(&db)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    ss_db(&db)
        .args(["db", "--info"])
        .assert()
        .success()
        .stdout(contains("Disruptions:"));
}

#[test]
fn test_add_and_list_single_day() {
    let db = setup_test_db("add_list");
    init_db_with_data(&db);

    ss_db(&db)
        .args(["list", "--period", "2099-06"])
        .assert()
        .success()
        .stdout(contains("2099-06-01"))
        .stdout(contains("All Day"))
        .stdout(contains("09:00 - 12:00"))
        .stdout(contains("Strong wind"));
}

#[test]
fn test_touching_interval_is_a_conflict() {
    let db = setup_test_db("touching_conflict");
    init_db_with_data(&db);

    ss_db(&db)
        .args([
            "add",
            "2099-06-10",
            "--start",
            "12:00",
            "--end",
            "15:00",
            "--reason",
            "Swell",
        ])
        .assert()
        .failure()
        .stderr(contains("already exists on 2099-06-10"));

    ss_db(&db)
        .args([
            "add",
            "2099-06-10",
            "--start",
            "13:00",
            "--end",
            "15:00",
            "--reason",
            "Swell",
        ])
        .assert()
        .success();
}

#[test]
fn test_full_day_blocks_partial_on_same_date() {
    let db = setup_test_db("full_day_blocks");
    init_db_with_data(&db);

    ss_db(&db)
        .args([
            "add",
            "2099-06-01",
            "--start",
            "18:00",
            "--end",
            "19:00",
            "--reason",
            "Fog",
        ])
        .assert()
        .failure()
        .stderr(contains("2099-06-01"));
}

#[test]
fn test_range_creates_one_per_day() {
    let db = setup_test_db("range_add");
    init_db(&db);

    ss_db(&db)
        .args([
            "add",
            "2099-07-01",
            "--to",
            "2099-07-03",
            "--full-day",
            "--reason",
            "Hurricane watch",
        ])
        .assert()
        .success()
        .stdout(contains("3 disruptions created"));

    ss_db(&db)
        .args(["list", "--period", "2099-07-01:2099-07-03"])
        .assert()
        .success()
        .stdout(contains("2099-07-01"))
        .stdout(contains("2099-07-02"))
        .stdout(contains("2099-07-03"));
}

#[test]
fn test_range_with_conflict_writes_nothing() {
    let db = setup_test_db("range_conflict");
    init_db_with_data(&db);

    ss_db(&db)
        .args([
            "add",
            "2099-06-09",
            "--to",
            "2099-06-11",
            "--full-day",
            "--reason",
            "Gale",
        ])
        .assert()
        .failure()
        .stderr(contains("2099-06-10"));

    ss_db(&db)
        .args(["list", "--period", "2099-06-09"])
        .assert()
        .success()
        .stdout(contains("No disruptions"));
}

#[test]
fn test_reversed_range_is_rejected() {
    let db = setup_test_db("reversed_range");
    init_db(&db);

    ss_db(&db)
        .args([
            "add",
            "2099-07-03",
            "--to",
            "2099-07-01",
            "--full-day",
            "--reason",
            "Gale",
        ])
        .assert()
        .failure()
        .stderr(contains("must not be before"));
}

#[test]
fn test_validation_messages() {
    let db = setup_test_db("validation");
    init_db(&db);

    ss_db(&db)
        .args(["add", "2099-07-01", "--full-day"])
        .assert()
        .failure()
        .stderr(contains("provide a reason"));

    ss_db(&db)
        .args(["add", "2099-07-01", "--start", "09:00", "--reason", "Fog"])
        .assert()
        .failure()
        .stderr(contains("both start and end times"));

    ss_db(&db)
        .args([
            "add",
            "2099-07-01",
            "--full-day",
            "--reason",
            "Fog",
            "--refund",
            "0",
        ])
        .assert()
        .failure()
        .stderr(contains("valid refund amount"));

    ss_db(&db)
        .args(["add", "2099-07-01", "--start", "9am", "--end", "10:00", "--reason", "Fog"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));
}

#[test]
fn test_update_and_delete() {
    let db = setup_test_db("update_delete");
    init_db_with_data(&db);

    // ids follow insertion order
    ss_db(&db)
        .args(["update", "2", "--reason", "Thunderstorms", "--refund", "15"])
        .assert()
        .success()
        .stdout(contains("Thunderstorms"));

    ss_db(&db)
        .args(["list", "--all"])
        .assert()
        .success()
        .stdout(contains("Thunderstorms"))
        .stdout(contains("15.00"));

    ss_db(&db).args(["del", "1"]).assert().success();

    ss_db(&db)
        .args(["del", "1"])
        .assert()
        .failure()
        .stderr(contains("not found"));

    ss_db(&db)
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("edit"))
        .stdout(contains("del"));
}

#[test]
fn test_update_overlap_is_reported() {
    let db = setup_test_db("update_overlap");
    init_db_with_data(&db);

    ss_db(&db)
        .args(["update", "2", "--date", "2099-06-01"])
        .assert()
        .success()
        .stdout(contains("now overlaps"));
}
