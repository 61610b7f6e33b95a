use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_test_db, pl, setup_test_db, write_punch_file};

#[test]
fn test_schedule_fill_inserts_default_rows() {
    let db_path = setup_test_db("schedule_fill");
    init_test_db(&db_path);

    pl().args(["--db", &db_path, "schedule", "--fill", "--month", "140406"])
        .assert()
        .success()
        .stdout(contains("31 default day(s) added"));

    pl().args(["--db", &db_path, "schedule", "--date", "14040605"])
        .assert()
        .success()
        .stdout(contains("14040605 | 07:30 - 16:30 | floating 1.0h"));
}

#[test]
fn test_schedule_fill_never_touches_existing_rows() {
    let db_path = setup_test_db("schedule_fill_twice");
    init_test_db(&db_path);

    pl().args(["--db", &db_path, "schedule", "--fill", "--month", "140409"])
        .assert()
        .success()
        .stdout(contains("30 default day(s) added"));

    pl().args([
        "--db", &db_path, "schedule", "--date", "14040910", "--entry", "08:00",
    ])
    .assert()
    .success();

    pl().args(["--db", &db_path, "schedule", "--fill", "--month", "140409"])
        .assert()
        .success()
        .stdout(contains("0 default day(s) added"));

    // the edited row survived the second fill
    pl().args(["--db", &db_path, "schedule", "--date", "14040910"])
        .assert()
        .success()
        .stdout(contains("08:00 - 16:30"));
}

#[test]
fn test_schedule_fill_without_month_needs_loaded_data() {
    let db_path = setup_test_db("schedule_fill_no_month");
    init_test_db(&db_path);

    pl().args(["--db", &db_path, "schedule", "--fill"])
        .assert()
        .failure()
        .stderr(contains("no month loaded"));
}

#[test]
fn test_schedule_fill_defaults_to_loaded_month() {
    let db_path = setup_test_db("schedule_fill_loaded");
    init_test_db(&db_path);

    let punch_file = write_punch_file(
        "schedule_fill_loaded",
        "00000010 14040601 07:31 01\n00000010 14040601 16:38 02\n",
    );
    pl().args(["--db", &db_path, "import", &punch_file])
        .assert()
        .success();

    // import already filled the month, so a fill adds nothing
    pl().args(["--db", &db_path, "schedule", "--fill"])
        .assert()
        .success()
        .stdout(contains("Month 140406: 0 default day(s) added"));
}

#[test]
fn test_schedule_day_edit_and_flags() {
    let db_path = setup_test_db("schedule_edit");
    init_test_db(&db_path);

    pl().args([
        "--db",
        &db_path,
        "schedule",
        "--date",
        "14040605",
        "--entry",
        "08:00",
        "--exit",
        "15:00",
        "--floating",
        "0.5",
        "--late-allowed",
        "true",
    ])
    .assert()
    .success()
    .stdout(contains("Schedule for 14040605 updated"));

    pl().args(["--db", &db_path, "schedule", "--date", "14040605"])
        .assert()
        .success()
        .stdout(contains("08:00 - 15:00"))
        .stdout(contains("floating 0.5h"))
        .stdout(contains("Late allowed"));
}

#[test]
fn test_schedule_holiday_flag() {
    let db_path = setup_test_db("schedule_holiday");
    init_test_db(&db_path);

    pl().args([
        "--db", &db_path, "schedule", "--date", "14040610", "--holiday", "true",
    ])
    .assert()
    .success();

    pl().args(["--db", &db_path, "schedule", "--date", "14040610"])
        .assert()
        .success()
        .stdout(contains("Holiday"));
}

#[test]
fn test_schedule_rejects_invalid_inputs() {
    let db_path = setup_test_db("schedule_invalid");
    init_test_db(&db_path);

    // month 7 has 30 days
    pl().args(["--db", &db_path, "schedule", "--date", "14040731"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));

    pl().args([
        "--db", &db_path, "schedule", "--date", "14040605", "--entry", "8h00",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid time format"));

    pl().args(["--db", &db_path, "schedule", "--fill", "--month", "140413"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}

#[test]
fn test_schedule_without_flags_lists_loaded_month() {
    let db_path = setup_test_db("schedule_list_month");
    init_test_db(&db_path);

    let punch_file = write_punch_file(
        "schedule_list_month",
        "00000010 14040601 07:31 01\n00000010 14040601 16:38 02\n",
    );
    pl().args(["--db", &db_path, "import", &punch_file])
        .assert()
        .success();

    pl().args(["--db", &db_path, "schedule"])
        .assert()
        .success()
        .stdout(contains("14040601"))
        .stdout(contains("14040631"))
        .stdout(contains("14040701").not());
}
