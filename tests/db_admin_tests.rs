use predicates::str::contains;

mod common;
use common::{init_test_db, pl, setup_test_db, write_punch_file};

#[test]
fn test_db_check_reports_ok() {
    let db_path = setup_test_db("db_check");
    init_test_db(&db_path);

    pl().args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Database integrity: ok"));
}

#[test]
fn test_db_info_shows_table_counts() {
    let db_path = setup_test_db("db_info");
    init_test_db(&db_path);

    let punch_file = write_punch_file(
        "db_info",
        "00000010 14040601 07:31 01\n00000010 14040601 16:38 02\n",
    );
    pl().args(["--db", &db_path, "import", &punch_file])
        .assert()
        .success();

    pl().args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("sessions:       1"))
        .stdout(contains("work_schedules: 31"))
        .stdout(contains("exceptions:     0"));
}

#[test]
fn test_db_vacuum() {
    let db_path = setup_test_db("db_vacuum");
    init_test_db(&db_path);

    pl().args(["--db", &db_path, "db", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Database vacuumed"));
}

#[test]
fn test_db_without_flags_prints_hint() {
    let db_path = setup_test_db("db_no_flags");
    init_test_db(&db_path);

    pl().args(["--db", &db_path, "db"])
        .assert()
        .success()
        .stdout(contains("Nothing to do"));
}
