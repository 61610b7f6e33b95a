use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_test_db, pl, setup_test_db, write_punch_file};

fn count_sessions(db_path: &str) -> i64 {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.query_row("SELECT COUNT(*) FROM sessions", [], |row| row.get(0))
        .expect("count")
}

#[test]
fn test_import_builds_paired_fallback_and_leave_sessions() {
    let db_path = setup_test_db("import_builds");
    init_test_db(&db_path);

    // day 1: even group -> paired + interior leave; day 2: odd group -> fallback
    let punch_file = write_punch_file(
        "import_builds",
        "00000010 14040601 07:31 01\n\
         00000010 14040601 12:00 02\n\
         00000010 14040601 12:45 01\n\
         00000010 14040601 16:38 02\n\
         00000010 14040602 07:40 01\n\
         00000010 14040602 12:10 02\n\
         00000010 14040602 16:30 01\n",
    );

    pl().args(["--db", &db_path, "import", &punch_file])
        .assert()
        .success()
        .stdout(contains("Imported month 140406"));

    pl().args(["--db", &db_path, "list", "--id", "00000010"])
        .assert()
        .success()
        .stdout(contains("14040601"))
        .stdout(contains("07:31"))
        .stdout(contains("16:38"))
        .stdout(contains("Leave"))
        .stdout(contains("12:00"))
        .stdout(contains("Fallback"))
        .stdout(contains("14040602"));

    // 1 paired + 1 leave + 1 fallback
    assert_eq!(count_sessions(&db_path), 3);
}

#[test]
fn test_reimport_of_same_month_is_skipped() {
    let db_path = setup_test_db("reimport_skipped");
    init_test_db(&db_path);

    let punch_file = write_punch_file(
        "reimport_skipped",
        "00000010 14040601 07:31 01\n00000010 14040601 16:38 02\n",
    );

    pl().args(["--db", &db_path, "import", &punch_file])
        .assert()
        .success();
    let before = count_sessions(&db_path);

    pl().args(["--db", &db_path, "import", &punch_file])
        .assert()
        .success()
        .stdout(contains("already imported"));

    assert_eq!(count_sessions(&db_path), before);
}

#[test]
fn test_import_initializes_month_schedules() {
    let db_path = setup_test_db("import_schedules");
    init_test_db(&db_path);

    let punch_file = write_punch_file(
        "import_schedules",
        "00000010 14040601 07:31 01\n00000010 14040601 16:38 02\n",
    );

    // month 6 has 31 days on the civil calendar
    pl().args(["--db", &db_path, "import", &punch_file])
        .assert()
        .success()
        .stdout(contains("31 schedule day(s) initialized"));

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let n: i64 = conn
        .query_row("SELECT COUNT(*) FROM work_schedules", [], |row| row.get(0))
        .expect("count");
    assert_eq!(n, 31);
}

#[test]
fn test_multi_month_file_is_rejected() {
    let db_path = setup_test_db("multi_month");
    init_test_db(&db_path);

    let punch_file = write_punch_file(
        "multi_month",
        "00000010 14040601 07:31 01\n00000010 14040701 07:31 01\n",
    );

    pl().args(["--db", &db_path, "import", &punch_file])
        .assert()
        .failure()
        .stderr(contains("spans multiple months"));

    assert_eq!(count_sessions(&db_path), 0);
}

#[test]
fn test_malformed_line_aborts_whole_import() {
    let db_path = setup_test_db("malformed_line");
    init_test_db(&db_path);

    let punch_file = write_punch_file(
        "malformed_line",
        "00000010 14040601 07:31 01\n00000010 14040601 25:00 01\n",
    );

    pl().args(["--db", &db_path, "import", &punch_file])
        .assert()
        .failure()
        .stderr(contains("Invalid punch line 2"));

    // nothing committed
    assert_eq!(count_sessions(&db_path), 0);
}

#[test]
fn test_invalid_civil_date_names_the_line() {
    let db_path = setup_test_db("invalid_civil_date");
    init_test_db(&db_path);

    // month 7 has 30 days
    let punch_file = write_punch_file("invalid_civil_date", "00000010 14040731 07:31 01\n");

    pl().args(["--db", &db_path, "import", &punch_file])
        .assert()
        .failure()
        .stderr(contains("Invalid punch line 1").and(contains("14040731")));
}

#[test]
fn test_empty_punch_file_is_rejected() {
    let db_path = setup_test_db("empty_file");
    init_test_db(&db_path);

    let punch_file = write_punch_file("empty_file", "");

    pl().args(["--db", &db_path, "import", &punch_file])
        .assert()
        .failure()
        .stderr(contains("No valid punch dates"));
}
