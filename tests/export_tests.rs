use predicates::str::contains;
use std::fs;

mod common;
use common::{init_test_db, pl, seed_two_day_month, setup_test_db, temp_out};

fn classify_all(db_path: &str) {
    pl().args([
        "--db",
        db_path,
        "classify",
        "--id",
        "00000010",
        "--reason",
        "0=announced",
        "--reason",
        "1=impermissible",
        "--reason",
        "2=impermissible",
    ])
    .assert()
    .success();
}

#[test]
fn test_export_refuses_unclassified_events() {
    let db_path = setup_test_db("export_unclassified");
    seed_two_day_month("export_unclassified", &db_path);

    let out = temp_out("export_unclassified", "csv");
    pl().args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("missing a reason"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_writes_classified_report() {
    let db_path = setup_test_db("export_classified");
    seed_two_day_month("export_classified", &db_path);
    classify_all(&db_path);

    let out = temp_out("export_classified", "csv");
    pl().args(["--db", &db_path, "export", "--file", &out, "--id", "00000010"])
        .assert()
        .success()
        .stdout(contains("Exported 3 row(s)"));

    let content = fs::read_to_string(&out).expect("read csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        "ID,Date,Entry,Exit,Status,Duration(min),Mode,Reason,\
         Total Impermissible,Total Announced,Total Other"
    );
    assert_eq!(
        lines[1],
        "00000010,14040601,09:00,09:45,Leave,45,Paired,Announced,120,45,0"
    );
    assert_eq!(
        lines[2],
        "00000010,14040602,09:00,16:00,Early Exit,90,Paired,Impermissible,120,45,0"
    );
    assert_eq!(
        lines[3],
        "00000010,14040602,09:00,16:00,Late Entry,30,Paired,Impermissible,120,45,0"
    );
}

#[test]
fn test_export_without_id_covers_every_person() {
    let db_path = setup_test_db("export_all_persons");
    seed_two_day_month("export_all_persons", &db_path);
    classify_all(&db_path);

    let out = temp_out("export_all_persons", "csv");
    pl().args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Exported 3 row(s)"));
}

#[test]
fn test_export_refuses_existing_file_without_force() {
    let db_path = setup_test_db("export_force");
    seed_two_day_month("export_force", &db_path);
    classify_all(&db_path);

    let out = temp_out("export_force", "csv");
    fs::write(&out, "stale").expect("write stale file");

    pl().args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    pl().args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read csv");
    assert!(content.starts_with("ID,Date"));
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative");
    seed_two_day_month("export_relative", &db_path);
    classify_all(&db_path);

    pl().args(["--db", &db_path, "export", "--file", "report.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_rejects_missing_directory() {
    let db_path = setup_test_db("export_missing_dir");
    seed_two_day_month("export_missing_dir", &db_path);
    classify_all(&db_path);

    let mut out = std::env::temp_dir();
    out.push("punchlog_no_such_dir");
    out.push("report.csv");
    let out = out.to_string_lossy().to_string();

    pl().args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("Directory does not exist"));
}

#[test]
fn test_export_with_no_sessions_fails() {
    let db_path = setup_test_db("export_empty_db");
    init_test_db(&db_path);

    let out = temp_out("export_empty_db", "csv");
    pl().args(["--db", &db_path, "export", "--file", &out, "--id", "00000010"])
        .assert()
        .failure()
        .stderr(contains("No sessions found"));
}
