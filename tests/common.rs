#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pl() -> Command {
    cargo_bin_cmd!("punchlog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punchlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a punch file into the temp dir and return its path
pub fn write_punch_file(name: &str, contents: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punches.txt", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, contents).expect("write punch file");
    p
}

/// Initialize the schema for a test DB
pub fn init_test_db(db_path: &str) {
    pl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Flag a range of days of a month as holidays directly via the library,
/// so report/classify tests only deal with the days they set up punches for
pub fn mark_holidays(db_path: &str, year: u16, month: u8, days: impl Iterator<Item = u8>) {
    use punchlog::db::queries::upsert_schedule;
    use punchlog::models::ids::CivilDate;
    use punchlog::models::schedule::WorkSchedule;

    let conn = rusqlite::Connection::open(db_path).expect("open db");
    for day in days {
        let date = CivilDate::from_parts(year, month, day).expect("valid date");
        upsert_schedule(
            &conn,
            &WorkSchedule {
                date,
                entry: "07:30".to_string(),
                exit: "16:30".to_string(),
                floating_hours: 1.0,
                late_allowed: false,
                is_holiday: true,
            },
        )
        .expect("upsert schedule");
    }
}

/// Two punch days for person 00000010 in month 140406:
/// - 14040601: even group -> paired 07:31-16:38 plus a 45 min interior leave
/// - 14040602: late entry (30 min past the window) and early exit (90 min)
pub const TWO_DAY_PUNCHES: &str = "\
00000010 14040601 07:31 01
00000010 14040601 09:00 02
00000010 14040601 09:45 01
00000010 14040601 16:38 02
00000010 14040602 09:00 01
00000010 14040602 16:00 02
";

/// Import TWO_DAY_PUNCHES and flag every other day of the month as holiday
pub fn seed_two_day_month(name: &str, db_path: &str) {
    init_test_db(db_path);
    let punch_file = write_punch_file(name, TWO_DAY_PUNCHES);
    pl().args(["--db", db_path, "import", &punch_file])
        .assert()
        .success();
    mark_holidays(db_path, 1404, 6, 3..=31);
}
