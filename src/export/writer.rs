use super::ReportRow;
use crate::errors::AppResult;
use csv::Writer;
use std::path::Path;

pub fn write_report(path: &Path, rows: &[ReportRow]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([
        "ID",
        "Date",
        "Entry",
        "Exit",
        "Status",
        "Duration(min)",
        "Mode",
        "Reason",
        "Total Impermissible",
        "Total Announced",
        "Total Other",
    ])?;

    for row in rows {
        wtr.write_record(&[
            row.person.clone(),
            row.date.clone(),
            row.entry.clone(),
            row.exit.clone(),
            row.status.clone(),
            row.minutes.to_string(),
            row.mode.clone(),
            row.reason.clone(),
            row.totals.impermissible.to_string(),
            row.totals.announced.to_string(),
            row.totals.other.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
