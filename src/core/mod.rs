pub mod backfill;
pub mod evaluate;
pub mod import;
pub mod ingest;
pub mod report;
pub mod schedule;
pub mod sessions;
