pub mod classify;
pub mod db;
pub mod edit;
pub mod exception;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod report;
pub mod schedule;
