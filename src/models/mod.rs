pub mod event;
pub mod ids;
pub mod punch;
pub mod schedule;
pub mod session;
